use actix_web::{get, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::services::{SearchService, ServiceError};

use super::{bad_request, proxy, session_cookie, SESSION_COOKIE_HEADER};

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[get("/search")]
async fn search_companies(
    req: HttpRequest,
    query: web::Query<SearchQuery>,
    search_service: web::Data<SearchService>,
) -> Result<HttpResponse, ServiceError> {
    let cookie = session_cookie(&req);
    if cookie.is_empty() {
        return Ok(bad_request(&format!(
            "Header '{}' is required",
            SESSION_COOKIE_HEADER
        )));
    }

    let term = query.q.trim();
    if term.is_empty() {
        return Ok(bad_request("Query parameter 'q' cannot be empty"));
    }

    let results = search_service
        .search(term, cookie, proxy(&req))
        .await
        .inspect_err(|e| log::error!("Error from search service: {}", e))?;

    Ok(HttpResponse::Ok().json(json!({ "results": results })))
}
