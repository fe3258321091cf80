use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::services::{AuthService, LinkedinClient, ServiceError};

use super::{bad_request, proxy, session_cookie, SESSION_COOKIE_HEADER};

#[get("/auth/validate")]
async fn validate_auth(
    req: HttpRequest,
    auth_service: web::Data<AuthService<LinkedinClient>>,
) -> Result<HttpResponse, ServiceError> {
    let cookie = session_cookie(&req);
    if cookie.is_empty() {
        return Ok(bad_request(&format!(
            "Header '{}' is required",
            SESSION_COOKIE_HEADER
        )));
    }

    let valid = auth_service
        .validate_session(cookie, proxy(&req))
        .await
        .inspect_err(|e| log::error!("Error during session validation: {}", e))?;

    Ok(HttpResponse::Ok().json(json!({ "valid": valid })))
}
