use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::services::{CompanyService, LinkedinClient, ServiceError};

use super::{bad_request, proxy, session_cookie};

#[get("/company/{slug}")]
async fn scrape_company(
    req: HttpRequest,
    slug: web::Path<String>,
    company_service: web::Data<CompanyService<LinkedinClient>>,
) -> Result<HttpResponse, ServiceError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Ok(bad_request("Company slug cannot be empty"));
    }

    let enrichment = company_service
        .enrich(slug, session_cookie(&req), proxy(&req))
        .await
        .inspect_err(|e| log::error!("Error from company service: {}", e))?;

    Ok(HttpResponse::Ok().json(enrichment))
}
