use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

pub mod auth_route;
pub mod company_route;
pub mod default_route;
pub mod search_route;

pub const SESSION_COOKIE_HEADER: &str = "X-Linkedin-Session-Cookie";
pub const PROXY_HEADER: &str = "X-Proxy-Url";

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> &'a str {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .unwrap_or("")
}

fn session_cookie(req: &HttpRequest) -> &str {
    header_value(req, SESSION_COOKIE_HEADER)
}

fn proxy(req: &HttpRequest) -> Option<&str> {
    match header_value(req, PROXY_HEADER) {
        "" => None,
        proxy => Some(proxy),
    }
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}
