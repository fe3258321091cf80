#![allow(dead_code)]

use std::{
    net::TcpListener,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use li_enricher::configuration::LinkedinSettings;

pub const VALID_COOKIE: &str = "valid-li-at";
pub const NO_CSRF_COOKIE: &str = "no-csrf-li-at";

pub const PUBLIC_PAGE: &str = r#"<html><head>
<script type="application/ld+json">{"@context":"http://schema.org","@graph":[
  {"@type":"WebPage","name":"Acme | LinkedIn"},
  {"@type":"Organization","name":"Acme","slogan":"We make everything",
   "numberOfEmployees":{"value":250},
   "address":{"addressLocality":"Dublin","addressCountry":"Ireland"}}
]}</script>
</head><body></body></html>"#;

pub const FULL_PAGE: &str = r#"<html><body>
<code id="bpr-guid-1">{"data":{"data":{"organizationDashCompaniesByUniversalName":{}}},
 "included":[{"pageType":"COMPANY","name":"Stale Acme"}]}</code>
<code id="bpr-guid-2">{"data":{"data":{"organizationDashCompaniesByUniversalName":{}}},
 "included":[{"pageType":"COMPANY","name":"Acme","universalName":"acme",
   "employeeCountRange":{"start":201,"end":500},
   "headquarter":{"address":{"city":"Dublin","country":"IE"}}}]}</code>
</body></html>"#;

pub const TYPEAHEAD_RESPONSE: &str = r#"{"data":{"data":{"searchDashTypeaheadByGlobalTypeahead":{"elements":[
  {"suggestionType":"ENTITY_TYPEAHEAD","entityLockupView":{"trackingUrn":"urn:li:company:1337",
   "title":{"text":"Acme"},"subtitle":{"text":"Company • Manufacturing"}}},
  {"suggestionType":"ENTITY_TYPEAHEAD","entityLockupView":{"trackingUrn":"urn:li:member:9",
   "title":{"text":"Ada Acme"}}}
]}}}}"#;

fn raw_cookies(req: &HttpRequest) -> String {
    req.headers()
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

fn has_cookie(req: &HttpRequest, pair: &str) -> bool {
    raw_cookies(req).split("; ").any(|c| c == pair)
}

/// What the fake LinkedIn saw and handed out.
#[derive(Default)]
pub struct MockState {
    feed_hits: AtomicUsize,
    current_token: Mutex<Option<String>>,
    seen_tokens: Mutex<Vec<String>>,
}

impl MockState {
    pub fn feed_hits(&self) -> usize {
        self.feed_hits.load(Ordering::SeqCst)
    }

    /// `csrf-token` headers received by the search endpoint, in order.
    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().unwrap().clone()
    }
}

pub struct MockLinkedin {
    pub base_url: String,
    pub state: Arc<MockState>,
}

/// Every valid priming request gets a new `JSESSIONID` ("ajax:<hit number>").
async fn feed(req: HttpRequest, state: web::Data<MockState>) -> HttpResponse {
    let hit = state.feed_hits.fetch_add(1, Ordering::SeqCst) + 1;

    if has_cookie(&req, &format!("li_at={}", VALID_COOKIE)) {
        let token = format!("ajax:{}", hit);
        *state.current_token.lock().unwrap() = Some(token.clone());
        HttpResponse::Ok()
            .insert_header((
                "set-cookie",
                format!("JSESSIONID=\"{}\"; Path=/; Secure", token),
            ))
            .body("<html>feed</html>")
    } else if has_cookie(&req, &format!("li_at={}", NO_CSRF_COOKIE)) {
        HttpResponse::Ok().body("<html>feed</html>")
    } else {
        HttpResponse::Found()
            .insert_header(("location", "/login"))
            .finish()
    }
}

async fn login() -> HttpResponse {
    HttpResponse::Ok().body("<html>login wall</html>")
}

async fn company(req: HttpRequest, slug: web::Path<String>) -> HttpResponse {
    if slug.as_str() != "acme" {
        return HttpResponse::NotFound().finish();
    }
    match raw_cookies(&req).is_empty() {
        true => HttpResponse::Ok().body(PUBLIC_PAGE),
        false => HttpResponse::Ok().body(FULL_PAGE),
    }
}

async fn graphql(req: HttpRequest, state: web::Data<MockState>) -> HttpResponse {
    let sent_token = req
        .headers()
        .get("csrf-token")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    state.seen_tokens.lock().unwrap().push(sent_token.clone());

    // Only the token from the latest priming response is accepted.
    let current = state.current_token.lock().unwrap().clone();
    let accepted = match current {
        Some(token) => {
            sent_token == token
                && has_cookie(&req, &format!("li_at={}", VALID_COOKIE))
                && has_cookie(&req, &format!("JSESSIONID=\"{}\"", token))
        }
        None => false,
    };

    if !accepted {
        return HttpResponse::Forbidden().body("CSRF check failed");
    }
    if !req.query_string().contains("variables=(query:acme)") {
        return HttpResponse::BadRequest().body(format!("unexpected query {}", req.query_string()));
    }

    HttpResponse::Ok()
        .content_type("application/json")
        .body(TYPEAHEAD_RESPONSE)
}

/// Stand-in for www.linkedin.com on a random local port.
pub fn spawn_mock_linkedin() -> MockLinkedin {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let state = Arc::new(MockState::default());

    let app_state = web::Data::from(state.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/feed/", web::get().to(feed))
            .route("/login", web::get().to(login))
            .route("/company/{slug}", web::get().to(company))
            .route("/voyager/api/graphql", web::get().to(graphql))
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to listen")
    .run();
    tokio::spawn(server);

    MockLinkedin {
        base_url: format!("http://127.0.0.1:{}", port),
        state,
    }
}

pub fn linkedin_settings(base_url: &str) -> LinkedinSettings {
    LinkedinSettings {
        base_url: base_url.to_string(),
        user_agent: "li-enricher-tests".to_string(),
        accept_language: "en-US,en;q=0.9".to_string(),
        timeout_secs: 5,
        proxies: vec![],
        typeahead_query_id: "voyagerSearchDashTypeahead.test".to_string(),
    }
}

/// Test-side client that never routes local traffic through an ambient proxy.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build test client")
}

/// Runs the application against `linkedin_base_url` and returns its own address.
pub fn spawn_app(linkedin_base_url: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server = li_enricher::startup::run(listener, linkedin_settings(linkedin_base_url))
        .expect("Failed to start application");
    tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}
