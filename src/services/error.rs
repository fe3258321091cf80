use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::ScrapeError;

const MAX_BODY_IN_DETAILS: usize = 512;

/// Failure of a service call: a short summary plus the scrape error behind it.
#[derive(thiserror::Error, Debug)]
#[error("{message}: {source}")]
pub struct ServiceError {
    message: String,
    #[source]
    source: ScrapeError,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_status: Option<u16>,
}

impl ServiceError {
    pub fn new(message: impl Into<String>, source: ScrapeError) -> Self {
        ServiceError {
            message: message.into(),
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn scrape_error(&self) -> &ScrapeError {
        &self.source
    }

    pub fn upstream_status(&self) -> Option<u16> {
        self.source.upstream_status()
    }

    /// Underlying cause, with a prefix of the upstream body when there is one.
    pub fn details(&self) -> String {
        match &self.source {
            ScrapeError::BadStatus { body, .. } if !body.is_empty() => {
                let snippet: String = body.chars().take(MAX_BODY_IN_DETAILS).collect();
                format!("{}, content: {}", self.source, snippet)
            }
            source => source.to_string(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: &self.message,
            details: self.details(),
            upstream_status: self.upstream_status(),
        })
    }
}
