#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("bad status code {status} from {url}")]
    BadStatus {
        url: String,
        status: u16,
        body: String,
    },
    #[error("invalid proxy url {proxy}: {source}")]
    InvalidProxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("JSESSIONID cookie not found")]
    MissingCsrfCookie,
    #[error("no valid company JSON object found in the HTML")]
    NoValidFragment,
    #[error("could not find the ld+json script tag in the HTML")]
    MissingLdJson,
    #[error("error parsing ld+json data: {0}")]
    LdJsonParse(#[source] serde_json::Error),
    #[error("no 'Organization' profile found in ld+json data")]
    NoOrganization,
    #[error("'included' field is not a valid array")]
    MissingIncluded,
    #[error("could not find company data object in 'included' array")]
    MissingCompanyEntry,
    #[error("failed to unmarshal search response: {0}")]
    SearchPayload(#[source] serde_json::Error),
}

impl ScrapeError {
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        ScrapeError::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// Status code returned by LinkedIn, when the failure carries one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ScrapeError::BadStatus { status, .. } => Some(*status),
            ScrapeError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
