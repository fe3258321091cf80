use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeType {
    Full,
    Public,
}

impl ScrapeType {
    pub fn for_credential(session_cookie: &str) -> Self {
        match session_cookie.is_empty() {
            true => ScrapeType::Public,
            false => ScrapeType::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapeType::Full => "full",
            ScrapeType::Public => "public",
        }
    }
}
