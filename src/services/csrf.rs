use reqwest::{
    header::{ACCEPT, COOKIE},
    Client,
};
use url::{form_urlencoded, Url};

use crate::domain::ScrapeError;

use super::{LinkedinClient, SESSION_COOKIE};

pub const CSRF_COOKIE: &str = "JSESSIONID";
const CSRF_HEADER: &str = "csrf-token";
const VOYAGER_ACCEPT: &str = "application/vnd.linkedin.normalized+json+2.1";

#[derive(Debug, Clone, PartialEq)]
pub struct CsrfSession {
    /// `JSESSIONID` without its surrounding quotes.
    pub token: String,
    /// Raw cookie value as LinkedIn set it, replayed verbatim.
    pub jsessionid: String,
}

impl CsrfSession {
    pub fn from_cookie_value(raw: &str) -> Self {
        CsrfSession {
            token: raw.trim_matches('"').to_string(),
            jsessionid: raw.to_string(),
        }
    }
}

impl LinkedinClient {
    /// Primes the session on `/feed/` and reads the `JSESSIONID` cookie LinkedIn hands back.
    pub async fn acquire_csrf_session(
        &self,
        client: &Client,
        session_cookie: &str,
    ) -> Result<CsrfSession, ScrapeError> {
        let url = self.feed_url();
        log::info!("Attempting to acquire CSRF token via {}", url);

        let res = self
            .get(client, &url)
            .header(COOKIE, format!("{}={}", SESSION_COOKIE, session_cookie))
            .send()
            .await
            .map_err(|e| ScrapeError::transport(&url, e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(ScrapeError::BadStatus {
                url,
                status: status.as_u16(),
                body: res.text().await.unwrap_or_default(),
            });
        }

        let session = res
            .cookies()
            .find(|cookie| cookie.name() == CSRF_COOKIE)
            .map(|cookie| CsrfSession::from_cookie_value(cookie.value()))
            .ok_or(ScrapeError::MissingCsrfCookie)?;

        log::info!("CSRF token acquired");
        Ok(session)
    }

    pub fn typeahead_url(&self, query: &str) -> Result<Url, ScrapeError> {
        let endpoint = format!("{}/voyager/api/graphql", self.base_url());
        let mut url = Url::parse(&endpoint).map_err(|source| ScrapeError::InvalidUrl {
            url: endpoint.clone(),
            source,
        })?;

        let term: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        url.set_query(Some(&format!(
            "includeWebMetadata=true&variables=(query:{})&queryId={}",
            term,
            self.settings().typeahead_query_id
        )));

        Ok(url)
    }

    pub async fn call_typeahead(
        &self,
        client: &Client,
        query: &str,
        session_cookie: &str,
        session: &CsrfSession,
    ) -> Result<Vec<u8>, ScrapeError> {
        let url = self.typeahead_url(query)?;
        log::info!("Calling typeahead search for query: {}", query);

        let res = self
            .get(client, url.as_str())
            .header(ACCEPT, VOYAGER_ACCEPT)
            .header(CSRF_HEADER, &session.token)
            .header(
                COOKIE,
                format!(
                    "{}={}; {}={}",
                    SESSION_COOKIE, session_cookie, CSRF_COOKIE, session.jsessionid
                ),
            )
            .send()
            .await
            .map_err(|e| ScrapeError::transport(url.as_str(), e))?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|e| ScrapeError::transport(url.as_str(), e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            log::error!("Search API returned {}: {}", status, body);
            return Err(ScrapeError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::configuration::LinkedinSettings;

    use super::*;

    fn client() -> LinkedinClient {
        LinkedinClient::new(LinkedinSettings {
            base_url: "https://www.linkedin.com/".to_string(),
            user_agent: "test-agent".to_string(),
            accept_language: "en-US".to_string(),
            timeout_secs: 5,
            proxies: vec![],
            typeahead_query_id: "voyagerSearchDashTypeahead.abc".to_string(),
        })
    }

    #[test]
    fn token_strips_quotes_but_cookie_is_replayed_raw() {
        let session = CsrfSession::from_cookie_value("\"ajax:1234567890\"");
        assert_eq!(session.token, "ajax:1234567890");
        assert_eq!(session.jsessionid, "\"ajax:1234567890\"");
    }

    #[test]
    fn typeahead_url_embeds_query_in_variables() {
        let url = client().typeahead_url("acme & co").unwrap();

        assert_eq!(url.path(), "/voyager/api/graphql");
        assert_eq!(
            url.query(),
            Some(
                "includeWebMetadata=true&variables=(query:acme+%26+co)&queryId=voyagerSearchDashTypeahead.abc"
            )
        );
    }
}
