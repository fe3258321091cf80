use reqwest::{
    header::{ACCEPT_LANGUAGE, COOKIE},
    redirect, Client,
};

use url::Url;

use crate::{configuration::LinkedinSettings, domain::ScrapeError};

pub const SESSION_COOKIE: &str = "li_at";

/// `{base_url}/company/{slug}` with the slug encoded as a single path segment.
pub fn company_url(base_url: &str, slug: &str) -> Result<String, ScrapeError> {
    let invalid = |source: url::ParseError| ScrapeError::InvalidUrl {
        url: base_url.to_string(),
        source,
    };
    let mut url = Url::parse(base_url).map_err(invalid)?;
    url.path_segments_mut()
        .map_err(|_| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push("company")
        .push(slug);

    Ok(url.to_string())
}

#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(
        &self,
        url: &str,
        session_cookie: &str,
        proxy: Option<&str>,
    ) -> Result<String, ScrapeError>;

    /// Status of the authenticated landing page, without following redirects.
    async fn probe(&self, session_cookie: &str, proxy: Option<&str>) -> Result<u16, ScrapeError>;
}

#[derive(Clone, Debug)]
pub struct LinkedinClient {
    settings: LinkedinSettings,
}

impl LinkedinClient {
    pub fn new(settings: LinkedinSettings) -> Self {
        LinkedinClient { settings }
    }

    pub fn base_url(&self) -> &str {
        self.settings.base_url.trim_end_matches('/')
    }

    pub fn settings(&self) -> &LinkedinSettings {
        &self.settings
    }

    pub fn feed_url(&self) -> String {
        format!("{}/feed/", self.base_url())
    }

    pub fn build_client(
        &self,
        proxy: Option<&str>,
        follow_redirects: bool,
    ) -> Result<Client, ScrapeError> {
        let redirect_policy = match follow_redirects {
            true => redirect::Policy::default(),
            false => redirect::Policy::none(),
        };

        let mut builder = Client::builder()
            .user_agent(self.settings.user_agent())
            .timeout(self.settings.timeout())
            .redirect(redirect_policy);

        builder = match self.settings.pick_proxy(proxy) {
            Some(proxy) => {
                let proxy_config = reqwest::Proxy::all(&proxy)
                    .map_err(|source| ScrapeError::InvalidProxy { proxy, source })?;
                builder.proxy(proxy_config)
            }
            None => builder.no_proxy(),
        };

        builder
            .build()
            .map_err(|e| ScrapeError::transport(self.base_url(), e))
    }

    pub(crate) fn get(&self, client: &Client, url: &str) -> reqwest::RequestBuilder {
        client
            .get(url)
            .header(ACCEPT_LANGUAGE, &self.settings.accept_language)
    }
}

impl Fetcher for LinkedinClient {
    async fn fetch(
        &self,
        url: &str,
        session_cookie: &str,
        proxy: Option<&str>,
    ) -> Result<String, ScrapeError> {
        let client = self.build_client(proxy, true)?;

        let mut request = self.get(&client, url);
        if !session_cookie.is_empty() {
            request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, session_cookie));
        }

        let res = request
            .send()
            .await
            .map_err(|e| ScrapeError::transport(url, e))?;

        let status = res.status();
        if !status.is_success() {
            log::error!("Fetching {} returned status {}", url, status);
            return Err(ScrapeError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body: String::new(),
            });
        }

        res.text().await.map_err(|e| ScrapeError::transport(url, e))
    }

    async fn probe(&self, session_cookie: &str, proxy: Option<&str>) -> Result<u16, ScrapeError> {
        let url = self.feed_url();
        let client = self.build_client(proxy, false)?;

        let res = self
            .get(&client, &url)
            .header(COOKIE, format!("{}={}", SESSION_COOKIE, session_cookie))
            .send()
            .await
            .map_err(|e| ScrapeError::transport(&url, e))?;

        log::info!("Session probe returned status {}", res.status());
        Ok(res.status().as_u16())
    }
}
