use crate::domain::{parse_search_results, SearchResult};

use super::{LinkedinClient, ServiceError};

pub struct SearchService {
    linkedin: LinkedinClient,
}

impl SearchService {
    pub fn new(linkedin: LinkedinClient) -> Self {
        SearchService { linkedin }
    }

    pub async fn search(
        &self,
        query: &str,
        session_cookie: &str,
        proxy: Option<&str>,
    ) -> Result<Vec<SearchResult>, ServiceError> {
        let client = self
            .linkedin
            .build_client(proxy, true)
            .map_err(|e| ServiceError::new("failed to build HTTP client", e))?;

        let session = self
            .linkedin
            .acquire_csrf_session(&client, session_cookie)
            .await
            .map_err(|e| ServiceError::new("failed to acquire CSRF token", e))?;

        let api_response = self
            .linkedin
            .call_typeahead(&client, query, session_cookie, &session)
            .await
            .map_err(|e| ServiceError::new("failed to call LinkedIn search API", e))?;

        let results = parse_search_results(&api_response)
            .map_err(|e| ServiceError::new("failed to parse search results", e))?;

        log::info!("Found {} companies for query: {}", results.len(), query);
        Ok(results)
    }
}
