use serde::Serialize;
use serde_json::Value;

use super::{
    json_path::{safe_get_array, safe_get_str},
    scrape_error::ScrapeError,
};

const ENTITY_SUGGESTION: &str = "ENTITY_TYPEAHEAD";
const COMPANY_URN_PREFIX: &str = "urn:li:company:";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub text: String,
}

impl SearchResult {
    fn from_element(element: &Value) -> Option<Self> {
        if !element.is_object() || safe_get_str(element, &["suggestionType"]) != ENTITY_SUGGESTION
        {
            return None;
        }

        let id = safe_get_str(element, &["entityLockupView", "trackingUrn"])
            .strip_prefix(COMPANY_URN_PREFIX)?;

        Some(SearchResult {
            id: id.to_string(),
            name: safe_get_str(element, &["entityLockupView", "title", "text"]).to_string(),
            text: safe_get_str(element, &["entityLockupView", "subtitle", "text"]).to_string(),
        })
    }
}

/// Keeps only company suggestions of a typeahead response, in response order.
pub fn parse_search_results(api_response: &[u8]) -> Result<Vec<SearchResult>, ScrapeError> {
    let response: Value =
        serde_json::from_slice(api_response).map_err(ScrapeError::SearchPayload)?;

    let results = safe_get_array(
        &response,
        &["data", "data", "searchDashTypeaheadByGlobalTypeahead", "elements"],
    )
    .into_iter()
    .flatten()
    .filter_map(SearchResult::from_element)
    .collect();

    Ok(results)
}
