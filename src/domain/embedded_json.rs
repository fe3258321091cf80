use scraper::{Html, Selector};
use serde_json::Value;

use super::{json_path::safe_get_object, scrape_error::ScrapeError};

const EMBEDDED_BLOCK_SELECTOR: &str = r#"code[id^="bpr-guid"]"#;
const COMPANY_KEYS: [&str; 2] = [
    "organizationDashCompaniesByUniversalName",
    "*organizationDashCompaniesByIds",
];

/// Structural check only: `data.data` must hold one of the company collections.
pub fn is_company_fragment(fragment: &Value) -> bool {
    safe_get_object(fragment, &["data", "data"])
        .map(|inner| COMPANY_KEYS.iter().any(|key| inner.contains_key(*key)))
        .unwrap_or(false)
}

/// Scans the hydration `<code>` blocks of an authenticated company page and
/// returns the last one that parses and carries company data.
pub fn extract_company_json(html_content: &str) -> Result<Value, ScrapeError> {
    let document = Html::parse_document(html_content);
    let selector =
        Selector::parse(EMBEDDED_BLOCK_SELECTOR).expect("embedded block selector is valid");

    let mut valid_results: Vec<Value> = document
        .select(&selector)
        .map(|tag| tag.text().collect::<String>())
        .filter(|raw| !raw.trim().is_empty())
        .filter_map(|raw| serde_json::from_str::<Value>(&raw).ok())
        .filter(is_company_fragment)
        .collect();

    if valid_results.len() > 1 {
        // Last-wins is provisional until we know which block LinkedIn treats as freshest.
        log::warn!(
            "Found {} valid JSON objects. Returning the last one",
            valid_results.len()
        );
    }
    log::info!("Found {} valid JSON objects in the HTML", valid_results.len());

    valid_results.pop().ok_or(ScrapeError::NoValidFragment)
}
