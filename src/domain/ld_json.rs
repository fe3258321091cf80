use itertools::Itertools;
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::Value;

use super::{
    json_path::{safe_get_array, safe_get_i64, safe_get_opt_str, safe_get_str},
    scrape_error::ScrapeError,
};

const LD_JSON_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
const ORGANIZATION_TYPE: &str = "Organization";

/// What the anonymous company page exposes through schema.org markup.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PublicProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
}

impl PublicProfile {
    fn from_organization(item: &Value) -> Self {
        PublicProfile {
            name: safe_get_opt_str(item, &["name"]),
            description: safe_get_opt_str(item, &["description"]),
            website: safe_get_opt_str(item, &["sameAs"]),
            slogan: safe_get_opt_str(item, &["slogan"]),
            employee_count: safe_get_i64(item, &["numberOfEmployees", "value"]),
            headquarters: format_headquarters(item),
        }
    }
}

/// "Locality, Region, Country" with absent parts dropped.
fn format_headquarters(item: &Value) -> Option<String> {
    let joined = ["addressLocality", "addressRegion", "addressCountry"]
        .iter()
        .map(|part| safe_get_str(item, &["address", *part]))
        .filter(|part| !part.is_empty())
        .join(", ");

    match joined.is_empty() {
        true => None,
        false => Some(joined),
    }
}

pub fn extract_ld_json_profile(html_content: &str) -> Result<PublicProfile, ScrapeError> {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse(LD_JSON_SELECTOR).expect("ld+json selector is valid");

    let raw_json: String = document
        .select(&selector)
        .next()
        .ok_or(ScrapeError::MissingLdJson)?
        .text()
        .collect();

    let ld_data: Value = serde_json::from_str(&raw_json).map_err(ScrapeError::LdJsonParse)?;

    let organization = safe_get_array(&ld_data, &["@graph"])
        .into_iter()
        .flatten()
        .find(|item| safe_get_str(item, &["@type"]) == ORGANIZATION_TYPE)
        .ok_or(ScrapeError::NoOrganization)?;

    log::info!("Found 'Organization' profile within the ld+json data");

    Ok(PublicProfile::from_organization(organization))
}
