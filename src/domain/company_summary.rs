use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{
    json_path::{
        safe_get, safe_get_array, safe_get_bool, safe_get_i64, safe_get_opt_str, safe_get_str,
    },
    scrape_error::ScrapeError,
};

const COMPANY_PAGE_TYPE: &str = "COMPANY";

/// Normalized company profile built from an authenticated page.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub name: String,
    pub linkedin_handle: String,
    pub linkedin_profile_url: String,
    pub external_id: String,
    pub website: String,
    pub tagline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<Location>,
    pub office_locations: Vec<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_summary: Option<FundingSummary>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Location {
    pub is_headquarters: bool,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

impl Location {
    fn from_address(address: &Value, is_headquarters: bool) -> Self {
        Location {
            is_headquarters,
            city: safe_get_str(address, &["city"]).to_string(),
            state: safe_get_str(address, &["geographicArea"]).to_string(),
            country: safe_get_str(address, &["country"]).to_string(),
            postal_code: safe_get_str(address, &["postalCode"]).to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FundingSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rounds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crunchbase_profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crunchbase_funding_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_last_updated_utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_round: Option<FundingRound>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FundingRound {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announced_on: Option<String>,
}

/// Finds the `COMPANY` entry of the `included` array and flattens it.
///
/// Only a missing `included` array or a missing company entry fail; every
/// other field is best effort and left empty or omitted.
pub fn create_summary(fragment: &Value) -> Result<CompanySummary, ScrapeError> {
    let included = safe_get_array(fragment, &["included"]).ok_or(ScrapeError::MissingIncluded)?;

    let company = included
        .iter()
        .find(|item| item.is_object() && safe_get_str(item, &["pageType"]) == COMPANY_PAGE_TYPE)
        .ok_or(ScrapeError::MissingCompanyEntry)?;

    Ok(CompanySummary {
        name: safe_get_str(company, &["name"]).to_string(),
        linkedin_handle: safe_get_str(company, &["universalName"]).to_string(),
        linkedin_profile_url: safe_get_str(company, &["url"]).to_string(),
        external_id: safe_get_str(company, &["entityUrn"]).to_string(),
        website: safe_get_str(company, &["websiteUrl"]).to_string(),
        tagline: safe_get_str(company, &["tagline"]).to_string(),
        description: safe_get_str(company, &["description"]).to_string(),
        founded_year: safe_get_i64(company, &["foundedOn", "year"]),
        specialities: extract_specialities(company),
        employee_count_range: extract_employee_count_range(company),
        headquarters: extract_headquarters(company),
        office_locations: extract_office_locations(company),
        funding_summary: extract_funding_summary(company),
    })
}

fn extract_specialities(company: &Value) -> Option<Vec<String>> {
    safe_get_array(company, &["specialities"]).map(|items| {
        items
            .iter()
            .filter_map(|s| s.as_str().map(str::to_string))
            .collect()
    })
}

fn extract_employee_count_range(company: &Value) -> Option<String> {
    let start = safe_get_i64(company, &["employeeCountRange", "start"])?;
    let end = safe_get_i64(company, &["employeeCountRange", "end"])?;
    Some(format!("{}-{}", start, end))
}

fn extract_headquarters(company: &Value) -> Option<Location> {
    safe_get(company, &["headquarter", "address"])
        .filter(|address| address.is_object())
        .map(|address| Location::from_address(address, true))
}

/// One entry per location group, summarized by the group's first location.
fn extract_office_locations(company: &Value) -> Vec<Location> {
    safe_get_array(company, &["groupedLocations"])
        .into_iter()
        .flatten()
        .filter_map(|group| safe_get_array(group, &["locations"])?.first())
        .filter_map(|location| {
            let address = safe_get(location, &["address"]).filter(|a| a.is_object())?;
            let is_headquarters = safe_get_bool(location, &["headquarter"]).unwrap_or(false);
            Some(Location::from_address(address, is_headquarters))
        })
        .collect()
}

fn extract_funding_summary(company: &Value) -> Option<FundingSummary> {
    let funding = safe_get(company, &["crunchbaseFundingData"]).filter(|f| f.is_object())?;

    Some(FundingSummary {
        total_rounds: safe_get_i64(funding, &["numberOfFundingRounds"]),
        crunchbase_profile_url: safe_get_opt_str(funding, &["organizationUrl"]),
        crunchbase_funding_url: safe_get_opt_str(funding, &["fundingRoundsUrl"]),
        data_last_updated_utc: safe_get_i64(funding, &["updatedAt"]).and_then(format_epoch_utc),
        last_round: safe_get(funding, &["lastFundingRound"])
            .filter(|round| round.is_object())
            .map(|round| FundingRound {
                funding_type: safe_get_opt_str(round, &["localizedFundingType"]),
                announced_on: format_announced_on(round),
            }),
    })
}

fn format_epoch_utc(seconds: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// `YYYY-MM-DD`, only when the date is complete.
fn format_announced_on(round: &Value) -> Option<String> {
    let year = safe_get_i64(round, &["announcedOn", "year"])?;
    let month = safe_get_i64(round, &["announcedOn", "month"])?;
    let day = safe_get_i64(round, &["announcedOn", "day"])?;
    Some(format!("{}-{:02}-{:02}", year, month, day))
}
