use serde::Serialize;

use crate::domain::{
    create_summary, extract_company_json, extract_ld_json_profile, CompanySummary, PublicProfile,
    ScrapeType,
};

use super::{company_url, Fetcher, ServiceError};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompanyData {
    Full(CompanySummary),
    Public(PublicProfile),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrichment {
    #[serde(rename = "scrapeType")]
    pub scrape_type: ScrapeType,
    pub data: CompanyData,
}

pub struct CompanyService<F> {
    fetcher: F,
    base_url: String,
}

impl<F: Fetcher> CompanyService<F> {
    pub fn new(fetcher: F, base_url: &str) -> Self {
        CompanyService {
            fetcher,
            base_url: base_url.to_string(),
        }
    }

    pub async fn enrich(
        &self,
        slug: &str,
        session_cookie: &str,
        proxy: Option<&str>,
    ) -> Result<Enrichment, ServiceError> {
        let url = company_url(&self.base_url, slug)
            .map_err(|e| ServiceError::new("failed to build company URL", e))?;

        let html_content = self
            .fetcher
            .fetch(&url, session_cookie, proxy)
            .await
            .map_err(|e| ServiceError::new("failed to fetch HTML", e))?;

        let scrape_type = ScrapeType::for_credential(session_cookie);
        log::info!("Performing {} scrape for {}", scrape_type.as_str(), slug);

        let data = match scrape_type {
            ScrapeType::Full => {
                let fragment = extract_company_json(&html_content).map_err(|e| {
                    ServiceError::new(
                        "failed to parse detailed JSON (is session cookie valid?)",
                        e,
                    )
                })?;
                let summary = create_summary(&fragment)
                    .map_err(|e| ServiceError::new("failed to summarize data", e))?;
                CompanyData::Full(summary)
            }
            ScrapeType::Public => {
                let profile = extract_ld_json_profile(&html_content)
                    .map_err(|e| ServiceError::new("failed to extract public ld+json data", e))?;
                CompanyData::Public(profile)
            }
        };

        Ok(Enrichment { scrape_type, data })
    }
}
