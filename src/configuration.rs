use std::time::Duration;

use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub linkedin: LinkedinSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LinkedinSettings {
    pub base_url: String,
    #[serde(default)]
    pub user_agent: String,
    pub accept_language: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub proxies: Vec<String>,
    pub typeahead_query_id: String,
}

impl LinkedinSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn user_agent(&self) -> String {
        match self.user_agent.trim() {
            "" => fake_user_agent::get_chrome_rua().to_string(),
            ua => ua.to_string(),
        }
    }

    /// Falls back to a random entry of the proxy pool when the caller gives none.
    pub fn pick_proxy(&self, requested: Option<&str>) -> Option<String> {
        match requested.map(str::trim) {
            Some(proxy) if !proxy.is_empty() => Some(proxy.to_string()),
            _ => self.proxies.choose(&mut rand::thread_rng()).cloned(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
