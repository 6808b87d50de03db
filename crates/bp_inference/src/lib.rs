use bp_core::{Error, Result};
use std::fmt;
use url::Url;

pub mod models;
pub mod pipeline;

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model_name: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_name: DEFAULT_MODEL.to_string(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid generation service URL '{}': {}", base_url, e)))?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use super::pipeline::PostGenerator;
    pub use bp_core::{CompletionRequest, Error, GeneratedPost, Result, Stage};
}

pub use models::create_model;
pub use pipeline::PostGenerator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("key");
        assert_eq!(config.model_name, "gpt-3.5-turbo");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_config_base_url_is_validated() {
        assert!(Config::new("key").with_base_url("::nope").is_err());

        let config = Config::new("key").with_base_url("http://localhost:8080/v1/").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }
}
