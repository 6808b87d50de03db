use bp_core::{Error, Result};
use std::net::SocketAddr;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const NEWSAPI_KEY: &str = "NEWSAPI_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const NEWSAPI_BASE_URL: &str = "NEWSAPI_BASE_URL";
pub const BIND_ADDR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Everything the process reads from its environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inference: bp_inference::Config,
    pub news: bp_news::Config,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| Error::Config(format!("{} environment variable is not set", key)))
        };

        let openai_key = require(OPENAI_API_KEY)?;
        let newsapi_key = require(NEWSAPI_KEY)?;

        let mut inference = bp_inference::Config::new(openai_key);
        if let Some(model) = get(OPENAI_MODEL) {
            inference = inference.with_model(model);
        }
        if let Some(url) = get(OPENAI_BASE_URL) {
            inference = inference.with_base_url(&url)?;
        }

        let mut news = bp_news::Config::new(newsapi_key);
        if let Some(url) = get(NEWSAPI_BASE_URL) {
            news = news.with_base_url(&url)?;
        }

        let bind = get(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("invalid {} '{}': {}", BIND_ADDR, bind, e)))?;

        Ok(Self {
            inference,
            news,
            bind_addr,
        })
    }
}
