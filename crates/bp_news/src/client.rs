use async_trait::async_trait;
use bp_core::{Error, HeadlineSource, NewsArticle, Result, NO_RECENT_NEWS};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

const NEWSAPI_URL: &str = "https://newsapi.org";

// newsapi.org rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("bp_news/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: NEWSAPI_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid news service URL '{}': {}", base_url, e)))?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

pub struct NewsApiClient {
    client: Client,
    config: Config,
}

impl NewsApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    /// All articles NewsAPI returns for the topic, in the order it returns them.
    pub async fn search(&self, topic: &str) -> Result<Vec<NewsArticle>> {
        let url = format!("{}/v2/everything", self.config.base_url);
        debug!(topic, "Searching news");

        let response = self
            .client
            .get(&url)
            .query(&[("q", topic)])
            .header("X-Api-Key", self.config.api_key.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e.without_url(), "News request failed");
                Error::NewsService
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "News service returned an error");
            return Err(Error::NewsService);
        }

        let payload: SearchResponse = response.json().await.map_err(|e| {
            warn!(error = %e.without_url(), "News response could not be decoded");
            Error::NewsService
        })?;

        debug!(topic, count = payload.articles.len(), "News search finished");
        if let Some(top) = payload.articles.first() {
            debug!(
                source = top.source.as_deref().unwrap_or("unknown"),
                url = top.url.as_deref().unwrap_or(""),
                published_at = ?top.published_at,
                "Top article"
            );
        }
        Ok(payload.articles)
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_headline(&self, topic: &str) -> Result<String> {
        let articles = self.search(topic).await?;
        match articles.into_iter().next() {
            Some(article) => Ok(article.title),
            None => Ok(NO_RECENT_NEWS.to_string()),
        }
    }
}
