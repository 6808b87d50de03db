use async_trait::async_trait;
use std::fmt;
use crate::types::CompletionRequest;
use crate::Result;

#[async_trait]
pub trait HeadlineSource: Send + Sync + fmt::Debug {
    /// Name of the news provider, for logs
    fn name(&self) -> &str;

    /// Most recent headline for the topic, or `NO_RECENT_NEWS` when nothing matched
    async fn fetch_headline(&self, topic: &str) -> Result<String>;
}

#[async_trait]
pub trait TextModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Run a single-candidate completion and return the raw text
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
