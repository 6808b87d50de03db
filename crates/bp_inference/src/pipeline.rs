use bp_core::logging::Logger;
use bp_core::{CompletionRequest, Error, GeneratedPost, HeadlineSource, Result, Stage, TextModel};
use std::fmt;
use std::sync::Arc;

pub const TEMPERATURE: f64 = 0.7;
pub const TITLE_MAX_TOKENS: u32 = 50;
pub const META_MAX_TOKENS: u32 = 100;
pub const POST_MAX_TOKENS: u32 = 1000;

pub fn title_prompt(topic: &str) -> String {
    format!("Come up with an attractive title for a blog post on the topic: {}", topic)
}

pub fn meta_prompt(title: &str) -> String {
    format!(
        "Write a short but informative meta description for a blog post titled: {}",
        title
    )
}

pub fn post_prompt(topic: &str, headline: &str) -> String {
    format!(
        "Write a detailed and engaging blog post on the topic: {}, taking into account the following recent news:\n\
         {}\n\n\
         Use short paragraphs, subheadings, examples and keywords for better readability and SEO optimization.",
        topic, headline
    )
}

/// News lookup followed by title, meta description and body generation.
/// Each step runs only after the previous one succeeded.
pub struct PostGenerator {
    news: Arc<dyn HeadlineSource>,
    model: Arc<dyn TextModel>,
}

impl fmt::Debug for PostGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostGenerator")
            .field("news", &self.news.name())
            .field("model", &self.model.name())
            .finish()
    }
}

impl PostGenerator {
    pub fn new(news: Arc<dyn HeadlineSource>, model: Arc<dyn TextModel>) -> Self {
        Self { news, model }
    }

    pub async fn generate_post(&self, topic: &str) -> Result<GeneratedPost> {
        let log = Logger::new().with_prefix(format!("[{}]", topic));

        let headline = self.news.fetch_headline(topic).await?;
        log.debug(&format!("Using headline from {}: {}", self.news.name(), headline));

        let title = self
            .run_stage(Stage::Title, title_prompt(topic), TITLE_MAX_TOKENS)
            .await?;
        log.debug(&format!("Title: {}", title));

        let meta_description = self
            .run_stage(Stage::MetaDescription, meta_prompt(&title), META_MAX_TOKENS)
            .await?;

        let post_content = self
            .run_stage(Stage::PostContent, post_prompt(topic, &headline), POST_MAX_TOKENS)
            .await?;

        log.info(&format!("Generated post ({} chars)", post_content.len()));

        Ok(GeneratedPost {
            title,
            meta_description,
            post_content,
        })
    }

    async fn run_stage(&self, stage: Stage, prompt: String, max_tokens: u32) -> Result<String> {
        let request = CompletionRequest::new(prompt, max_tokens, TEMPERATURE);
        let text = self
            .model
            .complete(&request)
            .await
            .map_err(|e| Error::generation(stage, cause_of(e)))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(Error::generation(stage, "model returned an empty completion"));
        }
        Ok(text.to_string())
    }
}

// Stage errors carry the bare inference message.
fn cause_of(err: Error) -> String {
    match err {
        Error::Inference(message) => message,
        other => other.to_string(),
    }
}
