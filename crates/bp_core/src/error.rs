use std::fmt;
use thiserror::Error;

/// Pipeline step a generation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Title,
    MetaDescription,
    PostContent,
}

impl Stage {
    /// Machine-readable tag, matching the `GeneratedPost` field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Title => "title",
            Stage::MetaDescription => "meta_description",
            Stage::PostContent => "post_content",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Title => "title",
            Stage::MetaDescription => "meta description",
            Stage::PostContent => "post content",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream status and body are never included.
    #[error("Failed to fetch data from the news service")]
    NewsService,

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Failed to generate {stage}: {cause}")]
    Generation { stage: Stage, cause: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn generation(stage: Stage, cause: impl fmt::Display) -> Self {
        Error::Generation {
            stage,
            cause: cause.to_string(),
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Generation { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_message_names_stage() {
        let err = Error::generation(Stage::MetaDescription, "quota exceeded");
        assert_eq!(
            err.to_string(),
            "Failed to generate meta description: quota exceeded"
        );
        assert_eq!(err.stage(), Some(Stage::MetaDescription));
    }

    #[test]
    fn test_news_error_has_no_stage() {
        let err = Error::NewsService;
        assert_eq!(err.stage(), None);
        assert_eq!(err.to_string(), "Failed to fetch data from the news service");
    }

    #[test]
    fn test_stage_tags() {
        assert_eq!(Stage::Title.as_str(), "title");
        assert_eq!(Stage::MetaDescription.as_str(), "meta_description");
        assert_eq!(Stage::PostContent.as_str(), "post_content");
    }
}
