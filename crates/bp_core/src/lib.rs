pub mod error;
pub mod logging;
pub mod models;
pub mod types;

pub use error::{Error, Result, Stage};
pub use models::{HeadlineSource, TextModel};
pub use types::{CompletionRequest, GeneratedPost, NewsArticle, NO_RECENT_NEWS};

pub mod prelude {
    pub use super::{Error, Result, Stage};
    pub use super::{CompletionRequest, GeneratedPost, NewsArticle};
    pub use super::{HeadlineSource, TextModel};
}
