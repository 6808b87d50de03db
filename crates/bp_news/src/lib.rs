pub mod client;
pub mod memory;

pub use client::{Config, NewsApiClient};
pub use memory::MemoryNewsSource;

pub mod prelude {
    pub use super::{Config, MemoryNewsSource, NewsApiClient};
    pub use bp_core::{Error, HeadlineSource, NewsArticle, Result, NO_RECENT_NEWS};
}
