use async_trait::async_trait;
use bp_core::{Error, HeadlineSource, Result, NO_RECENT_NEWS};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed, in-process headline source.
#[derive(Debug, Default)]
pub struct MemoryNewsSource {
    titles: Vec<String>,
    failing: bool,
    calls: AtomicUsize,
}

impl MemoryNewsSource {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A source that behaves like an unreachable or rejecting news service.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeadlineSource for MemoryNewsSource {
    fn name(&self) -> &str {
        "Memory"
    }

    async fn fetch_headline(&self, _topic: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(Error::NewsService);
        }
        Ok(self
            .titles
            .first()
            .cloned()
            .unwrap_or_else(|| NO_RECENT_NEWS.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemoryNewsSource::new(["first", "second"]);
        assert_eq!(source.fetch_headline("x").await.unwrap(), "first");

        let empty = MemoryNewsSource::empty();
        assert_eq!(empty.fetch_headline("x").await.unwrap(), NO_RECENT_NEWS);

        let failing = MemoryNewsSource::failing();
        assert!(matches!(failing.fetch_headline("x").await, Err(Error::NewsService)));
        assert_eq!(failing.calls(), 1);
    }
}
