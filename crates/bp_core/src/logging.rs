use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Tags every line with a fixed prefix, e.g. the topic being generated.
#[derive(Debug, Default)]
pub struct Logger {
    prefix: String,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.prefix.push_str(prefix.as_ref());
        self.prefix.push(' ');
        self
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}{}", self.prefix, message);
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}{}", self.prefix, message);
    }
}

/// Install the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
/// Safe to call more than once.
pub fn init_logging() -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init();
        });
    }
    Logger::new()
}
