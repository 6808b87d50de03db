use std::sync::Arc;
use bp_inference::PostGenerator;

pub struct AppState {
    pub generator: Arc<PostGenerator>,
}

impl AppState {
    pub fn new(generator: PostGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}
