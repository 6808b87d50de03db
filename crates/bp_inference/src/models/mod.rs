use std::sync::Arc;
use bp_core::{Result, TextModel};
use crate::Config;

pub mod openai;
pub mod scripted;

pub use openai::OpenAiModel;
pub use scripted::ScriptedModel;

pub fn create_model(config: Config) -> Result<Arc<dyn TextModel>> {
    let model = OpenAiModel::new(config)?;
    tracing::debug!("Created model {:?}", model);
    Ok(Arc::new(model))
}
