use async_trait::async_trait;
use bp_core::{CompletionRequest, Error, Result, TextModel};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued replies in order and records every request it sees.
/// Once the queue is drained it echoes a short canned reply.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    pub fn fail(self, cause: impl Into<String>) -> Self {
        self.push(Err(cause.into()))
    }

    fn push(self, reply: std::result::Result<String, String>) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let next = self
            .replies
            .lock()
            .map_err(|_| Error::Inference("scripted model lock poisoned".to_string()))?
            .pop_front();

        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(cause)) => Err(Error::Inference(cause)),
            None => {
                let words: Vec<&str> = request.prompt.split_whitespace().take(8).collect();
                Ok(format!("Generated: {}", words.join(" ")))
            }
        }
    }
}
