use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use studybuddy_core::openai::TextGenerator;
use studybuddy_core::openai::error::GeneratorError;

/// Replays canned replies in order and remembers every prompt it was given.
///
/// Once the script runs out every call fails with [`GeneratorError::EmptyResponse`].
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GeneratorError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with(Ok(reply.into()))
    }

    pub fn with(reply: Result<String, GeneratorError>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([reply])),
            prompts: Mutex::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_owned());
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(Err(GeneratorError::EmptyResponse))
    }
}
