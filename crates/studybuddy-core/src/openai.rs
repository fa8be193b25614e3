use crate::llm_config::LlmConfig;
use crate::openai::error::GeneratorError;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
    CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::error::Error;
use std::time::Duration;
use tokio::time::timeout;
use tracing::instrument;
use typed_builder::TypedBuilder;

pub mod error;

/// Turns a prompt into the raw text reply of a generative model.
///
/// Implementations make exactly one attempt; failures are returned to the caller unchanged.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct CallConfig {
    total_timeout: Duration,
    #[builder(default)]
    temperature: Option<f32>,
}

impl CallConfig {
    #[must_use]
    pub fn from_llm_config(llm_config: &LlmConfig) -> Self {
        Self::builder().total_timeout(llm_config.timeout).build()
    }
}

/// [`TextGenerator`] backed by an OpenAI compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    config: CallConfig,
}

impl OpenAiGenerator {
    pub fn new(openai_config: OpenAIConfig, model: impl Into<String>, config: CallConfig) -> Result<Self, GeneratorError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.total_timeout)
            .build()
            .map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "failed to build http client for openai");
                GeneratorError::HttpClientBuild(error)
            })?;

        // Zero elapsed time: the first failure is final.
        let backoff = ExponentialBackoffBuilder::default()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(backoff);

        Ok(Self {
            client,
            model: model.into(),
            config,
        })
    }

    pub fn for_quizzes(llm_config: &LlmConfig) -> Result<Self, GeneratorError> {
        Self::new(
            llm_config.get_openai_config(),
            llm_config.get_quiz_model(),
            CallConfig::from_llm_config(llm_config),
        )
    }

    pub fn for_flashcards(llm_config: &LlmConfig) -> Result<Self, GeneratorError> {
        Self::new(
            llm_config.get_openai_config(),
            llm_config.get_flashcard_model(),
            CallConfig::from_llm_config(llm_config),
        )
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.chars().count()))]
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let mut request = CreateChatCompletionRequestArgs::default();
        request
            .model(self.model.as_str())
            .messages(vec![ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(prompt.to_owned()),
                name: None,
            })]);
        if let Some(temperature) = self.config.temperature {
            request.temperature(temperature);
        }
        let request = request.build()?;

        tracing::debug!("sending openai request");
        let response = timeout(self.config.total_timeout, self.client.chat().create(request))
            .await
            .map_err(|_| {
                tracing::warn!(timeout = ?self.config.total_timeout, "open AI call timed out");
                GeneratorError::Timeout(self.config.total_timeout)
            })?
            .map_err(|error| {
                tracing::warn!(error = &error as &dyn Error, "open AI call failed");
                GeneratorError::Api(error)
            })?;

        first_text(response)
    }
}

fn first_text(response: CreateChatCompletionResponse) -> Result<String, GeneratorError> {
    let tokens = response.usage.as_ref().map(|usage| usage.total_tokens);
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(GeneratorError::EmptyResponse)?;
    tracing::debug!(tokens, chars = text.len(), "received openai response");
    Ok(text)
}
