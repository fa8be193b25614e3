use async_openai::config::OpenAIConfig;
use std::time::Duration;
use studybuddy_utils::args::llm::LlmServices as LlmServiceArgs;

const DEFAULT_MODEL: &str = "gpt-4.1-mini";

#[derive(Debug, Clone)]
pub struct LlmServiceConfig {
    pub key: Option<String>,
    pub api_base: Option<String>,
    pub default_model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    service: LlmServiceConfig,
    pub quiz_model: Option<String>,
    pub flashcard_model: Option<String>,
    pub timeout: Duration,
}

impl From<LlmServiceArgs> for LlmConfig {
    fn from(config: LlmServiceArgs) -> LlmConfig {
        Self {
            service: LlmServiceConfig {
                key: config.llm_api_key,
                api_base: config.llm_api_base,
                default_model: config.llm_default_model,
            },
            quiz_model: config.quiz_model,
            flashcard_model: config.flashcard_model,
            timeout: Duration::from_secs(config.llm_timeout_secs),
        }
    }
}

impl LlmConfig {
    #[must_use]
    pub fn new(
        service: LlmServiceConfig,
        quiz_model: Option<String>,
        flashcard_model: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            service,
            quiz_model,
            flashcard_model,
            timeout,
        }
    }

    #[must_use]
    pub fn get_default_model(&self) -> &str {
        self.service.default_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    #[must_use]
    pub fn get_openai_config(&self) -> OpenAIConfig {
        let mut openai_config = OpenAIConfig::default();
        if let Some(api_base) = &self.service.api_base {
            openai_config = openai_config.with_api_base(api_base);
        }
        if let Some(api_key) = &self.service.key {
            openai_config = openai_config.with_api_key(api_key);
        }
        openai_config
    }

    #[must_use]
    pub fn get_quiz_model(&self) -> &str {
        if let Some(model) = &self.quiz_model {
            model.as_str()
        } else {
            tracing::debug!("Using default model for quiz generation");
            self.get_default_model()
        }
    }

    #[must_use]
    pub fn get_flashcard_model(&self) -> &str {
        if let Some(model) = &self.flashcard_model {
            model.as_str()
        } else {
            tracing::debug!("Using default model for flashcard generation");
            self.get_default_model()
        }
    }
}
