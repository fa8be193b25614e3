use clap::Args;

/// Connection settings for the OpenAI compatible generative service.
#[derive(Debug, Clone, Args)]
pub struct LlmServices {
    #[arg(long, env = "OPENAI_API_KEY", required = false)]
    pub llm_api_key: Option<String>,
    /// Base url of an OpenAI compatible API. Uses the OpenAI endpoint when unset.
    #[arg(long, env = "LLM_API_BASE", required = false)]
    pub llm_api_base: Option<String>,
    #[arg(long, env = "LLM_DEFAULT_MODEL", required = false)]
    pub llm_default_model: Option<String>,
    #[arg(long, env = "QUIZ_MODEL", required = false)]
    pub quiz_model: Option<String>,
    #[arg(long, env = "FLASHCARD_MODEL", required = false)]
    pub flashcard_model: Option<String>,
    /// Upper bound for one generation call, in seconds.
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub llm_timeout_secs: u64,
}
