pub mod content;
pub mod extract;
pub mod flashcard;
pub mod generation;
pub mod llm_config;
pub mod openai;
pub mod score;
pub mod session;
pub mod status;
