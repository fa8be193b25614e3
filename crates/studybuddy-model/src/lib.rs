pub mod content;
pub mod document;
pub mod flashcard;
pub mod quiz;
pub mod status;
