pub mod flashcard;
pub mod quiz;
