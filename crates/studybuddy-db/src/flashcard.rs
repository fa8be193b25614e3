pub mod flashcard;
pub mod flashcard_set;
