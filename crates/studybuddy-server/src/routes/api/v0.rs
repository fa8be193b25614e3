pub(crate) mod document;
pub(crate) mod flashcard;
pub(crate) mod quiz;
pub(crate) mod status;
