pub mod flashcard;
pub mod migration;
pub mod quiz;

pub use sea_orm;
