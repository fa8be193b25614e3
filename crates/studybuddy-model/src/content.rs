use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::flashcard::FlashcardSet;
use crate::quiz::quiz::Quiz;

/// Where the source text of a generated record came from.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provenance {
    #[default]
    Pdf,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentRecord {
    Quiz(Quiz),
    FlashcardSet(FlashcardSet),
}

impl ContentRecord {
    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            Self::Quiz(quiz) => quiz.id,
            Self::FlashcardSet(set) => set.id,
        }
    }

    #[must_use]
    pub fn owner_id(&self) -> Uuid {
        match self {
            Self::Quiz(quiz) => quiz.owner_id,
            Self::FlashcardSet(set) => set.owner_id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Quiz(quiz) => &quiz.title,
            Self::FlashcardSet(set) => &set.title,
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Quiz(quiz) => quiz.len(),
            Self::FlashcardSet(set) => set.len(),
        }
    }
}

impl From<Quiz> for ContentRecord {
    fn from(quiz: Quiz) -> Self {
        Self::Quiz(quiz)
    }
}

impl From<FlashcardSet> for ContentRecord {
    fn from(set: FlashcardSet) -> Self {
        Self::FlashcardSet(set)
    }
}
