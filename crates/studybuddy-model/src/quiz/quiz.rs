use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::content::Provenance;
use crate::quiz::question::{Difficulty, Question};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Quiz {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub provenance: Provenance,
    pub difficulty: Difficulty,
    pub created_at: chrono::NaiveDateTime,
}

impl Quiz {
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
