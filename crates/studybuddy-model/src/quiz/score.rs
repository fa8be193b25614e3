use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of scoring one attempt. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total: usize,
    /// Share of correct answers in percent, rounded to one decimal place.
    pub percentage: f64,
    /// One entry per question, in question order.
    pub per_question: Vec<bool>,
}

impl ScoreResult {
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct_count == self.total
    }
}
