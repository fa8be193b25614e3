use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::quiz::question::OptionIndex;

/// Selected option per question index for one attempt at a quiz.
///
/// Lives only as long as the attempt; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = BTreeMap<String, u8>)]
pub struct AnswerMap(BTreeMap<usize, OptionIndex>);

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `option` for `question`, replacing any earlier selection.
    pub fn select(&mut self, question: usize, option: OptionIndex) -> Option<OptionIndex> {
        self.0.insert(question, option)
    }

    #[must_use]
    pub fn get(&self, question: usize) -> Option<OptionIndex> {
        self.0.get(&question).copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, OptionIndex)> + '_ {
        self.0.iter().map(|(question, option)| (*question, *option))
    }
}

impl FromIterator<(usize, OptionIndex)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (usize, OptionIndex)>>(iter: T) -> Self {
        let mut answers = Self::new();
        for (question, option) in iter {
            answers.select(question, option);
        }
        answers
    }
}
