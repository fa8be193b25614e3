use studybuddy_model::quiz::answer::AnswerMap;
use studybuddy_model::quiz::question::Question;
use studybuddy_model::quiz::quiz::Quiz;
use studybuddy_model::quiz::score::ScoreResult;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("cannot score a quiz without questions")]
    EmptyQuizScoring,
}

/// Scores `answers` against `questions`. Unanswered questions count as incorrect.
pub fn score(questions: &[Question], answers: &AnswerMap) -> Result<ScoreResult, ScoreError> {
    if questions.is_empty() {
        return Err(ScoreError::EmptyQuizScoring);
    }

    let per_question: Vec<bool> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| answers.get(index).is_some_and(|selected| question.is_correct(selected)))
        .collect();
    let correct_count = per_question.iter().filter(|correct| **correct).count();
    let total = questions.len();

    #[allow(clippy::cast_precision_loss)]
    let percentage = 100.0 * correct_count as f64 / total as f64;

    Ok(ScoreResult {
        correct_count,
        total,
        percentage: (percentage * 10.0).round() / 10.0,
        per_question,
    })
}

pub fn score_quiz(quiz: &Quiz, answers: &AnswerMap) -> Result<ScoreResult, ScoreError> {
    score(&quiz.questions, answers)
}
