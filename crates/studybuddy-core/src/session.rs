use std::sync::Arc;
use studybuddy_model::quiz::answer::AnswerMap;
use studybuddy_model::quiz::question::{OptionIndex, Question};
use studybuddy_model::quiz::quiz::Quiz;
use studybuddy_model::quiz::score::ScoreResult;
use thiserror::Error;

use crate::score::{ScoreError, score};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: &'static str, action: &'static str },
    #[error("question {index} does not exist, the quiz has {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// One user's pass through a stored quiz.
///
/// `Viewing` shows a quiz read-only and never collects answers. Answers only live in
/// `Taking` and `Reviewing` and are gone once the session is closed.
#[derive(Debug, Clone, Default)]
pub enum QuizSession {
    #[default]
    Browsing,
    Viewing {
        quiz: Arc<Quiz>,
    },
    Taking {
        quiz: Arc<Quiz>,
        current: usize,
        answers: AnswerMap,
    },
    Reviewing {
        quiz: Arc<Quiz>,
        answers: AnswerMap,
        result: ScoreResult,
    },
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that is already taking `quiz`, positioned at the first question.
    #[must_use]
    pub fn taking(quiz: Arc<Quiz>) -> Self {
        Self::Taking {
            quiz,
            current: 0,
            answers: AnswerMap::new(),
        }
    }

    #[must_use]
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::Viewing { .. } => "viewing",
            Self::Taking { .. } => "taking",
            Self::Reviewing { .. } => "reviewing",
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            from: self.state_name(),
            action,
        }
    }

    pub fn view(&mut self, quiz: Arc<Quiz>) -> Result<(), SessionError> {
        match self {
            Self::Browsing | Self::Viewing { .. } => {
                *self = Self::Viewing { quiz };
                Ok(())
            }
            _ => Err(self.invalid("view a quiz")),
        }
    }

    /// Starts taking `quiz` from the first question with no answers.
    pub fn start(&mut self, quiz: Arc<Quiz>) -> Result<(), SessionError> {
        match self {
            Self::Browsing | Self::Viewing { .. } => {
                *self = Self::taking(quiz);
                Ok(())
            }
            _ => Err(self.invalid("start a quiz")),
        }
    }

    /// Records `option` for question `index`, replacing an earlier selection.
    pub fn select_answer(&mut self, index: usize, option: OptionIndex) -> Result<(), SessionError> {
        match self {
            Self::Taking { quiz, answers, .. } => {
                let len = quiz.len();
                if index >= len {
                    return Err(SessionError::QuestionOutOfRange { index, len });
                }
                answers.select(index, option);
                Ok(())
            }
            _ => Err(self.invalid("select an answer")),
        }
    }

    /// Answers the question currently shown.
    pub fn select_current(&mut self, option: OptionIndex) -> Result<(), SessionError> {
        match self {
            Self::Taking { current, .. } => {
                let current = *current;
                self.select_answer(current, option)
            }
            _ => Err(self.invalid("select an answer")),
        }
    }

    /// Moves to the next question. Stays put on the last one.
    pub fn next(&mut self) -> Result<(), SessionError> {
        match self {
            Self::Taking { quiz, current, .. } => {
                if *current + 1 < quiz.len() {
                    *current += 1;
                }
                Ok(())
            }
            _ => Err(self.invalid("go to the next question")),
        }
    }

    /// Moves to the previous question. Stays put on the first one.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        match self {
            Self::Taking { current, .. } => {
                *current = current.saturating_sub(1);
                Ok(())
            }
            _ => Err(self.invalid("go to the previous question")),
        }
    }

    /// Scores the attempt and switches to reviewing it. Unanswered questions do not block this.
    pub fn submit(&mut self) -> Result<ScoreResult, SessionError> {
        let (quiz, answers, result) = match self {
            Self::Taking { quiz, answers, .. } => {
                let result = score(&quiz.questions, answers)?;
                (Arc::clone(quiz), std::mem::take(answers), result)
            }
            _ => return Err(self.invalid("submit")),
        };
        *self = Self::Reviewing {
            quiz,
            answers,
            result: result.clone(),
        };
        Ok(result)
    }

    /// Takes the reviewed quiz again from scratch.
    pub fn retake(&mut self) -> Result<(), SessionError> {
        match self {
            Self::Reviewing { quiz, .. } => {
                *self = Self::taking(Arc::clone(quiz));
                Ok(())
            }
            _ => Err(self.invalid("retake")),
        }
    }

    /// Drops the quiz and any answers and returns to browsing.
    pub fn close(&mut self) {
        *self = Self::Browsing;
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Arc<Quiz>> {
        match self {
            Self::Browsing => None,
            Self::Viewing { quiz } | Self::Taking { quiz, .. } | Self::Reviewing { quiz, .. } => Some(quiz),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Taking { current, .. } => Some(*current),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self {
            Self::Taking { quiz, current, .. } => quiz.question(*current),
            _ => None,
        }
    }

    #[must_use]
    pub fn answers(&self) -> Option<&AnswerMap> {
        match self {
            Self::Taking { answers, .. } | Self::Reviewing { answers, .. } => Some(answers),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&ScoreResult> {
        match self {
            Self::Reviewing { result, .. } => Some(result),
            _ => None,
        }
    }
}
