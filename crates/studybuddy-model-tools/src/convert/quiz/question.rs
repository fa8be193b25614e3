use sea_orm::ActiveValue::{NotSet, Set};
use studybuddy_entity::quiz::question::{ActiveModel as QuestionActiveModel, Model as QuestionModel};
use studybuddy_entity::quiz::quiz::Difficulty as DifficultyModel;
use studybuddy_model::quiz::question::{Difficulty, OptionIndex, Question};

use crate::convert::{FromDbModel, IntoDbModel, TryFromDbModel, TryFromModel};
use crate::error::Error;

impl FromDbModel<DifficultyModel> for Difficulty {
    fn from_db_model(model: DifficultyModel) -> Self {
        match model {
            DifficultyModel::Easy => Difficulty::Easy,
            DifficultyModel::Medium => Difficulty::Medium,
            DifficultyModel::Hard => Difficulty::Hard,
        }
    }
}

impl IntoDbModel<DifficultyModel> for Difficulty {
    fn into_db_model(self) -> DifficultyModel {
        match self {
            Difficulty::Easy => DifficultyModel::Easy,
            Difficulty::Medium => DifficultyModel::Medium,
            Difficulty::Hard => DifficultyModel::Hard,
        }
    }
}

impl TryFromDbModel<QuestionModel> for Question {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        let options = serde_json::from_str(&model.options)?;
        let correct_option = u8::try_from(model.correct_option)
            .ok()
            .and_then(OptionIndex::new)
            .ok_or(Error::InvalidOptionIndex(model.correct_option))?;

        Ok(Self {
            prompt: model.prompt,
            options,
            correct_option,
            explanation: model.explanation,
            difficulty: FromDbModel::from_db_model(model.difficulty),
        })
    }
}

/// Leaves id, quiz and position unset; those belong to the store.
impl TryFromModel<Question> for QuestionActiveModel {
    type Error = Error;

    fn try_from_model(question: Question) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NotSet,
            quiz_id: NotSet,
            position: NotSet,
            prompt: Set(question.prompt),
            options: Set(serde_json::to_string(&question.options)?),
            correct_option: Set(i32::from(u8::from(question.correct_option))),
            explanation: Set(question.explanation),
            difficulty: Set(question.difficulty.into_db_model()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{TryIntoDbModel, TryIntoModel};
    use sea_orm::ActiveValue;
    use uuid::Uuid;

    fn stored(options: &str, correct_option: i32) -> QuestionModel {
        QuestionModel {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            position: 0,
            prompt: "Which gas do plants absorb?".to_owned(),
            options: options.to_owned(),
            correct_option,
            explanation: "Plants take in carbon dioxide.".to_owned(),
            difficulty: DifficultyModel::Easy,
        }
    }

    #[test]
    fn test_question_from_db() {
        let question: Question = stored(r#"["Oxygen","Carbon dioxide","Nitrogen","Helium"]"#, 1)
            .try_into_model()
            .unwrap();
        assert_eq!(question.correct_answer(), "Carbon dioxide");
        assert_eq!(question.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_question_from_db_rejects_corrupt_rows() {
        let result: Result<Question, _> = stored(r#"["Oxygen","Carbon dioxide","Nitrogen","Helium"]"#, 4).try_into_model();
        assert!(matches!(result, Err(Error::InvalidOptionIndex(4))));

        let result: Result<Question, _> = stored(r#"["Oxygen","Carbon dioxide"]"#, 0).try_into_model();
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_question_into_active_model() {
        let question = Question {
            prompt: "p".to_owned(),
            options: ["a", "b", "c", "d"].map(str::to_owned),
            correct_option: OptionIndex::new(3).unwrap(),
            explanation: String::new(),
            difficulty: Difficulty::Hard,
        };
        let active: QuestionActiveModel = question.try_into_db_model().unwrap();
        assert_eq!(active.correct_option, ActiveValue::Set(3));
        assert_eq!(active.options, ActiveValue::Set(r#"["a","b","c","d"]"#.to_owned()));
        assert_eq!(active.id, ActiveValue::NotSet);
    }
}
