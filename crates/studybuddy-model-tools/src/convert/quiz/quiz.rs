use studybuddy_entity::quiz::question::Model as QuestionModel;
use studybuddy_entity::quiz::quiz::Model as QuizModel;
use studybuddy_model::quiz::question::Question;
use studybuddy_model::quiz::quiz::Quiz;

use crate::convert::{FromDbModel, TryFromDbModel};
use crate::error::Error;

/// Expects `questions` in stored order.
impl TryFromDbModel<(QuizModel, Vec<QuestionModel>)> for Quiz {
    type Error = Error;

    fn try_from_db_model((quiz, questions): (QuizModel, Vec<QuestionModel>)) -> Result<Self, Self::Error> {
        let questions = questions
            .into_iter()
            .map(Question::try_from_db_model)
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            id: quiz.id,
            owner_id: quiz.owner_id,
            title: quiz.title,
            description: quiz.description,
            questions,
            provenance: FromDbModel::from_db_model(quiz.provenance),
            difficulty: FromDbModel::from_db_model(quiz.difficulty),
            created_at: quiz.created_at,
        })
    }
}
