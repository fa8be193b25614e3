use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use studybuddy_entity::flashcard::flashcard;
use studybuddy_entity::quiz::question;
use studybuddy_entity::quiz::quiz::Difficulty;

pub async fn setup_db() -> DatabaseConnection {
    studybuddy_test_helpers::setup_sqlite().await.unwrap()
}

pub fn question(prompt: &str, correct_option: i32) -> question::ActiveModel {
    question::ActiveModel {
        id: NotSet,
        quiz_id: NotSet,
        position: NotSet,
        prompt: Set(prompt.to_owned()),
        options: Set(r#"["one","two","three","four"]"#.to_owned()),
        correct_option: Set(correct_option),
        explanation: Set(format!("because of {prompt}")),
        difficulty: Set(Difficulty::Medium),
    }
}

pub fn card(question: &str, answer: &str) -> flashcard::ActiveModel {
    flashcard::ActiveModel {
        id: NotSet,
        set_id: NotSet,
        position: NotSet,
        question: Set(question.to_owned()),
        answer: Set(answer.to_owned()),
    }
}
