mod common;

use crate::common::{ScriptedGenerator, setup_db};

use chrono::{TimeZone, Utc};
use sea_orm::Database;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use studybuddy_core::content::load::{list_quizzes, list_quizzes_by_owner, load_quiz};
use studybuddy_core::content::{
    ContentRequest, FlashcardRequest, QuizRequest, generate_content, generate_flashcards, generate_quiz,
};
use studybuddy_core::generation::error::GenerationError;
use studybuddy_core::generation::sanitize::sanitize_response;
use studybuddy_core::generation::validate::{ValidationError, validate_questions};
use studybuddy_core::openai::error::GeneratorError;
use studybuddy_core::session::QuizSession;
use studybuddy_model::content::{ContentRecord, Provenance};
use studybuddy_model::quiz::question::{Difficulty, OptionIndex, Question};
use test_log::test;
use uuid::Uuid;

const MITOCHONDRIA: &str = "The mitochondria is the powerhouse of the cell.";

fn mitochondria_payload() -> String {
    json!([{
        "question": "What is the powerhouse of the cell?",
        "options": ["Nucleus", "Mitochondria", "Ribosome", "Cell wall"],
        "correctAnswer": "B",
        "explanation": "The text calls the mitochondria the powerhouse of the cell.",
        "difficulty": "easy"
    }])
    .to_string()
}

fn one_question_request() -> QuizRequest {
    QuizRequest::builder().text(MITOCHONDRIA).num_questions(1).build()
}

/// Renders questions in the format the model is asked to answer with.
fn render(questions: &[Question]) -> String {
    let items: Vec<Value> = questions
        .iter()
        .map(|question| {
            json!({
                "question": question.prompt,
                "options": question.options,
                "correctAnswer": question.correct_option.letter().to_string(),
                "explanation": question.explanation,
                "difficulty": question.difficulty.to_string(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&items).unwrap()
}

#[test(tokio::test)]
async fn test_well_formed_reply_creates_quiz() {
    let conn = setup_db().await;
    let owner_id = Uuid::new_v4();
    let generator = ScriptedGenerator::replying(mitochondria_payload());
    let now = Utc.with_ymd_and_hms(2024, 10, 1, 8, 0, 0).unwrap();

    let quiz = generate_quiz(&generator, &conn, owner_id, one_question_request(), now)
        .await
        .unwrap();

    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].options.len(), 4);
    assert_eq!(quiz.questions[0].correct_option, OptionIndex::from_letter("B").unwrap());
    assert_eq!(quiz.owner_id, owner_id);
    assert_eq!(quiz.title, "Quiz generated on 2024-10-01");
    assert_eq!(quiz.description, "Auto-generated quiz with 1 questions");
    assert_eq!(quiz.provenance, Provenance::Pdf);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(MITOCHONDRIA));
    assert!(prompts[0].contains("create 1 multiple-choice questions with medium difficulty"));

    assert_eq!(load_quiz(&conn, quiz.id).await.unwrap(), Some(quiz));
}

#[test(tokio::test)]
async fn test_fenced_reply_gives_same_shape() {
    let conn = setup_db().await;
    let owner_id = Uuid::new_v4();
    let now = Utc::now();

    let plain = generate_quiz(
        &ScriptedGenerator::replying(mitochondria_payload()),
        &conn,
        owner_id,
        one_question_request(),
        now,
    )
    .await
    .unwrap();

    let fenced_reply = format!("```json\n{}\n```", mitochondria_payload());
    let fenced = generate_quiz(
        &ScriptedGenerator::replying(fenced_reply),
        &conn,
        owner_id,
        one_question_request(),
        now,
    )
    .await
    .unwrap();

    assert_eq!(fenced.questions, plain.questions);
    assert_eq!(fenced.title, plain.title);
    assert_ne!(fenced.id, plain.id);
}

#[test(tokio::test)]
async fn test_refusal_persists_nothing() {
    let conn = setup_db().await;
    let generator = ScriptedGenerator::replying("Sorry, I cannot do that.");

    let error = generate_quiz(&generator, &conn, Uuid::new_v4(), one_question_request(), Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        GenerationError::Validation(ValidationError::MalformedPayload { .. })
    ));
    assert!(list_quizzes(&conn).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_partially_valid_reply_persists_nothing() {
    let conn = setup_db().await;
    let reply = json!([
        {"question": "Fine?", "options": ["a", "b", "c", "d"], "correctAnswer": "A", "explanation": ""},
        {"question": "Broken?", "options": ["a", "b", "c"], "correctAnswer": "A", "explanation": ""}
    ]);
    let generator = ScriptedGenerator::replying(reply.to_string());

    let error = generate_quiz(&generator, &conn, Uuid::new_v4(), one_question_request(), Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        GenerationError::Validation(ValidationError::SchemaViolation {
            index: 1,
            field: "options",
            ..
        })
    ));
    assert!(list_quizzes(&conn).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_generator_failure_is_propagated() {
    let conn = setup_db().await;
    let generator = ScriptedGenerator::with(Err(GeneratorError::Timeout(Duration::from_secs(60))));

    let error = generate_quiz(&generator, &conn, Uuid::new_v4(), one_question_request(), Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(error, GenerationError::Generator(GeneratorError::Timeout(_))));
    assert_eq!(generator.prompts().len(), 1);
    assert!(list_quizzes(&conn).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_empty_source_never_calls_generator() {
    let conn = setup_db().await;
    let generator = ScriptedGenerator::replying(mitochondria_payload());
    let request = QuizRequest::builder().text("  \n ").build();

    let error = generate_quiz(&generator, &conn, Uuid::new_v4(), request, Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(error, GenerationError::EmptySource));
    assert!(generator.prompts().is_empty());
}

#[test(tokio::test)]
async fn test_store_failure_is_reported() {
    // no schema, so the insert fails after validation passed
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    let generator = ScriptedGenerator::replying(mitochondria_payload());

    let error = generate_quiz(&generator, &conn, Uuid::new_v4(), one_question_request(), Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(error, GenerationError::Persistence(_)));
}

#[test(tokio::test)]
async fn test_count_mismatch_and_requested_title() {
    let conn = setup_db().await;
    let generator = ScriptedGenerator::replying(mitochondria_payload());
    let request = QuizRequest::builder()
        .text(MITOCHONDRIA)
        .num_questions(5)
        .difficulty(Difficulty::Hard)
        .title(Some("Cell biology".to_owned()))
        .provenance(Provenance::Manual)
        .build();

    let quiz = generate_quiz(&generator, &conn, Uuid::new_v4(), request, Utc::now())
        .await
        .unwrap();

    assert_eq!(quiz.len(), 1);
    assert_eq!(quiz.title, "Cell biology");
    assert_eq!(quiz.description, "Auto-generated quiz with 1 questions");
    assert_eq!(quiz.difficulty, Difficulty::Hard);
    assert_eq!(quiz.provenance, Provenance::Manual);
    assert!(generator.prompts()[0].contains("The quiz is titled \"Cell biology\""));
}

#[test(tokio::test)]
async fn test_three_question_attempt() {
    let conn = setup_db().await;
    let reply = json!([
        {"question": "Q1", "options": ["a", "b", "c", "d"], "correctAnswer": "A", "explanation": "e1"},
        {"question": "Q2", "options": ["a", "b", "c", "d"], "correctAnswer": "C", "explanation": "e2"},
        {"question": "Q3", "options": ["a", "b", "c", "d"], "correctAnswer": "D", "explanation": "e3"}
    ]);
    let generator = ScriptedGenerator::replying(reply.to_string());
    let request = QuizRequest::builder().text(MITOCHONDRIA).num_questions(3).build();
    let quiz = generate_quiz(&generator, &conn, Uuid::new_v4(), request, Utc::now())
        .await
        .unwrap();

    let mut session = QuizSession::taking(Arc::new(quiz));
    session.select_current(OptionIndex::from_letter("A").unwrap()).unwrap();
    session.next().unwrap();
    session.select_current(OptionIndex::from_letter("B").unwrap()).unwrap();
    session.next().unwrap();

    let result = session.submit().unwrap();
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.total, 3);
    assert_eq!(result.percentage, 33.3);
    assert_eq!(result.per_question, [true, false, false]);
}

#[test(tokio::test)]
async fn test_listing_scopes() {
    let conn = setup_db().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    for owner in [alice, bob] {
        let generator = ScriptedGenerator::replying(mitochondria_payload());
        generate_quiz(&generator, &conn, owner, one_question_request(), Utc::now())
            .await
            .unwrap();
    }

    assert_eq!(list_quizzes(&conn).await.unwrap().len(), 2);
    let mine = list_quizzes_by_owner(&conn, alice).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].owner_id, alice);
}

#[test(tokio::test)]
async fn test_quiz_through_generate_content() {
    let conn = setup_db().await;
    let owner_id = Uuid::new_v4();
    let generator = ScriptedGenerator::replying(mitochondria_payload());
    let now = Utc.with_ymd_and_hms(2024, 10, 1, 8, 0, 0).unwrap();

    let record = generate_content(&generator, &conn, owner_id, ContentRequest::Quiz(one_question_request()), now)
        .await
        .unwrap();

    assert_eq!(record.item_count(), 1);
    assert_eq!(record.owner_id(), owner_id);
    assert_eq!(record.title(), "Quiz generated on 2024-10-01");
    let ContentRecord::Quiz(quiz) = record else {
        panic!("expected a quiz");
    };
    assert_eq!(quiz.questions[0].correct_option, OptionIndex::from_letter("B").unwrap());
    assert_eq!(load_quiz(&conn, quiz.id).await.unwrap(), Some(quiz));
}

#[test(tokio::test)]
async fn test_flashcards_through_generate_content() {
    let conn = setup_db().await;
    let generator = ScriptedGenerator::replying(
        "```json\n[{\"question\": \"What is ATP?\", \"answer\": \"The energy currency of the cell\"}]\n```",
    );
    let now = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
    let request = ContentRequest::Flashcards(FlashcardRequest::builder().text(MITOCHONDRIA).build());

    let record = generate_content(&generator, &conn, Uuid::new_v4(), request, now)
        .await
        .unwrap();

    let ContentRecord::FlashcardSet(set) = record else {
        panic!("expected a flashcard set");
    };
    assert_eq!(set.title, "Flashcards generated on 2025-01-31");
    assert_eq!(set.description, "Auto-generated flashcard set with 1 cards");
    assert_eq!(set.cards[0].answer, "The energy currency of the cell");
    assert!(generator.prompts()[0].contains("create 10 flashcards"));
}

#[test(tokio::test)]
async fn test_invalid_flashcards_persist_nothing() {
    let conn = setup_db().await;
    let owner_id = Uuid::new_v4();
    let generator = ScriptedGenerator::replying(r#"[{"question": "Only a front"}]"#);
    let request = FlashcardRequest::builder().text(MITOCHONDRIA).build();

    let error = generate_flashcards(&generator, &conn, owner_id, request, Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(error, GenerationError::Validation(_)));
    assert!(
        studybuddy_core::content::load::list_flashcard_sets_by_owner(&conn, owner_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_rendered_questions_survive_sanitize_and_validate() {
    let questions = vec![
        Question {
            prompt: "Which organelle makes ATP?".to_owned(),
            options: ["Nucleus", "Mitochondria", "Ribosome", "Lysosome"].map(str::to_owned),
            correct_option: OptionIndex::new(1).unwrap(),
            explanation: "ATP synthesis happens in the mitochondria.".to_owned(),
            difficulty: Difficulty::Easy,
        },
        Question {
            prompt: "Quote \"this\" and use ünïcode?".to_owned(),
            options: ["`a`", "b\nc", "{d}", "[e]"].map(str::to_owned),
            correct_option: OptionIndex::new(3).unwrap(),
            explanation: String::new(),
            difficulty: Difficulty::Hard,
        },
    ];

    for wrapped in [
        render(&questions),
        format!("```json\n{}\n```", render(&questions)),
        format!("\n```\n{}```\n", render(&questions)),
    ] {
        let recovered = validate_questions(sanitize_response(&wrapped), Difficulty::Medium).unwrap();
        assert_eq!(recovered, questions);
    }
}
