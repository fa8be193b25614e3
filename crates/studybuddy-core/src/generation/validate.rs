use serde_json::{Map, Value};
use studybuddy_model::flashcard::FlashcardItem;
use studybuddy_model::quiz::question::{Difficulty, OPTION_COUNT, OptionIndex, Question};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// `raw` is kept for logs and deliberately left out of the message.
    #[error("generated payload is not valid JSON: {diagnostic}")]
    MalformedPayload { diagnostic: String, raw: String },
    #[error("generated payload is not a non-empty array")]
    EmptyOrInvalidShape,
    #[error("generated item {index} has an invalid `{field}`: {reason}")]
    SchemaViolation {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

type Record = Map<String, Value>;

/// Parses the candidate into a non-empty list of JSON objects.
fn parse_records(payload: &str) -> Result<Vec<Value>, ValidationError> {
    let value: Value = serde_json::from_str(payload).map_err(|error| ValidationError::MalformedPayload {
        diagnostic: error.to_string(),
        raw: payload.to_owned(),
    })?;

    match value {
        Value::Array(items) if !items.is_empty() => Ok(items),
        _ => Err(ValidationError::EmptyOrInvalidShape),
    }
}

fn violation(index: usize, field: &'static str, reason: impl Into<String>) -> ValidationError {
    ValidationError::SchemaViolation {
        index,
        field,
        reason: reason.into(),
    }
}

fn as_record(index: usize, item: Value) -> Result<Record, ValidationError> {
    match item {
        Value::Object(record) => Ok(record),
        other => Err(violation(index, "item", format!("expected an object, got {}", kind(&other)))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn string_field(index: usize, field: &'static str, value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(violation(index, field, format!("expected a string, got {}", kind(&other)))),
        None => Err(violation(index, field, "is missing")),
    }
}

fn non_empty_field(index: usize, field: &'static str, value: Option<Value>) -> Result<String, ValidationError> {
    let text = string_field(index, field, value)?;
    if text.trim().is_empty() {
        return Err(violation(index, field, "must not be empty"));
    }
    Ok(text)
}

fn options_field(index: usize, value: Option<Value>) -> Result<[String; OPTION_COUNT], ValidationError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(other) => return Err(violation(index, "options", format!("expected an array, got {}", kind(&other)))),
        None => return Err(violation(index, "options", "is missing")),
    };

    let found = items.len();
    let options = items
        .into_iter()
        .map(|option| non_empty_field(index, "options", Some(option)))
        .collect::<Result<Vec<_>, _>>()?;

    options
        .try_into()
        .map_err(|_| violation(index, "options", format!("expected exactly {OPTION_COUNT} options, got {found}")))
}

fn correct_answer_field(index: usize, value: Option<Value>) -> Result<OptionIndex, ValidationError> {
    const FIELD: &str = "correctAnswer";
    match value {
        Some(Value::String(tag)) => {
            OptionIndex::from_letter(&tag).map_err(|error| violation(index, FIELD, error.to_string()))
        }
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|number| u8::try_from(number).ok())
            .and_then(OptionIndex::new)
            .ok_or_else(|| violation(index, FIELD, format!("{number} does not index into the options"))),
        Some(other) => Err(violation(
            index,
            FIELD,
            format!("expected an option letter, got {}", kind(&other)),
        )),
        None => Err(violation(index, FIELD, "is missing")),
    }
}

fn difficulty_field(index: usize, value: Option<Value>, requested: Difficulty) -> Result<Difficulty, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(requested),
        Some(Value::String(tag)) => tag
            .trim()
            .parse()
            .map_err(|_| violation(index, "difficulty", format!("'{tag}' is not easy, medium or hard"))),
        Some(other) => Err(violation(
            index,
            "difficulty",
            format!("expected a string, got {}", kind(&other)),
        )),
    }
}

fn question(index: usize, mut record: Record, requested: Difficulty) -> Result<Question, ValidationError> {
    let prompt = match record.remove("question") {
        Some(value) => Some(value),
        None => record.remove("prompt"),
    };
    let prompt = non_empty_field(index, "question", prompt)?;
    let options = options_field(index, record.remove("options"))?;
    let correct_option = correct_answer_field(index, record.remove("correctAnswer"))?;
    let explanation = string_field(index, "explanation", record.remove("explanation"))?;
    let difficulty = difficulty_field(index, record.remove("difficulty"), requested)?;

    Ok(Question {
        prompt,
        options,
        correct_option,
        explanation,
        difficulty,
    })
}

/// Checks a sanitized model reply against the question schema.
///
/// Either every item is valid and the questions come back in payload order, or the whole
/// payload is rejected. Items without a `difficulty` take the `requested` one.
pub fn validate_questions(payload: &str, requested: Difficulty) -> Result<Vec<Question>, ValidationError> {
    parse_records(payload)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| -> Result<Question, ValidationError> {
            question(index, as_record(index, item)?, requested)
        })
        .collect()
}

/// Checks a sanitized model reply against the flashcard schema.
pub fn validate_flashcards(payload: &str) -> Result<Vec<FlashcardItem>, ValidationError> {
    parse_records(payload)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| -> Result<FlashcardItem, ValidationError> {
            let mut record = as_record(index, item)?;
            Ok(FlashcardItem {
                question: non_empty_field(index, "question", record.remove("question"))?,
                answer: non_empty_field(index, "answer", record.remove("answer"))?,
            })
        })
        .collect()
}
