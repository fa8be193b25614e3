use studybuddy_model::quiz::question::Difficulty;
use typed_builder::TypedBuilder;

/// Longest prefix of the source text, in characters, that is sent to the model.
pub const MAX_SOURCE_CHARS: usize = 3000;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 20;

pub const DEFAULT_FLASHCARD_COUNT: usize = 10;
pub const MAX_FLASHCARD_COUNT: usize = 30;

/// Cuts `text` to at most [`MAX_SOURCE_CHARS`] characters without splitting a character.
#[must_use]
pub fn truncate_source(text: &str) -> &str {
    match text.char_indices().nth(MAX_SOURCE_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

fn title_line(title: Option<&str>, kind: &str) -> String {
    match title.map(str::trim).filter(|title| !title.is_empty()) {
        Some(title) => format!("The {kind} is titled \"{title}\", keep every item on that topic.\n"),
        None => String::new(),
    }
}

/// Instruction for a set of multiple-choice questions.
///
/// Rendering is deterministic: equal inputs always produce the same string.
#[derive(Debug, Clone, TypedBuilder)]
pub struct QuizPrompt<'a> {
    source: &'a str,
    #[builder(default = DEFAULT_QUESTION_COUNT)]
    count: usize,
    #[builder(default)]
    difficulty: Difficulty,
    #[builder(default)]
    title: Option<&'a str>,
}

impl QuizPrompt<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let count = self.count;
        let difficulty = self.difficulty;
        let title_line = title_line(self.title, "quiz");
        format!(
            r#"You are an expert quiz generator. Based on the following text, create {count} multiple-choice questions with {difficulty} difficulty level.
{title_line}
Text:
{source}

Requirements:
1. Create exactly {count} questions
2. Each question must have exactly 4 options (A, B, C, D)
3. Provide the correct answer (just the letter: A, B, C, or D)
4. Include a brief explanation for each answer
5. Make questions relevant and meaningful based on the content

Return ONLY a valid JSON array in this exact format (no markdown, no extra text):
[
  {{
    "question": "Question text here?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correctAnswer": "A",
    "explanation": "Brief explanation why this is correct",
    "difficulty": "{difficulty}"
  }}
]
"#,
            source = truncate_source(self.source),
        )
    }
}

/// Instruction for a set of question/answer flashcards.
#[derive(Debug, Clone, TypedBuilder)]
pub struct FlashcardPrompt<'a> {
    source: &'a str,
    #[builder(default = DEFAULT_FLASHCARD_COUNT)]
    count: usize,
    #[builder(default)]
    title: Option<&'a str>,
}

impl FlashcardPrompt<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let count = self.count;
        let title_line = title_line(self.title, "flashcard set");
        format!(
            r#"You are an expert study assistant. Based on the following text, create {count} flashcards that help a student memorize its key facts and concepts.
{title_line}
Text:
{source}

Requirements:
1. Create exactly {count} flashcards
2. The front of each card is a short question or term
3. The back of each card is a concise answer of one or two sentences
4. Only use facts that appear in the text

Return ONLY a valid JSON array in this exact format (no markdown, no extra text):
[
  {{
    "question": "Question or term here?",
    "answer": "Concise answer here"
  }}
]
"#,
            source = truncate_source(self.source),
        )
    }
}
