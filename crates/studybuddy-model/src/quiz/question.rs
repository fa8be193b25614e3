use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Every multiple-choice question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidOptionTag {
    #[error("option index {0} is out of range, expected 0..{OPTION_COUNT}")]
    OutOfRange(u8),
    #[error("'{0}' is not an option letter, expected A, B, C or D")]
    NotALetter(String),
}

/// Zero-based index into [`Question::options`].
///
/// Letter tags (`A`..`D`) only exist at the edges: in the generated payload and in
/// what the client displays. Everything in between works with this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionIndex(u8);

impl OptionIndex {
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        (usize::from(index) < OPTION_COUNT).then_some(Self(index))
    }

    /// Parses a single letter tag, ignoring case and surrounding whitespace.
    pub fn from_letter(tag: &str) -> Result<Self, InvalidOptionTag> {
        let mut chars = tag.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => {
                let offset = letter.to_ascii_uppercase() as u8 - b'A';
                Self::new(offset).ok_or_else(|| InvalidOptionTag::NotALetter(tag.to_owned()))
            }
            _ => Err(InvalidOptionTag::NotALetter(tag.to_owned())),
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        char::from(b'A' + self.0)
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn all() -> impl Iterator<Item = OptionIndex> {
        (0..OPTION_COUNT as u8).map(OptionIndex)
    }
}

impl TryFrom<u8> for OptionIndex {
    type Error = InvalidOptionTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidOptionTag::OutOfRange(value))
    }
}

impl From<OptionIndex> for u8 {
    fn from(value: OptionIndex) -> Self {
        value.0
    }
}

impl FromStr for OptionIndex {
    type Err = InvalidOptionTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_letter(s)
    }
}

impl fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct Question {
    pub prompt: String,
    #[schema(value_type = Vec<String>, min_items = 4, max_items = 4)]
    pub options: [String; OPTION_COUNT],
    pub correct_option: OptionIndex,
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl Question {
    #[must_use]
    pub fn is_correct(&self, selected: OptionIndex) -> bool {
        self.correct_option == selected
    }

    #[must_use]
    pub fn option(&self, index: OptionIndex) -> &str {
        &self.options[index.index()]
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        self.option(self.correct_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(OptionIndex::from_letter("A"), Ok(OptionIndex(0)));
        assert_eq!(OptionIndex::from_letter(" d "), Ok(OptionIndex(3)));
        assert_eq!(OptionIndex::from_letter("b").map(OptionIndex::letter), Ok('B'));
        assert!(OptionIndex::from_letter("E").is_err());
        assert!(OptionIndex::from_letter("AB").is_err());
        assert!(OptionIndex::from_letter("").is_err());
        assert!(OptionIndex::from_letter("1").is_err());
    }

    #[test]
    fn test_index_bounds() {
        assert!(OptionIndex::new(3).is_some());
        assert!(OptionIndex::new(4).is_none());
        assert_eq!(OptionIndex::try_from(7), Err(InvalidOptionTag::OutOfRange(7)));
        assert_eq!(OptionIndex::all().map(OptionIndex::letter).collect::<String>(), "ABCD");
    }

    #[test]
    fn test_option_index_serializes_as_number() {
        let index = OptionIndex::from_letter("C").unwrap();
        assert_eq!(serde_json::to_string(&index).unwrap(), "2");
        assert!(serde_json::from_str::<OptionIndex>("4").is_err());
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::default().to_string(), "medium");
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
