use std::sync::Arc;
use studybuddy_model::flashcard::{FlashcardItem, FlashcardSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

/// Steps through a flashcard set one card at a time.
///
/// Unlike quiz navigation the deck wraps around at both ends, and every move shows the
/// front of the new card.
#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    set: Arc<FlashcardSet>,
    current: usize,
    side: CardSide,
}

impl FlashcardDeck {
    #[must_use]
    pub fn new(set: Arc<FlashcardSet>) -> Self {
        Self {
            set,
            current: 0,
            side: CardSide::Front,
        }
    }

    #[must_use]
    pub fn set(&self) -> &FlashcardSet {
        &self.set
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&FlashcardItem> {
        self.set.cards.get(self.current)
    }

    #[must_use]
    pub fn side(&self) -> CardSide {
        self.side
    }

    /// Text on the visible side of the current card.
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        self.current_card().map(|card| match self.side {
            CardSide::Front => card.question.as_str(),
            CardSide::Back => card.answer.as_str(),
        })
    }

    pub fn flip(&mut self) {
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    pub fn next(&mut self) {
        let len = self.set.len();
        if len > 0 {
            self.current = (self.current + 1) % len;
        }
        self.side = CardSide::Front;
    }

    pub fn previous(&mut self) {
        let len = self.set.len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
        }
        self.side = CardSide::Front;
    }

    /// Zero-based index of the current card and the number of cards.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.current, self.set.len())
    }
}
