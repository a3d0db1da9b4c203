//! Flashcard browsing session.

use std::collections::HashSet;

use crate::types::{CardFace, VocabCard};

/// One-at-a-time flashcard browsing over a fetched card list.
///
/// Tracks the current position, which face is showing, and the set of card
/// ids marked completed this session. Positional indices are not stable
/// across refetches, so replacing the card list resets the position; the
/// completed set survives because it is keyed by id.
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    cards: Vec<VocabCard>,
    current: usize,
    face: CardFace,
    completed: HashSet<i64>,
}

impl BrowseSession {
    pub fn new(cards: Vec<VocabCard>) -> Self {
        Self {
            cards,
            current: 0,
            face: CardFace::Front,
            completed: HashSet::new(),
        }
    }

    /// Replace the card list after a refetch. Resets position and face;
    /// keeps the completed set.
    pub fn set_cards(&mut self, cards: Vec<VocabCard>) {
        self.cards = cards;
        self.current = 0;
        self.face = CardFace::Front;
    }

    pub fn cards(&self) -> &[VocabCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card under the cursor, or None when the list is empty.
    pub fn current_card(&self) -> Option<&VocabCard> {
        self.cards.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Advance to the next card if not at the last one. Shows the front.
    pub fn next(&mut self) {
        if self.current + 1 < self.cards.len() {
            self.current += 1;
            self.face = CardFace::Front;
        }
    }

    /// Go back one card if not at the first one. Shows the front.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.face = CardFace::Front;
        }
    }

    /// Toggle between the word face and the meaning face.
    pub fn flip(&mut self) {
        self.face = self.face.flipped();
    }

    /// Mark the current card completed and advance. Idempotent per card id.
    pub fn mark_completed(&mut self) {
        if let Some(card) = self.cards.get(self.current) {
            self.completed.insert(card.id);
        }
        self.next();
    }

    pub fn is_completed(&self, id: i64) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Clear completed tracking and return to the first card.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.current = 0;
        self.face = CardFace::Front;
    }

    /// Completion percentage in [0, 100]. Zero for an empty list.
    pub fn progress(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        (self.completed.len() as f64 / self.cards.len() as f64 * 100.0).min(100.0)
    }
}
