//! Fill-in quiz session.

use super::QuizPhase;
use crate::error::{QuizError, Result};
use crate::matching::{check_answer, AnswerCheck};
use crate::types::VocabCard;

/// Fill-in-the-blank quiz: the meaning is shown, the word is typed back.
#[derive(Debug, Clone)]
pub struct FillInQuiz {
    cards: Vec<VocabCard>,
    current: usize,
    score: u32,
    check: Option<AnswerCheck>,
    phase: QuizPhase,
}

impl FillInQuiz {
    pub fn new(cards: Vec<VocabCard>) -> Result<Self> {
        if cards.is_empty() {
            return Err(QuizError::NotEnoughCards { have: 0, need: 1 });
        }
        Ok(Self {
            cards,
            current: 0,
            score: 0,
            check: None,
            phase: QuizPhase::InProgress,
        })
    }

    /// The card being asked: its meaning is the prompt, its word the answer.
    pub fn prompt(&self) -> &VocabCard {
        &self.cards[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// The verdict for the current question, once checked.
    pub fn last_check(&self) -> Option<&AnswerCheck> {
        self.check.as_ref()
    }

    /// Judge the typed answer against the expected word. Only the first
    /// check per question counts; later calls (and calls after the quiz
    /// finished) are ignored and return None.
    pub fn check(&mut self, input: &str) -> Option<&AnswerCheck> {
        if self.phase == QuizPhase::Finished || self.check.is_some() {
            return None;
        }
        let result = check_answer(input, &self.cards[self.current].word);
        if result.is_correct {
            self.score += 1;
        }
        self.check = Some(result);
        self.check.as_ref()
    }

    /// Move to the next question, or finish after the last one. Clears the
    /// recorded check either way.
    pub fn advance(&mut self) {
        if self.phase == QuizPhase::Finished {
            return;
        }
        self.check = None;
        if self.current + 1 >= self.cards.len() {
            self.phase = QuizPhase::Finished;
        } else {
            self.current += 1;
        }
    }

    /// Start over with the same cards.
    pub fn restart(&mut self) {
        self.current = 0;
        self.score = 0;
        self.check = None;
        self.phase = QuizPhase::InProgress;
    }
}
