//! Core vocabulary library shared by the trainer application.
//!
//! Provides:
//! - Vocabulary card types as served by the remote API
//! - Flashcard browsing session (flip, navigate, completed tracking)
//! - Quiz sessions (multiple choice, fill-in)
//! - Answer matching for typed answers

pub mod browse;
pub mod error;
pub mod matching;
pub mod quiz;
pub mod types;

pub use browse::BrowseSession;
pub use error::{QuizError, Result};
pub use matching::{check_answer, AnswerCheck};
pub use quiz::{fill_in::FillInQuiz, multiple_choice::MultipleChoiceQuiz, QuizPhase};
pub use types::{CardFace, LevelFilter, VocabCard};
