//! Quiz session state machines.

pub mod fill_in;
pub mod multiple_choice;

use serde::{Deserialize, Serialize};

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    InProgress,
    Finished,
}

impl Default for QuizPhase {
    fn default() -> Self {
        Self::InProgress
    }
}
