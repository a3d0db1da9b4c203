//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single vocabulary entry as served by the remote API.
///
/// `id` is unique within a fetched list; list order is whatever the server
/// returns. `sequence_number` and `created_at` are provenance metadata and
/// never drive logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabCard {
    pub id: i64,
    pub word: String,
    pub pinyin: String,
    pub meaning: String,
    /// HSK tier, 1-6 on real entries.
    pub level: u8,
    #[serde(rename = "stt", default)]
    pub sequence_number: i64,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "example_chinese", default)]
    pub example_word: String,
    #[serde(default)]
    pub example_pinyin: String,
    #[serde(default)]
    pub example_meaning: String,
}

impl VocabCard {
    /// Whether the card carries a usage example.
    pub fn has_example(&self) -> bool {
        !self.example_word.is_empty()
    }
}

/// Timestamps arrive as free-form strings; anything unparseable becomes None.
fn lenient_datetime<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

/// Level filter for list requests.
///
/// The wire protocol treats an absent `level` parameter as "all levels";
/// a raw value of 0 is the same sentinel and never appears on a real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelFilter {
    All,
    Hsk(u8),
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::All
    }
}

impl LevelFilter {
    /// Build a filter from a raw level value, mapping the 0 sentinel to All.
    pub fn from_raw(level: u8) -> Self {
        match level {
            0 => Self::All,
            n => Self::Hsk(n),
        }
    }

    /// The value to send as the `level` query parameter, if any.
    pub fn as_param(self) -> Option<u8> {
        match self {
            Self::All => None,
            Self::Hsk(n) => Some(n),
        }
    }
}

/// Which face of a flashcard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    /// Word and pronunciation.
    Front,
    /// Meaning and usage example.
    Back,
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Front
    }
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_wire_card() {
        let json = r#"{
            "id": 42,
            "word": "学习",
            "pinyin": "xuéxí",
            "meaning": "to study",
            "level": 1,
            "stt": 7,
            "created_at": "2024-03-01T08:00:00Z",
            "example_chinese": "我在学习中文。",
            "example_pinyin": "wǒ zài xuéxí zhōngwén.",
            "example_meaning": "I am studying Chinese."
        }"#;
        let card: VocabCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, 42);
        assert_eq!(card.sequence_number, 7);
        assert_eq!(card.word, "学习");
        assert!(card.has_example());
        assert!(card.created_at.is_some());
    }

    #[test]
    fn tolerates_missing_metadata() {
        let json = r#"{
            "id": 1,
            "word": "你好",
            "pinyin": "nǐ hǎo",
            "meaning": "hello",
            "level": 1
        }"#;
        let card: VocabCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.created_at, None);
        assert_eq!(card.example_word, "");
        assert!(!card.has_example());
    }

    #[test]
    fn tolerates_unparseable_timestamp() {
        let json = r#"{
            "id": 1,
            "word": "你好",
            "pinyin": "nǐ hǎo",
            "meaning": "hello",
            "level": 1,
            "created_at": "yesterday"
        }"#;
        let card: VocabCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.created_at, None);
    }

    #[test]
    fn level_filter_sentinel() {
        assert_eq!(LevelFilter::from_raw(0), LevelFilter::All);
        assert_eq!(LevelFilter::from_raw(3), LevelFilter::Hsk(3));
        assert_eq!(LevelFilter::All.as_param(), None);
        assert_eq!(LevelFilter::Hsk(3).as_param(), Some(3));
    }

    #[test]
    fn card_face_flips() {
        assert_eq!(CardFace::Front.flipped(), CardFace::Back);
        assert_eq!(CardFace::Back.flipped(), CardFace::Front);
        assert_eq!(CardFace::default(), CardFace::Front);
    }
}
