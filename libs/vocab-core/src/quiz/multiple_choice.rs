//! Multiple-choice quiz session.

use rand::seq::SliceRandom;
use rand::Rng;

use super::QuizPhase;
use crate::error::{QuizError, Result};
use crate::types::VocabCard;

/// Wrong options presented alongside the correct answer.
const DISTRACTOR_COUNT: usize = 3;

/// One question: the card being asked plus the shuffled options.
#[derive(Debug, Clone)]
pub struct Question {
    /// The card whose word is shown as the prompt.
    pub correct: VocabCard,
    /// Correct card plus distractors, in random order.
    pub options: Vec<VocabCard>,
}

/// Multiple-choice quiz over a fetched card list.
///
/// The question for the current index is generated once on entry (at
/// construction, `advance` and `restart`), never on read, so the option
/// order is stable while the question is displayed. The rng is supplied by
/// the caller; tests drive a seeded one.
#[derive(Debug, Clone)]
pub struct MultipleChoiceQuiz {
    cards: Vec<VocabCard>,
    current: usize,
    score: u32,
    selected: Option<i64>,
    phase: QuizPhase,
    question: Question,
}

impl MultipleChoiceQuiz {
    /// Start a quiz. Needs at least two cards so every question has at
    /// least one distractor; with fewer than four the distractor count
    /// degrades instead of failing.
    pub fn new(cards: Vec<VocabCard>, rng: &mut impl Rng) -> Result<Self> {
        if cards.len() < 2 {
            return Err(QuizError::NotEnoughCards {
                have: cards.len(),
                need: 2,
            });
        }
        let question = generate_question(&cards, 0, rng);
        Ok(Self {
            cards,
            current: 0,
            score: 0,
            selected: None,
            phase: QuizPhase::InProgress,
            question,
        })
    }

    pub fn question(&self) -> &Question {
        &self.question
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

    /// The option id picked for the current question, if any.
    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Answer the current question. Only the first selection per question
    /// counts; later calls (and calls after the quiz finished) are ignored
    /// and return None. Returns whether the pick was correct.
    pub fn select(&mut self, option_id: i64) -> Option<bool> {
        if self.phase == QuizPhase::Finished || self.selected.is_some() {
            return None;
        }
        self.selected = Some(option_id);
        let correct = option_id == self.question.correct.id;
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Move to the next question, or finish after the last one. Clears the
    /// selection either way.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        if self.phase == QuizPhase::Finished {
            return;
        }
        self.selected = None;
        if self.current + 1 >= self.cards.len() {
            self.phase = QuizPhase::Finished;
        } else {
            self.current += 1;
            self.question = generate_question(&self.cards, self.current, rng);
        }
    }

    /// Start over with the same cards.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.phase = QuizPhase::InProgress;
        self.question = generate_question(&self.cards, 0, rng);
    }
}

/// Build the question for `index`: sample distractors uniformly without
/// replacement from the other cards, then shuffle the combined options
/// (both are proper Fisher-Yates permutations, not comparator tricks).
fn generate_question(cards: &[VocabCard], index: usize, rng: &mut impl Rng) -> Question {
    let correct = cards[index].clone();
    let count = DISTRACTOR_COUNT.min(cards.len() - 1);

    let pool: Vec<&VocabCard> = cards.iter().filter(|c| c.id != correct.id).collect();
    let mut options: Vec<VocabCard> = pool
        .choose_multiple(rng, count)
        .map(|c| (*c).clone())
        .collect();
    options.push(correct.clone());
    options.shuffle(rng);

    Question { correct, options }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn card(id: i64, word: &str, meaning: &str) -> VocabCard {
        VocabCard {
            id,
            word: word.to_string(),
            pinyin: String::new(),
            meaning: meaning.to_string(),
            level: 1,
            sequence_number: id,
            created_at: None,
            example_word: String::new(),
            example_pinyin: String::new(),
            example_meaning: String::new(),
        }
    }

    fn cards(n: i64) -> Vec<VocabCard> {
        (1..=n).map(|i| card(i, &format!("w{}", i), &format!("m{}", i))).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn rejects_single_card() {
        let mut rng = rng();
        let err = MultipleChoiceQuiz::new(cards(1), &mut rng).unwrap_err();
        assert_eq!(err, QuizError::NotEnoughCards { have: 1, need: 2 });
    }

    #[test]
    fn four_distinct_options_with_correct_exactly_once() {
        let mut rng = rng();
        let quiz = MultipleChoiceQuiz::new(cards(10), &mut rng).unwrap();
        let q = quiz.question();
        assert_eq!(q.options.len(), 4);
        let ids: HashSet<i64> = q.options.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(
            q.options.iter().filter(|c| c.id == q.correct.id).count(),
            1
        );
    }

    #[test]
    fn distractor_count_degrades_with_few_cards() {
        let mut rng = rng();
        let quiz = MultipleChoiceQuiz::new(cards(3), &mut rng).unwrap();
        assert_eq!(quiz.question().options.len(), 3);
    }

    #[test]
    fn first_question_asks_first_card() {
        let mut rng = rng();
        let quiz = MultipleChoiceQuiz::new(cards(4), &mut rng).unwrap();
        let q = quiz.question();
        assert_eq!(q.correct.id, 1);
        let ids: HashSet<i64> = q.options.iter().map(|c| c.id).collect();
        assert!(ids.contains(&1));
        assert!(ids.iter().all(|id| (1..=4).contains(id)));
    }

    #[test]
    fn correct_selection_scores_and_advances() {
        let mut rng = rng();
        let mut quiz = MultipleChoiceQuiz::new(cards(4), &mut rng).unwrap();
        assert_eq!(quiz.select(1), Some(true));
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.selected(), Some(1));
        quiz.advance(&mut rng);
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.question().correct.id, 2);
    }

    #[test]
    fn wrong_selection_does_not_score() {
        let mut rng = rng();
        let mut quiz = MultipleChoiceQuiz::new(cards(4), &mut rng).unwrap();
        assert_eq!(quiz.select(3), Some(false));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn only_first_selection_counts() {
        let mut rng = rng();
        let mut quiz = MultipleChoiceQuiz::new(cards(4), &mut rng).unwrap();
        assert_eq!(quiz.select(3), Some(false));
        assert_eq!(quiz.select(1), None);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected(), Some(3));
    }

    #[test]
    fn finishes_after_last_question() {
        let mut rng = rng();
        let mut quiz = MultipleChoiceQuiz::new(cards(2), &mut rng).unwrap();
        quiz.select(1);
        quiz.advance(&mut rng);
        quiz.select(2);
        quiz.advance(&mut rng);
        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 2);
        // Terminal state ignores further input.
        assert_eq!(quiz.select(1), None);
        quiz.advance(&mut rng);
        assert!(quiz.is_finished());
    }

    #[test]
    fn restart_resets_session() {
        let mut rng = rng();
        let mut quiz = MultipleChoiceQuiz::new(cards(2), &mut rng).unwrap();
        quiz.select(1);
        quiz.advance(&mut rng);
        quiz.advance(&mut rng);
        assert!(quiz.is_finished());

        quiz.restart(&mut rng);
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn sampling_reaches_every_distractor() {
        // With 5 cards and repeated generation, every other card should
        // eventually appear as a distractor; a biased sampler that always
        // favored a fixed subset would fail this.
        let mut rng = rng();
        let deck = cards(5);
        let mut seen: HashSet<i64> = HashSet::new();
        for _ in 0..200 {
            let q = generate_question(&deck, 0, &mut rng);
            for opt in &q.options {
                if opt.id != 1 {
                    seen.insert(opt.id);
                }
            }
        }
        assert_eq!(seen, HashSet::from([2, 3, 4, 5]));
    }

    #[test]
    fn shuffle_varies_option_order() {
        let mut rng = rng();
        let deck = cards(4);
        let orders: HashSet<Vec<i64>> = (0..50)
            .map(|_| {
                generate_question(&deck, 0, &mut rng)
                    .options
                    .iter()
                    .map(|c| c.id)
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }
}
