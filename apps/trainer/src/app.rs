//! Interactive terminal front end.
//!
//! Thin presentation over the feed and the vocab-core sessions: browse
//! cards, search, filter by level, and play the two quiz modes. All state
//! transitions live in vocab-core and the feed; this module only renders
//! and forwards input.

use std::io::{self, Write};
use std::time::Duration;

use rand::thread_rng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use vocab_core::{
    BrowseSession, CardFace, FillInQuiz, LevelFilter, MultipleChoiceQuiz, VocabCard,
};

use crate::feed::{FeedSnapshot, FlashcardFeed};

const HELP: &str = "\
Commands:
  search <text>   filter by search text (debounced)
  level <0-6>     filter by HSK level (0 = all)
  list            show the current results
  browse          flip through cards one at a time
  quiz mc         multiple-choice quiz
  quiz fill       fill-in quiz
  refresh         refetch with the current filters
  help            show this help
  quit            exit";

pub struct App {
    feed: FlashcardFeed,
    debounce: Duration,
    lines: Lines<BufReader<Stdin>>,
}

impl App {
    pub fn new(feed: FlashcardFeed, debounce: Duration) -> Self {
        Self {
            feed,
            debounce,
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("HSK vocabulary trainer");
        println!("{}", HELP);
        // Give the initial fetch a moment to start before waiting on it.
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.wait_idle().await;
        self.render_overview(&self.feed.snapshot());

        loop {
            let Some(line) = self.prompt("> ").await? else {
                break;
            };
            let line = line.trim().to_string();
            let (command, rest) = match line.split_once(char::is_whitespace) {
                Some((head, tail)) => (head, tail.trim()),
                None => (line.as_str(), ""),
            };

            match (command, rest) {
                ("", _) => {}
                ("help" | "h", _) => println!("{}", HELP),
                ("quit" | "q", _) => break,
                ("search" | "s", text) => {
                    self.feed.set_query(text);
                    self.wait_debounced().await;
                    self.render_overview(&self.feed.snapshot());
                }
                ("level" | "l", raw) => match raw.parse::<u8>() {
                    Ok(n) if n <= 6 => {
                        self.feed.set_level(LevelFilter::from_raw(n));
                        self.wait_idle().await;
                        self.render_overview(&self.feed.snapshot());
                    }
                    _ => println!("expected a level between 0 and 6"),
                },
                ("refresh", _) => {
                    self.feed.refresh();
                    self.wait_idle().await;
                    self.render_overview(&self.feed.snapshot());
                }
                ("list", _) => self.render_list(&self.feed.snapshot()),
                ("browse", _) => self.browse().await?,
                ("quiz", "mc") => self.quiz_multiple_choice().await?,
                ("quiz", "fill") => self.quiz_fill_in().await?,
                ("quiz", _) => println!("usage: quiz mc | quiz fill"),
                _ => println!("unknown command; try 'help'"),
            }
        }

        Ok(())
    }

    /// Print a prompt and read one line. None on end of input.
    async fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        print!("{}", text);
        io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }

    /// Wait for an already-triggered fetch to settle.
    async fn wait_idle(&mut self) {
        while self.feed.snapshot().is_loading {
            if !self.feed.changed().await {
                return;
            }
        }
    }

    /// Wait out the debounce window, then for the fetch to settle.
    async fn wait_debounced(&mut self) {
        tokio::time::sleep(self.debounce + Duration::from_millis(50)).await;
        self.wait_idle().await;
    }

    fn render_overview(&self, snapshot: &FeedSnapshot) {
        if let Some(error) = &snapshot.error {
            println!("error: {}", error);
            return;
        }
        if snapshot.cards.is_empty() {
            println!("No matching vocabulary. Adjust the search or level filter.");
        } else {
            println!("{} cards loaded.", snapshot.cards.len());
        }
    }

    fn render_list(&self, snapshot: &FeedSnapshot) {
        self.render_overview(snapshot);
        for card in &snapshot.cards {
            println!("  {}  {}  [HSK {}]", card.word, card.pinyin, card.level);
            println!("      {}", card.meaning);
            if card.has_example() {
                println!(
                    "      {} | {} | {}",
                    card.example_word, card.example_pinyin, card.example_meaning
                );
            }
        }
    }

    async fn browse(&mut self) -> anyhow::Result<()> {
        let mut session = BrowseSession::new(self.feed.snapshot().cards);
        if session.is_empty() {
            println!("No cards to browse.");
            return Ok(());
        }

        loop {
            let Some(card) = session.current_card() else {
                println!("No cards to browse.");
                break;
            };
            render_card(card, session.face(), session.is_completed(card.id));
            println!(
                "card {}/{} | progress {:.0}%",
                session.current_index() + 1,
                session.len(),
                session.progress()
            );

            let Some(line) = self.prompt("[n]ext [p]rev [f]lip [d]one [r]eset [b]ack > ").await?
            else {
                break;
            };
            match line.trim() {
                "n" => session.next(),
                "p" => session.previous(),
                "f" => session.flip(),
                "d" => session.mark_completed(),
                "r" => session.reset(),
                "b" => break,
                _ => println!("unknown input"),
            }
        }
        Ok(())
    }

    async fn quiz_multiple_choice(&mut self) -> anyhow::Result<()> {
        let cards = self.feed.snapshot().cards;
        let mut rng = thread_rng();
        let mut quiz = match MultipleChoiceQuiz::new(cards, &mut rng) {
            Ok(quiz) => quiz,
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        };

        loop {
            if quiz.is_finished() {
                println!("Quiz complete! Score: {}/{}", quiz.score(), quiz.total());
                let Some(line) = self.prompt("[r]estart [b]ack > ").await? else {
                    break;
                };
                match line.trim() {
                    "r" => quiz.restart(&mut rng),
                    _ => break,
                }
                continue;
            }

            let question = quiz.question().clone();
            println!(
                "Question {}/{}  [HSK {}]",
                quiz.current_index() + 1,
                quiz.total(),
                question.correct.level
            );
            println!("{}  {}", question.correct.word, question.correct.pinyin);
            println!("Pick the right meaning:");
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option.meaning);
            }

            let Some(line) = self.prompt("answer > ").await? else {
                break;
            };
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=question.options.len()).contains(n))
                .map(|n| question.options[n - 1].id);
            let Some(option_id) = picked else {
                println!("enter a number between 1 and {}", question.options.len());
                continue;
            };

            match quiz.select(option_id) {
                Some(true) => println!("Correct!"),
                Some(false) => {
                    println!("Wrong. The answer was: {}", question.correct.meaning)
                }
                None => {}
            }
            println!("Score: {}/{}", quiz.score(), quiz.current_index() + 1);
            quiz.advance(&mut rng);
        }
        Ok(())
    }

    async fn quiz_fill_in(&mut self) -> anyhow::Result<()> {
        let cards = self.feed.snapshot().cards;
        let mut quiz = match FillInQuiz::new(cards) {
            Ok(quiz) => quiz,
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        };

        loop {
            if quiz.is_finished() {
                println!("Quiz complete! Score: {}/{}", quiz.score(), quiz.total());
                let Some(line) = self.prompt("[r]estart [b]ack > ").await? else {
                    break;
                };
                match line.trim() {
                    "r" => quiz.restart(),
                    _ => break,
                }
                continue;
            }

            let card = quiz.prompt().clone();
            println!(
                "Question {}/{}  [HSK {}]",
                quiz.current_index() + 1,
                quiz.total(),
                card.level
            );
            println!("Type the word meaning: {}", card.meaning);

            let Some(line) = self.prompt("answer > ").await? else {
                break;
            };
            if let Some(check) = quiz.check(&line) {
                if check.is_correct {
                    println!("Correct!");
                } else {
                    println!("Wrong. The answer was: {}", card.word);
                }
            }
            println!("Score: {}/{}", quiz.score(), quiz.current_index() + 1);
            quiz.advance();
        }
        Ok(())
    }
}

fn render_card(card: &VocabCard, face: CardFace, completed: bool) {
    let marker = if completed { " (done)" } else { "" };
    match face {
        CardFace::Front => {
            println!("┌─ {}  {}  [HSK {}]{}", card.word, card.pinyin, card.level, marker);
        }
        CardFace::Back => {
            println!("┌─ {}{}", card.meaning, marker);
            if card.has_example() {
                println!("│  {}", card.example_word);
                println!("│  {}", card.example_pinyin);
                println!("│  {}", card.example_meaning);
            }
        }
    }
}
