//! Debounced flashcard feed.
//!
//! The Rust rendition of the data-fetching hook: a spawned task owns the
//! filter state, debounces search edits, fetches from a [`CardSource`] and
//! publishes the observable state through a watch channel. Search edits are
//! debounced; level changes and explicit refreshes fetch immediately.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use vocab_core::{LevelFilter, VocabCard};

use crate::api::{CardSource, FetchError};

/// Quiet period before an edited search query triggers a fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Observable feed state.
///
/// `query` echoes edits immediately; the fetched list trails it by the
/// debounce interval. On a failed fetch `cards` keeps the last successful
/// result and `error` carries the rendered message.
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub cards: Vec<VocabCard>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub level: LevelFilter,
}

/// Initial filter state for a feed.
#[derive(Debug, Clone)]
pub struct FeedOptions {
    pub level: LevelFilter,
    pub initial_query: String,
    pub debounce: Duration,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            level: LevelFilter::All,
            initial_query: String::new(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

enum Command {
    SetQuery(String),
    SetLevel(LevelFilter),
    Refresh,
}

/// Handle to a running feed task.
///
/// Dropping the handle closes the command channel, which terminates the
/// task; results of fetches still in flight are discarded.
pub struct FlashcardFeed {
    commands: mpsc::UnboundedSender<Command>,
    snapshot: watch::Receiver<FeedSnapshot>,
}

impl FlashcardFeed {
    /// Spawn the feed task. One fetch for the initial filter state is
    /// issued right away.
    pub fn spawn(source: Arc<dyn CardSource>, options: FeedOptions) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        let snapshot = FeedSnapshot {
            cards: Vec::new(),
            is_loading: false,
            error: None,
            query: options.initial_query.clone(),
            level: options.level,
        };
        let (publisher, snapshot_rx) = watch::channel(snapshot.clone());

        let task = FeedTask {
            source,
            debounce: options.debounce,
            debounced_query: options.initial_query,
            deadline: None,
            latest_seq: 0,
            snapshot,
            publisher,
            results_tx,
        };
        tokio::spawn(task.run(command_rx, results_rx));

        Self {
            commands,
            snapshot: snapshot_rx,
        }
    }

    /// Update the search text. The echo in the snapshot changes right away;
    /// the fetch fires once the text has been quiet for the debounce
    /// interval, using the last value.
    pub fn set_query(&self, query: impl Into<String>) {
        let _ = self.commands.send(Command::SetQuery(query.into()));
    }

    /// Change the level filter. Fetches immediately.
    pub fn set_level(&self, level: LevelFilter) {
        let _ = self.commands.send(Command::SetLevel(level));
    }

    /// Refetch with the current filter state.
    pub fn refresh(&self) {
        let _ = self.commands.send(Command::Refresh);
    }

    /// Current feed state.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Wait for the next state change. Returns false once the feed task has
    /// ended.
    pub async fn changed(&mut self) -> bool {
        self.snapshot.changed().await.is_ok()
    }
}

type FetchOutcome = Result<Vec<VocabCard>, FetchError>;

struct FeedTask {
    source: Arc<dyn CardSource>,
    debounce: Duration,
    /// The settled query value fetches are issued with; trails
    /// `snapshot.query` by the debounce interval.
    debounced_query: String,
    deadline: Option<Instant>,
    latest_seq: u64,
    snapshot: FeedSnapshot,
    publisher: watch::Sender<FeedSnapshot>,
    results_tx: mpsc::UnboundedSender<(u64, FetchOutcome)>,
}

impl FeedTask {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut results: mpsc::UnboundedReceiver<(u64, FetchOutcome)>,
    ) {
        self.start_fetch();

        loop {
            tokio::select! {
                maybe_command = commands.recv() => match maybe_command {
                    Some(command) => self.on_command(command),
                    None => break,
                },
                Some((seq, outcome)) = results.recv() => self.on_result(seq, outcome),
                _ = sleep_until(self.deadline.unwrap_or_else(Instant::now)),
                    if self.deadline.is_some() => self.on_debounce_elapsed(),
            }
        }
    }

    fn on_command(&mut self, command: Command) {
        match command {
            Command::SetQuery(query) => {
                self.snapshot.query = query;
                self.deadline = Some(Instant::now() + self.debounce);
                self.publish();
            }
            Command::SetLevel(level) => {
                self.snapshot.level = level;
                self.start_fetch();
            }
            Command::Refresh => self.start_fetch(),
        }
    }

    fn on_debounce_elapsed(&mut self) {
        self.deadline = None;
        if self.snapshot.query != self.debounced_query {
            self.debounced_query = self.snapshot.query.clone();
            self.start_fetch();
        }
    }

    fn on_result(&mut self, seq: u64, outcome: FetchOutcome) {
        // Overlapping fetches are not cancelled; the sequence number makes
        // the last issued request win and a slow stale one a no-op.
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale fetch result");
            return;
        }
        match outcome {
            Ok(cards) => {
                tracing::debug!(count = cards.len(), "flashcards fetched");
                self.snapshot.cards = cards;
                self.snapshot.error = None;
            }
            Err(err) => {
                tracing::warn!(%err, "flashcard fetch failed");
                self.snapshot.error = Some(err.to_string());
            }
        }
        self.snapshot.is_loading = false;
        self.publish();
    }

    fn start_fetch(&mut self) {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.snapshot.is_loading = true;
        self.snapshot.error = None;
        self.publish();

        let source = Arc::clone(&self.source);
        let level = self.snapshot.level;
        let query = self.debounced_query.clone();
        let results_tx = self.results_tx.clone();
        tracing::debug!(seq, ?level, query = %query, "fetching flashcards");
        tokio::spawn(async move {
            let outcome = source.fetch(level, &query).await;
            let _ = results_tx.send((seq, outcome));
        });
    }

    fn publish(&self) {
        let _ = self.publisher.send(self.snapshot.clone());
    }
}
