//! HSK vocabulary trainer.
//!
//! Fetches Chinese vocabulary from a remote flashcard API, with debounced
//! search and level filtering, and drives flashcard browsing and quiz
//! sessions from `vocab-core` behind a small terminal front end.

pub mod api;
pub mod app;
pub mod config;
pub mod feed;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::LevelFilter;

use crate::api::ApiClient;
use crate::app::App;
use crate::config::Config;
use crate::feed::{FeedOptions, FlashcardFeed};

pub async fn run(initial_level: u8, initial_query: String) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(url = %config.api_base_url, "starting trainer");

    let client = ApiClient::new(config.api_base_url.clone());
    let feed = FlashcardFeed::spawn(
        Arc::new(client),
        FeedOptions {
            level: LevelFilter::from_raw(initial_level),
            initial_query,
            debounce: config.debounce,
        },
    );

    App::new(feed, config.debounce).run().await
}
