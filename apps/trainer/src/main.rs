use clap::Parser;

/// Interactive HSK vocabulary trainer backed by a remote flashcard API.
#[derive(Parser)]
#[command(name = "hsk-trainer", version, about)]
struct Cli {
    /// Initial HSK level filter (1-6, 0 = all levels).
    #[arg(long, default_value_t = 0)]
    level: u8,

    /// Initial search text.
    #[arg(long, default_value = "")]
    query: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    hsk_trainer::run(cli.level, cli.query).await
}
