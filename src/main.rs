mod board;
mod config;
mod dictionary;
mod game;
mod models;

use anyhow::Result;
use board::{Board, BoardError};
use config::Config;
use dictionary::Dictionary;
use game::SearchDriver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordgrid=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary; a missing file is not fatal, the search just
    // finds nothing.
    let dictionary = match Dictionary::load(&config.dictionary_path).await {
        Ok(dict) => dict,
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary from {}: {}. Searching with an empty word list.",
                config.dictionary_path,
                e
            );
            Dictionary::empty()
        }
    };

    // Load board. An unreadable file degrades to an empty board like
    // the dictionary; a line too short for the configured grid is a
    // hard error rather than an out-of-bounds read.
    let board = match Board::load(&config.board_path, config.board_rows, config.board_cols).await {
        Ok(board) => board,
        Err(e @ BoardError::LineTooShort { .. }) => return Err(e.into()),
        Err(e) => {
            tracing::warn!("Failed to load board: {}. Searching an empty board.", e);
            Board::empty()
        }
    };

    // Echo the board before searching
    for row in board.row_texts() {
        println!("{row}");
    }

    let driver = SearchDriver::new(&board, &dictionary);
    driver.run(|report| {
        println!();
        println!("FOUND! --> {}", report.word);
        println!("X: {}", report.x);
        println!("Y: {}", report.y);
        println!("DIRECTION: {}", report.direction.label());
        println!();
    });

    Ok(())
}
