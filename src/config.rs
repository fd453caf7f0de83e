use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dictionary_path: String,
    pub board_path: String,
    pub board_rows: usize,
    pub board_cols: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let dictionary_path =
            env::var("DICTIONARY_PATH").unwrap_or_else(|_| "dict.txt".to_string());

        let board_path = env::var("BOARD_PATH").unwrap_or_else(|_| "board.txt".to_string());

        let board_rows = env::var("BOARD_ROWS")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .context("BOARD_ROWS must be a number")?;

        let board_cols = env::var("BOARD_COLS")
            .unwrap_or_else(|_| "14".to_string())
            .parse()
            .context("BOARD_COLS must be a number")?;

        Ok(Config {
            dictionary_path,
            board_path,
            board_rows,
            board_cols,
        })
    }
}
