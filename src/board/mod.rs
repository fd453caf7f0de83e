use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to read board file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("board line has {actual} characters, need at least {expected} for a {rows}x{cols} grid")]
    LineTooShort {
        expected: usize,
        actual: usize,
        rows: usize,
        cols: usize,
    },
}

/// The letter grid to be searched.
///
/// Cells are addressed as (x, y) where x is the column and y is the row,
/// both zero-based. The grid is immutable once loaded.
#[derive(Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<char>>,
}

impl Board {
    /// Load a board from a file holding one flattened row-major line of
    /// at least `rows * cols` characters.
    pub async fn load<P: AsRef<Path>>(path: P, rows: usize, cols: usize) -> Result<Self, BoardError> {
        let content = fs::read_to_string(&path).await.map_err(|source| BoardError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        let line = content.lines().next().unwrap_or("");
        let board = Self::from_line(line, rows, cols)?;

        tracing::info!("Loaded {}x{} board", rows, cols);

        Ok(board)
    }

    /// Slice a flattened row-major line into a `rows` x `cols` grid.
    /// Characters beyond `rows * cols` are ignored.
    pub fn from_line(line: &str, rows: usize, cols: usize) -> Result<Self, BoardError> {
        let chars: Vec<char> = line.chars().collect();
        let expected = rows * cols;

        if chars.len() < expected {
            return Err(BoardError::LineTooShort {
                expected,
                actual: chars.len(),
                rows,
                cols,
            });
        }

        let cells = (0..rows)
            .map(|y| chars[y * cols..(y + 1) * cols].to_vec())
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Create a zero-size board (load-failure fallback; searches find nothing)
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Character at column `x`, row `y`. Callers check bounds first.
    pub fn at(&self, x: usize, y: usize) -> char {
        self.cells[y][x]
    }

    /// Rows as strings, top to bottom (for echoing the board)
    pub fn row_texts(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }

    /// Row-major flattening of the whole grid
    pub fn flatten(&self) -> String {
        self.cells.iter().flatten().collect()
    }
}
