use anyhow::Result;
use std::path::Path;
use tokio::fs;

/// The word list to search for, kept in file order.
///
/// Words are stored verbatim: no trimming, no case folding, no
/// deduplication. Matching elsewhere is raw character equality, so the
/// file contents are the exact match targets. Lookup is a linear walk.
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load a newline-delimited word list from a file, preserving order.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let words: Vec<String> = content.lines().map(|line| line.to_string()).collect();

        tracing::info!("Loaded {} words into dictionary", words.len());

        Ok(Self { words })
    }

    /// Create an empty dictionary (load-failure fallback and tests)
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Build a dictionary from an in-memory word list, preserving order
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Words in file order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
