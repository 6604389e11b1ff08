// Quote source: holds the immutable list of quotes and picks one at
// random. The list is either embedded in the binary or read once from a
// plain text file with one quote per line.

use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::QuoteOrigin;

/// Quotes compiled into the binary. Same content as `data/quotes.txt`.
const BUILTIN_QUOTES: &str = include_str!("../data/quotes.txt");

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("an error occurs when reading quotes file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no quotes available in {origin}")]
    Empty { origin: String },
}

/// Non-empty, read-only collection of quotes.
#[derive(Debug, Clone)]
pub struct QuoteSource {
    quotes: Vec<String>,
}

impl QuoteSource {
    /// Source backed by the embedded developer quotes.
    pub fn builtin() -> Self {
        let quotes: Vec<String> = BUILTIN_QUOTES.lines().map(str::to_string).collect();
        debug_assert!(!quotes.is_empty(), "embedded quotes file is empty");
        QuoteSource { quotes }
    }

    /// Build a source from arbitrary strings. Fails if there are none.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, QuoteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let quotes: Vec<String> = lines.into_iter().map(Into::into).collect();
        if quotes.is_empty() {
            return Err(QuoteError::Empty {
                origin: "in-memory list".into(),
            });
        }
        Ok(QuoteSource { quotes })
    }

    /// Read a newline-delimited quotes file. Every line, including a final
    /// unterminated one, becomes a quote. The file is closed before this
    /// returns, whatever the outcome.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let read_err = |source| QuoteError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        let quotes = BufReader::new(file)
            .lines()
            .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_err)?;

        if quotes.is_empty() {
            return Err(QuoteError::Empty {
                origin: path.display().to_string(),
            });
        }

        tracing::debug!(path = %path.display(), count = quotes.len(), "loaded quotes file");
        Ok(QuoteSource { quotes })
    }

    pub fn from_origin(origin: &QuoteOrigin) -> Result<Self, QuoteError> {
        match origin {
            QuoteOrigin::Builtin => Ok(Self::builtin()),
            QuoteOrigin::File(path) => Self::load(path),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// Pick a quote uniformly at random using the thread-local RNG.
    pub fn random_quote(&self) -> &str {
        self.random_quote_with(&mut rand::rng())
    }

    /// Pick a quote uniformly at random with the given RNG. Repeats are
    /// allowed.
    pub fn random_quote_with<R: Rng>(&self, rng: &mut R) -> &str {
        let i = rng.random_range(0..self.quotes.len());
        &self.quotes[i]
    }
}
