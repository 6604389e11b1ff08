// Runtime configuration. The program takes no flags or environment
// variables, so this only captures fixed defaults in one place.

use std::io::IsTerminal;
use std::path::PathBuf;

/// Relative path of the quotes file, resolved against the working directory.
pub const QUOTES_FILE_PATH: &str = "data/quotes.txt";

/// Where the quote collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOrigin {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub origin: QuoteOrigin,
    /// Style quote lines with terminal colors.
    pub styled: bool,
}

impl Config {
    /// Use the quotes compiled into the binary instead of the data file.
    pub fn builtin() -> Self {
        Config {
            origin: QuoteOrigin::Builtin,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            origin: QuoteOrigin::File(PathBuf::from(QUOTES_FILE_PATH)),
            styled: std::io::stdout().is_terminal(),
        }
    }
}
