// UI layer: the yes/no prompt and the interactive loop that prints quotes.
// Both work over any `BufRead`/`Write` pair so scripted input can drive
// them the same way a terminal does.

use crate::quote::QuoteSource;
use crossterm::style::{style, Stylize};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Would you like an inspirational quote? (yes/no, or 'q' to quit)";
const INVALID_INPUT: &str = "Invalid input. Please enter 'yes', 'no', or 'q'.";
const WELCOME: &str = "Welcome, Developer! Get inspired with a random quote.";
const FAREWELL: &str = "Goodbye, keep coding!";

/// Classification of one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Accept,
    Decline,
    Invalid,
}

impl Answer {
    /// Trim and lower-case the input, then match it against the accepted
    /// responses.
    pub fn classify(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "q" | "no" | "n" => Answer::Decline,
            "yes" | "y" => Answer::Accept,
            _ => Answer::Invalid,
        }
    }
}

/// Ask until the user gives a valid answer. Returns `true` to show a quote
/// and `false` to quit. Running out of input, or failing to read it, counts
/// as quitting; only failures to write the prompt are returned as errors.
pub fn prompt_user<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        writeln!(output, "{PROMPT}")?;
        write!(output, "> ")?;
        output.flush()?;

        // Raw bytes so a line that is not UTF-8 is classified, not fatal.
        let mut buf = Vec::new();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                tracing::debug!("input exhausted");
                writeln!(output, "Error reading input: EOF")?;
                return Ok(false);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                writeln!(output, "Error reading input: {e}")?;
                return Ok(false);
            }
        }

        let line = String::from_utf8_lossy(&buf);
        match Answer::classify(&line) {
            Answer::Accept => return Ok(true),
            Answer::Decline => return Ok(false),
            Answer::Invalid => {
                tracing::debug!(input = line.trim(), "invalid answer");
                writeln!(output, "{INVALID_INPUT}")?;
            }
        }
    }
}

/// Main interactive loop. Prints a quote each time the user accepts and
/// stops on decline. Returns how many quotes were shown.
pub fn run_session<R: BufRead, W: Write>(
    source: &QuoteSource,
    input: &mut R,
    output: &mut W,
    styled: bool,
) -> io::Result<usize> {
    writeln!(output, "{WELCOME}")?;

    let mut shown = 0;
    while prompt_user(input, output)? {
        let quote = source.random_quote();
        if styled {
            writeln!(output, "\n💡 {}\n", style(quote).bold().yellow())?;
        } else {
            writeln!(output, "\n💡 {quote}\n")?;
        }
        shown += 1;
    }

    writeln!(output, "{FAREWELL}")?;
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (usize, String) {
        let source = QuoteSource::from_lines(["stay curious"]).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let shown = run_session(&source, &mut input, &mut output, false).unwrap();
        (shown, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_yes_variants() {
        for input in ["yes", "Y", "y", " yes ", "YES\n"] {
            assert_eq!(Answer::classify(input), Answer::Accept, "{input:?}");
        }
    }

    #[test]
    fn declines_no_and_quit_variants() {
        for input in ["no", "N", "n", "q", "Q", "  No\r\n"] {
            assert_eq!(Answer::classify(input), Answer::Decline, "{input:?}");
        }
    }

    #[test]
    fn other_input_is_invalid() {
        for input in ["maybe", "", "yess", "quit", "y e s"] {
            assert_eq!(Answer::classify(input), Answer::Invalid, "{input:?}");
        }
    }

    #[test]
    fn prompt_retries_until_valid_answer() {
        let mut input = Cursor::new(b"maybe\nsure\nY\n".to_vec());
        let mut output = Vec::new();
        assert!(prompt_user(&mut input, &mut output).unwrap());

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(INVALID_INPUT).count(), 2);
        assert_eq!(text.matches(PROMPT).count(), 3);
    }

    #[test]
    fn prompt_treats_end_of_input_as_decline() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert!(!prompt_user(&mut input, &mut output).unwrap());
        assert!(String::from_utf8(output).unwrap().contains("Error reading input"));
    }

    #[test]
    fn non_utf8_line_is_invalid_not_fatal() {
        let mut input = Cursor::new(b"\xff\xfe\nyes\n".to_vec());
        let mut output = Vec::new();
        assert!(prompt_user(&mut input, &mut output).unwrap());

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(INVALID_INPUT).count(), 1);
        assert!(!text.contains("Error reading input"));
    }

    struct BrokenInput;

    impl io::Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    impl BufRead for BrokenInput {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn read_error_is_reported_as_decline() {
        let mut output = Vec::new();
        assert!(!prompt_user(&mut BrokenInput, &mut output).unwrap());
        assert!(String::from_utf8(output).unwrap().contains("Error reading input: boom"));

        let source = QuoteSource::from_lines(["stay curious"]).unwrap();
        let mut output = Vec::new();
        let shown = run_session(&source, &mut BrokenInput, &mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(shown, 0);
        assert!(text.contains("Error reading input: boom"));
        assert!(text.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn prompt_survives_long_invalid_streams() {
        let script = "nope\n".repeat(100_000) + "q\n";
        let mut input = Cursor::new(script.into_bytes());
        let mut output = io::sink();
        assert!(!prompt_user(&mut input, &mut output).unwrap());
    }

    #[test]
    fn yes_then_quit_shows_one_quote() {
        let (shown, text) = run("yes\nq\n");
        assert_eq!(shown, 1);
        assert_eq!(text.matches("💡 stay curious").count(), 1);
        assert!(text.trim_end().ends_with(FAREWELL));
        assert!(text.starts_with(WELCOME));
    }

    #[test]
    fn invalid_then_yes_then_no() {
        let (shown, text) = run("maybe\nyes\nno\n");
        assert_eq!(shown, 1);
        assert_eq!(text.matches(INVALID_INPUT).count(), 1);
        let invalid_at = text.find(INVALID_INPUT).unwrap();
        let quote_at = text.find("💡").unwrap();
        let bye_at = text.find(FAREWELL).unwrap();
        assert!(invalid_at < quote_at && quote_at < bye_at);
    }

    #[test]
    fn exhausted_input_still_says_goodbye() {
        let (shown, text) = run("y\ny\n");
        assert_eq!(shown, 2);
        assert!(text.contains("Error reading input: EOF"));
        assert!(text.trim_end().ends_with(FAREWELL));
    }
}
