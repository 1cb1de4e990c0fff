//! # enigma-clients
//!
//! The message driver behind the `enigma` binary.
//!
//! Input is a sequence of lines. A line whose first non-blank character is
//! `*` reconfigures the machine (see [`enigma_config::Setting`]); every other
//! line is a message line. Message lines lose their whitespace, are
//! upper-cased where the alphabet allows, and are written out in groups of
//! five symbols.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufRead, Write};

use enigma::{Alphabet, EnigmaError, Machine};
use enigma_config::{ConfigError, Setting};
use thiserror::Error;
use tracing::{debug, info};

/// Output group width.
pub const GROUP: usize = 5;

/// Errors raised while processing messages.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A message line before the first setting line.
    #[error("line {line}: message before the first setting line")]
    MissingSetting {
        /// 1-based input line number.
        line: usize,
    },

    /// A setting line that cannot be parsed or applied.
    #[error("line {line}: {source}")]
    Config {
        /// 1-based input line number.
        line: usize,
        /// Underlying failure.
        #[source]
        source: ConfigError,
    },

    /// A message symbol outside the machine's alphabet.
    #[error("line {line}: {source}")]
    Cipher {
        /// 1-based input line number.
        line: usize,
        /// Underlying failure.
        #[source]
        source: EnigmaError,
    },

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Converts every message in `input` with `machine`, writing one output line
/// per message line.
///
/// # Errors
///
/// - [`DriverError::MissingSetting`] for a message line before any setting.
/// - [`DriverError::Config`] for a bad setting line.
/// - [`DriverError::Cipher`] for a message symbol outside the alphabet.
/// - [`DriverError::Io`] if reading or writing fails.
pub fn process(
    machine: &mut Machine,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut configured = false;
    let mut messages = 0usize;
    let mut symbols = 0usize;

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let number = number + 1;

        if Setting::is_setting_line(&line) {
            Setting::parse(&line, machine.num_rotors())
                .and_then(|setting| setting.apply(machine))
                .map_err(|source| DriverError::Config {
                    line: number,
                    source,
                })?;
            configured = true;
            continue;
        }
        if !configured {
            return Err(DriverError::MissingSetting { line: number });
        }

        let message = normalize(&line, machine.alphabet());
        let converted = machine
            .convert(&message)
            .map_err(|source| DriverError::Cipher {
                line: number,
                source,
            })?;
        let count = converted.chars().count();
        debug!(line = number, symbols = count, "converted message line");
        writeln!(output, "{}", format_groups(&converted, GROUP))?;
        messages += 1;
        symbols += count;
    }

    output.flush()?;
    info!(messages, symbols, "processing complete");
    Ok(())
}

/// Drops whitespace and upper-cases the symbols whose upper case is in
/// `alphabet`.
#[must_use]
pub fn normalize(line: &str, alphabet: &Alphabet) -> String {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            if alphabet.contains(upper) {
                upper
            } else {
                c
            }
        })
        .collect()
}

/// Splits `message` into groups of `group` symbols joined by single spaces.
/// The last group may be shorter. A `group` of zero leaves `message` as is.
#[must_use]
pub fn format_groups(message: &str, group: usize) -> String {
    if group == 0 {
        return message.to_string();
    }
    let symbols: Vec<char> = message.chars().collect();
    symbols
        .chunks(group)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn groups_of_five() {
        assert_eq!(format_groups("", 5), "");
        assert_eq!(format_groups("ABC", 5), "ABC");
        assert_eq!(format_groups("ABCDE", 5), "ABCDE");
        assert_eq!(format_groups("ABCDEFGHIJKL", 5), "ABCDE FGHIJ KL");
        assert_eq!(format_groups("ABCD", 2), "AB CD");
        assert_eq!(format_groups("ABCD", 0), "ABCD");
    }

    #[test]
    fn normalize_respects_alphabet() {
        let upper = Alphabet::uppercase();
        assert_eq!(normalize("  From his\tshoulder ", &upper), "FROMHISSHOULDER");

        let mixed = Alphabet::new("abcXYZ").unwrap();
        assert_eq!(normalize("a b x", &mixed), "abX");
    }
}
