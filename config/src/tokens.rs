//! Whitespace-separated token stream with one token of lookahead.
//!
//! Rotor descriptions have no terminator: a description ends where the next
//! rotor's name begins. Reading them needs a peek at the following token,
//! which the stream provides instead of a lookahead field on the reader.

use std::iter::Peekable;
use std::str::SplitWhitespace;

use crate::error::{ConfigError, Result};

/// Tokens of a configuration text.
pub struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    /// Splits `text` on whitespace.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().peekable(),
        }
    }

    /// Returns true when no tokens remain.
    pub fn is_empty(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    /// The next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    /// Consumes the next token, if any.
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    /// The next token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Truncated`] naming `expected` when the stream
    /// is exhausted.
    pub fn expect(&mut self, expected: &'static str) -> Result<&'a str> {
        self.inner.next().ok_or(ConfigError::Truncated { expected })
    }

    /// The next token read as a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Truncated`] when the stream is exhausted and
    /// [`ConfigError::BadNumber`] when the token is not a number.
    pub fn number(&mut self, what: &'static str) -> Result<usize> {
        let token = self.expect(what)?;
        token.parse().map_err(|_| ConfigError::BadNumber {
            what,
            found: token.to_string(),
        })
    }

    /// Consumes the cycle tokens that follow, joined by single spaces.
    ///
    /// A token belongs to the cycles if it starts with `(` or if a `(` is
    /// still open, so `(AB CD)` is read as a single cycle.
    pub fn cycles(&mut self) -> String {
        let mut cycles = String::new();
        while let Some(token) = self.inner.peek() {
            if !token.starts_with('(') && !cycle_open(&cycles) {
                break;
            }
            if !cycles.is_empty() {
                cycles.push(' ');
            }
            cycles.push_str(token);
            self.inner.next();
        }
        cycles
    }

    /// Consumes the remaining tokens, joined by single spaces.
    pub fn rest(&mut self) -> String {
        self.inner.by_ref().collect::<Vec<_>>().join(" ")
    }
}

fn cycle_open(cycles: &str) -> bool {
    match (cycles.rfind('('), cycles.rfind(')')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_truncation() {
        let mut tokens = Tokens::new("  5\n3 x ");
        assert_eq!(tokens.number("slots").unwrap(), 5);
        assert_eq!(tokens.number("pawls").unwrap(), 3);
        assert!(matches!(
            tokens.number("more"),
            Err(ConfigError::BadNumber { what: "more", .. })
        ));
        assert!(tokens.is_empty());
        assert!(matches!(
            tokens.expect("name"),
            Err(ConfigError::Truncated { expected: "name" })
        ));
    }

    #[test]
    fn cycles_stop_at_next_name() {
        let mut tokens = Tokens::new("(AB) (CD)\n  (EF) II ME (XY)");
        assert_eq!(tokens.cycles(), "(AB) (CD) (EF)");
        assert_eq!(tokens.peek(), Some("II"));
    }

    #[test]
    fn cycles_continue_while_open() {
        let mut tokens = Tokens::new("(AB CD) (E F) next");
        assert_eq!(tokens.cycles(), "(AB CD) (E F)");
        assert_eq!(tokens.expect("name").unwrap(), "next");
    }

    #[test]
    fn no_cycles() {
        let mut tokens = Tokens::new("Beta N");
        assert_eq!(tokens.cycles(), "");
        assert_eq!(tokens.rest(), "Beta N");
        assert!(tokens.is_empty());
    }
}
