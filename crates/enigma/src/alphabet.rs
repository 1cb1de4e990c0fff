//! Ordered symbol sets with a bijection onto `0..size`.

use std::collections::HashMap;
use std::fmt;

use crate::error::{EnigmaError, Result};

/// An ordered set of symbols, each identified by its index.
///
/// The alphabet is immutable once built and is shared between permutations,
/// rotors and machines through an `Arc`.
///
/// # Example
///
/// ```
/// use enigma::Alphabet;
///
/// let abc = Alphabet::range('A', 'D').unwrap();
/// assert_eq!(abc.size(), 4);
/// assert_eq!(abc.to_char(2), 'C');
/// assert_eq!(abc.to_index('D'), Some(3));
/// assert_eq!(abc.to_index('Z'), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from the symbols of `symbols`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::EmptyAlphabet`] for an empty string,
    /// [`EnigmaError::DuplicateSymbol`] when a symbol repeats, and
    /// [`EnigmaError::ReservedSymbol`] for whitespace, `(`, `)` or `*`.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for symbol in symbols.chars() {
            if symbol.is_whitespace() || matches!(symbol, '(' | ')' | '*') {
                return Err(EnigmaError::ReservedSymbol { symbol });
            }
            if index.insert(symbol, ordered.len()).is_some() {
                return Err(EnigmaError::DuplicateSymbol { symbol });
            }
            ordered.push(symbol);
        }
        if ordered.is_empty() {
            return Err(EnigmaError::EmptyAlphabet);
        }
        Ok(Self {
            symbols: ordered,
            index,
        })
    }

    /// Builds the inclusive character range `first..=last`.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::InvalidRange`] when `last` precedes `first`, and
    /// the errors of [`Alphabet::new`] when the range covers reserved symbols.
    pub fn range(first: char, last: char) -> Result<Self> {
        if last < first {
            return Err(EnigmaError::InvalidRange { first, last });
        }
        let symbols: String = (first..=last).collect();
        Self::new(&symbols)
    }

    /// The 26 upper-case Latin letters.
    #[must_use]
    pub fn uppercase() -> Self {
        let symbols: Vec<char> = ('A'..='Z').collect();
        let index = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, index }
    }

    /// Number of symbols.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Symbol at `index`, taken modulo the alphabet size.
    #[inline]
    #[must_use]
    pub fn to_char(&self, index: usize) -> char {
        self.symbols[index % self.symbols.len()]
    }

    /// Index of `symbol`, or `None` if it is not in the alphabet.
    #[inline]
    #[must_use]
    pub fn to_index(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Index of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::UnknownSymbol`] if it is not in the alphabet.
    pub fn index_of(&self, symbol: char) -> Result<usize> {
        self.to_index(symbol)
            .ok_or(EnigmaError::UnknownSymbol { symbol })
    }

    /// Returns true if `symbol` belongs to the alphabet.
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// The symbols in index order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::uppercase()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({self})")
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_matches_range() {
        assert_eq!(Alphabet::uppercase(), Alphabet::range('A', 'Z').unwrap());
        assert_eq!(Alphabet::default().size(), 26);
    }

    #[test]
    fn index_bijection() {
        let alpha = Alphabet::new("QWERTY").unwrap();
        for i in 0..alpha.size() {
            assert_eq!(alpha.to_index(alpha.to_char(i)), Some(i));
        }
        assert_eq!(alpha.to_char(6), 'Q');
    }

    #[test]
    fn rejects_bad_symbol_sets() {
        assert_eq!(Alphabet::new(""), Err(EnigmaError::EmptyAlphabet));
        assert_eq!(
            Alphabet::new("ABA"),
            Err(EnigmaError::DuplicateSymbol { symbol: 'A' })
        );
        assert_eq!(
            Alphabet::new("A(B"),
            Err(EnigmaError::ReservedSymbol { symbol: '(' })
        );
        assert_eq!(
            Alphabet::range('Z', 'A'),
            Err(EnigmaError::InvalidRange {
                first: 'Z',
                last: 'A'
            })
        );
    }

    #[test]
    fn index_of_unknown_symbol() {
        let alpha = Alphabet::uppercase();
        assert_eq!(alpha.index_of('K').unwrap(), 10);
        assert_eq!(
            alpha.index_of('k'),
            Err(EnigmaError::UnknownSymbol { symbol: 'k' })
        );
    }
}
