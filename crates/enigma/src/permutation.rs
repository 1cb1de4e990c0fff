//! Substitutions over an alphabet, written in cycle notation.
//!
//! A cycle string such as `"(ABC) (DE)"` maps `A→B`, `B→C`, `C→A`, `D→E`
//! and `E→D`. Symbols that appear in no cycle map to themselves.
//! Whitespace anywhere in the string is ignored.
//!
//! Both directions are stored as index tables, so every lookup is a single
//! array access.

use std::fmt;
use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};

/// A permutation of the indices `0..alphabet.size()`.
///
/// Immutable after construction. `forward` and `backward` are mutual
/// inverses.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use enigma::{Alphabet, Permutation};
///
/// let alpha = Arc::new(Alphabet::uppercase());
/// let p = Permutation::new("(PNH) (ABDFIKLZYXW) (JC)", alpha).unwrap();
/// assert_eq!(p.permute_char('A'), 'B');
/// assert_eq!(p.permute_char('W'), 'A');
/// assert_eq!(p.invert_char('B'), 'A');
/// assert_eq!(p.permute_char('G'), 'G');
/// assert!(!p.derangement());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Arc<Alphabet>,
    forward: Vec<usize>,
    backward: Vec<usize>,
}

impl Permutation {
    /// Parses `cycles` over `alphabet`.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::MalformedCycleSpec`] for an unterminated `(`, a nested
    ///   `(`, an unmatched `)`, or a symbol outside any cycle.
    /// - [`EnigmaError::UnknownSymbol`] for a cycle member outside the alphabet.
    /// - [`EnigmaError::RepeatedCycleSymbol`] when a symbol occurs twice.
    pub fn new(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Self> {
        let size = alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut backward = forward.clone();
        let mut placed = vec![false; size];

        for cycle in split_cycles(cycles)? {
            let members = cycle
                .iter()
                .map(|&symbol| alphabet.index_of(symbol))
                .collect::<Result<Vec<_>>>()?;
            for &member in &members {
                if std::mem::replace(&mut placed[member], true) {
                    return Err(EnigmaError::RepeatedCycleSymbol {
                        symbol: alphabet.to_char(member),
                    });
                }
            }
            for (i, &from) in members.iter().enumerate() {
                let to = members[(i + 1) % members.len()];
                forward[from] = to;
                backward[to] = from;
            }
        }

        Ok(Self {
            alphabet,
            forward,
            backward,
        })
    }

    /// The permutation that maps every symbol to itself.
    #[must_use]
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let forward: Vec<usize> = (0..alphabet.size()).collect();
        Self {
            backward: forward.clone(),
            forward,
            alphabet,
        }
    }

    /// Size of the underlying alphabet.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// The alphabet this permutation ranges over.
    #[must_use]
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Image of `index` (taken modulo the size).
    #[inline]
    #[must_use]
    pub fn permute(&self, index: usize) -> usize {
        self.forward[index % self.size()]
    }

    /// Pre-image of `index` (taken modulo the size).
    #[inline]
    #[must_use]
    pub fn invert(&self, index: usize) -> usize {
        self.backward[index % self.size()]
    }

    /// Image of `symbol`; symbols outside the alphabet pass through.
    #[must_use]
    pub fn permute_char(&self, symbol: char) -> char {
        match self.alphabet.to_index(symbol) {
            Some(i) => self.alphabet.to_char(self.forward[i]),
            None => symbol,
        }
    }

    /// Pre-image of `symbol`; symbols outside the alphabet pass through.
    #[must_use]
    pub fn invert_char(&self, symbol: char) -> char {
        match self.alphabet.to_index(symbol) {
            Some(i) => self.alphabet.to_char(self.backward[i]),
            None => symbol,
        }
    }

    /// Returns true iff no symbol maps to itself.
    #[must_use]
    pub fn derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &j)| i != j)
    }

    /// Returns true iff every symbol maps to itself.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// The non-trivial cycles, each starting at its lowest index, in order
    /// of that index.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<char>> {
        let mut visited = vec![false; self.size()];
        let mut cycles = Vec::new();
        for start in 0..self.size() {
            if visited[start] || self.forward[start] == start {
                continue;
            }
            let mut cycle = Vec::new();
            let mut at = start;
            while !visited[at] {
                visited[at] = true;
                cycle.push(self.alphabet.to_char(at));
                at = self.forward[at];
            }
            cycles.push(cycle);
        }
        cycles
    }
}

/// Splits a cycle string into its groups of symbols.
fn split_cycles(cycles: &str) -> Result<Vec<Vec<char>>> {
    let malformed = |reason: &'static str| EnigmaError::MalformedCycleSpec {
        cycles: cycles.to_string(),
        reason,
    };
    let mut groups = Vec::new();
    let mut open: Option<Vec<char>> = None;
    for c in cycles.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '(' => {
                if open.is_some() {
                    return Err(malformed("'(' inside an open cycle"));
                }
                open = Some(Vec::new());
            }
            ')' => match open.take() {
                Some(group) => groups.push(group),
                None => return Err(malformed("')' without a matching '('")),
            },
            _ => match open.as_mut() {
                Some(group) => group.push(c),
                None => return Err(malformed("symbol outside of a cycle")),
            },
        }
    }
    if open.is_some() {
        return Err(malformed("no closing parenthesis"));
    }
    Ok(groups)
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cycle) in self.cycles().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "(")?;
            for symbol in cycle {
                write!(f, "{symbol}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation({self})")
    }
}
