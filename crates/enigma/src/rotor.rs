//! Rotors: a permutation seen through a rotational offset.
//!
//! Three kinds share one record and differ only in how they step:
//!
//! | Kind | Rotates | Notches | Permutation |
//! |------|---------|---------|-------------|
//! | [`RotorKind::Reflector`] | no | none | derangement |
//! | [`RotorKind::Fixed`] | no | none | any |
//! | [`RotorKind::Moving`] | yes | zero or more | any |

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;

/// Stepping behaviour of a rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Folds the signal back through the stack; never steps.
    Reflector,
    /// Sits in a slot without a pawl; never steps.
    Fixed,
    /// Advances under its pawl.
    Moving {
        /// Indices at which this rotor lets its left neighbour step.
        notches: Vec<usize>,
    },
}

/// A rotor with its current setting.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use enigma::{Alphabet, Permutation, Rotor};
///
/// let alpha = Arc::new(Alphabet::range('A', 'D').unwrap());
/// let perm = Permutation::new("(ABCD)", alpha).unwrap();
/// let mut rotor = Rotor::moving("R2", perm, "C").unwrap();
///
/// assert_eq!(rotor.convert_forward(0), 1);
/// rotor.advance();
/// rotor.advance();
/// assert!(rotor.at_notch());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    kind: RotorKind,
    permutation: Permutation,
    setting: usize,
}

impl Rotor {
    /// A reflector named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::InvalidReflector`] if `permutation` has a fixed
    /// point.
    pub fn reflector(name: impl Into<String>, permutation: Permutation) -> Result<Self> {
        let name = name.into();
        if !permutation.derangement() {
            return Err(EnigmaError::InvalidReflector { name });
        }
        Ok(Self::with_kind(name, RotorKind::Reflector, permutation))
    }

    /// A non-rotating rotor named `name`.
    #[must_use]
    pub fn fixed(name: impl Into<String>, permutation: Permutation) -> Self {
        Self::with_kind(name.into(), RotorKind::Fixed, permutation)
    }

    /// A rotating rotor whose notches are the symbols of `notches`.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::UnknownSymbol`] for a notch outside the alphabet.
    pub fn moving(
        name: impl Into<String>,
        permutation: Permutation,
        notches: &str,
    ) -> Result<Self> {
        let mut indices = notches
            .chars()
            .map(|symbol| permutation.alphabet().index_of(symbol))
            .collect::<Result<Vec<_>>>()?;
        indices.sort_unstable();
        indices.dedup();
        Ok(Self::with_kind(
            name.into(),
            RotorKind::Moving { notches: indices },
            permutation,
        ))
    }

    fn with_kind(name: String, kind: RotorKind, permutation: Permutation) -> Self {
        Self {
            name,
            kind,
            permutation,
            setting: 0,
        }
    }

    /// The rotor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_uppercase() == name.to_uppercase()
    }

    /// The stepping behaviour.
    #[must_use]
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// The permutation at setting 0.
    #[must_use]
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// The alphabet of the permutation.
    #[must_use]
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        self.permutation.alphabet()
    }

    /// Size of the alphabet.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// Notch symbols, empty for non-rotating rotors.
    #[must_use]
    pub fn notches(&self) -> Vec<char> {
        match &self.kind {
            RotorKind::Moving { notches } => notches
                .iter()
                .map(|&i| self.alphabet().to_char(i))
                .collect(),
            RotorKind::Reflector | RotorKind::Fixed => Vec::new(),
        }
    }

    /// Returns true if this rotor has a pawl-driven ratchet.
    #[inline]
    #[must_use]
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true for reflectors.
    #[inline]
    #[must_use]
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// Current setting, in `0..size`.
    #[inline]
    #[must_use]
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Current setting as a symbol.
    #[must_use]
    pub fn setting_symbol(&self) -> char {
        self.alphabet().to_char(self.setting)
    }

    /// Overwrites the setting with `position` modulo the alphabet size.
    #[inline]
    pub fn set(&mut self, position: usize) {
        self.setting = position % self.size();
    }

    /// Overwrites the setting with the index of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::UnknownSymbol`] if `symbol` is not in the alphabet.
    pub fn set_symbol(&mut self, symbol: char) -> Result<()> {
        let position = self.alphabet().index_of(symbol)?;
        self.set(position);
        Ok(())
    }

    /// Returns true if a moving rotor sits at one of its notches.
    #[must_use]
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            RotorKind::Reflector | RotorKind::Fixed => false,
        }
    }

    /// Steps a moving rotor by one position; other kinds stay put.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = (self.setting + 1) % self.size();
        }
    }

    /// Signal entering at contact `p` on the right, leaving on the left.
    #[must_use]
    pub fn convert_forward(&self, p: usize) -> usize {
        let size = self.size();
        let contact = (self.setting + p) % size;
        let image = self.permutation.permute(contact);
        (image + size - self.setting) % size
    }

    /// Signal entering at contact `e` on the left, leaving on the right.
    #[must_use]
    pub fn convert_backward(&self, e: usize) -> usize {
        let size = self.size();
        let contact = (self.setting + e) % size;
        let image = self.permutation.invert(contact);
        (image + size - self.setting) % size
    }
}
