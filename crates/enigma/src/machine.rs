//! The machine: slots of rotors, a plugboard, and the stepping mechanism.
//!
//! # Signal path
//!
//! ```text
//!  input ─► plugboard ─► slot n-1 ─► ... ─► slot 1 ─► reflector (slot 0)
//!                                                          │
//! output ◄─ plugboard⁻¹ ◄─ slot n-1 ◄─ ... ◄─ slot 1 ◄─────┘
//! ```
//!
//! # Stepping
//!
//! Before every character the rightmost slot steps. A slot `i` in the pawl
//! region `[n - pawls, n - 2]` also steps when it rotates and slot `i + 1`
//! sits at a notch, and in that case slot `i + 1` steps too. That second
//! push is what makes a middle rotor move on two consecutive characters.
//! All flags are read from the settings before any rotor moves.
//!
//! # Ownership
//!
//! The machine owns every available rotor in an arena and its slots hold
//! [`RotorId`]s into it, so a rotor's setting lives in exactly one place.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// Handle to one of a machine's available rotors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorId(usize);

impl RotorId {
    /// Position of the rotor in [`Machine::rotors`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A rotor cipher machine.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use enigma::{Alphabet, Machine, Permutation, Rotor};
///
/// let alpha = Arc::new(Alphabet::range('A', 'D').unwrap());
/// let perm = |c: &str| Permutation::new(c, alpha.clone()).unwrap();
/// let rotors = vec![
///     Rotor::reflector("R1", perm("(AC) (BD)")).unwrap(),
///     Rotor::moving("R2", perm("(ABCD)"), "C").unwrap(),
///     Rotor::moving("R3", perm("(ABCD)"), "C").unwrap(),
///     Rotor::moving("R4", perm("(ABCD)"), "C").unwrap(),
/// ];
/// let mut machine = Machine::new(alpha.clone(), 4, 3, rotors).unwrap();
/// machine.insert_rotors(&["R1", "R2", "R3", "R4"]).unwrap();
/// machine.set_rotors("AAA").unwrap();
///
/// machine.convert_index(0);
/// assert_eq!(machine.settings(), "AAB");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    num_pawls: usize,
    rotors: Vec<Rotor>,
    slots: Vec<Option<RotorId>>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// A machine with `num_rotors` slots, `num_pawls` pawls and the given
    /// available rotors. All slots start empty.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::InvalidMachineShape`] unless `1 < num_rotors` and
    ///   `num_pawls < num_rotors`.
    /// - [`EnigmaError::AlphabetMismatch`] if a rotor uses another alphabet.
    /// - [`EnigmaError::DuplicateRotorName`] if two rotors share a name.
    pub fn new(
        alphabet: Arc<Alphabet>,
        num_rotors: usize,
        num_pawls: usize,
        rotors: impl IntoIterator<Item = Rotor>,
    ) -> Result<Self> {
        if num_rotors <= 1 || num_pawls >= num_rotors {
            return Err(EnigmaError::InvalidMachineShape {
                num_rotors,
                num_pawls,
            });
        }
        let mut available: Vec<Rotor> = Vec::new();
        for rotor in rotors {
            if rotor.alphabet().as_ref() != alphabet.as_ref() {
                return Err(EnigmaError::AlphabetMismatch {
                    what: format!("rotor {}", rotor.name()),
                });
            }
            if available.iter().any(|r| r.matches_name(rotor.name())) {
                return Err(EnigmaError::DuplicateRotorName {
                    name: rotor.name().to_string(),
                });
            }
            available.push(rotor);
        }
        Ok(Self {
            alphabet,
            num_rotors,
            num_pawls,
            rotors: available,
            slots: vec![None; num_rotors],
            plugboard: None,
        })
    }

    /// Number of rotor slots.
    #[must_use]
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Number of pawls, and therefore of rotating slots.
    #[must_use]
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// The machine's alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Every available rotor, inserted or not.
    #[must_use]
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The rotor behind `id`.
    #[must_use]
    pub fn rotor(&self, id: RotorId) -> Option<&Rotor> {
        self.rotors.get(id.0)
    }

    /// Looks a rotor up by name, ignoring case.
    #[must_use]
    pub fn find_rotor(&self, name: &str) -> Option<RotorId> {
        self.rotors
            .iter()
            .position(|r| r.matches_name(name))
            .map(RotorId)
    }

    /// The rotor in slot `slot`, if any.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&Rotor> {
        self.slots
            .get(slot)
            .copied()
            .flatten()
            .and_then(|id| self.rotor(id))
    }

    /// The current plugboard.
    #[must_use]
    pub fn plugboard(&self) -> Option<&Permutation> {
        self.plugboard.as_ref()
    }

    /// Returns true once rotors have been inserted.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Empties every slot.
    pub fn clear_rotors(&mut self) {
        self.slots = vec![None; self.num_rotors];
    }

    /// Fills the slots with the rotors named by `names`, slot 0 first, and
    /// resets each to setting 0. On error every slot is left empty.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::RotorCount`] if `names` does not name every slot.
    /// - [`EnigmaError::UnknownRotor`] for a name with no available rotor.
    /// - [`EnigmaError::RotorReused`] for a rotor named twice.
    /// - [`EnigmaError::MisplacedReflector`] unless exactly slot 0 holds a
    ///   reflector.
    /// - [`EnigmaError::PawlMismatch`] if the number of rotating rotors differs
    ///   from the pawl count.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        self.clear_rotors();
        if names.len() != self.num_rotors {
            return Err(EnigmaError::RotorCount {
                expected: self.num_rotors,
                found: names.len(),
            });
        }

        let mut chosen: Vec<RotorId> = Vec::with_capacity(self.num_rotors);
        for (slot, name) in names.iter().map(|name| name.as_ref()).enumerate() {
            let id = self
                .find_rotor(name)
                .ok_or_else(|| EnigmaError::UnknownRotor {
                    name: name.to_string(),
                })?;
            if chosen.contains(&id) {
                return Err(EnigmaError::RotorReused {
                    name: name.to_string(),
                });
            }
            let rotor = &self.rotors[id.0];
            if rotor.reflecting() != (slot == 0) {
                return Err(EnigmaError::MisplacedReflector {
                    slot,
                    name: rotor.name().to_string(),
                });
            }
            chosen.push(id);
        }

        let moving = chosen
            .iter()
            .filter(|id| self.rotors[id.0].rotates())
            .count();
        if moving != self.num_pawls {
            return Err(EnigmaError::PawlMismatch {
                expected: self.num_pawls,
                found: moving,
            });
        }

        for id in &chosen {
            self.rotors[id.0].set(0);
        }
        self.slots = chosen.into_iter().map(Some).collect();
        Ok(())
    }

    /// Sets slots `1..num_rotors` from the symbols of `setting`, left to
    /// right. The reflector keeps its setting.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::RotorsNotInserted`] if the slots are empty.
    /// - [`EnigmaError::SettingLength`] unless `setting` has
    ///   `num_rotors - 1` symbols.
    /// - [`EnigmaError::UnknownSymbol`] for a symbol outside the alphabet.
    ///   No rotor is changed in that case.
    pub fn set_rotors(&mut self, setting: &str) -> Result<()> {
        if !self.is_loaded() {
            return Err(EnigmaError::RotorsNotInserted);
        }
        let positions = setting
            .chars()
            .map(|symbol| self.alphabet.index_of(symbol))
            .collect::<Result<Vec<_>>>()?;
        if positions.len() != self.num_rotors - 1 {
            return Err(EnigmaError::SettingLength {
                expected: self.num_rotors - 1,
                found: positions.len(),
            });
        }
        for (slot, position) in (1..self.num_rotors).zip(positions) {
            if let Some(id) = self.slots[slot] {
                self.rotors[id.0].set(position);
            }
        }
        Ok(())
    }

    /// Replaces the plugboard; `None` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::AlphabetMismatch`] if `plugboard` ranges over
    /// another alphabet.
    pub fn set_plugboard(&mut self, plugboard: Option<Permutation>) -> Result<()> {
        if let Some(p) = &plugboard {
            if p.alphabet().as_ref() != self.alphabet.as_ref() {
                return Err(EnigmaError::AlphabetMismatch {
                    what: "plugboard".to_string(),
                });
            }
        }
        self.plugboard = plugboard;
        Ok(())
    }

    /// Current settings of slots `1..num_rotors` as symbols, in the form
    /// accepted by [`Machine::set_rotors`].
    #[must_use]
    pub fn settings(&self) -> String {
        (1..self.num_rotors)
            .filter_map(|slot| self.slot(slot))
            .map(Rotor::setting_symbol)
            .collect()
    }

    fn slot_rotates(&self, slot: usize) -> bool {
        self.slot(slot).is_some_and(Rotor::rotates)
    }

    fn slot_at_notch(&self, slot: usize) -> bool {
        self.slot(slot).is_some_and(Rotor::at_notch)
    }

    /// Steps the rotors for one character.
    pub fn advance_machine(&mut self) {
        let n = self.num_rotors;
        let mut steps = vec![false; n];
        steps[n - 1] = true;
        for i in (n - self.num_pawls)..(n - 1) {
            if self.slot_rotates(i) && self.slot_at_notch(i + 1) {
                steps[i] = true;
                steps[i + 1] = true;
            }
        }
        // The reflector never steps.
        steps[0] = false;

        for (slot, step) in steps.into_iter().enumerate() {
            if let (true, Some(id)) = (step, self.slots[slot]) {
                self.rotors[id.0].advance();
            }
        }
    }

    /// Steps the machine, then enciphers the symbol at `index`.
    ///
    /// With empty slots only the plugboard applies.
    pub fn convert_index(&mut self, index: usize) -> usize {
        self.advance_machine();

        let size = self.alphabet.size();
        let mut signal = match &self.plugboard {
            Some(plugboard) => plugboard.permute(index),
            None => index % size,
        };
        for id in self.slots.iter().skip(1).rev().flatten() {
            signal = self.rotors[id.0].convert_forward(signal);
        }
        if let Some(id) = self.slots[0] {
            signal = self.rotors[id.0].convert_forward(signal);
        }
        for id in self.slots.iter().skip(1).flatten() {
            signal = self.rotors[id.0].convert_backward(signal);
        }
        match &self.plugboard {
            Some(plugboard) => plugboard.invert(signal),
            None => signal,
        }
    }

    /// Enciphers `message` symbol by symbol, carrying rotor state across
    /// symbols and across calls.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::UnknownSymbol`] if `message` holds a symbol
    /// outside the alphabet; the machine is not stepped in that case.
    pub fn convert(&mut self, message: &str) -> Result<String> {
        let indices = message
            .chars()
            .map(|symbol| self.alphabet.index_of(symbol))
            .collect::<Result<Vec<_>>>()?;
        Ok(indices
            .into_iter()
            .map(|index| {
                let out = self.convert_index(index);
                self.alphabet.to_char(out)
            })
            .collect())
    }
}
