//! TOML machine descriptions.
//!
//! ```toml
//! alphabet = "A-Z"
//! slots = 5
//! pawls = 3
//!
//! [[rotors]]
//! name = "I"
//! kind = "moving"
//! notches = "Q"
//! cycles = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"
//! ```

use std::sync::Arc;

use enigma::{Machine, Permutation, Rotor};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::machine_file::parse_alphabet;

/// How a described rotor steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotorKindSpec {
    /// Rotates under a pawl.
    Moving,
    /// Never rotates.
    Fixed,
    /// Never rotates and folds the signal back.
    Reflector,
}

/// One rotor of a [`MachineSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotorSpec {
    /// Rotor name.
    pub name: String,
    /// Stepping behaviour.
    pub kind: RotorKindSpec,
    /// Notch symbols, moving rotors only.
    #[serde(default)]
    pub notches: String,
    /// Permutation in cycle notation.
    #[serde(default)]
    pub cycles: String,
}

/// A deserialized machine description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineSpec {
    /// Alphabet token, `X-Y` or the literal symbols.
    pub alphabet: String,
    /// Number of rotor slots.
    pub slots: usize,
    /// Number of pawls.
    pub pawls: usize,
    /// Available rotors.
    #[serde(default)]
    pub rotors: Vec<RotorSpec>,
}

impl MachineSpec {
    /// Deserializes a description.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if `text` is not a valid description.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the described machine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotchesOnStaticRotor`] for notches on a fixed
    /// rotor or reflector and [`ConfigError::Cipher`] when the machine is
    /// invalid.
    pub fn build(&self) -> Result<Machine> {
        let alphabet = Arc::new(parse_alphabet(&self.alphabet)?);
        let rotors = self
            .rotors
            .iter()
            .map(|spec| -> Result<Rotor> {
                let permutation = Permutation::new(&spec.cycles, alphabet.clone())?;
                if spec.kind != RotorKindSpec::Moving && !spec.notches.is_empty() {
                    return Err(ConfigError::NotchesOnStaticRotor {
                        rotor: spec.name.clone(),
                    });
                }
                let rotor = match spec.kind {
                    RotorKindSpec::Moving => {
                        Rotor::moving(spec.name.as_str(), permutation, &spec.notches)?
                    }
                    RotorKindSpec::Fixed => Rotor::fixed(spec.name.as_str(), permutation),
                    RotorKindSpec::Reflector => {
                        Rotor::reflector(spec.name.as_str(), permutation)?
                    }
                };
                debug!(rotor = %spec.name, kind = ?spec.kind, "read rotor");
                Ok(rotor)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Machine::new(alphabet, self.slots, self.pawls, rotors)?)
    }
}
