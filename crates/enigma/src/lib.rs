//! Rotor cipher machine simulator.
//!
//! A stack of interchangeable rotors, each a fixed substitution seen through
//! a rotational offset, a stepping mechanism that moves rotors between
//! characters, and a reflector that sends the signal back through the stack.
//!
//! # Components
//!
//! | Type | Role |
//! |------|------|
//! | [`Alphabet`] | Bijection between symbols and `0..size` |
//! | [`Permutation`] | Cycle-notation substitution with inverse lookup |
//! | [`Rotor`] | Permutation plus setting; reflector, fixed or moving |
//! | [`Machine`] | Slots, plugboard, stepping and signal path |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use enigma::{Alphabet, Machine, Permutation, Rotor};
//!
//! let alpha = Arc::new(Alphabet::uppercase());
//! let perm = |c: &str| Permutation::new(c, alpha.clone()).unwrap();
//!
//! let rotors = vec![
//!     Rotor::reflector("B", perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)")).unwrap(),
//!     Rotor::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
//!     Rotor::moving("III", perm("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"), "V").unwrap(),
//!     Rotor::moving("IV", perm("(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)"), "J").unwrap(),
//!     Rotor::moving("I", perm("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"), "Q").unwrap(),
//! ];
//!
//! let mut machine = Machine::new(alpha.clone(), 5, 3, rotors).unwrap();
//! machine.insert_rotors(&["B", "Beta", "III", "IV", "I"]).unwrap();
//! machine.set_rotors("AXLE").unwrap();
//! machine.set_plugboard(Some(perm("(HQ) (EX) (IP) (TR) (BY)"))).unwrap();
//!
//! assert_eq!(machine.convert("FROMHISSHOULDER").unwrap(), "QVPQSOKOILPUBKJ");
//! ```
//!
//! # Conversion never fails
//!
//! All validation happens when alphabets, permutations, rotors and slots are
//! built. [`Machine::convert_index`] is total: arithmetic wraps modulo the
//! alphabet size and absent mappings are the identity.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod alphabet;
pub mod error;
pub mod machine;
pub mod permutation;
pub mod rotor;

pub use alphabet::Alphabet;
pub use error::{EnigmaError, Result};
pub use machine::{Machine, RotorId};
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
