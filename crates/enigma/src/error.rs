//! Error taxonomy for the cipher core.
//!
//! Every variant is a construction or configuration failure. Index-level
//! conversion never fails once a [`Machine`](crate::Machine) is built.

use thiserror::Error;

/// Errors raised while building alphabets, permutations, rotors and machines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The alphabet has no symbols.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// A symbol occurs more than once in an alphabet.
    #[error("symbol '{symbol}' appears more than once in the alphabet")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// A symbol is structural in the cycle or setting syntax.
    #[error("symbol {symbol:?} cannot be part of an alphabet")]
    ReservedSymbol {
        /// The rejected symbol.
        symbol: char,
    },

    /// A character range whose end precedes its start.
    #[error("invalid alphabet range '{first}-{last}'")]
    InvalidRange {
        /// First character of the range.
        first: char,
        /// Last character of the range.
        last: char,
    },

    /// A symbol is not a member of the alphabet in use.
    #[error("symbol '{symbol}' is not in the alphabet")]
    UnknownSymbol {
        /// The foreign symbol.
        symbol: char,
    },

    /// The cycle-notation string cannot be read.
    #[error("malformed cycle specification {cycles:?}: {reason}")]
    MalformedCycleSpec {
        /// The offending cycle string.
        cycles: String,
        /// What went wrong.
        reason: &'static str,
    },

    /// A symbol is used twice across the cycles of one permutation.
    #[error("symbol '{symbol}' appears in more than one cycle position")]
    RepeatedCycleSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// A reflector whose permutation has a fixed point.
    #[error("reflector {name} must map every symbol to a different symbol")]
    InvalidReflector {
        /// Name of the rejected reflector.
        name: String,
    },

    /// Slot or pawl counts outside `1 < slots` and `pawls < slots`.
    #[error("a machine needs more than one slot and fewer pawls than slots (got {num_rotors} slots, {num_pawls} pawls)")]
    InvalidMachineShape {
        /// Requested slot count.
        num_rotors: usize,
        /// Requested pawl count.
        num_pawls: usize,
    },

    /// Two available rotors answer to the same name.
    #[error("rotor name {name} is used by more than one available rotor")]
    DuplicateRotorName {
        /// The shared name.
        name: String,
    },

    /// Wrong number of rotor names passed to `insert_rotors`.
    #[error("expected {expected} rotor names, got {found}")]
    RotorCount {
        /// Slot count of the machine.
        expected: usize,
        /// Names supplied.
        found: usize,
    },

    /// A requested rotor is not among the available rotors.
    #[error("no rotor named {name}")]
    UnknownRotor {
        /// The requested name.
        name: String,
    },

    /// One physical rotor requested for two slots.
    #[error("rotor {name} is named more than once")]
    RotorReused {
        /// The repeated name.
        name: String,
    },

    /// Slot 0 does not hold a reflector, or a reflector sits elsewhere.
    #[error("slot {slot} holds {name}, but reflectors belong in slot 0 and only there")]
    MisplacedReflector {
        /// Slot index.
        slot: usize,
        /// Name of the rotor placed there.
        name: String,
    },

    /// Installed rotating rotors do not match the pawl count.
    #[error("number of moving rotors ({found}) does not match pawls ({expected})")]
    PawlMismatch {
        /// Declared pawl count.
        expected: usize,
        /// Rotating rotors actually installed.
        found: usize,
    },

    /// A setting string whose length is not `slots - 1`.
    #[error("setting must have {expected} symbols, got {found}")]
    SettingLength {
        /// Non-reflector slot count.
        expected: usize,
        /// Symbols supplied.
        found: usize,
    },

    /// `set_rotors` called before any rotors were inserted.
    #[error("no rotors inserted")]
    RotorsNotInserted,

    /// A permutation built over another alphabet.
    #[error("{what} uses a different alphabet than the machine")]
    AlphabetMismatch {
        /// Which component disagreed.
        what: String,
    },
}

/// Result alias for cipher-core operations.
pub type Result<T> = std::result::Result<T, EnigmaError>;
