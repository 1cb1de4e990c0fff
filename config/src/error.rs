//! Errors raised while reading machine descriptions and setting lines.

use std::path::PathBuf;

use enigma::EnigmaError;
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input ended before a required token.
    #[error("configuration truncated: expected {expected}")]
    Truncated {
        /// What was being read.
        expected: &'static str,
    },

    /// A count that is not a non-negative integer.
    #[error("expected a non-negative integer for {what}, found {found:?}")]
    BadNumber {
        /// What was being read.
        what: &'static str,
        /// The offending token.
        found: String,
    },

    /// A mobility tag other than `M<notches>`, `N` or `R`.
    #[error("bad mobility tag {tag:?} for rotor {rotor}")]
    BadMobility {
        /// Rotor being described.
        rotor: String,
        /// The offending tag.
        tag: String,
    },

    /// Notches given for a rotor that cannot rotate.
    #[error("rotor {rotor} does not rotate and cannot have notches")]
    NotchesOnStaticRotor {
        /// Rotor being described.
        rotor: String,
    },

    /// A setting line without its leading `*`.
    #[error("setting line must start with '*': {line:?}")]
    MissingSettingMarker {
        /// The offending line.
        line: String,
    },

    /// Fewer rotor names than the machine has slots.
    #[error("setting line names {found} rotors, the machine has {expected} slots")]
    NotEnoughRotorNames {
        /// Slot count.
        expected: usize,
        /// Names present.
        found: usize,
    },

    /// A setting line with rotor names but no initial setting.
    #[error("setting line has no initial rotor setting")]
    MissingInitialSetting,

    /// The description is readable but the machine it describes is not valid.
    #[error(transparent)]
    Cipher(#[from] EnigmaError),

    /// A TOML description that does not deserialize.
    #[error("invalid TOML machine description: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configuration file that cannot be read.
    #[error("could not open {}: {source}", path.display())]
    Io {
        /// The file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
