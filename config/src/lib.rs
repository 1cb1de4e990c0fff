//! # enigma-config
//!
//! Readers for machine descriptions and the per-message setting lines that
//! reconfigure a machine.
//!
//! | Module | Input |
//! |--------|-------|
//! | [`machine_file`] | classic whitespace-separated description |
//! | [`toml_spec`] | the same description as TOML |
//! | [`setting`] | `* B Beta III IV I AXLE (HQ) (EX)` lines |
//!
//! [`load_machine`] picks the reader from the file extension.
//!
//! ```
//! use enigma_config::{machine_file::parse_machine, Setting};
//!
//! let mut machine = parse_machine(
//!     "A-D 4 3  R1 R (AC) (BD)  R2 MC (ABCD)  R3 MC (ABCD)  R4 MC (ABCD)",
//! )
//! .unwrap();
//! Setting::parse("* R1 R2 R3 R4 AAA", 4)
//!     .unwrap()
//!     .apply(&mut machine)
//!     .unwrap();
//! assert_eq!(machine.convert("AAAA").unwrap(), "CCCC");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod machine_file;
pub mod setting;
pub mod tokens;
pub mod toml_spec;

use std::path::Path;

use enigma::Machine;
use tracing::debug;

pub use error::{ConfigError, Result};
pub use setting::Setting;
pub use toml_spec::MachineSpec;

/// Reads the machine described in `path`. Files ending in `.toml` use the
/// TOML reader, anything else the classic one.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise any
/// error of the chosen reader.
pub fn load_machine(path: &Path) -> Result<Machine> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    debug!(path = %path.display(), toml = is_toml, "loading machine description");
    if is_toml {
        MachineSpec::from_toml(&text)?.build()
    } else {
        machine_file::parse_machine(&text)
    }
}
