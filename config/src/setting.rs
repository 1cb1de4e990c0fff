//! Setting lines: `* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)`.
//!
//! A setting line names one rotor per slot, reflector first, then the
//! initial setting of the non-reflector slots, then an optional plugboard.

use std::fmt;

use enigma::{Machine, Permutation};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::tokens::Tokens;

/// A parsed setting line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Rotor names, slot 0 first.
    pub rotors: Vec<String>,
    /// Initial setting for slots `1..`.
    pub positions: String,
    /// Plugboard cycles; empty for no plugboard.
    pub plugboard: String,
}

impl Setting {
    /// Returns true if `line` is a setting line rather than a message line.
    #[must_use]
    pub fn is_setting_line(line: &str) -> bool {
        line.trim_start().starts_with('*')
    }

    /// Parses a setting line for a machine with `num_rotors` slots.
    ///
    /// Anything between the initial setting and the first cycle is kept as
    /// plugboard text so that [`Setting::apply`] reports it as malformed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingSettingMarker`] if `line` does not start
    ///   with `*`.
    /// - [`ConfigError::NotEnoughRotorNames`] if fewer than `num_rotors`
    ///   names precede the first cycle.
    /// - [`ConfigError::MissingInitialSetting`] if the names are not followed
    ///   by a setting.
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self> {
        let body = line
            .trim_start()
            .strip_prefix('*')
            .ok_or_else(|| ConfigError::MissingSettingMarker {
                line: line.to_string(),
            })?;

        let mut tokens = Tokens::new(body);
        let mut heads = Vec::new();
        while let Some(token) = tokens.peek() {
            if token.starts_with('(') {
                break;
            }
            heads.push(token);
            tokens.next_token();
        }
        if heads.len() < num_rotors {
            return Err(ConfigError::NotEnoughRotorNames {
                expected: num_rotors,
                found: heads.len(),
            });
        }
        let positions = heads
            .get(num_rotors)
            .ok_or(ConfigError::MissingInitialSetting)?;

        let mut plugboard: Vec<&str> = heads[num_rotors + 1..].to_vec();
        let cycles = tokens.rest();
        if !cycles.is_empty() {
            plugboard.push(&cycles);
        }

        Ok(Self {
            rotors: heads[..num_rotors].iter().map(|s| (*s).to_string()).collect(),
            positions: (*positions).to_string(),
            plugboard: plugboard.join(" "),
        })
    }

    /// Reconfigures `machine`: inserts the rotors, sets them, and installs
    /// the plugboard, or removes it when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Cipher`] if the machine rejects the rotors,
    /// the setting or the plugboard.
    pub fn apply(&self, machine: &mut Machine) -> Result<()> {
        machine.insert_rotors(&self.rotors)?;
        machine.set_rotors(&self.positions)?;
        let plugboard = if self.plugboard.trim().is_empty() {
            None
        } else {
            Some(Permutation::new(
                &self.plugboard,
                machine.alphabet().clone(),
            )?)
        };
        machine.set_plugboard(plugboard)?;
        debug!(setting = %self, "applied setting");
        Ok(())
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {} {}", self.rotors.join(" "), self.positions)?;
        if !self.plugboard.is_empty() {
            write!(f, " {}", self.plugboard)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use enigma::EnigmaError;
    use enigma_test_helpers::naval_machine;

    const LINE: &str = "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)";

    #[test]
    fn parses_full_line() {
        let setting = Setting::parse(LINE, 5).unwrap();
        assert_eq!(setting.rotors, vec!["B", "Beta", "III", "IV", "I"]);
        assert_eq!(setting.positions, "AXLE");
        assert_eq!(setting.plugboard, "(HQ) (EX) (IP) (TR) (BY)");
        assert_eq!(setting.to_string(), LINE);
    }

    #[test]
    fn plugboard_is_optional() {
        let setting = Setting::parse("  *B Beta III IV I AXLE", 5).unwrap();
        assert_eq!(setting.rotors[0], "B");
        assert_eq!(setting.plugboard, "");
        assert_eq!(setting.to_string(), "* B Beta III IV I AXLE");
    }

    #[test]
    fn recognises_setting_lines() {
        assert!(Setting::is_setting_line("* B"));
        assert!(Setting::is_setting_line("   *B"));
        assert!(!Setting::is_setting_line("HELLO * WORLD"));
        assert!(!Setting::is_setting_line(""));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Setting::parse("B Beta III IV I AXLE", 5),
            Err(ConfigError::MissingSettingMarker { .. })
        ));
        assert!(matches!(
            Setting::parse("* B Beta III (AB)", 5),
            Err(ConfigError::NotEnoughRotorNames {
                expected: 5,
                found: 3
            })
        ));
        assert!(matches!(
            Setting::parse("* B Beta III IV I", 5),
            Err(ConfigError::MissingInitialSetting)
        ));
    }

    #[test]
    fn apply_configures_machine() {
        let mut machine = naval_machine();
        Setting::parse(LINE, 5).unwrap().apply(&mut machine).unwrap();
        assert_eq!(machine.settings(), "AXLE");
        assert_eq!(machine.convert("FROMHIS").unwrap(), "QVPQSOK");

        Setting::parse("* B Beta III IV I AXLE", 5)
            .unwrap()
            .apply(&mut machine)
            .unwrap();
        assert!(machine.plugboard().is_none());
        assert_eq!(machine.convert("HELLOWORLD").unwrap(), "FHVGJZUKSG");
    }

    #[test]
    fn stray_token_before_plugboard_is_malformed() {
        let mut machine = naval_machine();
        let setting = Setting::parse("* B Beta III IV I AXLE XY (AB)", 5).unwrap();
        assert_eq!(setting.plugboard, "XY (AB)");
        assert!(matches!(
            setting.apply(&mut machine),
            Err(ConfigError::Cipher(EnigmaError::MalformedCycleSpec { .. }))
        ));
    }

    #[test]
    fn apply_reports_machine_errors() {
        let mut machine = naval_machine();
        let bad = [
            "* B Beta III IV X AXLE",
            "* I Beta III IV B AXLE",
            "* B Beta III IV I AXL",
            "* B Beta III IV I AXLE (AA)",
        ];
        for line in bad {
            let setting = Setting::parse(line, 5).unwrap();
            assert!(
                matches!(setting.apply(&mut machine), Err(ConfigError::Cipher(_))),
                "{line}"
            );
        }
    }
}
