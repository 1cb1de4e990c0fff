//! The classic plain-text machine description.
//!
//! ```text
//! A-Z                                  alphabet (range or literal symbols)
//! 5 3                                  slots, pawls
//! I MQ (AELTPHQXRU) (BKNW) ...         name, mobility, cycles
//! Beta N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B R (AE) (BN) (CK) ...
//! ```
//!
//! Mobility is `M` followed by the notch symbols, `N` for a fixed rotor, or
//! `R` for a reflector. A description may run over several lines.

use std::sync::Arc;

use enigma::{Alphabet, Machine, Permutation, Rotor};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::tokens::Tokens;

/// Builds a machine from a classic description.
///
/// # Errors
///
/// Returns [`ConfigError::Truncated`] or [`ConfigError::BadNumber`] for a
/// malformed header, [`ConfigError::BadMobility`] for an unknown mobility tag,
/// and [`ConfigError::Cipher`] when the described alphabet, cycles or machine
/// are invalid.
pub fn parse_machine(text: &str) -> Result<Machine> {
    let mut tokens = Tokens::new(text);
    let alphabet = Arc::new(parse_alphabet(tokens.expect("alphabet")?)?);
    let num_rotors = tokens.number("rotor slot count")?;
    let num_pawls = tokens.number("pawl count")?;

    let mut rotors = Vec::new();
    while !tokens.is_empty() {
        rotors.push(read_rotor(&mut tokens, &alphabet)?);
    }
    debug!(
        alphabet = %alphabet,
        slots = num_rotors,
        pawls = num_pawls,
        available = rotors.len(),
        "read machine description"
    );
    Ok(Machine::new(alphabet, num_rotors, num_pawls, rotors)?)
}

/// Reads an alphabet token: `X-Y` is an inclusive range, anything else is the
/// literal list of symbols.
///
/// # Errors
///
/// Returns [`ConfigError::Cipher`] if the alphabet is invalid.
pub fn parse_alphabet(token: &str) -> Result<Alphabet> {
    let chars: Vec<char> = token.chars().collect();
    let alphabet = match chars.as_slice() {
        [first, '-', last] => Alphabet::range(*first, *last)?,
        _ => Alphabet::new(token)?,
    };
    Ok(alphabet)
}

fn read_rotor(tokens: &mut Tokens<'_>, alphabet: &Arc<Alphabet>) -> Result<Rotor> {
    let name = tokens.expect("rotor name")?;
    let tag = tokens.expect("rotor mobility")?;
    let cycles = tokens.cycles();
    let permutation = Permutation::new(&cycles, alphabet.clone())?;

    let rotor = match tag.split_at(tag.chars().next().map_or(0, char::len_utf8)) {
        ("M", notches) => Rotor::moving(name, permutation, notches)?,
        ("N", "") => Rotor::fixed(name, permutation),
        ("R", "") => Rotor::reflector(name, permutation)?,
        ("N" | "R", _) => {
            return Err(ConfigError::NotchesOnStaticRotor {
                rotor: name.to_string(),
            })
        }
        _ => {
            return Err(ConfigError::BadMobility {
                rotor: name.to_string(),
                tag: tag.to_string(),
            })
        }
    };
    debug!(rotor = name, kind = ?rotor.kind(), "read rotor");
    Ok(rotor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use enigma::EnigmaError;

    #[test]
    fn alphabet_forms() {
        assert_eq!(parse_alphabet("A-Z").unwrap(), Alphabet::uppercase());
        assert_eq!(parse_alphabet("A-D").unwrap().size(), 4);
        assert_eq!(parse_alphabet("QWERTY").unwrap().to_char(1), 'W');
        assert!(matches!(
            parse_alphabet("Z-A"),
            Err(ConfigError::Cipher(EnigmaError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn small_description() {
        let machine = parse_machine(
            "A-D 4 3
             R1 R (AC) (BD)
             R2 MC (ABCD)
             R3 MC (ABCD)
             R4 MC (ABCD)",
        )
        .unwrap();
        assert_eq!(machine.num_rotors(), 4);
        assert_eq!(machine.num_pawls(), 3);
        assert_eq!(machine.rotors().len(), 4);
        assert!(machine.rotors()[0].reflecting());
        assert_eq!(machine.rotors()[1].notches(), vec!['C']);
    }

    #[test]
    fn rotor_without_cycles_is_identity() {
        let machine = parse_machine("A-D 3 1 R R (AB) (CD) Id N M MA").unwrap();
        let id = machine.find_rotor("Id").unwrap();
        assert!(machine.rotor(id).unwrap().permutation().is_identity());
        let m = machine.find_rotor("M").unwrap();
        assert_eq!(machine.rotor(m).unwrap().notches(), vec!['A']);
    }

    #[test]
    fn header_errors() {
        assert!(matches!(
            parse_machine(""),
            Err(ConfigError::Truncated {
                expected: "alphabet"
            })
        ));
        assert!(matches!(
            parse_machine("A-Z 5"),
            Err(ConfigError::Truncated {
                expected: "pawl count"
            })
        ));
        assert!(matches!(
            parse_machine("A-Z five 3"),
            Err(ConfigError::BadNumber { .. })
        ));
        assert!(matches!(
            parse_machine("A-Z 1 0"),
            Err(ConfigError::Cipher(EnigmaError::InvalidMachineShape { .. }))
        ));
    }

    #[test]
    fn rotor_errors() {
        assert!(matches!(
            parse_machine("A-D 2 1 X Q (AB)"),
            Err(ConfigError::BadMobility { .. })
        ));
        assert!(matches!(
            parse_machine("A-D 2 1 X NA (AB)"),
            Err(ConfigError::NotchesOnStaticRotor { .. })
        ));
        assert!(matches!(
            parse_machine("A-D 2 1 X"),
            Err(ConfigError::Truncated {
                expected: "rotor mobility"
            })
        ));
        assert!(matches!(
            parse_machine("A-D 2 1 X R (AB)"),
            Err(ConfigError::Cipher(EnigmaError::InvalidReflector { .. }))
        ));
        assert!(matches!(
            parse_machine("A-D 2 1 X N (AB"),
            Err(ConfigError::Cipher(EnigmaError::MalformedCycleSpec { .. }))
        ));
        assert!(matches!(
            parse_machine("A-D 2 1 X ME (AB)"),
            Err(ConfigError::Cipher(EnigmaError::UnknownSymbol { symbol: 'E' }))
        ));
    }
}
