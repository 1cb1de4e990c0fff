//! End-to-end runs of the message driver over the naval machine.

#![allow(clippy::unwrap_used)]

use enigma::EnigmaError;
use enigma_clients::{process, DriverError};
use enigma_config::{machine_file::parse_machine, ConfigError};
use enigma_test_helpers::NAVAL_CONF;

fn run(input: &str) -> Result<String, DriverError> {
    let mut machine = parse_machine(NAVAL_CONF).unwrap();
    let mut output = Vec::new();
    process(&mut machine, input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

const HIAWATHA: &str = "\
* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)
FROM his shoulder Hiawatha
Took the camera of rosewood
Made of sliding folding rosewood
Neatly put it all together
";

const HIAWATHA_CIPHER: &str = "\
QVPQS OKOIL PUBKJ ZPISF XDW
BHCNS CXNUO AATZX SRCFY DGU
FLPNX GXIXT YJUJR CAUGE UNCFM KUF
WJFGK CIIRG XODJG VCGPQ OH
";

#[test]
fn known_answer() {
    assert_eq!(run(HIAWATHA).unwrap(), HIAWATHA_CIPHER);
}

#[test]
fn deciphering_restores_the_message() {
    let input = format!(
        "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)\n{HIAWATHA_CIPHER}"
    );
    assert_eq!(
        run(&input).unwrap(),
        "FROMH ISSHO ULDER HIAWA THA\n\
         TOOKT HECAM ERAOF ROSEW OOD\n\
         MADEO FSLID INGFO LDING ROSEW OOD\n\
         NEATL YPUTI TALLT OGETH ER\n"
    );
}

#[test]
fn setting_lines_reset_the_machine() {
    let input = "\
* B Beta III IV I AXLE
HELLO WORLD
*B Beta III IV I AXLE
helloworld
";
    assert_eq!(run(input).unwrap(), "FHVGJ ZUKSG\nFHVGJ ZUKSG\n");
}

#[test]
fn blank_lines_pass_through() {
    let input = "* B Beta III IV I AXLE\n\nHELLOWORLD\n   \n";
    assert_eq!(run(input).unwrap(), "\nFHVGJ ZUKSG\n\n");
}

#[test]
fn empty_input_writes_nothing() {
    assert_eq!(run("").unwrap(), "");
}

#[test]
fn message_before_setting() {
    assert!(matches!(
        run("HELLO\n* B Beta III IV I AXLE\n"),
        Err(DriverError::MissingSetting { line: 1 })
    ));
}

#[test]
fn bad_setting_line_reports_line_number() {
    let err = run("* B Beta III IV I AXLE\nHELLO\n* B Beta III IV\n").unwrap_err();
    assert!(matches!(
        err,
        DriverError::Config {
            line: 3,
            source: ConfigError::NotEnoughRotorNames { .. }
        }
    ));
    assert!(err.to_string().starts_with("line 3:"));
}

#[test]
fn foreign_symbol_in_message() {
    assert!(matches!(
        run("* B Beta III IV I AXLE\nHELLO, WORLD\n"),
        Err(DriverError::Cipher {
            line: 2,
            source: EnigmaError::UnknownSymbol { symbol: ',' }
        })
    ));
}
