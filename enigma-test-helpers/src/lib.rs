//! Test-only fixtures shared by the workspace's integration tests.
//!
//! Not part of any public API. Everything here panics on failure because it
//! only ever runs inside tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(missing_docs)]

use std::sync::Arc;

use enigma::{Alphabet, Machine, Permutation, Rotor};

/// One rotor description: name, mobility tag, cycles.
///
/// The mobility tag follows the classic configuration format: `M` plus the
/// notch symbols for moving rotors, `N` for fixed rotors, `R` for reflectors.
pub type RotorRow = (&'static str, &'static str, &'static str);

/// The naval rotor set, written as cycles over `A-Z`.
pub const NAVAL_ROTORS: &[RotorRow] = &[
    ("I", "MQ", "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"),
    ("II", "ME", "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"),
    ("III", "MV", "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"),
    ("IV", "MJ", "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)"),
    ("V", "MZ", "(AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)"),
    ("VI", "MZM", "(AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)"),
    ("VII", "MZM", "(ANOUPFRIMBZTLWKSVEGCJYDHXQ)"),
    ("VIII", "MZM", "(AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)"),
    ("Beta", "N", "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"),
    ("Gamma", "N", "(AFNIRLBSQWVXGUZDKMTPCOYJHE)"),
    ("B", "R", "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)"),
    ("C", "R", "(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)"),
];

/// The naval machine in the classic configuration format.
pub const NAVAL_CONF: &str = "\
A-Z
5 3
I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
II ME (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
III MV (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
IV MJ (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
V MZ (AVOLDRWFIUQ)(BZKSMNHYC) (EGTJPX)
VI MZM (AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)
VII MZM (ANOUPFRIMBZTLWKSVEGCJYDHXQ)
VIII MZM (AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)
Beta N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
Gamma N (AFNIRLBSQWVXGUZDKMTPCOYJHE)
B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX)
     (SZ) (TV)
C R (AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW)
     (QZ) (SX) (UY)
";

/// Builds one rotor from a [`RotorRow`].
pub fn rotor(alphabet: &Arc<Alphabet>, (name, mobility, cycles): RotorRow) -> Rotor {
    let perm = Permutation::new(cycles, alphabet.clone()).unwrap();
    match mobility.split_at(1) {
        ("M", notches) => Rotor::moving(name, perm, notches).unwrap(),
        ("N", _) => Rotor::fixed(name, perm),
        ("R", _) => Rotor::reflector(name, perm).unwrap(),
        _ => panic!("bad mobility tag {mobility}"),
    }
}

/// The five-slot, three-pawl naval machine with every rotor available and
/// no rotors inserted.
pub fn naval_machine() -> Machine {
    let alphabet = Arc::new(Alphabet::uppercase());
    let rotors: Vec<Rotor> = NAVAL_ROTORS.iter().map(|&row| rotor(&alphabet, row)).collect();
    Machine::new(alphabet, 5, 3, rotors).unwrap()
}

/// [`naval_machine`] loaded with `names`, `setting` and `plugboard`.
pub fn loaded_naval(names: &[&str], setting: &str, plugboard: &str) -> Machine {
    let mut machine = naval_machine();
    load(&mut machine, names, setting, plugboard);
    machine
}

/// Runs the per-block setup on `machine`.
pub fn load(machine: &mut Machine, names: &[&str], setting: &str, plugboard: &str) {
    machine.clear_rotors();
    machine.insert_rotors(names).unwrap();
    machine.set_rotors(setting).unwrap();
    let plugboard = Permutation::new(plugboard, machine.alphabet().clone()).unwrap();
    machine.set_plugboard(Some(plugboard)).unwrap();
}

/// The four-slot machine over `A-D`: reflector `(AC) (BD)` and three moving
/// rotors `(ABCD)` notched at `C`, inserted as `R1 R2 R3 R4` at `AAA`.
pub fn double_step_machine() -> Machine {
    let alphabet = Arc::new(Alphabet::range('A', 'D').unwrap());
    let rows: [RotorRow; 4] = [
        ("R1", "R", "(AC) (BD)"),
        ("R2", "MC", "(ABCD)"),
        ("R3", "MC", "(ABCD)"),
        ("R4", "MC", "(ABCD)"),
    ];
    let rotors: Vec<Rotor> = rows.iter().map(|&row| rotor(&alphabet, row)).collect();
    let mut machine = Machine::new(alphabet, 4, 3, rotors).unwrap();
    machine.insert_rotors(&["R1", "R2", "R3", "R4"]).unwrap();
    machine.set_rotors("AAA").unwrap();
    machine
}

/// Settings of every slot including the reflector, left to right.
pub fn full_settings(machine: &Machine) -> String {
    (0..machine.num_rotors())
        .map(|slot| machine.slot(slot).unwrap().setting_symbol())
        .collect()
}
