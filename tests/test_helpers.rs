//! Shared helpers for integration tests

#![allow(dead_code)]

use ulam::{engine, Automaton, Generation};

/// Parse a `*`/`.` row, panicking on bad input (test convenience).
pub fn generation(row: &str) -> Generation {
    Generation::from_symbols(row).expect("test row should parse")
}

/// Build an automaton from a symbol row and a rule code.
pub fn automaton(row: &str, code: u8) -> Automaton {
    Automaton::new(generation(row), code).expect("test automaton should build")
}

/// Build an automaton and evolve it for `steps` time steps.
pub fn evolved(row: &str, code: u8, steps: usize) -> Automaton {
    let mut ca = automaton(row, code);
    engine::run(&mut ca, steps, |_, _| {}).expect("test evolution should succeed");
    ca
}

/// All generations of an automaton's history as symbol rows.
pub fn rows(ca: &Automaton) -> Vec<String> {
    ca.history()
        .borrow()
        .iter_from(0)
        .map(Generation::symbols)
        .collect()
}
