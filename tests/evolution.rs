//! Evolution engine tests: history growth, cyclic wraparound, chaining

use ulam::{engine, Generation};

mod test_helpers;
use test_helpers::*;

#[test]
fn test_history_has_one_generation_per_step() {
    let ca = evolved("*..*.*..", 110, 12);
    let history = ca.history();
    let history = history.borrow();

    assert_eq!(history.len(), 13);
    assert!(history.iter_from(0).all(|g| g.len() == 8));
    assert_eq!(ca.time(), 12);
}

#[test]
fn test_rule_184_wraparound_ring() {
    // Size-5 ring *...* exercises wraparound at both ends: the car at
    // cell 0 advances into the empty cell 1, the car at cell 4 is blocked
    // by cell 0.
    let mut ca = automaton("*...*", 184);
    let next = engine::step(&mut ca).unwrap();
    assert_eq!(next.symbols(), ".*..*");
}

#[test]
fn test_rule_184_three_cell_scenario() {
    // Patterns per cell: (1,1,0)=6, (1,0,1)=5, (0,1,1)=3; bits of 184
    // give 0, 1, 1.
    let mut ca = automaton("*.*", 184);
    let next = engine::step(&mut ca).unwrap();
    assert_eq!(next.symbols(), ".**");
}

#[test]
fn test_continue_with_preserves_prior_generations() {
    let first = evolved("*.*..*", 184, 4);
    let before = rows(&first);
    let before_len = first.history().borrow().len();

    let mut second = first.continue_with(232);
    assert_eq!(rows(&second)[..before_len], before[..]);

    let target = second.time() + 3;
    engine::run(&mut second, target, |_, _| {}).unwrap();
    let after = rows(&second);
    assert_eq!(after.len(), before_len + 3);
    assert_eq!(after[..before_len], before[..]);
}

#[test]
fn test_run_streams_generations_in_order() {
    let mut ca = automaton("..*..", 90);
    let mut streamed = Vec::new();
    engine::run(&mut ca, 4, |time, generation| {
        streamed.push((time, generation.symbols()));
    })
    .unwrap();

    let history = ca.history();
    let history = history.borrow();
    assert_eq!(streamed.len(), 4);
    for (time, row) in &streamed {
        assert_eq!(&history.get(*time).unwrap().symbols(), row);
    }
    assert_eq!(streamed[0].0, 1);
    assert_eq!(streamed[3].0, 4);
}

#[test]
fn test_rule_0_clears_and_rule_255_fills() {
    let mut ca = automaton("*.**.", 0);
    assert_eq!(engine::step(&mut ca).unwrap().symbols(), ".....");

    let mut ca = automaton("*.**.", 255);
    assert_eq!(engine::step(&mut ca).unwrap().symbols(), "*****");
}

#[test]
fn test_generation_immutability_across_evolution() {
    let ca = evolved("**...", 30, 5);
    let history = ca.history();
    let history = history.borrow();
    // The initial generation is still exactly what was supplied
    assert_eq!(history.get(0).unwrap().symbols(), "**...");
}

#[test]
fn test_empty_row_rejected() {
    let err = ulam::Automaton::new(Generation::from_cells(&[]), 30).unwrap_err();
    assert_eq!(err, ulam::AutomatonError::EmptyAutomaton);
}
