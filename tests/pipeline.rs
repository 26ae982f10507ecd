//! End-to-end library pipeline: parse a run script, evolve, query, render

use ulam::{engine, io, query, render, Automaton};

const SCRIPT: &str = "5\n184\n*...*\n1\n0,0\n2,1\n";

#[test]
fn test_script_drives_full_run() {
    let script = io::read_script(SCRIPT.as_bytes()).unwrap();
    let mut ca = Automaton::new(script.config.initial.clone(), script.config.code).unwrap();

    engine::run(&mut ca, script.time_steps, |_, _| {}).unwrap();
    assert_eq!(ca.current().symbols(), ".*..*");

    let q = script.stage_one_query;
    let tally = query::tally(&ca.history().borrow(), q.cell, q.start_time).unwrap();
    assert_eq!(render::tally_line(&tally), "#ON=1 #OFF=1 CELL#0 START@0");

    // Classification phases continue the same history
    let outcome = ulam::classify_density(&ca).unwrap();
    assert_eq!(outcome.settled.current().symbols(), ".....");

    let q = script.stage_two_query;
    let tally = query::tally(&ca.history().borrow(), q.cell, q.start_time).unwrap();
    assert_eq!(render::tally_line(&tally), "#ON=1 #OFF=3 CELL#2 START@1");

    let verdict = query::majority_at(&ca.history().borrow(), outcome.decision_time).unwrap();
    assert_eq!(
        render::majority_line(outcome.decision_time, verdict),
        "AT T=1: #ON/#CELLS < 1/2"
    );
}

#[test]
fn test_rendered_stage_zero_matches_rule_table() {
    let script = io::read_script(SCRIPT.as_bytes()).unwrap();
    let ca = Automaton::new(script.config.initial.clone(), script.config.code).unwrap();

    assert_eq!(
        render::neighborhood_header(),
        " 000 001 010 011 100 101 110 111"
    );
    assert_eq!(
        render::rule_outcome_line(ca.rule()),
        "  0   0   0   1   1   1   0   1"
    );
    assert_eq!(render::generation_line(0, &ca.current()), "   0: *...*");
}
