//! Density classification pipeline tests (rules 184 + 232)

use ulam::{classify, Majority, RULE_TRAFFIC};

mod test_helpers;
use test_helpers::*;

#[test]
fn test_majority_on_ring_settles_all_on() {
    // 4 on out of 7
    let ca = automaton("**.**..", RULE_TRAFFIC);
    let outcome = classify::classify_density(&ca).unwrap();

    assert_eq!(outcome.verdict, Majority::MoreOn);
    assert_eq!(outcome.traffic_steps, 2);
    assert_eq!(outcome.majority_steps, 3);
    let settled = outcome.settled.current();
    assert_eq!(settled.count_on(), settled.len());
}

#[test]
fn test_minority_on_ring_settles_all_off() {
    // 2 on out of 7
    let ca = automaton("*..*...", RULE_TRAFFIC);
    let outcome = classify::classify_density(&ca).unwrap();

    assert_eq!(outcome.verdict, Majority::MoreOff);
    assert_eq!(outcome.settled.current().count_on(), 0);
}

#[test]
fn test_balanced_ring_reports_equal() {
    let ca = automaton("**..", RULE_TRAFFIC);
    let outcome = classify::classify_density(&ca).unwrap();
    assert_eq!(outcome.verdict, Majority::Equal);
}

#[test]
fn test_classification_from_mid_run() {
    // Launch the phases from an already-evolved automaton: the verdict
    // refers to the launch time, not time 0.
    let ca = evolved("*.**..*", 110, 3);
    let decision_time = ca.time();
    let outcome = classify::classify_density(&ca).unwrap();

    assert_eq!(outcome.decision_time, decision_time);
    let expected_len = decision_time + 1 + outcome.traffic_steps + outcome.majority_steps;
    assert_eq!(ca.history().borrow().len(), expected_len);
    // The launching automaton's own clock is untouched
    assert_eq!(ca.time(), decision_time);
}

#[test]
fn test_phase_lengths_follow_ring_size() {
    assert_eq!(classify::phase_steps(11), (4, 5));
    assert_eq!(classify::phase_steps(12), (5, 5));
    assert_eq!(classify::phase_steps(2), (0, 0));
}
