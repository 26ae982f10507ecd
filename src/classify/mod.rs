//! Density classification via rules 184 and 232
//!
//! The classic two-phase solution to the density classification problem:
//! starting from the current configuration, run the traffic rule (184)
//! for ⌊(N−2)/2⌋ steps, then continue the same history under the majority
//! rule (232) for ⌊(N−1)/2⌋ steps. The verdict reports whether on cells
//! outnumbered off cells at the time step the phases were launched from.

use tracing::debug;

use crate::automaton::Automaton;
use crate::engine;
use crate::query::{self, Majority};
use crate::rule::{RULE_MAJORITY, RULE_TRAFFIC};
use crate::AutomatonError;

/// Outcome of a density classification run
#[derive(Debug, Clone)]
pub struct Classification {
    /// Majority verdict at the decision time
    pub verdict: Majority,
    /// Time step the verdict refers to (where the phases were launched)
    pub decision_time: usize,
    /// Steps run under rule 184
    pub traffic_steps: usize,
    /// Steps run under rule 232
    pub majority_steps: usize,
    /// The final automaton (rule 232), still attached to the shared history
    pub settled: Automaton,
}

/// Phase lengths for a ring of `size` cells: (rule 184 steps, rule 232 steps)
pub fn phase_steps(size: usize) -> (usize, usize) {
    (size.saturating_sub(2) / 2, size.saturating_sub(1) / 2)
}

/// Classify the on/off density of `ca`'s current configuration
///
/// Chains two continuation automata onto `ca`'s history, one per phase,
/// so the full evolution remains queryable afterwards. `ca` itself is not
/// advanced; its time step is where the verdict is taken.
pub fn classify_density(ca: &Automaton) -> Result<Classification, AutomatonError> {
    let decision_time = ca.time();
    let (traffic_steps, majority_steps) = phase_steps(ca.size());
    debug!(
        size = ca.size(),
        decision_time, traffic_steps, majority_steps, "classifying density"
    );

    let mut traffic = ca.continue_with(RULE_TRAFFIC);
    engine::run(&mut traffic, decision_time + traffic_steps, |_, _| {})?;

    let mut settled = traffic.continue_with(RULE_MAJORITY);
    engine::run(&mut settled, traffic.time() + majority_steps, |_, _| {})?;

    let verdict = query::majority_at(&ca.history().borrow(), decision_time)?;

    Ok(Classification {
        verdict,
        decision_time,
        traffic_steps,
        majority_steps,
        settled,
    })
}
