//! Evolution engine: cyclic 3-neighborhood stepping
//!
//! For each cell the engine gathers its wraparound neighborhood
//! `(left, center, right)`, looks the pattern up in the automaton's rule
//! table, and appends the resulting generation to the shared history,
//! advancing the automaton's time by one.

use tracing::{debug, trace};

use crate::automaton::Automaton;
use crate::history::Generation;
use crate::rule::RuleTable;
use crate::AutomatonError;

/// Advance an automaton by one time step
///
/// Returns the generation that was appended. A single-cell ring neighbors
/// itself on both sides; this is intentional wraparound, not an edge case
/// to reject.
///
/// Stepping is defined on the history tail: an automaton that has fallen
/// behind its shared history (a continuation already appended past it) is
/// rejected with [`AutomatonError::StaleAutomaton`] rather than allowed to
/// derive a generation from a non-tail row. A size mismatch with the tail
/// likewise fails instead of corrupting the history.
pub fn step(ca: &mut Automaton) -> Result<Generation, AutomatonError> {
    let next = {
        let history = ca.history();
        let history = history.borrow();
        if ca.time() + 1 != history.len() {
            return Err(AutomatonError::StaleAutomaton {
                time: ca.time(),
                len: history.len(),
            });
        }
        let current = history.latest();
        if current.len() != ca.size() {
            return Err(AutomatonError::SizeMismatch {
                expected: ca.size(),
                actual: current.len(),
            });
        }
        evolve_row(current, ca.rule())
    };

    ca.advance(next.clone())?;
    trace!(time = ca.time(), row = %next.symbols(), "stepped");
    Ok(next)
}

/// Evolve an automaton until its time reaches `target_time`
///
/// The observer is invoked with `(time, generation)` for every appended
/// generation, so intermediate states can be streamed as they are
/// produced. No-op if `target_time` is at or before the current time.
pub fn run<F>(ca: &mut Automaton, target_time: usize, mut observer: F) -> Result<(), AutomatonError>
where
    F: FnMut(usize, &Generation),
{
    if target_time <= ca.time() {
        return Ok(());
    }
    debug!(
        rule = ca.rule_code(),
        from = ca.time(),
        to = target_time,
        "running automaton"
    );
    while ca.time() < target_time {
        let generation = step(ca)?;
        observer(ca.time(), &generation);
    }
    Ok(())
}

/// Apply one rule-table pass over a cell row with cyclic wraparound
fn evolve_row(current: &Generation, rule: &RuleTable) -> Generation {
    let n = current.len();
    let mut next = Vec::with_capacity(n);
    for i in 0..n {
        let left = current.cell((i + n - 1) % n);
        let center = current.cell(i);
        let right = current.cell((i + 1) % n);
        next.push(rule.next_state(RuleTable::pattern(left, center, right)));
    }
    Generation::from_cells(&next)
}
