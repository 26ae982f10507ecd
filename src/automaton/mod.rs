//! The automaton: rule table + size + current time + shared history
//!
//! An automaton is the active evolving entity. Its `time` always equals
//! the index of the last generation it has produced or observed in its
//! history; it never decreases. Several automata may hold the same
//! history: [`Automaton::continue_with`] models switching the update rule
//! mid-run without discarding earlier generations.

use std::rc::Rc;

use crate::history::{Generation, History, SharedHistory};
use crate::rule::RuleTable;
use crate::AutomatonError;

/// An elementary cellular automaton bound to one run history
#[derive(Debug, Clone)]
pub struct Automaton {
    rule: RuleTable,
    size: usize,
    time: usize,
    history: SharedHistory,
}

impl Automaton {
    /// Create an automaton from its initial generation and a rule code
    ///
    /// Seeds a fresh history with `initial` at time 0. The generation must
    /// contain at least one cell; a single-cell ring is valid and neighbors
    /// itself on both sides.
    pub fn new(initial: Generation, code: u8) -> Result<Self, AutomatonError> {
        let size = initial.len();
        let history = History::new(initial)?.into_shared();
        Ok(Self {
            rule: RuleTable::from_code(code),
            size,
            time: 0,
            history,
        })
    }

    /// Continue this run under a different rule
    ///
    /// The new automaton shares this one's history (by reference, not
    /// copy) and starts at the same time step; stepping it appends to the
    /// same log the prior automaton was building. Prior generations are
    /// untouched.
    pub fn continue_with(&self, code: u8) -> Self {
        Self {
            rule: RuleTable::from_code(code),
            size: self.size,
            time: self.time,
            history: Rc::clone(&self.history),
        }
    }

    /// Number of cells in the ring
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current time step (index of the last generation this automaton acted on)
    pub fn time(&self) -> usize {
        self.time
    }

    /// Rule code in effect
    pub fn rule_code(&self) -> u8 {
        self.rule.code()
    }

    /// The decoded rule table in effect
    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// Shared handle to this automaton's history
    pub fn history(&self) -> SharedHistory {
        Rc::clone(&self.history)
    }

    /// The generation this automaton currently stands on
    pub fn current(&self) -> Generation {
        // time always indexes into the history by construction
        self.history
            .borrow()
            .get(self.time)
            .cloned()
            .unwrap_or_else(|| unreachable!("automaton time {} not in history", self.time))
    }

    /// Record the next generation and advance time by one step
    pub(crate) fn advance(&mut self, next: Generation) -> Result<(), AutomatonError> {
        self.history.borrow_mut().push(next)?;
        self.time += 1;
        Ok(())
    }
}
