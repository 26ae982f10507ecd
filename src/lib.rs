//! # Elementary Cellular Automaton Engine
//!
//! This library simulates one-dimensional elementary cellular automata:
//! a finite ring of binary cells evolving over discrete time steps under
//! a local rule derived from an 8-entry neighborhood lookup table.
//!
//! ## Core Pieces
//!
//! 1. **Rule tables**: decode an 8-bit rule code into a neighborhood map
//! 2. **History**: append-only log of every generation in a run
//! 3. **Evolution engine**: cyclic 3-neighborhood stepping
//! 4. **Queries**: per-cell on/off tallies and majority classification
//! 5. **Density classification**: the rule 184 + rule 232 two-phase pipeline
//!
//! Multiple automata may share one history, modeling a rule change applied
//! to a continuing run without discarding earlier generations.
//!
//! ## Usage Example
//!
//! ```
//! use ulam::{Automaton, Generation, engine, query};
//!
//! let initial = Generation::from_symbols("*.*")?;
//! let mut ca = Automaton::new(initial, 184)?;
//! engine::run(&mut ca, 4, |_, _| {})?;
//!
//! let history = ca.history();
//! let tally = query::tally(&history.borrow(), 0, 0)?;
//! assert_eq!(tally.on + tally.off, 5);
//! # Ok::<(), ulam::AutomatonError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one component of the automaton
pub mod automaton; // automaton binding rule, size, time, and history
pub mod classify; // density classification via rules 184 and 232
pub mod engine; // cyclic evolution stepping
pub mod history; // generations and the append-only run history
pub mod io; // input parsing for configurations and run scripts
pub mod query; // retrospective tally and majority queries
pub mod render; // text rendering of generations and reports
pub mod rule; // rule codes and neighborhood lookup tables

// Re-exports for convenience
pub use automaton::Automaton;
pub use classify::{classify_density, Classification};
pub use history::{Generation, History, SharedHistory};
pub use query::{Majority, Tally};
pub use rule::{Cell, RuleTable, RULE_MAJORITY, RULE_TRAFFIC};

use thiserror::Error;

/// Errors that can occur while configuring or evolving an automaton
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// An automaton or generation must contain at least one cell
    #[error("automaton must contain at least one cell")]
    EmptyAutomaton,

    /// Input symbol outside the recognized on/off markers
    #[error("invalid cell symbol '{symbol}' at position {position} (expected '*' or '.')")]
    InvalidSymbol {
        /// Offending character
        symbol: char,
        /// Zero-based position within the cell row
        position: usize,
    },

    /// Generation length does not match the history's fixed width
    #[error("generation length {actual} does not match automaton size {expected}")]
    SizeMismatch {
        /// Width the history was created with
        expected: usize,
        /// Length of the offending generation
        actual: usize,
    },

    /// Cell column index outside the automaton
    #[error("cell index {cell} out of range for automaton of size {size}")]
    CellOutOfRange {
        /// Requested cell column
        cell: usize,
        /// Automaton size
        size: usize,
    },

    /// Time index beyond the generations recorded so far
    #[error("time step {time} out of range for history of length {len}")]
    TimeOutOfRange {
        /// Requested time step
        time: usize,
        /// Number of generations recorded
        len: usize,
    },

    /// Automaton no longer stands on its history's tail
    ///
    /// Another automaton sharing the history has appended past this one;
    /// stepping it would derive a generation from a non-tail row.
    #[error("automaton at time {time} is stale: shared history has advanced to length {len}")]
    StaleAutomaton {
        /// The automaton's current time step
        time: usize,
        /// Length the shared history has grown to
        len: usize,
    },

    /// Run script or configuration input that could not be parsed
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
