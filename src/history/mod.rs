//! Generations and the append-only run history
//!
//! A [`Generation`] is one time step's cell row, immutable once created
//! and stored as a compact bitvector. A [`History`] is the ordered log of
//! every generation in a continuous run, indexed from 0 and growing by one
//! on each evolution step. Histories are shared by reference among the
//! automata that continue a run, via [`SharedHistory`].

use std::cell::RefCell;
use std::rc::Rc;

use bitvec::prelude::*;

use crate::rule::Cell;
use crate::AutomatonError;

/// One time step's cell row, fixed length, read-only once created
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation {
    cells: BitVec,
}

impl Generation {
    /// Build a generation from explicit cell states
    pub fn from_cells(cells: &[Cell]) -> Self {
        Self {
            cells: cells.iter().map(|c| c.is_on()).collect(),
        }
    }

    /// Parse a generation from a row of `*` / `.` symbols
    ///
    /// Any other symbol is rejected with its position, resolving the
    /// undefined-cell behavior of untyped input as a validation error.
    pub fn from_symbols(row: &str) -> Result<Self, AutomatonError> {
        let mut cells = BitVec::with_capacity(row.chars().count());
        for (position, symbol) in row.chars().enumerate() {
            cells.push(Cell::from_symbol(symbol, position)?.is_on());
        }
        Ok(Self { cells })
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State of the cell at `idx`, or `None` past the end
    pub fn get(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).map(|bit| Cell::from(*bit))
    }

    /// State of the cell at `idx`
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    pub fn cell(&self, idx: usize) -> Cell {
        Cell::from(self.cells[idx])
    }

    /// Iterate the cells in left-to-right order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(|bit| Cell::from(*bit))
    }

    /// Number of on cells in the row
    pub fn count_on(&self) -> usize {
        self.cells.count_ones()
    }

    /// Render the row as its `*` / `.` symbols
    pub fn symbols(&self) -> String {
        self.iter().map(Cell::symbol).collect()
    }
}

/// Append-only, contiguously indexed log of generations for one run
///
/// Invariants: every generation has the width the history was created
/// with; index 0 is the initial generation; indices are contiguous.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    rows: Vec<Generation>,
    width: usize,
}

/// Shared-ownership handle to a history
///
/// Evolution is single-threaded with one writer appending at a time, so
/// `Rc<RefCell<_>>` suffices; the history lives as long as the last
/// automaton referencing it.
pub type SharedHistory = Rc<RefCell<History>>;

impl History {
    /// Create a history seeded with its initial generation at index 0
    pub fn new(initial: Generation) -> Result<Self, AutomatonError> {
        if initial.is_empty() {
            return Err(AutomatonError::EmptyAutomaton);
        }
        let width = initial.len();
        Ok(Self {
            rows: vec![initial],
            width,
        })
    }

    /// Wrap a history in a shared handle
    pub fn into_shared(self) -> SharedHistory {
        Rc::new(RefCell::new(self))
    }

    /// Fixed cell-row width of every generation in this history
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of generations recorded (always >= 1)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Histories are never empty; present for completeness
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Generation at time step `time`, or `None` past the end
    pub fn get(&self, time: usize) -> Option<&Generation> {
        self.rows.get(time)
    }

    /// The most recently appended generation
    ///
    /// # Panics
    ///
    /// Never panics: a history always holds at least its initial generation.
    pub fn latest(&self) -> &Generation {
        &self.rows[self.rows.len() - 1]
    }

    /// Append the next generation, enforcing the fixed-width invariant
    pub fn push(&mut self, generation: Generation) -> Result<(), AutomatonError> {
        if generation.len() != self.width {
            return Err(AutomatonError::SizeMismatch {
                expected: self.width,
                actual: generation.len(),
            });
        }
        self.rows.push(generation);
        Ok(())
    }

    /// Iterate generations from time step `start` to the end
    ///
    /// Empty if `start` is past the last recorded generation.
    pub fn iter_from(&self, start: usize) -> impl Iterator<Item = &Generation> {
        self.rows.iter().skip(start)
    }
}
