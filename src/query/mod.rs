//! Retrospective queries over a run history
//!
//! Queries read the history and never mutate it: repeated calls with the
//! same arguments against an unmodified history return identical results.

use crate::history::History;
use crate::AutomatonError;

/// On/off occurrence counts for one cell column over a time range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Generations in which the cell was on
    pub on: usize,
    /// Generations in which the cell was off
    pub off: usize,
    /// Queried cell column
    pub cell: usize,
    /// First time step counted
    pub start_time: usize,
}

/// Which cell state holds the strict majority at one time step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum Majority {
    /// Strictly more on cells than off cells
    MoreOn,
    /// Strictly more off cells than on cells
    MoreOff,
    /// Exactly as many on as off cells
    Equal,
}

/// Count on/off occurrences of one cell column from `start_time` onward
///
/// Scans every generation from `start_time` to the end of the history,
/// inclusive. A start time past the last recorded generation yields a
/// zero tally rather than an error; a cell index outside the ring is
/// rejected.
pub fn tally(history: &History, cell: usize, start_time: usize) -> Result<Tally, AutomatonError> {
    if cell >= history.width() {
        return Err(AutomatonError::CellOutOfRange {
            cell,
            size: history.width(),
        });
    }

    let mut on = 0;
    let mut off = 0;
    for generation in history.iter_from(start_time) {
        if generation.cell(cell).is_on() {
            on += 1;
        } else {
            off += 1;
        }
    }

    Ok(Tally {
        on,
        off,
        cell,
        start_time,
    })
}

/// Classify the global on/off majority of the generation at `time`
pub fn majority_at(history: &History, time: usize) -> Result<Majority, AutomatonError> {
    let generation = history.get(time).ok_or(AutomatonError::TimeOutOfRange {
        time,
        len: history.len(),
    })?;

    let on = generation.count_on();
    let off = generation.len() - on;
    Ok(if on > off {
        Majority::MoreOn
    } else if on < off {
        Majority::MoreOff
    } else {
        Majority::Equal
    })
}
