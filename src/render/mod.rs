//! Text rendering of generations, rule tables, and query reports
//!
//! Pure formatting: every function returns a `String` (no trailing
//! newline); composition and output are the caller's concern. The formats
//! follow the classic three-stage program layout, with time indices
//! right-aligned to width 4.

use crate::history::Generation;
use crate::query::{Majority, Tally};
use crate::rule::{RuleTable, NEIGHBORHOODS};

/// Horizontal rule between report sections
pub const MIDLINE: &str = "-------------------------------------";

/// Final line of a full pipeline report
pub const FOOTER: &str = "==THE END============================";

/// Banner opening a pipeline stage
pub fn stage_banner(stage: usize) -> String {
    format!("==STAGE {stage}============================")
}

/// One generation with its right-aligned time index
pub fn generation_line(time: usize, generation: &Generation) -> String {
    format!("{time:4}: {}", generation.symbols())
}

/// The 8 neighborhood patterns in ascending order, 3 bits each
pub fn neighborhood_header() -> String {
    (0..NEIGHBORHOODS).map(|p| format!(" {p:03b}")).collect()
}

/// Rule outcomes aligned under [`neighborhood_header`]
pub fn rule_outcome_line(rule: &RuleTable) -> String {
    let line: String = rule.outcomes().map(|c| format!("  {} ", c.bit())).collect();
    line.trim_end().to_string()
}

/// Tally report: on/off counts for one cell column from a start time
pub fn tally_line(tally: &Tally) -> String {
    format!(
        "#ON={} #OFF={} CELL#{} START@{}",
        tally.on, tally.off, tally.cell, tally.start_time
    )
}

/// Banner for one classification phase
pub fn phase_banner(code: u8, steps: usize) -> String {
    format!("RULE: {code}; STEPS: {steps}.")
}

/// Majority report: how the on-fraction at `time` compares to one half
pub fn majority_line(time: usize, majority: Majority) -> String {
    let relation = match majority {
        Majority::MoreOn => '>',
        Majority::MoreOff => '<',
        Majority::Equal => '=',
    };
    format!("AT T={time}: #ON/#CELLS {relation} 1/2")
}
