//! Input parsing for configurations and run scripts
//!
//! The engine's I/O collaborator. A run script is line-oriented:
//!
//! ```text
//! <size>
//! <rule code 0..=255>
//! <initial cell row of '*' and '.'>
//! <time steps for the first run>
//! <cell>,<start_time>      stage 1 tally query
//! <cell>,<start_time>      stage 2 tally query
//! ```
//!
//! Carriage returns are tolerated; cell rows must match the declared size
//! and contain only the two recognized symbols.

use std::io::BufRead;

use crate::history::Generation;
use crate::AutomatonError;

/// Size, rule code, and initial generation of an automaton
#[derive(Debug, Clone)]
pub struct InitialConfiguration {
    /// Number of cells in the ring
    pub size: usize,
    /// Rule code for the first run
    pub code: u8,
    /// Initial generation (time step 0)
    pub initial: Generation,
}

/// One tally query: a cell column and the first time step to count from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySpec {
    /// Cell column to scan
    pub cell: usize,
    /// First time step counted
    pub start_time: usize,
}

/// A complete three-stage run script
#[derive(Debug, Clone)]
pub struct RunScript {
    /// Initial automaton configuration
    pub config: InitialConfiguration,
    /// Target time for the first run
    pub time_steps: usize,
    /// Tally query evaluated after the first run
    pub stage_one_query: QuerySpec,
    /// Tally query evaluated after the classification phases
    pub stage_two_query: QuerySpec,
}

/// Read a complete run script from line-oriented input
pub fn read_script<R: BufRead>(reader: R) -> Result<RunScript, AutomatonError> {
    let mut lines = Lines::new(reader);
    let config = read_configuration(&mut lines)?;
    let time_steps = lines.next_parsed("time steps")?;
    let stage_one_query = parse_query(&lines.next_line("stage 1 query")?)?;
    let stage_two_query = parse_query(&lines.next_line("stage 2 query")?)?;

    Ok(RunScript {
        config,
        time_steps,
        stage_one_query,
        stage_two_query,
    })
}

/// Read just the size / rule code / initial row header
pub fn read_configuration<R: BufRead>(
    lines: &mut Lines<R>,
) -> Result<InitialConfiguration, AutomatonError> {
    let size: usize = lines.next_parsed("automaton size")?;
    if size == 0 {
        return Err(AutomatonError::EmptyAutomaton);
    }
    let code: u8 = lines.next_parsed("rule code")?;

    let row = lines.next_line("initial cell row")?;
    let initial = Generation::from_symbols(&row)?;
    if initial.len() != size {
        return Err(AutomatonError::SizeMismatch {
            expected: size,
            actual: initial.len(),
        });
    }

    Ok(InitialConfiguration {
        size,
        code,
        initial,
    })
}

/// Parse a `<cell>,<start_time>` query pair
pub fn parse_query(line: &str) -> Result<QuerySpec, AutomatonError> {
    let (cell, start) = line
        .split_once(',')
        .ok_or_else(|| AutomatonError::MalformedInput(format!("expected 'cell,start_time', got '{line}'")))?;
    Ok(QuerySpec {
        cell: parse_field(cell.trim(), "query cell index")?,
        start_time: parse_field(start.trim(), "query start time")?,
    })
}

fn parse_field<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, AutomatonError> {
    text.parse()
        .map_err(|_| AutomatonError::MalformedInput(format!("invalid {what} '{text}'")))
}

/// Line cursor over a buffered reader, tracking position for error messages
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    fn next_line(&mut self, what: &str) -> Result<String, AutomatonError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| AutomatonError::MalformedInput(format!("read failed: {e}")))?;
        if read == 0 {
            return Err(AutomatonError::MalformedInput(format!(
                "unexpected end of input, expected {what} on line {}",
                self.line_no + 1
            )));
        }
        self.line_no += 1;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn next_parsed<T: std::str::FromStr>(&mut self, what: &str) -> Result<T, AutomatonError> {
        let line = self.next_line(what)?;
        parse_field(line.trim(), what)
    }
}
