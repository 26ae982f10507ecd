//! Elementary CA update rules
//!
//! An elementary rule is identified by an 8-bit Wolfram code: bit *p* of
//! the code is the next state for neighborhood pattern *p*, where the
//! pattern encodes (left, center, right) as `left*4 + center*2 + right*1`.
//! Every code in 0..=255 is a valid rule; decoding cannot fail.

use crate::AutomatonError;

/// Number of possible 3-cell neighborhood patterns
pub const NEIGHBORHOODS: usize = 8;

/// Width of the neighborhood window (radius 1)
pub const WINDOW: usize = 3;

/// Rule 184, the traffic rule: on-cells advance right into empty cells
pub const RULE_TRAFFIC: u8 = 184;

/// Rule 232, the majority rule: each cell adopts its neighborhood majority
pub const RULE_MAJORITY: u8 = 232;

/// Input symbol for an on cell
pub const ON_SYMBOL: char = '*';

/// Input symbol for an off cell
pub const OFF_SYMBOL: char = '.';

/// State of a single cell in the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Off / empty / `.`
    Off,
    /// On / occupied / `*`
    On,
}

impl Cell {
    /// True if the cell is on
    pub fn is_on(self) -> bool {
        self == Cell::On
    }

    /// Contribution of this cell to a neighborhood pattern (0 or 1)
    pub fn bit(self) -> u8 {
        match self {
            Cell::Off => 0,
            Cell::On => 1,
        }
    }

    /// Input/display symbol (`*` for on, `.` for off)
    pub fn symbol(self) -> char {
        match self {
            Cell::Off => OFF_SYMBOL,
            Cell::On => ON_SYMBOL,
        }
    }

    /// Parse a single input symbol, rejecting anything but `*` and `.`
    pub fn from_symbol(symbol: char, position: usize) -> Result<Self, AutomatonError> {
        match symbol {
            ON_SYMBOL => Ok(Cell::On),
            OFF_SYMBOL => Ok(Cell::Off),
            _ => Err(AutomatonError::InvalidSymbol { symbol, position }),
        }
    }
}

impl From<bool> for Cell {
    fn from(on: bool) -> Self {
        if on {
            Cell::On
        } else {
            Cell::Off
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_on()
    }
}

/// Decoded update rule: neighborhood pattern -> next cell state
///
/// Built once from a rule code at automaton construction and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    code: u8,
    table: [Cell; NEIGHBORHOODS],
}

impl RuleTable {
    /// Decode an 8-bit rule code into its lookup table
    ///
    /// Total over all codes: there is no invalid rule code.
    pub fn from_code(code: u8) -> Self {
        let mut table = [Cell::Off; NEIGHBORHOODS];
        for (pattern, entry) in table.iter_mut().enumerate() {
            *entry = Cell::from((code >> pattern) & 1 == 1);
        }
        Self { code, table }
    }

    /// The rule code this table was decoded from
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Next state for a neighborhood pattern
    ///
    /// # Panics
    ///
    /// Panics if `pattern >= 8`. Patterns come from [`RuleTable::pattern`],
    /// so an out-of-range value is a programming error.
    pub fn next_state(&self, pattern: u8) -> Cell {
        self.table[usize::from(pattern)]
    }

    /// Encode a (left, center, right) neighborhood as a pattern in 0..8
    pub fn pattern(left: Cell, center: Cell, right: Cell) -> u8 {
        left.bit() * 4 + center.bit() * 2 + right.bit()
    }

    /// Iterate outcomes in pattern order 0..8 (for rendering)
    pub fn outcomes(&self) -> impl Iterator<Item = Cell> + '_ {
        self.table.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_184_bit_extraction() {
        // 184 = 0b10111000
        let rule = RuleTable::from_code(184);
        let expected = [0u8, 0, 0, 1, 1, 1, 0, 1];
        for (pattern, want) in expected.iter().enumerate() {
            assert_eq!(rule.next_state(pattern as u8).bit(), *want);
        }
    }

    #[test]
    fn test_pattern_encoding() {
        assert_eq!(RuleTable::pattern(Cell::Off, Cell::Off, Cell::Off), 0);
        assert_eq!(RuleTable::pattern(Cell::Off, Cell::Off, Cell::On), 1);
        assert_eq!(RuleTable::pattern(Cell::Off, Cell::On, Cell::Off), 2);
        assert_eq!(RuleTable::pattern(Cell::On, Cell::Off, Cell::On), 5);
        assert_eq!(RuleTable::pattern(Cell::On, Cell::On, Cell::On), 7);
    }

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!(Cell::from_symbol('*', 0).unwrap(), Cell::On);
        assert_eq!(Cell::from_symbol('.', 0).unwrap(), Cell::Off);
        assert_eq!(Cell::On.symbol(), '*');
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        let err = Cell::from_symbol('x', 3).unwrap_err();
        assert_eq!(
            err,
            crate::AutomatonError::InvalidSymbol {
                symbol: 'x',
                position: 3
            }
        );
    }
}
