//! Transition rules mapping a cell and its neighbour count to its next state

use super::grid::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Game of Life transition rule
pub trait Rule {
    /// Next state of a cell currently in `current` with `neighbours` living neighbours
    fn next_state(&self, current: Cell, neighbours: u8) -> Cell;

    fn name(&self) -> &'static str;
}

/// Conway's rule: survive on 2, birth or survive on 3, otherwise die
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRule;

impl Rule for StandardRule {
    fn next_state(&self, current: Cell, neighbours: u8) -> Cell {
        match neighbours {
            2 => current,
            3 => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

/// Variant that also brings cells to life with 4 neighbours
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternateRule;

impl Rule for AlternateRule {
    fn next_state(&self, current: Cell, neighbours: u8) -> Cell {
        match neighbours {
            2 => current,
            3 | 4 => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    fn name(&self) -> &'static str {
        "alternate"
    }
}

/// Rule choice as it appears in configuration and on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    #[default]
    Standard,
    Alternate,
}

impl RuleKind {
    /// Map the numeric command line selector to a rule.
    ///
    /// Only `2` picks the alternate rule; anything else, including a
    /// missing or non-numeric selector, falls back to the standard rule.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(2) => RuleKind::Alternate,
            _ => RuleKind::Standard,
        }
    }
}

impl Rule for RuleKind {
    fn next_state(&self, current: Cell, neighbours: u8) -> Cell {
        match self {
            RuleKind::Standard => StandardRule.next_state(current, neighbours),
            RuleKind::Alternate => AlternateRule.next_state(current, neighbours),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RuleKind::Standard => StandardRule.name(),
            RuleKind::Alternate => AlternateRule.name(),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
