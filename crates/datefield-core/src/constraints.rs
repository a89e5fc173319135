//! Constraint evaluation for candidate dates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::iso::DateIso;

/// Classification of a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Available,
    Unavailable,
    OutOfRange,
}

/// Why a commit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    OutOfAllowedWindow,
    Unavailable,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfAllowedWindow => write!(f, "out_of_allowed_window"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Outcome of asking whether a date may become the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitDecision {
    Ok,
    Rejected(RejectReason),
}

impl CommitDecision {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Range and availability rules supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constraints {
    /// Whether the clear affordance may be offered.
    pub clearable: bool,
    /// Earliest selectable date (inclusive).
    pub min_date: Option<DateIso>,
    /// Latest selectable date (inclusive).
    pub max_date: Option<DateIso>,
    /// Per-date overrides, consulted before the bounds.
    #[serde(rename = "dateStateByISO")]
    pub date_state_by_iso: HashMap<DateIso, CellState>,
}

impl Constraints {
    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    pub fn with_min(mut self, min: DateIso) -> Self {
        self.min_date = Some(min);
        self
    }

    pub fn with_max(mut self, max: DateIso) -> Self {
        self.max_date = Some(max);
        self
    }

    pub fn with_override(mut self, iso: DateIso, state: CellState) -> Self {
        self.date_state_by_iso.insert(iso, state);
        self
    }

    /// Classify a date: explicit override first, then the min/max window.
    pub fn classify(&self, iso: &DateIso) -> CellState {
        if let Some(state) = self.date_state_by_iso.get(iso) {
            return *state;
        }
        if self.min_date.is_some_and(|min| *iso < min) {
            return CellState::OutOfRange;
        }
        if self.max_date.is_some_and(|max| *iso > max) {
            return CellState::OutOfRange;
        }
        CellState::Available
    }

    /// Decide whether `iso` may be committed.
    pub fn can_commit(&self, iso: &DateIso) -> CommitDecision {
        match self.classify(iso) {
            CellState::OutOfRange => CommitDecision::Rejected(RejectReason::OutOfAllowedWindow),
            CellState::Unavailable => CommitDecision::Rejected(RejectReason::Unavailable),
            CellState::Available => CommitDecision::Ok,
        }
    }
}
