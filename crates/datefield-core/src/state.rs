//! Widget state definitions.

use crate::iso::{DateIso, YearMonthIso};

/// Internally owned interaction state.
///
/// The value and open flag live in [`crate::Ownership`] slots next to this
/// record, since either may be delegated to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    /// Month currently shown in the panel.
    pub active_month: YearMonthIso,
    /// Date staged by the preview-then-commit policy.
    pub candidate: Option<DateIso>,
    /// True between a focus event and the next blur.
    pub focused: bool,
    /// True once the field has been blurred at least once.
    pub touched: bool,
}

impl WidgetState {
    pub fn new(active_month: YearMonthIso) -> Self {
        Self {
            active_month,
            candidate: None,
            focused: false,
            touched: false,
        }
    }
}

/// Phase of the open/commit state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    /// Panel hidden.
    Closed,
    /// Panel shown, nothing staged.
    OpenBrowsing,
    /// Panel shown with a staged candidate date.
    OpenCandidate,
}

impl InteractionPhase {
    /// Derive the phase from the resolved open flag and the staged candidate.
    pub fn derive(open: bool, candidate: Option<&DateIso>) -> Self {
        match (open, candidate) {
            (false, _) => Self::Closed,
            (true, None) => Self::OpenBrowsing,
            (true, Some(_)) => Self::OpenCandidate,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_derivation() {
        let date: DateIso = "2026-01-15".parse().unwrap();
        assert_eq!(InteractionPhase::derive(false, Some(&date)), InteractionPhase::Closed);
        assert_eq!(InteractionPhase::derive(true, None), InteractionPhase::OpenBrowsing);
        assert_eq!(
            InteractionPhase::derive(true, Some(&date)),
            InteractionPhase::OpenCandidate
        );
        assert!(!InteractionPhase::Closed.is_open());
    }
}
