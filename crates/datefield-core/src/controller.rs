//! Interaction controller: the open/commit state machine.
//!
//! Intents arrive from the surface (user input) or the host and are applied
//! one at a time. An intent whose precondition fails is absorbed and reported
//! as [`Outcome::Ignored`]; only constraint failures reach the host, through
//! `on_invalid_selection`.

use crate::callbacks::{ChangeContext, NavigateEvent};
use crate::config::CommitPolicy;
use crate::constraints::{CommitDecision, RejectReason};
use crate::error::FieldResult;
use crate::field::DatePickerField;
use crate::iso::{DateIso, YearMonthIso};
use crate::surface::Surface;

/// A discrete user or programmatic intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// The control was clicked (or equivalent).
    Activate,
    /// Close the panel without changing the value.
    Dismiss,
    /// Clear the value through the clear affordance.
    Clear,
    /// A date cell was chosen.
    SelectDate(DateIso),
    /// Commit the staged candidate.
    Confirm,
    /// Show a specific month.
    Navigate(YearMonthIso),
    /// Show the month before the active one.
    PrevMonth,
    /// Show the month after the active one.
    NextMonth,
    Focus,
    Blur,
}

/// What an intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transition ran.
    Applied,
    /// A guard failed; nothing changed and nobody was notified.
    Ignored,
    /// The date failed constraint evaluation; the host was notified.
    Rejected(RejectReason),
}

impl<S: Surface> DatePickerField<S> {
    /// Apply one intent.
    pub fn dispatch(&mut self, intent: Intent) -> FieldResult<Outcome> {
        self.ensure_live()?;
        let outcome = match intent {
            Intent::Activate => self.activate(),
            Intent::Dismiss => self.dismiss(),
            Intent::Clear => self.clear(),
            Intent::SelectDate(iso) => self.select_date(iso),
            Intent::Confirm => self.confirm(),
            Intent::Navigate(month) => self.navigate(month),
            Intent::PrevMonth => self.navigate(self.state.active_month.previous()),
            Intent::NextMonth => self.navigate(self.state.active_month.next()),
            Intent::Focus => self.focus(),
            Intent::Blur => self.blur(),
        };
        if outcome == Outcome::Ignored {
            log::debug!("Field {}: {:?} ignored in {:?}", self.id, intent, self.phase());
        }
        Ok(outcome)
    }

    fn activate(&mut self) -> Outcome {
        if !self.config.is_interactive() {
            return Outcome::Ignored;
        }
        let next = !self.resolve_open();
        if next {
            self.reveal_value_month();
        }
        self.set_open(next, ChangeContext::USER);
        Outcome::Applied
    }

    fn dismiss(&mut self) -> Outcome {
        if !self.resolve_open() {
            return Outcome::Ignored;
        }
        self.set_open(false, ChangeContext::USER);
        Outcome::Applied
    }

    fn clear(&mut self) -> Outcome {
        if !self.clear_visible() {
            return Outcome::Ignored;
        }
        self.callbacks.clear();
        self.set_value(None, ChangeContext::PROGRAMMATIC);
        Outcome::Applied
    }

    fn select_date(&mut self, iso: DateIso) -> Outcome {
        if !self.config.is_interactive() || self.config.is_page_loading {
            return Outcome::Ignored;
        }
        let policy = self.config.commit_policy;
        // A preview needs a visible panel to live in.
        if policy == CommitPolicy::PreviewThenCommit && !self.resolve_open() {
            return Outcome::Ignored;
        }

        if let CommitDecision::Rejected(reason) = self.config.constraints.can_commit(&iso) {
            log::debug!("Field {}: {} rejected ({})", self.id, iso, reason);
            self.callbacks.invalid_selection(&iso, reason);
            return Outcome::Rejected(reason);
        }

        match policy {
            CommitPolicy::CommitOnSelect => {
                log::info!("Field {}: committed {}", self.id, iso);
                self.state.candidate = None;
                self.set_value(Some(iso), ChangeContext::CALENDAR);
                if self.resolve_open() {
                    self.set_open(false, ChangeContext::USER);
                }
            }
            CommitPolicy::PreviewThenCommit => {
                log::debug!("Field {}: staged {}", self.id, iso);
                self.state.candidate = Some(iso);
                self.render_panel();
            }
        }
        Outcome::Applied
    }

    fn confirm(&mut self) -> Outcome {
        let Some(candidate) = self.state.candidate.take() else {
            return Outcome::Ignored;
        };
        log::info!("Field {}: committed {}", self.id, candidate);
        self.set_value(Some(candidate), ChangeContext::CALENDAR);
        self.set_open(false, ChangeContext::USER);
        Outcome::Applied
    }

    fn navigate(&mut self, month: YearMonthIso) -> Outcome {
        self.state.active_month = month;
        self.callbacks.navigate(NavigateEvent { month_iso: month });
        self.render_month_label();
        self.render_grid();
        Outcome::Applied
    }

    fn focus(&mut self) -> Outcome {
        self.state.focused = true;
        self.callbacks.focus();
        self.render_status();
        Outcome::Applied
    }

    fn blur(&mut self) -> Outcome {
        self.state.focused = false;
        self.state.touched = true;
        self.callbacks.blur();
        self.render_status();
        Outcome::Applied
    }
}
