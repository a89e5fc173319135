//! State ownership: every read and write of `value` and `open` goes through here.
//!
//! Whether a field is controlled by the host is decided once at construction
//! and captured in an [`Ownership`] slot. Nothing downstream branches on the
//! mode again.

use uuid::Uuid;

use crate::callbacks::ChangeContext;
use crate::config::ConfigPatch;
use crate::field::DatePickerField;
use crate::iso::DateIso;
use crate::surface::Surface;

/// Source of truth for one state field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership<T> {
    /// The widget owns the value and mutates it on writes.
    Owned(T),
    /// The host owns the value; holds the latest value it supplied.
    Delegated(T),
}

impl<T> Ownership<T> {
    /// Decide ownership from an optional host-supplied value.
    pub fn decide(external: Option<T>, internal: T) -> Self {
        match external {
            Some(value) => Self::Delegated(value),
            None => Self::Owned(internal),
        }
    }

    /// The authoritative value.
    pub fn get(&self) -> &T {
        match self {
            Self::Owned(value) | Self::Delegated(value) => value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Delegated(_))
    }

    /// Write a new internal value. Delegated slots stay inert.
    pub fn write_internal(&mut self, next: T) -> bool {
        match self {
            Self::Owned(value) => {
                *value = next;
                true
            }
            Self::Delegated(_) => false,
        }
    }

    /// Record the host's latest value. Owned slots stay untouched.
    pub fn sync_external(&mut self, next: T) -> bool {
        match self {
            Self::Delegated(value) => {
                *value = next;
                true
            }
            Self::Owned(_) => false,
        }
    }
}

impl<S: Surface> DatePickerField<S> {
    /// The authoritative value: the host's when controlled, else internal.
    pub fn resolve_value(&self) -> Option<DateIso> {
        *self.value.get()
    }

    /// The authoritative open flag: the host's when controlled, else internal.
    pub fn resolve_open(&self) -> bool {
        *self.open.get()
    }

    /// Whether the value is owned by the host.
    pub fn is_value_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Whether the open flag is owned by the host.
    pub fn is_open_controlled(&self) -> bool {
        self.open.is_controlled()
    }

    /// Write the value (if owned), notify the host and re-render value views.
    pub(crate) fn set_value(&mut self, next: Option<DateIso>, ctx: ChangeContext) {
        let written = self.value.write_internal(next);
        log::debug!(
            "Field {}: set value {} ({}, {})",
            self.id,
            display_value(next.as_ref()),
            ctx.source,
            if written { "owned" } else { "delegated" }
        );
        self.callbacks.change(next.as_ref(), ctx);
        self.render_value();
        self.render_clear();
    }

    /// Write the open flag (if owned), notify the host and reconcile the panel.
    ///
    /// Closing always discards a staged candidate.
    pub(crate) fn set_open(&mut self, next: bool, ctx: ChangeContext) {
        let written = self.open.write_internal(next);
        if !next {
            self.state.candidate = None;
        }
        log::debug!(
            "Field {}: set open {} ({}, {})",
            self.id,
            next,
            ctx.source,
            if written { "owned" } else { "delegated" }
        );
        self.callbacks.open_change(next, ctx);
        self.render_panel();
    }

    /// Replace the configuration with `patch` merged over it and re-render.
    ///
    /// Patch keys that would flip an owned field to controlled are dropped.
    pub(crate) fn apply_update(&mut self, mut patch: ConfigPatch) {
        if patch.value.is_some() && !self.value.is_controlled() {
            warn_mode_locked(self.id, "value");
            patch.value = None;
        }
        if patch.open.is_some() && !self.open.is_controlled() {
            warn_mode_locked(self.id, "open");
            patch.open = None;
        }

        self.config = self.config.merged(patch);

        if let Some(value) = self.config.value {
            self.value.sync_external(value);
        }
        if let Some(open) = self.config.open {
            self.open.sync_external(open);
            if !open {
                self.state.candidate = None;
            }
        }

        self.render_value();
        self.render_clear();
        self.render_support();
        self.render_panel();
        self.render_month_label();
        self.render_weekdays();
        self.render_grid();
    }
}

fn warn_mode_locked(id: Uuid, key: &str) {
    log::warn!(
        "Field {}: ignoring `{}` in update, the field was created uncontrolled",
        id,
        key
    );
}

pub(crate) fn display_value(value: Option<&DateIso>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide() {
        assert_eq!(Ownership::decide(Some(true), false), Ownership::Delegated(true));
        assert_eq!(Ownership::decide(None, false), Ownership::Owned(false));
    }

    #[test]
    fn test_owned_writes_and_ignores_external() {
        let mut slot = Ownership::Owned(1);
        assert!(slot.write_internal(2));
        assert!(!slot.sync_external(3));
        assert_eq!(*slot.get(), 2);
        assert!(!slot.is_controlled());
    }

    #[test]
    fn test_delegated_ignores_internal_writes() {
        let mut slot = Ownership::Delegated(1);
        assert!(!slot.write_internal(2));
        assert_eq!(*slot.get(), 1);
        assert!(slot.sync_external(3));
        assert_eq!(*slot.get(), 3);
        assert!(slot.is_controlled());
    }
}
