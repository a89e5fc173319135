//! Host notification hooks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constraints::RejectReason;
use crate::iso::{DateIso, YearMonthIso};

/// What caused a value or open-state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeSource {
    User,
    Programmatic,
    Calendar,
}

impl fmt::Display for ChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Programmatic => write!(f, "programmatic"),
            Self::Calendar => write!(f, "calendar"),
        }
    }
}

/// Context passed alongside change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeContext {
    pub source: ChangeSource,
}

impl ChangeContext {
    pub const USER: Self = Self {
        source: ChangeSource::User,
    };
    pub const PROGRAMMATIC: Self = Self {
        source: ChangeSource::Programmatic,
    };
    pub const CALENDAR: Self = Self {
        source: ChangeSource::Calendar,
    };
}

/// Payload of a month navigation notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateEvent {
    #[serde(rename = "monthISO")]
    pub month_iso: YearMonthIso,
}

pub type ChangeFn = Box<dyn FnMut(Option<&DateIso>, ChangeContext)>;
pub type OpenChangeFn = Box<dyn FnMut(bool, ChangeContext)>;
pub type NavigateFn = Box<dyn FnMut(NavigateEvent)>;
pub type InvalidSelectionFn = Box<dyn FnMut(&DateIso, RejectReason)>;
pub type NotifyFn = Box<dyn FnMut()>;

/// Optional host callbacks. All are synchronous and fire-and-forget.
///
/// Panics raised inside a callback are not caught.
#[derive(Default)]
pub struct Callbacks {
    pub(crate) on_change: Option<ChangeFn>,
    pub(crate) on_open_change: Option<OpenChangeFn>,
    pub(crate) on_clear: Option<NotifyFn>,
    pub(crate) on_navigate: Option<NavigateFn>,
    pub(crate) on_invalid_selection: Option<InvalidSelectionFn>,
    pub(crate) on_focus: Option<NotifyFn>,
    pub(crate) on_blur: Option<NotifyFn>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(mut self, f: impl FnMut(Option<&DateIso>, ChangeContext) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_open_change(mut self, f: impl FnMut(bool, ChangeContext) + 'static) -> Self {
        self.on_open_change = Some(Box::new(f));
        self
    }

    pub fn on_clear(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_clear = Some(Box::new(f));
        self
    }

    pub fn on_navigate(mut self, f: impl FnMut(NavigateEvent) + 'static) -> Self {
        self.on_navigate = Some(Box::new(f));
        self
    }

    pub fn on_invalid_selection(mut self, f: impl FnMut(&DateIso, RejectReason) + 'static) -> Self {
        self.on_invalid_selection = Some(Box::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub(crate) fn change(&mut self, value: Option<&DateIso>, ctx: ChangeContext) {
        if let Some(f) = self.on_change.as_mut() {
            f(value, ctx);
        }
    }

    pub(crate) fn open_change(&mut self, open: bool, ctx: ChangeContext) {
        if let Some(f) = self.on_open_change.as_mut() {
            f(open, ctx);
        }
    }

    pub(crate) fn clear(&mut self) {
        if let Some(f) = self.on_clear.as_mut() {
            f();
        }
    }

    pub(crate) fn navigate(&mut self, event: NavigateEvent) {
        if let Some(f) = self.on_navigate.as_mut() {
            f(event);
        }
    }

    pub(crate) fn invalid_selection(&mut self, iso: &DateIso, reason: RejectReason) {
        if let Some(f) = self.on_invalid_selection.as_mut() {
            f(iso, reason);
        }
    }

    pub(crate) fn focus(&mut self) {
        if let Some(f) = self.on_focus.as_mut() {
            f();
        }
    }

    pub(crate) fn blur(&mut self) {
        if let Some(f) = self.on_blur.as_mut() {
            f();
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_open_change", &self.on_open_change.is_some())
            .field("on_clear", &self.on_clear.is_some())
            .field("on_navigate", &self.on_navigate.is_some())
            .field("on_invalid_selection", &self.on_invalid_selection.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}
