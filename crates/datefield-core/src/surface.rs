//! Rendering surface abstraction.
//!
//! The field never creates its own UI. It writes into named slots of a
//! surface supplied by the host (a DOM subtree, an egui retained model, or
//! the in-memory [`MemorySurface`] used by tests and the demo).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::grid::GridCell;

/// Named parts of the field the core writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Control,
    ValueText,
    Clear,
    Help,
    Status,
    Error,
    Panel,
    MonthLabel,
    WeekdayRow,
    DateGrid,
    PrevMonth,
    NextMonth,
    Dismiss,
    Confirm,
}

impl Slot {
    /// Every slot a surface must provide.
    pub const ALL: [Slot; 14] = [
        Slot::Control,
        Slot::ValueText,
        Slot::Clear,
        Slot::Help,
        Slot::Status,
        Slot::Error,
        Slot::Panel,
        Slot::MonthLabel,
        Slot::WeekdayRow,
        Slot::DateGrid,
        Slot::PrevMonth,
        Slot::NextMonth,
        Slot::Dismiss,
        Slot::Confirm,
    ];

    /// The `data-el` name of the slot.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Control => "control",
            Slot::ValueText => "valueText",
            Slot::Clear => "clear",
            Slot::Help => "help",
            Slot::Status => "status",
            Slot::Error => "error",
            Slot::Panel => "panel",
            Slot::MonthLabel => "monthLabel",
            Slot::WeekdayRow => "weekdayRow",
            Slot::DateGrid => "dateGrid",
            Slot::PrevMonth => "prevMonth",
            Slot::NextMonth => "nextMonth",
            Slot::Dismiss => "dismiss",
            Slot::Confirm => "confirm",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visible status of the field root. `Error` wins whenever an error message is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFlag {
    #[default]
    Default,
    Focused,
    Open,
    Error,
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Focused => write!(f, "focused"),
            Self::Open => write!(f, "open"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A host-provided rendering target.
pub trait Surface {
    /// Whether the surface provides `slot`.
    fn has_slot(&self, slot: Slot) -> bool;

    /// Show or hide a slot.
    fn set_hidden(&mut self, slot: Slot, hidden: bool);

    /// Replace the text content of a slot.
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Replace the weekday header labels.
    fn set_weekdays(&mut self, labels: &[&str]);

    /// Replace the date grid content.
    fn set_grid(&mut self, cells: &[GridCell]);

    /// Set the visible status flag on the root.
    fn set_status(&mut self, flag: StatusFlag);

    /// Release any bindings the surface holds for the field.
    fn release(&mut self);
}

/// Retained state of one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotState {
    pub hidden: bool,
    pub text: String,
}

/// In-memory surface that records what the field rendered.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    slots: HashMap<Slot, SlotState>,
    weekdays: Vec<String>,
    grid: Vec<GridCell>,
    status: StatusFlag,
    bound: bool,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Create a surface providing every slot.
    pub fn new() -> Self {
        Self::with_slots(&Slot::ALL)
    }

    /// Create a surface providing only the given slots.
    pub fn with_slots(slots: &[Slot]) -> Self {
        Self {
            slots: slots.iter().map(|s| (*s, SlotState::default())).collect(),
            weekdays: Vec::new(),
            grid: Vec::new(),
            status: StatusFlag::Default,
            bound: true,
        }
    }

    pub fn slot(&self, slot: Slot) -> Option<&SlotState> {
        self.slots.get(&slot)
    }

    /// Whether a slot is currently hidden. Missing slots count as hidden.
    pub fn is_hidden(&self, slot: Slot) -> bool {
        self.slots.get(&slot).is_none_or(|s| s.hidden)
    }

    pub fn text(&self, slot: Slot) -> &str {
        self.slots.get(&slot).map(|s| s.text.as_str()).unwrap_or("")
    }

    pub fn weekdays(&self) -> &[String] {
        &self.weekdays
    }

    pub fn grid(&self) -> &[GridCell] {
        &self.grid
    }

    pub fn status(&self) -> StatusFlag {
        self.status
    }

    /// Whether the field's bindings are still attached.
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}

impl Surface for MemorySurface {
    fn has_slot(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    fn set_hidden(&mut self, slot: Slot, hidden: bool) {
        if let Some(state) = self.slots.get_mut(&slot) {
            state.hidden = hidden;
        }
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        if let Some(state) = self.slots.get_mut(&slot) {
            state.text = text.to_string();
        }
    }

    fn set_weekdays(&mut self, labels: &[&str]) {
        self.weekdays = labels.iter().map(|l| l.to_string()).collect();
    }

    fn set_grid(&mut self, cells: &[GridCell]) {
        self.grid = cells.to_vec();
    }

    fn set_status(&mut self, flag: StatusFlag) {
        self.status = flag;
    }

    fn release(&mut self) {
        self.bound = false;
    }
}
