//! Reflection of resolved state onto the surface slots.

use crate::grid::{GridCell, compute_month_grid, weekday_labels};
use crate::field::DatePickerField;
use crate::surface::{Slot, StatusFlag, Surface};

impl<S: Surface> DatePickerField<S> {
    /// Whether the clear affordance is offered: clearable, interactive and
    /// holding a value.
    pub fn clear_visible(&self) -> bool {
        self.config.constraints.clearable
            && self.config.is_interactive()
            && self.resolve_value().is_some()
    }

    /// The status flag the root should carry.
    pub fn status_flag(&self) -> StatusFlag {
        if self.config.messages.error().is_some() {
            StatusFlag::Error
        } else if self.resolve_open() {
            StatusFlag::Open
        } else if self.state.focused {
            StatusFlag::Focused
        } else {
            StatusFlag::Default
        }
    }

    /// Cells of the active month.
    pub fn month_grid(&self) -> Vec<GridCell> {
        compute_month_grid(
            self.state.active_month,
            self.config.week_starts_on,
            &self.config.constraints,
        )
    }

    pub(crate) fn render_all(&mut self) {
        self.render_value();
        self.render_clear();
        self.render_support();
        self.render_panel();
        self.render_weekdays();
        self.render_month_label();
        self.render_grid();
    }

    pub(crate) fn render_value(&mut self) {
        let text = self
            .resolve_value()
            .map(|v| v.to_string())
            .unwrap_or_default();
        self.surface.set_text(Slot::ValueText, &text);
    }

    pub(crate) fn render_clear(&mut self) {
        let visible = self.clear_visible();
        self.surface.set_hidden(Slot::Clear, !visible);
    }

    pub(crate) fn render_support(&mut self) {
        let messages = self.config.messages.clone();
        for (slot, text) in [
            (Slot::Help, messages.help()),
            (Slot::Status, messages.status()),
            (Slot::Error, messages.error()),
        ] {
            self.surface.set_hidden(slot, text.is_none());
            self.surface.set_text(slot, text.unwrap_or(""));
        }
        self.render_status();
    }

    /// Panel and confirm visibility, then the status flag.
    pub(crate) fn render_panel(&mut self) {
        let open = self.resolve_open();
        self.surface.set_hidden(Slot::Panel, !open);
        self.surface
            .set_hidden(Slot::Confirm, self.state.candidate.is_none());
        self.render_status();
    }

    pub(crate) fn render_status(&mut self) {
        let flag = self.status_flag();
        self.surface.set_status(flag);
    }

    pub(crate) fn render_month_label(&mut self) {
        let label = self.state.active_month.to_string();
        self.surface.set_text(Slot::MonthLabel, &label);
    }

    pub(crate) fn render_weekdays(&mut self) {
        let labels = weekday_labels(self.config.week_starts_on);
        self.surface.set_weekdays(&labels);
    }

    pub(crate) fn render_grid(&mut self) {
        let cells = self.month_grid();
        self.surface.set_grid(&cells);
    }
}
