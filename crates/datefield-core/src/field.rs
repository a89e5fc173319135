//! The date picker field instance and its public handle operations.

use chrono::Local;
use uuid::Uuid;

use crate::callbacks::{Callbacks, ChangeContext};
use crate::config::{ConfigPatch, FieldConfig};
use crate::error::{FieldError, FieldResult};
use crate::iso::{DateIso, YearMonthIso};
use crate::owner::{Ownership, display_value};
use crate::state::{InteractionPhase, WidgetState};
use crate::surface::{Slot, Surface};

/// A mounted date picker field.
///
/// Owns its surface, configuration and internal state. All transitions take
/// `&mut self` and run to completion before the next one starts.
///
/// After [`destroy`](Self::destroy), every mutating operation returns
/// [`FieldError::Destroyed`]; reads keep reporting the last state.
pub struct DatePickerField<S: Surface> {
    pub(crate) id: Uuid,
    pub(crate) surface: S,
    pub(crate) config: FieldConfig,
    pub(crate) callbacks: Callbacks,
    pub(crate) value: Ownership<Option<DateIso>>,
    pub(crate) open: Ownership<bool>,
    pub(crate) state: WidgetState,
    destroyed: bool,
}

impl<S: Surface> DatePickerField<S> {
    /// Mount a field on `surface`.
    ///
    /// Fails if the surface lacks any required slot.
    pub fn create(surface: S, config: FieldConfig, callbacks: Callbacks) -> FieldResult<Self> {
        if let Some(missing) = Slot::ALL.iter().find(|slot| !surface.has_slot(**slot)) {
            return Err(FieldError::MissingSlot(*missing));
        }

        let value = Ownership::decide(config.value, config.default_value);
        let open = Ownership::decide(config.open, false);
        let active_month = initial_month(&config, *value.get());

        let mut field = Self {
            id: Uuid::new_v4(),
            surface,
            config,
            callbacks,
            value,
            open,
            state: WidgetState::new(active_month),
            destroyed: false,
        };
        field.render_all();

        log::info!(
            "Field {} created (value: {} {}, open: {} {}, month: {})",
            field.id,
            if field.value.is_controlled() { "controlled" } else { "uncontrolled" },
            display_value(field.value.get().as_ref()),
            if field.open.is_controlled() { "controlled" } else { "uncontrolled" },
            field.open.get(),
            field.state.active_month
        );
        Ok(field)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current phase of the open/commit state machine.
    pub fn phase(&self) -> InteractionPhase {
        InteractionPhase::derive(self.resolve_open(), self.state.candidate.as_ref())
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Merge `patch` over the configuration.
    pub fn update(&mut self, patch: ConfigPatch) -> FieldResult<()> {
        self.ensure_live()?;
        self.apply_update(patch);
        Ok(())
    }

    /// Replace the host callbacks.
    pub fn set_callbacks(&mut self, callbacks: Callbacks) -> FieldResult<()> {
        self.ensure_live()?;
        self.callbacks = callbacks;
        Ok(())
    }

    /// Open the panel on behalf of the host, bypassing the disabled and
    /// read-only guards.
    ///
    /// Does nothing, and does not notify, when the panel is already open.
    pub fn open(&mut self) -> FieldResult<()> {
        self.ensure_live()?;
        if self.resolve_open() {
            log::debug!("Field {}: open() while already open", self.id);
            return Ok(());
        }
        self.reveal_value_month();
        self.set_open(true, ChangeContext::PROGRAMMATIC);
        Ok(())
    }

    /// Close the panel on behalf of the host.
    ///
    /// Does nothing, and does not notify, when the panel is already closed.
    pub fn close(&mut self) -> FieldResult<()> {
        self.ensure_live()?;
        if !self.resolve_open() {
            log::debug!("Field {}: close() while already closed", self.id);
            return Ok(());
        }
        self.set_open(false, ChangeContext::PROGRAMMATIC);
        Ok(())
    }

    /// Release the surface bindings. Calling it again is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            log::debug!("Field {}: destroy() on a destroyed field", self.id);
            return;
        }
        self.surface.release();
        self.destroyed = true;
        log::info!("Field {} destroyed", self.id);
    }

    pub(crate) fn ensure_live(&self) -> FieldResult<()> {
        if self.destroyed {
            return Err(FieldError::Destroyed);
        }
        Ok(())
    }

    /// Show the month of the current value, if any, without notifying.
    pub(crate) fn reveal_value_month(&mut self) {
        let Some(value) = self.resolve_value() else {
            return;
        };
        let month = value.month_iso();
        if month != self.state.active_month {
            self.state.active_month = month;
            self.render_month_label();
            self.render_grid();
        }
    }
}

/// Initial month: explicit config, else the value's month, else today.
fn initial_month(config: &FieldConfig, value: Option<DateIso>) -> YearMonthIso {
    config
        .initial_month_iso
        .or_else(|| value.map(|v| v.month_iso()))
        .unwrap_or_else(|| YearMonthIso::containing(Local::now().date_naive()))
}
