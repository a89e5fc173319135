//! Mounting entry points.
//!
//! The field never looks up its container itself. A host hands in a
//! [`Document`] that resolves selectors to surfaces, which keeps the lookup
//! injectable in tests.

use std::collections::HashMap;

use crate::callbacks::Callbacks;
use crate::config::{FieldConfig, Messages};
use crate::constraints::Constraints;
use crate::error::{FieldError, FieldResult};
use crate::field::DatePickerField;
use crate::iso::{DateIso, YearMonthIso};
use crate::surface::{MemorySurface, Surface};

/// Selector of the zero-config auto-initialized root.
pub const COMPONENT_SELECTOR: &str = r#"[data-component="DatePickerField"]"#;

/// Resolves selectors to mountable surfaces.
pub trait Document {
    type Surface: Surface;

    /// Take the surface matching `selector`, if any.
    fn query(&mut self, selector: &str) -> Option<Self::Surface>;
}

/// Mount a field on the container matching `selector`.
pub fn mount<D: Document>(
    document: &mut D,
    selector: &str,
    config: FieldConfig,
    callbacks: Callbacks,
) -> FieldResult<DatePickerField<D::Surface>> {
    let container = document
        .query(selector)
        .ok_or_else(|| FieldError::MissingContainer(selector.to_string()))?;
    DatePickerField::create(container, config, callbacks)
}

/// Mount the zero-config field if the document has an auto-init root.
///
/// Returns `Ok(None)` when no root is present.
pub fn auto_init<D: Document>(document: &mut D) -> FieldResult<Option<DatePickerField<D::Surface>>> {
    let Some(container) = document.query(COMPONENT_SELECTOR) else {
        log::debug!("No auto-init root found");
        return Ok(None);
    };
    let config = FieldConfig::new()
        .with_messages(Messages {
            help_text: Some(String::new()),
            status_text: Some(String::new()),
            error_text: Some(String::new()),
        })
        .with_constraints(Constraints::default().clearable());
    let callbacks = Callbacks::new().on_change(|value, _| {
        log::info!("change {}", value.map(|v| v.to_string()).unwrap_or_default());
    });
    DatePickerField::create(container, config, callbacks).map(Some)
}

/// The demo configuration: January 2026, clearable, limited to that year.
pub fn demo_config() -> FieldConfig {
    let (min, max, default) = (
        DateIso::from_ymd(2026, 1, 1),
        DateIso::from_ymd(2026, 12, 31),
        DateIso::from_ymd(2026, 1, 15),
    );
    let mut constraints = Constraints::default().clearable();
    constraints.min_date = min;
    constraints.max_date = max;

    let mut config = FieldConfig::new().with_constraints(constraints);
    config.default_value = default;
    config.initial_month_iso = YearMonthIso::new(2026, 1);
    config
}

/// A document backed by in-memory surfaces keyed by selector.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    roots: HashMap<String, MemorySurface>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under `selector`.
    pub fn insert(&mut self, selector: impl Into<String>, surface: MemorySurface) {
        self.roots.insert(selector.into(), surface);
    }
}

impl Document for MemoryDocument {
    type Surface = MemorySurface;

    fn query(&mut self, selector: &str) -> Option<MemorySurface> {
        self.roots.remove(selector)
    }
}
