//! DateField Core Library
//!
//! Headless state, constraint evaluation and interaction logic for a date
//! picker form field. Rendering is delegated to a host [`Surface`].

pub mod bootstrap;
pub mod callbacks;
pub mod config;
pub mod constraints;
pub mod controller;
pub mod error;
pub mod field;
pub mod grid;
pub mod iso;
pub mod owner;
mod render;
pub mod state;
pub mod surface;

pub use bootstrap::{Document, MemoryDocument, auto_init, demo_config, mount};
pub use callbacks::{Callbacks, ChangeContext, ChangeSource, NavigateEvent};
pub use config::{CommitPolicy, ConfigPatch, FieldConfig, Messages};
pub use constraints::{CellState, CommitDecision, Constraints, RejectReason};
pub use controller::{Intent, Outcome};
pub use error::{FieldError, FieldResult};
pub use field::DatePickerField;
pub use grid::{GridCell, compute_month_grid, weekday_labels};
pub use iso::{DateIso, YearMonthIso};
pub use owner::Ownership;
pub use state::{InteractionPhase, WidgetState};
pub use surface::{MemorySurface, Slot, SlotState, StatusFlag, Surface};
