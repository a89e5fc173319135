//! egui rendering for the date picker field, with Tailwind-inspired styling.
//!
//! The field's headless core writes into a [`datefield_core::MemorySurface`];
//! this crate paints that retained model and turns clicks and focus changes
//! back into [`datefield_core::Intent`]s:
//!
//! - **Buttons**: day cells, month navigation, footer actions
//! - **Frame**: the popover panel and field frames
//! - **Layout**: support text and separators
//! - **View**: the complete field

pub mod buttons;
pub mod frame;
pub mod layout;
pub mod view;

pub use buttons::{DayCell, DayCellStyle, NavButton, TextButton};
pub use frame::{field_frame, panel_frame};
pub use layout::{separator, support_text, text_origin};
pub use view::{DatePickerResponse, DatePickerView, control_stroke_color};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Day cell size
    pub const CELL: f32 = 28.0;
    /// Field control height
    pub const CONTROL_HEIGHT: f32 = 32.0;
    /// Default field width
    pub const FIELD_WIDTH: f32 = 220.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Text for dates that cannot be chosen
    pub const TEXT_DISABLED: Color32 = Color32::from_rgb(190, 190, 190);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
