//! Frames: the calendar popover and the field container.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, epaint::Shadow};

use crate::{sizing, theme};

/// Frame of the calendar popover.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(Shadow {
            spread: 1,
            blur: 12,
            offset: [0, 4],
            color: Color32::from_black_alpha(20),
        })
        .inner_margin(Margin::symmetric(10, 8))
}

/// Frame around the whole field (control plus support text).
pub fn field_frame() -> Frame {
    Frame::new().inner_margin(Margin::symmetric(0, 4))
}
