//! Layout helpers: the panel footer rule and support text.

use egui::{Color32, Pos2, RichText, Stroke, Ui};

use crate::theme;

/// Draw the rule between the date grid and the panel footer.
pub fn separator(ui: &mut Ui) {
    ui.add_space(4.0);
    let rect = ui.available_rect_before_wrap();
    ui.painter().hline(
        rect.x_range(),
        rect.top(),
        Stroke::new(1.0, theme::BORDER),
    );
    ui.add_space(6.0);
}

/// Draw a line of support text (help, status or error) under the control.
pub fn support_text(ui: &mut Ui, text: &str, color: Color32) {
    ui.add_space(2.0);
    ui.label(RichText::new(text).size(11.0).color(color));
}

/// Left-center anchor for text inset from the control's left edge.
pub fn text_origin(rect: egui::Rect) -> Pos2 {
    rect.left_center() + egui::vec2(10.0, 0.0)
}
