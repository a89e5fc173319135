//! Button components: day cells, month navigation, footer actions.

use datefield_core::{CellState, GridCell};
use egui::{
    Align2, Color32, CornerRadius, CursorIcon, Pos2, Response, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{sizing, theme};

/// Resolved colors for one day cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCellStyle {
    /// Background color
    pub bg_color: Color32,
    /// Day number color
    pub text_color: Color32,
    /// Whether the number is struck through (unavailable dates)
    pub struck: bool,
    /// Whether the cell is outlined (staged candidate)
    pub outlined: bool,
}

impl DayCellStyle {
    /// Style for `cell` given whether it is the value or the staged candidate.
    pub fn for_cell(cell: &GridCell, selected: bool, candidate: bool) -> Self {
        let selectable = cell.cell_state == CellState::Available;
        let bg_color = if selected {
            theme::ACCENT
        } else if candidate {
            theme::SELECTED_BG
        } else {
            Color32::TRANSPARENT
        };
        let text_color = if selected {
            Color32::WHITE
        } else if !selectable {
            theme::TEXT_DISABLED
        } else if !cell.in_current_month {
            theme::TEXT_MUTED
        } else {
            theme::TEXT
        };
        Self {
            bg_color,
            text_color,
            struck: cell.cell_state == CellState::Unavailable,
            outlined: candidate && !selected,
        }
    }
}

/// One clickable day in the month grid.
pub struct DayCell<'a> {
    cell: &'a GridCell,
    selected: bool,
    candidate: bool,
}

impl<'a> DayCell<'a> {
    /// Create a day cell.
    pub fn new(cell: &'a GridCell) -> Self {
        Self {
            cell,
            selected: false,
            candidate: false,
        }
    }

    /// Mark the cell as the current value.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Mark the cell as the staged candidate.
    pub fn candidate(mut self, candidate: bool) -> Self {
        self.candidate = candidate;
        self
    }

    /// Show the cell.
    ///
    /// Cells that cannot be chosen still report clicks; the field decides
    /// whether the selection is valid.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(vec2(sizing::CELL, sizing::CELL), Sense::click());

        if ui.is_rect_visible(rect) {
            let style = DayCellStyle::for_cell(self.cell, self.selected, self.candidate);
            let bg_color = if style.bg_color == Color32::TRANSPARENT && response.hovered() {
                theme::HOVER_BG
            } else {
                style.bg_color
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            if style.outlined {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, theme::ACCENT),
                    StrokeKind::Inside,
                );
            }

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.cell.iso.day().to_string(),
                egui::FontId::proportional(12.0),
                style.text_color,
            );

            if style.struck {
                let y = rect.center().y;
                ui.painter().line_segment(
                    [
                        Pos2::new(rect.left() + 8.0, y),
                        Pos2::new(rect.right() - 8.0, y),
                    ],
                    Stroke::new(1.0, style.text_color),
                );
            }
        }

        response
            .on_hover_text(self.cell.iso.to_string())
            .on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// A small square button for month navigation.
pub struct NavButton<'a> {
    label: &'a str,
    tooltip: &'a str,
}

impl<'a> NavButton<'a> {
    /// Create a navigation button.
    pub fn new(label: &'a str, tooltip: &'a str) -> Self {
        Self { label, tooltip }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(vec2(sizing::CELL, sizing::CELL), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                theme::TEXT,
            );
        }

        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// A text button for panel actions.
/// Uses solid blue background when marked primary.
pub struct TextButton<'a> {
    label: &'a str,
    primary: bool,
}

impl<'a> TextButton<'a> {
    /// Create a new text button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            primary: false,
        }
    }

    /// Render as the primary action.
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Show the button, sized to its label.
    pub fn show(self, ui: &mut Ui) -> Response {
        let font_id = egui::FontId::proportional(12.0);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let size = vec2(galley.size().x + 16.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = match (self.primary, response.hovered()) {
                (true, _) => theme::ACCENT,
                (false, true) => theme::HOVER_BG,
                (false, false) => Color32::TRANSPARENT,
            };
            let text_color = if self.primary { Color32::WHITE } else { theme::TEXT };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}
