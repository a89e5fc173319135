//! The complete date picker field, painted from the core's retained surface.

use datefield_core::{
    DatePickerField, FieldError, Intent, MemorySurface, Outcome, Slot, StatusFlag,
};
use egui::{
    Align, Align2, Color32, CornerRadius, CursorIcon, Layout, Rect, Response, Sense, Stroke,
    StrokeKind, Ui, vec2,
};

use crate::buttons::{DayCell, NavButton, TextButton};
use crate::frame::{field_frame, panel_frame};
use crate::layout::{separator, support_text, text_origin};
use crate::{sizing, theme};

/// Placeholder shown when the field has no value.
const PLACEHOLDER: &str = "Select a date";

/// Border color of the control for a status flag.
pub fn control_stroke_color(flag: StatusFlag) -> Color32 {
    match flag {
        StatusFlag::Error => theme::ERROR,
        StatusFlag::Open | StatusFlag::Focused => theme::ACCENT,
        StatusFlag::Default => theme::BORDER,
    }
}

/// Result of showing the field for one frame.
#[derive(Debug)]
pub struct DatePickerResponse {
    /// Response of the control button.
    pub response: Response,
    /// Intents raised this frame, in order, with what each did.
    pub dispatched: Vec<(Intent, Outcome)>,
    /// Set when the field refused input (it was destroyed).
    pub error: Option<FieldError>,
    /// Clickable areas drawn this frame and the intent a click on each raises.
    pub targets: Vec<(Intent, Rect)>,
}

impl DatePickerResponse {
    /// Whether any intent changed the field this frame.
    pub fn changed(&self) -> bool {
        self.dispatched
            .iter()
            .any(|(_, outcome)| *outcome != Outcome::Ignored)
    }

    /// Where a click raises `intent`, if that target was drawn this frame.
    pub fn target(&self, intent: Intent) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(raised, _)| *raised == intent)
            .map(|(_, rect)| *rect)
    }
}

/// Intents and hit targets collected while drawing one frame.
#[derive(Default)]
struct Raised {
    intents: Vec<Intent>,
    targets: Vec<(Intent, Rect)>,
}

impl Raised {
    /// Record `response` as the target for `intent`, raising it on click.
    fn track(&mut self, intent: Intent, response: &Response) {
        self.targets.push((intent, response.rect));
        if response.clicked() {
            self.intents.push(intent);
        }
    }
}

/// Paints a [`DatePickerField`] and feeds user input back into it.
pub struct DatePickerView<'a> {
    field: &'a mut DatePickerField<MemorySurface>,
    width: f32,
}

impl<'a> DatePickerView<'a> {
    /// Create a view over `field`.
    pub fn new(field: &'a mut DatePickerField<MemorySurface>) -> Self {
        Self {
            field,
            width: sizing::FIELD_WIDTH,
        }
    }

    /// Set the control width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the field and apply any intents the user raised.
    ///
    /// Drawing reads the surface only; intents are dispatched after the
    /// frame is laid out, so the next frame reflects their effect.
    pub fn show(self, ui: &mut Ui) -> DatePickerResponse {
        let mut raised = Raised::default();
        let response = field_frame()
            .show(ui, |ui| {
                ui.set_width(self.width);
                let response = self.draw_control(ui, &mut raised);
                self.draw_support(ui);
                if !self.field.surface().is_hidden(Slot::Panel) {
                    ui.add_space(4.0);
                    self.draw_panel(ui, &mut raised);
                }
                response
            })
            .inner;

        let Raised { intents, targets } = raised;
        let mut dispatched = Vec::with_capacity(intents.len());
        let mut error = None;
        for intent in intents {
            match self.field.dispatch(intent) {
                Ok(outcome) => dispatched.push((intent, outcome)),
                Err(err) => {
                    error = Some(err);
                    break;
                }
            }
        }

        DatePickerResponse {
            response,
            dispatched,
            error,
            targets,
        }
    }

    fn draw_control(&self, ui: &mut Ui, raised: &mut Raised) -> Response {
        let surface = self.field.surface();
        let interactive = self.field.config().is_interactive();
        let clear_visible = !surface.is_hidden(Slot::Clear);

        let (rect, response) =
            ui.allocate_exact_size(vec2(self.width, sizing::CONTROL_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if interactive {
                Color32::WHITE
            } else {
                theme::HOVER_BG
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, control_stroke_color(surface.status())),
                StrokeKind::Inside,
            );

            let value = surface.text(Slot::ValueText);
            let (text, color) = if value.is_empty() {
                (PLACEHOLDER, theme::TEXT_MUTED)
            } else if interactive {
                (value, theme::TEXT)
            } else {
                (value, theme::TEXT_DISABLED)
            };
            ui.painter().text(
                text_origin(rect),
                Align2::LEFT_CENTER,
                text,
                egui::FontId::proportional(13.0),
                color,
            );
        }

        // The clear affordance sits inside the control's right edge.
        let mut control_intent = None;
        if clear_visible {
            let clear_rect = Rect::from_center_size(
                rect.right_center() - vec2(sizing::CONTROL_HEIGHT / 2.0, 0.0),
                vec2(20.0, 20.0),
            );
            let clear = ui
                .interact(clear_rect, response.id.with("clear"), Sense::click())
                .on_hover_text("Clear")
                .on_hover_cursor(CursorIcon::PointingHand);
            let color = if clear.hovered() {
                theme::TEXT
            } else {
                theme::TEXT_MUTED
            };
            ui.painter().text(
                clear_rect.center(),
                Align2::CENTER_CENTER,
                "×",
                egui::FontId::proportional(14.0),
                color,
            );
            raised.targets.push((Intent::Clear, clear_rect));
            if clear.clicked() {
                control_intent = Some(Intent::Clear);
            }
        }

        raised.targets.push((Intent::Activate, rect));
        if control_intent.is_none() && response.clicked() {
            response.request_focus();
            control_intent = Some(Intent::Activate);
        }
        // Follow egui's focus by level. Focus precedes the Activate that caused it.
        raised.intents.extend(self.focus_change(&response));
        raised.intents.extend(control_intent);

        response.on_hover_cursor(CursorIcon::PointingHand)
    }

    /// The intent that brings the field's focus flag in line with egui's.
    fn focus_change(&self, response: &Response) -> Option<Intent> {
        if self.field.is_destroyed() {
            return None;
        }
        match (response.has_focus(), self.field.state().focused) {
            (true, false) => Some(Intent::Focus),
            (false, true) => Some(Intent::Blur),
            _ => None,
        }
    }

    fn draw_support(&self, ui: &mut Ui) {
        let surface = self.field.surface();
        for (slot, color) in [
            (Slot::Help, theme::TEXT_MUTED),
            (Slot::Status, theme::TEXT),
            (Slot::Error, theme::ERROR),
        ] {
            if !surface.is_hidden(slot) {
                support_text(ui, surface.text(slot), color);
            }
        }
    }

    fn draw_panel(&self, ui: &mut Ui, raised: &mut Raised) {
        let surface = self.field.surface();
        let value = self.field.resolve_value();
        let candidate = self.field.state().candidate;

        panel_frame().show(ui, |ui| {
            ui.spacing_mut().item_spacing = vec2(2.0, 2.0);

            ui.horizontal(|ui| {
                raised.track(
                    Intent::PrevMonth,
                    &NavButton::new("‹", "Previous month").show(ui),
                );
                let label_width = sizing::CELL * 5.0 + 8.0;
                ui.allocate_ui_with_layout(
                    vec2(label_width, sizing::CELL),
                    Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(
                            egui::RichText::new(surface.text(Slot::MonthLabel))
                                .size(13.0)
                                .strong()
                                .color(theme::TEXT),
                        );
                    },
                );
                raised.track(Intent::NextMonth, &NavButton::new("›", "Next month").show(ui));
            });

            ui.horizontal(|ui| {
                for label in surface.weekdays() {
                    let (rect, _) =
                        ui.allocate_exact_size(vec2(sizing::CELL, sizing::CELL), Sense::hover());
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        label,
                        egui::FontId::proportional(11.0),
                        theme::TEXT_MUTED,
                    );
                }
            });

            for week in surface.grid().chunks(7) {
                ui.horizontal(|ui| {
                    for cell in week {
                        let response = DayCell::new(cell)
                            .selected(value == Some(cell.iso))
                            .candidate(candidate == Some(cell.iso))
                            .show(ui);
                        raised.track(Intent::SelectDate(cell.iso), &response);
                    }
                });
            }

            separator(ui);

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if !surface.is_hidden(Slot::Confirm) {
                    raised.track(Intent::Confirm, &TextButton::new("Apply").primary(true).show(ui));
                }
                if !surface.is_hidden(Slot::Dismiss) {
                    raised.track(Intent::Dismiss, &TextButton::new("Cancel").show(ui));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datefield_core::{
        Callbacks, CommitPolicy, Constraints, DateIso, FieldConfig, Messages, YearMonthIso,
    };
    use egui::{Event, Modifiers, PointerButton, Pos2, pos2};

    fn date(s: &str) -> DateIso {
        s.parse().unwrap()
    }

    fn field(config: FieldConfig) -> DatePickerField<MemorySurface> {
        DatePickerField::create(MemorySurface::new(), config, Callbacks::default()).unwrap()
    }

    fn show_frame(field: &mut DatePickerField<MemorySurface>) -> DatePickerResponse {
        let ctx = egui::Context::default();
        let mut out = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = Some(DatePickerView::new(field).show(ui));
            });
        });
        out.unwrap()
    }

    fn month(s: &str) -> YearMonthIso {
        s.parse().unwrap()
    }

    /// A field shown on one egui context across frames, fed pointer events.
    struct Harness {
        ctx: egui::Context,
        field: DatePickerField<MemorySurface>,
    }

    impl Harness {
        fn new(config: FieldConfig) -> Self {
            Self {
                ctx: egui::Context::default(),
                field: field(config.with_initial_month(month("2026-01"))),
            }
        }

        fn frame(&mut self, events: Vec<Event>) -> DatePickerResponse {
            let input = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 800.0))),
                events,
                ..Default::default()
            };
            let field = &mut self.field;
            let mut out = None;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    out = Some(DatePickerView::new(field).show(ui));
                });
            });
            out.unwrap()
        }

        /// Center of the area raising `intent`, laid out by an idle frame.
        fn target(&mut self, intent: Intent) -> Pos2 {
            self.frame(Vec::new())
                .target(intent)
                .unwrap_or_else(|| panic!("{:?} has no target", intent))
                .center()
        }

        /// Press and release at `pos`, then settle; returns the intents
        /// dispatched over those frames.
        fn click(&mut self, pos: Pos2) -> Vec<Intent> {
            let button = |pressed| Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::NONE,
            };
            let frames = [
                vec![Event::PointerMoved(pos), button(true)],
                vec![button(false)],
                Vec::new(),
            ];
            let mut seen = Vec::new();
            for events in frames {
                let response = self.frame(events);
                assert!(response.error.is_none());
                seen.extend(response.dispatched.into_iter().map(|(intent, _)| intent));
            }
            seen
        }

        fn click_target(&mut self, intent: Intent) -> Vec<Intent> {
            let pos = self.target(intent);
            self.click(pos)
        }
    }

    #[test]
    fn test_stroke_color_follows_status() {
        assert_eq!(control_stroke_color(StatusFlag::Error), theme::ERROR);
        assert_eq!(control_stroke_color(StatusFlag::Open), theme::ACCENT);
        assert_eq!(control_stroke_color(StatusFlag::Focused), theme::ACCENT);
        assert_eq!(control_stroke_color(StatusFlag::Default), theme::BORDER);
    }

    #[test]
    fn test_idle_frame_dispatches_nothing() {
        let config = FieldConfig::new()
            .with_default_value(date("2026-01-15"))
            .with_constraints(Constraints::default().clearable())
            .with_messages(Messages {
                help_text: Some("Pick a day".into()),
                ..Default::default()
            });
        let mut field = field(config);
        let result = show_frame(&mut field);
        assert!(result.dispatched.is_empty());
        assert!(result.error.is_none());
        assert!(!result.changed());
        assert!(!field.resolve_open());
    }

    #[test]
    fn test_open_panel_paints_without_changing_state() {
        let config = FieldConfig::new()
            .with_default_value(date("2026-01-15"))
            .with_policy(CommitPolicy::PreviewThenCommit);
        let mut field = field(config);
        field.open().unwrap();
        let month_before = field.state().active_month;

        let result = show_frame(&mut field);
        assert!(result.dispatched.is_empty());
        assert!(field.resolve_open());
        assert_eq!(field.state().active_month, month_before);
        assert_eq!(field.surface().grid().len(), 42);
    }

    #[test]
    fn test_control_click_focuses_then_toggles() {
        let mut h = Harness::new(FieldConfig::new());
        assert_eq!(
            h.click_target(Intent::Activate),
            vec![Intent::Focus, Intent::Activate]
        );
        assert!(h.field.state().focused);
        assert!(h.field.resolve_open());
        assert_eq!(h.field.surface().status(), StatusFlag::Open);

        // Already focused: a second click only toggles.
        assert_eq!(h.click_target(Intent::Activate), vec![Intent::Activate]);
        assert!(h.field.state().focused);
        assert!(!h.field.resolve_open());
    }

    #[test]
    fn test_click_outside_blurs() {
        let mut h = Harness::new(FieldConfig::new());
        h.click_target(Intent::Activate);
        assert!(!h.field.state().touched);

        assert_eq!(h.click(pos2(790.0, 790.0)), vec![Intent::Blur]);
        assert!(!h.field.state().focused);
        assert!(h.field.state().touched);
        // Clicking empty space again changes nothing.
        assert!(h.click(pos2(790.0, 790.0)).is_empty());
    }

    #[test]
    fn test_clear_click_only_clears() {
        let config = FieldConfig::new()
            .with_default_value(date("2026-01-15"))
            .with_constraints(Constraints::default().clearable());
        let mut h = Harness::new(config);
        assert_eq!(h.click_target(Intent::Clear), vec![Intent::Clear]);
        assert_eq!(h.field.resolve_value(), None);
        assert!(!h.field.resolve_open());
        assert!(!h.field.state().focused);
        assert!(h.frame(Vec::new()).target(Intent::Clear).is_none());
    }

    #[test]
    fn test_day_click_commits_and_closes() {
        let mut h = Harness::new(FieldConfig::new().with_default_value(date("2026-01-15")));
        h.field.open().unwrap();
        let pick = Intent::SelectDate(date("2026-01-20"));
        assert_eq!(h.click_target(pick), vec![pick]);
        assert_eq!(h.field.resolve_value(), Some(date("2026-01-20")));
        assert!(!h.field.resolve_open());
        assert!(h.frame(Vec::new()).target(pick).is_none());
    }

    #[test]
    fn test_month_buttons_navigate() {
        let mut h = Harness::new(FieldConfig::new());
        h.field.open().unwrap();
        assert_eq!(h.click_target(Intent::NextMonth), vec![Intent::NextMonth]);
        assert_eq!(h.field.state().active_month, month("2026-02"));
        assert_eq!(h.field.surface().grid()[0].iso, date("2026-02-01"));

        h.click_target(Intent::PrevMonth);
        h.click_target(Intent::PrevMonth);
        assert_eq!(h.field.state().active_month, month("2025-12"));
    }

    #[test]
    fn test_preview_stages_then_applies() {
        let config = FieldConfig::new().with_policy(CommitPolicy::PreviewThenCommit);
        let mut h = Harness::new(config);
        h.field.open().unwrap();
        assert!(h.frame(Vec::new()).target(Intent::Confirm).is_none());

        let pick = Intent::SelectDate(date("2026-01-09"));
        assert_eq!(h.click_target(pick), vec![pick]);
        assert_eq!(h.field.state().candidate, Some(date("2026-01-09")));
        assert_eq!(h.field.resolve_value(), None);

        assert_eq!(h.click_target(Intent::Confirm), vec![Intent::Confirm]);
        assert_eq!(h.field.resolve_value(), Some(date("2026-01-09")));
        assert!(!h.field.resolve_open());
    }

    #[test]
    fn test_cancel_dismisses_staged_pick() {
        let config = FieldConfig::new().with_policy(CommitPolicy::PreviewThenCommit);
        let mut h = Harness::new(config);
        h.field.open().unwrap();
        h.click_target(Intent::SelectDate(date("2026-01-09")));

        assert_eq!(h.click_target(Intent::Dismiss), vec![Intent::Dismiss]);
        assert!(!h.field.resolve_open());
        assert_eq!(h.field.resolve_value(), None);
    }

    #[test]
    fn test_destroyed_field_still_paints() {
        let mut field = field(FieldConfig::new());
        field.destroy();
        let result = show_frame(&mut field);
        assert!(result.dispatched.is_empty());
        assert!(result.error.is_none());
    }
}
