//! Hold-to-talk button component
//!
//! Unlike a click-to-toggle record button, this reports whether the control
//! is *currently held*: pointer-down (mouse or touch) starts the hold,
//! pointer-up ends it. The caller maps the held flag onto press/release
//! transitions, whose no-op guards absorb redundant input events.

use crate::ui::theme::Theme;
use egui::{Key, RichText, Sense, Vec2};

/// Hold-to-talk button
pub struct TalkButton<'a> {
    theme: &'a Theme,
    is_holding: bool,
    size: Vec2,
}

impl<'a> TalkButton<'a> {
    pub fn new(theme: &'a Theme, is_holding: bool) -> Self {
        Self {
            theme,
            is_holding,
            size: Vec2::new(180.0, 48.0),
        }
    }

    /// Set a custom button size
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the button and return whether it is currently held
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::drag());

        if ui.is_rect_visible(rect) {
            let bg = if self.is_holding {
                self.theme.recording
            } else if response.hovered() {
                self.theme.primary.gamma_multiply(1.2)
            } else {
                self.theme.primary
            };

            ui.painter()
                .rect_filled(rect, self.theme.button_rounding, bg);

            let label = if self.is_holding {
                "Listening..."
            } else {
                "Hold to Talk"
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(18.0),
                self.theme.text_primary,
            );
        }

        if response.hovered() && !self.is_holding {
            response.clone().on_hover_text("Hold to talk (or hold Space)");
        }

        // Pointer and touch both report through is_pointer_button_down_on;
        // holding Space is an additional input modality for the same gesture
        let pointer_held = response.is_pointer_button_down_on();
        let space_held = ui.input(|i| i.key_down(Key::Space))
            && !ui.memory(|m| m.focused().is_some());

        pointer_held || space_held
    }
}

/// Small status line shown under the button
pub struct TalkStatus<'a> {
    theme: &'a Theme,
    is_holding: bool,
    is_talking: bool,
}

impl<'a> TalkStatus<'a> {
    pub fn new(theme: &'a Theme, is_holding: bool, is_talking: bool) -> Self {
        Self {
            theme,
            is_holding,
            is_talking,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let (text, color) = if self.is_holding {
            ("Listening...", self.theme.recording)
        } else if self.is_talking {
            ("Speaking", self.theme.talking)
        } else {
            ("Hold the button to talk", self.theme.text_muted)
        };

        ui.label(RichText::new(text).size(12.0).color(color));
    }
}
