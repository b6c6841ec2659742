//! Caption bubble for one speaker's streaming text

use crate::ui::theme::Theme;
use egui::{Frame, RichText, Ui};

/// Which speaker a caption belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Agent,
}

/// Caption bubble showing one speaker's current text
///
/// Empty text means "do not display": the bubble is omitted entirely rather
/// than rendered blank.
pub struct Caption<'a> {
    theme: &'a Theme,
    speaker: Speaker,
    text: &'a str,
    max_width: f32,
}

impl<'a> Caption<'a> {
    pub fn new(theme: &'a Theme, speaker: Speaker, text: &'a str) -> Self {
        Self {
            theme,
            speaker,
            text,
            max_width: 300.0,
        }
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = width;
        self
    }

    pub fn show(self, ui: &mut Ui) {
        if self.text.is_empty() {
            return;
        }

        let fill = match self.speaker {
            Speaker::User => self.theme.caption_user,
            Speaker::Agent => self.theme.caption_agent,
        };

        Frame::none()
            .fill(fill)
            .rounding(self.theme.caption_rounding)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(self.max_width);
                ui.label(
                    RichText::new(self.text)
                        .size(14.0)
                        .color(self.theme.text_primary),
                );
            });
    }
}
