//! Theme and styling for the Confab UI

use egui::{Color32, Rounding, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary accent color
    pub primary: Color32,
    /// Recording/holding indicator color
    pub recording: Color32,
    /// Talking indicator color
    pub talking: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_muted: Color32,

    /// Caption bubble backgrounds
    pub caption_user: Color32,
    pub caption_agent: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for caption bubbles
    pub caption_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(0, 123, 255),   // Blue
            recording: Color32::from_rgb(239, 68, 68), // Red
            talking: Color32::from_rgb(34, 197, 94),   // Green

            bg_primary: Color32::from_rgb(17, 24, 39),   // Dark blue-gray
            bg_secondary: Color32::from_rgb(31, 41, 55), // Lighter blue-gray

            text_primary: Color32::from_rgb(249, 250, 251), // Almost white
            text_muted: Color32::from_rgb(156, 163, 175),   // Medium gray

            caption_user: Color32::from_rgba_unmultiplied(115, 117, 109, 128),
            caption_agent: Color32::from_rgba_unmultiplied(255, 255, 255, 40),

            button_rounding: Rounding::same(10.0),
            caption_rounding: Rounding::same(10.0),

            spacing: 16.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply the theme to the egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        ctx.set_visuals(visuals);
    }
}
