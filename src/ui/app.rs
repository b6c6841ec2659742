//! Main application struct and eframe integration

use crate::conversation::SessionController;
use crate::service::{ServiceEvents, ServiceHandle};
use crate::ui::components::caption::{Caption, Speaker};
use crate::ui::components::talk_button::{TalkButton, TalkStatus};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use tracing::info;

/// Main Confab application
pub struct ConfabApp {
    /// Conversation state machine
    controller: SessionController<ServiceHandle>,
    /// Inbound event streams, receivers taken once at startup
    events: ServiceEvents,
    /// Second handle on the connection, for shutdown on exit
    service: ServiceHandle,
    /// Visual theme
    theme: Theme,
}

impl ConfabApp {
    /// Create the application around an already-opened service connection
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        handle: ServiceHandle,
        events: ServiceEvents,
    ) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        Self {
            controller: SessionController::new(handle.clone()),
            events,
            service: handle,
            theme,
        }
    }

    /// Drain pending service events and apply them in arrival order
    fn poll_events(&mut self) {
        while let Some(event) = self.events.try_recv_response() {
            self.controller.on_response_event(&event);
        }
        while let Some(event) = self.events.try_recv_playback() {
            self.controller.on_playback_event(event);
        }
    }

    /// Show the bottom area with the hold-to-talk button
    fn show_talk_area(&mut self, ctx: &egui::Context) {
        let snapshot = self.controller.snapshot();

        TopBottomPanel::bottom("talk_area")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let held = TalkButton::new(&self.theme, snapshot.is_holding).show(ui);

                    // Converge the held flag onto press/release transitions;
                    // the controller's no-op guards absorb duplicates
                    if held {
                        self.controller.press();
                    } else {
                        self.controller.release();
                    }

                    ui.add_space(self.theme.spacing_sm);
                    TalkStatus::new(&self.theme, snapshot.is_holding, snapshot.is_talking)
                        .show(ui);
                });
            });
    }

    /// Show the conversation captions and the talking indicator
    fn show_conversation(&mut self, ctx: &egui::Context) {
        let snapshot = self.controller.snapshot();

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                // Talking indicator stands in for the avatar's talk/idle
                // animation switch
                let indicator = if snapshot.is_talking { "●" } else { "○" };
                let color = if snapshot.is_talking {
                    self.theme.talking
                } else {
                    self.theme.text_muted
                };
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(indicator).size(48.0).color(color));
                });

                ui.add_space(self.theme.spacing);

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    Caption::new(&self.theme, Speaker::Agent, &snapshot.agent_text).show(ui);
                });

                ui.add_space(self.theme.spacing_sm);

                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    Caption::new(&self.theme, Speaker::User, &snapshot.user_text).show(ui);
                });
            });
    }
}

impl eframe::App for ConfabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();

        self.show_talk_area(ctx);
        self.show_conversation(ctx);

        // Keep repainting while something is in motion
        let snapshot = self.controller.snapshot();
        if snapshot.is_holding || snapshot.is_talking {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Confab shutting down");
        self.controller.release();
        let _ = self.service.shutdown();
    }
}
