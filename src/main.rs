use anyhow::Result;
use confab::config::ServiceConfig;
use confab::service;
use confab::ui::ConfabApp;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confab=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Confab voice conversation client");

    let config = ServiceConfig::from_env();
    if let Err(e) = config.validate() {
        warn!("{}; the conversation stream will stay silent", e);
    }

    // One connection per process, reused across push-to-talk sessions.
    // A transport backend (network worker for the dialogue service) drives
    // the endpoint side; without one the event stream simply stays empty.
    let (handle, events, _endpoint) = service::channels();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_title("Confab"),
        ..Default::default()
    };

    eframe::run_native(
        "Confab",
        options,
        Box::new(move |cc| Ok(Box::new(ConfabApp::new(cc, handle, events)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))?;

    Ok(())
}
