use eframe::egui;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use soulbuddy::engine::flow_client::FlowConfig;
use soulbuddy::ui::app::DashboardApp;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soulbuddy=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    if dotenvy::dotenv().is_ok() {
        tracing::debug!("loaded environment from .env");
    }
    let config = FlowConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SoulBuddy Dashboard")
            .with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SoulBuddy Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(config)))),
    )
}
