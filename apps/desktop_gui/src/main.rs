mod backend_bridge;
mod controller;
mod ui;

use anyhow::Result;
use clap::Parser;
use client_core::{config::load_settings, SettingsOverrides};
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::UserCardsApp;

#[derive(Parser, Debug)]
#[command(name = "user-cards", about = "Browse the user directory as cards")]
struct Args {
    /// Directory endpoint returning a JSON array of users.
    #[arg(long)]
    endpoint: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings = load_settings(&SettingsOverrides {
        endpoint: args.endpoint,
        timeout_secs: args.timeout_secs,
    })?;
    let endpoint_label = settings.endpoint.to_string();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User Directory")
            .with_inner_size([1040.0, 760.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User Directory",
        options,
        Box::new(move |_cc| Ok(Box::new(UserCardsApp::new(cmd_tx, ui_rx, endpoint_label)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop window: {err}"))
}
