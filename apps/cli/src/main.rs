use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{
    config::load_settings, render::render_text, LoadState, SettingsOverrides, UserDirectoryClient,
    UserListController,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "user-cards-cli", about = "Fetch the user directory once and print it as cards")]
struct Args {
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputStream {
    Stdout,
    Stderr,
}

/// What the process prints, where, and how it exits once a load has settled.
#[derive(Debug, PartialEq, Eq)]
struct CliOutcome {
    success: bool,
    stream: OutputStream,
    text: String,
}

impl CliOutcome {
    fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn outcome_for(controller: &UserListController) -> CliOutcome {
    let text = render_text(&controller.view());
    match controller.state() {
        LoadState::Success(_) => CliOutcome {
            success: true,
            stream: OutputStream::Stdout,
            text,
        },
        _ => CliOutcome {
            success: false,
            stream: OutputStream::Stderr,
            text,
        },
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Diagnostics go to stderr so stdout carries only the rendered cards.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = load_settings(&SettingsOverrides {
        endpoint: args.endpoint,
        timeout_secs: args.timeout_secs,
    })?;
    info!(
        endpoint = %settings.endpoint,
        timeout_secs = settings.request_timeout.as_secs(),
        "settings resolved"
    );
    let client = UserDirectoryClient::new(&settings)?;

    let mut controller = UserListController::new();
    controller.load_users(&client).await;

    let outcome = outcome_for(&controller);
    match outcome.stream {
        OutputStream::Stdout => print!("{}", outcome.text),
        OutputStream::Stderr => {
            warn!("user list unavailable, exiting with failure");
            eprint!("{}", outcome.text);
        }
    }
    Ok(outcome.exit_code())
}
