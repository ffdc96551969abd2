//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ClientSettings, LoadTicket, UserDirectoryClient, UserSource};
use crossbeam_channel::{Receiver, Sender};
use tokio::task::JoinHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    let client = match UserDirectoryClient::new(&settings) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("backend worker startup failure: {err:#}");
            let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!("{err:#}")));
            return;
        }
    };
    tracing::info!(endpoint = %client.endpoint(), "backend worker configured");
    spawn_worker(Arc::new(client), cmd_rx, ui_tx);
}

/// Runs the command loop on a dedicated thread that owns its own tokio runtime.
pub fn spawn_worker(
    source: Arc<dyn UserSource>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            let mut load_task: Option<JoinHandle<()>> = None;
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadUsers { ticket } => {
                        if let Some(previous) = load_task.take() {
                            if !previous.is_finished() {
                                tracing::info!(
                                    ticket = ticket.0,
                                    "backend: aborting superseded load"
                                );
                            }
                            previous.abort();
                        }
                        tracing::info!(ticket = ticket.0, "backend: load_users");
                        load_task = Some(tokio::spawn(run_load(
                            Arc::clone(&source),
                            ticket,
                            ui_tx.clone(),
                        )));
                    }
                }
            }

            if let Some(task) = load_task.take() {
                task.abort();
            }
            tracing::info!("backend: command queue closed, worker exiting");
        });
    })
}

async fn run_load(source: Arc<dyn UserSource>, ticket: LoadTicket, ui_tx: Sender<UiEvent>) {
    let result = source.fetch_users().await;
    if let Err(err) = &result {
        tracing::debug!(ticket = ticket.0, "backend: load_users failed: {err}");
    }
    if ui_tx.try_send(UiEvent::UsersLoaded { ticket, result }).is_err() {
        tracing::warn!(
            ticket = ticket.0,
            "backend: ui event queue unavailable, load result dropped"
        );
    }
}
