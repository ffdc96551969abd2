//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::FetchError;

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), FetchError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(FetchError::transport(format!(
            "ui command queue is full; dropped {cmd_name}"
        ))),
        Err(TrySendError::Disconnected(_)) => Err(FetchError::transport(format!(
            "backend worker disconnected; dropped {cmd_name}"
        ))),
    }
}
