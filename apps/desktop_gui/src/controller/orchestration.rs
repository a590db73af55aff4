//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{SubmitError, UiState};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Analyze button handler. Raises the in-flight flag and queues the request;
/// if the queue refuses it the flag is lowered again right away.
pub fn start_analysis(cmd_tx: &Sender<BackendCommand>, state: &mut UiState) {
    match state.begin_submission() {
        Ok(request) => {
            dispatch_backend_command(cmd_tx, BackendCommand::Analyze { request }, state)
        }
        Err(err) => tracing::debug!("analysis not started: {err}"),
    }
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    state: &mut UiState,
) {
    let cmd_name = cmd.name();

    let failure = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            return;
        }
        Err(TrySendError::Full(_)) => "UI command queue is full; please retry",
        Err(TrySendError::Disconnected(_)) => {
            "Backend command processor disconnected (possible startup/runtime failure)"
        }
    };
    tracing::warn!(command = cmd_name, "{failure}");
    let _ = state.complete_submission(Err(SubmitError::Unreachable(failure.to_string())));
}
