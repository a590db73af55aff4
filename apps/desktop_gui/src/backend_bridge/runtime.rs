//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::AnalysisService;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker thread. Commands are served one at a time; the
/// thread exits once every command sender is dropped.
pub fn launch<S>(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    service: S,
) -> thread::JoinHandle<()>
where
    S: AnalysisService + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                let cmd_name = cmd.name();
                tracing::debug!(command = cmd_name, "backend command received");
                match cmd {
                    BackendCommand::Analyze { request } => {
                        let outcome = service.analyze(request).await;
                        if let Err(err) = &outcome {
                            tracing::warn!(category = ?err.category(), "analysis failed: {err}");
                        }
                        // The UI lowers its in-flight flag only on this event.
                        if ui_tx.send(UiEvent::AnalysisFinished(outcome)).is_err() {
                            tracing::debug!("ui event receiver dropped; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use client_core::{AnalysisRequest, SubmitError, UploadFile};
    use crossbeam_channel::bounded;
    use shared::{
        domain::{Industry, Language},
        protocol::AnalysisResult,
    };

    use super::*;

    struct EchoLanguage;

    #[async_trait]
    impl AnalysisService for EchoLanguage {
        async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
            Err(SubmitError::Rejected {
                status: 400,
                message: request.language.code().to_string(),
            })
        }
    }

    #[test]
    fn answers_each_command_and_exits_when_queue_closes() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let worker = launch(cmd_rx, ui_tx, EchoLanguage);

        for language in [Language::Ta, Language::Ml] {
            cmd_tx
                .send(BackendCommand::Analyze {
                    request: AnalysisRequest {
                        file: UploadFile::new("a.csv", Vec::new()),
                        industry: Industry::Retail,
                        language,
                    },
                })
                .expect("queue");
        }
        drop(cmd_tx);
        worker.join().expect("worker thread");

        let answered: Vec<String> = ui_rx
            .try_iter()
            .filter_map(|event| match event {
                UiEvent::AnalysisFinished(Err(SubmitError::Rejected { message, .. })) => {
                    Some(message)
                }
                _ => None,
            })
            .collect();
        assert_eq!(answered, vec!["ta".to_string(), "ml".to_string()]);
    }
}
