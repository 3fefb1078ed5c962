//! Upload task with simulated progress.
//!
//! One task per submission. While the request is pending the task emits
//! [`Message::UploadProgressTick`] on a fixed period; the ticker lives inside
//! the task, so it stops the moment the request resolves or the engine shuts
//! down. There is no cancellation of the request itself.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use chatdesk_client::DashboardApi;

use crate::handler::UploadJob;
use crate::message::Message;
use crate::progress::random_increment;
use crate::upload_workflow::UploadId;

/// What the backend did with each document of a job
#[derive(Debug, Default)]
struct JobOutcome {
    uploaded: Vec<String>,
    /// (document name, reason)
    failures: Vec<(String, String)>,
}

impl JobOutcome {
    fn into_message(self, upload_id: UploadId, document_count: usize) -> Message {
        if self.failures.is_empty() {
            return Message::UploadSucceeded {
                upload_id,
                uploaded: self.uploaded,
            };
        }

        let error = if document_count == 1 {
            self.failures
                .into_iter()
                .map(|(_, reason)| reason)
                .collect::<Vec<_>>()
                .join("; ")
        } else {
            self.failures
                .iter()
                .map(|(name, reason)| format!("{}: {}", name, reason))
                .collect::<Vec<_>>()
                .join("; ")
        };

        Message::UploadFailed {
            upload_id,
            uploaded: self.uploaded,
            error,
        }
    }
}

/// Run one submission to completion, reporting progress and the result
/// over `msg_tx`.
///
/// Every file of a batch is attempted even after an earlier one failed.
/// Returns early without a result when shutdown is signalled or the
/// receiver is gone.
pub async fn run_upload<A: DashboardApi>(
    api: &A,
    upload_id: UploadId,
    job: UploadJob,
    tick: Duration,
    msg_tx: &mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let document_count = job.names().len();
    let mut rng = StdRng::from_entropy();
    let mut ticker = interval_at(Instant::now() + tick, tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let request = execute_job(api, &job);
    tokio::pin!(request);

    let outcome = loop {
        tokio::select! {
            outcome = &mut request => break outcome,

            _ = ticker.tick() => {
                let increment = random_increment(&mut rng);
                if msg_tx
                    .send(Message::UploadProgressTick { upload_id, increment })
                    .await
                    .is_err()
                {
                    debug!("Upload #{} abandoned: message channel closed", upload_id);
                    return;
                }
            }

            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    info!("Upload #{} abandoned on shutdown", upload_id);
                    return;
                }
            }
        }
    };
    drop(ticker);

    let _ = msg_tx
        .send(outcome.into_message(upload_id, document_count))
        .await;
}

async fn execute_job<A: DashboardApi>(api: &A, job: &UploadJob) -> JobOutcome {
    let mut outcome = JobOutcome::default();

    match job {
        UploadJob::Files(files) => {
            for file in files {
                match api.upload_file(file).await {
                    Ok(_) => outcome.uploaded.push(file.name.clone()),
                    Err(e) => {
                        warn!("Upload of {} failed: {}", file.name, e);
                        outcome.failures.push((file.name.clone(), e.user_message()));
                    }
                }
            }
        }
        UploadJob::Text { content, filename } => match api.upload_text(content, filename).await {
            Ok(_) => outcome.uploaded.push(filename.clone()),
            Err(e) => {
                warn!("Text upload {} failed: {}", filename, e);
                outcome.failures.push((filename.clone(), e.user_message()));
            }
        },
    }

    outcome
}
