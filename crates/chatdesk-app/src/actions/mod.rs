//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::{mpsc, watch};
use tracing::{error, info};

use chatdesk_client::DashboardApi;

use crate::message::Message;
use crate::remote_settings::save_failure_message;
use crate::UpdateAction;

pub(crate) mod upload;

pub use upload::run_upload;

/// Execute an action by spawning a background task
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    api: &A,
    shutdown_rx: watch::Receiver<bool>,
) where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchCompany => {
            spawn_fetch_company(api.clone(), msg_tx);
        }

        UpdateAction::StartUpload {
            upload_id,
            job,
            tick,
        } => {
            let api = api.clone();
            tokio::spawn(async move {
                run_upload(&api, upload_id, job, tick, &msg_tx, shutdown_rx).await;
            });
        }

        UpdateAction::SaveSettings { request } => {
            let api = api.clone();
            tokio::spawn(async move {
                let msg = match api.update_settings(&request).await {
                    Ok(response) => {
                        info!("Company settings saved");
                        Message::SettingsSaved { response }
                    }
                    Err(e) => {
                        error!("Settings update failed: {}", e);
                        Message::SettingsSaveFailed {
                            error: save_failure_message(&e),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

/// Fetch the company record in the background
pub fn spawn_fetch_company<A>(api: A, msg_tx: mpsc::Sender<Message>)
where
    A: DashboardApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match api.fetch_company().await {
            Ok(company) => Message::CompanyLoaded(company),
            Err(e) => Message::CompanyLoadFailed {
                error: e.user_message(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatdesk_client::test_utils::{test_company, MockApi, RecordedCall};
    use chatdesk_core::BatchUpdateSettingsRequest;

    #[tokio::test]
    async fn test_fetch_company_sends_loaded() {
        let api = MockApi::with_company(test_company("Acme"));
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        handle_action(UpdateAction::FetchCompany, msg_tx, &api, shutdown_rx);

        match msg_rx.recv().await {
            Some(Message::CompanyLoaded(company)) => assert_eq!(company.name, "Acme"),
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(api.calls(), vec![RecordedCall::FetchCompany]);
    }

    #[tokio::test]
    async fn test_save_settings_success_returns_canonical_record() {
        let api = MockApi::with_company(test_company("Acme"));
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let request = BatchUpdateSettingsRequest {
            slug: Some("acme".into()),
            ..Default::default()
        };
        handle_action(
            UpdateAction::SaveSettings { request },
            msg_tx,
            &api,
            shutdown_rx,
        );

        match msg_rx.recv().await {
            Some(Message::SettingsSaved { response }) => {
                assert_eq!(response.company.slug.as_deref(), Some("acme"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_settings_failure_uses_backend_detail() {
        let api = MockApi::with_company(test_company("Acme"));
        api.fail_settings(Some("Slug already taken".to_string()));
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        handle_action(
            UpdateAction::SaveSettings {
                request: BatchUpdateSettingsRequest {
                    slug: Some("taken".into()),
                    ..Default::default()
                },
            },
            msg_tx,
            &api,
            shutdown_rx,
        );

        match msg_rx.recv().await {
            Some(Message::SettingsSaveFailed { error }) => {
                assert_eq!(error, "Slug already taken");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_settings_failure_without_detail_uses_fallback() {
        let api = MockApi::with_company(test_company("Acme"));
        api.fail_settings(Some(String::new()));
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        handle_action(
            UpdateAction::SaveSettings {
                request: BatchUpdateSettingsRequest {
                    is_published: Some(true),
                    ..Default::default()
                },
            },
            msg_tx,
            &api,
            shutdown_rx,
        );

        match msg_rx.recv().await {
            Some(Message::SettingsSaveFailed { error }) => {
                assert_eq!(error, crate::remote_settings::SAVE_FAILED_MESSAGE);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
