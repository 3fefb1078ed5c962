//! Headless upload runner - one submission, no terminal UI

use std::path::PathBuf;

use tracing::{info, warn};

use chatdesk_app::config::Settings;
use chatdesk_app::message::Message;
use chatdesk_app::state::UiMode;
use chatdesk_app::Engine;
use chatdesk_client::DashboardApi;
use chatdesk_core::prelude::*;

use super::HeadlessEvent;

/// What `chatdesk upload` was asked to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessUpload {
    Files(Vec<PathBuf>),
    Text { filename: String, content: String },
}

/// Run one upload and report it as NDJSON.
///
/// Returns `Ok(true)` only when no file was rejected locally and every
/// submitted document was accepted by the backend.
pub async fn run_headless_upload<A>(settings: Settings, api: A, upload: HeadlessUpload) -> Result<bool>
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    info!("chatdesk starting in HEADLESS upload mode");
    let mut engine = Engine::new(settings, api);
    let result = run_with_engine(&mut engine, upload).await;
    engine.shutdown();
    result
}

async fn run_with_engine<A>(engine: &mut Engine<A>, upload: HeadlessUpload) -> Result<bool>
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    let Some(submission) = submit(engine, upload) else {
        return Ok(false);
    };
    let accepted = upload_event_loop(engine).await?;
    Ok(accepted && !submission.had_rejections)
}

/// A request that was started
struct Submission {
    /// Some dropped paths never made it into the queue
    had_rejections: bool,
}

/// Drive the upload modal the way a user would. Returns `None` when no
/// request was started.
fn submit<A>(engine: &mut Engine<A>, upload: HeadlessUpload) -> Option<Submission>
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    // No company fetch in this mode; the modal only opens from the
    // knowledge base screen.
    engine.state.ui_mode = UiMode::KnowledgeBase;
    engine.process_message(Message::OpenUploadModal);

    let mut had_rejections = false;
    let documents = match upload {
        HeadlessUpload::Files(paths) => {
            engine.state.upload_modal.queue.set_multiple(true);
            engine.process_message(Message::FilesDropped { paths });

            let queue = &engine.state.upload_modal.queue;
            for error in queue.errors() {
                HeadlessEvent::file_rejected(error).emit();
            }
            had_rejections = !queue.errors().is_empty();
            if queue.is_empty() {
                HeadlessEvent::error("No valid files to upload", true).emit();
                return None;
            }
            queue.files().iter().map(|f| f.name.clone()).collect()
        }
        HeadlessUpload::Text { filename, content } => {
            engine.process_message(Message::ToggleUploadMode);
            let form = &mut engine.state.upload_modal.text_form;
            form.filename = filename;
            form.content = content;
            vec![chatdesk_app::text_upload::normalize_text_filename(&form.filename)]
        }
    };

    engine.process_message(Message::UploadSubmit);

    if engine.state.upload_modal.active_upload().is_none() {
        let form = &engine.state.upload_modal.text_form;
        for message in [&form.filename_error, &form.content_error].into_iter().flatten() {
            HeadlessEvent::error(message.clone(), true).emit();
        }
        return None;
    }

    HeadlessEvent::upload_started(documents).emit();
    Some(Submission { had_rejections })
}

async fn upload_event_loop<A>(engine: &mut Engine<A>) -> Result<bool>
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    loop {
        if engine.should_quit() {
            warn!("Interrupted before the upload finished");
            HeadlessEvent::error("Interrupted before the upload finished", true).emit();
            return Ok(false);
        }

        let Some(msg) = engine.msg_rx.recv().await else {
            return Err(Error::ChannelClosed);
        };

        let outcome = match &msg {
            Message::UploadSucceeded { uploaded, .. } => {
                Some((true, HeadlessEvent::upload_succeeded(uploaded.clone())))
            }
            Message::UploadFailed {
                uploaded, error, ..
            } => Some((
                false,
                HeadlessEvent::upload_failed(uploaded.clone(), error.clone()),
            )),
            _ => None,
        };
        let is_tick = matches!(msg, Message::UploadProgressTick { .. });

        engine.process_message(msg);

        if is_tick {
            HeadlessEvent::progress(engine.state.upload_modal.progress().percent()).emit();
        }
        if let Some((succeeded, event)) = outcome {
            event.emit();
            return Ok(succeeded);
        }
    }
}
