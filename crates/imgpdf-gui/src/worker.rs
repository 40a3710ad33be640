use imgpdf_async_runtime::{CommandReceiver, PdfCommand, UpdateSender};

use crate::handlers;

/// Async worker task that processes PDF commands and sends updates
pub async fn worker_task(mut command_rx: CommandReceiver, update_tx: UpdateSender) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(cmd: PdfCommand, update_tx: &UpdateSender) {
    match cmd {
        PdfCommand::Generate {
            images,
            options,
            output_path,
        } => {
            handlers::generate::handle_generate(images, options, output_path, update_tx).await;
        }
        PdfCommand::LoadOptions { path } => {
            handlers::settings::handle_load(path, update_tx).await;
        }
        PdfCommand::SaveOptions { options, path } => {
            handlers::settings::handle_save(options, path, update_tx).await;
        }
    }
}
