use imgpdf_async_runtime::{ComposeOptions, PdfUpdate, UpdateSender};
use std::path::PathBuf;

pub async fn handle_load(path: PathBuf, update_tx: &UpdateSender) {
    match ComposeOptions::load(&path).await {
        Ok(options) => {
            log::info!("Settings loaded from {}", path.display());
            let _ = update_tx.send(PdfUpdate::OptionsLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to load settings: {e}"),
            });
        }
    }
}

pub async fn handle_save(options: ComposeOptions, path: PathBuf, update_tx: &UpdateSender) {
    match options.save(&path).await {
        Ok(()) => {
            log::info!("Settings saved to {}", path.display());
            let _ = update_tx.send(PdfUpdate::OptionsSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to save settings: {e}"),
            });
        }
    }
}
