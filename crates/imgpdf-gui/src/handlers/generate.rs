use imgpdf_async_runtime::{ComposeOptions, PdfUpdate, UpdateSender};
use std::path::PathBuf;

pub async fn handle_generate(
    images: Vec<PathBuf>,
    options: ComposeOptions,
    output_path: PathBuf,
    update_tx: &UpdateSender,
) {
    let _ = update_tx.send(PdfUpdate::Progress {
        operation: format!("Composing {} image(s)", images.len()),
    });

    match imgpdf_compose::generate_pdf(&images, &options, &output_path).await {
        Ok(report) => {
            let _ = update_tx.send(PdfUpdate::GenerateComplete {
                path: output_path,
                report,
            });
        }
        Err(e) => {
            log::error!("Failed to generate {}: {}", output_path.display(), e);
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to generate PDF: {e}"),
            });
        }
    }
}
