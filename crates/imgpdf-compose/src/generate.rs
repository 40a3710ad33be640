use crate::backend::{ImageFileProbe, PdfCanvas};
use crate::compose::compose_pages;
use crate::layout::PageSize;
use crate::options::ComposeOptions;
use crate::types::{ComposeError, ComposeReport, Result};
use std::path::{Path, PathBuf};

const DOCUMENT_TITLE: &str = "Images";

/// Compose `paths` into a PDF at `output_path`, one A4 page per readable image.
///
/// Unreadable images are skipped and listed in the returned report. Nothing
/// is written when `paths` is empty, or when no page could be drawn unless
/// `options.allow_empty_document` is set.
pub async fn generate_pdf(
    paths: &[PathBuf],
    options: &ComposeOptions,
    output_path: impl AsRef<Path>,
) -> Result<ComposeReport> {
    if paths.is_empty() {
        return Err(ComposeError::NoImages);
    }

    let paths = paths.to_vec();
    let output_path = output_path.as_ref().to_owned();

    // Decoding and PDF encoding are CPU-bound
    let (bytes, report) = tokio::task::spawn_blocking(move || compose_pdf_bytes(&paths)).await?;

    if report.pages_drawn() == 0 && !options.allow_empty_document {
        return Err(ComposeError::NoPages {
            skipped: report.skipped_count(),
        });
    }

    write_replacing(&output_path, bytes).await?;
    log::info!(
        "Saved {} page(s) to {}",
        report.pages_drawn(),
        output_path.display()
    );

    Ok(report)
}

/// Compose `paths` with the file-backed probe and printpdf canvas
pub fn compose_pdf_bytes(paths: &[PathBuf]) -> (Vec<u8>, ComposeReport) {
    let mut canvas = PdfCanvas::new(DOCUMENT_TITLE, PageSize::A4);
    let report = compose_pages(paths, PageSize::A4, &ImageFileProbe, &mut canvas);
    debug_assert_eq!(canvas.page_count(), report.pages_drawn());
    (canvas.finish(), report)
}

/// Write to a sibling `.part` file, then rename over `path`
async fn write_replacing(path: &Path, bytes: Vec<u8>) -> std::io::Result<()> {
    let mut part_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    part_name.push(".part");
    let part_path = path.with_file_name(part_name);

    let result = match tokio::fs::write(&part_path, bytes).await {
        Ok(()) => tokio::fs::rename(&part_path, path).await,
        Err(e) => Err(e),
    };

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(&part_path).await {
            log::debug!("Failed to remove {}: {}", part_path.display(), e);
        }
    }
    result
}
