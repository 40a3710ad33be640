//! Image-per-page composition
//!
//! The composer only decides what goes where. Reading image headers and
//! drawing pages are delegated to an [`ImageProbe`] and a [`PageCanvas`], so
//! the layout logic runs the same against a real PDF backend or test fakes.

use crate::layout::{PageSize, Placement, fit_to_page};
use crate::types::{ComposeReport, DecodeError, PageOutcome, PageStatus};
use std::path::{Path, PathBuf};

/// Reads an image's pixel dimensions
pub trait ImageProbe {
    fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), DecodeError>;
}

/// Receives one finished page per successfully placed image
pub trait PageCanvas {
    /// Draw the image at `path` into `placement` on a new page.
    ///
    /// On error no page may have been added.
    fn draw_page(&mut self, path: &Path, placement: &Placement) -> Result<(), DecodeError>;
}

/// Place each image on its own page, in order.
///
/// Images that cannot be probed or drawn are skipped and reported; they never
/// stop the remaining images from being composed.
pub fn compose_pages<P, C>(
    paths: &[PathBuf],
    page: PageSize,
    probe: &P,
    canvas: &mut C,
) -> ComposeReport
where
    P: ImageProbe + ?Sized,
    C: PageCanvas + ?Sized,
{
    let mut report = ComposeReport::default();
    let mut page_number = 0;

    for path in paths {
        let status = match place_and_draw(path, page, probe, canvas) {
            Ok(placement) => {
                page_number += 1;
                PageStatus::Drawn {
                    page_number,
                    placement,
                }
            }
            Err(e) => {
                log::warn!("Skipping image {}: {}", path.display(), e);
                PageStatus::Skipped {
                    reason: e.to_string(),
                }
            }
        };

        report.outcomes.push(PageOutcome {
            path: path.clone(),
            status,
        });
    }

    log::info!(
        "Composed {} page(s), skipped {} image(s)",
        report.pages_drawn(),
        report.skipped_count()
    );

    report
}

fn place_and_draw<P, C>(
    path: &Path,
    page: PageSize,
    probe: &P,
    canvas: &mut C,
) -> Result<Placement, DecodeError>
where
    P: ImageProbe + ?Sized,
    C: PageCanvas + ?Sized,
{
    let (width, height) = probe.probe_dimensions(path)?;
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    let placement = fit_to_page(width, height, page);
    canvas.draw_page(path, &placement)?;
    Ok(placement)
}
