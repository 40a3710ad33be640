use crate::layout::Placement;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a single image. Never fatal for a whole document.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("No images to compose")]
    NoImages,
    #[error("None of the images could be read ({skipped} skipped)")]
    NoPages { skipped: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// What happened to one entry of the input list
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    /// Drawn as page `page_number` (1-based) of the output
    Drawn {
        page_number: usize,
        placement: Placement,
    },
    /// No page was emitted for this entry
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome {
    pub path: PathBuf,
    pub status: PageStatus,
}

/// Per-entry outcomes of one composition, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeReport {
    pub outcomes: Vec<PageOutcome>,
}

impl ComposeReport {
    pub fn pages_drawn(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, PageStatus::Drawn { .. }))
            .count()
    }

    /// Entries that produced no page, with the reason
    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            PageStatus::Skipped { reason } => Some((&o.path, reason.as_str())),
            PageStatus::Drawn { .. } => None,
        })
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.pages_drawn()
    }
}
