pub mod backend;
pub mod compose;
mod formats;
mod generate;
pub mod layout;
mod options;
mod queue;
mod types;

pub use backend::{ImageFileProbe, PdfCanvas};
pub use compose::{ImageProbe, PageCanvas, compose_pages};
pub use formats::{SUPPORTED_EXTENSIONS, is_supported_image, partition_supported};
pub use generate::{compose_pdf_bytes, generate_pdf};
pub use layout::{PageSize, Placement, fit_to_page};
pub use options::ComposeOptions;
pub use queue::{Direction, ImageQueue};
pub use types::*;
