use std::path::{Path, PathBuf};

/// Image file extensions accepted into the queue (lowercase)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Extension check only, case-insensitive. File content is not inspected.
pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Split `paths` into (supported, unsupported), keeping input order in both.
pub fn partition_supported<I, P>(paths: I) -> (Vec<PathBuf>, Vec<PathBuf>)
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(Into::into)
        .partition(|path| is_supported_image(path))
}
