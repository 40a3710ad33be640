//! Queue plus list selection, independent of any widget

use imgpdf_compose::{Direction, ImageQueue, partition_supported};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Default)]
pub struct Session {
    queue: ImageQueue,
    selected: BTreeSet<usize>,
}

impl Session {
    pub fn queue(&self) -> &ImageQueue {
        &self.queue
    }

    /// Queue the supported images from `paths`, returning the rejected ones
    pub fn add_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
        let (accepted, rejected) = partition_supported(paths);
        for path in &accepted {
            log::info!("Queued {}", path.display());
        }
        self.queue.extend(accepted);
        rejected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn toggle_selected(&mut self, index: usize) {
        if index >= self.queue.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Move the selected entries; the selection follows them
    pub fn move_selection(&mut self, direction: Direction) {
        if self.selected.is_empty() {
            return;
        }
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        let moved = self.queue.move_selected(&indices, direction);
        self.selected = moved.into_iter().collect();
    }

    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.queue.snapshot()
    }
}
