//! The user-curated list of images, one page per entry.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Ordered image paths awaiting composition. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQueue {
    paths: Vec<PathBuf>,
}

impl ImageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn extend<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Swap the entry at `index` with its neighbour.
    ///
    /// Returns the entry's new index, or `None` if `index` is out of range.
    /// Moving the first entry up or the last entry down leaves it in place.
    pub fn move_item(&mut self, index: usize, direction: Direction) -> Option<usize> {
        if index >= self.paths.len() {
            return None;
        }

        match direction {
            Direction::Up if index > 0 => {
                self.paths.swap(index, index - 1);
                Some(index - 1)
            }
            Direction::Down if index + 1 < self.paths.len() => {
                self.paths.swap(index, index + 1);
                Some(index + 1)
            }
            _ => Some(index),
        }
    }

    /// Move every selected entry one step, keeping the selection's relative order.
    ///
    /// Up moves run in ascending index order, down moves in descending order.
    /// An entry blocked by the boundary, or by a selected neighbour that is
    /// itself blocked, stays put. Returns the sorted new indices of the
    /// selection; out-of-range and repeated indices are ignored.
    pub fn move_selected(&mut self, indices: &[usize], direction: Direction) -> Vec<usize> {
        let mut selected: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.paths.len())
            .collect();
        selected.sort_unstable();
        selected.dedup();

        let mut moved = Vec::with_capacity(selected.len());

        match direction {
            Direction::Up => {
                // Lowest index an entry may move into
                let mut floor = 0;
                for index in selected {
                    if index > floor {
                        self.paths.swap(index, index - 1);
                        moved.push(index - 1);
                        floor = index;
                    } else {
                        moved.push(index);
                        floor = index + 1;
                    }
                }
            }
            Direction::Down => {
                // One past the highest index an entry may move into
                let mut ceiling = self.paths.len();
                for index in selected.into_iter().rev() {
                    if index + 1 < ceiling {
                        self.paths.swap(index, index + 1);
                        moved.push(index + 1);
                        ceiling = index + 1;
                    } else {
                        moved.push(index);
                        ceiling = index;
                    }
                }
                moved.reverse();
            }
        }

        moved
    }

    /// Owned copy of the current order
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }
}
