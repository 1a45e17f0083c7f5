//! Image carousel state for the project detail view.
//!
//! Navigation wraps in both directions. An empty image list is tolerated
//! (index stays 0 and navigation is a no-op) even though `for_project`
//! never produces one.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::content::Project;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<&'static str>,
    index: usize,
}

impl Gallery {
    #[must_use]
    pub fn new(images: Vec<&'static str>) -> Self {
        Self { images, index: 0 }
    }

    /// The project's images, falling back to its thumbnail.
    #[must_use]
    pub fn for_project(project: &Project) -> Self {
        if project.images.is_empty() {
            Self::new(vec![project.thumbnail])
        } else {
            Self::new(project.images.to_vec())
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether prev/next controls and dot indicators should be shown.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static str> {
        self.images.get(self.index).copied()
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.index = index;
        }
    }
}
