//! Gallery / Lightbox State Machine
//!
//! Current image of a property's photo set plus an independent zoom overlay.

use crate::models::PLACEHOLDER_IMAGE;

// == Gallery State ==
/// Selected image and lightbox overlay for one image set.
///
/// The image list is never empty; `current_index` is always a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    current_index: usize,
    /// Image shown enlarged, if the overlay is open
    lightbox: Option<usize>,
}

impl GalleryState {
    /// Creates a gallery on the first image. An empty set shows the
    /// placeholder.
    pub fn new(images: Vec<String>) -> Self {
        let images = if images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            images
        };

        Self {
            images,
            current_index: 0,
            lightbox: None,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.current_index]
    }

    /// Index reached by `next` from the current image.
    pub fn next_index(&self) -> usize {
        (self.current_index + 1) % self.images.len()
    }

    /// Index reached by `prev` from the current image.
    pub fn prev_index(&self) -> usize {
        (self.current_index + self.images.len() - 1) % self.images.len()
    }

    /// Thumbnails as `(index, url, active)`.
    pub fn thumbnails(&self) -> impl Iterator<Item = (usize, &str, bool)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(move |(i, url)| (i, url.as_str(), i == self.current_index))
    }

    // == Navigation ==
    /// Selects image `index`. Out-of-range requests are ignored.
    pub fn show_image(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    pub fn next(&mut self) -> usize {
        self.current_index = self.next_index();
        self.current_index
    }

    pub fn prev(&mut self) -> usize {
        self.current_index = self.prev_index();
        self.current_index
    }

    // == Lightbox ==
    /// Opens the overlay on the selected image.
    pub fn open_lightbox(&mut self) {
        self.lightbox = Some(self.current_index);
    }

    /// Opens the overlay on a specific thumbnail without changing the
    /// selection.
    pub fn open_lightbox_at(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.lightbox = Some(index);
        true
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn lightbox_image(&self) -> Option<&str> {
        self.lightbox.map(|i| self.images[i].as_str())
    }
}
