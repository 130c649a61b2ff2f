use serde::Serialize;

use crate::ImageRef;

/// Everything the overlay shows for the current image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalFrame {
    pub image: ImageRef,
    /// `"2 / 5"` style label. `None` hides the counter.
    pub counter: Option<String>,
    /// Whether the prev/next controls are shown
    pub show_navigation: bool,
}

/// Pure open/closed state of the gallery overlay.
///
/// Handles open/close and wraparound navigation without any I/O. The
/// controller owns one of these and mirrors every change into the DOM.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ModalState {
    is_open: bool,
    images: Vec<ImageRef>,
    current_index: usize,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `images`, showing the one at `index`.
    ///
    /// An out-of-range index is clamped to the last image. Opening with no
    /// images leaves the state closed.
    pub fn open(&mut self, images: Vec<ImageRef>, index: usize) {
        if images.is_empty() {
            self.reset();
            return;
        }
        self.current_index = index.min(images.len() - 1);
        self.images = images;
        self.is_open = true;
    }

    /// Advance one image, wrapping to the first. Returns false when there is
    /// nothing to navigate between.
    pub fn next(&mut self) -> bool {
        let len = self.images.len();
        if len <= 1 {
            return false;
        }
        self.current_index = (self.current_index + 1) % len;
        true
    }

    /// Step back one image, wrapping to the last.
    pub fn prev(&mut self) -> bool {
        let len = self.images.len();
        if len <= 1 {
            return false;
        }
        self.current_index = (self.current_index + len - 1) % len;
        true
    }

    /// Close and forget the group. Returns false if already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open && self.images.is_empty() {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.is_open = false;
        self.images.clear();
        self.current_index = 0;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&ImageRef> {
        self.images.get(self.current_index)
    }

    /// Counter text, only when there is more than one image.
    pub fn counter_label(&self) -> Option<String> {
        let len = self.images.len();
        (len > 1).then(|| format!("{} / {}", self.current_index + 1, len))
    }

    /// Render snapshot of the current image, or `None` while closed.
    pub fn frame(&self) -> Option<ModalFrame> {
        if !self.is_open {
            return None;
        }
        let image = self.current()?.clone();
        Some(ModalFrame {
            image,
            counter: self.counter_label(),
            show_navigation: self.images.len() > 1,
        })
    }
}
