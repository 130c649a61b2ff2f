//! In-memory stand-in for the page, for tests and headless use.

use crate::{GalleryDom, ImageRef, ModalFrame};

/// Handle to an image registered with a [`MemoryDom`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoryImage(usize);

struct Entry {
    image: ImageRef,
    group: Option<usize>,
}

/// A document made of image groups, recording every effect applied to it.
#[derive(Default)]
pub struct MemoryDom {
    entries: Vec<Entry>,
    next_group: usize,
    overlay_visible: bool,
    scroll_locked: bool,
    frame: Option<ModalFrame>,
    render_count: usize,
    effect_count: usize,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card of sibling images, returned in document order.
    pub fn add_group(&mut self, images: impl IntoIterator<Item = ImageRef>) -> Vec<MemoryImage> {
        let group = self.next_group;
        self.next_group += 1;
        images
            .into_iter()
            .map(|image| self.push(image, Some(group)))
            .collect()
    }

    /// Add an image that belongs to no group.
    pub fn add_ungrouped(&mut self, image: ImageRef) -> MemoryImage {
        self.push(image, None)
    }

    fn push(&mut self, image: ImageRef, group: Option<usize>) -> MemoryImage {
        self.entries.push(Entry { image, group });
        MemoryImage(self.entries.len() - 1)
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Last frame rendered, kept after close like a real `<img>` would be.
    pub fn frame(&self) -> Option<&ModalFrame> {
        self.frame.as_ref()
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Number of mutating calls of any kind.
    pub fn effect_count(&self) -> usize {
        self.effect_count
    }
}

impl GalleryDom for MemoryDom {
    type Image = MemoryImage;
    type Group = usize;

    fn enclosing_group(&self, image: &MemoryImage) -> Option<usize> {
        self.entries.get(image.0).and_then(|e| e.group)
    }

    fn images_in_group(&self, group: &usize) -> Vec<MemoryImage> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.group == Some(*group))
            .map(|(i, _)| MemoryImage(i))
            .collect()
    }

    fn describe(&self, image: &MemoryImage) -> ImageRef {
        self.entries
            .get(image.0)
            .map(|e| e.image.clone())
            .unwrap_or_default()
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.effect_count += 1;
        self.overlay_visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.effect_count += 1;
        self.scroll_locked = locked;
    }

    fn render(&mut self, frame: &ModalFrame) {
        self.effect_count += 1;
        self.render_count += 1;
        self.frame = Some(frame.clone());
    }
}
