use crate::{ImageRef, ModalFrame};

/// The document operations the gallery controller needs.
///
/// Implemented over `web-sys` in production and by [`MemoryDom`] in tests,
/// so every transition can run without a browser.
///
/// [`MemoryDom`]: crate::MemoryDom
pub trait GalleryDom {
    /// Handle to one gallery image. Equality is element identity.
    type Image: Clone + PartialEq;
    /// Handle to the container that groups sibling images
    type Group;

    /// Nearest container grouping `image` with its siblings, if any.
    fn enclosing_group(&self, image: &Self::Image) -> Option<Self::Group>;

    /// All gallery images inside `group`, in document order.
    fn images_in_group(&self, group: &Self::Group) -> Vec<Self::Image>;

    fn describe(&self, image: &Self::Image) -> ImageRef;

    fn set_overlay_visible(&mut self, visible: bool);

    /// Lock or restore scrolling of the page behind the overlay.
    fn set_scroll_locked(&mut self, locked: bool);

    fn render(&mut self, frame: &ModalFrame);
}
