use tracing::{debug, trace};

use crate::{GalleryDom, GalleryEvent, Key, ModalState, Transition};

/// Drives a [`ModalState`] from input events and mirrors it into a
/// [`GalleryDom`].
pub struct GalleryController<D: GalleryDom> {
    dom: D,
    state: ModalState,
}

impl<D: GalleryDom> GalleryController<D> {
    pub fn new(dom: D) -> Self {
        Self {
            dom,
            state: ModalState::new(),
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Single entry point for every input the overlay reacts to.
    pub fn dispatch(&mut self, event: GalleryEvent<D::Image>) -> Transition {
        let transition = match event {
            GalleryEvent::ImageClicked(image) => self.open(&image),
            GalleryEvent::CloseClicked | GalleryEvent::BackdropClicked => self.close(),
            GalleryEvent::PrevClicked => self.prev(),
            GalleryEvent::NextClicked => self.next(),
            GalleryEvent::KeyDown(key) => self.key_down(key),
        };
        if transition == Transition::Ignored {
            trace!("Gallery event ignored");
        }
        transition
    }

    /// Open the overlay on `image` and its group siblings.
    ///
    /// Images outside any group open on their own, with navigation hidden.
    pub fn open(&mut self, image: &D::Image) -> Transition {
        let mut group = self
            .dom
            .enclosing_group(image)
            .map(|g| self.dom.images_in_group(&g))
            .unwrap_or_default();

        let index = match group.iter().position(|candidate| candidate == image) {
            Some(index) => index,
            None => {
                if !group.is_empty() {
                    debug!("Clicked image missing from its own group, opening it alone");
                }
                group = vec![image.clone()];
                0
            }
        };

        let images = group.iter().map(|img| self.dom.describe(img)).collect();
        self.state.open(images, index);
        let count = self.state.images().len();
        debug!("Gallery opened at {} of {}", index + 1, count);

        self.dom.set_overlay_visible(true);
        self.dom.set_scroll_locked(true);
        self.show_current();

        Transition::Opened { index, count }
    }

    pub fn next(&mut self) -> Transition {
        if !self.state.next() {
            return Transition::Ignored;
        }
        self.navigated()
    }

    pub fn prev(&mut self) -> Transition {
        if !self.state.prev() {
            return Transition::Ignored;
        }
        self.navigated()
    }

    /// Hide the overlay and reset. Calling it while closed does nothing.
    pub fn close(&mut self) -> Transition {
        if !self.state.close() {
            return Transition::Ignored;
        }
        self.dom.set_overlay_visible(false);
        self.dom.set_scroll_locked(false);
        debug!("Gallery closed");
        Transition::Closed
    }

    fn key_down(&mut self, key: Key) -> Transition {
        if !self.state.is_open() {
            return Transition::Ignored;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => Transition::Ignored,
        }
    }

    fn navigated(&mut self) -> Transition {
        let index = self.state.current_index();
        debug!("Gallery navigated to {}", index + 1);
        self.show_current();
        Transition::Navigated { index }
    }

    fn show_current(&mut self) {
        if let Some(frame) = self.state.frame() {
            self.dom.render(&frame);
        }
    }
}
