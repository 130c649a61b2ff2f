/// Input the controller reacts to. `I` is the backend's image handle.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent<I> {
    /// A gallery image was clicked
    ImageClicked(I),
    CloseClicked,
    /// Click on the overlay itself, outside the displayed image
    BackdropClicked,
    PrevClicked,
    NextClicked,
    KeyDown(Key),
}

impl<I> GalleryEvent<I> {
    /// Event for a click on the overlay, which closes it only when the
    /// overlay itself was hit rather than something inside it.
    pub fn from_overlay_click<T: PartialEq>(target: Option<&T>, overlay: &T) -> Option<Self> {
        (target == Some(overlay)).then_some(GalleryEvent::BackdropClicked)
    }

    /// Event for a DOM `keydown` with the given `KeyboardEvent.key`.
    pub fn from_dom_key(key: &str) -> Self {
        GalleryEvent::KeyDown(Key::from_dom_key(key))
    }
}

/// Keys the overlay understands. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// What a dispatched event did to the modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened { index: usize, count: usize },
    Navigated { index: usize },
    Closed,
    /// The event had no effect in the current state
    Ignored,
}
