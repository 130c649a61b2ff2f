mod controller;
mod dom;
mod event;
mod image_ref;
mod memory_dom;
mod modal_state;

pub use controller::GalleryController;
pub use dom::GalleryDom;
pub use event::{GalleryEvent, Key, Transition};
pub use image_ref::ImageRef;
pub use memory_dom::{MemoryDom, MemoryImage};
pub use modal_state::{ModalFrame, ModalState};
