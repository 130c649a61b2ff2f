//! Browser binding for the gallery modal.
//!
//! Attaches a [`gallery_common::GalleryController`] to an existing static
//! page: click listeners on gallery images and overlay controls, a keyboard
//! listener on the document, and style writes for the overlay. The
//! JS-facing surface is `mountGallery()` and the returned `GalleryHandle`.
//!
//! Configuration and errors compile on every target so they can be tested
//! natively; the DOM binding itself is wasm-only.

mod config;
mod error;
mod shared;

pub use config::GalleryConfig;
pub use error::GalleryError;
pub use shared::{dispatch, SharedController};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::WebGalleryDom;
#[cfg(target_arch = "wasm32")]
pub use listener::EventListener;
#[cfg(target_arch = "wasm32")]
pub use wasm::{mount_gallery, GalleryHandle};
