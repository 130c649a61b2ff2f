use std::cell::RefCell;
use std::rc::Rc;

use gallery_common::{GalleryController, GalleryEvent};
use tracing::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent};

use crate::dom::WebGalleryDom;
use crate::listener::EventListener;
use crate::{dispatch, logging, GalleryConfig, GalleryError, SharedController};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Attach the gallery modal to the current page.
///
/// `config` is an optional plain object overriding [`GalleryConfig`] fields.
#[wasm_bindgen(js_name = mountGallery)]
pub fn mount_gallery(config: JsValue) -> Result<GalleryHandle, JsValue> {
    let json = if config.is_undefined() || config.is_null() {
        String::new()
    } else {
        String::from(js_sys::JSON::stringify(&config)?)
    };
    let config = GalleryConfig::from_json(&json)?;
    logging::init(config.level());
    Ok(GalleryHandle::mount(&config)?)
}

/// A mounted gallery. Listeners stay attached until `destroy()` or drop.
#[wasm_bindgen]
pub struct GalleryHandle {
    controller: SharedController<WebGalleryDom>,
    listeners: Vec<EventListener>,
}

impl GalleryHandle {
    fn mount(config: &GalleryConfig) -> Result<Self, GalleryError> {
        let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
        let document = window.document().ok_or(GalleryError::NoDocument)?;

        let dom = WebGalleryDom::resolve(&document, config)?;
        let images = dom.gallery_images();
        let modal: EventTarget = dom.modal().clone().into();
        let close: EventTarget = dom.close_button().clone().into();
        let prev: EventTarget = dom.prev_button().clone().into();
        let next: EventTarget = dom.next_button().clone().into();

        let controller: SharedController<WebGalleryDom> =
            Rc::new(RefCell::new(GalleryController::new(dom)));
        let mut listeners = Vec::with_capacity(images.len() + 5);

        for image in &images {
            let c = controller.clone();
            let clicked = image.clone();
            listeners.push(EventListener::new(image.as_ref(), "click", move |_| {
                dispatch(&c, GalleryEvent::ImageClicked(clicked.clone()));
            }));
        }

        let c = controller.clone();
        listeners.push(EventListener::new(&close, "click", move |_| {
            dispatch(&c, GalleryEvent::CloseClicked);
        }));

        let c = controller.clone();
        let overlay = modal.clone();
        listeners.push(EventListener::new(&modal, "click", move |event| {
            let target = event.target();
            if let Some(backdrop) = GalleryEvent::from_overlay_click(target.as_ref(), &overlay) {
                dispatch(&c, backdrop);
            }
        }));

        let c = controller.clone();
        listeners.push(EventListener::new(&prev, "click", move |_| {
            dispatch(&c, GalleryEvent::PrevClicked);
        }));

        let c = controller.clone();
        listeners.push(EventListener::new(&next, "click", move |_| {
            dispatch(&c, GalleryEvent::NextClicked);
        }));

        let c = controller.clone();
        listeners.push(EventListener::new(document.as_ref(), "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
                return;
            };
            dispatch(&c, GalleryEvent::from_dom_key(&key));
        }));

        info!("Gallery mounted with {} images", images.len());

        Ok(Self {
            controller,
            listeners,
        })
    }
}

#[wasm_bindgen]
impl GalleryHandle {
    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.controller
            .try_borrow()
            .map(|c| c.is_open())
            .unwrap_or(false)
    }

    /// Current modal state as JSON, for debugging from the console.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        let controller = self
            .controller
            .try_borrow()
            .map_err(|_| JsValue::from_str("gallery is busy"))?;
        serde_json::to_string(controller.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn close(&self) {
        if let Ok(mut c) = self.controller.try_borrow_mut() {
            c.close();
        }
    }

    /// Close the overlay and detach every listener.
    pub fn destroy(&mut self) {
        self.close();
        self.listeners.clear();
        info!("Gallery destroyed");
    }
}
