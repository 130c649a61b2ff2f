use gallery_common::{GalleryDom, ImageRef, ModalFrame};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, NodeList};

use crate::{GalleryConfig, GalleryError};

/// The gallery overlay as it exists in the live page.
pub struct WebGalleryDom {
    document: Document,
    body: HtmlElement,
    modal: HtmlElement,
    image: HtmlImageElement,
    close: HtmlElement,
    prev: HtmlElement,
    next: HtmlElement,
    counter: HtmlElement,
    image_selector: String,
    group_selectors: Vec<String>,
}

impl WebGalleryDom {
    /// Look up every overlay element named in `config`.
    pub fn resolve(document: &Document, config: &GalleryConfig) -> Result<Self, GalleryError> {
        let body = document.body().ok_or(GalleryError::NoBody)?;

        for selector in std::iter::once(&config.image_selector).chain(&config.group_selectors) {
            if document.query_selector(selector).is_err() {
                return Err(GalleryError::InvalidSelector {
                    selector: selector.clone(),
                });
            }
        }

        Ok(Self {
            document: document.clone(),
            body,
            modal: element_by_id(document, &config.modal_id, "an HTML element")?,
            image: element_by_id(document, &config.image_id, "an <img>")?,
            close: element_by_id(document, &config.close_id, "an HTML element")?,
            prev: element_by_id(document, &config.prev_id, "an HTML element")?,
            next: element_by_id(document, &config.next_id, "an HTML element")?,
            counter: element_by_id(document, &config.counter_id, "an HTML element")?,
            image_selector: config.image_selector.clone(),
            group_selectors: config.group_selectors.clone(),
        })
    }

    /// Every clickable gallery image in the page.
    pub fn gallery_images(&self) -> Vec<HtmlImageElement> {
        match self.document.query_selector_all(&self.image_selector) {
            Ok(list) => images_in(&list),
            Err(e) => {
                warn!("Gallery image query failed: {:?}", e);
                Vec::new()
            }
        }
    }

    pub fn modal(&self) -> &HtmlElement {
        &self.modal
    }

    pub fn close_button(&self) -> &HtmlElement {
        &self.close
    }

    pub fn prev_button(&self) -> &HtmlElement {
        &self.prev
    }

    pub fn next_button(&self) -> &HtmlElement {
        &self.next
    }
}

impl GalleryDom for WebGalleryDom {
    type Image = HtmlImageElement;
    type Group = Element;

    fn enclosing_group(&self, image: &HtmlImageElement) -> Option<Element> {
        self.group_selectors
            .iter()
            .find_map(|selector| image.closest(selector).ok().flatten())
    }

    fn images_in_group(&self, group: &Element) -> Vec<HtmlImageElement> {
        match group.query_selector_all(&self.image_selector) {
            Ok(list) => images_in(&list),
            Err(e) => {
                warn!("Gallery group query failed: {:?}", e);
                Vec::new()
            }
        }
    }

    fn describe(&self, image: &HtmlImageElement) -> ImageRef {
        ImageRef::new(image.src(), image.alt())
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        set_style(&self.modal, "display", if visible { "block" } else { "none" });
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        set_style(&self.body, "overflow", if locked { "hidden" } else { "auto" });
    }

    fn render(&mut self, frame: &ModalFrame) {
        self.image.set_src(&frame.image.src);
        self.image.set_alt(&frame.image.alt);

        match &frame.counter {
            Some(label) => {
                self.counter.set_text_content(Some(label));
                set_style(&self.counter, "display", "block");
            }
            None => set_style(&self.counter, "display", "none"),
        }

        let nav = if frame.show_navigation { "block" } else { "none" };
        set_style(&self.prev, "display", nav);
        set_style(&self.next, "display", nav);
    }
}

fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, GalleryError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GalleryError::MissingElement { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| GalleryError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

/// `<img>` elements of a node list, in order. Other matches are skipped.
fn images_in(list: &NodeList) -> Vec<HtmlImageElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlImageElement>().ok())
        .collect()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        warn!("Failed to set {}: {} on element: {:?}", property, value, e);
    }
}
