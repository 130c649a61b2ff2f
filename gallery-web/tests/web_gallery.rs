//! Browser tests for the DOM binding, run with `wasm-pack test --headless`.
//!
//! Each test mounts the gallery on a copy of `assets/index.html` appended to
//! the runner's page and removed again on drop.

#![cfg(target_arch = "wasm32")]

use gallery_common::GalleryDom;
use gallery_web::{mount_gallery, GalleryConfig, GalleryHandle, WebGalleryDom};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const DUPLICATE_CARD: &str = r#"
<div class="activity-card" id="duplicates">
  <div class="activity-gallery">
    <img src="img/same.jpg" alt="Same">
    <img src="img/same.jpg" alt="Same">
  </div>
</div>
"#;

struct Page {
    fixture: Element,
    handle: Option<GalleryHandle>,
}

impl Page {
    /// Page markup only, without mounting.
    fn load(extra: &str) -> Self {
        let page = include_str!("../assets/index.html");
        let start = page.find("<body>").unwrap() + "<body>".len();
        let end = page.find("<script").unwrap();

        let fixture = document().create_element("div").unwrap();
        fixture.set_inner_html(&format!("{}{}", &page[start..end], extra));
        document().body().unwrap().append_child(&fixture).unwrap();

        Self {
            fixture,
            handle: None,
        }
    }

    fn mounted(extra: &str) -> Self {
        let mut page = Self::load(extra);
        page.handle = Some(mount_gallery(JsValue::UNDEFINED).unwrap());
        page
    }

    fn handle(&mut self) -> &mut GalleryHandle {
        self.handle.as_mut().unwrap()
    }

    fn images(&self, selector: &str) -> Vec<HtmlImageElement> {
        let list = self.fixture.query_selector_all(selector).unwrap();
        (0..list.length())
            .map(|i| list.item(i).unwrap().dyn_into().unwrap())
            .collect()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.destroy();
        }
        self.fixture.remove();
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn html(id: &str) -> HtmlElement {
    document().get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn display(id: &str) -> String {
    html(id).style().get_property_value("display").unwrap()
}

fn shown_alt() -> String {
    html("modalImage")
        .dyn_into::<HtmlImageElement>()
        .unwrap()
        .alt()
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn click_opens_group_at_clicked_image() {
    let mut page = Page::mounted("");
    let images = page.images(".activity-gallery img");
    images[1].click();

    assert!(page.handle().is_open());
    assert_eq!(display("imageModal"), "block");
    assert_eq!(shown_alt(), "Second");
    assert_eq!(html("imageCounter").text_content().unwrap(), "2 / 3");
    assert_eq!(display("prevBtn"), "block");
    assert_eq!(
        document()
            .body()
            .unwrap()
            .style()
            .get_property_value("overflow")
            .unwrap(),
        "hidden"
    );
}

#[wasm_bindgen_test]
fn only_a_click_on_the_overlay_itself_closes() {
    let mut page = Page::mounted("");
    page.images(".activity-gallery img")[0].click();

    html("modalImage").click();
    assert!(page.handle().is_open());
    html("imageCounter").click();
    assert!(page.handle().is_open());

    html("imageModal").click();
    assert!(!page.handle().is_open());
    assert_eq!(display("imageModal"), "none");
}

#[wasm_bindgen_test]
fn close_control_closes() {
    let mut page = Page::mounted("");
    page.images(".award-image")[0].click();
    html("closeModal").click();
    assert!(!page.handle().is_open());
}

#[wasm_bindgen_test]
fn arrow_keys_wrap_and_escape_closes() {
    let mut page = Page::mounted("");
    page.images(".activity-gallery img")[0].click();

    press("ArrowLeft");
    assert_eq!(shown_alt(), "Third");
    press("ArrowRight");
    assert_eq!(shown_alt(), "First");
    press("Enter");
    assert_eq!(shown_alt(), "First");

    press("Escape");
    assert!(!page.handle().is_open());
    press("ArrowRight");
    assert!(!page.handle().is_open());
}

#[wasm_bindgen_test]
fn nav_buttons_step_through_group() {
    let mut page = Page::mounted("");
    page.images(".activity-gallery img")[2].click();

    html("nextBtn").click();
    assert_eq!(shown_alt(), "First");
    html("prevBtn").click();
    assert_eq!(shown_alt(), "Third");
    assert!(page.handle().is_open());
}

#[wasm_bindgen_test]
fn award_image_opens_alone() {
    let page = Page::mounted("");
    page.images(".award-image")[0].click();

    assert_eq!(shown_alt(), "Award");
    assert_eq!(display("imageCounter"), "none");
    assert_eq!(display("prevBtn"), "none");
    assert_eq!(display("nextBtn"), "none");
}

#[wasm_bindgen_test]
fn duplicate_sources_open_at_clicked_element() {
    let page = Page::mounted(DUPLICATE_CARD);
    page.images("#duplicates img")[1].click();
    assert_eq!(html("imageCounter").text_content().unwrap(), "2 / 2");
}

#[wasm_bindgen_test]
fn enclosing_group_follows_selector_order() {
    let page = Page::load("");
    let images = page.images(".activity-gallery img");
    let awards = page.images(".award-image");
    let (image, award) = (&images[0], &awards[0]);

    let dom = WebGalleryDom::resolve(&document(), &GalleryConfig::default()).unwrap();
    assert_eq!(dom.enclosing_group(image).unwrap().class_name(), "activity-card");
    assert_eq!(dom.enclosing_group(award).unwrap().class_name(), "award-content");

    let config = GalleryConfig {
        group_selectors: vec![".activity-gallery".into(), ".activity-card".into()],
        ..GalleryConfig::default()
    };
    let dom = WebGalleryDom::resolve(&document(), &config).unwrap();
    let group = dom.enclosing_group(image).unwrap();
    assert_eq!(group.class_name(), "activity-gallery");

    let alts: Vec<String> = dom
        .images_in_group(&group)
        .iter()
        .map(|img| dom.describe(img).alt)
        .collect();
    assert_eq!(alts, vec!["First", "Second", "Third"]);

    let config = GalleryConfig {
        group_selectors: vec![".activity-card".into()],
        ..GalleryConfig::default()
    };
    let dom = WebGalleryDom::resolve(&document(), &config).unwrap();
    assert!(dom.enclosing_group(award).is_none());
}

#[wasm_bindgen_test]
fn destroy_detaches_listeners() {
    let mut page = Page::mounted("");
    page.handle().destroy();

    page.images(".activity-gallery img")[0].click();
    assert!(!page.handle().is_open());
    assert_ne!(display("imageModal"), "block");
}

#[wasm_bindgen_test]
fn mount_reports_missing_element() {
    let _page = Page::load("");
    let config = js_sys::JSON::parse(r#"{"modal_id": "noSuchModal"}"#).unwrap();
    let err = mount_gallery(config).err().unwrap();
    let message = err.dyn_into::<js_sys::Error>().unwrap().message();
    assert_eq!(String::from(message), "Missing element #noSuchModal");
}
