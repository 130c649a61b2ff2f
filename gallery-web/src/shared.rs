use std::cell::RefCell;
use std::rc::Rc;

use gallery_common::{GalleryController, GalleryDom, GalleryEvent, Transition};
use tracing::warn;

/// Controller shared by every listener closure on the page
pub type SharedController<D> = Rc<RefCell<GalleryController<D>>>;

/// Run `event` through the shared controller.
///
/// Returns `None` and drops the event if another dispatch still holds the
/// controller.
pub fn dispatch<D: GalleryDom>(
    controller: &SharedController<D>,
    event: GalleryEvent<D::Image>,
) -> Option<Transition> {
    match controller.try_borrow_mut() {
        Ok(mut c) => Some(c.dispatch(event)),
        Err(_) => {
            warn!("Gallery event dropped, dispatch already in progress");
            None
        }
    }
}
