// Browser-only lookups and dialogs, with inert fallbacks for native builds.

use crate::slideshow::{Point, Size};

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Id of the playback `<img>`.
pub const PLAYBACK_ELEMENT_ID: &str = "videoStreamer";
/// Id of the overlay `<canvas>` stacked on top of the playback element.
pub const OVERLAY_CANVAS_ID: &str = "overlay";
/// Id of the single context menu container.
pub const CONTEXT_MENU_ID: &str = "contextMenuInstance";

/// `clientWidth`/`clientHeight` of an element.
#[cfg(target_arch = "wasm32")]
pub fn element_client_size(id: &str) -> Option<Size> {
    let element = window()?.document()?.get_element_by_id(id)?;
    Some(Size::new(
        f64::from(element.client_width()),
        f64::from(element.client_height()),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_client_size(_id: &str) -> Option<Size> {
    None
}

/// Layout box of an element, used to size the context menu before showing it.
#[cfg(target_arch = "wasm32")]
pub fn element_box_size(id: &str) -> Option<Size> {
    let element = window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(Size::new(rect.width(), rect.height()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_box_size(_id: &str) -> Option<Size> {
    None
}

/// Viewport size without scrollbars (`document.documentElement.client*`).
#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> Option<Size> {
    let root = window()?.document()?.document_element()?;
    Some(Size::new(
        f64::from(root.client_width()),
        f64::from(root.client_height()),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> Option<Size> {
    None
}

/// Whether `point` (viewport coordinates) falls inside the element's box.
#[cfg(target_arch = "wasm32")]
pub fn element_contains_point(id: &str, point: Point) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    point.x >= rect.left()
        && point.x <= rect.right()
        && point.y >= rect.top()
        && point.y <= rect.bottom()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_contains_point(_id: &str, _point: Point) -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
pub fn show_alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn show_alert(message: &str) {
    eprintln!("[alert] {message}");
}

/// Blocking yes/no dialog. Anything but an explicit "OK" counts as no.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_message: &str) -> bool {
    false
}
