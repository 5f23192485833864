use crate::components::{ContextMenuController, SettingsOpenSignal, SlideshowHandle};
use crate::slideshow::Direction;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, KeyboardEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Navigate(Direction),
    TogglePlayback,
    Dismiss,
}

/// Maps a keydown to a viewer action. Modified keys are left to the browser.
pub fn shortcut_for_key(key: &str, code: &str, has_modifier: bool) -> Option<ShortcutAction> {
    if has_modifier {
        return None;
    }
    match key {
        "ArrowLeft" => Some(ShortcutAction::Navigate(Direction::Back)),
        "ArrowRight" => Some(ShortcutAction::Navigate(Direction::Forward)),
        " " | "Spacebar" => Some(ShortcutAction::TogglePlayback),
        "Escape" | "Esc" => Some(ShortcutAction::Dismiss),
        _ if code == "Space" => Some(ShortcutAction::TogglePlayback),
        _ => None,
    }
}

pub fn run_shortcut(
    action: ShortcutAction,
    handle: SlideshowHandle,
    menu: ContextMenuController,
    settings_open: SettingsOpenSignal,
) {
    debug!("Shortcut: {action:?}");
    match action {
        ShortcutAction::Navigate(direction) => handle.dispatch(|c| c.navigate(direction)),
        ShortcutAction::TogglePlayback => handle.dispatch(|c| c.toggle()),
        ShortcutAction::Dismiss => {
            menu.hide();
            let mut open = settings_open.0;
            if *open.peek() {
                open.set(false);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn is_editable_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element
            .get_attribute("contenteditable")
            .map(|v| v.to_ascii_lowercase() != "false")
            .unwrap_or(false)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

/// Installs the document keydown listener once for the page's lifetime.
#[cfg(target_arch = "wasm32")]
pub fn use_keyboard_shortcuts(
    handle: SlideshowHandle,
    menu: ContextMenuController,
    settings_open: SettingsOpenSignal,
) {
    use_hook(move || {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        let runtime = Runtime::current();
        let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.default_prevented() || event.is_composing() || is_editable_target(&event) {
                return;
            }
            let has_modifier = event.ctrl_key() || event.meta_key() || event.alt_key();
            let Some(action) = shortcut_for_key(&event.key(), &event.code(), has_modifier)
            else {
                return;
            };
            event.prevent_default();
            let _guard = RuntimeGuard::new(runtime.clone());
            run_shortcut(action, handle, menu, settings_open);
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
        key_cb.forget();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_keyboard_shortcuts(
    _handle: SlideshowHandle,
    _menu: ContextMenuController,
    _settings_open: SettingsOpenSignal,
) {
}
