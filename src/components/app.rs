use crate::api::VidSpyClient;
use crate::components::web_helpers::{element_contains_point, CONTEXT_MENU_ID};
use crate::components::{
    use_keyboard_shortcuts, ContextMenu, ContextMenuController, ContextMenuState, SettingsOpenSignal,
    SettingsPanel, ShowCoordinatesSignal, SlideshowHandle, StreamViewer,
};
use crate::config::ViewerConfig;
use crate::slideshow::{Point, SlideshowController};
use crate::utils::now_ms;
use dioxus::logger::tracing::info;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[component]
pub fn AppShell() -> Element {
    let config = use_hook(ViewerConfig::load);
    let controller = use_signal(|| SlideshowController::new(&config));
    let client = use_signal(|| VidSpyClient::new(config.api_base.clone()));
    let overlay_epoch = use_signal(|| 0u64);
    let handle = SlideshowHandle::new(controller, client, overlay_epoch);
    let menu_state = use_signal(ContextMenuState::default);
    let menu = ContextMenuController::new(menu_state);
    let settings_open = SettingsOpenSignal(use_signal(|| false));
    let show_coordinates = ShowCoordinatesSignal(use_signal(|| config.show_coordinates));

    // Provide state via context
    use_context_provider(|| handle);
    use_context_provider(|| menu);
    use_context_provider(|| settings_open);
    use_context_provider(|| show_coordinates);

    use_keyboard_shortcuts(handle, menu, settings_open);

    // Load the stream list once on mount
    let autoplay = config.autoplay;
    use_effect(move || {
        info!("Connecting to {}", handle.client().base());
        spawn(async move {
            handle.load_streams(autoplay).await;
        });
    });

    // Stop the feed on screen when the page goes away
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };
        let runtime = Runtime::current();
        let unload_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            handle.teardown();
        }) as Box<dyn FnMut(_)>);
        let _ = win
            .add_event_listener_with_callback("beforeunload", unload_cb.as_ref().unchecked_ref());
        unload_cb.forget();
    });

    let on_click = move |evt: MouseEvent| {
        let client = evt.client_coordinates();
        if !element_contains_point(CONTEXT_MENU_ID, Point::new(client.x, client.y)) {
            menu.dismiss_outside_click(now_ms());
        }
    };

    rsx! {
        div { class: "viewer-shell", onclick: on_click,
            StreamViewer {}
            SettingsPanel {}
            ContextMenu {}
        }
    }
}
