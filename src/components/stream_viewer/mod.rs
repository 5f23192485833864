//! The playback element, its overlay canvas and the pointer input that
//! drives navigation and the long-press menu.

use crate::components::overlay::{prepare_overlay, readout_text};
use crate::components::web_helpers::{element_client_size, OVERLAY_CANVAS_ID, PLAYBACK_ELEMENT_ID};
use crate::components::{
    ContextMenuController, MenuTrigger, ShowCoordinatesSignal, SlideshowHandle, CLICK_GUARD_MS,
};
use crate::slideshow::{
    classify_tap, tap_percentages, PlaybackSource, Point, PressRelease, PressTracker, TapZone,
    LONG_PRESS_MS,
};
use crate::utils::{delay_ms, now_ms};
use dioxus::html::input_data::MouseButton;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

mod status;

use status::{LoadingSpinner, StreamCaption};

const PLACEHOLDER_IMG: Asset = asset!("/assets/img/play.svg");

#[component]
pub fn StreamViewer() -> Element {
    let handle = use_context::<SlideshowHandle>();
    let menu = use_context::<ContextMenuController>();
    let show_coordinates = use_context::<ShowCoordinatesSignal>().0;
    let mut press = use_signal(PressTracker::default);

    // Reads no signals, so this runs once after the canvas is mounted.
    use_effect(move || prepare_overlay());

    let controller = handle.controller();
    let (src, loading, paused, caption) = {
        let snapshot = controller.read();
        let src = match snapshot.source() {
            PlaybackSource::Feed(path) => handle.client().endpoint(&path),
            PlaybackSource::Placeholder => PLACEHOLDER_IMG.to_string(),
        };
        let total = snapshot.streams().len();
        let caption = snapshot.shown_index().and_then(|index| {
            snapshot
                .streams()
                .get(index)
                .map(|stream| format!("{} ({}/{total})", stream.display_name(), index + 1))
        });
        (src, snapshot.is_loading(), snapshot.is_paused(), caption)
    };

    let on_tap = move |at: Point| {
        let Some(size) = element_client_size(PLAYBACK_ELEMENT_ID) else {
            return;
        };
        match classify_tap(at.x, size.width) {
            TapZone::Edge(direction) => handle.dispatch(|c| c.navigate(direction)),
            TapZone::Centre => {
                if let Some((x, y)) = tap_percentages(at.x, at.y, size.width, size.height) {
                    debug!("Tap at X: {x:.1}%, Y: {y:.1}%");
                    if *show_coordinates.peek() {
                        handle.flash_readout(at, &readout_text(x, y));
                    }
                }
                handle.dispatch(|c| c.toggle());
            }
        }
    };

    let on_pointer_down = move |evt: PointerEvent| {
        if evt.trigger_button() != Some(MouseButton::Primary) {
            return;
        }
        let client = evt.client_coordinates();
        let element = evt.element_coordinates();
        let token = press.write().pointer_down(
            evt.pointer_id(),
            Point::new(client.x, client.y),
            Point::new(element.x, element.y),
        );
        spawn(async move {
            delay_ms(LONG_PRESS_MS).await;
            let due = press.write().long_press_due(token);
            if let Some(at) = due {
                debug!("Long press at ({}, {})", at.x, at.y);
                menu.open_at(at, now_ms());
            }
        });
    };

    let on_pointer_move = move |evt: PointerEvent| {
        if !press.peek().is_pressing() {
            return;
        }
        let client = evt.client_coordinates();
        press
            .write()
            .pointer_move(evt.pointer_id(), Point::new(client.x, client.y));
    };

    let on_pointer_up = move |evt: PointerEvent| {
        let release = press.write().pointer_up(evt.pointer_id());
        match release {
            PressRelease::Tap(at) => on_tap(at),
            PressRelease::LongPress => menu.guard_clicks_until(now_ms() + CLICK_GUARD_MS),
            PressRelease::Drag | PressRelease::Untracked => {}
        }
    };

    let on_pointer_cancel = move |_: PointerEvent| {
        if press.peek().is_pressing() {
            press.write().cancel();
        }
    };

    let on_context_menu = move |evt: MouseEvent| {
        // A held touch raises its own contextmenu; the long-press timer owns that.
        if press.peek().is_pressing() {
            evt.prevent_default();
            return;
        }
        let client = evt.client_coordinates();
        match menu.open_at(Point::new(client.x, client.y), now_ms()) {
            MenuTrigger::Shown(_) => evt.prevent_default(),
            MenuTrigger::Suppressed => {}
        }
    };

    rsx! {
        div {
            class: if paused { "playback paused" } else { "playback" },
            oncontextmenu: on_context_menu,
            img {
                id: PLAYBACK_ELEMENT_ID,
                src: "{src}",
                alt: "Camera stream",
                draggable: "false",
                onpointerdown: on_pointer_down,
                onpointermove: on_pointer_move,
                onpointerup: on_pointer_up,
                onpointercancel: on_pointer_cancel,
                onpointerleave: on_pointer_cancel,
                onload: move |_| handle.media_loaded(),
                onerror: move |_| handle.media_failed(),
            }
            canvas { id: OVERLAY_CANVAS_ID, class: "overlay" }
            if loading {
                LoadingSpinner {}
            }
            StreamCaption { name: caption, paused }
        }
    }
}
