use crate::components::Icon;
use dioxus::prelude::*;

#[component]
pub(super) fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner", role: "status",
            Icon { name: "loader".to_string(), class: "spinner-icon".to_string() }
        }
    }
}

/// Stream name and play state in the corner of the viewer.
#[component]
pub(super) fn StreamCaption(name: Option<String>, paused: bool) -> Element {
    let icon = if paused { "pause" } else { "play" };
    let Some(name) = name else {
        return rsx! {};
    };

    rsx! {
        div { class: "stream-caption",
            Icon { name: icon.to_string(), class: "caption-icon".to_string() }
            span { "{name}" }
        }
    }
}
