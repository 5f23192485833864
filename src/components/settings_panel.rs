use crate::api::{ActiveStream, HealthReport, Quality, QualityVariant};
use crate::components::{Icon, SlideshowHandle};
use dioxus::prelude::*;

/// Whether the settings panel is shown. Toggled from the context menu.
#[derive(Clone, Copy)]
pub struct SettingsOpenSignal(pub Signal<bool>);

/// Whether centre taps draw a coordinate readout on the overlay.
#[derive(Clone, Copy)]
pub struct ShowCoordinatesSignal(pub Signal<bool>);

pub fn stream_info_line(variant: &QualityVariant) -> String {
    format!(
        "Width: {}, Height: {}, FPS: {}, URL: {}",
        variant.width, variant.height, variant.fps, variant.url
    )
}

fn active_stream_line(stream: &ActiveStream) -> String {
    let seen = stream
        .last_accessed_at()
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "{} ({}x{} @ {} fps, last seen {})",
        stream.src, stream.width, stream.height, stream.fps, seen
    )
}

pub fn health_summary(report: &HealthReport) -> String {
    match report.active_streams.len() {
        0 => format!("Server {}: no active streams", report.status),
        1 => format!("Server {}: 1 active stream", report.status),
        n => format!("Server {}: {n} active streams", report.status),
    }
}

#[component]
pub fn SettingsPanel() -> Element {
    let handle = use_context::<SlideshowHandle>();
    let mut open = use_context::<SettingsOpenSignal>().0;
    let mut show_coordinates = use_context::<ShowCoordinatesSignal>().0;
    let controller = handle.controller();

    let (quality, options, info, streams, shown) = {
        let snapshot = controller.read();
        let info = snapshot.displayed_variant().map(stream_info_line);
        let streams: Vec<String> = snapshot
            .streams()
            .iter()
            .map(|stream| stream.display_name().to_string())
            .collect();
        (
            snapshot.quality().clone(),
            snapshot.quality_options(),
            info,
            streams,
            snapshot.shown_index(),
        )
    };

    let health = use_resource(move || async move {
        if !open() {
            return None;
        }
        Some(handle.client().fetch_health().await)
    });

    let class = if open() {
        "settings-panel active"
    } else {
        "settings-panel"
    };

    rsx! {
        div { class: "{class}",
            div { class: "settings-header",
                h2 { "Settings" }
                button {
                    class: "settings-close",
                    aria_label: "Close settings",
                    onclick: move |_| open.set(false),
                    Icon { name: "x".to_string(), class: "menu-icon".to_string() }
                }
            }

            label { class: "settings-row",
                span { "Stream" }
                select {
                    disabled: streams.is_empty(),
                    onchange: move |evt: FormEvent| {
                        if let Ok(index) = evt.value().parse::<usize>() {
                            handle.dispatch(|c| c.select(index));
                        }
                    },
                    for (index, name) in streams.iter().enumerate() {
                        option {
                            key: "{index}",
                            value: "{index}",
                            selected: shown == Some(index),
                            "{name}"
                        }
                    }
                }
            }

            label { class: "settings-row",
                span { "Quality" }
                select {
                    onchange: move |evt: FormEvent| {
                        let selected = Quality::from(evt.value());
                        handle.dispatch(|c| c.set_quality(selected));
                    },
                    for choice in options {
                        option {
                            key: "{choice.label()}",
                            value: "{choice.label()}",
                            selected: choice == quality,
                            "{choice.label()}"
                        }
                    }
                }
            }

            label { class: "settings-row",
                input {
                    r#type: "checkbox",
                    checked: show_coordinates(),
                    onchange: move |_| {
                        let next = !show_coordinates();
                        show_coordinates.set(next);
                    },
                }
                span { "Show tap coordinates" }
            }

            div { class: "settings-section",
                h3 { "Current stream" }
                if let Some(info) = info {
                    p { class: "stream-info", "{info}" }
                } else {
                    p { class: "stream-info muted", "Nothing playing" }
                }
            }

            div { class: "settings-section",
                h3 {
                    Icon { name: "server".to_string(), class: "menu-icon".to_string() }
                    "Server"
                }
                {
                    match health() {
                        Some(Some(Ok(report))) => rsx! {
                            p { "{health_summary(&report)}" }
                            ul { class: "active-streams",
                                for stream in report.active_streams.iter() {
                                    li { key: "{stream.src}", "{active_stream_line(stream)}" }
                                }
                            }
                        },
                        Some(Some(Err(err))) => rsx! {
                            p { class: "muted", "Health check failed: {err}" }
                        },
                        _ => rsx! {
                            Icon { name: "loader".to_string(), class: "menu-icon".to_string() }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_line_lists_variant_fields() {
        let variant = QualityVariant {
            quality: Quality::High,
            url: "rtsp://cam1/high".to_string(),
            width: 1920,
            height: 1080,
            fps: 25,
        };
        assert_eq!(
            stream_info_line(&variant),
            "Width: 1920, Height: 1080, FPS: 25, URL: rtsp://cam1/high"
        );
    }

    #[test]
    fn health_summary_counts_streams() {
        let mut report = HealthReport {
            status: "healthy".to_string(),
            active_streams: Vec::new(),
        };
        assert_eq!(health_summary(&report), "Server healthy: no active streams");

        report.active_streams.push(ActiveStream {
            src: "rtsp://cam1".to_string(),
            width: 640,
            height: 360,
            fps: 10,
            last_accessed: "2024-01-01T12:30:45".to_string(),
        });
        assert_eq!(health_summary(&report), "Server healthy: 1 active stream");
        assert_eq!(
            active_stream_line(&report.active_streams[0]),
            "rtsp://cam1 (640x360 @ 10 fps, last seen 12:30:45)"
        );
    }
}
