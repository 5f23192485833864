use crate::api::Quality;
use crate::slideshow::ADVANCE_INTERVAL_MS;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Id of the hidden form element the host page uses to request autoplay.
pub const AUTOPLAY_ELEMENT_ID: &str = "autoPlay";

const MIN_INTERVAL_SECS: u32 = 3;
const MAX_INTERVAL_SECS: u32 = 600;

/// Viewer settings, read once when the page loads and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub autoplay: bool,
    pub quality: Quality,
    pub advance_interval_ms: u32,
    pub show_coordinates: bool,
    pub api_base: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            quality: Quality::default(),
            advance_interval_ms: ADVANCE_INTERVAL_MS,
            show_coordinates: false,
            api_base: default_api_base(),
        }
    }
}

impl ViewerConfig {
    /// Builds the config from the host page: hidden autoplay element first,
    /// then query-string overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(value) = autoplay_element_value() {
            config.apply_autoplay_flag(&value);
        }
        if let Some(query) = page_query() {
            config.apply_query(&query);
        }
        config
    }

    /// Only the exact string `"true"` turns autoplay on.
    pub fn apply_autoplay_flag(&mut self, value: &str) {
        self.autoplay = value.trim() == "true";
    }

    /// Applies `autoplay`, `quality`, `interval` (seconds) and `coords`
    /// overrides from a `?a=b&c=d` query string. Unknown keys are ignored.
    pub fn apply_query(&mut self, query: &str) {
        for (key, value) in parse_query(query) {
            match key.as_str() {
                "autoplay" => {
                    if let Some(flag) = parse_flag(&value) {
                        self.autoplay = flag;
                    }
                }
                "quality" if !value.trim().is_empty() => {
                    self.quality = Quality::from(value.as_str());
                }
                "interval" => {
                    if let Ok(secs) = value.trim().parse::<u32>() {
                        self.advance_interval_ms =
                            secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS) * 1000;
                    }
                }
                "coords" => {
                    if let Some(flag) = parse_flag(&value) {
                        self.show_coordinates = flag;
                    }
                }
                _ => {}
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|value| value.into_owned())
        .unwrap_or(spaced)
}

#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    crate::api::DEFAULT_API_BASE.to_string()
}

#[cfg(target_arch = "wasm32")]
fn autoplay_element_value() -> Option<String> {
    let element = window()?
        .document()?
        .get_element_by_id(AUTOPLAY_ELEMENT_ID)?;
    match element.dyn_ref::<web_sys::HtmlInputElement>() {
        Some(input) => Some(input.value()),
        None => element.get_attribute("value"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn autoplay_element_value() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn page_query() -> Option<String> {
    window()?.location().search().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_query() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_contract() {
        let config = ViewerConfig::default();
        assert!(!config.autoplay);
        assert_eq!(config.quality, Quality::Medium);
        assert_eq!(config.advance_interval_ms, 15_000);
        assert!(!config.show_coordinates);
    }

    #[test]
    fn autoplay_flag_requires_literal_true() {
        let mut config = ViewerConfig::default();
        config.apply_autoplay_flag("true");
        assert!(config.autoplay);
        config.apply_autoplay_flag("True");
        assert!(!config.autoplay);
        config.apply_autoplay_flag("");
        assert!(!config.autoplay);
    }

    #[test]
    fn query_overrides_are_applied() {
        let mut config = ViewerConfig::default();
        config.apply_query("?autoplay=1&quality=high&interval=30&coords=on&other=x");
        assert!(config.autoplay);
        assert_eq!(config.quality, Quality::High);
        assert_eq!(config.advance_interval_ms, 30_000);
        assert!(config.show_coordinates);
    }

    #[test]
    fn query_values_are_decoded_and_clamped() {
        let mut config = ViewerConfig::default();
        config.apply_query("quality=Night+Vision&interval=1");
        assert_eq!(config.quality, Quality::Other("Night Vision".to_string()));
        assert_eq!(config.advance_interval_ms, 3_000);

        config.apply_query("interval=abc&autoplay=maybe&quality=");
        assert_eq!(config.advance_interval_ms, 3_000);
        assert!(!config.autoplay);
        assert_eq!(config.quality, Quality::Other("Night Vision".to_string()));
    }
}
