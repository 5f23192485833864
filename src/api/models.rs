use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery tier of a stream variant. The backend sends plain labels; the
/// three common tiers are recognised case-insensitively and anything else is
/// kept verbatim so the selector can still offer it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Quality {
    pub fn label(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Other(label) => label,
        }
    }

    /// Options shown when no stream advertises any variant.
    pub fn defaults() -> Vec<Quality> {
        vec![Self::Low, Self::Medium, Self::High]
    }
}

impl From<&str> for Quality {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for Quality {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Quality> for String {
    fn from(value: Quality) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One quality tier of a stream: where to pull it from and at what size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityVariant {
    pub quality: Quality,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub fps: u32,
}

/// A camera source as listed by `GET /streams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Stream {
    #[serde(default, alias = "url")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rtsp_urls: Vec<QualityVariant>,
}

impl Stream {
    pub fn variant(&self, quality: &Quality) -> Option<&QualityVariant> {
        self.rtsp_urls.iter().find(|v| &v.quality == quality)
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

/// Distinct qualities across all streams, in order of first appearance.
pub fn quality_options(streams: &[Stream]) -> Vec<Quality> {
    let mut options: Vec<Quality> = Vec::new();
    for variant in streams.iter().flat_map(|s| s.rtsp_urls.iter()) {
        if !options.contains(&variant.quality) {
            options.push(variant.quality.clone());
        }
    }
    if options.is_empty() {
        return Quality::defaults();
    }
    options
}

/// Which server-side captures a stop request should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopTarget {
    All,
    Source(String),
}

impl StopTarget {
    pub fn query_value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Source(src) => src,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub active_streams: Vec<ActiveStream>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActiveStream {
    pub src: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub fps: u32,
    #[serde(default)]
    pub last_accessed: String,
}

impl ActiveStream {
    /// The backend reports naive local timestamps in ISO 8601 form.
    pub fn last_accessed_at(&self) -> Option<chrono::NaiveDateTime> {
        self.last_accessed.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAMS_JSON: &str = r#"[
        {
            "id": "rtsp://cam-1/stream",
            "name": "Front door",
            "rtsp_urls": [
                {"quality": "Low", "url": "rtsp://cam-1/low", "width": 320, "height": 240, "fps": 10},
                {"quality": "Medium", "url": "rtsp://cam-1/mid", "width": 640, "height": 480, "fps": 15}
            ]
        },
        {
            "url": "rtsp://cam-2/stream",
            "rtsp_urls": [
                {"quality": "high", "url": "rtsp://cam-2/hd", "width": 1920, "height": 1080, "fps": 30},
                {"quality": "Ultra", "url": "rtsp://cam-2/4k", "width": 3840, "height": 2160, "fps": 30}
            ]
        }
    ]"#;

    #[test]
    fn parses_stream_listing() {
        let streams: Vec<Stream> = serde_json::from_str(STREAMS_JSON).unwrap();
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].display_name(), "Front door");
        assert_eq!(streams[1].id, "rtsp://cam-2/stream");
        assert_eq!(streams[1].display_name(), "rtsp://cam-2/stream");
        assert_eq!(streams[1].rtsp_urls[0].quality, Quality::High);
        assert_eq!(
            streams[1].rtsp_urls[1].quality,
            Quality::Other("Ultra".to_string())
        );
    }

    #[test]
    fn variant_lookup_matches_quality() {
        let streams: Vec<Stream> = serde_json::from_str(STREAMS_JSON).unwrap();
        let mid = streams[0].variant(&Quality::Medium).unwrap();
        assert_eq!(mid.url, "rtsp://cam-1/mid");
        assert_eq!((mid.width, mid.height, mid.fps), (640, 480, 15));
        assert!(streams[0].variant(&Quality::High).is_none());
    }

    #[test]
    fn quality_options_are_distinct_in_first_seen_order() {
        let streams: Vec<Stream> = serde_json::from_str(STREAMS_JSON).unwrap();
        assert_eq!(
            quality_options(&streams),
            vec![
                Quality::Low,
                Quality::Medium,
                Quality::High,
                Quality::Other("Ultra".to_string())
            ]
        );
        assert_eq!(quality_options(&[]), Quality::defaults());
    }

    #[test]
    fn quality_serializes_as_label() {
        let json = serde_json::to_string(&Quality::High).unwrap();
        assert_eq!(json, "\"High\"");
        assert_eq!(Quality::from(" medium "), Quality::Medium);
    }

    #[test]
    fn health_timestamps_parse_with_and_without_fraction() {
        let report: HealthReport = serde_json::from_str(
            r#"{"status": "running", "active_streams": [
                {"src": "rtsp://a", "width": 640, "height": 480, "fps": 15,
                 "last_accessed": "2024-05-01T10:15:30.123456"},
                {"src": "rtsp://b", "width": 640, "height": 480, "fps": 15,
                 "last_accessed": "2024-05-01T10:15:30"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(report.status, "running");
        assert!(report.active_streams[0].last_accessed_at().is_some());
        assert!(report.active_streams[1].last_accessed_at().is_some());
    }
}
