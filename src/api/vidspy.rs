use crate::api::models::*;
use crate::error::{Result, ViewerError};
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Base URL used when the viewer is not running inside a browser page.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5001";

/// Thin client for the VidSpy HTTP backend.
#[derive(Debug, Clone, PartialEq)]
pub struct VidSpyClient {
    base: String,
}

impl VidSpyClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `GET /streams`. Called once when the page loads.
    pub async fn fetch_streams(&self) -> Result<Vec<Stream>> {
        let response = HTTP_CLIENT
            .get(self.endpoint("/streams"))
            .send()
            .await
            .map_err(ViewerError::network)?;
        if !response.status().is_success() {
            return Err(ViewerError::Status {
                endpoint: "/streams",
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await.map_err(ViewerError::network)?;
        serde_json::from_str(&body).map_err(ViewerError::decode)
    }

    /// `POST /stop?src=...` with a JSON content type and no payload.
    pub async fn stop(&self, target: &StopTarget) -> Result<()> {
        let response = HTTP_CLIENT
            .post(self.stop_url(target))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ViewerError::network)?;
        if !response.status().is_success() {
            return Err(ViewerError::Status {
                endpoint: "/stop",
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    /// `GET /health`, listing the captures the server currently keeps open.
    pub async fn fetch_health(&self) -> Result<HealthReport> {
        let response = HTTP_CLIENT
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(ViewerError::network)?;
        if !response.status().is_success() {
            return Err(ViewerError::Status {
                endpoint: "/health",
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await.map_err(ViewerError::network)?;
        serde_json::from_str(&body).map_err(ViewerError::decode)
    }

    pub fn stop_url(&self, target: &StopTarget) -> String {
        format!(
            "{}?src={}",
            self.endpoint("/stop"),
            urlencoding::encode(target.query_value())
        )
    }
}

/// Page-relative feed URL for a variant. The playback element requests it
/// directly, so it never goes through the HTTP client.
pub fn video_feed_url(variant: &QualityVariant) -> String {
    format!(
        "/video_feed?src={}&width={}&height={}&fps={}",
        urlencoding::encode(&variant.url),
        variant.width,
        variant.height,
        variant.fps
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(url: &str) -> QualityVariant {
        QualityVariant {
            quality: Quality::Medium,
            url: url.to_string(),
            width: 640,
            height: 480,
            fps: 15,
        }
    }

    #[test]
    fn feed_url_encodes_source() {
        assert_eq!(
            video_feed_url(&variant("rtsp://cam/live?channel=1&sub=0")),
            "/video_feed?src=rtsp%3A%2F%2Fcam%2Flive%3Fchannel%3D1%26sub%3D0&width=640&height=480&fps=15"
        );
    }

    #[test]
    fn stop_url_targets_all_or_one_source() {
        let client = VidSpyClient::new("http://viewer.local:5001/");
        assert_eq!(client.base(), "http://viewer.local:5001");
        assert_eq!(
            client.stop_url(&StopTarget::All),
            "http://viewer.local:5001/stop?src=all"
        );
        assert_eq!(
            client.stop_url(&StopTarget::Source("rtsp://cam/1".to_string())),
            "http://viewer.local:5001/stop?src=rtsp%3A%2F%2Fcam%2F1"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_reports_network_error() {
        let client = VidSpyClient::new("http://127.0.0.1:9");
        let err = client.fetch_streams().await.unwrap_err();
        assert!(matches!(err, ViewerError::Network(_)), "got {err:?}");
        let err = client.stop(&StopTarget::All).await.unwrap_err();
        assert!(matches!(err, ViewerError::Network(_)), "got {err:?}");
    }
}
