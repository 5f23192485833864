use crate::api::Quality;

/// Failures the viewer can run into. None of them are retried; they are
/// logged and recovery is left to the next user action.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// The request never produced a response, or its body could not be read.
    Network(String),
    /// The backend answered with a non-success status.
    Status { endpoint: &'static str, status: u16 },
    /// The response body did not match the expected model.
    Decode(String),
    /// The selected quality is not offered by the stream being displayed.
    MissingQualityVariant { stream: String, quality: Quality },
    /// The playback element reported a load error for the current feed.
    MediaLoad,
}

impl ViewerError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Status { endpoint, status } => {
                write!(f, "{endpoint} responded with HTTP {status}")
            }
            Self::Decode(msg) => write!(f, "unexpected response body: {msg}"),
            Self::MissingQualityVariant { stream, quality } => {
                write!(f, "No URL found for quality: {quality} (stream {stream})")
            }
            Self::MediaLoad => f.write_str(MEDIA_LOAD_MESSAGE),
        }
    }
}

impl std::error::Error for ViewerError {}

/// Text of the blocking dialog shown when the playback element fails to load.
pub const MEDIA_LOAD_MESSAGE: &str =
    "Error loading video. Please check the URL or try a different video.";

pub type Result<T> = std::result::Result<T, ViewerError>;
