//! Slideshow state machine: which stream is on screen, whether the slideshow
//! is running, and how navigation input moves it.
//!
//! The controller never touches the browser. Every transition updates its
//! fields and returns the [`Effect`]s the view layer has to carry out
//! (arming a timer, sending a stop request, flashing edge feedback). The
//! image source itself is read back through [`SlideshowController::source`].

mod geometry;
mod press;

pub use geometry::*;
pub use press::*;

use crate::api::{quality_options, video_feed_url, Quality, QualityVariant, StopTarget, Stream};
use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};

/// Time between automatic advances while playing.
pub const ADVANCE_INTERVAL_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Paused,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// Identifies one scheduled advance. Only the most recently issued token is
/// honoured, so dropping it from the controller cancels the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Call [`SlideshowController::on_advance_due`] with `token` after `delay_ms`.
    ScheduleAdvance { token: TimerToken, delay_ms: u32 },
    /// Fire-and-forget `POST /stop`.
    RequestStop(StopTarget),
    /// Shade the tapped edge and draw its arrow on the overlay.
    EdgeFeedback(Direction),
}

/// Effects of one transition plus the error that cut it short. Effects
/// produced before the failure still have to be carried out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    pub effects: Vec<Effect>,
    pub error: Option<ViewerError>,
}

impl From<Result<Vec<Effect>>> for Transition {
    fn from(result: Result<Vec<Effect>>) -> Self {
        match result {
            Ok(effects) => Self {
                effects,
                error: None,
            },
            Err(err) => Self {
                effects: Vec::new(),
                error: Some(err),
            },
        }
    }
}

impl From<Vec<Effect>> for Transition {
    fn from(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            error: None,
        }
    }
}

/// What the playback element should show.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackSource {
    Placeholder,
    Feed(String),
}

#[derive(Debug, Clone, PartialEq)]
struct DisplayedFeed {
    index: usize,
    feed_url: String,
    variant: QualityVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowController {
    streams: Vec<Stream>,
    current_index: usize,
    quality: Quality,
    status: PlaybackStatus,
    pending_advance: Option<TimerToken>,
    next_token: u64,
    advance_interval_ms: u32,
    displayed: Option<DisplayedFeed>,
    loading: bool,
}

impl SlideshowController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            streams: Vec::new(),
            current_index: 0,
            quality: config.quality.clone(),
            status: PlaybackStatus::Paused,
            pending_advance: None,
            next_token: 0,
            advance_interval_ms: config.advance_interval_ms,
            displayed: None,
            loading: false,
        }
    }

    /// Installs the stream list fetched at load. The list is not refreshed
    /// afterwards.
    pub fn set_streams(&mut self, streams: Vec<Stream>) {
        self.streams = streams;
        if self.current_index >= self.streams.len() {
            self.current_index = 0;
        }
    }

    /// Startup transition: begins playing when autoplay was requested.
    pub fn start(&mut self, autoplay: bool) -> Result<Vec<Effect>> {
        if autoplay {
            self.play()
        } else {
            Ok(Vec::new())
        }
    }

    /// Page unload. Stops the feed on screen; delivery is not awaited.
    pub fn teardown(&mut self) -> Vec<Effect> {
        self.pending_advance = None;
        self.status = PlaybackStatus::Paused;
        self.loading = false;
        self.displayed
            .take()
            .map(|feed| vec![Effect::RequestStop(StopTarget::Source(feed.variant.url))])
            .unwrap_or_default()
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn quality(&self) -> &Quality {
        &self.quality
    }

    /// Qualities offered by the stream list, plus the selected one when no
    /// stream offers it, so the selector can always show the selection.
    pub fn quality_options(&self) -> Vec<Quality> {
        let mut options = quality_options(&self.streams);
        if !options.contains(&self.quality) {
            options.push(self.quality.clone());
        }
        options
    }

    /// Index of the stream on screen, or of the one that would be shown
    /// next when only the placeholder is up. After a failed advance this
    /// stays on the feed still displayed.
    pub fn shown_index(&self) -> Option<usize> {
        match &self.displayed {
            Some(feed) => Some(feed.index),
            None if self.streams.is_empty() => None,
            None => Some(self.current_index),
        }
    }

    /// The variant behind the feed on screen.
    pub fn displayed_variant(&self) -> Option<&QualityVariant> {
        self.displayed.as_ref().map(|feed| &feed.variant)
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.status == PlaybackStatus::Paused
    }

    pub fn pending_advance(&self) -> Option<TimerToken> {
        self.pending_advance
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn source(&self) -> PlaybackSource {
        match &self.displayed {
            Some(feed) => PlaybackSource::Feed(feed.feed_url.clone()),
            None => PlaybackSource::Placeholder,
        }
    }

    /// Centre tap: Paused ⇄ Playing.
    pub fn toggle(&mut self) -> Result<Vec<Effect>> {
        match self.status {
            PlaybackStatus::Paused => self.play(),
            PlaybackStatus::Playing => Ok(self.pause()),
        }
    }

    pub fn play(&mut self) -> Result<Vec<Effect>> {
        self.status = PlaybackStatus::Playing;
        self.display_current()
    }

    pub fn pause(&mut self) -> Vec<Effect> {
        self.status = PlaybackStatus::Paused;
        self.pending_advance = None;
        self.loading = false;
        match self.displayed.take() {
            Some(feed) => vec![Effect::RequestStop(StopTarget::Source(feed.variant.url))],
            None => Vec::new(),
        }
    }

    /// Edge tap or keyboard step. While paused only the index moves.
    ///
    /// The edge feedback is returned even when the advance fails.
    pub fn navigate(&mut self, direction: Direction) -> Transition {
        if self.streams.is_empty() {
            return Transition::default();
        }
        let mut transition = Transition {
            effects: vec![Effect::EdgeFeedback(direction)],
            error: None,
        };
        match self.status {
            PlaybackStatus::Paused => self.step(direction),
            PlaybackStatus::Playing => match self.advance(direction) {
                Ok(effects) => transition.effects.extend(effects),
                Err(err) => transition.error = Some(err),
            },
        }
        transition
    }

    /// Stream picker: jump straight to `index`, cancelling the pending
    /// advance. Playing shows it at the selected quality and stops the feed
    /// it replaces; paused only moves the index.
    pub fn select(&mut self, index: usize) -> Result<Vec<Effect>> {
        if index >= self.streams.len() {
            return Ok(Vec::new());
        }
        self.pending_advance = None;
        self.current_index = index;
        if self.is_paused() {
            return Ok(Vec::new());
        }
        let previous = self.displayed.as_ref().map(|feed| feed.variant.url.clone());
        let mut effects = self.display_current()?;
        let replaced = previous.filter(|url| {
            self.displayed
                .as_ref()
                .is_some_and(|feed| &feed.variant.url != url)
        });
        if let Some(url) = replaced {
            effects.insert(0, Effect::RequestStop(StopTarget::Source(url)));
        }
        Ok(effects)
    }

    /// Moves one stream in `direction` and shows it at the selected quality.
    /// Only called while playing.
    ///
    /// The index move is kept even when the new stream lacks the selected
    /// quality, so repeated navigation can step past it. The displayed
    /// source stays as it was and no new timer is armed.
    fn advance(&mut self, direction: Direction) -> Result<Vec<Effect>> {
        if self.streams.is_empty() {
            return Ok(Vec::new());
        }
        self.step(direction);
        self.display_current()
    }

    /// Advance timer callback. Tokens that are no longer pending are stale
    /// and ignored.
    pub fn on_advance_due(&mut self, token: TimerToken) -> Result<Vec<Effect>> {
        if self.pending_advance != Some(token) || self.is_paused() {
            return Ok(Vec::new());
        }
        self.pending_advance = None;
        self.advance(Direction::Forward)
    }

    /// Settings selection. Paused: keep the placeholder, fetch nothing.
    /// Playing: redisplay the current stream at the new quality.
    pub fn set_quality(&mut self, quality: Quality) -> Result<Vec<Effect>> {
        self.quality = quality;
        match self.status {
            PlaybackStatus::Paused => {
                self.pending_advance = None;
                self.displayed = None;
                self.loading = false;
                Ok(Vec::new())
            }
            PlaybackStatus::Playing => self.display_current(),
        }
    }

    /// Context menu "stop all". Without confirmation nothing happens.
    pub fn stop_all(&mut self, confirmed: bool) -> Vec<Effect> {
        if !confirmed {
            return Vec::new();
        }
        self.status = PlaybackStatus::Paused;
        self.pending_advance = None;
        self.displayed = None;
        self.loading = false;
        vec![Effect::RequestStop(StopTarget::All)]
    }

    pub fn on_media_loaded(&mut self) {
        self.loading = false;
    }

    /// The playback element failed to load. Returns the error to surface
    /// when a feed (not the placeholder) was on screen.
    pub fn on_media_error(&mut self) -> Option<ViewerError> {
        self.loading = false;
        self.displayed.as_ref().map(|_| ViewerError::MediaLoad)
    }

    fn step(&mut self, direction: Direction) {
        let len = self.streams.len();
        if len == 0 {
            return;
        }
        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1) % len,
            Direction::Back => (self.current_index + len - 1) % len,
        };
    }

    fn display_current(&mut self) -> Result<Vec<Effect>> {
        self.pending_advance = None;
        let Some(stream) = self.streams.get(self.current_index) else {
            return Ok(Vec::new());
        };
        let Some(variant) = stream.variant(&self.quality) else {
            return Err(ViewerError::MissingQualityVariant {
                stream: stream.display_name().to_string(),
                quality: self.quality.clone(),
            });
        };
        self.displayed = Some(DisplayedFeed {
            index: self.current_index,
            feed_url: video_feed_url(variant),
            variant: variant.clone(),
        });
        self.loading = true;
        Ok(vec![self.arm_advance()])
    }

    fn arm_advance(&mut self) -> Effect {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending_advance = Some(token);
        Effect::ScheduleAdvance {
            token,
            delay_ms: self.advance_interval_ms,
        }
    }
}
