// Runs controller transitions and carries out the effects they return.

use crate::api::{StopTarget, VidSpyClient};
use crate::components::overlay::{clear_overlay, paint_edge_feedback, paint_readout, OVERLAY_CLEAR_MS};
use crate::components::web_helpers::{element_client_size, show_alert, PLAYBACK_ELEMENT_ID};
use crate::error::MEDIA_LOAD_MESSAGE;
use crate::slideshow::{Direction, Effect, Point, SlideshowController, Transition};
use crate::utils::delay_ms;
use dioxus::core::spawn_forever;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

/// Copyable handle to the page's slideshow, provided through context.
///
/// All mutation of the controller goes through [`SlideshowHandle::dispatch`],
/// so the playback element's source has exactly one writer.
#[derive(Clone, Copy, PartialEq)]
pub struct SlideshowHandle {
    controller: Signal<SlideshowController>,
    client: Signal<VidSpyClient>,
    overlay_epoch: Signal<u64>,
}

impl SlideshowHandle {
    pub fn new(
        controller: Signal<SlideshowController>,
        client: Signal<VidSpyClient>,
        overlay_epoch: Signal<u64>,
    ) -> Self {
        Self {
            controller,
            client,
            overlay_epoch,
        }
    }

    pub fn controller(&self) -> Signal<SlideshowController> {
        self.controller
    }

    pub fn client(&self) -> VidSpyClient {
        self.client.peek().clone()
    }

    /// Applies one transition. Errors are logged; effects produced before
    /// the failure are still carried out.
    pub fn dispatch<F, T>(&self, op: F)
    where
        F: FnOnce(&mut SlideshowController) -> T,
        T: Into<Transition>,
    {
        let mut controller = self.controller;
        let Transition { effects, error: failure } = {
            let mut guard = controller.write();
            op(&mut guard).into()
        };
        if let Some(err) = failure {
            error!("{err}");
        }
        self.apply(effects);
    }

    /// Fetches the stream list once, then honours autoplay.
    pub async fn load_streams(&self, autoplay: bool) {
        match self.client().fetch_streams().await {
            Ok(streams) => {
                info!("Loaded {} streams", streams.len());
                let mut controller = self.controller;
                controller.write().set_streams(streams);
            }
            Err(err) => error!("Error fetching streams: {err}"),
        }
        if autoplay {
            info!("Auto start is enabled, starting slideshow...");
            self.dispatch(|c| c.start(true));
        }
    }

    /// Page unload: stop the feed on screen without waiting for the reply.
    pub fn teardown(&self) {
        self.dispatch(|c| c.teardown());
    }

    pub fn media_loaded(&self) {
        let mut controller = self.controller;
        if controller.peek().is_loading() {
            controller.write().on_media_loaded();
        }
    }

    pub fn media_failed(&self) {
        let mut controller = self.controller;
        let failure = controller.write().on_media_error();
        if let Some(err) = failure {
            error!("{err}");
            show_alert(MEDIA_LOAD_MESSAGE);
        }
    }

    /// Centre-tap coordinate readout, cleared like edge feedback.
    pub fn flash_readout(&self, tap: Point, text: &str) {
        let Some(size) = element_client_size(PLAYBACK_ELEMENT_ID) else {
            return;
        };
        paint_readout(tap, size, text);
        self.schedule_overlay_clear();
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleAdvance { token, delay_ms: wait } => {
                    let handle = *self;
                    spawn_forever(async move {
                        delay_ms(wait).await;
                        handle.dispatch(|c| c.on_advance_due(token));
                    });
                }
                Effect::RequestStop(target) => self.request_stop(target),
                Effect::EdgeFeedback(direction) => self.flash_edge(direction),
            }
        }
    }

    fn request_stop(&self, target: StopTarget) {
        let client = self.client();
        spawn_detached(async move {
            if let Err(err) = client.stop(&target).await {
                error!("Error stopping stream: {err}");
            }
        });
    }

    fn flash_edge(&self, direction: Direction) {
        let Some(size) = element_client_size(PLAYBACK_ELEMENT_ID) else {
            return;
        };
        paint_edge_feedback(direction, size);
        self.schedule_overlay_clear();
    }

    /// Clears the overlay after [`OVERLAY_CLEAR_MS`] unless something newer
    /// was drawn in the meantime.
    fn schedule_overlay_clear(&self) {
        let mut epoch = self.overlay_epoch;
        let drawn = *epoch.peek() + 1;
        epoch.set(drawn);
        spawn_forever(async move {
            delay_ms(OVERLAY_CLEAR_MS).await;
            if *epoch.peek() == drawn {
                clear_overlay();
            }
        });
    }
}

/// Stop requests must start even while the page is unloading, so they bypass
/// the component scheduler in the browser.
#[cfg(target_arch = "wasm32")]
fn spawn_detached<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_detached<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    spawn_forever(fut);
}
