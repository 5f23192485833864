//! The page's single context menu: opened by right-click or long press,
//! clamped to the viewport, toggled rather than rebuilt.

use crate::components::web_helpers::{
    confirm, element_box_size, viewport_size, CONTEXT_MENU_ID,
};
use crate::components::{Icon, SettingsOpenSignal, SlideshowHandle};
use crate::slideshow::{Point, Size};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

/// Triggers closer together than this are not handled by the custom menu.
pub const MENU_RETRIGGER_MS: f64 = 500.0;
/// Outside clicks this soon after a long-press release are the release's
/// own click and do not dismiss the menu.
pub const CLICK_GUARD_MS: f64 = 100.0;
/// Used when the menu has no layout yet.
pub const MENU_FALLBACK_SIZE: Size = Size {
    width: 200.0,
    height: 150.0,
};

const STOP_ALL_PROMPT: &str =
    "Are you sure you want to stop all streams? This affects every user viewing the stream.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenSettings,
    StopAllStreams,
}

impl MenuAction {
    pub const ALL: [MenuAction; 2] = [MenuAction::OpenSettings, MenuAction::StopAllStreams];

    pub fn label(self) -> &'static str {
        match self {
            Self::OpenSettings => "Settings",
            Self::StopAllStreams => "Stop all streams",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::OpenSettings => "settings",
            Self::StopAllStreams => "stop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuTrigger {
    Shown(Point),
    /// Too soon after the previous trigger: the menu was hidden and the
    /// platform menu should be allowed through.
    Suppressed,
}

/// Places a menu of `menu` size at `pointer`, shifted left/up by any
/// overflow past the viewport and never at negative coordinates.
pub fn clamp_to_viewport(pointer: Point, menu: Size, viewport: Size) -> Point {
    let mut left = pointer.x;
    let mut top = pointer.y;
    if left + menu.width > viewport.width {
        left = viewport.width - menu.width;
    }
    if top + menu.height > viewport.height {
        top = viewport.height - menu.height;
    }
    Point::new(left.max(0.0), top.max(0.0))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContextMenuState {
    visible: bool,
    position: Point,
    last_trigger_ms: Option<f64>,
    click_guard_until_ms: f64,
}

impl ContextMenuState {
    pub fn trigger(&mut self, pointer: Point, now_ms: f64, viewport: Size, menu: Size) -> MenuTrigger {
        if let Some(last) = self.last_trigger_ms {
            if now_ms - last < MENU_RETRIGGER_MS {
                self.visible = false;
                return MenuTrigger::Suppressed;
            }
        }
        self.last_trigger_ms = Some(now_ms);

        let menu = if menu.is_empty() {
            MENU_FALLBACK_SIZE
        } else {
            menu
        };
        self.position = clamp_to_viewport(pointer, menu, viewport);
        self.visible = true;
        MenuTrigger::Shown(self.position)
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn guard_clicks_until(&mut self, until_ms: f64) {
        self.click_guard_until_ms = until_ms;
    }

    /// A click landed outside the menu. Returns true when it closed the menu.
    pub fn dismiss_outside_click(&mut self, now_ms: f64) -> bool {
        if !self.visible || now_ms < self.click_guard_until_ms {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Shared handle to the menu state, provided through context.
#[derive(Clone, Copy, PartialEq)]
pub struct ContextMenuController {
    state: Signal<ContextMenuState>,
}

impl ContextMenuController {
    pub fn new(state: Signal<ContextMenuState>) -> Self {
        Self { state }
    }

    /// Opens the menu at a viewport position, measuring the rendered menu
    /// and the viewport first.
    pub fn open_at(&self, pointer: Point, now_ms: f64) -> MenuTrigger {
        let viewport = viewport_size().unwrap_or(Size::new(f64::MAX, f64::MAX));
        let menu = element_box_size(CONTEXT_MENU_ID).unwrap_or_default();
        let mut state = self.state;
        let outcome = state.write().trigger(pointer, now_ms, viewport, menu);
        outcome
    }

    pub fn hide(&self) {
        let mut state = self.state;
        if state.peek().is_visible() {
            state.write().hide();
        }
    }

    pub fn guard_clicks_until(&self, until_ms: f64) {
        let mut state = self.state;
        state.write().guard_clicks_until(until_ms);
    }

    pub fn dismiss_outside_click(&self, now_ms: f64) {
        let mut state = self.state;
        if state.peek().is_visible() {
            state.write().dismiss_outside_click(now_ms);
        }
    }

    pub fn current(&self) -> ContextMenuState {
        (self.state)()
    }
}

#[component]
pub fn ContextMenu() -> Element {
    let menu = use_context::<ContextMenuController>();
    let handle = use_context::<SlideshowHandle>();
    let settings_open = use_context::<SettingsOpenSignal>().0;

    let state = menu.current();
    let position = state.position();
    let class = if state.is_visible() {
        "context-menu open"
    } else {
        "context-menu"
    };

    let run_action = move |action: MenuAction| {
        menu.hide();
        match action {
            MenuAction::OpenSettings => {
                let mut settings_open = settings_open;
                let open = *settings_open.peek();
                settings_open.set(!open);
            }
            MenuAction::StopAllStreams => {
                let confirmed = confirm(STOP_ALL_PROMPT);
                if !confirmed {
                    info!("User canceled the stop stream action.");
                }
                handle.dispatch(|c| c.stop_all(confirmed));
            }
        }
    };

    rsx! {
        div {
            id: CONTEXT_MENU_ID,
            class: "{class}",
            style: "left: {position.x}px; top: {position.y}px;",
            oncontextmenu: move |evt: MouseEvent| evt.prevent_default(),
            ul {
                for action in MenuAction::ALL {
                    li {
                        key: "{action.label()}",
                        class: "context-menu-item",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            evt.stop_propagation();
                            run_action(action);
                        },
                        Icon { name: action.icon().to_string(), class: "menu-icon".to_string() }
                        span { "{action.label()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 1920.0,
        height: 1080.0,
    };
    const MENU: Size = Size {
        width: 200.0,
        height: 150.0,
    };

    #[test]
    fn menu_near_origin_is_not_moved() {
        assert_eq!(
            clamp_to_viewport(Point::new(10.0, 10.0), MENU, VIEWPORT),
            Point::new(10.0, 10.0)
        );
    }

    #[test]
    fn menu_overflowing_bottom_right_is_shifted_back() {
        assert_eq!(
            clamp_to_viewport(Point::new(1850.0, 1000.0), MENU, VIEWPORT),
            Point::new(1720.0, 930.0)
        );
    }

    #[test]
    fn menu_larger_than_viewport_pins_to_origin() {
        assert_eq!(
            clamp_to_viewport(Point::new(50.0, 50.0), MENU, Size::new(120.0, 90.0)),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn second_trigger_within_window_is_suppressed_and_hides() {
        let mut state = ContextMenuState::default();
        assert_eq!(
            state.trigger(Point::new(10.0, 10.0), 1_000.0, VIEWPORT, MENU),
            MenuTrigger::Shown(Point::new(10.0, 10.0))
        );
        assert!(state.is_visible());

        assert_eq!(
            state.trigger(Point::new(40.0, 40.0), 1_300.0, VIEWPORT, MENU),
            MenuTrigger::Suppressed
        );
        assert!(!state.is_visible());
        assert_eq!(state.position(), Point::new(10.0, 10.0));
    }

    #[test]
    fn suppressed_trigger_on_hidden_menu_leaves_it_hidden() {
        let mut state = ContextMenuState::default();
        state.trigger(Point::new(10.0, 10.0), 0.0, VIEWPORT, MENU);
        state.hide();
        assert_eq!(
            state.trigger(Point::new(10.0, 10.0), 200.0, VIEWPORT, MENU),
            MenuTrigger::Suppressed
        );
        assert!(!state.is_visible());
    }

    #[test]
    fn trigger_after_window_shows_again() {
        let mut state = ContextMenuState::default();
        state.trigger(Point::new(10.0, 10.0), 0.0, VIEWPORT, MENU);
        state.trigger(Point::new(10.0, 10.0), 200.0, VIEWPORT, MENU);
        assert_eq!(
            state.trigger(Point::new(1850.0, 1000.0), 600.0, VIEWPORT, MENU),
            MenuTrigger::Shown(Point::new(1720.0, 930.0))
        );
    }

    #[test]
    fn unmeasured_menu_uses_fallback_size() {
        let mut state = ContextMenuState::default();
        state.trigger(Point::new(1850.0, 1000.0), 0.0, VIEWPORT, Size::default());
        assert_eq!(state.position(), Point::new(1720.0, 930.0));
    }

    #[test]
    fn menu_icons_have_artwork() {
        for action in MenuAction::ALL {
            assert!(crate::components::ICON_NAMES.contains(&action.icon()));
        }
    }

    #[test]
    fn outside_click_respects_release_guard() {
        let mut state = ContextMenuState::default();
        state.trigger(Point::new(10.0, 10.0), 0.0, VIEWPORT, MENU);
        state.guard_clicks_until(600.0);
        assert!(!state.dismiss_outside_click(550.0));
        assert!(state.is_visible());
        assert!(state.dismiss_outside_click(650.0));
        assert!(!state.is_visible());
        assert!(!state.dismiss_outside_click(700.0));
    }
}
