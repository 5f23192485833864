// Long-press detection over pointer events.

use super::Point;

/// How long a press must be held before it opens the context menu.
pub const LONG_PRESS_MS: u32 = 500;

/// Movement (CSS px) beyond which a press no longer counts as held still.
pub const LONG_PRESS_MOVE_TOLERANCE_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressToken(u64);

/// How a tracked press ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressRelease {
    /// Released before the threshold without moving. Carries the press
    /// position relative to the element.
    Tap(Point),
    /// The long press already fired and opened the menu.
    LongPress,
    /// The pointer moved too far; neither a tap nor a long press.
    Drag,
    /// No press was being tracked for this pointer.
    Untracked,
}

#[derive(Debug, Clone, PartialEq)]
struct Press {
    token: PressToken,
    pointer_id: i32,
    client: Point,
    element: Point,
    moved: bool,
    long_fired: bool,
}

/// Tracks the single press in progress on the playback element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PressTracker {
    active: Option<Press>,
    issued: u64,
}

impl PressTracker {
    /// Starts tracking a primary-button press. The caller checks back after
    /// [`LONG_PRESS_MS`] with the returned token.
    pub fn pointer_down(&mut self, pointer_id: i32, client: Point, element: Point) -> PressToken {
        self.issued += 1;
        let token = PressToken(self.issued);
        self.active = Some(Press {
            token,
            pointer_id,
            client,
            element,
            moved: false,
            long_fired: false,
        });
        token
    }

    pub fn pointer_move(&mut self, pointer_id: i32, client: Point) {
        if let Some(press) = self.active.as_mut() {
            if press.pointer_id == pointer_id
                && press.client.distance_to(client) > LONG_PRESS_MOVE_TOLERANCE_PX
            {
                press.moved = true;
            }
        }
    }

    /// Long-press timer callback. Returns the viewport position to open the
    /// menu at when the same press is still held still.
    pub fn long_press_due(&mut self, token: PressToken) -> Option<Point> {
        let press = self.active.as_mut()?;
        if press.token != token || press.moved || press.long_fired {
            return None;
        }
        press.long_fired = true;
        Some(press.client)
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> PressRelease {
        match self.active.take() {
            Some(press) if press.pointer_id == pointer_id => {
                if press.long_fired {
                    PressRelease::LongPress
                } else if press.moved {
                    PressRelease::Drag
                } else {
                    PressRelease::Tap(press.element)
                }
            }
            other => {
                self.active = other;
                PressRelease::Untracked
            }
        }
    }

    /// `pointercancel` or the pointer leaving the element.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_pressing(&self) -> bool {
        self.active.is_some()
    }
}
