use std::time::Instant;

use kello_core::drag::pointer_angle;
use kello_core::{ClockController, ClockTime, Hand, InteractionMode};
use log::debug;

use crate::coords::{Rect, Vec2, segment_distance};
use crate::event::{EventResult, UiEvent};

/// Minute hand length as a fraction of the face radius.
const MINUTE_HAND_FRAC: f32 = 0.62;
/// Second hand length as a fraction of the face radius.
const SECOND_HAND_FRAC: f32 = 0.82;
/// How close (logical px) a pointer-down must land to a hand to grab it.
const GRAB_TOLERANCE: f32 = 10.0;

/// Render-model snapshot the host draws from.
///
/// Angles are in degrees, 0° at 12 o'clock, clockwise positive; a grabbed
/// hand's angle already includes the live drag offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockView {
    pub minute_angle: f32,
    pub second_angle: f32,
    pub readout: String,
    /// `true` while the readout is a scratch buffer (cursor visible, etc.).
    pub editing: bool,
}

/// The interactive clock face plus its readout field.
///
/// Owns a [`ClockController`] and a face rectangle, and maps routed
/// [`UiEvent`]s onto controller operations: pointer-down hit-tests the two
/// hands, pointer-move feeds the drag with the angle around the face
/// center, pointer-up releases from anywhere, and the three readout events
/// drive the editor. Between events the host calls
/// [`poll`](ClockWidget::poll) to let the ticker run.
///
/// # Example
/// ```rust,ignore
/// let mut widget = ClockWidget::new(Rect::new(0.0, 0.0, 240.0, 240.0));
///
/// // Host event loop:
/// widget.poll(Instant::now());
/// widget.on_event(&UiEvent::PointerDown { pos }, Instant::now());
/// let view = widget.view();
/// draw_hand(view.minute_angle);
/// ```
#[derive(Debug)]
pub struct ClockWidget {
    controller: ClockController,
    face: Rect,
}

impl ClockWidget {
    pub fn new(face: Rect) -> Self {
        Self {
            controller: ClockController::new(),
            face,
        }
    }

    /// A widget seeded with an explicit time and timer baseline.
    pub fn with_time(face: Rect, time: ClockTime, now: Instant) -> Self {
        Self {
            controller: ClockController::with_time(time, now),
            face,
        }
    }

    /// The face's bounding box. Hit-testing and drag angles both derive
    /// from its center, re-read on every event so layout changes apply
    /// immediately.
    #[inline]
    pub fn face(&self) -> Rect {
        self.face
    }

    pub fn set_face(&mut self, face: Rect) {
        self.face = face;
    }

    #[inline]
    pub fn controller(&self) -> &ClockController {
        &self.controller
    }

    #[inline]
    pub fn controller_mut(&mut self) -> &mut ClockController {
        &mut self.controller
    }

    /// Let the ticker run; returns `true` if the clock advanced.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.controller.poll_tick(now)
    }

    /// Route one input event.
    pub fn on_event(&mut self, event: &UiEvent, now: Instant) -> EventResult {
        match event {
            UiEvent::PointerDown { pos } => match self.hit_hand(*pos) {
                Some(hand) => {
                    debug!("pointer-down grabbed the {hand:?} hand");
                    self.controller.begin_drag(hand);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            UiEvent::PointerMove { pos } => {
                if self.controller.mode().dragging_hand().is_none() {
                    return EventResult::Ignored;
                }
                let d = *pos - self.face.center();
                self.controller.drag_to(pointer_angle(d.x, d.y));
                EventResult::Consumed
            }
            UiEvent::PointerUp => {
                if self.controller.mode().dragging_hand().is_none() {
                    return EventResult::Ignored;
                }
                self.controller.end_drag(now);
                EventResult::Consumed
            }
            UiEvent::ReadoutFocus => {
                self.controller.focus_readout();
                EventResult::Consumed
            }
            UiEvent::ReadoutInput { text } => {
                if self.controller.mode() != InteractionMode::Editing {
                    return EventResult::Ignored;
                }
                self.controller.edit_readout(text.clone());
                EventResult::Consumed
            }
            UiEvent::ReadoutBlur => {
                if self.controller.mode() != InteractionMode::Editing {
                    return EventResult::Ignored;
                }
                self.controller.blur_readout(now);
                EventResult::Consumed
            }
        }
    }

    /// Snapshot for the host's renderer.
    pub fn view(&self) -> ClockView {
        ClockView {
            minute_angle: self.controller.minute_hand_angle(),
            second_angle: self.controller.second_hand_angle(),
            readout: self.controller.readout_text(),
            editing: self.controller.mode() == InteractionMode::Editing,
        }
    }

    // ── hand geometry ─────────────────────────────────────────────────────

    /// Which hand a pointer-down at `pos` grabs, if any.
    ///
    /// The second hand is tested first because it draws on top of the
    /// minute hand; where the two overlap the topmost one wins.
    fn hit_hand(&self, pos: Vec2) -> Option<Hand> {
        for hand in [Hand::Second, Hand::Minute] {
            let d = segment_distance(pos, self.face.center(), self.hand_tip(hand));
            if d <= GRAB_TOLERANCE {
                return Some(hand);
            }
        }
        None
    }

    /// Tip of `hand` in widget coordinates, from its displayed angle.
    fn hand_tip(&self, hand: Hand) -> Vec2 {
        let (angle, frac) = match hand {
            Hand::Minute => (self.controller.minute_hand_angle(), MINUTE_HAND_FRAC),
            Hand::Second => (self.controller.second_hand_angle(), SECOND_HAND_FRAC),
        };
        let radius = 0.5 * self.face.size.x.min(self.face.size.y);
        // 0° points at 12 o'clock; positive rotation is clockwise on screen.
        let rad = angle.to_radians();
        self.face.center() + Vec2::new(rad.sin(), -rad.cos()) * (radius * frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn widget_at(m: u32, s: u32) -> (ClockWidget, Instant) {
        let t0 = Instant::now();
        let time = ClockTime::from_naive(
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(10, m, s)
                .unwrap(),
        );
        // 200×200 face → center (100,100), radius 100.
        let w = ClockWidget::with_time(Rect::new(0.0, 0.0, 200.0, 200.0), time, t0);
        (w, t0)
    }

    fn down(x: f32, y: f32) -> UiEvent {
        UiEvent::PointerDown { pos: Vec2::new(x, y) }
    }

    fn mv(x: f32, y: f32) -> UiEvent {
        UiEvent::PointerMove { pos: Vec2::new(x, y) }
    }

    // ── hit-testing ───────────────────────────────────────────────────────

    #[test]
    fn down_on_the_minute_hand_grabs_it() {
        // minute = 15 → 90° → pointing right from (100,100).
        let (mut w, t0) = widget_at(15, 0);
        assert!(w.on_event(&down(140.0, 100.0), t0).is_consumed());
        assert_eq!(w.controller().mode(), InteractionMode::Dragging(Hand::Minute));
    }

    #[test]
    fn down_on_the_second_hand_grabs_it() {
        // second = 30 → 180° → pointing straight down.
        let (mut w, t0) = widget_at(15, 30);
        assert!(w.on_event(&down(100.0, 170.0), t0).is_consumed());
        assert_eq!(w.controller().mode(), InteractionMode::Dragging(Hand::Second));
    }

    #[test]
    fn overlapping_hands_grab_the_topmost() {
        // Both hands at 0° — the second hand draws on top and wins.
        let (mut w, t0) = widget_at(0, 0);
        assert!(w.on_event(&down(100.0, 50.0), t0).is_consumed());
        assert_eq!(w.controller().mode(), InteractionMode::Dragging(Hand::Second));
    }

    #[test]
    fn down_off_both_hands_is_ignored() {
        let (mut w, t0) = widget_at(15, 30);
        assert_eq!(w.on_event(&down(40.0, 40.0), t0), EventResult::Ignored);
        assert!(w.controller().mode().is_idle());
    }

    // ── drag routing ──────────────────────────────────────────────────────

    #[test]
    fn move_without_grab_is_ignored() {
        let (mut w, t0) = widget_at(15, 30);
        assert_eq!(w.on_event(&mv(150.0, 100.0), t0), EventResult::Ignored);
    }

    #[test]
    fn drag_applies_angle_around_the_face_center() {
        let (mut w, t0) = widget_at(15, 0);
        w.on_event(&down(140.0, 100.0), t0); // grab minute at 90° (pointer angle 0°)
        // Pointer straight below center: pointer angle 90°, +15 notches.
        assert!(w.on_event(&mv(100.0, 180.0), t0).is_consumed());
        assert_eq!(w.controller().time().minute(), 30);
    }

    #[test]
    fn release_fires_from_anywhere() {
        let (mut w, t0) = widget_at(15, 0);
        w.on_event(&down(140.0, 100.0), t0);
        // Pointer long gone from the face — release still lands.
        assert!(w.on_event(&UiEvent::PointerUp, t0 + Duration::from_millis(300)).is_consumed());
        assert!(w.controller().mode().is_idle());
    }

    #[test]
    fn release_without_grab_is_ignored() {
        let (mut w, t0) = widget_at(15, 0);
        assert_eq!(w.on_event(&UiEvent::PointerUp, t0), EventResult::Ignored);
    }

    // ── readout routing ───────────────────────────────────────────────────

    #[test]
    fn focus_type_blur_commits() {
        let (mut w, t0) = widget_at(15, 0);
        w.on_event(&UiEvent::ReadoutFocus, t0);
        w.on_event(&UiEvent::ReadoutInput { text: "07:45".into() }, t0);
        w.on_event(&UiEvent::ReadoutBlur, t0);
        assert_eq!(w.controller().time().minute(), 7);
        assert_eq!(w.controller().time().second(), 45);
    }

    #[test]
    fn input_without_focus_is_ignored() {
        let (mut w, t0) = widget_at(15, 0);
        let r = w.on_event(&UiEvent::ReadoutInput { text: "boo".into() }, t0);
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(w.view().readout, "15:00");
    }

    // ── view ──────────────────────────────────────────────────────────────

    #[test]
    fn view_reflects_drag_offset_and_edit_state() {
        let (mut w, t0) = widget_at(15, 0);
        w.on_event(&down(140.0, 100.0), t0);
        w.on_event(&mv(100.0, 180.0), t0); // minute hand dragged to 90° offset
        let view = w.view();
        assert_eq!(view.minute_angle, 30.0 * 6.0 + 90.0);
        assert!(!view.editing);

        w.on_event(&UiEvent::ReadoutFocus, t0);
        assert!(w.view().editing);
    }
}
