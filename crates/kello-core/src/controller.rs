use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use log::{debug, trace};

use crate::drag::{quantize, unit_delta};
use crate::editor::{Readout, parse_readout};
use crate::mode::{Hand, InteractionMode};
use crate::tick::TickTimer;
use crate::time::ClockTime;

/// Arbiter between the three time-mutation sources.
///
/// One `ClockController` owns one [`ClockTime`] and decides, via a single
/// [`InteractionMode`], which source may mutate it: the one-second ticker
/// (idle), a pointer drag on a hand, or the editable text readout. The host
/// event loop delivers all calls on one thread; no callback ever overlaps
/// another, so the mode check inside [`poll_tick`](Self::poll_tick) is the
/// only gate needed.
///
/// # Example
/// ```rust,ignore
/// let mut clock = ClockController::new();
///
/// // Host event loop:
/// clock.poll_tick(Instant::now());           // ticker
/// clock.begin_drag(Hand::Minute);            // pointer-down on a hand
/// clock.drag_to(raw_angle_degrees);          // pointer-move
/// clock.end_drag(Instant::now());            // pointer-up, anywhere
/// ```
#[derive(Debug)]
pub struct ClockController {
    time: ClockTime,
    mode: InteractionMode,
    /// Quantized angle accumulated since pointer-down, degrees.
    /// Meaningful only while `mode` is `Dragging`; reset on release.
    accumulated_angle: f32,
    readout: Readout,
    timer: TickTimer,
}

impl ClockController {
    /// A controller seeded with the current wall-clock time.
    pub fn new() -> Self {
        Self::with_time(ClockTime::now(), Instant::now())
    }

    /// A controller seeded with an explicit time and timer baseline.
    pub fn with_time(time: ClockTime, now: Instant) -> Self {
        Self {
            time,
            mode: InteractionMode::Idle,
            accumulated_angle: 0.0,
            readout: Readout::Derived,
            timer: TickTimer::armed_at(now),
        }
    }

    // ── ticker ────────────────────────────────────────────────────────────

    /// Deliver one timer check. Returns `true` if the clock advanced.
    ///
    /// When the deadline has passed and no interaction is in progress the
    /// clock advances by exactly one second. A tick that lands during a drag
    /// or an edit is skipped and lost, never queued.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        if !self.mode.is_idle() {
            trace!("tick suppressed ({:?})", self.mode);
            return false;
        }
        self.time = self.time.offset_seconds(1);
        true
    }

    // ── drag gesture ──────────────────────────────────────────────────────

    /// Pointer-down on a hand: grab it.
    ///
    /// If the readout is mid-edit, the edit commits first (blur semantics);
    /// the two interactions never coexist.
    pub fn begin_drag(&mut self, hand: Hand) {
        if self.readout.is_editing() {
            debug!("drag started mid-edit, committing the readout first");
            self.commit_scratch(Local::now().naive_local());
        }
        self.mode = InteractionMode::Dragging(hand);
        self.accumulated_angle = 0.0;
        debug!("drag begin: {hand:?}");
    }

    /// Pointer-move while a hand is grabbed.
    ///
    /// `raw_angle` is the pointer's angle around the face center in degrees
    /// (two-argument arctangent convention). It snaps to the nearest 6°
    /// notch; each notch crossed since the last move shifts the grabbed
    /// hand's time field by one unit, with calendar carry in either
    /// direction. A no-op when nothing is grabbed.
    pub fn drag_to(&mut self, raw_angle: f32) {
        let Some(hand) = self.mode.dragging_hand() else {
            return;
        };
        let snapped = quantize(raw_angle);
        let delta = unit_delta(snapped, self.accumulated_angle);
        if delta != 0 {
            self.time = match hand {
                Hand::Minute => self.time.offset_minutes(delta),
                Hand::Second => self.time.offset_seconds(delta),
            };
            trace!("drag {hand:?} moved {delta:+} units → {}", self.time.readout());
        }
        self.accumulated_angle = snapped;
    }

    /// Pointer-up, anywhere: release the grabbed hand.
    ///
    /// Ticking resumes from the post-drag time, one full second from `now`.
    pub fn end_drag(&mut self, now: Instant) {
        if self.mode.dragging_hand().is_none() {
            return;
        }
        debug!("drag end at {}", self.time.readout());
        self.mode = InteractionMode::Idle;
        self.accumulated_angle = 0.0;
        self.timer.rearm(now);
    }

    // ── text readout ──────────────────────────────────────────────────────

    /// The readout gained focus: freeze it into a scratch buffer.
    ///
    /// An in-progress drag ends first (its time changes are already applied
    /// incrementally, so nothing is lost).
    pub fn focus_readout(&mut self) {
        if self.mode == InteractionMode::Editing {
            // Repeated focus must not clobber the scratch buffer.
            return;
        }
        if self.mode.dragging_hand().is_some() {
            debug!("readout focused mid-drag, releasing the hand first");
            self.mode = InteractionMode::Idle;
            self.accumulated_angle = 0.0;
        }
        self.mode = InteractionMode::Editing;
        self.readout = Readout::Scratch(self.time.readout());
    }

    /// Keystroke while editing: replace the scratch buffer verbatim.
    ///
    /// Anything is accepted transiently — validation happens at commit.
    /// A no-op when the readout is not focused.
    pub fn edit_readout(&mut self, text: impl Into<String>) {
        if self.readout.is_editing() {
            self.readout = Readout::Scratch(text.into());
        }
    }

    /// The readout lost focus: commit the scratch buffer.
    ///
    /// The committed time takes its minute and second from the buffer and
    /// everything above (hour, date) from the wall clock *at commit time*:
    /// editing the readout re-anchors the clock to now. Ticking resumes one
    /// full second from `now`.
    pub fn blur_readout(&mut self, now: Instant) {
        if !self.readout.is_editing() {
            return;
        }
        self.commit_scratch(Local::now().naive_local());
        self.mode = InteractionMode::Idle;
        self.timer.rearm(now);
    }

    fn commit_scratch(&mut self, wall: NaiveDateTime) {
        let Readout::Scratch(text) = &self.readout else {
            return;
        };
        let (minute, second) = parse_readout(text);
        self.time = ClockTime::with_minute_second(wall, minute, second);
        self.readout = Readout::Derived;
        debug!("readout committed → {}", self.time.readout());
    }

    // ── render surface ────────────────────────────────────────────────────

    /// Displayed rotation of the minute hand, degrees.
    ///
    /// While the minute hand is grabbed this includes the live drag offset,
    /// so the hand tracks the pointer smoothly even though the clock only
    /// changes in whole-notch steps.
    pub fn minute_hand_angle(&self) -> f32 {
        self.time.minute_angle() + self.drag_offset(Hand::Minute)
    }

    /// Displayed rotation of the second hand, degrees.
    pub fn second_hand_angle(&self) -> f32 {
        self.time.second_angle() + self.drag_offset(Hand::Second)
    }

    fn drag_offset(&self, hand: Hand) -> f32 {
        if self.mode.dragging_hand() == Some(hand) {
            self.accumulated_angle
        } else {
            0.0
        }
    }

    /// Current readout text: the scratch buffer while editing, `MM:SS`
    /// derived from the clock otherwise.
    pub fn readout_text(&self) -> String {
        match &self.readout {
            Readout::Derived => self.time.readout(),
            Readout::Scratch(text) => text.clone(),
        }
    }

    #[inline]
    pub fn time(&self) -> ClockTime {
        self.time
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }
}

impl Default for ClockController {
    fn default() -> Self {
        Self::new()
    }
}
