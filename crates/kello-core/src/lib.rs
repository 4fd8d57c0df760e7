//! Interaction state machine for the **kello** analog clock widget.
//!
//! Three sources compete to mutate one authoritative time value: an
//! autonomous one-second ticker, a pointer drag on either hand, and an
//! editable `MM:SS` text readout. [`ClockController`] arbitrates between
//! them through a single [`InteractionMode`] — the ticker runs only while
//! the mode is idle, and the two interactive modes can never coexist.
//!
//! This crate is headless on purpose: no windowing, no rendering. The host
//! (see `kello-ui`) feeds it pointer/focus/text events and reads back hand
//! angles and readout text.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`controller`] | `ClockController` — the arbiter and entry points |
//! | [`drag`] | angle quantization and unit-delta math |
//! | [`editor`] | `Readout`, scratch-buffer commit parsing |
//! | [`mode`] | `InteractionMode`, `Hand` |
//! | [`tick`] | `TickTimer` — the re-armable one-second deadline |
//! | [`time`] | `ClockTime` — calendar-correct time value |
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Instant;
//! use kello_core::{ClockController, Hand};
//!
//! let mut clock = ClockController::new();
//!
//! clock.begin_drag(Hand::Minute);
//! clock.drag_to(12.0);              // two 6° notches → +2 minutes
//! clock.end_drag(Instant::now());
//!
//! println!("{}", clock.readout_text());
//! ```

pub mod controller;
pub mod drag;
pub mod editor;
pub mod mode;
pub mod tick;
pub mod time;

pub use controller::ClockController;
pub use drag::DEGREES_PER_UNIT;
pub use editor::Readout;
pub use mode::{Hand, InteractionMode};
pub use tick::{TICK_INTERVAL, TickTimer};
pub use time::ClockTime;
