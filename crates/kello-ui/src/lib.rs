//! Kello UI — the widget layer over `kello-core`.
//!
//! `kello-core` is a headless state machine; this crate gives it a body:
//! a face rectangle, hand hit-testing, and an event enum the host's input
//! layer routes into [`ClockWidget`]. What comes back out is a
//! [`ClockView`] snapshot — two hand angles and the readout string — that
//! the host renders however it likes. No drawing happens here.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Instant;
//! use kello_ui::prelude::*;
//!
//! let mut widget = ClockWidget::new(Rect::new(0.0, 0.0, 240.0, 240.0));
//!
//! // In your event loop:
//! widget.poll(Instant::now());
//! widget.on_event(
//!     &UiEvent::PointerDown { pos: Vec2::new(120.0, 40.0) },
//!     Instant::now(),
//! );
//! let view = widget.view();
//! assert_eq!(view.readout.len(), 5); // "MM:SS"
//! ```

pub mod coords;
pub mod event;
pub mod logging;
pub mod widget;

pub use event::{EventResult, UiEvent};
pub use widget::{ClockView, ClockWidget};

/// Everything a host needs to embed the clock.
pub mod prelude {
    pub use crate::coords::{Rect, Vec2};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::logging::{LoggingConfig, init_logging};
    pub use crate::widget::{ClockView, ClockWidget};

    // Re-export the core types hosts interact with.
    pub use kello_core::{ClockController, ClockTime, Hand, InteractionMode};
}
