use crate::coords::Vec2;

/// Input events routed into the clock widget by the host.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary button pressed at `pos` — may grab a hand.
    PointerDown { pos: Vec2 },
    /// Pointer moved to `pos` while the button is held.
    PointerMove { pos: Vec2 },
    /// Primary button released.
    ///
    /// Fires wherever the pointer is — including outside the face. The host
    /// must deliver this even when the pointer left the widget, or a grabbed
    /// hand would stay grabbed forever.
    PointerUp,
    /// The text readout gained input focus.
    ReadoutFocus,
    /// Keystrokes changed the readout field; `text` is the full new value.
    ReadoutInput { text: String },
    /// The text readout lost input focus — commits the buffer.
    ReadoutBlur,
}

/// Result returned by [`ClockWidget::on_event`](crate::widget::ClockWidget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing to siblings / parents.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
