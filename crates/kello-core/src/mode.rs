/// Which rotatable hand a drag gesture owns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hand {
    /// The minute indicator — one full revolution per hour.
    Minute,
    /// The second indicator — one full revolution per minute.
    Second,
}

/// The widget's single interaction mode.
///
/// Exactly one input source may mutate the clock at any instant. The ticker
/// advances only in [`Idle`](InteractionMode::Idle); both interactive modes
/// suppress it. Being a single tagged value (rather than two independent
/// flags) makes "dragging while editing" unrepresentable — entering one mode
/// always completes the other first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No interaction in progress; the ticker owns the clock.
    #[default]
    Idle,
    /// A pointer drag owns the clock; the payload is the grabbed hand.
    Dragging(Hand),
    /// The text readout has focus and owns the clock.
    Editing,
}

impl InteractionMode {
    /// `true` when the autonomous ticker is allowed to advance time.
    #[inline]
    pub fn is_idle(self) -> bool {
        self == InteractionMode::Idle
    }

    /// The grabbed hand, if a drag is in progress.
    #[inline]
    pub fn dragging_hand(self) -> Option<Hand> {
        match self {
            InteractionMode::Dragging(hand) => Some(hand),
            _ => None,
        }
    }
}
