use std::time::{Duration, Instant};

/// Cadence of the autonomous ticker.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Re-armable one-second deadline.
///
/// `TickTimer` is owned by the controller and polled from the host's event
/// loop; there is no background thread. Re-arming pushes the deadline a
/// full interval out, which is how the controller guarantees that ticking
/// resumed after a drag or an edit fires exactly one second later instead
/// of replaying the seconds that were suppressed.
///
/// Skipped time is lost by design: [`fire`](TickTimer::fire) re-arms from
/// `now`, not from the old deadline, so a host that polls late gets one
/// tick, never a burst.
#[derive(Debug, Clone)]
pub struct TickTimer {
    deadline: Instant,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::armed_at(Instant::now())
    }

    /// A timer whose first deadline is one interval after `now`.
    pub fn armed_at(now: Instant) -> Self {
        Self { deadline: now + TICK_INTERVAL }
    }

    /// Push the deadline to one full interval from `now`.
    #[inline]
    pub fn rearm(&mut self, now: Instant) {
        self.deadline = now + TICK_INTERVAL;
    }

    /// `true` once per elapsed deadline; re-arms from `now` when it fires.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + TICK_INTERVAL;
        true
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}
