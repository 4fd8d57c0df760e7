use chrono::{Duration, Local, NaiveDateTime, Timelike};

use crate::drag::DEGREES_PER_UNIT;

/// The single authoritative time value driving the widget.
///
/// Wraps a full calendar date/time so minute and second arithmetic carries
/// into higher units the way a real clock does — advancing one second past
/// `59:59` rolls the hour, and dragging a hand backwards across `:00`
/// borrows from it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockTime(NaiveDateTime);

impl ClockTime {
    /// The current local wall-clock time.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    pub const fn from_naive(t: NaiveDateTime) -> Self {
        Self(t)
    }

    /// `base` with its minute and second fields replaced.
    ///
    /// Out-of-range inputs wrap modulo 60, so the result is always a valid
    /// calendar value. The hour / date of `base` are kept as-is.
    pub fn with_minute_second(base: NaiveDateTime, minute: u32, second: u32) -> Self {
        let t = base
            .with_minute(minute % 60)
            .and_then(|t| t.with_second(second % 60))
            .unwrap_or(base);
        Self(t)
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    #[inline]
    pub fn second(self) -> u32 {
        self.0.second()
    }

    #[inline]
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }

    /// Signed minute offset with calendar carry.
    #[must_use]
    pub fn offset_minutes(self, delta: i64) -> Self {
        Self(self.0 + Duration::minutes(delta))
    }

    /// Signed second offset with calendar carry.
    #[must_use]
    pub fn offset_seconds(self, delta: i64) -> Self {
        Self(self.0 + Duration::seconds(delta))
    }

    /// `MM:SS`, both fields zero-padded to two digits.
    pub fn readout(self) -> String {
        format!("{:02}:{:02}", self.minute(), self.second())
    }

    /// Base rotation of the minute hand: one 6° notch per minute.
    #[inline]
    pub fn minute_angle(self) -> f32 {
        self.minute() as f32 * DEGREES_PER_UNIT
    }

    /// Base rotation of the second hand: one 6° notch per second.
    #[inline]
    pub fn second_angle(self) -> f32 {
        self.second() as f32 * DEGREES_PER_UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> ClockTime {
        ClockTime::from_naive(
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap(),
        )
    }

    // ── readout ───────────────────────────────────────────────────────────

    #[test]
    fn readout_zero_pads_both_fields() {
        assert_eq!(at(10, 5, 9).readout(), "05:09");
    }

    #[test]
    fn readout_two_digit_fields() {
        assert_eq!(at(10, 23, 59).readout(), "23:59");
    }

    // ── carry ─────────────────────────────────────────────────────────────

    #[test]
    fn second_advance_wraps_into_minutes() {
        let t = at(10, 23, 59).offset_seconds(1);
        assert_eq!(t.minute(), 24);
        assert_eq!(t.second(), 0);
    }

    #[test]
    fn minute_advance_wraps_into_hours() {
        let t = at(10, 59, 30).offset_minutes(1);
        assert_eq!(t.naive().hour(), 11);
        assert_eq!(t.minute(), 0);
    }

    #[test]
    fn negative_offset_borrows() {
        let t = at(10, 0, 0).offset_seconds(-1);
        assert_eq!(t.naive().hour(), 9);
        assert_eq!(t.minute(), 59);
        assert_eq!(t.second(), 59);
    }

    #[test]
    fn sixty_minutes_carries_a_full_hour() {
        let t = at(10, 12, 0).offset_minutes(60);
        assert_eq!(t.naive().hour(), 11);
        assert_eq!(t.minute(), 12);
    }

    // ── with_minute_second ────────────────────────────────────────────────

    #[test]
    fn with_minute_second_keeps_date_and_hour() {
        let base = at(10, 23, 59).naive();
        let t = ClockTime::with_minute_second(base, 7, 45);
        assert_eq!(t.naive().hour(), 10);
        assert_eq!(t.minute(), 7);
        assert_eq!(t.second(), 45);
    }

    #[test]
    fn with_minute_second_wraps_out_of_range() {
        let base = at(10, 0, 0).naive();
        let t = ClockTime::with_minute_second(base, 75, 61);
        assert_eq!(t.minute(), 15);
        assert_eq!(t.second(), 1);
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn hand_angles_are_six_degrees_per_unit() {
        let t = at(10, 15, 45);
        assert_eq!(t.minute_angle(), 90.0);
        assert_eq!(t.second_angle(), 270.0);
    }
}
