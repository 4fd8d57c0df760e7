//! The editable text readout.
//!
//! While idle the readout is a pure projection of the clock (`MM:SS`); while
//! the field has focus it becomes a free-form scratch buffer the user can
//! overwrite arbitrarily, committed (or normalized away) on blur. The two
//! states are a tagged value so there is never any question which string is
//! authoritative.

use log::debug;

/// The readout's text state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Readout {
    /// Text derives from the clock — `MM:SS`, zero-padded.
    #[default]
    Derived,
    /// The field has focus; this holds the unvalidated scratch buffer.
    Scratch(String),
}

impl Readout {
    #[inline]
    pub fn is_editing(&self) -> bool {
        matches!(self, Readout::Scratch(_))
    }
}

/// Parse a committed scratch buffer into `(minute, second)`.
///
/// The buffer splits on the first `:` into a minutes part and a seconds
/// part; each parses as a base-10 integer. No padding is required on input
/// ("7:5" is minute 7, second 5). Fallback policy, applied deterministically
/// and never surfaced as an error:
/// - a part that fails to parse counts as 0
/// - a missing seconds part counts as 0
/// - values of 60 or more wrap modulo 60
pub fn parse_readout(text: &str) -> (u32, u32) {
    let (minutes, seconds) = match text.split_once(':') {
        Some((m, s)) => (m, s),
        None => (text, ""),
    };
    (parse_field(minutes), parse_field(seconds))
}

fn parse_field(part: &str) -> u32 {
    match part.trim().parse::<u32>() {
        Ok(v) => v % 60,
        Err(_) => {
            if !part.trim().is_empty() {
                debug!("readout field {part:?} is not a number, committing 0");
            }
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── well-formed input ─────────────────────────────────────────────────

    #[test]
    fn padded_input() {
        assert_eq!(parse_readout("07:45"), (7, 45));
    }

    #[test]
    fn unpadded_input() {
        assert_eq!(parse_readout("7:5"), (7, 5));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse_readout(" 12 : 34 "), (12, 34));
    }

    // ── fallback policy ───────────────────────────────────────────────────

    #[test]
    fn non_numeric_commits_zero() {
        assert_eq!(parse_readout("abc"), (0, 0));
        assert_eq!(parse_readout("ab:cd"), (0, 0));
    }

    #[test]
    fn missing_seconds_part_is_zero() {
        assert_eq!(parse_readout("42"), (42, 0));
        assert_eq!(parse_readout("42:"), (42, 0));
    }

    #[test]
    fn half_numeric_keeps_the_good_field() {
        assert_eq!(parse_readout("x:30"), (0, 30));
        assert_eq!(parse_readout("30:x"), (30, 0));
    }

    #[test]
    fn out_of_range_wraps_modulo_sixty() {
        assert_eq!(parse_readout("75:61"), (15, 1));
    }

    #[test]
    fn extra_separator_spoils_only_seconds() {
        // "1:2:3" → seconds part "2:3" is not a number.
        assert_eq!(parse_readout("1:2:3"), (1, 0));
    }

    #[test]
    fn empty_buffer_commits_zero_zero() {
        assert_eq!(parse_readout(""), (0, 0));
    }

    #[test]
    fn negative_numbers_are_not_numbers_here() {
        // u32 parse rejects the sign; the fallback applies.
        assert_eq!(parse_readout("-5:10"), (0, 10));
    }
}
