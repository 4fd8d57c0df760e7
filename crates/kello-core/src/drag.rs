//! Drag-gesture geometry.
//!
//! A pointer position over the face becomes an angle, the angle snaps to the
//! nearest 6° notch, and the difference between successive snapped angles
//! becomes a signed number of minute/second units. Only the *net* angular
//! travel matters — the path the pointer takes between events does not.

/// One minute/second notch on the face, in degrees (360° / 60 units).
pub const DEGREES_PER_UNIT: f32 = 6.0;

/// Angle of the pointer relative to the face center, in degrees.
///
/// Two-argument arctangent convention: 0° along +x, positive toward +y.
/// With screen coordinates (y down) that makes clockwise travel positive,
/// which is the direction that advances time.
#[inline]
pub fn pointer_angle(dx: f32, dy: f32) -> f32 {
    dy.atan2(dx).to_degrees()
}

/// Snap `angle` to the nearest multiple of 6°.
///
/// One notch equals one minute/second unit, so quantizing here is what turns
/// continuous pointer motion into discrete time steps. Rounds half-way cases
/// away from zero (`f32::round` semantics), consistently in both directions.
#[inline]
pub fn quantize(angle: f32) -> f32 {
    (angle / DEGREES_PER_UNIT).round() * DEGREES_PER_UNIT
}

/// Signed unit delta between two quantized angles.
///
/// Both arguments must already be multiples of 6°; the division is then
/// exact and the final `round` only strips float noise. Positive means
/// clockwise (time forward), negative counter-clockwise (time backward).
/// The result is deliberately not clamped to one revolution — carry into
/// higher units is the caller's job.
#[inline]
pub fn unit_delta(quantized: f32, accumulated: f32) -> i64 {
    ((quantized - accumulated) / DEGREES_PER_UNIT).round() as i64
}
