use core::ops::{Add, Mul, Sub};

/// 2D point/vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Geometric center of the bounding box.
    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }
}

/// Distance from point `p` to the segment `a`–`b`.
///
/// Used for hand hit-testing: a hand is a line segment from the face center
/// to its tip, and a pointer-down within grab tolerance of that segment
/// grabs the hand.
pub fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(Rect::new(10.0, 20.0, 100.0, 60.0).center(), v(60.0, 50.0));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(v(0.0, 0.0)));
        assert!(r.contains(v(9.9, 9.9)));
        assert!(!r.contains(v(10.0, 10.0)));
    }

    // ── segment_distance ──────────────────────────────────────────────────

    #[test]
    fn point_on_segment_is_zero() {
        assert_eq!(segment_distance(v(5.0, 0.0), v(0.0, 0.0), v(10.0, 0.0)), 0.0);
    }

    #[test]
    fn point_beside_segment() {
        assert_eq!(segment_distance(v(5.0, 3.0), v(0.0, 0.0), v(10.0, 0.0)), 3.0);
    }

    #[test]
    fn point_past_the_end_measures_to_the_tip() {
        assert_eq!(segment_distance(v(14.0, 3.0), v(0.0, 0.0), v(10.0, 0.0)), 5.0);
    }

    #[test]
    fn degenerate_segment_measures_to_the_point() {
        assert_eq!(segment_distance(v(3.0, 4.0), v(0.0, 0.0), v(0.0, 0.0)), 5.0);
    }
}
