//! Planar coordinate type and basic geometry.
//!
//! `Position` uses `f64`: mobility models interpolate fractional coordinates
//! along straight segments and the equality-based rejection rules ("redraw if
//! the new target equals the previous one") must not be perturbed by rounding.

/// A point on the simulation plane.
///
/// Coordinates are unbounded; toroidal simulations reduce them modulo the
/// domain size only when measuring distance (see
/// [`Proximity`][crate::Proximity]), never in the stored histories.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Plain Euclidean distance, no wraparound.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reduce both coordinates into `[0, width) × [0, height)`.
    ///
    /// Uses `rem_euclid` so negative coordinates wrap correctly.
    #[inline]
    pub fn wrap(self, width: f64, height: f64) -> Position {
        Position {
            x: self.x.rem_euclid(width),
            y: self.y.rem_euclid(height),
        }
    }

    /// The point a fraction `t ∈ [0, 1]` of the way from `self` to `other`.
    #[inline]
    pub fn lerp(self, other: Position, t: f64) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
