//! Inter-agent proximity metrics.
//!
//! Two notions of "in range", selected by the active mobility-model family:
//!
//! - [`Proximity::Bounded`] — ordinary Euclidean distance on the plane.
//! - [`Proximity::Toroidal`] — positions reduced modulo the domain size,
//!   per-axis difference taken as the shorter way around.  Models a world
//!   with periodic boundary conditions: leaving one edge re-enters the
//!   opposite one.
//!
//! Pairing is enforced at build time: a bounded mobility family always uses
//! the bounded metric, a toroidal family the toroidal one.

use crate::Position;

/// The distance metric used by the propagation engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Proximity {
    /// Euclidean distance on the bounded plane, no wraparound.
    Bounded,
    /// Wrap-around distance on a torus of the domain's dimensions.
    Toroidal,
}

impl Proximity {
    /// Distance between `a` and `b` under this metric on a `width × height`
    /// domain.
    ///
    /// `Bounded` ignores the domain size entirely.  `Toroidal` reduces both
    /// positions into the domain first, so raw (unwrapped) coordinates from a
    /// windowed walk are handled correctly.
    pub fn distance(self, a: Position, b: Position, width: f64, height: f64) -> f64 {
        match self {
            Proximity::Bounded => a.distance(b),
            Proximity::Toroidal => {
                let a = a.wrap(width, height);
                let b = b.wrap(width, height);
                let dx = (a.x - b.x).abs();
                let dy = (a.y - b.y).abs();
                let dx = dx.min(width - dx);
                let dy = dy.min(height - dy);
                (dx * dx + dy * dy).sqrt()
            }
        }
    }
}
