//! Heatmap-derived discrete waypoint distribution.
//!
//! The image-decoding side lives outside this crate: an external loader turns
//! a 100×100 heatmap image into a flat weight vector and hands it to
//! [`ProbabilityGrid::from_weights`].  From there on the grid is an immutable,
//! shared-by-reference resource — the simulation holds it in an `Arc` and
//! every agent in a group samples the same instance through its own RNG.

use rand::distributions::{Distribution, WeightedIndex};

use bcast_core::{AgentRng, Position};

use crate::{MobilityError, MobilityResult};

/// Cells per grid axis.  The grid always covers the whole domain, so one cell
/// spans `width / 100 × height / 100` domain units.
pub const GRID_DIM: usize = 100;

const CELL_COUNT: usize = GRID_DIM * GRID_DIM;

/// A normalized probability distribution over a 100×100 grid of cells.
///
/// Cells are stored row-major in heatmap orientation: index `c` addresses
/// column `c / 100`, row `c % 100`, with row 0 at the *top* of the domain.
/// [`cell_position`][Self::cell_position] performs the vertical flip when
/// mapping a cell back to domain coordinates.
#[derive(Clone, Debug)]
pub struct ProbabilityGrid {
    cells: Vec<f64>,
    dist: WeightedIndex<f64>,
}

impl ProbabilityGrid {
    /// Build a grid from raw non-negative weights (e.g. grayscale pixel
    /// values), normalizing them to sum to 1.
    pub fn from_weights(weights: Vec<f64>) -> MobilityResult<Self> {
        if weights.len() != CELL_COUNT {
            return Err(MobilityError::Grid(format!(
                "expected {CELL_COUNT} cells, got {}",
                weights.len()
            )));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MobilityError::Grid(
                "weights must be finite and non-negative".into(),
            ));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(MobilityError::Grid("weights sum to zero".into()));
        }
        let cells: Vec<f64> = weights.into_iter().map(|w| w / total).collect();
        let dist = WeightedIndex::new(&cells)
            .map_err(|e| MobilityError::Grid(e.to_string()))?;
        Ok(Self { cells, dist })
    }

    /// Accept an already-normalized matrix, verifying it sums to 1.
    ///
    /// A matrix that fails the check is a fatal input error — the caller's
    /// heatmap loader produced something inconsistent, and substituting a
    /// default distribution would silently change the experiment.
    pub fn from_normalized(cells: Vec<f64>) -> MobilityResult<Self> {
        if cells.len() == CELL_COUNT {
            let total: f64 = cells.iter().sum();
            if (total - 1.0).abs() > 1e-9 {
                return Err(MobilityError::Grid(format!(
                    "normalized matrix sums to {total}, expected 1"
                )));
            }
        }
        Self::from_weights(cells)
    }

    /// The normalized cell probabilities, row-major.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Draw a cell index according to the grid's distribution.
    pub fn sample_cell(&self, rng: &mut AgentRng) -> usize {
        self.dist.sample(rng.inner())
    }

    /// Map cell index `c` to domain coordinates on a `width × height` domain.
    ///
    /// Row 0 of the heatmap is the top of the domain, so the y axis is
    /// flipped: `(⌊c/100⌋ · width/100, height − (c mod 100) · height/100)`.
    pub fn cell_position(cell: usize, width: f64, height: f64) -> Position {
        let col = (cell / GRID_DIM) as f64;
        let row = (cell % GRID_DIM) as f64;
        Position::new(
            col * width / GRID_DIM as f64,
            height - row * height / GRID_DIM as f64,
        )
    }

    /// Draw a waypoint position directly.
    pub fn sample_position(&self, rng: &mut AgentRng, width: f64, height: f64) -> Position {
        Self::cell_position(self.sample_cell(rng), width, height)
    }
}
