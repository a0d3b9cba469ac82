//! `bcast-mobility` — mobility models and per-agent movement state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`model`]   | `MobilityModel` — the closed family of waypoint strategies     |
//! | [`grid`]    | `ProbabilityGrid` — heatmap-derived discrete distribution      |
//! | [`agent`]   | `Agent` — histories, target cursor, per-round advance          |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                           |
//!
//! # Movement model (waypoint queue)
//!
//! Every agent owns a waypoint history and a cursor pointing at its current
//! target.  Each round the agent advances toward that target:
//!
//! 1. When the cursor runs off the end of the history, the agent's
//!    [`MobilityModel`] generates exactly one new waypoint (the source agent
//!    instead re-appends its previous target, freezing in place once its
//!    scripted trace is exhausted).
//! 2. Continuous-family models spend a travel budget of one distance unit
//!    per round, possibly snapping through several closely spaced waypoints.
//! 3. Grid-walk models hop exactly one cell per round.
//!
//! Which of the two advance algorithms applies — and which proximity metric
//! the propagation engine must pair with — is a property of the model, so
//! mismatched combinations cannot be constructed downstream.

pub mod agent;
pub mod error;
pub mod grid;
pub mod model;


pub use agent::Agent;
pub use error::{MobilityError, MobilityResult};
pub use grid::{GRID_DIM, ProbabilityGrid};
pub use model::{AdvanceKind, MobilityModel, WaypointContext};
