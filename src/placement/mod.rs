//! Simulated-annealing label placement.
//!
//! One pass of [`anneal`] takes a [`PlacementState`] (label boxes, their
//! anchors, optional bounds, optional obstacles) and repositions the labels
//! in place: repeated sweeps propose a random translation or rotation for a
//! random label, score the placement before and after, and keep or revert the
//! move under the Metropolis criterion while the temperature cools linearly
//! to zero. The caller's label collection is the result; there is no separate
//! output object.

mod energy;
mod error;
mod moves;
pub(crate) mod types;

pub use error::PlacementError;
pub use types::{Anchor, Extent, Obstacle, PlacementState};

use rand::Rng;
use serde::Serialize;

use crate::config::{AnnealParams, Weights};

/// Radius used when anchors are derived from the labels themselves.
pub const DEFAULT_ANCHOR_RADIUS: f64 = 2.0;

/// Counters reported by a finished (or cancelled) run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AnnealStats {
    pub sweeps_run: usize,
    pub attempted: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub rejected_out_of_bounds: u64,
    pub final_temperature: f64,
}

/// Run `nsweeps` annealing sweeps over the state.
///
/// Synchronous and single-threaded; returns once every sweep has run.
/// Labels hold their optimized boxes on return. Fails fast on caller-contract
/// violations before touching any label.
pub fn anneal(
    state: &mut PlacementState,
    weights: &Weights,
    params: &AnnealParams,
    nsweeps: usize,
    rng: &mut impl Rng,
) -> Result<AnnealStats, PlacementError> {
    anneal_while(state, weights, params, nsweeps, rng, |_| true)
}

/// [`anneal`] with cooperative cancellation: `keep_going` is sampled once per
/// sweep with the number of completed sweeps and stops the run early when it
/// returns false. With a constant `true` the behavior is identical to
/// [`anneal`].
pub fn anneal_while(
    state: &mut PlacementState,
    weights: &Weights,
    params: &AnnealParams,
    nsweeps: usize,
    rng: &mut impl Rng,
    mut keep_going: impl FnMut(usize) -> bool,
) -> Result<AnnealStats, PlacementError> {
    validate(state, weights, params)?;

    let mut stats = AnnealStats {
        final_temperature: params.initial_temperature,
        ..AnnealStats::default()
    };
    if nsweeps == 0 {
        return Ok(stats);
    }

    let label_count = state.labels.len();
    let mut temperature = params.initial_temperature;

    for sweep in 0..nsweeps {
        if !keep_going(sweep) {
            break;
        }
        for _ in 0..label_count {
            stats.attempted += 1;

            // Fair coin between the two move kinds; rotation needs an anchor,
            // which validation guarantees exists for every label.
            let rotate = rng.random::<f64>() < 0.5;
            let index = moves::pick_label(rng, label_count);
            let before = energy::energy(state, weights, index);
            let snapshot = if rotate {
                let anchor = state.anchors[index];
                moves::rotate(&mut state.labels, &anchor, index, params.max_angle, rng)
            } else {
                moves::translate(&mut state.labels, index, params.max_move, rng)
            };

            // Hard wall: leaving the bounds is rejected outright, without
            // consulting the Metropolis draw.
            let out_of_bounds = state
                .bounds
                .as_ref()
                .is_some_and(|bounds| !bounds.contains_extent(&state.labels[index]));
            if out_of_bounds {
                moves::restore(&mut state.labels, index, snapshot);
                stats.rejected += 1;
                stats.rejected_out_of_bounds += 1;
                continue;
            }

            let after = energy::energy(state, weights, index);
            if accept(after - before, temperature, rng) {
                stats.accepted += 1;
            } else {
                moves::restore(&mut state.labels, index, snapshot);
                stats.rejected += 1;
            }
        }
        temperature = cool(temperature, params.initial_temperature, nsweeps);
        stats.sweeps_run = sweep + 1;
    }

    stats.final_temperature = temperature;
    Ok(stats)
}

/// Metropolis criterion. Improvements always pass; a worsening move passes
/// with probability `exp(-delta/T)`. Non-positive temperature is the frozen
/// limit and accepts improvements only; `T` is a divisor, so it must never
/// reach the exponent.
fn accept(delta: f64, temperature: f64, rng: &mut impl Rng) -> bool {
    if delta <= 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    rng.random::<f64>() <= (-delta / temperature).exp()
}

/// Linear cooling: a fixed step per sweep so the temperature lands at ~0 on
/// the final sweep.
fn cool(current: f64, initial: f64, nsweeps: usize) -> f64 {
    current - initial / nsweeps as f64
}

/// Derive one anchor per label at the label's attachment corner, the way
/// callers without marker geometry of their own seed the engine. This runs
/// before a state is built, never inside the optimization loop.
pub fn default_anchors(labels: &[Extent], radius: f64) -> Vec<Anchor> {
    labels
        .iter()
        .map(|label| Anchor::new(label.xmin, label.ymax, radius))
        .collect()
}

fn validate(
    state: &PlacementState,
    weights: &Weights,
    params: &AnnealParams,
) -> Result<(), PlacementError> {
    if state.labels.is_empty() {
        return Err(PlacementError::NoLabels);
    }
    if state.labels.len() != state.anchors.len() {
        return Err(PlacementError::CountMismatch {
            labels: state.labels.len(),
            anchors: state.anchors.len(),
        });
    }
    for (index, label) in state.labels.iter().enumerate() {
        if !label.is_well_formed() {
            return Err(PlacementError::DegenerateLabel { index });
        }
    }
    for (index, anchor) in state.anchors.iter().enumerate() {
        if !anchor.is_well_formed() {
            return Err(PlacementError::DegenerateAnchor { index });
        }
    }
    if let Some(bounds) = &state.bounds
        && !bounds.is_well_formed()
    {
        return Err(PlacementError::DegenerateBounds);
    }
    for (index, obstacle) in state.obstacles.iter().enumerate() {
        if !obstacle.is_well_formed() {
            return Err(PlacementError::DegenerateObstacle { index });
        }
    }

    for (name, value) in [
        ("anchor_distance", weights.anchor_distance),
        ("leader_intersection", weights.leader_intersection),
        ("label_overlap", weights.label_overlap),
        ("anchor_overlap", weights.anchor_overlap),
        ("orientation", weights.orientation),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(PlacementError::InvalidWeight { name, value });
        }
    }
    for (name, value) in [
        ("max_move", params.max_move),
        ("max_angle", params.max_angle),
        ("initial_temperature", params.initial_temperature),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlacementError::InvalidParam { name, value });
        }
    }
    Ok(())
}
