// The two Monte Carlo perturbation moves. Both mutate the label in place and
// hand back the pre-move box so a rejected move can be restored verbatim.

use rand::Rng;

use super::types::{Anchor, Extent};

pub(crate) fn pick_label(rng: &mut impl Rng, count: usize) -> usize {
    rng.random_range(0..count)
}

/// Rigid shift by offsets drawn uniformly from `[-max_move/2, +max_move/2]`.
pub(crate) fn translate(
    labels: &mut [Extent],
    index: usize,
    max_move: f64,
    rng: &mut impl Rng,
) -> Extent {
    let dx = (rng.random::<f64>() - 0.5) * max_move;
    let dy = (rng.random::<f64>() - 0.5) * max_move;
    translate_by(labels, index, dx, dy)
}

pub(crate) fn translate_by(labels: &mut [Extent], index: usize, dx: f64, dy: f64) -> Extent {
    let snapshot = labels[index];
    labels[index].translate(dx, dy);
    snapshot
}

/// Orbit the label around its anchor by an angle drawn uniformly from
/// `[-max_angle/2, +max_angle/2]` radians.
pub(crate) fn rotate(
    labels: &mut [Extent],
    anchor: &Anchor,
    index: usize,
    max_angle: f64,
    rng: &mut impl Rng,
) -> Extent {
    let angle = (rng.random::<f64>() - 0.5) * max_angle;
    rotate_by(labels, anchor, index, angle)
}

/// The box keeps its axis-aligned width and height; only the min corner is
/// rotated about the anchor center and the max corner is recomputed from it.
/// This is deliberately not a true rotation; the orbit-with-fixed-size
/// behavior is part of the engine's contract and must not be "corrected".
pub(crate) fn rotate_by(
    labels: &mut [Extent],
    anchor: &Anchor,
    index: usize,
    angle: f64,
) -> Extent {
    let snapshot = labels[index];
    let (sin, cos) = angle.sin_cos();

    let label = &mut labels[index];
    let width = label.width();
    let height = label.height();

    // Relative to the anchor at the origin.
    let x0 = label.xmin - anchor.x;
    let y0 = label.ymin - anchor.y;
    let xr = x0 * cos - y0 * sin;
    let yr = x0 * sin + y0 * cos;

    label.xmin = xr + anchor.x;
    label.ymin = yr + anchor.y;
    label.xmax = label.xmin + width;
    label.ymax = label.ymin + height;

    snapshot
}

pub(crate) fn restore(labels: &mut [Extent], index: usize, snapshot: Extent) {
    labels[index] = snapshot;
}
