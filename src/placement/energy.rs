// Energy (cost) evaluation for one label placement. Pure reads of the shared
// state; all mutation happens in the move generator.

use crate::config::Weights;

use super::types::PlacementState;

/// Cost of label `index`'s current placement against all other labels, all
/// anchors, and all obstacles. Non-negative; zero is ideal; lower is better.
///
/// The label-label and label-anchor scans are O(N) per call, so a full sweep
/// is O(N²). Fine at tens to low hundreds of labels; callers with thousands
/// of labels are expected to pre-filter by proximity before building the
/// state.
pub(crate) fn energy(state: &PlacementState, weights: &Weights, index: usize) -> f64 {
    let label = &state.labels[index];
    let anchor = &state.anchors[index];

    // Leader length: distance from the attachment corner (xmin, ymax), the
    // bottom-left of the box in y-down coordinates, to the anchor center.
    let dx = label.xmin - anchor.x;
    let dy = anchor.y - label.ymax;
    let mut ener = (dx * dx + dy * dy).sqrt() * weights.anchor_distance;

    for j in 0..state.labels.len() {
        if j == index {
            continue;
        }

        let other = &state.labels[j];
        if label.intersects(other) {
            ener += label.intersection_area(other) * weights.label_overlap;
        }

        // A label must not cover a different point's marker.
        let other_anchor = &state.anchors[j];
        if other_anchor.intersects_extent(label) {
            ener += other_anchor.extent().intersection_area(label) * weights.anchor_overlap;
        }
    }

    for obstacle in &state.obstacles {
        let rough = obstacle.extent().intersection_area(label);
        if rough > 0.0 && obstacle.intersects_extent(label) {
            ener += rough * weights.anchor_overlap;
        }
    }

    // `weights.orientation` is a reserved slot for a directional-preference
    // term (e.g. favoring above-right placements); no term reads it yet.
    // Likewise `weights.leader_intersection` is carried for config
    // compatibility only.

    ener
}
