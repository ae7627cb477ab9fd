use thiserror::Error;

/// Caller-contract violations, all detected once when a run starts.
///
/// The optimization itself is total: every move produces finite numbers as
/// long as the inputs were finite. Validation therefore happens up front instead of
/// letting a NaN box poison the energy sums mid-run.
#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("label/anchor count mismatch: {labels} labels but {anchors} anchors")]
    CountMismatch { labels: usize, anchors: usize },

    #[error("placement state has no labels")]
    NoLabels,

    #[error("label {index} has a degenerate box (non-finite or inverted corners)")]
    DegenerateLabel { index: usize },

    #[error("anchor {index} has non-finite coordinates or a negative radius")]
    DegenerateAnchor { index: usize },

    #[error("bounds box is degenerate (non-finite or inverted corners)")]
    DegenerateBounds,

    #[error("obstacle {index} has invalid geometry")]
    DegenerateObstacle { index: usize },

    #[error("weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("parameter `{name}` must be finite and positive, got {value}")]
    InvalidParam { name: &'static str, value: f64 },
}
