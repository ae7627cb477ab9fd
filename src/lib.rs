#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod placement;
pub mod scene;

pub use config::{AnnealParams, Config, Weights, load_config};
pub use placement::{
    Anchor, AnnealStats, DEFAULT_ANCHOR_RADIUS, Extent, Obstacle, PlacementError, PlacementState,
    anneal, anneal_while, default_anchors,
};

#[cfg(feature = "cli")]
pub use cli::run;
