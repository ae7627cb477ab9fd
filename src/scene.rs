//! Scene description consumed by the CLI: the caller-facing JSON form of a
//! placement problem. The core never reads files itself; this module is the
//! glue that turns a scene document into a [`PlacementState`] and the final
//! state back into a result document.

use serde::{Deserialize, Serialize};

use crate::config::{AnnealParams, Config, Weights};
use crate::placement::{
    Anchor, AnnealStats, DEFAULT_ANCHOR_RADIUS, Extent, Obstacle, PlacementState, default_anchors,
};

/// A placement problem as provided by the user.
///
/// Only `labels` is required. Missing anchors are derived from the labels'
/// attachment corners before the engine runs. `weights`/`params`, when
/// present, replace the corresponding config-file section wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub labels: Vec<Extent>,
    #[serde(default)]
    pub anchors: Vec<Anchor>,
    #[serde(default)]
    pub bounds: Option<Extent>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub weights: Option<Weights>,
    #[serde(default)]
    pub params: Option<AnnealParams>,
}

impl Scene {
    pub fn from_json(input: &str) -> anyhow::Result<Scene> {
        Ok(serde_json::from_str(input)?)
    }

    /// Resolve the scene against a loaded config: scene-level overrides win,
    /// and absent anchors are derived from the labels.
    pub fn resolve(self, config: &Config) -> (PlacementState, Weights, AnnealParams) {
        let weights = self.weights.unwrap_or(config.weights);
        let params = self.params.unwrap_or(config.params);
        let anchors = if self.anchors.is_empty() {
            default_anchors(&self.labels, DEFAULT_ANCHOR_RADIUS)
        } else {
            self.anchors
        };
        let state = PlacementState {
            labels: self.labels,
            anchors,
            bounds: self.bounds,
            obstacles: self.obstacles,
        };
        (state, weights, params)
    }
}

/// What the CLI writes back out: the final label boxes plus run counters.
#[derive(Debug, Serialize)]
pub struct PlacementReport {
    pub labels: Vec<Extent>,
    pub stats: AnnealStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scene_parses_with_defaults() {
        let scene = Scene::from_json(
            r#"{"labels": [{"xmin": 0.0, "ymin": 0.0, "xmax": 10.0, "ymax": 4.0}]}"#,
        )
        .expect("minimal scene");
        assert_eq!(scene.labels.len(), 1);
        assert!(scene.anchors.is_empty());
        assert!(scene.bounds.is_none());
        assert!(scene.obstacles.is_empty());
    }

    #[test]
    fn missing_anchors_are_derived_from_labels() {
        let scene = Scene::from_json(
            r#"{"labels": [{"xmin": 3.0, "ymin": 1.0, "xmax": 13.0, "ymax": 5.0}]}"#,
        )
        .expect("scene");
        let (state, _, _) = scene.resolve(&Config::default());
        assert_eq!(state.anchors.len(), 1);
        assert_eq!((state.anchors[0].x, state.anchors[0].y), (3.0, 5.0));
        assert_eq!(state.anchors[0].radius, DEFAULT_ANCHOR_RADIUS);
    }

    #[test]
    fn explicit_anchors_pass_through() {
        let scene = Scene::from_json(
            r#"{
                "labels": [{"xmin": 0.0, "ymin": 0.0, "xmax": 10.0, "ymax": 4.0}],
                "anchors": [{"x": -1.0, "y": 2.0, "radius": 1.5}]
            }"#,
        )
        .expect("scene");
        let (state, _, _) = scene.resolve(&Config::default());
        assert_eq!(state.anchors, vec![Anchor::new(-1.0, 2.0, 1.5)]);
    }

    #[test]
    fn obstacle_kinds_deserialize() {
        let scene = Scene::from_json(
            r#"{
                "labels": [{"xmin": 0.0, "ymin": 0.0, "xmax": 10.0, "ymax": 4.0}],
                "obstacles": [
                    {"kind": "rect", "xmin": 1.0, "ymin": 1.0, "xmax": 2.0, "ymax": 2.0},
                    {"kind": "circle", "x": 5.0, "y": 5.0, "radius": 2.0},
                    {"kind": "polygon", "points": [[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]]}
                ]
            }"#,
        )
        .expect("scene with obstacles");
        assert_eq!(scene.obstacles.len(), 3);
    }

    #[test]
    fn scene_overrides_beat_config() {
        let scene = Scene::from_json(
            r#"{
                "labels": [{"xmin": 0.0, "ymin": 0.0, "xmax": 10.0, "ymax": 4.0}],
                "params": {"max_move": 9.0, "max_angle": 0.25, "initial_temperature": 2.0}
            }"#,
        )
        .expect("scene");
        let (_, weights, params) = scene.resolve(&Config::default());
        assert_eq!(params.max_move, 9.0);
        assert_eq!(params.initial_temperature, 2.0);
        assert_eq!(weights, Weights::default());
    }
}
