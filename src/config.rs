use serde::{Deserialize, Serialize};
use std::path::Path;

/// Energy-term tuning constants. All non-negative; fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Penalty per unit of distance between a label's attachment corner and
    /// its anchor center.
    pub anchor_distance: f64,
    /// Reserved legacy slot (leader-line crossings); no energy term reads it.
    pub leader_intersection: f64,
    /// Penalty per unit of label-label overlap area.
    pub label_overlap: f64,
    /// Penalty per unit of overlap area with a foreign anchor or an obstacle.
    pub anchor_overlap: f64,
    /// Reserved slot for a directional-preference penalty.
    pub orientation: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            anchor_distance: 0.2,
            leader_intersection: 1.0,
            label_overlap: 30.0,
            anchor_overlap: 30.0,
            orientation: 3.0,
        }
    }
}

/// Per-move magnitudes and the starting temperature. The sweep count is an
/// argument to the run itself, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealParams {
    /// A translation draws each offset from `[-max_move/2, +max_move/2]`.
    pub max_move: f64,
    /// A rotation draws its angle from `[-max_angle/2, +max_angle/2]` radians.
    pub max_angle: f64,
    pub initial_temperature: f64,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            max_move: 5.0,
            max_angle: 0.5,
            initial_temperature: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub weights: Weights,
    pub params: AnnealParams,
}

// Partial on-disk form: every field optional, merged over the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeightsFile {
    anchor_distance: Option<f64>,
    leader_intersection: Option<f64>,
    label_overlap: Option<f64>,
    anchor_overlap: Option<f64>,
    orientation: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnnealParamsFile {
    max_move: Option<f64>,
    max_angle: Option<f64>,
    initial_temperature: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    weights: Option<WeightsFile>,
    params: Option<AnnealParamsFile>,
}

fn merge(parsed: ConfigFile, mut config: Config) -> Config {
    if let Some(weights) = parsed.weights {
        if let Some(v) = weights.anchor_distance {
            config.weights.anchor_distance = v;
        }
        if let Some(v) = weights.leader_intersection {
            config.weights.leader_intersection = v;
        }
        if let Some(v) = weights.label_overlap {
            config.weights.label_overlap = v;
        }
        if let Some(v) = weights.anchor_overlap {
            config.weights.anchor_overlap = v;
        }
        if let Some(v) = weights.orientation {
            config.weights.orientation = v;
        }
    }
    if let Some(params) = parsed.params {
        if let Some(v) = params.max_move {
            config.params.max_move = v;
        }
        if let Some(v) = params.max_angle {
            config.params.max_angle = v;
        }
        if let Some(v) = params.initial_temperature {
            config.params.initial_temperature = v;
        }
    }
    config
}

/// Load a JSON config file, falling back to defaults for anything missing.
/// No path means all-defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;
    Ok(merge(parsed, config))
}
