use keyfall_core::{HandFilter, Visualization};
use serde::Deserialize;

/// Display settings pushed by the host as JSON, e.g.
/// `{"pps": 150, "visualization": "sheet", "hand": "left", "showParticles": true}`.
/// Missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualizerSettings {
    pub pps: f64,
    #[serde(with = "visualization_id")]
    pub visualization: Visualization,
    pub hand: HandFilter,
    pub show_particles: bool,
    /// Narrow the keyboard to the song's note range instead of all 88 keys.
    pub fit_keyboard: bool,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            pps: 150.0,
            visualization: Visualization::FallingNotes,
            hand: HandFilter::Both,
            show_particles: true,
            fit_keyboard: false,
        }
    }
}

impl VisualizerSettings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

mod visualization_id {
    use keyfall_core::Visualization;
    use serde::{de::Error, Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Visualization, D::Error> {
        let id = String::deserialize(d)?;
        id.parse().map_err(D::Error::custom)
    }
}
