use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEAM_UPS_PATH: &str = "data/teamups/teamups.json";

/// A pairwise team-up relation. Active in a roster iff both `anchor` and
/// `partner` are present; slot position and role are irrelevant. `label` and
/// `notes` are descriptive only and never affect scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamUp {
    pub anchor: String,
    pub partner: String,
    pub label: String,
    /// Positive integer weight, observed range 1-10. Higher = more impactful.
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeamUpsFile {
    team_ups: Vec<TeamUp>,
}

/// Load the team-up relation table in file order. Table order is the
/// tie-break order for the composer's greedy fill passes.
pub fn load_team_ups(path: impl AsRef<Path>) -> Result<Vec<TeamUp>, std::io::Error> {
    let raw = fs::read_to_string(path)?;
    let parsed: TeamUpsFile = serde_json::from_str(&raw).map_err(std::io::Error::other)?;
    Ok(parsed.team_ups)
}
