//! Data Transfer Objects for the API.
//!
//! Field names are camelCase on the wire.

use armory_domain::{Agent, Loadout, Weapon};
use armory_usecase::{HealthReport, Stats};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

// ============================================================================
// Query parameters
// ============================================================================

/// `GET /agents` query. Absent parameters mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentParams {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub search: String,
}

/// `GET /weapons` query. Absent parameters mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponParams {
    #[serde(default, rename = "type")]
    pub category: String,
    #[serde(default, deserialize_with = "cost_bound")]
    pub max_cost: i64,
    #[serde(default)]
    pub search: String,
}

/// `maxCost=` with no value is "no bound" (0); anything else must be an integer.
fn cost_bound<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| de::Error::custom(format!("invalid maxCost {:?}, expected an integer", raw)))
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub abilities: Vec<String>,
    pub image_url: String,
}

impl From<&Agent> for AgentResponse {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id().to_string(),
            name: agent.name().to_string(),
            role: agent.role().to_string(),
            description: agent.description().to_string(),
            abilities: agent.abilities().to_vec(),
            image_url: agent.image_url().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeaponResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub cost: u32,
    pub damage: u32,
    pub accuracy: u32,
    pub image_url: String,
}

impl From<&Weapon> for WeaponResponse {
    fn from(weapon: &Weapon) -> Self {
        Self {
            id: weapon.id().to_string(),
            name: weapon.name().to_string(),
            category: weapon.category().to_string(),
            cost: weapon.cost(),
            damage: weapon.damage(),
            accuracy: weapon.accuracy(),
            image_url: weapon.image_url().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAgentsResponse {
    pub agents: Vec<AgentResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWeaponsResponse {
    pub weapons: Vec<WeaponResponse>,
    pub total: usize,
}

// ============================================================================
// Loadouts
// ============================================================================

/// `POST /loadouts` body. Omitted fields default to "".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLoadoutRequest {
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub sidearm: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoadoutResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutResponse {
    pub id: i64,
    pub user_id: String,
    pub agent: String,
    pub primary: String,
    pub sidearm: String,
    pub created: DateTime<Utc>,
}

impl From<&Loadout> for LoadoutResponse {
    fn from(loadout: &Loadout) -> Self {
        Self {
            id: loadout.id().value(),
            user_id: loadout.owner().to_string(),
            agent: loadout.agent().to_string(),
            primary: loadout.primary().to_string(),
            sidearm: loadout.sidearm().to_string(),
            created: DateTime::<Utc>::from(loadout.created_at()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLoadoutsResponse {
    pub loadouts: Vec<LoadoutResponse>,
    pub total: usize,
}

// ============================================================================
// Health & stats
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status.to_string(),
            message: report.message.to_string(),
            timestamp: DateTime::<Utc>::from(report.timestamp),
            version: report.version.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_agents: usize,
    pub total_weapons: usize,
    pub total_loadouts: usize,
    pub popular_agent: String,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            total_agents: stats.agent_count,
            total_weapons: stats.weapon_count,
            total_loadouts: stats.loadout_count,
            popular_agent: stats.most_popular_agent.to_string(),
        }
    }
}
