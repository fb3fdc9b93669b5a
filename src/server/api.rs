use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::data_registry::HeroRegistry;
use crate::data::hero::Role;
use crate::data::registry::{load_registry as load_dataset_registry, DEFAULT_REGISTRY_PATH};
use crate::engine::composer::{compose_ideal_team, TEAM_SIZE};
use crate::engine::evaluator::{evaluate, Evaluation};
use crate::engine::recommend::{
    recommend_replacements, recommend_replacements_with_counters, RankedCandidate,
    DEFAULT_COUNTER_WEIGHT, DEFAULT_RECOMMENDATION_LIMIT,
};
use crate::parallel::{scan_all_slots, SlotRecommendations};

const MAX_LIMIT: usize = 25;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationErrorResponse {
    fn new(errors: Vec<ValidationIssue>) -> Self {
        Self {
            status: "error",
            message: "Validation failed",
            errors,
        }
    }
}

#[derive(Debug)]
pub enum EnginePayloadError {
    Parse(serde_json::Error),
    Validation(ValidationErrorResponse),
    Registry(std::io::Error),
}

impl fmt::Display for EnginePayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(_) => write!(f, "invalid engine request"),
            Self::Registry(err) => write!(f, "registry unavailable: {err}"),
        }
    }
}

impl std::error::Error for EnginePayloadError {}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "shotcaller-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Parse the `role=` query filter, if any.
fn parse_role_filter(path: &str) -> Option<Role> {
    let query = path.split('?').nth(1).unwrap_or("");
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("role"))
        .and_then(|(_, value)| Role::parse(value))
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroListItem {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub tags: Vec<String>,
}

pub fn heroes_payload(path: &str) -> Result<String, EnginePayloadError> {
    let registry = load_registry()?;
    let role_filter = parse_role_filter(path);
    let list: Vec<HeroListItem> = registry
        .heroes()
        .iter()
        .filter(|hero| role_filter.map_or(true, |role| hero.role == role))
        .map(|hero| HeroListItem {
            id: hero.id.clone(),
            name: hero.name.clone(),
            role: hero.role,
            tags: hero.tags.clone(),
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "heroes": list }))
        .map_err(EnginePayloadError::Parse)
}

pub fn team_ups_payload() -> Result<String, EnginePayloadError> {
    let registry = load_registry()?;
    serde_json::to_string_pretty(&serde_json::json!({ "team_ups": registry.team_ups() }))
        .map_err(EnginePayloadError::Parse)
}

pub fn data_version_payload() -> Result<String, EnginePayloadError> {
    let datasets =
        load_dataset_registry(DEFAULT_REGISTRY_PATH).map_err(EnginePayloadError::Registry)?;
    serde_json::to_string_pretty(&serde_json::json!({ "datasets": datasets }))
        .map_err(EnginePayloadError::Parse)
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub roster: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub evaluation: Evaluation,
}

pub fn evaluate_payload(body: &str) -> Result<String, EnginePayloadError> {
    let request: EvaluateRequest = serde_json::from_str(body).map_err(EnginePayloadError::Parse)?;
    let registry = load_registry()?;
    let response = EvaluateResponse {
        status: "ok",
        engine: "synergy_v2",
        evaluation: evaluate(&registry, &request.roster),
    };
    serde_json::to_string_pretty(&response).map_err(EnginePayloadError::Parse)
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub roster: Vec<Option<String>>,
    pub slot: usize,
    #[serde(default)]
    pub enemy_roster: Option<Vec<String>>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub counter_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub slot: usize,
    pub candidates: Vec<RankedCandidate>,
}

pub fn recommend_payload(body: &str) -> Result<String, EnginePayloadError> {
    let request: RecommendRequest = serde_json::from_str(body).map_err(EnginePayloadError::Parse)?;

    let mut errors = Vec::new();
    if request.slot >= TEAM_SIZE {
        errors.push(ValidationIssue {
            field: "slot",
            messages: vec![format!("slot must be 0-{}", TEAM_SIZE - 1)],
        });
    }
    let limit = request.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    if limit == 0 || limit > MAX_LIMIT {
        errors.push(ValidationIssue {
            field: "limit",
            messages: vec![format!("limit must be 1-{MAX_LIMIT}")],
        });
    }
    if !errors.is_empty() {
        return Err(EnginePayloadError::Validation(ValidationErrorResponse::new(errors)));
    }

    let registry = load_registry()?;
    let counter_weight = request.counter_weight.unwrap_or(DEFAULT_COUNTER_WEIGHT);
    let candidates = match &request.enemy_roster {
        Some(enemy) => recommend_replacements_with_counters(
            &registry,
            &request.roster,
            request.slot,
            enemy,
            limit,
            counter_weight,
        ),
        None => recommend_replacements(&registry, &request.roster, request.slot, limit),
    };
    let response = RecommendResponse {
        status: "ok",
        engine: "synergy_v2",
        slot: request.slot,
        candidates,
    };
    serde_json::to_string_pretty(&response).map_err(EnginePayloadError::Parse)
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub roster: Vec<Option<String>>,
    #[serde(default)]
    pub enemy_roster: Option<Vec<String>>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub counter_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub slots: Vec<SlotRecommendations>,
}

pub fn scan_payload(body: &str) -> Result<String, EnginePayloadError> {
    let request: ScanRequest = serde_json::from_str(body).map_err(EnginePayloadError::Parse)?;

    let limit = request.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    if limit == 0 || limit > MAX_LIMIT {
        return Err(EnginePayloadError::Validation(ValidationErrorResponse::new(vec![
            ValidationIssue {
                field: "limit",
                messages: vec![format!("limit must be 1-{MAX_LIMIT}")],
            },
        ])));
    }

    let registry = load_registry()?;
    let counter_weight = request.counter_weight.unwrap_or(DEFAULT_COUNTER_WEIGHT);
    let slots = scan_all_slots(
        &registry,
        &request.roster,
        request.enemy_roster.as_deref(),
        limit,
        counter_weight,
    );
    let response = ScanResponse {
        status: "ok",
        engine: "synergy_v2",
        slots,
    };
    serde_json::to_string_pretty(&response).map_err(EnginePayloadError::Parse)
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComposeRequest {
    #[serde(default)]
    pub roster: Vec<Option<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposeResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub roster: Vec<Option<String>>,
    pub evaluation: Evaluation,
}

pub fn compose_payload(body: &str) -> Result<String, EnginePayloadError> {
    let request: ComposeRequest = serde_json::from_str(body).map_err(EnginePayloadError::Parse)?;
    let registry = load_registry()?;
    let composed = compose_ideal_team(&registry, &request.roster);
    let response = ComposeResponse {
        status: "ok",
        engine: "synergy_v2",
        roster: composed.roster,
        evaluation: composed.evaluation,
    };
    serde_json::to_string_pretty(&response).map_err(EnginePayloadError::Parse)
}

fn load_registry() -> Result<Arc<HeroRegistry>, EnginePayloadError> {
    HeroRegistry::load().map_err(EnginePayloadError::Registry)
}
