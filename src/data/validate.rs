//! Structural validation of the curated datasets. Parses the raw JSON rather
//! than the typed structs so a single bad record is reported as a diagnostic
//! instead of failing the whole load.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;

use serde_json::Value;

pub const ROLE_ENUM: &[&str] = &["vanguard", "duelist", "strategist"];

/// Team-up weights outside this range are flagged; the scoring model was
/// tuned against weights in 1-10.
pub const TEAM_UP_SCORE_MIN: u64 = 1;
pub const TEAM_UP_SCORE_MAX: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate the hero, team-up, and counter-response datasets together.
/// Cross-table checks (team-up members exist, response tags are grantable)
/// need all three, so they are always validated as a unit.
pub fn validate_datasets(
    heroes_path: &str,
    team_ups_path: &str,
    counters_path: &str,
) -> Result<ValidationReport, String> {
    let heroes = read_json(heroes_path)?;
    let team_ups = read_json(team_ups_path)?;
    let counters = read_json(counters_path)?;

    let mut report = ValidationReport::default();
    let hero_tags = validate_heroes(&heroes, &mut report);
    validate_team_ups(&team_ups, &hero_tags, &mut report);
    validate_counters(&counters, &hero_tags, &mut report);
    Ok(report)
}

fn read_json(path: &str) -> Result<Value, String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("unable to read '{path}': {err}"))?;
    serde_json::from_str(&raw).map_err(|err| format!("unable to parse json '{path}': {err}"))
}

/// Returns hero id -> declared tag set for the cross-table checks.
fn validate_heroes(
    payload: &Value,
    report: &mut ValidationReport,
) -> HashMap<String, HashSet<String>> {
    let mut hero_tags: HashMap<String, HashSet<String>> = HashMap::new();

    let Some(entries) = payload.get("heroes").and_then(Value::as_array) else {
        report.push(
            ValidationSeverity::Error,
            "heroes",
            "missing top-level 'heroes' array",
        );
        return hero_tags;
    };

    if entries.is_empty() {
        report.push(ValidationSeverity::Error, "heroes", "hero list is empty");
    }

    for (index, entry) in entries.iter().enumerate() {
        let context = entry
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.trim().is_empty())
            .map(|id| format!("heroes[{id}]"))
            .unwrap_or_else(|| format!("heroes[#{index}]"));

        let id = entry.get("id").and_then(Value::as_str).unwrap_or("");
        if id.trim().is_empty() {
            report.push(ValidationSeverity::Error, &context, "missing or empty 'id'");
        } else if hero_tags.contains_key(id) {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("duplicate hero id '{id}'"),
            );
        }

        if entry
            .get("name")
            .and_then(Value::as_str)
            .map_or(true, |name| name.trim().is_empty())
        {
            report.push(ValidationSeverity::Warning, &context, "missing or empty 'name'");
        }

        match entry.get("role").and_then(Value::as_str) {
            Some(role) if ROLE_ENUM.contains(&role) => {}
            Some(role) => report.push(
                ValidationSeverity::Error,
                &context,
                format!("unknown role '{role}' (expected one of {ROLE_ENUM:?})"),
            ),
            None => report.push(ValidationSeverity::Error, &context, "missing 'role'"),
        }

        let mut tags: HashSet<String> = HashSet::new();
        match entry.get("tags").and_then(Value::as_array) {
            Some(raw_tags) => {
                for tag in raw_tags {
                    match tag.as_str() {
                        Some(tag) if !tag.trim().is_empty() => {
                            if !tags.insert(tag.to_string()) {
                                report.push(
                                    ValidationSeverity::Warning,
                                    &context,
                                    format!("duplicate tag '{tag}'"),
                                );
                            }
                        }
                        _ => report.push(
                            ValidationSeverity::Error,
                            &context,
                            "tags must be non-empty strings",
                        ),
                    }
                }
                if raw_tags.is_empty() {
                    report.push(ValidationSeverity::Info, &context, "hero has no tags");
                }
            }
            None => report.push(ValidationSeverity::Info, &context, "hero has no tags"),
        }

        if !id.trim().is_empty() {
            hero_tags.entry(id.to_string()).or_insert(tags);
        }
    }

    hero_tags
}

fn validate_team_ups(
    payload: &Value,
    hero_tags: &HashMap<String, HashSet<String>>,
    report: &mut ValidationReport,
) {
    let Some(entries) = payload.get("team_ups").and_then(Value::as_array) else {
        report.push(
            ValidationSeverity::Error,
            "team_ups",
            "missing top-level 'team_ups' array",
        );
        return;
    };

    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let label = entry.get("label").and_then(Value::as_str).unwrap_or("");
        let context = if label.trim().is_empty() {
            format!("team_ups[#{index}]")
        } else {
            format!("team_ups[{label}]")
        };

        if label.trim().is_empty() {
            report.push(ValidationSeverity::Warning, &context, "missing or empty 'label'");
        }

        let anchor = entry.get("anchor").and_then(Value::as_str).unwrap_or("");
        let partner = entry.get("partner").and_then(Value::as_str).unwrap_or("");
        for (field, id) in [("anchor", anchor), ("partner", partner)] {
            if id.trim().is_empty() {
                report.push(
                    ValidationSeverity::Error,
                    &context,
                    format!("missing or empty '{field}'"),
                );
            } else if !hero_tags.contains_key(id) {
                report.push(
                    ValidationSeverity::Error,
                    &context,
                    format!("{field} '{id}' is not a known hero"),
                );
            }
        }
        if !anchor.is_empty() && anchor == partner {
            report.push(
                ValidationSeverity::Error,
                &context,
                "anchor and partner are the same hero",
            );
        }

        match entry.get("score").and_then(Value::as_u64) {
            Some(score) if (TEAM_UP_SCORE_MIN..=TEAM_UP_SCORE_MAX).contains(&score) => {}
            Some(score) => report.push(
                ValidationSeverity::Warning,
                &context,
                format!("score {score} outside expected range {TEAM_UP_SCORE_MIN}-{TEAM_UP_SCORE_MAX}"),
            ),
            None => report.push(
                ValidationSeverity::Error,
                &context,
                "missing or non-positive-integer 'score'",
            ),
        }

        if !anchor.is_empty() && !partner.is_empty() {
            let pair = (anchor.to_string(), partner.to_string());
            if !seen_pairs.insert(pair) {
                report.push(
                    ValidationSeverity::Warning,
                    &context,
                    format!("duplicate relation ({anchor}, {partner})"),
                );
            }
        }
    }
}

fn validate_counters(
    payload: &Value,
    hero_tags: &HashMap<String, HashSet<String>>,
    report: &mut ValidationReport,
) {
    let Some(entries) = payload.get("responses").and_then(Value::as_object) else {
        report.push(
            ValidationSeverity::Error,
            "counters",
            "missing top-level 'responses' object",
        );
        return;
    };

    let granted_tags: HashSet<&str> = hero_tags
        .values()
        .flat_map(|tags| tags.iter().map(String::as_str))
        .collect();

    for (opponent_tag, answers) in entries {
        let context = format!("counters[{opponent_tag}]");

        if !granted_tags.contains(opponent_tag.as_str()) {
            report.push(
                ValidationSeverity::Info,
                &context,
                format!("opponent tag '{opponent_tag}' is not granted by any hero"),
            );
        }

        let Some(answers) = answers.as_array() else {
            report.push(
                ValidationSeverity::Error,
                &context,
                "response set must be an array of tags",
            );
            continue;
        };
        if answers.is_empty() {
            report.push(ValidationSeverity::Warning, &context, "empty response set");
        }
        for answer in answers {
            match answer.as_str() {
                Some(tag) if !tag.trim().is_empty() => {
                    if !granted_tags.contains(tag) {
                        report.push(
                            ValidationSeverity::Warning,
                            &context,
                            format!("response tag '{tag}' is not granted by any hero"),
                        );
                    }
                }
                _ => report.push(
                    ValidationSeverity::Error,
                    &context,
                    "response tags must be non-empty strings",
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "shotcaller-validate-{name}-{}.json",
            std::process::id()
        ));
        fs::write(&path, body).expect("fixture should be written");
        path
    }

    #[test]
    fn clean_synthetic_dataset_passes() {
        let heroes = write_temp(
            "heroes-ok",
            r#"{"heroes":[
                {"id":"a","name":"A","role":"vanguard","tags":["frontline"]},
                {"id":"b","name":"B","role":"duelist","tags":["dive"]}
            ]}"#,
        );
        let team_ups = write_temp(
            "teamups-ok",
            r#"{"team_ups":[{"anchor":"a","partner":"b","label":"ab","score":5}]}"#,
        );
        let counters = write_temp("counters-ok", r#"{"responses":{"dive":["frontline"]}}"#);

        let report = validate_datasets(
            heroes.to_str().unwrap(),
            team_ups.to_str().unwrap(),
            counters.to_str().unwrap(),
        )
        .expect("datasets should parse");
        assert!(!report.has_errors(), "unexpected errors: {:?}", report.diagnostics);

        for path in [heroes, team_ups, counters] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn unknown_team_up_member_is_an_error() {
        let heroes = write_temp(
            "heroes-missing",
            r#"{"heroes":[{"id":"a","name":"A","role":"vanguard","tags":[]}]}"#,
        );
        let team_ups = write_temp(
            "teamups-missing",
            r#"{"team_ups":[{"anchor":"a","partner":"ghost","label":"x","score":5}]}"#,
        );
        let counters = write_temp("counters-missing", r#"{"responses":{}}"#);

        let report = validate_datasets(
            heroes.to_str().unwrap(),
            team_ups.to_str().unwrap(),
            counters.to_str().unwrap(),
        )
        .expect("datasets should parse");
        assert!(report.has_errors());
        assert!(report
            .diagnostics
            .iter()
            .any(|diag| diag.message.contains("'ghost' is not a known hero")));

        for path in [heroes, team_ups, counters] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn duplicate_hero_id_and_bad_role_are_errors() {
        let heroes = write_temp(
            "heroes-dupe",
            r#"{"heroes":[
                {"id":"a","name":"A","role":"vanguard","tags":[]},
                {"id":"a","name":"A2","role":"sniper","tags":[]}
            ]}"#,
        );
        let team_ups = write_temp("teamups-dupe", r#"{"team_ups":[]}"#);
        let counters = write_temp("counters-dupe", r#"{"responses":{}}"#);

        let report = validate_datasets(
            heroes.to_str().unwrap(),
            team_ups.to_str().unwrap(),
            counters.to_str().unwrap(),
        )
        .expect("datasets should parse");
        assert!(report
            .diagnostics
            .iter()
            .any(|diag| diag.message.contains("duplicate hero id")));
        assert!(report
            .diagnostics
            .iter()
            .any(|diag| diag.message.contains("unknown role 'sniper'")));

        for path in [heroes, team_ups, counters] {
            let _ = fs::remove_file(path);
        }
    }
}
