use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_COUNTER_RESPONSES_PATH: &str = "data/counters/counter_responses.json";

/// Mapping from an opponent capability tag to the friendly tags considered an
/// effective answer to it. Hand-enumerated; never auto-derived or mirrored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterResponses {
    responses: HashMap<String, HashSet<String>>,
}

impl CounterResponses {
    pub fn new(responses: HashMap<String, HashSet<String>>) -> Self {
        Self { responses }
    }

    pub fn responses_for(&self, opponent_tag: &str) -> Option<&HashSet<String>> {
        self.responses.get(opponent_tag)
    }

    pub fn opponent_tags(&self) -> impl Iterator<Item = &String> {
        self.responses.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CounterResponsesFile {
    responses: HashMap<String, Vec<String>>,
}

pub fn load_counter_responses(path: impl AsRef<Path>) -> Result<CounterResponses, std::io::Error> {
    let raw = fs::read_to_string(path)?;
    let parsed: CounterResponsesFile = serde_json::from_str(&raw).map_err(std::io::Error::other)?;
    Ok(CounterResponses::new(
        parsed
            .responses
            .into_iter()
            .map(|(tag, answers)| (tag, answers.into_iter().collect()))
            .collect(),
    ))
}
