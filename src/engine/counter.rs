//! Counter scoring: how well one hero's tags answer an enemy roster's
//! aggregate tag profile, with diminishing returns for answers the rest of
//! the friendly team already saturates.

use std::collections::HashMap;

use crate::data::data_registry::HeroRegistry;

/// Score `candidate` as a hypothetical addition against `enemy_roster`.
///
/// For each enemy tag occurrence answered by one of the candidate's tags, the
/// contribution equals the enemy tag count; it is halved when the friendly
/// roster (excluding the candidate) already fields that answering tag twice
/// or more. Contributions accumulate across all enemy tags and all matching
/// candidate tags with no cap. An empty or tagless enemy roster scores 0.
pub fn counter_score(
    registry: &HeroRegistry,
    candidate: &str,
    friendly_roster: &[String],
    enemy_roster: &[String],
) -> f64 {
    let enemy_tags = tag_histogram(registry, enemy_roster.iter(), None);
    if enemy_tags.is_empty() {
        return 0.0;
    }

    let Some(hero) = registry.hero(candidate) else {
        return 0.0;
    };

    // The candidate is being evaluated as an addition/replacement, not as
    // already present, so its own copies are excluded from the friendly tally.
    let friendly_tags = tag_histogram(registry, friendly_roster.iter(), Some(candidate));

    let mut score = 0.0;
    for (enemy_tag, enemy_count) in &enemy_tags {
        let Some(responses) = registry.counter_responses().responses_for(enemy_tag) else {
            continue;
        };
        for tag in &hero.tags {
            if !responses.contains(tag) {
                continue;
            }
            let mut contribution = *enemy_count as f64;
            if friendly_tags.get(tag.as_str()).copied().unwrap_or(0) >= 2 {
                contribution /= 2.0;
            }
            score += contribution;
        }
    }
    score
}

fn tag_histogram<'a>(
    registry: &'a HeroRegistry,
    roster: impl Iterator<Item = &'a String>,
    exclude: Option<&str>,
) -> HashMap<&'a str, usize> {
    let mut histogram: HashMap<&str, usize> = HashMap::new();
    for id in roster {
        if exclude.is_some_and(|excluded| excluded == id.as_str()) {
            continue;
        }
        let Some(hero) = registry.hero(id) else {
            continue;
        };
        for tag in &hero.tags {
            *histogram.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    histogram
}
