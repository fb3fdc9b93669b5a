//! Rayon thread pool configuration and the all-slots recommendation sweep.
//!
//! Every per-slot computation is a pure engine call over the read-only
//! registry, so slots can be scanned concurrently. Use [WorkerPool::install]
//! to bound the thread count, or rely on Rayon's default (all CPU cores).

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;

use crate::data::data_registry::HeroRegistry;
use crate::engine::composer::TEAM_SIZE;
use crate::engine::recommend::{
    recommend_replacements, recommend_replacements_with_counters, RankedCandidate,
};

/// Configures how many worker threads are used for the sweep.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self { workers: 0 }
    }
}

impl WorkerPool {
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a thread pool with this worker count. If workers is
    /// 0, uses the global Rayon pool; otherwise builds a temporary pool.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            f()
        } else {
            match ThreadPoolBuilder::new().num_threads(self.workers).build() {
                Ok(pool) => pool.install(f),
                Err(err) => {
                    eprintln!("parallel: falling back to global pool: {err}");
                    f()
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRecommendations {
    pub slot: usize,
    pub candidates: Vec<RankedCandidate>,
}

/// Rank replacements for every slot of the roster in parallel. Treating each
/// slot as the editable one in turn gives the same per-slot rankings as six
/// sequential calls; the result is ordered by slot index.
pub fn scan_all_slots(
    registry: &HeroRegistry,
    roster: &[Option<String>],
    enemy_roster: Option<&[String]>,
    limit: usize,
    counter_weight: f64,
) -> Vec<SlotRecommendations> {
    (0..TEAM_SIZE)
        .into_par_iter()
        .map(|slot| {
            let candidates = match enemy_roster {
                Some(enemy) => recommend_replacements_with_counters(
                    registry,
                    roster,
                    slot,
                    enemy,
                    limit,
                    counter_weight,
                ),
                None => recommend_replacements(registry, roster, slot, limit),
            };
            SlotRecommendations { slot, candidates }
        })
        .collect()
}
