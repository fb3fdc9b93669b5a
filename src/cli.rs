use std::env;
use std::sync::Arc;

use crate::data::counters::DEFAULT_COUNTER_RESPONSES_PATH;
use crate::data::data_registry::HeroRegistry;
use crate::data::hero::DEFAULT_CANONICAL_HEROES_PATH;
use crate::data::teamup::DEFAULT_TEAM_UPS_PATH;
use crate::data::validate::validate_datasets;
use crate::engine::composer::compose_ideal_team;
use crate::engine::evaluator::evaluate;
use crate::engine::recommend::{
    recommend_replacements, recommend_replacements_with_counters, DEFAULT_COUNTER_WEIGHT,
    DEFAULT_RECOMMENDATION_LIMIT,
};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Evaluate,
    Recommend,
    Compose,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("evaluate") => Some(Command::Evaluate),
        Some("recommend") => Some(Command::Recommend),
        Some("compose") => Some(Command::Compose),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Evaluate) => handle_evaluate(args),
        Some(Command::Recommend) => handle_recommend(args),
        Some(Command::Compose) => handle_compose(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: shotcaller <serve|evaluate|recommend|compose|validate>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("SHOTCALLER_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_evaluate(args: &[String]) -> i32 {
    let Some(roster_arg) = args.get(2) else {
        eprintln!("usage: shotcaller evaluate <roster> [--table]  (roster: comma-separated hero ids, '_' for empty)");
        return 2;
    };
    let as_table = args.iter().any(|arg| arg == "--table");

    let registry = match load_registry() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let roster: Vec<String> = parse_roster(roster_arg).into_iter().flatten().collect();
    let evaluation = evaluate(&registry, &roster);

    if as_table {
        println!("score\tteam_ups\trole_bonus\tvanguard\tduelist\tstrategist");
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            evaluation.score,
            evaluation.active_team_ups.len(),
            evaluation.role_bonus,
            evaluation.role_counts.vanguard,
            evaluation.role_counts.duelist,
            evaluation.role_counts.strategist
        );
        0
    } else {
        print_json(&evaluation)
    }
}

fn handle_recommend(args: &[String]) -> i32 {
    let (Some(roster_arg), Some(slot_arg)) = (args.get(2), args.get(3)) else {
        eprintln!(
            "usage: shotcaller recommend <roster> <slot> [enemy-roster|-] [limit]  (roster: comma-separated hero ids, '_' for empty)"
        );
        return 2;
    };
    let Some(slot) = slot_arg.parse::<usize>().ok().filter(|slot| *slot < crate::engine::TEAM_SIZE)
    else {
        eprintln!("invalid slot '{slot_arg}': expected 0-5");
        return 2;
    };
    let enemy = args
        .get(4)
        .filter(|arg| arg.as_str() != "-")
        .map(|arg| parse_roster(arg).into_iter().flatten().collect::<Vec<String>>());
    let limit = parse_usize_arg(args.get(5), "limit", DEFAULT_RECOMMENDATION_LIMIT);

    let registry = match load_registry() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let roster = parse_roster(roster_arg);
    let ranked = match &enemy {
        Some(enemy) => recommend_replacements_with_counters(
            &registry,
            &roster,
            slot,
            enemy,
            limit,
            DEFAULT_COUNTER_WEIGHT,
        ),
        None => recommend_replacements(&registry, &roster, slot, limit),
    };
    print_json(&ranked)
}

fn handle_compose(args: &[String]) -> i32 {
    let partial = args.get(2).map(|arg| parse_roster(arg)).unwrap_or_default();

    let registry = match load_registry() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let composed = compose_ideal_team(&registry, &partial);
    print_json(&composed)
}

fn handle_validate(args: &[String]) -> i32 {
    let heroes_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_CANONICAL_HEROES_PATH);
    let team_ups_path = args
        .get(3)
        .map(String::as_str)
        .unwrap_or(DEFAULT_TEAM_UPS_PATH);
    let counters_path = args
        .get(4)
        .map(String::as_str)
        .unwrap_or(DEFAULT_COUNTER_RESPONSES_PATH);

    match validate_datasets(heroes_path, team_ups_path, counters_path) {
        Ok(report) if !report.has_errors() => {
            println!("validation passed: {} diagnostic(s)", report.diagnostics.len());
            for diagnostic in &report.diagnostics {
                println!("- {diagnostic}");
            }
            0
        }
        Ok(report) => {
            eprintln!("validation failed: {} diagnostic(s)", report.diagnostics.len());
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            1
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

/// Parse a comma-separated roster; `_` or a blank entry marks an empty slot.
fn parse_roster(raw: &str) -> Vec<Option<String>> {
    raw.split(',')
        .map(str::trim)
        .map(|id| {
            if id.is_empty() || id == "_" {
                None
            } else {
                Some(id.to_string())
            }
        })
        .collect()
}

fn parse_usize_arg(raw: Option<&String>, name: &str, default: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn load_registry() -> Result<Arc<HeroRegistry>, i32> {
    HeroRegistry::load().map_err(|err| {
        eprintln!("failed to load hero registry: {err}");
        1
    })
}

fn print_json(payload: &impl serde::Serialize) -> i32 {
    match serde_json::to_string_pretty(payload) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize result: {err}");
            1
        }
    }
}
