//! Headless game runner
//!
//! Plays one seeded game to the end with a simple advisor choosing policies,
//! printing each turn's briefing or the final state as JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use miranda::content::blocs::bloc_definition;
use miranda::content::endings::{ending_data, EndingId};
use miranda::content::milestones::MILESTONES;
use miranda::content::policies::get_policy;
use miranda::core::config::{get_difficulty_config, load_difficulty_config};
use miranda::core::error::Result;
use miranda::core::types::{BlocId, Difficulty};
use miranda::engine::systems::endings::compose_dispatch;
use miranda::engine::systems::milestones::get_condition_progress;
use miranda::engine::systems::turn::effective_cost;
use miranda::engine::{resolve_turn, GameState, PolicyChoice};

/// Policies the advisor enacts at most per turn
const ADVISOR_POLICIES_PER_TURN: usize = 2;

/// Capital the advisor keeps in reserve
const ADVISOR_RESERVE: i32 = 20;

#[derive(Parser, Debug)]
#[command(name = "miranda")]
#[command(about = "Play a seeded Miranda game headlessly")]
struct Args {
    /// Difficulty: story, standard or crisis
    #[arg(long, default_value = "standard")]
    difficulty: String,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Override the term length
    #[arg(long)]
    turns: Option<u32>,

    /// Print the final state as JSON instead of the turn log
    #[arg(long)]
    json: bool,

    /// TOML difficulty configuration replacing the built-in one
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct GameSummary<'a> {
    seed: u64,
    turns_played: u32,
    ending: Option<EndingId>,
    ending_title: Option<&'static str>,
    dispatch: Vec<String>,
    state: &'a GameState,
}

/// Cheapest affordable unlocked policies, targeting the least loyal bloc
fn advise(state: &GameState) -> Vec<PolicyChoice> {
    let mut options: Vec<_> = state
        .unlocked_policy_ids
        .iter()
        .filter_map(|id| get_policy(id))
        .map(|p| (effective_cost(p, state), p))
        .collect();
    options.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.id.cmp(b.1.id)));

    let target = BlocId::ALL
        .iter()
        .copied()
        .min_by_key(|&id| state.blocs[id].loyalty)
        .unwrap_or(BlocId::Court);

    let mut budget = state.resources.capital - ADVISOR_RESERVE;
    let mut choices = Vec::new();
    for (cost, policy) in options {
        if choices.len() == ADVISOR_POLICIES_PER_TURN {
            break;
        }
        if cost > budget {
            continue;
        }
        budget -= cost;
        choices.push(if policy.requires_target_bloc {
            PolicyChoice::targeting(policy.id, target)
        } else {
            PolicyChoice::new(policy.id)
        });
    }
    choices
}

/// Visible milestones with each condition checked off
fn print_milestone_progress(state: &GameState) {
    println!();
    println!("=== Milestones ===");
    for milestone in MILESTONES.iter().filter(|m| !m.hidden) {
        let mark = if state.achieved_milestone_ids.contains(milestone.id) { "x" } else { " " };
        println!("[{mark}] {}", milestone.name);
        let progress = get_condition_progress(milestone, state);
        for (spec, met) in milestone.conditions.iter().zip(progress) {
            println!("    {} {}", if met { "+" } else { "-" }, spec.label);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("miranda=info")),
        )
        .init();

    let args = Args::parse();
    let difficulty: Difficulty = args.difficulty.parse()?;
    let mut config = match &args.config {
        Some(path) => load_difficulty_config(path)?,
        None => get_difficulty_config(difficulty),
    };
    if let Some(turns) = args.turns {
        config.max_turns = turns;
    }

    let mut state = GameState::with_config(config, args.seed);

    if !args.json {
        println!("=== MIRANDA ===");
        println!(
            "Your rival is {}, {}.",
            state.rival.name, state.rival.title
        );
    }

    while !state.game_over {
        let choices = advise(&state);
        let report = resolve_turn(&mut state, &choices)?;

        if !args.json {
            let enacted: Vec<String> = choices
                .iter()
                .map(|c| match c.target_bloc {
                    Some(bloc) => format!("{} ({})", c.policy_id, bloc_definition(bloc).name),
                    None => c.policy_id.clone(),
                })
                .collect();
            println!();
            println!(
                "--- Month {} | legitimacy {} | capital {} | rival {} ---",
                report.turn, state.resources.legitimacy, state.resources.capital, state.rival.power
            );
            if !enacted.is_empty() {
                println!("Enacted: {}", enacted.join(", "));
            }
            for item in &report.briefing {
                println!("  [{:?}] {}", item.tone, item.text);
            }
            for milestone in &report.milestones {
                println!("  * {}: {}", milestone.name, milestone.reward_text);
            }
        }
    }

    let dispatch = compose_dispatch(&state);
    if args.json {
        let summary = GameSummary {
            seed: args.seed,
            turns_played: state.turn,
            ending: state.ending,
            ending_title: state.ending.map(|e| ending_data(e).title),
            dispatch,
            state: &state,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if let Some(ending) = state.ending {
        let data = ending_data(ending);
        println!();
        println!("=== {} ===", data.title);
        println!("{}", data.flavor);
        for paragraph in dispatch {
            println!();
            println!("{paragraph}");
        }
        print_milestone_progress(&state);
    }

    Ok(())
}
