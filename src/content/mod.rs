//! Authored, read-only game content
//!
//! The engine looks these tables up by id and never mutates them.

pub mod blocs;
pub mod crises;
pub mod endings;
pub mod milestones;
pub mod narrative;
pub mod policies;
pub mod rival_lines;

use std::collections::HashSet;

use crate::engine::systems::rival::RIVAL_THRESHOLDS;
use crises::{get_crisis_chain, CRISIS_CHAINS};
use milestones::{get_milestone, MilestoneReward, MILESTONES};
use policies::{get_policy, UnlockKind, POLICIES};

fn known_event(id: &str) -> bool {
    get_crisis_chain(id).is_some()
        || RIVAL_THRESHOLDS
            .iter()
            .any(|t| id == format!("rival_threshold_{t}"))
}

/// Cross-reference check over every table. Returns one message per problem.
pub fn validate_content() -> Vec<String> {
    let mut problems = Vec::new();

    let mut ids = HashSet::new();
    for policy in POLICIES {
        if !ids.insert(policy.id) {
            problems.push(format!("duplicate policy id {}", policy.id));
        }
        if let Some(root) = policy.unlock.as_ref() {
            for cond in root.chain() {
                match cond.kind {
                    UnlockKind::Milestone(id) if get_milestone(id).is_none() => {
                        problems.push(format!("policy {} unlocks on unknown milestone {id}", policy.id));
                    }
                    UnlockKind::Event(id) if !known_event(id) => {
                        problems.push(format!("policy {} unlocks on unknown event {id}", policy.id));
                    }
                    _ => {}
                }
            }
        }
        if let Some(chain_id) = policy.effects.resolves_crisis {
            if get_crisis_chain(chain_id).is_none() {
                problems.push(format!("policy {} resolves unknown crisis {chain_id}", policy.id));
            }
        }
    }

    let mut milestone_ids = HashSet::new();
    for milestone in MILESTONES {
        if !milestone_ids.insert(milestone.id) {
            problems.push(format!("duplicate milestone id {}", milestone.id));
        }
        if let MilestoneReward::PolicyUnlock(policy_id) = milestone.reward {
            let gated = get_policy(policy_id).and_then(|p| p.unlock).map(|u| u.kind);
            if gated != Some(UnlockKind::Milestone(milestone.id)) {
                problems.push(format!(
                    "milestone {} rewards {policy_id}, which is not gated on it",
                    milestone.id
                ));
            }
        }
    }

    for chain in CRISIS_CHAINS {
        let resolver = get_policy(chain.resolved_by).and_then(|p| p.effects.resolves_crisis);
        if resolver != Some(chain.id) {
            problems.push(format!(
                "crisis {} names resolver {} which does not resolve it",
                chain.id, chain.resolved_by
            ));
        }
    }

    problems
}
