//! Game invariants, checked after every resolved turn.
//!
//! Clamping at every mutation keeps these true. A violation means an engine
//! bug, so dev builds assert on them rather than repairing the state.

use std::collections::BTreeSet;

use crate::engine::blocs::{LOYALTY_MAX, LOYALTY_MIN};
use crate::engine::narrative::NEWS_LOG_CAPACITY;
use crate::engine::rival::{RIVAL_POWER_MAX, RIVAL_POWER_MIN};
use crate::engine::state::{GameState, INDEX_MAX, INDEX_MIN};
use crate::engine::systems::briefing::MAX_BRIEFING_ITEMS;
use crate::engine::systems::rival::RIVAL_THRESHOLDS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

fn violation(message: String) -> InvariantViolation {
    InvariantViolation { message }
}

fn check_index(name: &str, value: i32, out: &mut Vec<InvariantViolation>) {
    if !(INDEX_MIN..=INDEX_MAX).contains(&value) {
        out.push(violation(format!("{name} {value} outside [{INDEX_MIN}, {INDEX_MAX}]")));
    }
}

/// Range and consistency checks on a single state
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for key in state.resources.out_of_range() {
        let (min, max) = key.range();
        violations.push(violation(format!(
            "resource {key} = {} outside [{min}, {max}]",
            state.resources.get(key)
        )));
    }

    for (id, bloc) in state.blocs.iter() {
        if bloc.id != id {
            violations.push(violation(format!("bloc slot {id} holds {}", bloc.id)));
        }
        if !(LOYALTY_MIN..=LOYALTY_MAX).contains(&bloc.loyalty) {
            violations.push(violation(format!("bloc {id} loyalty {} out of range", bloc.loyalty)));
        }
    }

    if !(RIVAL_POWER_MIN..=RIVAL_POWER_MAX).contains(&state.rival.power) {
        violations.push(violation(format!("rival power {} out of range", state.rival.power)));
    }
    for threshold in &state.rival.thresholds_fired {
        if !RIVAL_THRESHOLDS.contains(threshold) {
            violations.push(violation(format!("unknown rival threshold {threshold} fired")));
        }
    }

    check_index("labor cohesion", state.labor_cohesion, &mut violations);
    check_index("central bank independence", state.central_bank_independence, &mut violations);
    check_index("colossus patience", state.colossus.patience, &mut violations);
    check_index("trade dependency", state.colossus.trade_dependency, &mut violations);

    if state.colossus.alignment != state.resources.colossus_alignment {
        violations.push(violation(format!(
            "colossus alignment {} does not mirror resource {}",
            state.colossus.alignment, state.resources.colossus_alignment
        )));
    }

    if state.game_over != state.ending.is_some() {
        violations.push(violation(format!(
            "game_over = {} but ending = {:?}",
            state.game_over, state.ending
        )));
    }

    if state.news_log.len() > NEWS_LOG_CAPACITY {
        violations.push(violation(format!("news log holds {} entries", state.news_log.len())));
    }
    if state.last_briefing.len() > MAX_BRIEFING_ITEMS {
        violations.push(violation(format!("briefing holds {} items", state.last_briefing.len())));
    }
    for item in &state.last_briefing {
        if item.text.is_empty() {
            violations.push(violation(format!("empty {:?} briefing text", item.kind)));
        }
    }

    violations
}

fn check_superset<T: Ord + std::fmt::Debug>(
    name: &str,
    before: &BTreeSet<T>,
    after: &BTreeSet<T>,
    out: &mut Vec<InvariantViolation>,
) {
    for lost in before.difference(after) {
        out.push(violation(format!("{name} lost {lost:?}")));
    }
}

/// Append-only sets must never shrink between two states of the same game
#[must_use]
pub fn check_monotonic(before: &GameState, after: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    check_superset("unlocked policies", &before.unlocked_policy_ids, &after.unlocked_policy_ids, &mut violations);
    check_superset(
        "achieved milestones",
        &before.achieved_milestone_ids,
        &after.achieved_milestone_ids,
        &mut violations,
    );
    check_superset("fired events", &before.fired_event_ids, &after.fired_event_ids, &mut violations);
    check_superset(
        "rival thresholds",
        &before.rival.thresholds_fired,
        &after.rival.thresholds_fired,
        &mut violations,
    );
    check_superset(
        "seen positive triggers",
        &before.seen_positive_triggers,
        &after.seen_positive_triggers,
        &mut violations,
    );
    if after.turn < before.turn {
        violations.push(violation(format!("turn went back from {} to {}", before.turn, after.turn)));
    }
    violations
}
