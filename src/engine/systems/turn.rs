//! Turn orchestration
//!
//! `resolve_turn` is the only entry point that advances a game. It validates
//! the whole selection up front, so a rejected turn leaves the state exactly
//! as it was, then runs every subsystem in a fixed order. The order matters
//! twice over: subsystems read each other's output, and the random stream is
//! consumed in call order.

use crate::content::endings::ending_data;
use crate::content::policies::{get_policy, Policy};
use crate::core::error::{MirandaError, Result};
use crate::core::types::{round_half_up, BlocId, ResourceKey};
use crate::engine::crisis::DelayedEffect;
use crate::engine::invariants::check_invariants;
use crate::engine::narrative::{push_news, NewsEntry, Tone};
use crate::engine::state::{GameState, PolicyChoice, TurnReport};
use crate::engine::systems::{briefing, colossus, crises, endings, milestones, rival, unlocks};

/// Policy costs are multiplied by this while gridlock is active
pub const GRIDLOCK_COST_MULTIPLIER: f64 = 1.2;

/// Capital cost of `policy` this turn
pub fn effective_cost(policy: &Policy, state: &GameState) -> i32 {
    if state.rival.gridlock_active() {
        round_half_up(f64::from(policy.cost) * GRIDLOCK_COST_MULTIPLIER)
    } else {
        policy.cost
    }
}

/// Check a selection against the current state without touching it.
///
/// Returns the resolved policies with their targets, in selection order.
pub fn validate_choices(
    state: &GameState,
    choices: &[PolicyChoice],
) -> Result<Vec<(&'static Policy, Option<BlocId>)>> {
    if state.game_over {
        return Err(MirandaError::GameOver);
    }

    let mut resolved: Vec<(&'static Policy, Option<BlocId>)> = Vec::with_capacity(choices.len());
    let mut total_cost = 0;

    for choice in choices {
        let policy = get_policy(&choice.policy_id)
            .ok_or_else(|| MirandaError::UnknownPolicy(choice.policy_id.clone()))?;
        if !state.is_policy_unlocked(policy.id) {
            return Err(MirandaError::PolicyLocked(policy.id.to_string()));
        }
        if resolved.iter().any(|(p, _)| p.id == policy.id) {
            return Err(MirandaError::DuplicatePolicy(policy.id.to_string()));
        }
        if policy.requires_target_bloc && choice.target_bloc.is_none() {
            return Err(MirandaError::MissingTargetBloc(policy.id.to_string()));
        }
        total_cost += effective_cost(policy, state);
        resolved.push((policy, choice.target_bloc));
    }

    if total_cost > state.resources.capital {
        return Err(MirandaError::InsufficientCapital {
            required: total_cost,
            available: state.resources.capital,
        });
    }

    Ok(resolved)
}

/// Apply one enacted policy. Delayed effects are returned rather than queued
/// so they only start counting down next turn.
fn enact_policy(
    state: &mut GameState,
    policy: &Policy,
    target: Option<BlocId>,
) -> Option<DelayedEffect> {
    let cost = effective_cost(policy, state);
    state.resources.adjust(ResourceKey::Capital, -cost);

    let effects = &policy.effects;
    state.resources.apply_deltas(effects.resources);
    for &(bloc, delta) in effects.blocs {
        state.adjust_bloc(bloc, delta);
    }
    if let Some(bloc) = target {
        if policy.requires_target_bloc {
            state.adjust_bloc(bloc, effects.target_bloc_loyalty);
        }
    }
    state.adjust_labor_cohesion(effects.labor_cohesion);
    state.adjust_central_bank(effects.central_bank);
    state.colossus.adjust_patience(effects.colossus_patience);
    state.colossus.adjust_trade_dependency(effects.trade_dependency);
    state.rival.adjust_power(effects.rival_power);

    if let Some(chain_id) = effects.resolves_crisis {
        if crises::resolve_crisis(state, chain_id) {
            tracing::info!("{} resolves {}", policy.name, chain_id);
        }
    }

    state.policies_enacted_count += 1;
    tracing::debug!("Enacted {} for {} capital", policy.id, cost);

    effects.delayed.map(|template| DelayedEffect {
        policy_id: policy.id.to_string(),
        turns_remaining: template.turns,
        resources: template.resources.to_vec(),
    })
}

/// Count down queued effects and apply the ones that come due
pub fn tick_delayed_effects(state: &mut GameState) {
    let pending = std::mem::take(&mut state.delayed_effects);
    for mut effect in pending {
        effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
        if effect.turns_remaining == 0 {
            tracing::debug!("Delayed effect of {} lands", effect.policy_id);
            state.resources.apply_deltas(&effect.resources);
        } else {
            state.delayed_effects.push(effect);
        }
    }
}

/// Capital credited at the end of the policy phase
pub fn capital_income(state: &GameState) -> i32 {
    state.config.base_capital_income + colossus::calculate_trade_income(state)
}

/// Resolve one full turn.
///
/// On error nothing has changed. On success the turn counter has advanced
/// and, if a terminal condition holds, the game is over with its ending set.
pub fn resolve_turn(state: &mut GameState, choices: &[PolicyChoice]) -> Result<TurnReport> {
    let enacted = validate_choices(state, choices)?;

    #[cfg(debug_assertions)]
    let before = state.clone();

    state.previous_resources = Some(state.resources);

    let mut queued = Vec::new();
    for (policy, target) in enacted {
        queued.extend(enact_policy(state, policy, target));
    }

    let income = capital_income(state);
    state.resources.adjust(ResourceKey::Capital, income);

    tick_delayed_effects(state);
    state.delayed_effects.extend(queued);

    state.refresh_congress();
    colossus::process_colossus_turn(state);
    colossus::process_central_bank_turn(state);

    let crises_spawned = crises::process_crises(state);
    state.refresh_congress();

    let thresholds_fired = rival::process_rival_turn(state);
    let newly_unlocked = unlocks::process_unlocks(state);
    let achieved = milestones::process_milestones(state);
    let briefing = briefing::process_briefing(state);

    // Crises and rewards may have moved the gauge since the Colossus step
    state.colossus.alignment = state.resources.colossus_alignment;
    state.turn += 1;

    if let Some(ending) = endings::determine_ending(state) {
        state.game_over = true;
        state.ending = Some(ending);
        let data = ending_data(ending);
        push_news(
            &mut state.news_log,
            NewsEntry {
                turn: state.turn,
                text: data.title.to_string(),
                tone: Tone::Neutral,
            },
        );
        tracing::info!("Game over at turn {}: {}", state.turn, ending);
    }

    debug_assert!(
        check_invariants(state).is_empty(),
        "invariants violated: {:?}",
        check_invariants(state)
    );
    #[cfg(debug_assertions)]
    {
        let regressions = crate::engine::invariants::check_monotonic(&before, state);
        debug_assert!(regressions.is_empty(), "monotonic sets shrank: {:?}", regressions);
    }

    Ok(TurnReport {
        turn: state.turn,
        briefing,
        newly_unlocked,
        milestones: achieved,
        thresholds_fired,
        crises_spawned,
        ending: state.ending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Difficulty;
    use crate::engine::crisis::CrisisInstance;
    use crate::engine::state::create_initial_state;

    fn game() -> GameState {
        create_initial_state(Difficulty::Standard, 21)
    }

    #[test]
    fn test_empty_turn_advances() {
        let mut s = game();
        let report = resolve_turn(&mut s, &[]).unwrap();
        assert_eq!(report.turn, 1);
        assert_eq!(s.turn, 1);
        assert!(s.previous_resources.is_some());
        assert!(!s.rival.last_action.is_empty());
    }

    #[test]
    fn test_unknown_policy_rejected_atomically() {
        let mut s = game();
        let before = s.clone();
        let err = resolve_turn(
            &mut s,
            &[PolicyChoice::new("stimulus_package"), PolicyChoice::new("moon_base")],
        )
        .unwrap_err();
        assert!(matches!(err, MirandaError::UnknownPolicy(id) if id == "moon_base"));
        assert_eq!(s, before);
    }

    #[test]
    fn test_locked_and_duplicate_rejected() {
        let mut s = game();
        assert!(matches!(
            resolve_turn(&mut s, &[PolicyChoice::new("international_summit")]),
            Err(MirandaError::PolicyLocked(_))
        ));
        assert!(matches!(
            resolve_turn(
                &mut s,
                &[PolicyChoice::new("national_address"), PolicyChoice::new("national_address")]
            ),
            Err(MirandaError::DuplicatePolicy(_))
        ));
        assert_eq!(s.turn, 0);
    }

    #[test]
    fn test_missing_target_rejected() {
        let mut s = game();
        assert!(matches!(
            resolve_turn(&mut s, &[PolicyChoice::new("backroom_deal")]),
            Err(MirandaError::MissingTargetBloc(_))
        ));
    }

    #[test]
    fn test_insufficient_capital_rejected() {
        let mut s = game();
        s.resources.capital = 20;
        let before = s.clone();
        let err = resolve_turn(&mut s, &[PolicyChoice::new("stimulus_package")]).unwrap_err();
        assert!(matches!(
            err,
            MirandaError::InsufficientCapital { required: 30, available: 20 }
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn test_gridlock_raises_cost() {
        let mut s = game();
        let stimulus = get_policy("stimulus_package").unwrap();
        let address = get_policy("national_address").unwrap();
        assert_eq!(effective_cost(stimulus, &s), 30);
        s.rival.gridlock_countdown = 2;
        assert_eq!(effective_cost(stimulus, &s), 36);
        assert_eq!(effective_cost(address, &s), 12);
    }

    #[test]
    fn test_targeted_policy_moves_target() {
        let mut s = game();
        let before = s.blocs[BlocId::Court].loyalty;
        enact_policy(&mut s, get_policy("backroom_deal").unwrap(), Some(BlocId::Court));
        assert_eq!(s.blocs[BlocId::Court].loyalty, (before + 10).min(100));
        assert_eq!(s.policies_enacted_count, 1);
    }

    #[test]
    fn test_delayed_effect_lands_later() {
        let mut s = game();
        s.unlocked_policy_ids.insert("press_leak".into());
        resolve_turn(&mut s, &[PolicyChoice::new("press_leak")]).unwrap();
        assert_eq!(s.delayed_effects.len(), 1);
        assert_eq!(s.delayed_effects[0].turns_remaining, 2);

        tick_delayed_effects(&mut s);
        assert_eq!(s.delayed_effects[0].turns_remaining, 1);
        let narrative = s.resources.narrative;
        tick_delayed_effects(&mut s);
        assert!(s.delayed_effects.is_empty());
        assert_eq!(s.resources.narrative, (narrative - 2).max(0));
    }

    #[test]
    fn test_resolving_policy_clears_crisis() {
        let mut s = game();
        s.resources.capital = 300;
        s.active_crises.push(CrisisInstance::new("bank_run"));
        s.fired_event_ids.insert("bank_run".into());
        s.unlocked_policy_ids.insert("bank_guarantee".into());
        resolve_turn(&mut s, &[PolicyChoice::new("bank_guarantee")]).unwrap();
        assert!(s.active_crises.iter().all(|c| c.chain_id != "bank_run"));
        assert_eq!(s.event_cooldowns.get("bank_run"), Some(&8));
    }

    #[test]
    fn test_capital_income_includes_trade() {
        let mut s = game();
        s.colossus.trade_dependency = 60;
        s.colossus.alignment = 60;
        assert_eq!(capital_income(&s), 10 + 6);
        s.colossus.alignment = 20;
        assert_eq!(capital_income(&s), 10 + 3);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut s = game();
        s.turn = s.max_turns - 1;
        let report = resolve_turn(&mut s, &[]).unwrap();
        assert!(s.game_over);
        assert!(report.ending.is_some());
        assert_eq!(s.ending, report.ending);

        let before = s.clone();
        assert!(matches!(resolve_turn(&mut s, &[]), Err(MirandaError::GameOver)));
        assert_eq!(s, before);
    }

    #[test]
    fn test_impeachment_ends_early() {
        let mut s = game();
        s.resources.legitimacy = 0;
        s.resources.polarization = 50;
        s.central_bank_independence = 50;
        let report = resolve_turn(&mut s, &[]).unwrap();
        assert_eq!(report.ending, Some(crate::content::endings::EndingId::Impeached));
        assert!(s.game_over);
        assert_eq!(s.turn, 1);
    }
}
