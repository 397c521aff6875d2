//! Policy unlock evaluation

use crate::content::policies::{Policy, UnlockCondition, UnlockKind, POLICIES};
use crate::engine::state::GameState;

fn within(value: i32, min: Option<i32>, max: Option<i32>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

/// Evaluate one link of an unlock chain, ignoring its `or`
pub fn is_condition_met(cond: &UnlockCondition, state: &GameState) -> bool {
    match cond.kind {
        UnlockKind::Always => true,
        UnlockKind::Turn(turn) => state.turn >= turn,
        UnlockKind::BlocLoyalty { bloc, min, max } => within(state.blocs[bloc].loyalty, min, max),
        UnlockKind::Resource { key, min, max } => within(state.resources.get(key), min, max),
        UnlockKind::Event(id) => state.fired_event_ids.contains(id),
        UnlockKind::Milestone(id) => state.achieved_milestone_ids.contains(id),
    }
}

/// Root condition first, then each `or` link; true on the first success
pub fn is_policy_unlock_met(policy: &Policy, state: &GameState) -> bool {
    match policy.unlock.as_ref() {
        None => true,
        Some(root) => root.chain().any(|c| is_condition_met(c, state)),
    }
}

/// Add every policy whose condition now holds to the unlocked set.
///
/// Already unlocked policies are skipped, so the set only grows. Returns
/// the ids unlocked by this call, in catalog order.
pub fn process_unlocks(state: &mut GameState) -> Vec<String> {
    let newly: Vec<String> = POLICIES
        .iter()
        .filter(|p| !state.unlocked_policy_ids.contains(p.id))
        .filter(|p| is_policy_unlock_met(p, state))
        .map(|p| p.id.to_string())
        .collect();

    for id in &newly {
        tracing::debug!("Unlocked policy {}", id);
        state.unlocked_policy_ids.insert(id.clone());
    }
    state.newly_unlocked_policy_ids = newly.clone();
    newly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::policies::get_policy;
    use crate::core::types::{BlocId, Difficulty, ResourceKey};
    use crate::engine::state::create_initial_state;

    fn state() -> GameState {
        create_initial_state(Difficulty::Standard, 11)
    }

    #[test]
    fn test_turn_condition() {
        let mut s = state();
        let festival = get_policy("culture_festival").unwrap();
        assert!(!is_policy_unlock_met(festival, &s));
        s.turn = 2;
        assert!(is_policy_unlock_met(festival, &s));
    }

    #[test]
    fn test_or_chain_second_link() {
        let mut s = state();
        let price_controls = get_policy("price_controls").unwrap();
        s.resources.inflation = 4;
        assert!(!is_policy_unlock_met(price_controls, &s));
        s.turn = 6;
        assert!(is_policy_unlock_met(price_controls, &s));
    }

    #[test]
    fn test_or_chain_third_link() {
        let mut s = state();
        let press = get_policy("press_freedom_act").unwrap();
        s.blocs[BlocId::Media].loyalty = 60;
        assert!(!is_policy_unlock_met(press, &s));
        s.turn = 20;
        assert!(is_policy_unlock_met(press, &s));
    }

    #[test]
    fn test_bloc_max_bound_inclusive() {
        let mut s = state();
        let reform = get_policy("judicial_reform").unwrap();
        s.blocs[BlocId::Court].loyalty = 40;
        assert!(is_policy_unlock_met(reform, &s));
        s.blocs[BlocId::Court].loyalty = 41;
        assert!(!is_policy_unlock_met(reform, &s));
    }

    #[test]
    fn test_event_and_milestone_conditions() {
        let mut s = state();
        assert!(!is_policy_unlock_met(get_policy("bank_guarantee").unwrap(), &s));
        s.fired_event_ids.insert("bank_run".into());
        assert!(is_policy_unlock_met(get_policy("bank_guarantee").unwrap(), &s));

        assert!(!is_policy_unlock_met(get_policy("international_summit").unwrap(), &s));
        s.achieved_milestone_ids.insert("miranda_model".into());
        assert!(is_policy_unlock_met(get_policy("international_summit").unwrap(), &s));
    }

    #[test]
    fn test_resource_condition() {
        let mut s = state();
        let cond = UnlockCondition::only(UnlockKind::Resource {
            key: ResourceKey::Dread,
            min: Some(40),
            max: None,
        });
        s.resources.dread = 39;
        assert!(!is_condition_met(&cond, &s));
        s.resources.dread = 40;
        assert!(is_condition_met(&cond, &s));
    }

    #[test]
    fn test_process_unlocks_reports_once() {
        let mut s = state();
        s.turn = 2;
        let first = process_unlocks(&mut s);
        assert!(first.contains(&"culture_festival".to_string()));
        assert_eq!(s.newly_unlocked_policy_ids, first);
        let second = process_unlocks(&mut s);
        assert!(second.is_empty());
        assert!(s.newly_unlocked_policy_ids.is_empty());
    }

    #[test]
    fn test_unlocks_survive_condition_reversal() {
        let mut s = state();
        s.turn = 6;
        process_unlocks(&mut s);
        assert!(s.is_policy_unlocked("price_controls"));
        s.turn = 0;
        s.resources.inflation = 0;
        process_unlocks(&mut s);
        assert!(s.is_policy_unlocked("price_controls"));
    }

    #[test]
    fn test_evaluation_does_not_mutate() {
        let s = state();
        let before = s.clone();
        for policy in POLICIES {
            let a = is_policy_unlock_met(policy, &s);
            let b = is_policy_unlock_met(policy, &s);
            assert_eq!(a, b);
        }
        assert_eq!(s, before);
    }
}
