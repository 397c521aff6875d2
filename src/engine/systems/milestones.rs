//! Milestone evaluation and rewards

use crate::content::milestones::{get_milestone, Milestone, MilestoneCondition, MILESTONES};
use crate::core::types::BlocId;
use crate::engine::narrative::{push_news, NewsEntry, Tone};
use crate::engine::state::{AchievedMilestone, GameState};

pub fn evaluate_condition(condition: &MilestoneCondition, state: &GameState) -> bool {
    match *condition {
        MilestoneCondition::ResourceAbove(key, value) => state.resources.get(key) > value,
        MilestoneCondition::ResourceBelow(key, value) => state.resources.get(key) < value,
        MilestoneCondition::BlocLoyaltyAbove(bloc, value) => state.blocs[bloc].loyalty > value,
        MilestoneCondition::AllBlocsAbove(value) => {
            BlocId::ALL.iter().all(|&id| state.blocs[id].loyalty > value)
        }
        MilestoneCondition::TurnReached(turn) => state.turn >= turn,
        MilestoneCondition::NoActiveCrises => state.active_crises.is_empty(),
        MilestoneCondition::CongressMajority => state.congress.friendly_majority,
        MilestoneCondition::RivalPowerBelow(value) => state.rival.power < value,
        MilestoneCondition::Custom(predicate) => predicate(state),
    }
}

/// Truth value of each condition, in order, for progress display
pub fn get_condition_progress(milestone: &Milestone, state: &GameState) -> Vec<bool> {
    milestone
        .conditions
        .iter()
        .map(|spec| evaluate_condition(&spec.condition, state))
        .collect()
}

/// Ids of milestones whose every condition holds and which are not yet achieved
pub fn check_milestones(state: &GameState) -> Vec<&'static str> {
    MILESTONES
        .iter()
        .filter(|m| !state.achieved_milestone_ids.contains(m.id))
        .filter(|m| m.conditions.iter().all(|spec| evaluate_condition(&spec.condition, state)))
        .map(|m| m.id)
        .collect()
}

/// Record newly achieved milestones and apply their rewards
pub fn process_milestones(state: &mut GameState) -> Vec<AchievedMilestone> {
    let mut achieved = Vec::new();

    for id in check_milestones(state) {
        let Some(milestone) = get_milestone(id) else {
            continue;
        };
        state.achieved_milestone_ids.insert(id.to_string());
        state.resources.apply_deltas(milestone.reward_resources);
        state.rival.adjust_power(milestone.reward_rival_power);
        push_news(
            &mut state.news_log,
            NewsEntry {
                turn: state.turn,
                text: milestone.reward_text.to_string(),
                tone: Tone::Positive,
            },
        );
        tracing::info!("Milestone achieved: {}", milestone.name);

        achieved.push(AchievedMilestone {
            id: id.to_string(),
            name: milestone.name.to_string(),
            reward_text: milestone.reward_text.to_string(),
        });
    }

    achieved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Difficulty, ResourceKey};
    use crate::engine::crisis::CrisisInstance;
    use crate::engine::state::create_initial_state;

    fn peaceful_state() -> GameState {
        let mut s = create_initial_state(Difficulty::Standard, 4);
        s.resources.polarization = 10;
        s.resources.dread = 5;
        for (_, bloc) in s.blocs.iter_mut() {
            bloc.loyalty = 40;
        }
        s
    }

    #[test]
    fn test_strict_thresholds() {
        let mut s = create_initial_state(Difficulty::Standard, 4);
        s.resources.legitimacy = 80;
        assert!(!evaluate_condition(&MilestoneCondition::ResourceAbove(ResourceKey::Legitimacy, 80), &s));
        s.resources.legitimacy = 81;
        assert!(evaluate_condition(&MilestoneCondition::ResourceAbove(ResourceKey::Legitimacy, 80), &s));
    }

    #[test]
    fn test_turn_reached_inclusive() {
        let mut s = create_initial_state(Difficulty::Standard, 4);
        s.turn = 24;
        assert!(evaluate_condition(&MilestoneCondition::TurnReached(24), &s));
    }

    #[test]
    fn test_no_active_crises() {
        let mut s = create_initial_state(Difficulty::Standard, 4);
        assert!(evaluate_condition(&MilestoneCondition::NoActiveCrises, &s));
        s.active_crises.push(CrisisInstance::new("bank_run"));
        assert!(!evaluate_condition(&MilestoneCondition::NoActiveCrises, &s));
    }

    #[test]
    fn test_all_blocs_above_needs_every_bloc() {
        let mut s = peaceful_state();
        assert!(evaluate_condition(&MilestoneCondition::AllBlocsAbove(35), &s));
        s.blocs[BlocId::Syndicate].loyalty = 35;
        assert!(!evaluate_condition(&MilestoneCondition::AllBlocsAbove(35), &s));
    }

    #[test]
    fn test_peacemaker_detected() {
        let s = peaceful_state();
        assert!(check_milestones(&s).contains(&"the_peacemaker"));
    }

    #[test]
    fn test_peacemaker_not_reported_twice() {
        let mut s = peaceful_state();
        s.achieved_milestone_ids.insert("the_peacemaker".into());
        assert!(!check_milestones(&s).contains(&"the_peacemaker"));
    }

    #[test]
    fn test_progress_is_pure() {
        let s = peaceful_state();
        let before = s.clone();
        let peacemaker = get_milestone("the_peacemaker").unwrap();
        assert_eq!(get_condition_progress(peacemaker, &s), vec![true, true, true]);
        assert_eq!(get_condition_progress(peacemaker, &s), vec![true, true, true]);
        assert_eq!(s, before);
    }

    #[test]
    fn test_reward_applied_once() {
        let mut s = peaceful_state();
        let legitimacy = s.resources.legitimacy;
        let achieved = process_milestones(&mut s);
        assert!(achieved.iter().any(|a| a.id == "the_peacemaker"));
        assert_eq!(s.resources.legitimacy, legitimacy + 10);
        assert!(!s.news_log.is_empty());

        let again = process_milestones(&mut s);
        assert!(again.iter().all(|a| a.id != "the_peacemaker"));
        assert_eq!(s.resources.legitimacy, legitimacy + 10);
    }

    #[test]
    fn test_against_all_odds_only_on_crisis() {
        let mut s = create_initial_state(Difficulty::Standard, 4);
        s.turn = 24;
        assert!(!check_milestones(&s).contains(&"against_all_odds"));
        let mut c = create_initial_state(Difficulty::Crisis, 4);
        c.turn = 24;
        assert!(check_milestones(&c).contains(&"against_all_odds"));
    }
}
