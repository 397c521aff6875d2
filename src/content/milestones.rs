//! Milestone definitions
//!
//! Five visible milestones and four hidden ones. Conditions are checked in
//! order and all must hold at once.

use crate::core::types::{BlocId, Difficulty, ResourceKey, Turn};
use crate::engine::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneCategory {
    Governance,
    Economy,
    Social,
    Military,
    Diplomacy,
}

/// Typed predicate over game state. Thresholds are strict except `TurnReached`.
#[derive(Debug, Clone, Copy)]
pub enum MilestoneCondition {
    ResourceAbove(ResourceKey, i32),
    ResourceBelow(ResourceKey, i32),
    BlocLoyaltyAbove(BlocId, i32),
    AllBlocsAbove(i32),
    TurnReached(Turn),
    NoActiveCrises,
    CongressMajority,
    RivalPowerBelow(i32),
    Custom(fn(&GameState) -> bool),
}

#[derive(Debug, Clone, Copy)]
pub struct ConditionSpec {
    pub condition: MilestoneCondition,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneReward {
    /// Reward policy is gated by a `Milestone` unlock condition
    PolicyUnlock(&'static str),
    Mechanical,
    Narrative,
}

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub conditions: &'static [ConditionSpec],
    pub hidden: bool,
    pub reward: MilestoneReward,
    pub reward_resources: &'static [(ResourceKey, i32)],
    pub reward_rival_power: i32,
    pub reward_text: &'static str,
    pub category: MilestoneCategory,
}

const fn cond(condition: MilestoneCondition, label: &'static str) -> ConditionSpec {
    ConditionSpec { condition, label }
}

fn central_bank_independent(state: &GameState) -> bool {
    state.central_bank_independence > 70
}

fn broad_coalition(state: &GameState) -> bool {
    state.blocs.values().filter(|bloc| bloc.loyalty > 50).count() >= 10
}

fn many_delayed_effects(state: &GameState) -> bool {
    state.delayed_effects.len() >= 3
}

fn on_crisis_difficulty(state: &GameState) -> bool {
    state.difficulty == Difficulty::Crisis
}

fn still_in_office(state: &GameState) -> bool {
    !state.game_over
}

fn prolific_reformer(state: &GameState) -> bool {
    state.policies_enacted_count >= 30
}

fn colossus_patient(state: &GameState) -> bool {
    state.colossus.patience > 80
}

fn colossus_distant(state: &GameState) -> bool {
    state.colossus.alignment < 30
}

use MilestoneCondition as C;
use ResourceKey as R;

pub static MILESTONES: &[Milestone] = &[
    Milestone {
        id: "miranda_model",
        name: "The Miranda Model",
        description: "Build a republic that others want to emulate. High legitimacy, no active crises, low polarization.",
        conditions: &[
            cond(C::ResourceAbove(R::Legitimacy, 80), "Legitimacy above 80"),
            cond(C::NoActiveCrises, "No active crises"),
            cond(C::ResourceBelow(R::Polarization, 25), "Polarization below 25"),
        ],
        hidden: false,
        reward: MilestoneReward::PolicyUnlock("international_summit"),
        reward_resources: &[],
        reward_rival_power: 0,
        reward_text: "Foreign journalists write about Miranda with cautious admiration. The phrase \"the Miranda Model\" appears in three editorials. Your aide clips them for the scrapbook.",
        category: MilestoneCategory::Governance,
    },
    Milestone {
        id: "full_employment",
        name: "Full Employment",
        description: "A workforce mobilized, labor united, and inflation under control.",
        conditions: &[
            cond(C::ResourceAbove(R::Mobilization, 80), "Mobilization above 80"),
            cond(C::BlocLoyaltyAbove(BlocId::Labor, 65), "Labor loyalty above 65"),
            cond(C::ResourceBelow(R::Inflation, 8), "Inflation below 8"),
        ],
        hidden: false,
        reward: MilestoneReward::PolicyUnlock("universal_basic_income"),
        reward_resources: &[],
        reward_rival_power: 0,
        reward_text: "The unemployment office closed early, for lack of applicants. The dockworkers' choir rehearsed a new song about honest work. The factory owners sent a card.",
        category: MilestoneCategory::Economy,
    },
    Milestone {
        id: "the_peacemaker",
        name: "The Peacemaker",
        description: "A society at peace with itself. Low polarization, low dread, all blocs reasonably content.",
        conditions: &[
            cond(C::ResourceBelow(R::Polarization, 15), "Polarization below 15"),
            cond(C::ResourceBelow(R::Dread, 10), "Dread below 10"),
            cond(C::AllBlocsAbove(35), "All blocs above 35 loyalty"),
        ],
        hidden: false,
        reward: MilestoneReward::Mechanical,
        reward_resources: &[(R::Legitimacy, 10), (R::Narrative, 5)],
        reward_rival_power: 0,
        reward_text: "Two rival newspaper editors were seen having lunch together. A small thing. Small things, accumulated, change the texture of a republic.",
        category: MilestoneCategory::Social,
    },
    Milestone {
        id: "economic_tiger",
        name: "Economic Tiger",
        description: "Massive capital reserves, low inflation, an independent central bank.",
        conditions: &[
            cond(C::ResourceAbove(R::Capital, 400), "Capital above 400"),
            cond(C::ResourceBelow(R::Inflation, 5), "Inflation below 5"),
            cond(C::Custom(central_bank_independent), "Central Bank independence above 70"),
        ],
        hidden: false,
        reward: MilestoneReward::PolicyUnlock("sovereign_investment_fund"),
        reward_resources: &[],
        reward_rival_power: 0,
        reward_text: "The financial papers ran a special edition. The Banks sent champagne. Your treasurer framed the budget surplus report, the first one he had not had to apologize for.",
        category: MilestoneCategory::Economy,
    },
    Milestone {
        id: "united_front",
        name: "United Front",
        description: "A broad coalition of blocs stands behind you, with a congressional majority to prove it.",
        conditions: &[
            cond(C::Custom(broad_coalition), "10+ blocs with loyalty above 50"),
            cond(C::CongressMajority, "Congressional majority"),
        ],
        hidden: false,
        reward: MilestoneReward::PolicyUnlock("constitutional_convention"),
        reward_resources: &[],
        reward_rival_power: -5,
        reward_text: "The congressional hall erupted in applause. For once the applause was for you. Your chief of staff almost smiled. \"Don't get used to it,\" he said.",
        category: MilestoneCategory::Governance,
    },
    Milestone {
        id: "puppet_master",
        name: "The Puppet Master",
        description: "Master of the backroom. Multiple delayed effects running at once.",
        conditions: &[cond(C::Custom(many_delayed_effects), "3+ active delayed effects")],
        hidden: true,
        reward: MilestoneReward::Narrative,
        reward_resources: &[(R::Narrative, 5)],
        reward_rival_power: 0,
        reward_text: "Your aide lost track of the favors owed and the favors outstanding. She started a spreadsheet. It crashed on too many dependencies.",
        category: MilestoneCategory::Military,
    },
    Milestone {
        id: "against_all_odds",
        name: "Against All Odds",
        description: "Survive to the halfway point on crisis difficulty.",
        conditions: &[
            cond(C::Custom(on_crisis_difficulty), "Crisis difficulty"),
            cond(C::TurnReached(24), "Reached turn 24"),
            cond(C::Custom(still_in_office), "Not game over"),
        ],
        hidden: true,
        reward: MilestoneReward::Mechanical,
        reward_resources: &[(R::Legitimacy, 10)],
        reward_rival_power: 0,
        reward_text: "Halfway through. The odds were against you and they still are. You are still standing, and in Miranda standing counts for something.",
        category: MilestoneCategory::Governance,
    },
    Milestone {
        id: "the_reformer",
        name: "The Reformer",
        description: "Enact 30 or more policies over your term.",
        conditions: &[cond(C::Custom(prolific_reformer), "30+ policies enacted")],
        hidden: true,
        reward: MilestoneReward::Narrative,
        reward_resources: &[(R::Legitimacy, 5)],
        reward_rival_power: 0,
        reward_text: "Your desk drawers are full of signed orders. Thirty initiatives and counting. History will sort the good from the bad. For now, the Republic moves.",
        category: MilestoneCategory::Social,
    },
    Milestone {
        id: "colossus_whisperer",
        name: "Colossus Whisperer",
        description: "Keep the Colossus happy while keeping your distance.",
        conditions: &[
            cond(C::Custom(colossus_patient), "Colossus patience above 80"),
            cond(C::Custom(colossus_distant), "Alignment below 30"),
        ],
        hidden: true,
        reward: MilestoneReward::PolicyUnlock("trade_independence"),
        reward_resources: &[],
        reward_rival_power: 0,
        reward_text: "The ambassador smiles through gritted teeth. Miranda refuses to bend, and yet the Colossus does not break relations. Your trade attache calls it diplomatic aikido.",
        category: MilestoneCategory::Diplomacy,
    },
];

pub fn get_milestone(id: &str) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_milestones_four_hidden() {
        assert_eq!(MILESTONES.len(), 9);
        assert_eq!(MILESTONES.iter().filter(|m| m.hidden).count(), 4);
    }

    #[test]
    fn test_every_milestone_has_conditions() {
        for milestone in MILESTONES {
            assert!(!milestone.conditions.is_empty(), "{} has no conditions", milestone.id);
            assert!(!milestone.reward_text.is_empty());
            assert!(milestone.conditions.iter().all(|c| !c.label.is_empty()), "{}", milestone.id);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_milestone("the_peacemaker").map(|m| m.name), Some("The Peacemaker"));
        assert!(get_milestone("nonexistent").is_none());
    }
}
