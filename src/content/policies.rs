//! Policy catalog
//!
//! Policies are static authored data. Unlock conditions form a short OR
//! chain: the root is tried first, then each `or` link in turn.

use crate::core::types::{BlocId, ResourceKey, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyCategory {
    Economic,
    Labor,
    Backroom,
    Rhetoric,
    Security,
    Diplomatic,
    Institutional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockKind {
    Always,
    /// Turn counter has reached the value
    Turn(Turn),
    BlocLoyalty {
        bloc: BlocId,
        min: Option<i32>,
        max: Option<i32>,
    },
    Resource {
        key: ResourceKey,
        min: Option<i32>,
        max: Option<i32>,
    },
    /// An authored event id is in the fired set
    Event(&'static str),
    /// A milestone id is in the achieved set
    Milestone(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockCondition {
    pub kind: UnlockKind,
    pub or: Option<&'static UnlockCondition>,
}

impl UnlockCondition {
    pub const fn only(kind: UnlockKind) -> Self {
        Self { kind, or: None }
    }

    /// Root condition followed by every `or` link
    pub fn chain(&self) -> impl Iterator<Item = &UnlockCondition> + '_ {
        std::iter::successors(Some(self), |cond| cond.or)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedTemplate {
    pub turns: u32,
    pub resources: &'static [(ResourceKey, i32)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyEffects {
    pub resources: &'static [(ResourceKey, i32)],
    pub blocs: &'static [(BlocId, i32)],
    /// Applied to the bloc the player targets
    pub target_bloc_loyalty: i32,
    pub labor_cohesion: i32,
    pub central_bank: i32,
    pub colossus_patience: i32,
    pub trade_dependency: i32,
    pub rival_power: i32,
    /// Crisis chain ended by enacting this policy
    pub resolves_crisis: Option<&'static str>,
    pub delayed: Option<DelayedTemplate>,
}

impl PolicyEffects {
    pub const NONE: PolicyEffects = PolicyEffects {
        resources: &[],
        blocs: &[],
        target_bloc_loyalty: 0,
        labor_cohesion: 0,
        central_bank: 0,
        colossus_patience: 0,
        trade_dependency: 0,
        rival_power: 0,
        resolves_crisis: None,
        delayed: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub id: &'static str,
    pub name: &'static str,
    pub category: PolicyCategory,
    pub cost: i32,
    pub unlock: Option<UnlockCondition>,
    pub requires_target_bloc: bool,
    pub effects: PolicyEffects,
}

use BlocId as B;
use ResourceKey as R;

pub static POLICIES: &[Policy] = &[
    // Economic
    Policy {
        id: "stimulus_package",
        name: "Stimulus Package",
        category: PolicyCategory::Economic,
        cost: 30,
        unlock: None,
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Mobilization, 5), (R::Inflation, 2), (R::Legitimacy, 3)],
            blocs: &[(B::Labor, 3), (B::MainStreet, 4), (B::Finance, -2)],
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "austerity_budget",
        name: "Austerity Budget",
        category: PolicyCategory::Economic,
        cost: 0,
        unlock: None,
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[
                (R::Capital, 40),
                (R::Legitimacy, -4),
                (R::Mobilization, -4),
                (R::Inflation, -2),
            ],
            blocs: &[(B::Finance, 5), (B::Labor, -6), (B::MainStreet, -3)],
            labor_cohesion: -2,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "price_controls",
        name: "Price Controls",
        category: PolicyCategory::Economic,
        cost: 20,
        unlock: Some(UnlockCondition {
            kind: UnlockKind::Resource {
                key: R::Inflation,
                min: Some(10),
                max: None,
            },
            or: Some(&UnlockCondition::only(UnlockKind::Turn(6))),
        }),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Inflation, -4)],
            blocs: &[(B::MainStreet, 3), (B::Agri, -5), (B::Finance, -3), (B::Industry, -2)],
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "sovereign_investment_fund",
        name: "Sovereign Investment Fund",
        category: PolicyCategory::Economic,
        cost: 80,
        unlock: Some(UnlockCondition::only(UnlockKind::Milestone("economic_tiger"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Legitimacy, 3)],
            central_bank: 5,
            delayed: Some(DelayedTemplate {
                turns: 3,
                resources: &[(R::Capital, 80)],
            }),
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "universal_basic_income",
        name: "Universal Basic Income",
        category: PolicyCategory::Economic,
        cost: 90,
        unlock: Some(UnlockCondition::only(UnlockKind::Milestone("full_employment"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Legitimacy, 6), (R::Mobilization, 6), (R::Inflation, 2)],
            blocs: &[(B::Labor, 8), (B::MainStreet, 5), (B::Finance, -6)],
            labor_cohesion: 6,
            ..PolicyEffects::NONE
        },
    },
    // Labor
    Policy {
        id: "union_recognition",
        name: "Union Recognition",
        category: PolicyCategory::Labor,
        cost: 25,
        unlock: Some(UnlockCondition::only(UnlockKind::Always)),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Mobilization, 4)],
            blocs: &[(B::Labor, 8), (B::Industry, -5)],
            labor_cohesion: 5,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "strike_accord",
        name: "Strike Accord",
        category: PolicyCategory::Labor,
        cost: 40,
        unlock: Some(UnlockCondition::only(UnlockKind::Event("general_strike"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Legitimacy, 4)],
            blocs: &[(B::Labor, 6), (B::Industry, -3)],
            labor_cohesion: 4,
            resolves_crisis: Some("general_strike"),
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "workplace_councils",
        name: "Workplace Councils",
        category: PolicyCategory::Labor,
        cost: 45,
        unlock: Some(UnlockCondition {
            kind: UnlockKind::BlocLoyalty {
                bloc: B::Labor,
                min: Some(65),
                max: None,
            },
            or: Some(&UnlockCondition::only(UnlockKind::Turn(18))),
        }),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Mobilization, 5)],
            blocs: &[(B::Labor, 4), (B::Industry, -4), (B::Tech, -2)],
            labor_cohesion: 8,
            ..PolicyEffects::NONE
        },
    },
    // Backroom
    Policy {
        id: "backroom_deal",
        name: "Backroom Deal",
        category: PolicyCategory::Backroom,
        cost: 35,
        unlock: None,
        requires_target_bloc: true,
        effects: PolicyEffects {
            resources: &[(R::Dread, 2), (R::Legitimacy, -1)],
            target_bloc_loyalty: 10,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "quiet_favors",
        name: "Quiet Favors",
        category: PolicyCategory::Backroom,
        cost: 20,
        unlock: Some(UnlockCondition::only(UnlockKind::Turn(4))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Dread, 3)],
            blocs: &[(B::Syndicate, 6), (B::Enforcers, 3)],
            delayed: Some(DelayedTemplate {
                turns: 3,
                resources: &[(R::Legitimacy, -2)],
            }),
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "press_leak",
        name: "Press Leak",
        category: PolicyCategory::Backroom,
        cost: 15,
        unlock: Some(UnlockCondition::only(UnlockKind::Turn(3))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Narrative, 5), (R::Polarization, 3)],
            blocs: &[(B::Media, 3), (B::Court, -2)],
            rival_power: -3,
            delayed: Some(DelayedTemplate {
                turns: 2,
                resources: &[(R::Narrative, -2)],
            }),
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "underworld_truce",
        name: "Underworld Truce",
        category: PolicyCategory::Backroom,
        cost: 50,
        unlock: Some(UnlockCondition {
            kind: UnlockKind::BlocLoyalty {
                bloc: B::Syndicate,
                min: Some(50),
                max: None,
            },
            or: Some(&UnlockCondition::only(UnlockKind::Resource {
                key: R::Dread,
                min: Some(40),
                max: None,
            })),
        }),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Dread, -5), (R::Legitimacy, -2)],
            blocs: &[(B::Syndicate, 8), (B::Enforcers, -4)],
            ..PolicyEffects::NONE
        },
    },
    // Rhetoric
    Policy {
        id: "national_address",
        name: "National Address",
        category: PolicyCategory::Rhetoric,
        cost: 10,
        unlock: None,
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Narrative, 4), (R::Legitimacy, 2), (R::Polarization, 1)],
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "unity_campaign",
        name: "Unity Campaign",
        category: PolicyCategory::Rhetoric,
        cost: 30,
        unlock: Some(UnlockCondition {
            kind: UnlockKind::Resource {
                key: R::Polarization,
                min: Some(50),
                max: None,
            },
            or: Some(&UnlockCondition::only(UnlockKind::Turn(8))),
        }),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Polarization, -6), (R::Narrative, 3)],
            blocs: &[(B::Clergy, 2), (B::Media, 2)],
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "culture_festival",
        name: "Culture Festival",
        category: PolicyCategory::Rhetoric,
        cost: 25,
        unlock: Some(UnlockCondition::only(UnlockKind::Turn(2))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Narrative, 3), (R::Polarization, -2)],
            blocs: &[(B::Artists, 6), (B::Academy, 3), (B::Clergy, -2)],
            ..PolicyEffects::NONE
        },
    },
    // Security
    Policy {
        id: "police_surge",
        name: "Police Surge",
        category: PolicyCategory::Security,
        cost: 30,
        unlock: None,
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Dread, 6), (R::Mobilization, -3), (R::Legitimacy, -1)],
            blocs: &[(B::Enforcers, 6), (B::Court, -2), (B::Labor, -2)],
            rival_power: -2,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "martial_readiness",
        name: "Martial Readiness",
        category: PolicyCategory::Security,
        cost: 45,
        unlock: Some(UnlockCondition {
            kind: UnlockKind::Event("rival_threshold_50"),
            or: Some(&UnlockCondition::only(UnlockKind::Resource {
                key: R::Dread,
                min: Some(35),
                max: None,
            })),
        }),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Dread, 8), (R::Polarization, 4), (R::Legitimacy, -3)],
            blocs: &[(B::Military, 8), (B::Enforcers, 3)],
            rival_power: -5,
            ..PolicyEffects::NONE
        },
    },
    // Diplomatic
    Policy {
        id: "colossus_trade_pact",
        name: "Colossus Trade Pact",
        category: PolicyCategory::Diplomatic,
        cost: 20,
        unlock: None,
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::ColossusAlignment, 8)],
            blocs: &[(B::Finance, 3), (B::Industry, -2), (B::Academy, -2)],
            colossus_patience: 6,
            trade_dependency: 5,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "nonaligned_summit",
        name: "Nonaligned Summit",
        category: PolicyCategory::Diplomatic,
        cost: 30,
        unlock: Some(UnlockCondition::only(UnlockKind::Turn(5))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::ColossusAlignment, -8), (R::Narrative, 3)],
            blocs: &[(B::Academy, 3), (B::Industry, 2), (B::Finance, -2)],
            colossus_patience: -4,
            trade_dependency: -3,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "international_summit",
        name: "International Summit",
        category: PolicyCategory::Diplomatic,
        cost: 60,
        unlock: Some(UnlockCondition::only(UnlockKind::Milestone("miranda_model"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Legitimacy, 6), (R::Narrative, 6)],
            colossus_patience: 5,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "trade_independence",
        name: "Trade Independence",
        category: PolicyCategory::Diplomatic,
        cost: 70,
        unlock: Some(UnlockCondition::only(UnlockKind::Milestone("colossus_whisperer"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::ColossusAlignment, -5)],
            blocs: &[(B::Industry, 6), (B::Agri, 4)],
            trade_dependency: -15,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "border_de_escalation",
        name: "Border De-escalation",
        category: PolicyCategory::Diplomatic,
        cost: 35,
        unlock: Some(UnlockCondition::only(UnlockKind::Event("border_incident"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Dread, -4), (R::Legitimacy, 2)],
            blocs: &[(B::Military, -3)],
            colossus_patience: 3,
            resolves_crisis: Some("border_incident"),
            ..PolicyEffects::NONE
        },
    },
    // Institutional
    Policy {
        id: "central_bank_autonomy",
        name: "Central Bank Autonomy",
        category: PolicyCategory::Institutional,
        cost: 25,
        unlock: Some(UnlockCondition::only(UnlockKind::Turn(2))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Inflation, -2)],
            blocs: &[(B::Finance, 4), (B::Labor, -2)],
            central_bank: 15,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "treasury_directive",
        name: "Treasury Directive",
        category: PolicyCategory::Institutional,
        cost: 15,
        unlock: Some(UnlockCondition::only(UnlockKind::Turn(2))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Capital, 30), (R::Inflation, 2)],
            blocs: &[(B::Finance, -4)],
            central_bank: -15,
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "judicial_reform",
        name: "Judicial Reform",
        category: PolicyCategory::Institutional,
        cost: 40,
        unlock: Some(UnlockCondition {
            kind: UnlockKind::BlocLoyalty {
                bloc: B::Court,
                min: None,
                max: Some(40),
            },
            or: Some(&UnlockCondition::only(UnlockKind::Turn(12))),
        }),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Legitimacy, 4), (R::Dread, -2)],
            blocs: &[(B::Court, 8), (B::Syndicate, -5)],
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "bank_guarantee",
        name: "Bank Guarantee",
        category: PolicyCategory::Institutional,
        cost: 50,
        unlock: Some(UnlockCondition::only(UnlockKind::Event("bank_run"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Inflation, 1), (R::Legitimacy, 3)],
            blocs: &[(B::Finance, 6)],
            resolves_crisis: Some("bank_run"),
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "press_freedom_act",
        name: "Press Freedom Act",
        category: PolicyCategory::Institutional,
        cost: 30,
        unlock: Some(UnlockCondition {
            kind: UnlockKind::Event("media_scandal"),
            or: Some(&UnlockCondition {
                kind: UnlockKind::BlocLoyalty {
                    bloc: B::Media,
                    min: None,
                    max: Some(35),
                },
                or: Some(&UnlockCondition::only(UnlockKind::Turn(20))),
            }),
        }),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Legitimacy, 4), (R::Dread, -3)],
            blocs: &[(B::Media, 8)],
            resolves_crisis: Some("media_scandal"),
            ..PolicyEffects::NONE
        },
    },
    Policy {
        id: "constitutional_convention",
        name: "Constitutional Convention",
        category: PolicyCategory::Institutional,
        cost: 100,
        unlock: Some(UnlockCondition::only(UnlockKind::Milestone("united_front"))),
        requires_target_bloc: false,
        effects: PolicyEffects {
            resources: &[(R::Legitimacy, 10), (R::Polarization, -8)],
            blocs: &[(B::Court, 5)],
            rival_power: -10,
            ..PolicyEffects::NONE
        },
    },
];

pub fn get_policy(id: &str) -> Option<&'static Policy> {
    POLICIES.iter().find(|p| p.id == id)
}

/// Policies available from the first turn
pub fn starting_policy_ids() -> Vec<&'static str> {
    POLICIES
        .iter()
        .filter(|p| matches!(p.unlock, None | Some(UnlockCondition { kind: UnlockKind::Always, .. })))
        .map(|p| p.id)
        .collect()
}
