//! Authored crisis chains

use crate::core::types::{BlocId, ResourceKey};
use crate::engine::state::GameState;

#[derive(Debug, Clone, Copy)]
pub struct CrisisStage {
    /// Turns spent at this stage before advancing
    pub duration: u32,
    /// Applied every turn the stage is active
    pub resources: &'static [(ResourceKey, i32)],
    pub blocs: &'static [(BlocId, i32)],
    pub headline: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CrisisChain {
    pub id: &'static str,
    pub name: &'static str,
    pub trigger: fn(&GameState) -> bool,
    /// Probability of spawning on a turn the trigger holds
    pub spawn_chance: f64,
    /// Turns after ending before the chain may spawn again
    pub cooldown: u32,
    pub stages: &'static [CrisisStage],
    pub resolved_by: &'static str,
}

fn bank_run_brewing(state: &GameState) -> bool {
    state.resources.inflation >= 14
        || state.blocs[BlocId::Finance].loyalty < 30
        || state.resources.capital < 40
}

fn strike_brewing(state: &GameState) -> bool {
    state.blocs[BlocId::Labor].loyalty < 35 || state.labor_cohesion < 25
}

fn border_tension(state: &GameState) -> bool {
    state.colossus.patience < 40 || state.blocs[BlocId::Military].loyalty < 35
}

fn scandal_brewing(state: &GameState) -> bool {
    (state.turn >= 6 && state.resources.dread >= 35) || state.blocs[BlocId::Media].loyalty < 30
}

use BlocId as B;
use ResourceKey as R;

pub static CRISIS_CHAINS: &[CrisisChain] = &[
    CrisisChain {
        id: "bank_run",
        name: "Bank Run",
        trigger: bank_run_brewing,
        spawn_chance: 0.25,
        cooldown: 8,
        stages: &[
            CrisisStage {
                duration: 2,
                resources: &[(R::Capital, -10), (R::Inflation, 1)],
                blocs: &[(B::Finance, -2)],
                headline: "Queues are forming outside Miranda National Bank branches.",
            },
            CrisisStage {
                duration: 2,
                resources: &[(R::Capital, -20), (R::Inflation, 2), (R::Legitimacy, -2)],
                blocs: &[(B::Finance, -3), (B::MainStreet, -2)],
                headline: "Three banks limited withdrawals. The queues have turned angry.",
            },
            CrisisStage {
                duration: 1,
                resources: &[(R::Capital, -30), (R::Legitimacy, -4)],
                blocs: &[(B::Finance, -4)],
                headline: "The interbank market froze overnight.",
            },
        ],
        resolved_by: "bank_guarantee",
    },
    CrisisChain {
        id: "general_strike",
        name: "General Strike",
        trigger: strike_brewing,
        spawn_chance: 0.25,
        cooldown: 8,
        stages: &[
            CrisisStage {
                duration: 2,
                resources: &[(R::Mobilization, -3)],
                blocs: &[(B::Industry, -2)],
                headline: "The dockworkers walked off the job. The port is silent.",
            },
            CrisisStage {
                duration: 2,
                resources: &[(R::Capital, -15), (R::Mobilization, -4), (R::Polarization, 2)],
                blocs: &[(B::Industry, -3), (B::Labor, -2)],
                headline: "The strike has spread to the factories and the rail yards.",
            },
            CrisisStage {
                duration: 1,
                resources: &[(R::Capital, -25), (R::Legitimacy, -3)],
                blocs: &[(B::MainStreet, -3)],
                headline: "The capital is at a standstill. Shelves are emptying.",
            },
        ],
        resolved_by: "strike_accord",
    },
    CrisisChain {
        id: "border_incident",
        name: "Border Incident",
        trigger: border_tension,
        spawn_chance: 0.2,
        cooldown: 10,
        stages: &[
            CrisisStage {
                duration: 2,
                resources: &[(R::Dread, 2)],
                blocs: &[(B::Military, -1)],
                headline: "A Colossus patrol crossed the northern border. Both sides call it a mistake.",
            },
            CrisisStage {
                duration: 2,
                resources: &[(R::Dread, 3), (R::Legitimacy, -2), (R::ColossusAlignment, -2)],
                blocs: &[(B::Military, -3)],
                headline: "Troops are massing on both sides of the river.",
            },
            CrisisStage {
                duration: 1,
                resources: &[(R::Dread, 5), (R::Legitimacy, -4)],
                blocs: &[(B::Military, -4), (B::Finance, -2)],
                headline: "Shots were fired at the river crossing. Nobody admits to firing first.",
            },
        ],
        resolved_by: "border_de_escalation",
    },
    CrisisChain {
        id: "media_scandal",
        name: "Media Scandal",
        trigger: scandal_brewing,
        spawn_chance: 0.2,
        cooldown: 8,
        stages: &[
            CrisisStage {
                duration: 2,
                resources: &[(R::Narrative, -3)],
                blocs: &[(B::Media, -2)],
                headline: "The Heralds are asking questions about a palace contract.",
            },
            CrisisStage {
                duration: 2,
                resources: &[(R::Narrative, -4), (R::Legitimacy, -3)],
                blocs: &[(B::Media, -3), (B::Court, -2)],
                headline: "A second source has come forward. The story has legs.",
            },
            CrisisStage {
                duration: 1,
                resources: &[(R::Legitimacy, -5), (R::Polarization, 3)],
                blocs: &[(B::Court, -3)],
                headline: "Congress has opened an inquiry into the palace contract.",
            },
        ],
        resolved_by: "press_freedom_act",
    },
];

pub fn get_crisis_chain(id: &str) -> Option<&'static CrisisChain> {
    CRISIS_CHAINS.iter().find(|c| c.id == id)
}
