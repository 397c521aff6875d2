//! The game aggregate and per-turn inputs and outputs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::content::endings::EndingId;
use crate::content::policies::starting_policy_ids;
use crate::content::rival_lines::rival_names;
use crate::core::config::{get_difficulty_config, DifficultyConfig};
use crate::core::rng::RandomSource;
use crate::core::types::{clamp, BlocId, Difficulty, Turn};
use crate::engine::blocs::{initial_blocs, Blocs, Congress};
use crate::engine::crisis::{CrisisInstance, DelayedEffect};
use crate::engine::narrative::{BriefingItem, NewsEntry};
use crate::engine::resources::ResourceState;
use crate::engine::rival::{RivalBackground, RivalState};

/// Bounds for the hidden indices and Colossus patience
pub const INDEX_MIN: i32 = 0;
pub const INDEX_MAX: i32 = 100;

/// The neighbouring great power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colossus {
    /// Projection of `resources.colossus_alignment`, re-synced every turn
    pub alignment: i32,
    pub patience: i32,
    pub trade_dependency: i32,
}

impl Colossus {
    pub fn adjust_patience(&mut self, delta: i32) {
        self.patience = clamp(self.patience.saturating_add(delta), INDEX_MIN, INDEX_MAX);
    }

    pub fn adjust_trade_dependency(&mut self, delta: i32) {
        self.trade_dependency =
            clamp(self.trade_dependency.saturating_add(delta), INDEX_MIN, INDEX_MAX);
    }
}

/// One policy the player enacts this turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyChoice {
    pub policy_id: String,
    pub target_bloc: Option<BlocId>,
}

impl PolicyChoice {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            target_bloc: None,
        }
    }

    pub fn targeting(policy_id: impl Into<String>, bloc: BlocId) -> Self {
        Self {
            policy_id: policy_id.into(),
            target_bloc: Some(bloc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievedMilestone {
    pub id: String,
    pub name: String,
    pub reward_text: String,
}

/// Everything that happened during one resolved turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn counter after the turn completed
    pub turn: Turn,
    pub briefing: Vec<BriefingItem>,
    pub newly_unlocked: Vec<String>,
    pub milestones: Vec<AchievedMilestone>,
    pub thresholds_fired: Vec<i32>,
    pub crises_spawned: Vec<String>,
    pub ending: Option<EndingId>,
}

/// Aggregate root for one game.
///
/// Every piece of state that influences a future turn lives here, the
/// random stream included, so a serialized copy resumes exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Completed turns
    pub turn: Turn,
    pub max_turns: Turn,
    pub difficulty: Difficulty,
    pub config: DifficultyConfig,

    pub resources: ResourceState,
    /// Resources at the start of the last resolved turn
    pub previous_resources: Option<ResourceState>,
    pub blocs: Blocs,
    pub congress: Congress,
    pub rival: RivalState,
    pub colossus: Colossus,
    pub central_bank_independence: i32,
    pub labor_cohesion: i32,

    pub active_crises: Vec<CrisisInstance>,
    pub delayed_effects: Vec<DelayedEffect>,

    pub unlocked_policy_ids: BTreeSet<String>,
    pub newly_unlocked_policy_ids: Vec<String>,
    pub achieved_milestone_ids: BTreeSet<String>,
    pub fired_event_ids: BTreeSet<String>,
    /// Chain id to the first turn it may spawn again
    pub event_cooldowns: BTreeMap<String, Turn>,
    pub seen_positive_triggers: BTreeSet<String>,
    pub policies_enacted_count: u32,

    pub news_log: Vec<NewsEntry>,
    pub last_briefing: Vec<BriefingItem>,

    pub game_over: bool,
    pub ending: Option<EndingId>,

    pub rng: RandomSource,
}

impl GameState {
    /// Fresh game from a configuration. The rival identity is drawn from the seeded stream.
    pub fn with_config(config: DifficultyConfig, seed: u64) -> Self {
        let mut rng = RandomSource::seeded(seed);
        let background = rng
            .choose(&RivalBackground::ALL)
            .copied()
            .unwrap_or(RivalBackground::CongressionalLeader);
        let name = rng
            .choose(rival_names(background))
            .copied()
            .unwrap_or("The Rival");

        let resources = config.starting_resources;
        let blocs = initial_blocs(config.starting_loyalty_offset);
        let congress = Congress::from_blocs(&blocs);

        tracing::info!(
            "New {} game, seed {}, rival {} ({})",
            config.difficulty,
            seed,
            name,
            background.title()
        );

        Self {
            turn: 0,
            max_turns: config.max_turns,
            difficulty: config.difficulty,
            resources,
            previous_resources: None,
            blocs,
            congress,
            rival: RivalState::new(name, background, config.starting_rival_power),
            colossus: Colossus {
                alignment: resources.colossus_alignment,
                patience: clamp(config.starting_colossus_patience, INDEX_MIN, INDEX_MAX),
                trade_dependency: clamp(config.starting_trade_dependency, INDEX_MIN, INDEX_MAX),
            },
            central_bank_independence: clamp(
                config.starting_central_bank_independence,
                INDEX_MIN,
                INDEX_MAX,
            ),
            labor_cohesion: clamp(config.starting_labor_cohesion, INDEX_MIN, INDEX_MAX),
            active_crises: Vec::new(),
            delayed_effects: Vec::new(),
            unlocked_policy_ids: starting_policy_ids().into_iter().map(String::from).collect(),
            newly_unlocked_policy_ids: Vec::new(),
            achieved_milestone_ids: BTreeSet::new(),
            fired_event_ids: BTreeSet::new(),
            event_cooldowns: BTreeMap::new(),
            seen_positive_triggers: BTreeSet::new(),
            policies_enacted_count: 0,
            news_log: Vec::new(),
            last_briefing: Vec::new(),
            game_over: false,
            ending: None,
            rng,
            config,
        }
    }

    pub fn adjust_bloc(&mut self, id: BlocId, delta: i32) {
        self.blocs[id].adjust_loyalty(delta);
    }

    pub fn adjust_labor_cohesion(&mut self, delta: i32) {
        self.labor_cohesion = clamp(self.labor_cohesion.saturating_add(delta), INDEX_MIN, INDEX_MAX);
    }

    pub fn adjust_central_bank(&mut self, delta: i32) {
        self.central_bank_independence = clamp(
            self.central_bank_independence.saturating_add(delta),
            INDEX_MIN,
            INDEX_MAX,
        );
    }

    /// Recompute seat shares and majority from current loyalties
    pub fn refresh_congress(&mut self) {
        self.congress = Congress::from_blocs(&self.blocs);
    }

    /// Run `f` with the game's random stream split off from the rest of the state
    pub fn with_rng<R>(&mut self, f: impl FnOnce(&mut GameState, &mut RandomSource) -> R) -> R {
        let mut rng = std::mem::take(&mut self.rng);
        let result = f(self, &mut rng);
        self.rng = rng;
        result
    }

    pub fn is_policy_unlocked(&self, policy_id: &str) -> bool {
        self.unlocked_policy_ids.contains(policy_id)
    }
}

/// Fresh game using the built-in configuration for `difficulty`
pub fn create_initial_state(difficulty: Difficulty, seed: u64) -> GameState {
    GameState::with_config(get_difficulty_config(difficulty), seed)
}
