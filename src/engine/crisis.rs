//! Active crisis instances and queued delayed effects

use serde::{Deserialize, Serialize};

use crate::core::types::ResourceKey;

/// One running instance of an authored crisis chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisInstance {
    pub chain_id: String,
    pub stage_index: usize,
    pub turns_at_stage: u32,
    pub resolved: bool,
}

impl CrisisInstance {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            stage_index: 0,
            turns_at_stage: 0,
            resolved: false,
        }
    }
}

/// Resource deltas scheduled by a policy to land a few turns later
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedEffect {
    pub policy_id: String,
    pub turns_remaining: u32,
    pub resources: Vec<(ResourceKey, i32)>,
}
