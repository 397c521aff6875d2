//! Resource gauges and their clamping mutators

use serde::{Deserialize, Serialize};

use crate::core::types::{clamp, ResourceKey};

/// The player's visible gauges.
///
/// Every write goes through `set` or `adjust`, which clamp into the key's
/// declared range, so no value can leave its range between mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    pub legitimacy: i32,
    pub narrative: i32,
    pub capital: i32,
    pub mobilization: i32,
    pub polarization: i32,
    pub inflation: i32,
    pub dread: i32,
    pub colossus_alignment: i32,
}

impl ResourceState {
    pub fn get(&self, key: ResourceKey) -> i32 {
        match key {
            ResourceKey::Legitimacy => self.legitimacy,
            ResourceKey::Narrative => self.narrative,
            ResourceKey::Capital => self.capital,
            ResourceKey::Mobilization => self.mobilization,
            ResourceKey::Polarization => self.polarization,
            ResourceKey::Inflation => self.inflation,
            ResourceKey::Dread => self.dread,
            ResourceKey::ColossusAlignment => self.colossus_alignment,
        }
    }

    fn slot_mut(&mut self, key: ResourceKey) -> &mut i32 {
        match key {
            ResourceKey::Legitimacy => &mut self.legitimacy,
            ResourceKey::Narrative => &mut self.narrative,
            ResourceKey::Capital => &mut self.capital,
            ResourceKey::Mobilization => &mut self.mobilization,
            ResourceKey::Polarization => &mut self.polarization,
            ResourceKey::Inflation => &mut self.inflation,
            ResourceKey::Dread => &mut self.dread,
            ResourceKey::ColossusAlignment => &mut self.colossus_alignment,
        }
    }

    /// Set a gauge, clamped into its range
    pub fn set(&mut self, key: ResourceKey, value: i32) {
        let (min, max) = key.range();
        *self.slot_mut(key) = clamp(value, min, max);
    }

    /// Add `delta` to a gauge, clamped into its range
    pub fn adjust(&mut self, key: ResourceKey, delta: i32) {
        let current = self.get(key);
        self.set(key, current.saturating_add(delta));
    }

    /// Apply a list of authored deltas in order
    pub fn apply_deltas(&mut self, deltas: &[(ResourceKey, i32)]) {
        for &(key, delta) in deltas {
            self.adjust(key, delta);
        }
    }

    /// Keys whose stored value lies outside the declared range
    pub fn out_of_range(&self) -> Vec<ResourceKey> {
        ResourceKey::ALL
            .into_iter()
            .filter(|&key| {
                let (min, max) = key.range();
                let value = self.get(key);
                value < min || value > max
            })
            .collect()
    }
}
