//! Rival opposition figure state

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::types::clamp;

pub const RIVAL_POWER_MIN: i32 = 0;
pub const RIVAL_POWER_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RivalBackground {
    CongressionalLeader,
    RegionalGovernor,
    RetiredGeneral,
    MediaPersonality,
}

impl RivalBackground {
    pub const ALL: [RivalBackground; 4] = [
        RivalBackground::CongressionalLeader,
        RivalBackground::RegionalGovernor,
        RivalBackground::RetiredGeneral,
        RivalBackground::MediaPersonality,
    ];

    pub fn title(self) -> &'static str {
        match self {
            RivalBackground::CongressionalLeader => "Congressional Leader",
            RivalBackground::RegionalGovernor => "Regional Governor",
            RivalBackground::RetiredGeneral => "Retired General",
            RivalBackground::MediaPersonality => "Media Personality",
        }
    }
}

/// Power band used to pick flavor lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerTier {
    Low,
    Mid,
    High,
}

impl PowerTier {
    pub fn from_power(power: i32) -> Self {
        if power >= 66 {
            PowerTier::High
        } else if power >= 36 {
            PowerTier::Mid
        } else {
            PowerTier::Low
        }
    }
}

/// The player weakness a rival line can be written against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weakness {
    Legitimacy,
    Inflation,
    NoMajority,
    Polarization,
    Narrative,
    Baseline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RivalState {
    pub name: String,
    pub title: String,
    pub background: RivalBackground,
    pub power: i32,
    /// Last computed per-turn change, kept for display and briefing
    pub power_delta: i32,
    /// Breakpoints already triggered; only ever grows
    pub thresholds_fired: BTreeSet<i32>,
    pub gridlock_countdown: u32,
    pub culture_war_countdown: u32,
    pub last_action: String,
}

impl RivalState {
    pub fn new(name: impl Into<String>, background: RivalBackground, power: i32) -> Self {
        Self {
            name: name.into(),
            title: background.title().to_string(),
            background,
            power: clamp(power, RIVAL_POWER_MIN, RIVAL_POWER_MAX),
            power_delta: 0,
            thresholds_fired: BTreeSet::new(),
            gridlock_countdown: 0,
            culture_war_countdown: 0,
            last_action: String::new(),
        }
    }

    pub fn adjust_power(&mut self, delta: i32) {
        self.power = clamp(self.power.saturating_add(delta), RIVAL_POWER_MIN, RIVAL_POWER_MAX);
    }

    pub fn gridlock_active(&self) -> bool {
        self.gridlock_countdown > 0
    }

    pub fn culture_war_active(&self) -> bool {
        self.culture_war_countdown > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_tiers() {
        assert_eq!(PowerTier::from_power(0), PowerTier::Low);
        assert_eq!(PowerTier::from_power(35), PowerTier::Low);
        assert_eq!(PowerTier::from_power(36), PowerTier::Mid);
        assert_eq!(PowerTier::from_power(65), PowerTier::Mid);
        assert_eq!(PowerTier::from_power(66), PowerTier::High);
    }

    #[test]
    fn test_new_rival_takes_background_title() {
        let rival = RivalState::new("General Braga", RivalBackground::RetiredGeneral, 15);
        assert_eq!(rival.title, "Retired General");
        assert_eq!(rival.power, 15);
        assert!(rival.thresholds_fired.is_empty());
        assert!(!rival.gridlock_active());
    }

    #[test]
    fn test_adjust_power_clamps() {
        let mut rival = RivalState::new("Ricardo Vox", RivalBackground::MediaPersonality, 95);
        rival.adjust_power(12);
        assert_eq!(rival.power, 100);
        rival.adjust_power(-300);
        assert_eq!(rival.power, 0);
    }
}
