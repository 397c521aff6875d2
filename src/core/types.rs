//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::core::error::MirandaError;

/// Game turn counter (one turn is one month in office)
pub type Turn = u32;

/// Faction identifier. The set is closed; every per-bloc table is indexed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlocId {
    Court,
    Military,
    Enforcers,
    Finance,
    Industry,
    Tech,
    Agri,
    MainStreet,
    Media,
    Clergy,
    Academy,
    Artists,
    Labor,
    Syndicate,
}

impl BlocId {
    pub const COUNT: usize = 14;

    pub const ALL: [BlocId; BlocId::COUNT] = [
        BlocId::Court,
        BlocId::Military,
        BlocId::Enforcers,
        BlocId::Finance,
        BlocId::Industry,
        BlocId::Tech,
        BlocId::Agri,
        BlocId::MainStreet,
        BlocId::Media,
        BlocId::Clergy,
        BlocId::Academy,
        BlocId::Artists,
        BlocId::Labor,
        BlocId::Syndicate,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn group(self) -> BlocGroup {
        match self {
            BlocId::Court | BlocId::Military | BlocId::Enforcers => BlocGroup::StatePower,
            BlocId::Finance
            | BlocId::Industry
            | BlocId::Tech
            | BlocId::Agri
            | BlocId::MainStreet => BlocGroup::Capital,
            BlocId::Media | BlocId::Clergy | BlocId::Academy | BlocId::Artists => {
                BlocGroup::Culture
            }
            BlocId::Labor => BlocGroup::Labor,
            BlocId::Syndicate => BlocGroup::Shadow,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlocId::Court => "court",
            BlocId::Military => "military",
            BlocId::Enforcers => "enforcers",
            BlocId::Finance => "finance",
            BlocId::Industry => "industry",
            BlocId::Tech => "tech",
            BlocId::Agri => "agri",
            BlocId::MainStreet => "main_street",
            BlocId::Media => "media",
            BlocId::Clergy => "clergy",
            BlocId::Academy => "academy",
            BlocId::Artists => "artists",
            BlocId::Labor => "labor",
            BlocId::Syndicate => "syndicate",
        }
    }
}

impl fmt::Display for BlocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display grouping for blocs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlocGroup {
    StatePower,
    Capital,
    Culture,
    Labor,
    Shadow,
}

/// Fixed-size table with one slot per bloc.
///
/// Indexing by `BlocId` can never miss, so adding a bloc forces every table
/// built with `from_fn` to produce a value for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlocMap<T>([T; BlocId::COUNT]);

impl<T> BlocMap<T> {
    pub fn from_fn(mut f: impl FnMut(BlocId) -> T) -> Self {
        Self(BlocId::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlocId, &T)> {
        BlocId::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BlocId, &mut T)> {
        BlocId::ALL.into_iter().zip(self.0.iter_mut())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<BlocId> for BlocMap<T> {
    type Output = T;

    fn index(&self, id: BlocId) -> &T {
        &self.0[id.index()]
    }
}

impl<T> IndexMut<BlocId> for BlocMap<T> {
    fn index_mut(&mut self, id: BlocId) -> &mut T {
        &mut self.0[id.index()]
    }
}

/// Named numeric gauges on the resource panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKey {
    Legitimacy,
    Narrative,
    Capital,
    Mobilization,
    Polarization,
    Inflation,
    Dread,
    ColossusAlignment,
}

impl ResourceKey {
    pub const ALL: [ResourceKey; 8] = [
        ResourceKey::Legitimacy,
        ResourceKey::Narrative,
        ResourceKey::Capital,
        ResourceKey::Mobilization,
        ResourceKey::Polarization,
        ResourceKey::Inflation,
        ResourceKey::Dread,
        ResourceKey::ColossusAlignment,
    ];

    /// Inclusive clamp range
    pub fn range(self) -> (i32, i32) {
        match self {
            ResourceKey::Capital => (0, 999),
            ResourceKey::Inflation => (0, 30),
            ResourceKey::Legitimacy
            | ResourceKey::Narrative
            | ResourceKey::Mobilization
            | ResourceKey::Polarization
            | ResourceKey::Dread
            | ResourceKey::ColossusAlignment => (0, 100),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKey::Legitimacy => "legitimacy",
            ResourceKey::Narrative => "narrative",
            ResourceKey::Capital => "capital",
            ResourceKey::Mobilization => "mobilization",
            ResourceKey::Polarization => "polarization",
            ResourceKey::Inflation => "inflation",
            ResourceKey::Dread => "dread",
            ResourceKey::ColossusAlignment => "colossus_alignment",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty setting chosen at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Story,
    Standard,
    Crisis,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Story => "story",
            Difficulty::Standard => "standard",
            Difficulty::Crisis => "crisis",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = MirandaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "story" => Ok(Difficulty::Story),
            "standard" => Ok(Difficulty::Standard),
            "crisis" => Ok(Difficulty::Crisis),
            other => Err(MirandaError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Clamp `value` into the inclusive range `[min, max]`
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Round half toward positive infinity, so `-2.5` becomes `-2` and `2.5` becomes `3`.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
