//! Narrative items surfaced to the player

use serde::{Deserialize, Serialize};

use crate::core::types::Turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefingKind {
    Rival,
    Crisis,
    Discovery,
    Resource,
    BlocShift,
    Unlock,
    Vignette,
}

/// One line of the post-turn briefing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingItem {
    pub kind: BriefingKind,
    pub text: String,
    pub tone: Tone,
}

/// Running history shown in the news log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub turn: Turn,
    pub text: String,
    pub tone: Tone,
}

/// Entries older than this are dropped from the log
pub const NEWS_LOG_CAPACITY: usize = 60;

pub fn push_news(log: &mut Vec<NewsEntry>, entry: NewsEntry) {
    log.push(entry);
    if log.len() > NEWS_LOG_CAPACITY {
        let excess = log.len() - NEWS_LOG_CAPACITY;
        log.drain(..excess);
    }
}
