//! Per-turn subsystems, run in order by `turn::resolve_turn`

pub mod briefing;
pub mod colossus;
pub mod crises;
pub mod endings;
pub mod milestones;
pub mod rival;
pub mod turn;
pub mod unlocks;

pub use turn::resolve_turn;
