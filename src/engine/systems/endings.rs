//! Terminal conditions and the closing dispatch

use crate::content::endings::{dispatch_paragraphs, EndingId};
use crate::core::types::BlocId;
use crate::engine::rival::RIVAL_POWER_MAX;
use crate::engine::state::GameState;

pub const COUP_MILITARY_LOYALTY: i32 = 10;

/// Ending for the current state, or `None` while the game continues.
///
/// Loss conditions are checked first and end the game at any turn. The rest
/// only apply once the term is over, in a fixed order, with
/// `RepublicEndures` as the catch-all.
pub fn determine_ending(state: &GameState) -> Option<EndingId> {
    let r = &state.resources;

    if r.legitimacy <= 0 {
        return Some(EndingId::Impeached);
    }
    if state.blocs[BlocId::Military].loyalty <= COUP_MILITARY_LOYALTY {
        return Some(EndingId::Coup);
    }
    if state.rival.power >= RIVAL_POWER_MAX {
        return Some(EndingId::RivalWins);
    }
    if state.turn < state.max_turns {
        return None;
    }

    let ending = if r.colossus_alignment >= 85 {
        EndingId::Protectorate
    } else if state.blocs[BlocId::Syndicate].loyalty >= 80 && r.dread >= 50 {
        EndingId::ShadowRepublic
    } else if r.polarization > 60 {
        EndingId::HollowRepublic
    } else if state.labor_cohesion >= 70
        && r.narrative >= 60
        && state.blocs[BlocId::Labor].loyalty >= 60
    {
        EndingId::NewCompact
    } else if state.labor_cohesion < 30 && r.capital >= 300 {
        EndingId::ManagersVictory
    } else if r.narrative >= 70 {
        EndingId::ANewStory
    } else {
        EndingId::RepublicEndures
    };
    Some(ending)
}

/// Fill the `{placeholder}` slots of a dispatch paragraph
pub fn substitute_dispatch_vars(text: &str, state: &GameState) -> String {
    text.replace("{rivalName}", &state.rival.name)
        .replace("{rivalTitle}", &state.rival.title)
        .replace("{turn}", &state.turn.to_string())
        .replace("{milestonesCount}", &state.achieved_milestone_ids.len().to_string())
        .replace("{policiesCount}", &state.policies_enacted_count.to_string())
}

/// Dispatch for the recorded ending. Empty while the game is still running.
pub fn compose_dispatch(state: &GameState) -> Vec<String> {
    let Some(ending) = state.ending else {
        return Vec::new();
    };
    dispatch_paragraphs(ending)
        .iter()
        .filter(|p| p.condition.map_or(true, |holds| holds(state)))
        .map(|p| substitute_dispatch_vars(p.text, state))
        .collect()
}
