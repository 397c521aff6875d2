//! Crisis progression and spawning

use crate::content::crises::{get_crisis_chain, CRISIS_CHAINS};
use crate::engine::crisis::CrisisInstance;
use crate::engine::narrative::{push_news, NewsEntry, Tone};
use crate::engine::state::GameState;

/// Mark an active crisis as resolved. It is cleared on the next crisis step.
pub fn resolve_crisis(state: &mut GameState, chain_id: &str) -> bool {
    match state
        .active_crises
        .iter_mut()
        .find(|c| c.chain_id == chain_id && !c.resolved)
    {
        Some(crisis) => {
            crisis.resolved = true;
            true
        }
        None => false,
    }
}

fn end_crisis(state: &mut GameState, crisis: &CrisisInstance, text: String, tone: Tone) {
    if let Some(chain) = get_crisis_chain(&crisis.chain_id) {
        state
            .event_cooldowns
            .insert(crisis.chain_id.clone(), state.turn + chain.cooldown);
    }
    push_news(&mut state.news_log, NewsEntry { turn: state.turn, text, tone });
}

/// Advance every active crisis by one turn, then roll for new ones.
///
/// Returns the chain ids spawned this turn.
pub fn process_crises(state: &mut GameState) -> Vec<String> {
    let crises = std::mem::take(&mut state.active_crises);
    let mut still_active = Vec::with_capacity(crises.len());

    for mut crisis in crises {
        let Some(chain) = get_crisis_chain(&crisis.chain_id) else {
            tracing::debug!("Dropping crisis with unknown chain {}", crisis.chain_id);
            continue;
        };

        if crisis.resolved {
            tracing::info!("Crisis {} resolved", chain.id);
            end_crisis(state, &crisis, format!("The {} has been contained.", chain.name.to_lowercase()), Tone::Positive);
            continue;
        }

        let Some(stage) = chain.stages.get(crisis.stage_index) else {
            continue;
        };
        state.resources.apply_deltas(stage.resources);
        for &(bloc, delta) in stage.blocs {
            state.adjust_bloc(bloc, delta);
        }

        crisis.turns_at_stage += 1;
        if crisis.turns_at_stage >= stage.duration {
            crisis.stage_index += 1;
            crisis.turns_at_stage = 0;
            if let Some(next) = chain.stages.get(crisis.stage_index) {
                push_news(
                    &mut state.news_log,
                    NewsEntry {
                        turn: state.turn,
                        text: next.headline.to_string(),
                        tone: Tone::Negative,
                    },
                );
            }
        }

        if crisis.stage_index >= chain.stages.len() {
            tracing::info!("Crisis {} burned out", chain.id);
            end_crisis(state, &crisis, format!("The {} has run its course.", chain.name.to_lowercase()), Tone::Neutral);
        } else {
            still_active.push(crisis);
        }
    }
    state.active_crises = still_active;

    let mut spawned = Vec::new();
    for chain in CRISIS_CHAINS {
        if state.active_crises.iter().any(|c| c.chain_id == chain.id) {
            continue;
        }
        if state
            .event_cooldowns
            .get(chain.id)
            .is_some_and(|&eligible| state.turn < eligible)
        {
            continue;
        }
        if !(chain.trigger)(state) {
            continue;
        }
        if !state.rng.chance(chain.spawn_chance) {
            continue;
        }

        tracing::info!("Crisis {} begins", chain.id);
        state.active_crises.push(CrisisInstance::new(chain.id));
        state.fired_event_ids.insert(chain.id.to_string());
        state.event_cooldowns.remove(chain.id);
        if let Some(first) = chain.stages.first() {
            push_news(
                &mut state.news_log,
                NewsEntry {
                    turn: state.turn,
                    text: first.headline.to_string(),
                    tone: Tone::Negative,
                },
            );
        }
        spawned.push(chain.id.to_string());
    }

    spawned
}
