//! Colossus relations and Central Bank drift

use crate::core::types::{round_half_up, BlocId, ResourceKey};
use crate::engine::state::GameState;

/// Trade income at full dependency
pub const BASE_TRADE_INCOME: i32 = 10;

/// Patience change and capital shock once patience is exhausted
pub const PATIENCE_EXHAUSTED_CAPITAL: i32 = -15;
pub const PATIENCE_EXHAUSTED_INFLATION: i32 = 2;
pub const PATIENCE_EXHAUSTED_FINANCE: i32 = -5;

pub const HIGH_INDEPENDENCE: i32 = 70;
pub const LOW_INDEPENDENCE: i32 = 30;

/// Per-turn Colossus transition.
///
/// Alignment is re-read from the resource gauge first; the Colossus field is
/// only a projection of it. The exhausted-patience penalty repeats every
/// turn patience stays at zero.
pub fn process_colossus_turn(state: &mut GameState) {
    state.colossus.alignment = state.resources.colossus_alignment;
    let alignment = state.colossus.alignment;

    if alignment < 40 {
        state.colossus.adjust_patience(-3);
    } else if alignment < 55 {
        state.colossus.adjust_patience(-1);
    } else if alignment > 70 {
        state.colossus.adjust_patience(1);
    }

    if state.colossus.patience <= 0 {
        state.resources.adjust(ResourceKey::Capital, PATIENCE_EXHAUSTED_CAPITAL);
        state.resources.adjust(ResourceKey::Inflation, PATIENCE_EXHAUSTED_INFLATION);
        state.adjust_bloc(BlocId::Finance, PATIENCE_EXHAUSTED_FINANCE);
        tracing::debug!("Colossus patience exhausted, economic pressure applied");
    }

    if alignment > 70 {
        state.adjust_bloc(BlocId::Finance, 1);
        state.adjust_bloc(BlocId::Academy, -1);
    } else if alignment < 30 {
        state.adjust_bloc(BlocId::Industry, 1);
        state.adjust_bloc(BlocId::Finance, -2);
    }
}

/// Per-turn Central Bank transition. The 30 to 69 band has no automatic effect.
pub fn process_central_bank_turn(state: &mut GameState) {
    let cbi = state.central_bank_independence;

    if cbi >= HIGH_INDEPENDENCE {
        state.adjust_bloc(BlocId::Finance, 1);
        state.resources.adjust(ResourceKey::Legitimacy, 1);
        // Half-rate drift
        if state.turn % 2 == 1 {
            state.resources.adjust(ResourceKey::Inflation, 1);
        }
    } else if cbi < LOW_INDEPENDENCE {
        state.adjust_bloc(BlocId::Finance, -2);
        state.resources.adjust(ResourceKey::Inflation, 1);
        state.resources.adjust(ResourceKey::Capital, 3);
    }
}

/// Capital earned from trade with the Colossus, halved when relations are cold
pub fn calculate_trade_income(state: &GameState) -> i32 {
    let income = round_half_up(
        f64::from(BASE_TRADE_INCOME) * f64::from(state.colossus.trade_dependency) / 100.0,
    );
    if state.colossus.alignment < 30 {
        round_half_up(f64::from(income) * 0.5)
    } else {
        income
    }
}
