//! Rival power growth, flavor text and threshold effects

use crate::content::rival_lines::{action_lines, ActionLine, FALLBACK_RIVAL_ACTION};
use crate::core::rng::RandomSource;
use crate::core::types::{round_half_up, BlocId};
use crate::engine::blocs::FRIENDLY_LOYALTY;
use crate::engine::rival::{PowerTier, Weakness};
use crate::engine::state::GameState;

/// Power breakpoints, each fires once per game
pub const RIVAL_THRESHOLDS: [i32; 6] = [30, 50, 60, 70, 85, 95];

/// Pre-multiplier cap on per-turn growth
pub const MAX_RIVAL_GROWTH: i32 = 8;

pub const GRIDLOCK_THRESHOLD: i32 = 50;
pub const CULTURE_WAR_THRESHOLD: i32 = 60;
/// Turns a timed rival effect lasts once armed
pub const TIMED_EFFECT_TURNS: u32 = 4;

/// Severity assigned to a missing majority; the other weaknesses scale with distance
pub const NO_MAJORITY_SEVERITY: i32 = 15;

/// Blocs squeezed while the culture war runs
pub const CULTURE_WAR_BLOCS: [BlocId; 2] = [BlocId::Clergy, BlocId::MainStreet];
pub const CULTURE_WAR_PENALTY: i32 = 5;

/// Uncapped structural growth before the difficulty multiplier
fn raw_power_delta(state: &GameState) -> i32 {
    let res = &state.resources;
    let mut delta = 1;

    if res.polarization > 30 {
        delta += (res.polarization - 30) / 5;
    }
    if res.inflation > 10 {
        delta += (res.inflation - 10) / 5 * 2;
    }
    if res.legitimacy < 40 {
        delta += 3;
    }
    if state.labor_cohesion < 25 {
        delta += 2;
    }
    if res.narrative < 30 {
        delta += 1;
    }
    if res.mobilization > 40 {
        delta -= (res.mobilization - 40) / 8;
    }
    if res.narrative > 50 {
        delta -= 2;
    }
    if state.labor_cohesion > 40 {
        delta -= (state.labor_cohesion - 40) / 8;
    }
    if res.legitimacy > 70 {
        delta -= 2;
    }
    if !state.congress.friendly_majority {
        delta += 1;
    }

    delta
}

/// Growth for this turn: capped at +8, then scaled by difficulty, then rounded
pub fn calculate_rival_power_delta(state: &GameState) -> i32 {
    let capped = raw_power_delta(state).min(MAX_RIVAL_GROWTH);
    round_half_up(f64::from(capped) * state.config.rival_growth_multiplier)
}

/// Most severe exploitable weakness. Earlier candidates win ties.
pub fn identify_dominant_weakness(state: &GameState) -> Weakness {
    let res = &state.resources;
    let candidates = [
        (Weakness::Legitimacy, res.legitimacy < 50, 50 - res.legitimacy),
        (Weakness::Inflation, res.inflation > 12, res.inflation - 12),
        (Weakness::NoMajority, !state.congress.friendly_majority, NO_MAJORITY_SEVERITY),
        (Weakness::Polarization, res.polarization > 40, res.polarization - 40),
        (Weakness::Narrative, res.narrative < 40, 40 - res.narrative),
    ];

    let mut best = Weakness::Baseline;
    let mut best_severity = 0;
    for (weakness, applies, severity) in candidates {
        if applies && severity > best_severity {
            best = weakness;
            best_severity = severity;
        }
    }
    best
}

/// Pick a line for the rival's current tier, weighted 2:1 toward the dominant weakness
pub fn generate_rival_action(state: &GameState, rng: &mut RandomSource) -> String {
    let tier = PowerTier::from_power(state.rival.power);
    let weakness = identify_dominant_weakness(state);

    let tier_lines: Vec<&ActionLine> = action_lines(state.rival.background)
        .iter()
        .filter(|l| l.tier == tier)
        .collect();
    let general: Vec<&ActionLine> = tier_lines.iter().copied().filter(|l| l.weakness.is_none()).collect();
    let specific: Vec<&ActionLine> = tier_lines
        .iter()
        .copied()
        .filter(|l| l.weakness == Some(weakness))
        .collect();

    let pool: Vec<&ActionLine> = if !specific.is_empty() {
        specific
            .iter()
            .chain(specific.iter())
            .chain(general.iter())
            .copied()
            .collect()
    } else if !general.is_empty() {
        general
    } else {
        tier_lines
    };

    rng.choose(&pool)
        .map(|l| l.text.to_string())
        .unwrap_or_else(|| FALLBACK_RIVAL_ACTION.to_string())
}

/// Breakpoints at or below current power that have not fired yet
pub fn check_rival_thresholds(state: &GameState) -> Vec<i32> {
    RIVAL_THRESHOLDS
        .iter()
        .copied()
        .filter(|&t| state.rival.power >= t && !state.rival.thresholds_fired.contains(&t))
        .collect()
}

/// One turn of rival behavior. Returns the thresholds that fired.
pub fn process_rival_turn(state: &mut GameState) -> Vec<i32> {
    let delta = calculate_rival_power_delta(state);
    state.rival.power_delta = delta;
    state.rival.adjust_power(delta);

    state.rival.last_action = state.with_rng(|s, rng| generate_rival_action(s, rng));

    let fired = check_rival_thresholds(state);
    for &threshold in &fired {
        state.rival.thresholds_fired.insert(threshold);
        state.fired_event_ids.insert(format!("rival_threshold_{threshold}"));
        tracing::info!("Rival {} crossed power {}", state.rival.name, threshold);
    }

    if state.rival.gridlock_countdown > 0 {
        state.rival.gridlock_countdown -= 1;
    }
    if state.rival.culture_war_countdown > 0 {
        state.rival.culture_war_countdown -= 1;
        for bloc in CULTURE_WAR_BLOCS {
            if state.blocs[bloc].loyalty < FRIENDLY_LOYALTY {
                state.adjust_bloc(bloc, -CULTURE_WAR_PENALTY);
            }
        }
    }

    if fired.contains(&GRIDLOCK_THRESHOLD) {
        state.rival.gridlock_countdown = TIMED_EFFECT_TURNS;
    }
    if fired.contains(&CULTURE_WAR_THRESHOLD) {
        state.rival.culture_war_countdown = TIMED_EFFECT_TURNS;
    }

    tracing::debug!(
        "Rival power {} ({:+}), weakness {:?}",
        state.rival.power,
        delta,
        identify_dominant_weakness(state)
    );
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DifficultyConfig;
    use crate::core::types::Difficulty;
    use crate::engine::state::create_initial_state;

    fn worst_case(difficulty: Difficulty) -> GameState {
        let mut s = create_initial_state(difficulty, 1);
        s.resources.polarization = 80;
        s.resources.inflation = 30;
        s.resources.legitimacy = 10;
        s.resources.narrative = 10;
        s.resources.mobilization = 10;
        s.labor_cohesion = 10;
        s.congress.friendly_majority = false;
        s
    }

    #[test]
    fn test_delta_capped_before_multiplier() {
        let s = worst_case(Difficulty::Standard);
        assert!(raw_power_delta(&s) > MAX_RIVAL_GROWTH);
        assert_eq!(calculate_rival_power_delta(&s), 8);
    }

    #[test]
    fn test_crisis_multiplier_applies_after_cap() {
        let s = worst_case(Difficulty::Crisis);
        // 8 * 1.3 = 10.4
        assert_eq!(calculate_rival_power_delta(&s), 10);
        let story = worst_case(Difficulty::Story);
        // 8 * 0.7 = 5.6
        assert_eq!(calculate_rival_power_delta(&story), 6);
    }

    #[test]
    fn test_negative_delta_rounds_half_up() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.config = DifficultyConfig {
            rival_growth_multiplier: 0.5,
            ..DifficultyConfig::standard()
        };
        s.resources.polarization = 20;
        s.resources.inflation = 5;
        s.resources.legitimacy = 80;
        s.resources.narrative = 60;
        s.resources.mobilization = 56;
        s.labor_cohesion = 40;
        s.congress.friendly_majority = true;
        // 1 - 2 - 2 - 2 = -5, times 0.5 = -2.5, rounds to -2
        assert_eq!(raw_power_delta(&s), -5);
        assert_eq!(calculate_rival_power_delta(&s), -2);
    }

    #[test]
    fn test_weakness_severity_ordering() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.resources.legitimacy = 45;
        s.resources.inflation = 20;
        s.resources.polarization = 30;
        s.resources.narrative = 45;
        s.congress.friendly_majority = true;
        assert_eq!(identify_dominant_weakness(&s), Weakness::Inflation);
    }

    #[test]
    fn test_weakness_tie_goes_to_first_listed() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.resources.legitimacy = 35;
        s.resources.inflation = 6;
        s.resources.polarization = 30;
        s.resources.narrative = 45;
        s.congress.friendly_majority = false;
        // legitimacy severity 15 equals the flat no-majority severity
        assert_eq!(identify_dominant_weakness(&s), Weakness::Legitimacy);
    }

    #[test]
    fn test_no_majority_severity_is_flat() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.resources.legitimacy = 60;
        s.resources.inflation = 6;
        s.resources.polarization = 54;
        s.resources.narrative = 45;
        s.congress.friendly_majority = false;
        // polarization severity 14 is below the constant 15
        assert_eq!(identify_dominant_weakness(&s), Weakness::NoMajority);
        s.resources.polarization = 56;
        assert_eq!(identify_dominant_weakness(&s), Weakness::Polarization);
    }

    #[test]
    fn test_baseline_when_nothing_applies() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.resources.legitimacy = 60;
        s.resources.inflation = 6;
        s.resources.polarization = 30;
        s.resources.narrative = 50;
        s.congress.friendly_majority = true;
        assert_eq!(identify_dominant_weakness(&s), Weakness::Baseline);
    }

    #[test]
    fn test_action_comes_from_current_tier() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.rival.power = 80;
        let mut rng = RandomSource::seeded(3);
        for _ in 0..20 {
            let text = generate_rival_action(&s, &mut rng);
            assert!(action_lines(s.rival.background)
                .iter()
                .any(|l| l.tier == PowerTier::High && l.text == text));
        }
    }

    #[test]
    fn test_thresholds_fire_once() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.rival.power = 55;
        assert_eq!(check_rival_thresholds(&s), vec![30, 50]);
        s.rival.thresholds_fired.extend([30, 50]);
        assert!(check_rival_thresholds(&s).is_empty());
    }

    #[test]
    fn test_gridlock_armed_at_fifty() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.rival.power = 49;
        s.rival.thresholds_fired.insert(30);
        s.resources.polarization = 60;
        let fired = process_rival_turn(&mut s);
        assert!(fired.contains(&50));
        assert_eq!(s.rival.gridlock_countdown, TIMED_EFFECT_TURNS);
        assert!(s.fired_event_ids.contains("rival_threshold_50"));
    }

    #[test]
    fn test_culture_war_only_hits_unfriendly_blocs() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.rival.culture_war_countdown = 2;
        s.blocs[BlocId::Clergy].loyalty = 40;
        s.blocs[BlocId::MainStreet].loyalty = 60;
        process_rival_turn(&mut s);
        assert_eq!(s.blocs[BlocId::Clergy].loyalty, 35);
        assert_eq!(s.blocs[BlocId::MainStreet].loyalty, 60);
        assert_eq!(s.rival.culture_war_countdown, 1);
    }

    #[test]
    fn test_culture_war_floor_is_zero() {
        let mut s = create_initial_state(Difficulty::Standard, 1);
        s.rival.culture_war_countdown = 1;
        s.blocs[BlocId::Clergy].loyalty = 3;
        process_rival_turn(&mut s);
        assert_eq!(s.blocs[BlocId::Clergy].loyalty, 0);
    }
}
