//! Post-turn briefing
//!
//! Candidates are scored by fixed priorities, the top slice is taken, and a
//! separate fairness pass makes sure a full slate is not all bad news when
//! good news exists.

use crate::content::narrative::{
    bloc_high_lines, bloc_low_lines, crisis_stage_text, rival_crossing_text, CAPITAL_HIGH_TEXT,
    CAPITAL_LOW_TEXT, COLOSSUS_WARNING_TEXT, DISCOVERY_TEXT, DREAD_HIGH_TEXT, DREAD_LOW_TEXT,
    GENERIC_OUTCOMES, INFLATION_HIGH_TEXT, INFLATION_SEVERE_TEXT, LEGITIMACY_HIGH_TEXT,
    LEGITIMACY_LOW_TEXT, MOBILIZATION_HIGH_TEXT, MOBILIZATION_LOW_TEXT, NARRATIVE_HIGH_TEXT,
    NARRATIVE_LOW_TEXT, POLARIZATION_HIGH_TEXT, POLARIZATION_LOW_TEXT, RIVAL_RETREAT_TEXT,
    UNLOCK_TEXT, VIGNETTES,
};
use crate::core::rng::RandomSource;
use crate::core::types::{BlocId, ResourceKey};
use crate::engine::narrative::{push_news, BriefingItem, BriefingKind, NewsEntry, Tone};
use crate::engine::state::GameState;

pub const MAX_BRIEFING_ITEMS: usize = 3;

/// Below this many candidates a vignette is added
pub const MIN_CANDIDATES: usize = 2;

/// A legitimacy drop at least this large in one turn reads as a discovery
pub const DISCOVERY_DROP: i32 = 15;

/// Rival de-escalation line fires at or below this delta
pub const RIVAL_RETREAT_DELTA: i32 = -10;

pub const COLOSSUS_WARNING_PATIENCE: i32 = 30;

/// Loyalty bands that produce bloc lines. Low is exclusive on both ends, high inclusive.
pub const BLOC_LOW_BAND: (i32, i32) = (15, 25);
pub const BLOC_HIGH_BAND: (i32, i32) = (70, 75);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    AtLeast(i32),
    Above(i32),
    Below(i32),
}

impl Bound {
    fn holds(self, value: i32) -> bool {
        match self {
            Bound::AtLeast(t) => value >= t,
            Bound::Above(t) => value > t,
            Bound::Below(t) => value < t,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ResourceTrigger {
    /// Key recorded in `seen_positive_triggers`, unused for negative triggers
    key: &'static str,
    resource: ResourceKey,
    bound: Bound,
    priority: u32,
    text: &'static str,
}

const NEGATIVE_TRIGGERS: [ResourceTrigger; 8] = [
    ResourceTrigger { key: "inflation_severe", resource: ResourceKey::Inflation, bound: Bound::AtLeast(18), priority: 82, text: INFLATION_SEVERE_TEXT },
    ResourceTrigger { key: "inflation_high", resource: ResourceKey::Inflation, bound: Bound::AtLeast(10), priority: 80, text: INFLATION_HIGH_TEXT },
    ResourceTrigger { key: "narrative_low", resource: ResourceKey::Narrative, bound: Bound::Below(30), priority: 78, text: NARRATIVE_LOW_TEXT },
    ResourceTrigger { key: "legitimacy_low", resource: ResourceKey::Legitimacy, bound: Bound::Below(30), priority: 76, text: LEGITIMACY_LOW_TEXT },
    ResourceTrigger { key: "mobilization_low", resource: ResourceKey::Mobilization, bound: Bound::Below(20), priority: 75, text: MOBILIZATION_LOW_TEXT },
    ResourceTrigger { key: "dread_high", resource: ResourceKey::Dread, bound: Bound::AtLeast(40), priority: 74, text: DREAD_HIGH_TEXT },
    ResourceTrigger { key: "polarization_high", resource: ResourceKey::Polarization, bound: Bound::AtLeast(60), priority: 72, text: POLARIZATION_HIGH_TEXT },
    ResourceTrigger { key: "capital_low", resource: ResourceKey::Capital, bound: Bound::Below(20), priority: 68, text: CAPITAL_LOW_TEXT },
];

const POSITIVE_TRIGGERS: [ResourceTrigger; 6] = [
    ResourceTrigger { key: "narrative_high", resource: ResourceKey::Narrative, bound: Bound::AtLeast(60), priority: 70, text: NARRATIVE_HIGH_TEXT },
    ResourceTrigger { key: "legitimacy_high", resource: ResourceKey::Legitimacy, bound: Bound::Above(75), priority: 68, text: LEGITIMACY_HIGH_TEXT },
    ResourceTrigger { key: "capital_high", resource: ResourceKey::Capital, bound: Bound::Above(250), priority: 66, text: CAPITAL_HIGH_TEXT },
    ResourceTrigger { key: "polarization_low", resource: ResourceKey::Polarization, bound: Bound::Below(30), priority: 65, text: POLARIZATION_LOW_TEXT },
    ResourceTrigger { key: "dread_low", resource: ResourceKey::Dread, bound: Bound::Below(20), priority: 64, text: DREAD_LOW_TEXT },
    ResourceTrigger { key: "mobilization_high", resource: ResourceKey::Mobilization, bound: Bound::Above(70), priority: 62, text: MOBILIZATION_HIGH_TEXT },
];

/// Scored briefing line before selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub item: BriefingItem,
    pub priority: u32,
    /// One-time positive trigger this line would consume
    pub trigger: Option<&'static str>,
}

impl Candidate {
    fn new(kind: BriefingKind, text: impl Into<String>, tone: Tone, priority: u32) -> Self {
        Self {
            item: BriefingItem {
                kind,
                text: text.into(),
                tone,
            },
            priority,
            trigger: None,
        }
    }

    fn is_positive(&self) -> bool {
        self.item.tone == Tone::Positive
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefingOutcome {
    pub items: Vec<BriefingItem>,
    /// Positive trigger keys shown for the first time
    pub new_positive_triggers: Vec<String>,
}

fn draw_line(lines: &[&str], rng: &mut RandomSource) -> String {
    rng.choose(lines)
        .or_else(|| rng.choose(GENERIC_OUTCOMES))
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Every candidate line for the turn just resolved, in generation order.
///
/// Empty on the first turn, when there is no previous snapshot to compare.
pub fn collect_candidates(state: &GameState, rng: &mut RandomSource) -> Vec<Candidate> {
    let Some(previous) = state.previous_resources else {
        return Vec::new();
    };
    let current = &state.resources;
    let mut candidates = Vec::new();

    if !state.rival.last_action.is_empty() {
        candidates.push(Candidate::new(
            BriefingKind::Rival,
            state.rival.last_action.clone(),
            Tone::Negative,
            100,
        ));
    }

    if let Some(crisis) = state.active_crises.first() {
        candidates.push(Candidate::new(
            BriefingKind::Crisis,
            crisis_stage_text(crisis.stage_index),
            Tone::Negative,
            95,
        ));
    }

    if previous.legitimacy - current.legitimacy >= DISCOVERY_DROP {
        candidates.push(Candidate::new(BriefingKind::Discovery, DISCOVERY_TEXT, Tone::Negative, 90));
    }

    let power = state.rival.power;
    let power_before = power - state.rival.power_delta;
    for (threshold, priority) in [(30, 82), (50, 85), (75, 88), (85, 90)] {
        if power >= threshold && power_before < threshold {
            if let Some(text) = rival_crossing_text(threshold) {
                candidates.push(Candidate::new(BriefingKind::Rival, text, Tone::Negative, priority));
            }
        }
    }

    if state.rival.power_delta <= RIVAL_RETREAT_DELTA {
        candidates.push(Candidate::new(BriefingKind::Rival, RIVAL_RETREAT_TEXT, Tone::Positive, 72));
    }

    for trigger in NEGATIVE_TRIGGERS {
        if crossed(trigger.bound, previous.get(trigger.resource), current.get(trigger.resource)) {
            candidates.push(Candidate::new(
                BriefingKind::Resource,
                trigger.text,
                Tone::Negative,
                trigger.priority,
            ));
        }
    }

    for trigger in POSITIVE_TRIGGERS {
        if state.seen_positive_triggers.contains(trigger.key) {
            continue;
        }
        if crossed(trigger.bound, previous.get(trigger.resource), current.get(trigger.resource)) {
            let mut candidate = Candidate::new(
                BriefingKind::Resource,
                trigger.text,
                Tone::Positive,
                trigger.priority,
            );
            candidate.trigger = Some(trigger.key);
            candidates.push(candidate);
        }
    }

    for id in BlocId::ALL {
        let loyalty = state.blocs[id].loyalty;
        if loyalty > BLOC_LOW_BAND.0 && loyalty < BLOC_LOW_BAND.1 {
            let text = draw_line(bloc_low_lines(id), rng);
            candidates.push(Candidate::new(BriefingKind::BlocShift, text, Tone::Negative, 65));
        } else if (BLOC_HIGH_BAND.0..=BLOC_HIGH_BAND.1).contains(&loyalty) {
            let text = draw_line(bloc_high_lines(id), rng);
            candidates.push(Candidate::new(BriefingKind::BlocShift, text, Tone::Positive, 60));
        }
    }

    if !state.newly_unlocked_policy_ids.is_empty() {
        candidates.push(Candidate::new(BriefingKind::Unlock, UNLOCK_TEXT, Tone::Neutral, 50));
    }

    if state.colossus.patience < COLOSSUS_WARNING_PATIENCE {
        candidates.push(Candidate::new(
            BriefingKind::Resource,
            COLOSSUS_WARNING_TEXT,
            Tone::Negative,
            55,
        ));
    }

    if candidates.len() < MIN_CANDIDATES {
        let text = draw_line(VIGNETTES, rng);
        candidates.push(Candidate::new(BriefingKind::Vignette, text, Tone::Neutral, 35));
    }

    candidates
}

fn crossed(bound: Bound, before: i32, after: i32) -> bool {
    !bound.holds(before) && bound.holds(after)
}

/// Phase one: stable sort by descending priority and keep the top slice
pub fn select_top(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted.truncate(MAX_BRIEFING_ITEMS);
    sorted
}

/// Phase two: on a full slate with no good news, the last slot goes to the
/// best positive candidate if there is one. Never adds an item.
pub fn fairness_pass(selected: &mut [Candidate], all: &[Candidate]) {
    if selected.len() != MAX_BRIEFING_ITEMS || selected.iter().any(Candidate::is_positive) {
        return;
    }
    let best_positive = all
        .iter()
        .filter(|c| c.is_positive())
        .fold(None::<&Candidate>, |best, c| match best {
            Some(b) if b.priority >= c.priority => Some(b),
            _ => Some(c),
        });
    if let (Some(best), Some(last)) = (best_positive, selected.last_mut()) {
        *last = best.clone();
    }
}

pub fn generate_briefing_items(state: &GameState, rng: &mut RandomSource) -> BriefingOutcome {
    let candidates = collect_candidates(state, rng);
    let mut selected = select_top(&candidates);
    fairness_pass(&mut selected, &candidates);

    let new_positive_triggers = selected
        .iter()
        .filter_map(|c| c.trigger.map(String::from))
        .collect();
    BriefingOutcome {
        items: selected.into_iter().map(|c| c.item).collect(),
        new_positive_triggers,
    }
}

/// Generate the briefing, record consumed triggers and log the items
pub fn process_briefing(state: &mut GameState) -> Vec<BriefingItem> {
    let outcome = state.with_rng(|s, rng| generate_briefing_items(s, rng));

    state
        .seen_positive_triggers
        .extend(outcome.new_positive_triggers);
    for item in &outcome.items {
        push_news(
            &mut state.news_log,
            NewsEntry {
                turn: state.turn,
                text: item.text.clone(),
                tone: item.tone,
            },
        );
    }
    tracing::debug!("Briefing with {} items", outcome.items.len());

    state.last_briefing = outcome.items.clone();
    outcome.items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Difficulty;
    use crate::engine::crisis::CrisisInstance;
    use crate::engine::state::create_initial_state;

    /// Standard game where nothing moved between snapshots
    fn quiet_state() -> GameState {
        let mut s = create_initial_state(Difficulty::Standard, 3);
        for (_, bloc) in s.blocs.iter_mut() {
            bloc.loyalty = 50;
        }
        s.colossus.patience = 60;
        s.rival.last_action.clear();
        s.rival.power_delta = 1;
        s.previous_resources = Some(s.resources);
        s
    }

    fn candidate(tone: Tone, priority: u32) -> Candidate {
        Candidate::new(BriefingKind::Resource, format!("{priority}"), tone, priority)
    }

    #[test]
    fn test_first_turn_is_empty() {
        let mut s = quiet_state();
        s.previous_resources = None;
        s.rival.last_action = "Something".into();
        let mut rng = RandomSource::seeded(1);
        assert!(collect_candidates(&s, &mut rng).is_empty());
        assert!(generate_briefing_items(&s, &mut rng).items.is_empty());
    }

    #[test]
    fn test_quiet_turn_gets_vignette() {
        let s = quiet_state();
        let mut rng = RandomSource::seeded(1);
        let outcome = generate_briefing_items(&s, &mut rng);
        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].kind, BriefingKind::Vignette);
        assert!(VIGNETTES.contains(&outcome.items[0].text.as_str()));
    }

    #[test]
    fn test_select_top_is_stable() {
        let all = vec![
            candidate(Tone::Negative, 50),
            candidate(Tone::Negative, 80),
            Candidate::new(BriefingKind::Rival, "first", Tone::Negative, 80),
            candidate(Tone::Negative, 90),
        ];
        let top = select_top(&all);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].priority, 90);
        assert_eq!(top[1].item.text, "80");
        assert_eq!(top[2].item.text, "first");
    }

    #[test]
    fn test_fairness_swaps_last_slot() {
        let all = vec![
            candidate(Tone::Negative, 100),
            candidate(Tone::Negative, 95),
            candidate(Tone::Negative, 90),
            candidate(Tone::Positive, 60),
            candidate(Tone::Positive, 66),
        ];
        let mut top = select_top(&all);
        fairness_pass(&mut top, &all);
        assert_eq!(top.len(), 3);
        assert_eq!(top[2].priority, 66);
        assert_eq!(top[2].item.tone, Tone::Positive);
    }

    #[test]
    fn test_fairness_skips_partial_slate() {
        let all = vec![candidate(Tone::Negative, 100), candidate(Tone::Negative, 95)];
        let mut top = select_top(&all);
        fairness_pass(&mut top, &all);
        assert_eq!(top, select_top(&all));
    }

    #[test]
    fn test_fairness_without_positive_is_noop() {
        let all = vec![
            candidate(Tone::Negative, 100),
            candidate(Tone::Negative, 95),
            candidate(Tone::Neutral, 90),
            candidate(Tone::Negative, 40),
        ];
        let mut top = select_top(&all);
        fairness_pass(&mut top, &all);
        assert_eq!(top[2].priority, 90);
    }

    #[test]
    fn test_positivity_guarantee() {
        let mut s = quiet_state();
        s.rival.last_action = "The Rival gave a speech.".into();
        s.active_crises.push(CrisisInstance::new("bank_run"));
        let mut previous = s.resources;
        previous.legitimacy = 80;
        previous.capital = 240;
        s.resources.legitimacy = 60;
        s.resources.capital = 260;
        s.previous_resources = Some(previous);

        let mut rng = RandomSource::seeded(9);
        let outcome = generate_briefing_items(&s, &mut rng);
        assert_eq!(outcome.items.len(), 3);
        assert_eq!(outcome.items[0].kind, BriefingKind::Rival);
        assert!(outcome.items.iter().any(|i| i.tone == Tone::Positive));
        assert_eq!(outcome.new_positive_triggers, vec!["capital_high".to_string()]);
    }

    #[test]
    fn test_seen_positive_trigger_not_repeated() {
        let mut s = quiet_state();
        let mut previous = s.resources;
        previous.capital = 240;
        s.resources.capital = 260;
        s.previous_resources = Some(previous);
        s.seen_positive_triggers.insert("capital_high".into());

        let mut rng = RandomSource::seeded(2);
        let outcome = generate_briefing_items(&s, &mut rng);
        assert!(outcome.items.iter().all(|i| i.text != CAPITAL_HIGH_TEXT));
    }

    #[test]
    fn test_unselected_trigger_not_recorded() {
        let mut s = quiet_state();
        s.rival.last_action = "The Rival gave a speech.".into();
        s.active_crises.push(CrisisInstance::new("bank_run"));
        let mut previous = s.resources;
        previous.legitimacy = 80;
        previous.capital = 240;
        previous.narrative = 50;
        s.resources.legitimacy = 60;
        s.resources.capital = 260;
        s.resources.narrative = 65;
        s.previous_resources = Some(previous);

        process_briefing(&mut s);
        assert!(s.seen_positive_triggers.contains("narrative_high"));
        assert!(!s.seen_positive_triggers.contains("capital_high"));
        assert_eq!(s.last_briefing.len(), 3);
    }

    #[test]
    fn test_rival_crossing_and_retreat() {
        let mut s = quiet_state();
        s.rival.power = 52;
        s.rival.power_delta = 4;
        let mut rng = RandomSource::seeded(1);
        let candidates = collect_candidates(&s, &mut rng);
        assert!(candidates.iter().any(|c| c.priority == 85));
        assert!(candidates.iter().all(|c| c.priority != 82));

        s.rival.power = 20;
        s.rival.power_delta = -10;
        let candidates = collect_candidates(&s, &mut rng);
        assert!(candidates
            .iter()
            .any(|c| c.item.text == RIVAL_RETREAT_TEXT && c.item.tone == Tone::Positive));
    }

    #[test]
    fn test_bloc_bands() {
        let mut s = quiet_state();
        s.blocs[BlocId::Labor].loyalty = 20;
        s.blocs[BlocId::Finance].loyalty = 72;
        s.blocs[BlocId::Military].loyalty = 15;
        let mut rng = RandomSource::seeded(5);
        let blocs: Vec<_> = collect_candidates(&s, &mut rng)
            .into_iter()
            .filter(|c| c.item.kind == BriefingKind::BlocShift)
            .collect();
        assert_eq!(blocs.len(), 2);
        assert!(bloc_low_lines(BlocId::Labor).contains(&blocs.iter().find(|c| c.priority == 65).unwrap().item.text.as_str()));
        assert!(bloc_high_lines(BlocId::Finance).contains(&blocs.iter().find(|c| c.priority == 60).unwrap().item.text.as_str()));
    }

    #[test]
    fn test_inflation_crossings_fire_once() {
        let mut s = quiet_state();
        let mut previous = s.resources;
        previous.inflation = 9;
        s.resources.inflation = 19;
        s.previous_resources = Some(previous);
        let mut rng = RandomSource::seeded(1);
        let candidates = collect_candidates(&s, &mut rng);
        assert!(candidates.iter().any(|c| c.item.text == INFLATION_SEVERE_TEXT));
        assert!(candidates.iter().any(|c| c.item.text == INFLATION_HIGH_TEXT));

        previous.inflation = 19;
        s.previous_resources = Some(previous);
        let candidates = collect_candidates(&s, &mut rng);
        assert!(candidates.iter().all(|c| c.item.text != INFLATION_HIGH_TEXT));
    }
}
