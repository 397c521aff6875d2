//! Briefing and news text
//!
//! Player-facing lines use plain sentences: no em-dashes, no colons.

use crate::core::types::BlocId;

pub const CRISIS_STAGE_OPENING: &str =
    "Reports of unusual activity across the capital. Your aide recommends keeping the schedule clear.";
pub const CRISIS_STAGE_SPREADING: &str =
    "The trouble is spreading. Ministers are cancelling lunches and nobody will say why.";
pub const CRISIS_STAGE_DEEPENING: &str =
    "The crisis deepens. Official statements are starting to contradict each other.";

/// Line for the first active crisis, keyed by its stage
pub fn crisis_stage_text(stage_index: usize) -> &'static str {
    match stage_index {
        0 => CRISIS_STAGE_OPENING,
        1 => CRISIS_STAGE_SPREADING,
        _ => CRISIS_STAGE_DEEPENING,
    }
}

pub const DISCOVERY_TEXT: &str =
    "An old backroom deal surfaced in the Heralds. The Court is not amused. Your aide suggests a vacation.";

/// Rival crossing text, `None` for breakpoints without a briefing line
pub fn rival_crossing_text(threshold: i32) -> Option<&'static str> {
    match threshold {
        30 => Some("The Rival's office hired a pollster. Then another. Somebody is counting on an election."),
        50 => Some("The Rival's caucus blocked three bills this week. Main Street shopkeepers have started using gridlock as a verb."),
        75 => Some("The Rival held a rally in Constitution Square. The crowd was larger than yours. The police estimate was concerning."),
        85 => Some("Foreign embassies have started inviting the Rival to their receptions. Your invitations arrive a day later."),
        _ => None,
    }
}

pub const RIVAL_RETREAT_TEXT: &str =
    "The Rival cancelled two rallies and a television spot. Their spokesperson blamed the weather. It was sunny.";

pub const INFLATION_HIGH_TEXT: &str =
    "The price of bread doubled. A bakery in the old quarter hung a sign. We accept tears.";
pub const INFLATION_SEVERE_TEXT: &str =
    "The currency exchange kiosks have stopped updating their boards. What is the point, the attendant said.";
pub const NARRATIVE_LOW_TEXT: &str =
    "The morning newspapers ran identical front pages. None of them were yours.";
pub const LEGITIMACY_LOW_TEXT: &str =
    "A cabinet minister declined to appear beside you at the ribbon cutting. Scheduling, her office said.";
pub const MOBILIZATION_LOW_TEXT: &str =
    "The rally planned for Sunday was cancelled for low expected turnout. The organizers did not look surprised.";
pub const DREAD_HIGH_TEXT: &str =
    "The night patrols doubled. Citizens learned to walk faster and look straight ahead.";
pub const POLARIZATION_HIGH_TEXT: &str =
    "Two cafes on the same street hung opposing banners. Their owners stopped speaking last month.";
pub const CAPITAL_LOW_TEXT: &str =
    "The treasury paid the palace electricity bill late. The lights flickered during your address.";

pub const NARRATIVE_HIGH_TEXT: &str =
    "The schoolchildren wrote essays about the Republic. Most of them were favorable. All of them mentioned you.";
pub const LEGITIMACY_HIGH_TEXT: &str =
    "A retired judge stopped you on the palace steps to shake your hand. He said nothing. He did not need to.";
pub const CAPITAL_HIGH_TEXT: &str =
    "The treasury vaults are fuller than they have been in a decade. Your treasurer has started humming.";
pub const POLARIZATION_LOW_TEXT: &str =
    "The two cafes on Rua Central took down their banners. One of the owners brought the other a pastry.";
pub const DREAD_LOW_TEXT: &str =
    "Children are playing in the plazas after dark again. The patrols walk slower now.";
pub const MOBILIZATION_HIGH_TEXT: &str =
    "Volunteers lined up around the block to join the civic brigades. The coffee ran out by noon.";

/// Lines for a bloc whose loyalty has slipped into the low band
pub fn bloc_low_lines(bloc: BlocId) -> &'static [&'static str] {
    match bloc {
        BlocId::Court => &["The judges started citing precedents from before the Republic. A quiet form of protest."],
        BlocId::Military => &["The generals' weekly briefing was unusually short. They left without saluting."],
        BlocId::Enforcers => &[
            "The Enforcers' union filed a grievance about overtime. The patrols are suddenly very slow.",
        ],
        BlocId::Finance => &[
            "Miranda National Bank moved its reserves to a Colossus subsidiary. Their press release thanked you for the learning experience.",
        ],
        BlocId::Industry => &["The factory owners held their annual dinner. Your seat was given to a potted plant."],
        BlocId::Tech => &["Three start-ups announced they are relocating abroad. Their farewell post went viral."],
        BlocId::Agri => &["The Landowners parked tractors outside the ministry. Politely. In every lane."],
        BlocId::MainStreet => &["Shop windows on the high street display a new sign. Closed for the government."],
        BlocId::Media => &["The Heralds ran a blank front page. We thought it was more honest, the editor explained."],
        BlocId::Clergy => &["The cathedral bells were silent on Sunday. The bishop did not return your call."],
        BlocId::Academy => &["The Scholars published an open letter. It has more footnotes than signatures, and both are growing."],
        BlocId::Artists => &["A mural of you appeared overnight in the Artists' quarter. It is not flattering."],
        BlocId::Labor => &[
            "The dockworkers' choir cancelled their national theater performance. We have nothing to sing about, the conductor said.",
        ],
        BlocId::Syndicate => &["A shipment went missing at the port. The Underworld wants you to know it noticed you."],
    }
}

/// Lines for a bloc whose loyalty sits in the high band
pub fn bloc_high_lines(bloc: BlocId) -> &'static [&'static str] {
    match bloc {
        BlocId::Court => &["The Chief Justice quoted your inaugural address in a ruling. The opposition is reading it twice."],
        BlocId::Military => &["The generals invited you to observe field exercises. They named the maneuver after your birthday."],
        BlocId::Enforcers => &["The Enforcers' band played your campaign song at the police gala. Slightly off key, with feeling."],
        BlocId::Finance => &["The Banks sent a crystal decanter to the palace. The card read To continued cooperation."],
        BlocId::Industry => &["The factory owners cut a ribbon on a new plant and thanked the government by name."],
        BlocId::Tech => &["The tech sector named its new accelerator after the Republic. The brochure has your photo."],
        BlocId::Agri => &["The Landowners sent the first harvest basket of the season. The mangoes were excellent."],
        BlocId::MainStreet => &["Main Street shopkeepers put your portrait next to the register. Some of them even dusted it."],
        BlocId::Media => &["The Heralds ran a feature series on your economic vision. It was almost entirely accurate."],
        BlocId::Clergy => &["The bishop mentioned you in the Sunday sermon. Favorably, for once."],
        BlocId::Academy => &["The Scholars invited you to give the commencement address. The students did not walk out."],
        BlocId::Artists => &["The Artists' quarter painted a mural of the Republic. You are in the corner, smiling."],
        BlocId::Labor => &[
            "The dockworkers' choir performed at the national theater. Standing ovation. The factory owners left at intermission.",
        ],
        BlocId::Syndicate => &[
            "A man in an expensive suit arrived at the palace. He left a card and a bottle of wine from a vineyard that is on no map.",
        ],
    }
}

pub const UNLOCK_TEXT: &str =
    "A man in an expensive suit arrived at the palace. He left a card. New options are available.";

pub const COLOSSUS_WARNING_TEXT: &str =
    "The Colossus ambassador's smile is getting thinner. Her entourage is getting larger.";

/// Filler lines for quiet months
pub static VIGNETTES: &[&str] = &[
    "Rain over the capital. The palace gutters overflowed again and nobody has the budget to fix them.",
    "A street vendor outside the palace sells tiny flags of the Republic. Business is steady.",
    "Your aide brought coffee and the morning papers. Nothing on the front page is on fire.",
    "The harbor was quiet this month. Gulls, freighters, and a single sailboat with a hand painted name.",
    "A schoolteacher wrote to ask if you still read letters. You do. You wrote back.",
];

/// Used when a text pool is unexpectedly empty
pub static GENERIC_OUTCOMES: &[&str] = &[
    "The decision is made. Only time will tell if it was the right one.",
    "Your advisors nod. The wheels of government turn.",
    "It is done. The consequences will unfold.",
    "The order is signed. Tomorrow will reveal what today has set in motion.",
    "Your aide collects the paperwork. Another choice, another ripple.",
    "The room empties. The silence that follows a decision.",
    "A pen stroke. A phone call. The machinery of state lurches forward.",
    "Done. The papers are filed. History will judge the rest.",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lines() -> Vec<&'static str> {
        let mut lines = vec![
            DISCOVERY_TEXT,
            RIVAL_RETREAT_TEXT,
            INFLATION_HIGH_TEXT,
            INFLATION_SEVERE_TEXT,
            NARRATIVE_LOW_TEXT,
            NARRATIVE_HIGH_TEXT,
            UNLOCK_TEXT,
            COLOSSUS_WARNING_TEXT,
        ];
        for bloc in BlocId::ALL {
            lines.extend_from_slice(bloc_low_lines(bloc));
            lines.extend_from_slice(bloc_high_lines(bloc));
        }
        lines.extend_from_slice(VIGNETTES);
        lines.extend_from_slice(GENERIC_OUTCOMES);
        lines
    }

    #[test]
    fn test_every_bloc_has_both_pools() {
        for bloc in BlocId::ALL {
            assert!(!bloc_low_lines(bloc).is_empty(), "{bloc} has no low line");
            assert!(!bloc_high_lines(bloc).is_empty(), "{bloc} has no high line");
        }
    }

    #[test]
    fn test_no_em_dashes_or_colons() {
        for line in all_lines() {
            assert!(!line.contains('\u{2014}'), "em-dash in {line}");
            assert!(!line.contains(':'), "colon in {line}");
        }
    }

    #[test]
    fn test_crisis_stage_text_keys() {
        assert_eq!(crisis_stage_text(0), CRISIS_STAGE_OPENING);
        assert_eq!(crisis_stage_text(1), CRISIS_STAGE_SPREADING);
        assert_eq!(crisis_stage_text(7), CRISIS_STAGE_DEEPENING);
    }

    #[test]
    fn test_rival_crossings() {
        for threshold in [30, 50, 75, 85] {
            assert!(rival_crossing_text(threshold).is_some());
        }
        assert!(rival_crossing_text(60).is_none());
    }
}
