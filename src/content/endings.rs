//! Ending metadata and presidential dispatch paragraphs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingId {
    Impeached,
    Coup,
    RivalWins,
    Protectorate,
    ShadowRepublic,
    HollowRepublic,
    NewCompact,
    ManagersVictory,
    ANewStory,
    RepublicEndures,
}

impl EndingId {
    pub const ALL: [EndingId; 10] = [
        EndingId::Impeached,
        EndingId::Coup,
        EndingId::RivalWins,
        EndingId::Protectorate,
        EndingId::ShadowRepublic,
        EndingId::HollowRepublic,
        EndingId::NewCompact,
        EndingId::ManagersVictory,
        EndingId::ANewStory,
        EndingId::RepublicEndures,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EndingId::Impeached => "impeached",
            EndingId::Coup => "coup",
            EndingId::RivalWins => "rival_wins",
            EndingId::Protectorate => "protectorate",
            EndingId::ShadowRepublic => "shadow_republic",
            EndingId::HollowRepublic => "hollow_republic",
            EndingId::NewCompact => "new_compact",
            EndingId::ManagersVictory => "managers_victory",
            EndingId::ANewStory => "a_new_story",
            EndingId::RepublicEndures => "republic_endures",
        }
    }
}

impl fmt::Display for EndingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingTone {
    Good,
    Neutral,
    Pyrrhic,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndingData {
    pub title: &'static str,
    pub flavor: &'static str,
    pub tone: EndingTone,
}

pub fn ending_data(id: EndingId) -> EndingData {
    let (title, flavor, tone) = match id {
        EndingId::NewCompact => (
            "The New Compact",
            "Labor, narrative, and hope, all aligned. Miranda found a third way.",
            EndingTone::Good,
        ),
        EndingId::ANewStory => (
            "A New Story",
            "You did not just survive. You changed the narrative. Miranda writes its own chapter now.",
            EndingTone::Good,
        ),
        EndingId::RepublicEndures => (
            "The Republic Endures",
            "You survived. Miranda survived. Whether those are the same thing is a question for the historians.",
            EndingTone::Neutral,
        ),
        EndingId::ManagersVictory => (
            "The Manager's Victory",
            "Efficient. Stable. Soulless. The trains run on time. Nobody sings anymore.",
            EndingTone::Pyrrhic,
        ),
        EndingId::HollowRepublic => (
            "The Hollow Republic",
            "Miranda is polarized beyond repair. Two countries wearing one flag.",
            EndingTone::Pyrrhic,
        ),
        EndingId::Protectorate => (
            "The Protectorate",
            "The Colossus did not invade. It did not need to. You signed everything over willingly.",
            EndingTone::Pyrrhic,
        ),
        EndingId::ShadowRepublic => (
            "The Shadow Republic",
            "The Underworld runs Miranda now. You are still president. That is the joke.",
            EndingTone::Pyrrhic,
        ),
        EndingId::Impeached => (
            "Impeached",
            "Your legitimacy hit zero. Congress voted. The margin was comfortable.",
            EndingTone::Loss,
        ),
        EndingId::Coup => (
            "The Coup",
            "The Generals moved at dawn. Your last act as president was waking up surrounded.",
            EndingTone::Loss,
        ),
        EndingId::RivalWins => (
            "The Rival Wins",
            "They out-organized you, out-narrated you, out-lasted you. Miranda chose someone else.",
            EndingTone::Loss,
        ),
    };
    EndingData { title, flavor, tone }
}

#[derive(Debug, Clone, Copy)]
pub struct DispatchParagraph {
    pub text: &'static str,
    /// Paragraph is included only when this holds
    pub condition: Option<fn(&GameState) -> bool>,
}

const fn always(text: &'static str) -> DispatchParagraph {
    DispatchParagraph { text, condition: None }
}

const fn when(condition: fn(&GameState) -> bool, text: &'static str) -> DispatchParagraph {
    DispatchParagraph { text, condition: Some(condition) }
}

fn narrative_modest(s: &GameState) -> bool {
    s.resources.narrative <= 50
}

fn narrative_strong(s: &GameState) -> bool {
    s.resources.narrative > 50
}

fn calm_country(s: &GameState) -> bool {
    s.resources.polarization < 30
}

fn divided_country(s: &GameState) -> bool {
    (30..=60).contains(&s.resources.polarization)
}

fn many_milestones(s: &GameState) -> bool {
    s.achieved_milestone_ids.len() > 3
}

fn early_term(s: &GameState) -> bool {
    s.turn <= 12
}

fn mid_term(s: &GameState) -> bool {
    s.turn > 12 && s.turn < 40
}

fn late_term(s: &GameState) -> bool {
    s.turn >= 40
}

static NEW_COMPACT: &[DispatchParagraph] = &[
    always("I never believed in miracles. But when the union leaders sat down with the professors, when the factory floor and the lecture hall found a common language, I believed in something stranger. I believed in politics."),
    always("{rivalName} conceded gracefully, which surprised everyone, including {rivalName}. The opposition press called it a surrender. We called it a beginning."),
    always("Miranda is still fragile. The Compact is ink on paper until the next generation decides to honor it. For the first time in a long time, I think they might."),
];

static A_NEW_STORY: &[DispatchParagraph] = &[
    always("They used to say Miranda's story was already written. A small republic, caught between greater powers, destined to be a footnote. We rewrote it."),
    always("{rivalName}'s talking points stopped landing sometime around month {turn}. Not because they were wrong, exactly. Because they were old. Miranda wanted new words."),
    always("The next president will inherit a country that believes in itself, which is a powerful and dangerous thing. I hope they handle it with care."),
];

static REPUBLIC_ENDURES: &[DispatchParagraph] = &[
    always("The desk will pass to someone else. The chair will fit someone else's frame. That is, when you think about it, the whole point."),
    when(narrative_modest, "I did not save Miranda. I kept it going. There is a difference, and the historians can argue about whether it is a meaningful one."),
    when(narrative_strong, "I left them something to work with. The narrative held, the people still believe in this place. That is more than most presidents manage."),
    when(calm_country, "At least they still talk to each other. In Miranda, that counts as a victory."),
    when(divided_country, "The polarization worries me. Two Mirandas sharing one capital and one set of problems they cannot agree on. That is someone else's problem now."),
    when(many_milestones, "My aide kept the scrapbook. {milestonesCount} milestones, each one a small victory that felt enormous at the time."),
    always("Four years. {turn} months of it, anyway. The view from this window does not change, but the country outside it does. Good luck to whoever sits here next."),
];

static MANAGERS_VICTORY: &[DispatchParagraph] = &[
    always("The numbers are excellent. Every chart trends upward. Every indicator is green. The technocrats are pleased."),
    always("The unions are quiet. Not content. Quiet. There is a difference that the economic reports do not capture."),
    always("Nobody sings the old songs anymore. Nobody argues in the cafes. Miranda works. On the quiet nights, I wonder if that is enough."),
];

static HOLLOW_REPUBLIC: &[DispatchParagraph] = &[
    always("There are two Mirandas now. Everyone knows it. Different newspapers, different facts, different countries sharing one unfortunate flag."),
    always("The center did not hold. I am not sure there ever was a center. Just a polite fiction we maintained for as long as the math allowed."),
    always("One Miranda will call me a hero. The other will call me the reason. They are both half right."),
];

static PROTECTORATE: &[DispatchParagraph] = &[
    always("The ambassador smiles a lot. He smiled when the advisory agreement was signed. He smiled when our central bank adopted their monetary framework."),
    always("Sovereignty is a funny word. It appears in all our documents. The Colossus never asked us to remove it. The word simply means something different now."),
    always("I signed everything willingly. Nobody held a gun to my head. They just made sure every other option was worse."),
];

static SHADOW_REPUBLIC: &[DispatchParagraph] = &[
    always("I am still president. I sign papers. I give speeches. The Syndicate finds this arrangement convenient."),
    always("The Underworld does not govern openly. That would be crude. Every contract simply finds its way to the right hands."),
    always("I keep a list in my desk drawer of the things I chose not to see. It gets longer every month."),
];

static IMPEACHED: &[DispatchParagraph] = &[
    when(early_term, "You barely unpacked. The desk drawers still had the previous administration's paperclips when Congress called the vote."),
    when(mid_term, "Congress voted. The margin was comfortable, which is the polite way of saying it was not close."),
    when(late_term, "So close to the end. {turn} months in, and the finish line was almost visible. Legitimacy is not a thing you can borrow against."),
    always("The hallways emptied fast. People who smiled last week now look through you. You only notice the warmth when it stops."),
];

static COUP: &[DispatchParagraph] = &[
    always("Dawn. That particular gray light before the sun has decided whether the day is worth it. Boots on marble."),
    always("The radio went silent first. Then the broadcast, clipped and professional. Temporary measures to restore order. They never mean temporary."),
    always("The generals moved because they could. Military loyalty had eroded past the point where anyone in uniform felt obliged to defend a civilian government."),
];

static RIVAL_WINS: &[DispatchParagraph] = &[
    always("{rivalName}'s victory speech played on every channel. Confident, measured, already presidential."),
    always("The policies were reversed within a week. {policiesCount} decisions, months of careful compromises, undone with a signature and a press conference."),
    always("Miranda chose someone else. That is democracy, the part they do not put on the inspirational posters."),
];

pub fn dispatch_paragraphs(id: EndingId) -> &'static [DispatchParagraph] {
    match id {
        EndingId::NewCompact => NEW_COMPACT,
        EndingId::ANewStory => A_NEW_STORY,
        EndingId::RepublicEndures => REPUBLIC_ENDURES,
        EndingId::ManagersVictory => MANAGERS_VICTORY,
        EndingId::HollowRepublic => HOLLOW_REPUBLIC,
        EndingId::Protectorate => PROTECTORATE,
        EndingId::ShadowRepublic => SHADOW_REPUBLIC,
        EndingId::Impeached => IMPEACHED,
        EndingId::Coup => COUP,
        EndingId::RivalWins => RIVAL_WINS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ending_has_dispatch() {
        for id in EndingId::ALL {
            assert!(!dispatch_paragraphs(id).is_empty(), "{id} has no dispatch");
            assert!(!ending_data(id).title.is_empty());
        }
    }

    #[test]
    fn test_every_ending_has_unconditional_paragraph() {
        for id in EndingId::ALL {
            assert!(dispatch_paragraphs(id).iter().any(|p| p.condition.is_none()));
        }
    }

    #[test]
    fn test_loss_endings() {
        for id in [EndingId::Impeached, EndingId::Coup, EndingId::RivalWins] {
            assert_eq!(ending_data(id).tone, EndingTone::Loss);
        }
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for id in EndingId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }
}
