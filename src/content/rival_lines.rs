//! Rival flavor text, keyed by background archetype and power tier

use crate::engine::rival::{PowerTier, RivalBackground, Weakness};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLine {
    pub tier: PowerTier,
    /// `None` lines are general and match any weakness
    pub weakness: Option<Weakness>,
    pub text: &'static str,
}

const fn line(tier: PowerTier, text: &'static str) -> ActionLine {
    ActionLine { tier, weakness: None, text }
}

const fn aimed(tier: PowerTier, weakness: Weakness, text: &'static str) -> ActionLine {
    ActionLine { tier, weakness: Some(weakness), text }
}

use PowerTier::{High, Low, Mid};
use Weakness as W;

static CONGRESSIONAL_LEADER: &[ActionLine] = &[
    line(Low, "Filing motions. Three hundred pages. Nobody reads them yet."),
    line(Low, "Quietly meeting with freshman representatives after hours."),
    line(Low, "Building a mailing list. Every disgruntled voter gets a letter."),
    line(Low, "Hired two new staffers from your old campaign team."),
    line(Low, "Gave a floor speech to an empty chamber. The transcript circulated anyway."),
    aimed(Low, W::Legitimacy, "Requesting an audit of last year's budget. Looking for cracks."),
    aimed(Low, W::Inflation, "Distributed grocery price comparisons to every legislator's inbox."),
    line(Mid, "Whipping votes behind closed doors. The count is shifting."),
    line(Mid, "Called a press conference on the capitol steps. Cameras everywhere."),
    line(Mid, "Formed a bipartisan accountability caucus. Your allies are nervous."),
    line(Mid, "Blocked your infrastructure bill in committee. Smiled for the cameras."),
    line(Mid, "Leaked a draft of your next budget proposal. The reaction was ugly."),
    aimed(Mid, W::Polarization, "United the opposition caucus around a single message. Yours is the problem."),
    aimed(Mid, W::NoMajority, "Rallied the crossbenchers. Your legislative agenda is stalling."),
    aimed(Mid, W::Narrative, "Circulated a counter-narrative memo to every newsroom in the capital."),
    aimed(Mid, W::Legitimacy, "Tabled a no-confidence motion. Not enough votes yet, but close."),
    line(High, "The opposition caucus votes in lockstep now. Every bill is a battle."),
    line(High, "Announced a shadow cabinet. The papers are running profiles."),
    line(High, "Held a rally on the national mall. Attendance exceeded expectations."),
    aimed(High, W::Legitimacy, "Drafting articles of no confidence. The signatures are almost there."),
    aimed(High, W::Inflation, "Introduced an emergency price stabilization act. Your move."),
    aimed(High, W::NoMajority, "Controls the legislative calendar now. Nothing passes without approval."),
];

static REGIONAL_GOVERNOR: &[ActionLine] = &[
    line(Low, "Opened a new clinic in the provinces. Local papers covered it warmly."),
    line(Low, "Touring rural districts. Shaking hands, learning names."),
    line(Low, "Hosted a town hall in the northern highlands. Standing room only."),
    line(Low, "Published an op-ed about regional neglect. Polite, but pointed."),
    line(Low, "Met with local business owners. Promised less interference from the capital."),
    aimed(Low, W::Inflation, "Announced a regional food subsidy, funded from the provincial budget."),
    aimed(Low, W::Legitimacy, "Quietly polling in your weakest districts. Gathering ammunition."),
    line(Mid, "Three more governors signed a joint statement backing the opposition."),
    line(Mid, "Established a parallel development fund. Bypassing your ministries entirely."),
    line(Mid, "Organized a governors' summit. Your invitation got lost in the mail."),
    line(Mid, "Regional police forces are coordinating under opposition direction now."),
    line(Mid, "Blocked federal road construction in two provinces. Permit issues, apparently."),
    aimed(Mid, W::Narrative, "Launched a regional media network. Your message no longer reaches the provinces."),
    aimed(Mid, W::Polarization, "Playing peacemaker between factions. Making you look like the divisive one."),
    aimed(Mid, W::NoMajority, "Provincial legislators are siding with the governors over the capital."),
    aimed(Mid, W::Inflation, "Set up regional price controls. They are working, and that is the problem."),
    line(High, "Six provinces now operate semi-autonomously. Federal authority is theoretical."),
    line(High, "Declared a regional state of emergency. The constitutional basis is thin."),
    line(High, "The provincial assemblies are drafting a confederal charter."),
    aimed(High, W::Legitimacy, "Calling for a constitutional convention. Says the presidency has failed."),
    aimed(High, W::Narrative, "Controls the narrative outside the capital. Your story ends at the city limits."),
    aimed(High, W::NoMajority, "Provincial blocs are defecting en masse. The center cannot hold."),
];

static RETIRED_GENERAL: &[ActionLine] = &[
    line(Low, "Gave an interview about the old days. Nostalgia is a weapon."),
    line(Low, "Visited the military academy. The cadets stood a little straighter."),
    line(Low, "Published a memoir chapter. The implications about civilian leadership were clear."),
    line(Low, "Having lunch with retired officers. Every week, same restaurant."),
    line(Low, "Attended a veterans' memorial ceremony. The speech was short and sharp."),
    aimed(Low, W::Legitimacy, "Mentioned institutional stability three times in one interview. A signal."),
    aimed(Low, W::Polarization, "Warned about national fracture on a morning talk show. Measured tone."),
    line(Mid, "Active-duty officers are requesting transfers to units under friendly command."),
    line(Mid, "Established a national security advisory council. A parallel command structure."),
    line(Mid, "Three garrison commanders attended a private dinner. No one reported what was discussed."),
    line(Mid, "Defense contractors are routing proposals through the general's office first."),
    line(Mid, "Published a white paper on constitutional crisis protocols. Read between the lines."),
    aimed(Mid, W::Legitimacy, "Gave a televised address about restoring order. Did not specify whose order."),
    aimed(Mid, W::Inflation, "Proposed military-run supply distribution. Efficiency, the general says."),
    aimed(Mid, W::Narrative, "Veterans' groups are amplifying opposition messaging on every channel."),
    aimed(Mid, W::NoMajority, "Reminded the legislature that the military serves the constitution, not the president."),
    line(High, "Military exercises near the capital. Routine, according to the press office."),
    line(High, "The joint chiefs requested a private consultation. The tone was not optional."),
    line(High, "Armored units repositioned to three provincial capitals overnight."),
    aimed(High, W::Legitimacy, "Released a statement about the constitutional duty to preserve the republic. Ominous."),
    aimed(High, W::Polarization, "Offered to mediate between political factions. With tanks nearby."),
    aimed(High, W::Inflation, "Promised military price enforcement. The markets are already responding."),
];

static MEDIA_PERSONALITY: &[ActionLine] = &[
    line(Low, "Recording another podcast episode. Subscriber count climbing."),
    line(Low, "Posted a thread dissecting your latest speech. Went viral by lunch."),
    line(Low, "Appeared on three talk shows this week. Always charming, always on message."),
    line(Low, "Started a documentary series about Miranda's crisis."),
    line(Low, "Trending on social media again. The algorithm favors outrage."),
    aimed(Low, W::Inflation, "Ran the grocery receipt segment again. Viewers know what a peso buys now."),
    aimed(Low, W::Narrative, "Fact-checked your press secretary live on air. It was devastating."),
    line(Mid, "Launched a daily morning show. Higher ratings than state television."),
    line(Mid, "Organized a public debate. Your spokesperson declined. That was the story."),
    line(Mid, "Three major advertisers pulled from state media. Following the audience."),
    line(Mid, "Published leaked internal memos. Your comms team is scrambling."),
    line(Mid, "Created a citizen journalism network. Thousands of phones, all watching."),
    aimed(Mid, W::Legitimacy, "Ran a week-long series on broken promises. Every episode lands."),
    aimed(Mid, W::Polarization, "Playing both sides on the culture divide. Stoking fires while looking concerned."),
    aimed(Mid, W::Narrative, "Hired your former press secretary. They know all the talking points."),
    aimed(Mid, W::Inflation, "Live-streamed from a supermarket. The empty shelves told the story."),
    line(High, "Prime time special on the failed presidency. Airing tomorrow."),
    line(High, "Endorsed opposition candidates on every platform at once. A coordinated strike."),
    line(High, "Organized a million-viewer livestream rally. The streets filled to match."),
    aimed(High, W::Legitimacy, "Countdown clock on every broadcast. Days until accountability."),
    aimed(High, W::Narrative, "Controls the narrative completely. Your version of events reaches no one."),
    aimed(High, W::NoMajority, "Running attack ads against every legislator who supports you. It is working."),
];

pub fn action_lines(background: RivalBackground) -> &'static [ActionLine] {
    match background {
        RivalBackground::CongressionalLeader => CONGRESSIONAL_LEADER,
        RivalBackground::RegionalGovernor => REGIONAL_GOVERNOR,
        RivalBackground::RetiredGeneral => RETIRED_GENERAL,
        RivalBackground::MediaPersonality => MEDIA_PERSONALITY,
    }
}

pub fn rival_names(background: RivalBackground) -> &'static [&'static str] {
    match background {
        RivalBackground::CongressionalLeader => &["Senator Vidal", "Senator Correa", "Speaker Moreno"],
        RivalBackground::RegionalGovernor => &["Governor Torres", "Governor Almeida", "Governor Fuentes"],
        RivalBackground::RetiredGeneral => &["General Cardoso", "General Montoya", "General Braga"],
        RivalBackground::MediaPersonality => &["Ricardo Vox", "Diana Cruz", "Marco Estrella"],
    }
}

/// Used when a pool comes up empty
pub const FALLBACK_RIVAL_ACTION: &str = "The opposition is quiet this month. Too quiet.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_background_covers_every_tier() {
        for background in RivalBackground::ALL {
            let lines = action_lines(background);
            for tier in [Low, Mid, High] {
                assert!(
                    lines.iter().any(|l| l.tier == tier && l.weakness.is_none()),
                    "{background:?} has no general {tier:?} line"
                );
            }
        }
    }

    #[test]
    fn test_no_line_tagged_baseline() {
        for background in RivalBackground::ALL {
            assert!(action_lines(background)
                .iter()
                .all(|l| l.weakness != Some(W::Baseline)));
        }
    }

    #[test]
    fn test_every_background_has_names() {
        for background in RivalBackground::ALL {
            assert_eq!(rival_names(background).len(), 3);
        }
    }
}
