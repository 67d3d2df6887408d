//! Static report and screen copy, kept apart from the logic that selects it.

use crate::interpretation::Tier;
use crate::model::Category;

pub const ASSESSMENT_TITLE: &str = "Emotional Intelligence (EI) Self-Assessment";
pub const ASSESSMENT_TAGLINE: &str = "Assess your skills in self-awareness, managing emotions, \
     motivation, empathy, and social skills.";
pub const CHART_CAPTION: &str = "This chart visualizes your scores across the five key areas, \
     showing your unique emotional intelligence profile at a glance.";
pub const LEGEND_INTRO: &str = "Higher overall scores reflect stronger emotional intelligence. \
     The breakdown below explains what the score for each section means.";
pub const NEXT_STEPS_INTRO: &str = "This report provides a snapshot of your emotional \
     intelligence based on your responses. Use these insights as a guide for personal and \
     professional development.";
pub const CONTACT_FOOTER: &str = "For further clarification regarding your results or guidance \
     on next steps, please consult your trainer or reach out to us at hello@carnelianco.com";

/// Heading used for a tier on the legend page.
#[must_use]
pub const fn tier_heading(tier: Tier) -> &'static str {
    match tier {
        Tier::Strength => "Area of Strength",
        Tier::NeedsConsistentAttention => "Needs More Consistent Attention",
        Tier::NeedsImprovement => "Needs Improvement",
    }
}

/// Explanation of a tier on the legend page.
#[must_use]
pub const fn tier_description(tier: Tier) -> &'static str {
    match tier {
        Tier::Strength => {
            "Indicates areas of strength or potential strength. You are likely confident and \
             effective in these aspects of emotional intelligence."
        }
        Tier::NeedsConsistentAttention => {
            "Indicates areas that are generally okay but could be more consistent. Focusing here \
             can turn a moderate skill into a strong one."
        }
        Tier::NeedsImprovement => {
            "Indicates areas of communication that would benefit most from focused development \
             and practice."
        }
    }
}

/// One-line encouragement shown next to a score on the results screen.
#[must_use]
pub const fn tier_encouragement(tier: Tier) -> &'static str {
    match tier {
        Tier::Strength => "This area is a strength for you.",
        Tier::NeedsConsistentAttention => "Giving attention here will pay dividends.",
        Tier::NeedsImprovement => "Make this area a development priority.",
    }
}

/// Development advice for a category, printed on the next-steps page.
#[must_use]
pub const fn next_step(category: Category) -> &'static str {
    match category {
        Category::SelfAwareness => {
            "Practice mindfulness and self-reflection. At the end of each day, ask yourself: \
             \"What emotions did I feel today, and what caused them?\" Naming your emotions is \
             the first step to understanding them."
        }
        Category::ManagingEmotions => {
            "When you feel a strong negative emotion, pause before reacting. Take a deep breath \
             and count to ten. This small gap can prevent hasty decisions and allow for a more \
             thoughtful response."
        }
        Category::MotivatingOneself => {
            "Set clear, achievable goals. Break larger goals into smaller, manageable steps. \
             Celebrate small victories to maintain momentum and build a positive feedback loop."
        }
        Category::Empathy => {
            "Practice active listening. When talking with someone, focus completely on their \
             words and body language. Try to understand their perspective from their point of \
             view, not just your own."
        }
        Category::SocialSkill => {
            "Be mindful of your communication style. Pay attention to non-verbal cues, give \
             clear messages, and be open to constructive feedback to build stronger \
             relationships."
        }
    }
}
