use serde::{Deserialize, Serialize};
use std::fmt;

/// The five emotional-intelligence competencies measured by the questionnaire.
///
/// Declaration order is the display order used by sections, score cards and
/// the strongest/weakest listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "SA")]
    SelfAwareness,
    #[serde(rename = "ME")]
    ManagingEmotions,
    #[serde(rename = "MO")]
    MotivatingOneself,
    #[serde(rename = "E")]
    Empathy,
    #[serde(rename = "SS")]
    SocialSkill,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::SelfAwareness,
        Category::ManagingEmotions,
        Category::MotivatingOneself,
        Category::Empathy,
        Category::SocialSkill,
    ];

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::SelfAwareness => 0,
            Category::ManagingEmotions => 1,
            Category::MotivatingOneself => 2,
            Category::Empathy => 3,
            Category::SocialSkill => 4,
        }
    }

    /// Short code used on the wire (`SA`, `ME`, `MO`, `E`, `SS`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Category::SelfAwareness => "SA",
            Category::ManagingEmotions => "ME",
            Category::MotivatingOneself => "MO",
            Category::Empathy => "E",
            Category::SocialSkill => "SS",
        }
    }

    /// Human-readable competency name; also the spreadsheet column header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Category::SelfAwareness => "Self-Awareness",
            Category::ManagingEmotions => "Managing Emotions",
            Category::MotivatingOneself => "Motivating Oneself",
            Category::Empathy => "Empathy",
            Category::SocialSkill => "Social Skill",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
