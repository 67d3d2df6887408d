//! Qualitative tiers attached to a category total.

use serde::Serialize;

/// Lowest total that counts as a strength.
pub const STRENGTH_THRESHOLD: u16 = 35;
/// Lowest total that counts as needing consistent attention.
pub const ATTENTION_THRESHOLD: u16 = 18;

/// Three-level reading of a category total. Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Tier {
    NeedsImprovement,
    NeedsConsistentAttention,
    Strength,
}

impl Tier {
    pub const ALL: [Tier; 3] = [
        Tier::Strength,
        Tier::NeedsConsistentAttention,
        Tier::NeedsImprovement,
    ];

    #[must_use]
    pub const fn for_score(score: u16) -> Self {
        if score >= STRENGTH_THRESHOLD {
            Tier::Strength
        } else if score >= ATTENTION_THRESHOLD {
            Tier::NeedsConsistentAttention
        } else {
            Tier::NeedsImprovement
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Strength => "Strength",
            Tier::NeedsConsistentAttention => "Needs Consistent Attention",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }

    /// 0 = improve, 1 = attention, 2 = strength.
    #[must_use]
    pub const fn severity_rank(self) -> u8 {
        match self {
            Tier::NeedsImprovement => 0,
            Tier::NeedsConsistentAttention => 1,
            Tier::Strength => 2,
        }
    }

    /// Accent color as `#RRGGBB`.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Tier::Strength => "#27AE60",
            Tier::NeedsConsistentAttention => "#F39C12",
            Tier::NeedsImprovement => "#B31B1B",
        }
    }

    /// Inclusive score range covered by the tier.
    #[must_use]
    pub const fn range(self) -> (u16, u16) {
        match self {
            Tier::Strength => (STRENGTH_THRESHOLD, 50),
            Tier::NeedsConsistentAttention => (ATTENTION_THRESHOLD, STRENGTH_THRESHOLD - 1),
            Tier::NeedsImprovement => (10, ATTENTION_THRESHOLD - 1),
        }
    }
}

/// Result of [`interpret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub tier: Tier,
    pub label: &'static str,
    pub severity_rank: u8,
    pub color: &'static str,
}

#[must_use]
pub const fn interpret(score: u16) -> Interpretation {
    let tier = Tier::for_score(score);
    Interpretation {
        tier,
        label: tier.label(),
        severity_rank: tier.severity_rank(),
        color: tier.color(),
    }
}
