// Hit result classification.

use serde::{Deserialize, Serialize};

/// The outcome of judging a single hittable element.
///
/// `Meh` through `Perfect` grade a full hit; the tick variants judge the
/// intermediate elements of held or chained objects; the bonus variants
/// award score without ever penalising; the ignore variants carry no
/// scoring weight at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitResult {
    None,
    Miss,
    Meh,
    Ok,
    Good,
    Great,
    Perfect,
    SmallTickMiss,
    SmallTickHit,
    LargeTickMiss,
    LargeTickHit,
    SmallBonus,
    LargeBonus,
    IgnoreMiss,
    IgnoreHit,
    ComboBreak,
}

impl HitResult {
    /// Whether this result represents successful contact with the element.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            Self::Meh
                | Self::Ok
                | Self::Good
                | Self::Great
                | Self::Perfect
                | Self::SmallTickHit
                | Self::LargeTickHit
                | Self::SmallBonus
                | Self::LargeBonus
                | Self::IgnoreHit
        )
    }

    /// Whether this result carries any scoring weight.
    pub fn is_scorable(self) -> bool {
        !matches!(self, Self::None | Self::IgnoreMiss | Self::IgnoreHit)
    }

    pub fn is_bonus(self) -> bool {
        matches!(self, Self::SmallBonus | Self::LargeBonus)
    }

    pub fn is_tick(self) -> bool {
        matches!(
            self,
            Self::SmallTickMiss | Self::SmallTickHit | Self::LargeTickMiss | Self::LargeTickHit
        )
    }

    /// Whether this result participates in combo at all. Small ticks and
    /// bonuses leave combo untouched in either direction.
    pub fn affects_combo(self) -> bool {
        matches!(
            self,
            Self::Miss
                | Self::Meh
                | Self::Ok
                | Self::Good
                | Self::Great
                | Self::Perfect
                | Self::LargeTickMiss
                | Self::LargeTickHit
                | Self::ComboBreak
        )
    }

    pub fn increases_combo(self) -> bool {
        self.affects_combo() && self.is_hit()
    }

    pub fn breaks_combo(self) -> bool {
        self.affects_combo() && !self.is_hit()
    }

    /// Whether this result counts toward accuracy. Bonuses and combo
    /// breaks award or remove combo/score without moving accuracy.
    pub fn affects_accuracy(self) -> bool {
        self.is_scorable() && !self.is_bonus() && self != Self::ComboBreak
    }

    /// Base score awarded by this result.
    pub fn base_score(self) -> u32 {
        match self {
            Self::None
            | Self::Miss
            | Self::SmallTickMiss
            | Self::LargeTickMiss
            | Self::IgnoreMiss
            | Self::IgnoreHit
            | Self::ComboBreak => 0,
            Self::Meh => 50,
            Self::Ok => 100,
            Self::Good => 200,
            Self::Great => 300,
            Self::Perfect => 315,
            Self::SmallTickHit => 10,
            Self::LargeTickHit => 30,
            Self::SmallBonus => 10,
            Self::LargeBonus => 50,
        }
    }

    /// The miss-side result a hit of this kind degrades to.
    pub fn miss_counterpart(self) -> HitResult {
        match self {
            Self::SmallTickHit => Self::SmallTickMiss,
            Self::LargeTickHit => Self::LargeTickMiss,
            Self::SmallBonus | Self::LargeBonus | Self::IgnoreHit => Self::IgnoreMiss,
            _ => Self::Miss,
        }
    }
}
