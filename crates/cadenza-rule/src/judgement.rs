// Judgement definitions — how each hittable element class maps hit
// results to score and health.

use crate::hit_result::HitResult;

/// Health gained by the best result of a standard note judgement.
pub const DEFAULT_MAX_HEALTH_INCREASE: f64 = 0.05;

/// Describes how one element class is judged. Implementations override
/// only the best achievable result; everything else derives from it.
pub trait Judgement {
    /// The best result this judgement can award.
    fn max_result(&self) -> HitResult;

    /// The result awarded when the element is missed entirely.
    fn min_result(&self) -> HitResult {
        self.max_result().miss_counterpart()
    }

    /// Whether results of this judgement participate in combo.
    fn affects_combo(&self) -> bool {
        self.max_result().affects_combo()
    }

    /// Base score awarded by the best result.
    fn max_base_score(&self) -> u32 {
        self.max_result().base_score()
    }

    /// Health change for a given result of this judgement. Negative for
    /// the miss variants, zero for ignores and combo breaks.
    fn health_increase_for(&self, result: HitResult) -> f64 {
        match result {
            HitResult::Miss => -DEFAULT_MAX_HEALTH_INCREASE * 2.0,
            HitResult::SmallTickMiss => -DEFAULT_MAX_HEALTH_INCREASE * 0.5,
            HitResult::LargeTickMiss => -DEFAULT_MAX_HEALTH_INCREASE,
            HitResult::Meh => DEFAULT_MAX_HEALTH_INCREASE * 0.05,
            HitResult::Ok => DEFAULT_MAX_HEALTH_INCREASE * 0.1,
            HitResult::Good => DEFAULT_MAX_HEALTH_INCREASE * 0.3,
            HitResult::Great => DEFAULT_MAX_HEALTH_INCREASE,
            HitResult::Perfect => DEFAULT_MAX_HEALTH_INCREASE * 1.05,
            HitResult::SmallTickHit => DEFAULT_MAX_HEALTH_INCREASE * 0.5,
            HitResult::LargeTickHit => DEFAULT_MAX_HEALTH_INCREASE,
            HitResult::SmallBonus => DEFAULT_MAX_HEALTH_INCREASE * 0.5,
            HitResult::LargeBonus => DEFAULT_MAX_HEALTH_INCREASE,
            HitResult::None | HitResult::IgnoreMiss | HitResult::IgnoreHit
            | HitResult::ComboBreak => 0.0,
        }
    }

    /// Health change for the best result.
    fn max_health_increase(&self) -> f64 {
        self.health_increase_for(self.max_result())
    }
}

/// Standard note judgement, graded from `Meh` up to `Perfect`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteJudgement;

impl Judgement for NoteJudgement {
    fn max_result(&self) -> HitResult {
        HitResult::Perfect
    }
}

/// Judgement for the large tick elements inside a held or chained
/// object.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickJudgement;

impl Judgement for TickJudgement {
    fn max_result(&self) -> HitResult {
        HitResult::LargeTickHit
    }
}

/// Judgement for the dense small tick elements; these never touch combo.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallTickJudgement;

impl Judgement for SmallTickJudgement {
    fn max_result(&self) -> HitResult {
        HitResult::SmallTickHit
    }
}

/// Bonus element judgement. Missing a bonus is never penalised.
#[derive(Debug, Clone, Copy, Default)]
pub struct BonusJudgement;

impl Judgement for BonusJudgement {
    fn max_result(&self) -> HitResult {
        HitResult::LargeBonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_result_derives_from_max() {
        assert_eq!(NoteJudgement.min_result(), HitResult::Miss);
        assert_eq!(TickJudgement.min_result(), HitResult::LargeTickMiss);
        assert_eq!(SmallTickJudgement.min_result(), HitResult::SmallTickMiss);
        assert_eq!(BonusJudgement.min_result(), HitResult::IgnoreMiss);
    }

    #[test]
    fn combo_participation_per_judgement() {
        assert!(NoteJudgement.affects_combo());
        assert!(TickJudgement.affects_combo());
        assert!(!SmallTickJudgement.affects_combo());
        assert!(!BonusJudgement.affects_combo());
    }

    #[test]
    fn max_base_scores() {
        assert_eq!(NoteJudgement.max_base_score(), 315);
        assert_eq!(TickJudgement.max_base_score(), 30);
        assert_eq!(SmallTickJudgement.max_base_score(), 10);
        assert_eq!(BonusJudgement.max_base_score(), 50);
    }

    #[test]
    fn health_is_negative_only_for_miss_variants() {
        let judgement = NoteJudgement;
        for result in [
            HitResult::Miss,
            HitResult::SmallTickMiss,
            HitResult::LargeTickMiss,
        ] {
            assert!(judgement.health_increase_for(result) < 0.0, "{result:?}");
        }
        for result in [
            HitResult::Meh,
            HitResult::Ok,
            HitResult::Good,
            HitResult::Great,
            HitResult::Perfect,
            HitResult::SmallTickHit,
            HitResult::LargeTickHit,
            HitResult::SmallBonus,
            HitResult::LargeBonus,
        ] {
            assert!(judgement.health_increase_for(result) > 0.0, "{result:?}");
        }
    }

    #[test]
    fn bonus_judgement_never_reduces_health() {
        let judgement = BonusJudgement;
        assert_eq!(judgement.health_increase_for(judgement.min_result()), 0.0);
        assert!(judgement.max_health_increase() > 0.0);
    }

    #[test]
    fn perfect_outheals_great() {
        let judgement = NoteJudgement;
        assert!(
            judgement.health_increase_for(HitResult::Perfect)
                > judgement.health_increase_for(HitResult::Great)
        );
        assert_eq!(judgement.max_health_increase(), DEFAULT_MAX_HEALTH_INCREASE * 1.05);
    }
}
