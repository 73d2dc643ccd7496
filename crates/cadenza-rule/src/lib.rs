// Scoring judgements: hit result classification and per-element
// judgement definitions.

mod hit_result;
mod judgement;

pub use hit_result::HitResult;
pub use judgement::{
    BonusJudgement, DEFAULT_MAX_HEALTH_INCREASE, Judgement, NoteJudgement, SmallTickJudgement,
    TickJudgement,
};
