pub mod allocation;
pub mod scoring;

pub use allocation::allocate_strokes;
pub use scoring::{
    MATCH_LOSS_POINTS, MATCH_TIE_POINTS, MATCH_WIN_POINTS, MatchHoleResult, MatchOutcome,
    MatchResult, MatchSide, compute_match_play,
};
