pub mod card;
pub mod config;
pub mod scorer;

pub use card::{
    DayCard, MatchRound, Pairing, RosterEntry, ScrambleEntry, SegmentCards, StrokePlayRule,
};
pub use config::TournamentRules;
pub use scorer::{DayReport, PairingResult, score_day};
