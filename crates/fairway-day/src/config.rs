use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fairway_core::error::{Result, ScoringError};
use fairway_core::handicap::HandicapConfig;
use fairway_payouts::{
    FinishPayouts, SideContestPayouts, SideContestWins, compute_finish_payout, compute_total_cash,
};
use fairway_scramble::DEFAULT_SCRAMBLE_POINTS;

/// Tournament-wide scoring rules, loaded from `rules.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentRules {
    pub handicap: HandicapConfig,
    /// Points by place for the full stroke-play rule.
    pub stroke_play_points: Vec<f64>,
    /// Points by place for scramble days.
    pub scramble_points: Vec<f64>,
    pub finish: FinishPayouts,
    pub side_contests: SideContestPayouts,
}

impl Default for TournamentRules {
    fn default() -> Self {
        Self {
            handicap: HandicapConfig::default(),
            stroke_play_points: Vec::new(),
            scramble_points: DEFAULT_SCRAMBLE_POINTS.to_vec(),
            finish: FinishPayouts::default(),
            side_contests: SideContestPayouts::new(),
        }
    }
}

impl TournamentRules {
    /// Parse and validate rules from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let rules: Self = toml::from_str(contents)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rules from `FAIRWAY_RULES` or `config/rules.toml`, falling back
    /// to defaults if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from(&rules_path(std::env::var("FAIRWAY_RULES").ok()))
    }

    /// Load rules from `path`, falling back to defaults if the file is
    /// missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(rules) => rules,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {e}, using defaults", path.display());
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    /// Check invariants the engines rely on.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.handicap.categories {
            if !seen.insert(category.key.as_str()) {
                return Err(ScoringError::DuplicateCategory(category.key.clone()));
            }
        }

        let hc = &self.handicap;
        if !hc.factor.is_finite() {
            return Err(ScoringError::InvalidRules("handicap.factor must be finite".into()));
        }
        if !hc.cap18.is_finite() || hc.cap18 < 0.0 {
            return Err(ScoringError::InvalidRules(
                "handicap.cap18 must be a non-negative number".into(),
            ));
        }
        if !hc.par3_multiplier.is_finite() || hc.par3_multiplier < 0.0 {
            return Err(ScoringError::InvalidRules(
                "handicap.par3_multiplier must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    /// Total cash for a player finishing at `rank` with the given side-contest wins.
    pub fn cash_for(&self, rank: u32, side_contest_wins: &SideContestWins) -> f64 {
        let finish = compute_finish_payout(rank, &self.finish);
        compute_total_cash(Some(finish), side_contest_wins, &self.side_contests)
    }
}

/// Rules file location: the override if set, else `config/rules.toml`.
fn rules_path(override_path: Option<String>) -> PathBuf {
    override_path.map_or_else(|| PathBuf::from("config/rules.toml"), PathBuf::from)
}
