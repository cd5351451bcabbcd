//! League rule constants: handicap, finalist slots, ranking points and the final-total tolerance.

use serde::{Deserialize, Serialize};

/// Handicap bonus added to every game of an eligible player.
pub const DEFAULT_HANDICAP_BONUS: i32 = 8;

/// Number of players advancing from the elimination round to the final.
pub const DEFAULT_FINALISTS_COUNT: usize = 12;

/// Ranking points awarded to rank 1; each following rank gets one fewer.
pub const DEFAULT_MAX_RANKING_POINTS: u32 = 24;

/// Two final totals closer than this are considered equal.
pub const DEFAULT_TIE_TOLERANCE: f64 = 0.01;

pub const ENV_HANDICAP_BONUS: &str = "LEAGUE_HANDICAP_BONUS";
pub const ENV_FINALISTS_COUNT: &str = "LEAGUE_FINALISTS_COUNT";
pub const ENV_MAX_RANKING_POINTS: &str = "LEAGUE_MAX_RANKING_POINTS";
pub const ENV_TIE_TOLERANCE: &str = "LEAGUE_TIE_TOLERANCE";

/// Errors raised while loading or validating rules.
#[derive(Clone, Debug, PartialEq)]
pub enum RulesError {
    /// Finalist count must be at least 1.
    NoFinalists,
    /// Handicap bonus cannot be negative.
    NegativeHandicap(i32),
    /// Tolerance must be finite and non-negative.
    InvalidTolerance(f64),
    /// An environment value could not be parsed.
    InvalidValue { key: String, value: String },
    /// JSON rules document could not be parsed.
    Parse(String),
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesError::NoFinalists => write!(f, "Finalists count must be at least 1"),
            RulesError::NegativeHandicap(v) => write!(f, "Handicap bonus cannot be negative (got {})", v),
            RulesError::InvalidTolerance(v) => {
                write!(f, "Tie tolerance must be a finite non-negative number (got {})", v)
            }
            RulesError::InvalidValue { key, value } => write!(f, "Invalid value for {}: {:?}", key, value),
            RulesError::Parse(msg) => write!(f, "Invalid rules document: {}", msg),
        }
    }
}

impl std::error::Error for RulesError {}

/// Scoring rules of a league. The engine accepts any value; `validate` is for load time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub handicap_bonus: i32,
    pub finalists_count: usize,
    pub max_ranking_points: u32,
    pub tie_tolerance: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            handicap_bonus: DEFAULT_HANDICAP_BONUS,
            finalists_count: DEFAULT_FINALISTS_COUNT,
            max_ranking_points: DEFAULT_MAX_RANKING_POINTS,
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
        }
    }
}

impl Rules {
    /// Check the constants once, before handing them to the engine.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.finalists_count == 0 {
            return Err(RulesError::NoFinalists);
        }
        if self.handicap_bonus < 0 {
            return Err(RulesError::NegativeHandicap(self.handicap_bonus));
        }
        if !self.tie_tolerance.is_finite() || self.tie_tolerance < 0.0 {
            return Err(RulesError::InvalidTolerance(self.tie_tolerance));
        }
        Ok(())
    }

    /// Parse a JSON rules document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(json).map_err(|e| RulesError::Parse(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read overrides from `LEAGUE_*` environment variables.
    pub fn from_env() -> Result<Self, RulesError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with a custom key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RulesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Rules::default();
        let rules = Rules {
            handicap_bonus: read_var(&lookup, ENV_HANDICAP_BONUS, defaults.handicap_bonus)?,
            finalists_count: read_var(&lookup, ENV_FINALISTS_COUNT, defaults.finalists_count)?,
            max_ranking_points: read_var(&lookup, ENV_MAX_RANKING_POINTS, defaults.max_ranking_points)?,
            tie_tolerance: read_var(&lookup, ENV_TIE_TOLERANCE, defaults.tie_tolerance)?,
        };
        rules.validate()?;
        Ok(rules)
    }
}

fn read_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, RulesError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| RulesError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_rules_are_valid() {
        let rules = Rules::default();
        assert_eq!(rules.handicap_bonus, 8);
        assert_eq!(rules.finalists_count, 12);
        assert_eq!(rules.max_ranking_points, 24);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_constants() {
        let no_finalists = Rules { finalists_count: 0, ..Rules::default() };
        assert_eq!(no_finalists.validate(), Err(RulesError::NoFinalists));

        let negative = Rules { handicap_bonus: -1, ..Rules::default() };
        assert_eq!(negative.validate(), Err(RulesError::NegativeHandicap(-1)));

        let nan = Rules { tie_tolerance: f64::NAN, ..Rules::default() };
        assert!(matches!(nan.validate(), Err(RulesError::InvalidTolerance(_))));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let rules = Rules::from_json(r#"{ "finalists_count": 8 }"#).unwrap();
        assert_eq!(rules.finalists_count, 8);
        assert_eq!(rules.handicap_bonus, DEFAULT_HANDICAP_BONUS);
        assert_eq!(rules.tie_tolerance, DEFAULT_TIE_TOLERANCE);
    }

    #[test]
    fn json_unknown_key_is_rejected() {
        let result = Rules::from_json(r#"{ "bonus": 8 }"#);
        assert!(matches!(result, Err(RulesError::Parse(_))));
    }

    #[test]
    fn json_is_validated() {
        let result = Rules::from_json(r#"{ "handicap_bonus": -5 }"#);
        assert_eq!(result, Err(RulesError::NegativeHandicap(-5)));
    }

    #[test]
    fn lookup_overrides_and_defaults() {
        let vars: HashMap<&str, &str> = [(ENV_HANDICAP_BONUS, " 10 "), (ENV_MAX_RANKING_POINTS, "30")]
            .into_iter()
            .collect();
        let rules = Rules::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(rules.handicap_bonus, 10);
        assert_eq!(rules.max_ranking_points, 30);
        assert_eq!(rules.finalists_count, DEFAULT_FINALISTS_COUNT);
    }

    #[test]
    fn lookup_reports_unparsable_value() {
        let result = Rules::from_lookup(|k| (k == ENV_FINALISTS_COUNT).then(|| "twelve".to_string()));
        assert_eq!(
            result,
            Err(RulesError::InvalidValue {
                key: ENV_FINALISTS_COUNT.to_string(),
                value: "twelve".to_string(),
            })
        );
    }
}
