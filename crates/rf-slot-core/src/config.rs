//! Anticipation configuration and per-round special symbol layouts

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};

/// Anticipation settings shared by every round.
///
/// `min_to_anticipate` and `max_to_anticipate` are part of the configuration
/// contract but cadence computation does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnticipatorConfig {
    /// Number of reel columns
    pub column_size: u32,
    /// Minimum special symbols to start anticipating
    pub min_to_anticipate: u32,
    /// Maximum special symbols to stop anticipating
    pub max_to_anticipate: u32,
    /// Cadence for a column holding a special symbol
    pub anticipate_cadence: f64,
    /// Cadence for every other column
    pub default_cadence: f64,
}

impl AnticipatorConfig {
    /// Classic 5-column machine: anticipate at 2.0, otherwise 0.25
    pub fn standard() -> Self {
        Self {
            column_size: 5,
            min_to_anticipate: 2,
            max_to_anticipate: 3,
            anticipate_cadence: 2.0,
            default_cadence: 0.25,
        }
    }

    /// Reject configurations no machine could have.
    ///
    /// Coordinates are not checked here; out-of-range columns are ignored
    /// during computation instead.
    pub fn validate(&self) -> SlotResult<()> {
        if self.column_size == 0 {
            return Err(SlotError::InvalidConfig("columnSize must be positive".into()));
        }
        if !self.anticipate_cadence.is_finite() || !self.default_cadence.is_finite() {
            return Err(SlotError::InvalidConfig(format!(
                "cadence values must be finite (anticipate={}, default={})",
                self.anticipate_cadence, self.default_cadence
            )));
        }
        if self.min_to_anticipate > self.max_to_anticipate {
            return Err(SlotError::InvalidConfig(format!(
                "minToAnticipate ({}) exceeds maxToAnticipate ({})",
                self.min_to_anticipate, self.max_to_anticipate
            )));
        }
        Ok(())
    }
}

impl Default for AnticipatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A cell in the reel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotCoordinate {
    pub column: i32,
    pub row: i32,
}

impl SlotCoordinate {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

/// Special symbol positions for a single round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSymbols {
    pub special_symbols: Vec<SlotCoordinate>,
}

impl RoundSymbols {
    pub fn new(special_symbols: Vec<SlotCoordinate>) -> Self {
        Self { special_symbols }
    }
}

/// The closed set of game rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Round {
    RoundOne,
    RoundTwo,
    RoundThree,
}

impl Round {
    /// All rounds in play order
    pub const ALL: [Round; 3] = [Round::RoundOne, Round::RoundTwo, Round::RoundThree];

    /// Record key used in data files and console output
    pub fn key(&self) -> &'static str {
        match self {
            Self::RoundOne => "roundOne",
            Self::RoundTwo => "roundTwo",
            Self::RoundThree => "roundThree",
        }
    }
}

/// Special symbol layouts for every round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRounds {
    pub round_one: RoundSymbols,
    pub round_two: RoundSymbols,
    pub round_three: RoundSymbols,
}

impl GameRounds {
    /// The three reference rounds
    pub fn standard() -> Self {
        Self {
            round_one: RoundSymbols::new(vec![
                SlotCoordinate::new(0, 2),
                SlotCoordinate::new(1, 3),
                SlotCoordinate::new(3, 4),
            ]),
            round_two: RoundSymbols::new(vec![
                SlotCoordinate::new(0, 2),
                SlotCoordinate::new(0, 3),
            ]),
            round_three: RoundSymbols::new(vec![
                SlotCoordinate::new(4, 2),
                SlotCoordinate::new(4, 3),
            ]),
        }
    }

    pub fn get(&self, round: Round) -> &RoundSymbols {
        match round {
            Round::RoundOne => &self.round_one,
            Round::RoundTwo => &self.round_two,
            Round::RoundThree => &self.round_three,
        }
    }
}

/// Configuration plus round layouts, as stored in a fixture file.
///
/// Missing sections fall back to the standard machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceFixture {
    pub config: AnticipatorConfig,
    pub rounds: GameRounds,
}

impl Default for CadenceFixture {
    fn default() -> Self {
        Self {
            config: AnticipatorConfig::standard(),
            rounds: GameRounds::standard(),
        }
    }
}

impl CadenceFixture {
    /// Parse a JSON fixture
    pub fn from_json(json: &str) -> SlotResult<Self> {
        let fixture: Self = serde_json::from_str(json)?;
        fixture.config.validate()?;
        Ok(fixture)
    }

    /// Parse a YAML fixture
    pub fn from_yaml(yaml: &str) -> SlotResult<Self> {
        let fixture: Self = serde_yml::from_str(yaml)?;
        fixture.config.validate()?;
        Ok(fixture)
    }

    /// Load a fixture file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> SlotResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let fixture = match ext.as_deref() {
            Some("json") => Self::from_json(&fs::read_to_string(path)?)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&fs::read_to_string(path)?)?,
            other => {
                return Err(SlotError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };

        log::debug!(
            "Loaded cadence fixture from {} ({} columns)",
            path.display(),
            fixture.config.column_size
        );
        Ok(fixture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config() {
        let config = AnticipatorConfig::standard();
        assert_eq!(config.column_size, 5);
        assert_eq!(config.anticipate_cadence, 2.0);
        assert_eq!(config.default_cadence, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_columns() {
        let config = AnticipatorConfig {
            column_size: 0,
            ..AnticipatorConfig::standard()
        };
        assert!(matches!(config.validate(), Err(SlotError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_nan_cadence() {
        let config = AnticipatorConfig {
            default_cadence: f64::NAN,
            ..AnticipatorConfig::standard()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_anticipation_range() {
        let config = AnticipatorConfig {
            min_to_anticipate: 4,
            max_to_anticipate: 3,
            ..AnticipatorConfig::standard()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_keys() {
        let keys: Vec<_> = Round::ALL.iter().map(Round::key).collect();
        assert_eq!(keys, vec!["roundOne", "roundTwo", "roundThree"]);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = r#"{
            "config": {
                "columnSize": 3,
                "minToAnticipate": 1,
                "maxToAnticipate": 2,
                "anticipateCadence": 1.5,
                "defaultCadence": 0.5
            },
            "rounds": {
                "roundOne": { "specialSymbols": [{ "column": 2, "row": 0 }] },
                "roundTwo": { "specialSymbols": [] },
                "roundThree": { "specialSymbols": [] }
            }
        }"#;

        let fixture = CadenceFixture::from_json(json).unwrap();
        assert_eq!(fixture.config.column_size, 3);
        assert_eq!(
            fixture.rounds.get(Round::RoundOne).special_symbols,
            vec![SlotCoordinate::new(2, 0)]
        );
        assert!(fixture.rounds.round_two.special_symbols.is_empty());
    }

    #[test]
    fn test_missing_sections_use_standard() {
        let fixture = CadenceFixture::from_json("{}").unwrap();
        assert_eq!(fixture, CadenceFixture::default());
    }

    #[test]
    fn test_yaml_fixture() {
        let yaml = "
config:
  columnSize: 4
  minToAnticipate: 2
  maxToAnticipate: 3
  anticipateCadence: 3.0
  defaultCadence: 1.0
";
        let fixture = CadenceFixture::from_yaml(yaml).unwrap();
        assert_eq!(fixture.config.column_size, 4);
        assert_eq!(fixture.rounds, GameRounds::standard());
    }

    #[test]
    fn test_invalid_json_fixture() {
        let json = r#"{ "config": { "columnSize": 0, "minToAnticipate": 0,
            "maxToAnticipate": 0, "anticipateCadence": 1, "defaultCadence": 1 } }"#;
        assert!(matches!(
            CadenceFixture::from_json(json),
            Err(SlotError::InvalidConfig(_))
        ));
        assert!(matches!(
            CadenceFixture::from_json("not json"),
            Err(SlotError::Json(_))
        ));
    }
}
