//! Reel stop cadence generation
//!
//! Every column stops at `default_cadence` unless one of the round's special
//! symbols sits in it, in which case the column slows to `anticipate_cadence`.
//! Rows are carried on the coordinates but never consulted.

use serde::{Deserialize, Serialize};

use crate::config::{AnticipatorConfig, GameRounds, Round, SlotCoordinate};

/// Per-column cadence values, in column order
pub type SlotCadence = Vec<f64>;

/// Cadence table for every round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundCadences {
    pub round_one: SlotCadence,
    pub round_two: SlotCadence,
    pub round_three: SlotCadence,
}

impl RoundCadences {
    pub fn get(&self, round: Round) -> &SlotCadence {
        match round {
            Round::RoundOne => &self.round_one,
            Round::RoundTwo => &self.round_two,
            Round::RoundThree => &self.round_three,
        }
    }
}

/// Builds cadence tables against a fixed anticipation config
#[derive(Debug, Clone, Copy)]
pub struct CadenceBuilder {
    config: AnticipatorConfig,
}

impl CadenceBuilder {
    pub fn new(config: AnticipatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnticipatorConfig {
        &self.config
    }

    /// Cadence for one round's special symbols
    pub fn cadence(&self, symbols: &[SlotCoordinate]) -> SlotCadence {
        compute_cadence(symbols, &self.config)
    }

    /// Cadences for all rounds
    pub fn round_cadences(&self, rounds: &GameRounds) -> RoundCadences {
        compute_all_round_cadences(rounds, &self.config)
    }
}

impl Default for CadenceBuilder {
    fn default() -> Self {
        Self::new(AnticipatorConfig::standard())
    }
}

/// Compute the stop cadence for a single round.
///
/// Columns outside `0..column_size` never match and are dropped silently
/// (logged at warn level only).
pub fn compute_cadence(symbols: &[SlotCoordinate], config: &AnticipatorConfig) -> SlotCadence {
    let column_size = config.column_size as i64;

    for symbol in symbols {
        let column = symbol.column as i64;
        if column < 0 || column >= column_size {
            log::warn!(
                "Special symbol at column {} (row {}) is outside 0..{}, ignoring",
                symbol.column,
                symbol.row,
                column_size
            );
        }
    }

    let cadence: SlotCadence = (0..column_size)
        .map(|column| {
            let anticipating = symbols.iter().any(|s| s.column as i64 == column);
            if anticipating {
                config.anticipate_cadence
            } else {
                config.default_cadence
            }
        })
        .collect();

    log::debug!("Cadence for {} special symbols: {:?}", symbols.len(), cadence);
    cadence
}

/// Compute cadences for every round independently
pub fn compute_all_round_cadences(rounds: &GameRounds, config: &AnticipatorConfig) -> RoundCadences {
    RoundCadences {
        round_one: compute_cadence(&rounds.round_one.special_symbols, config),
        round_two: compute_cadence(&rounds.round_two.special_symbols, config),
        round_three: compute_cadence(&rounds.round_three.special_symbols, config),
    }
}
