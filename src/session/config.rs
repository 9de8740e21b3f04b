//! Experiment configuration and per-variant money policy
//!
//! The three deployed experiment scripts differ only in their constants,
//! so each is a preset of one `ExperimentConfig`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Value subtracted at every step of the serial subtraction task
pub const SUBTRACT_VALUE: i64 = 13;

/// Number of blocks in one experiment run
pub const MAX_BLOCKS: u32 = 4;

/// Time allowed per block (seconds)
pub const BLOCK_DURATION_SECS: u64 = 60;

/// Rest between blocks (seconds)
pub const PAUSE_DURATION_SECS: u64 = 10;

/// Reward (Gain) or penalty (Loss) amounts, one per block slot
pub const MONEY_TABLE: [i64; MAX_BLOCKS as usize] = [10_000, 20_000, 20_000, 50_000];

/// Incentive framing of a deployment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Money is awarded for completed blocks
    Gain,
    /// Money is deducted for failed blocks
    Loss,
}

impl Group {
    /// Money delta applied at the end of a block.
    ///
    /// Gain is keyed by the ordinal of the success (a late first success
    /// still earns the first tier); Loss is keyed by the block index.
    /// `success_ordinal` is only meaningful when `success` is true.
    pub fn money_change(
        self,
        table: &[i64; MAX_BLOCKS as usize],
        block_index: u32,
        success_ordinal: u32,
        success: bool,
    ) -> i64 {
        match (self, success) {
            (Group::Gain, true) => tier(table, success_ordinal),
            (Group::Loss, false) => -tier(table, block_index),
            _ => 0,
        }
    }
}

/// Look up a 1-based slot in the money table (0 outside the table)
fn tier(table: &[i64; MAX_BLOCKS as usize], slot: u32) -> i64 {
    slot.checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(0)
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Gain => write!(f, "GAIN"),
            Group::Loss => write!(f, "AVOID LOSS"),
        }
    }
}

/// Deployed experiment variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Gain framing, 1000 → 900
    Gain,
    /// Gain framing, 1500 → 1400
    GainLong,
    /// Loss framing, 1000 → 900, results exported
    Loss,
}

impl Variant {
    /// Short name used in export file names
    pub fn slug(self) -> &'static str {
        match self {
            Variant::Gain => "gain",
            Variant::GainLong => "gain_long",
            Variant::Loss => "loss",
        }
    }
}

/// Complete parameter set for one experiment deployment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub variant: Variant,
    pub group: Group,
    /// Fictitious money at session start
    pub initial_money: i64,
    /// First value of the subtraction sequence in each block
    pub start_number: i64,
    /// A block succeeds once the sequence reaches this value or below
    pub target_threshold: i64,
    pub subtract_value: i64,
    pub max_blocks: u32,
    pub block_duration: Duration,
    pub pause_duration: Duration,
    pub money_table: [i64; MAX_BLOCKS as usize],
    /// Whether the results screen offers saving the export record
    pub exports_results: bool,
}

impl ExperimentConfig {
    /// Build the preset matching a deployed variant
    pub fn preset(variant: Variant) -> Self {
        let base = ExperimentConfig {
            variant,
            group: Group::Gain,
            initial_money: 100_000,
            start_number: 1000,
            target_threshold: 900,
            subtract_value: SUBTRACT_VALUE,
            max_blocks: MAX_BLOCKS,
            block_duration: Duration::from_secs(BLOCK_DURATION_SECS),
            pause_duration: Duration::from_secs(PAUSE_DURATION_SECS),
            money_table: MONEY_TABLE,
            exports_results: false,
        };

        match variant {
            Variant::Gain => base,
            Variant::GainLong => ExperimentConfig {
                start_number: 1500,
                target_threshold: 1400,
                ..base
            },
            Variant::Loss => ExperimentConfig {
                group: Group::Loss,
                initial_money: 200_000,
                exports_results: true,
                ..base
            },
        }
    }

    /// Correct steps needed to cross the threshold from the start number
    pub fn steps_per_block(&self) -> i64 {
        let gap = self.start_number - self.target_threshold;
        (gap + self.subtract_value - 1) / self.subtract_value
    }

    /// Money change applied at the end of a block
    pub fn money_change(&self, block_index: u32, success_ordinal: u32, success: bool) -> i64 {
        self.group
            .money_change(&self.money_table, block_index, success_ordinal, success)
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::preset(Variant::Gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match_deployments() {
        let gain = ExperimentConfig::preset(Variant::Gain);
        assert_eq!(gain.group, Group::Gain);
        assert_eq!((gain.start_number, gain.target_threshold), (1000, 900));
        assert_eq!(gain.initial_money, 100_000);
        assert!(!gain.exports_results);

        let long = ExperimentConfig::preset(Variant::GainLong);
        assert_eq!((long.start_number, long.target_threshold), (1500, 1400));

        let loss = ExperimentConfig::preset(Variant::Loss);
        assert_eq!(loss.group, Group::Loss);
        assert_eq!(loss.initial_money, 200_000);
        assert!(loss.exports_results);
    }

    #[test]
    fn test_gain_keys_off_success_ordinal() {
        let cfg = ExperimentConfig::preset(Variant::Gain);
        // First success on block 3 still earns the first tier
        assert_eq!(cfg.money_change(3, 1, true), 10_000);
        assert_eq!(cfg.money_change(4, 2, true), 20_000);
        assert_eq!(cfg.money_change(4, 4, true), 50_000);
        assert_eq!(cfg.money_change(2, 0, false), 0);
    }

    #[test]
    fn test_loss_keys_off_block_index() {
        let cfg = ExperimentConfig::preset(Variant::Loss);
        assert_eq!(cfg.money_change(1, 0, false), -10_000);
        assert_eq!(cfg.money_change(3, 0, false), -20_000);
        assert_eq!(cfg.money_change(4, 0, false), -50_000);
        assert_eq!(cfg.money_change(2, 1, true), 0);
    }

    #[test]
    fn test_steps_per_block() {
        assert_eq!(ExperimentConfig::preset(Variant::Gain).steps_per_block(), 8);
        assert_eq!(ExperimentConfig::preset(Variant::GainLong).steps_per_block(), 8);
        let uneven = ExperimentConfig {
            target_threshold: 905,
            ..ExperimentConfig::preset(Variant::Loss)
        };
        assert_eq!(uneven.steps_per_block(), 8);
    }
}
