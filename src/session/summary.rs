//! End-of-experiment summary
//!
//! Computes:
//! - Total errors across all blocks
//! - Money outcome relative to the starting amount
//! - Learning coefficient (block 1 against the best of blocks 3 and 4)
//! - Per-block detail for the blocks the coefficient looks at

use super::config::Group;
use serde::Serialize;
use std::fmt;

/// Outcome of one finished block
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockResult {
    /// 1-based block number
    pub block_index: u32,
    /// Threshold reached within the time limit
    pub success: bool,
    pub errors: u32,
    /// Elapsed block time, rounded to 2 decimals
    pub time_taken_secs: f64,
}

/// Heuristic improvement measure between block 1 and blocks 3-4
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LearningCoefficient {
    /// No result recorded for block 1
    NotApplicable,
    /// Block 1 had errors but neither block 3 nor 4 succeeded
    InsufficientComparison,
    /// `(block1_errors - best_errors) / block1_errors`
    ErrorBased(f64),
    /// `(block1_time - best_time) / block1_time`
    TimeBased(f64),
    /// Block 1 succeeded with no errors and no later success to compare
    PerfectNoComparison,
    /// Block 1 had no errors but did not succeed
    Perfect,
}

impl LearningCoefficient {
    /// Derive the coefficient from the block results.
    ///
    /// Only block 1 and the successful blocks among 3 and 4 take part.
    pub fn from_results(results: &[BlockResult]) -> Self {
        let Some(first) = results.iter().find(|r| r.block_index == 1) else {
            return LearningCoefficient::NotApplicable;
        };

        let late_successes = || {
            results
                .iter()
                .filter(|r| r.success && (r.block_index == 3 || r.block_index == 4))
        };

        if first.errors > 0 {
            match late_successes().map(|r| r.errors).min() {
                Some(best) => {
                    let e1 = first.errors as f64;
                    LearningCoefficient::ErrorBased((e1 - best as f64) / e1)
                }
                None => LearningCoefficient::InsufficientComparison,
            }
        } else if first.success {
            let best_time = late_successes()
                .map(|r| r.time_taken_secs)
                .min_by(|a, b| a.total_cmp(b));
            match best_time {
                Some(t) if first.time_taken_secs > 0.0 => LearningCoefficient::TimeBased(
                    (first.time_taken_secs - t) / first.time_taken_secs,
                ),
                _ => LearningCoefficient::PerfectNoComparison,
            }
        } else {
            // Zero errors but timed out: reported as perfect, kept as deployed
            LearningCoefficient::Perfect
        }
    }
}

impl fmt::Display for LearningCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningCoefficient::NotApplicable => {
                write!(f, "N/A (block 1 not completed or data unavailable)")
            }
            LearningCoefficient::InsufficientComparison => write!(
                f,
                "not applicable (insufficient data to compare error improvement \
                 in successful blocks 3 or 4)"
            ),
            LearningCoefficient::ErrorBased(v) => write!(f, "{:.2}", v),
            LearningCoefficient::TimeBased(v) => write!(f, "{:.2} (time-based)", v),
            LearningCoefficient::PerfectNoComparison => write!(
                f,
                "perfect (0 errors in block 1, no later successful times to compare)"
            ),
            LearningCoefficient::Perfect => write!(f, "perfect (0 errors in block 1)"),
        }
    }
}

/// Money result, phrased per framing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoneyOutcome {
    Gained(i64),
    NoGains,
    Lost(i64),
    NoLosses,
}

impl MoneyOutcome {
    pub fn new(group: Group, difference: i64) -> Self {
        match group {
            Group::Gain if difference > 0 => MoneyOutcome::Gained(difference),
            Group::Gain => MoneyOutcome::NoGains,
            Group::Loss if difference < 0 => MoneyOutcome::Lost(-difference),
            Group::Loss => MoneyOutcome::NoLosses,
        }
    }
}

impl fmt::Display for MoneyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MoneyOutcome::Gained(amount) => write!(f, "Total gain: {}", format_money(amount)),
            MoneyOutcome::NoGains => write!(f, "No gains."),
            MoneyOutcome::Lost(amount) => write!(f, "Total loss: {}", format_money(amount)),
            MoneyOutcome::NoLosses => write!(f, "No losses."),
        }
    }
}

/// Blocks listed in the per-block detail
pub const DETAIL_BLOCKS: [u32; 3] = [1, 3, 4];

/// Time column of a block detail line
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockTime {
    Completed(f64),
    NotCompleted,
    NotAvailable,
}

impl fmt::Display for BlockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockTime::Completed(secs) => write!(f, "{:.2}s", secs),
            BlockTime::NotCompleted => write!(f, "not completed"),
            BlockTime::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// Errors and time of one block, `None`/`NotAvailable` when it never ran
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockDetail {
    pub block_index: u32,
    pub errors: Option<u32>,
    pub time: BlockTime,
}

impl BlockDetail {
    pub fn from_results(block_index: u32, results: &[BlockResult]) -> Self {
        match results.iter().find(|r| r.block_index == block_index) {
            Some(r) => BlockDetail {
                block_index,
                errors: Some(r.errors),
                time: if r.success {
                    BlockTime::Completed(r.time_taken_secs)
                } else {
                    BlockTime::NotCompleted
                },
            },
            None => BlockDetail {
                block_index,
                errors: None,
                time: BlockTime::NotAvailable,
            },
        }
    }
}

impl fmt::Display for BlockDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors {
            Some(errors) => write!(
                f,
                "Block {} errors: {} (time: {})",
                self.block_index, errors, self.time
            ),
            None => write!(
                f,
                "Block {} errors: N/A (time: {})",
                self.block_index, self.time
            ),
        }
    }
}

/// Summary shown on the results screen and exported
#[derive(Clone, Debug, PartialEq)]
pub struct FinalSummary {
    pub total_errors: u32,
    pub money_difference: i64,
    pub money_outcome: MoneyOutcome,
    pub learning_coefficient: LearningCoefficient,
    /// Blocks 1, 3 and 4, in that order
    pub block_details: Vec<BlockDetail>,
}

impl FinalSummary {
    pub fn compute(
        group: Group,
        results: &[BlockResult],
        initial_money: i64,
        current_money: i64,
    ) -> Self {
        let money_difference = current_money - initial_money;
        FinalSummary {
            total_errors: results.iter().map(|r| r.errors).sum(),
            money_difference,
            money_outcome: MoneyOutcome::new(group, money_difference),
            learning_coefficient: LearningCoefficient::from_results(results),
            block_details: DETAIL_BLOCKS
                .iter()
                .map(|&index| BlockDetail::from_results(index, results))
                .collect(),
        }
    }
}

/// Format an amount as `$12,345` (sign in front for negatives)
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
