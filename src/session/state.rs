//! Session state machine
//!
//! Maintains:
//! - Current phase (welcome, instructions, experiment, pause, results)
//! - Block progress: sequence value, errors, block timer
//! - Money and per-block results
//! - Final summary once the last block ends
//!
//! The session never sleeps or touches the terminal. Every operation that
//! depends on time has an `_at` form taking the current `Instant`, so callers
//! (and tests) control the clock.

use super::config::{ExperimentConfig, Group};
use super::errors::{ActionKind, SessionError};
use super::summary::{format_money, BlockResult, FinalSummary};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default self-rating on the 1-10 scales
const DEFAULT_RATING: u8 = 5;

/// Experiment phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    Instructions,
    Experiment,
    PauseBetweenBlocks,
    Results,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Welcome => "welcome",
            Phase::Instructions => "instructions",
            Phase::Experiment => "experiment",
            Phase::PauseBetweenBlocks => "pause",
            Phase::Results => "results",
        };
        f.write_str(name)
    }
}

/// What kind of message the participant is being shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
    InvalidInput,
    TimeExpired,
    BlockCompleted,
    BlockFailed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Feedback {
            kind,
            message: message.into(),
        }
    }
}

/// Participant actions captured by the UI
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Welcome → Instructions
    Begin,
    /// Instructions → Experiment
    StartTask,
    /// Answer for the current subtraction step
    Submit(String),
    /// Re-check the pause deadline
    PollPause,
    /// Discard everything and go back to Welcome
    Reset,
}

impl Action {
    fn kind(&self) -> ActionKind {
        match self {
            Action::Begin => ActionKind::Begin,
            Action::StartTask => ActionKind::StartTask,
            Action::Submit(_) => ActionKind::Submit,
            Action::PollPause => ActionKind::PollPause,
            Action::Reset => ActionKind::Reset,
        }
    }
}

/// Complete state of one participant run
#[derive(Clone, Debug)]
pub struct SessionState {
    pub config: ExperimentConfig,
    pub phase: Phase,
    /// Fixed by the configuration
    pub group: Group,
    pub initial_money: i64,
    /// Changed only when a block ends
    pub current_money: i64,
    /// 1-based, 0 before the first block
    pub current_block: u32,
    pub current_sequence_number: i64,
    pub errors_in_current_block: u32,
    pub block_start_time: Option<Instant>,
    /// Append-only, one entry per finished block
    pub blocks_results: Vec<BlockResult>,
    /// Gain framing only: number of successful blocks so far
    pub successful_block_counter: u32,
    pub pause_end_time: Option<Instant>,
    /// Last message for the participant
    pub feedback: Option<Feedback>,
    /// 1 = very negative, 10 = very positive
    pub mood_rating: u8,
    /// 1 = very rested, 10 = very tired
    pub mental_fatigue_rating: u8,
    pub final_summary: Option<FinalSummary>,
}

impl SessionState {
    /// Create a session sitting on the welcome screen
    pub fn new(config: ExperimentConfig) -> Self {
        SessionState {
            phase: Phase::Welcome,
            group: config.group,
            initial_money: config.initial_money,
            current_money: config.initial_money,
            current_block: 0,
            current_sequence_number: config.start_number,
            errors_in_current_block: 0,
            block_start_time: None,
            blocks_results: Vec::new(),
            successful_block_counter: 0,
            pause_end_time: None,
            feedback: None,
            mood_rating: DEFAULT_RATING,
            mental_fatigue_rating: DEFAULT_RATING,
            final_summary: None,
            config,
        }
    }

    /// Dispatch a participant action. Actions that do not belong to the
    /// current phase are rejected and leave the session untouched.
    pub fn apply(&mut self, action: Action, now: Instant) -> Result<Phase, SessionError> {
        match (self.phase, action) {
            (_, Action::Reset) => self.reset(),
            (Phase::Welcome, Action::Begin) => self.begin()?,
            (Phase::Instructions, Action::StartTask) => self.start_experiment_at(now)?,
            (Phase::Experiment, Action::Submit(raw)) => {
                self.submit_answer_at(&raw, now)?;
            }
            (Phase::PauseBetweenBlocks, Action::PollPause) => {
                self.poll_pause_at(now)?;
            }
            (phase, action) => return Err(self.reject(action.kind(), phase)),
        }
        Ok(self.phase)
    }

    fn reject(&self, action: ActionKind, phase: Phase) -> SessionError {
        warn!(%action, %phase, "rejected out-of-phase action");
        SessionError::InvalidPhase { action, phase }
    }

    fn require(&self, expected: Phase, action: ActionKind) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.reject(action, self.phase))
        }
    }

    /// Welcome → Instructions
    pub fn begin(&mut self) -> Result<(), SessionError> {
        self.require(Phase::Welcome, ActionKind::Begin)?;
        self.phase = Phase::Instructions;
        Ok(())
    }

    /// Reset money and results, then start block 1
    pub fn start_experiment(&mut self) -> Result<(), SessionError> {
        self.start_experiment_at(Instant::now())
    }

    pub fn start_experiment_at(&mut self, now: Instant) -> Result<(), SessionError> {
        self.require(Phase::Instructions, ActionKind::StartTask)?;
        self.current_money = self.initial_money;
        self.blocks_results.clear();
        self.successful_block_counter = 0;
        self.current_block = 0;
        self.final_summary = None;
        info!(group = ?self.group, initial_money = self.initial_money, "experiment started");
        self.start_new_block_at(now);
        Ok(())
    }

    /// Start the next block, or finish the experiment when all blocks ran
    pub fn start_new_block(&mut self) {
        self.start_new_block_at(Instant::now())
    }

    pub fn start_new_block_at(&mut self, now: Instant) {
        if self.current_block < self.config.max_blocks {
            self.current_block += 1;
            self.current_sequence_number = self.config.start_number;
            self.errors_in_current_block = 0;
            self.feedback = None;
            self.block_start_time = Some(now);
            self.pause_end_time = None;
            self.phase = Phase::Experiment;
            info!(block = self.current_block, "block started");
        } else {
            self.finish();
        }
    }

    /// Evaluate an answer for the current step
    pub fn submit_answer(&mut self, raw: &str) -> Result<Feedback, SessionError> {
        self.submit_answer_at(raw, Instant::now())
    }

    /// Checks run in a fixed order: deadline first, then parsing, then the
    /// arithmetic. A correct answer after the deadline still fails the block.
    pub fn submit_answer_at(&mut self, raw: &str, now: Instant) -> Result<Feedback, SessionError> {
        self.require(Phase::Experiment, ActionKind::Submit)?;

        if self.block_elapsed_at(now) > self.config.block_duration {
            let block = self.current_block;
            let outcome = self.finish_block(false, now);
            let feedback = Feedback::new(
                FeedbackKind::TimeExpired,
                format!(
                    "Time for block {} expired before your answer was processed. {}",
                    block, outcome.message
                ),
            );
            self.feedback = Some(feedback.clone());
            return Ok(feedback);
        }

        let answer = match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                debug!(input = raw, "non-numeric answer");
                return Ok(self.say(FeedbackKind::InvalidInput, "Please enter a valid number."));
            }
        };

        let expected = self.current_sequence_number - self.config.subtract_value;
        if answer != expected {
            self.errors_in_current_block += 1;
            self.current_sequence_number = self.config.start_number;
            debug!(answer, expected, errors = self.errors_in_current_block, "wrong answer");
            let message = format!(
                "Incorrect. Restarting sequence from {}.",
                self.config.start_number
            );
            return Ok(self.say(FeedbackKind::Incorrect, message));
        }

        self.current_sequence_number = answer;
        if self.current_sequence_number <= self.config.target_threshold {
            Ok(self.finish_block(true, now))
        } else {
            Ok(self.say(FeedbackKind::Correct, "Correct!"))
        }
    }

    /// Score the current block and move to the pause or the results
    pub fn end_block(&mut self, success: bool) -> Result<Feedback, SessionError> {
        self.end_block_at(success, Instant::now())
    }

    pub fn end_block_at(&mut self, success: bool, now: Instant) -> Result<Feedback, SessionError> {
        self.require(Phase::Experiment, ActionKind::EndBlock)?;
        Ok(self.finish_block(success, now))
    }

    fn finish_block(&mut self, success: bool, now: Instant) -> Feedback {
        let duration = self.block_elapsed_at(now);
        let timed_out = duration > self.config.block_duration;
        let success = success && !timed_out;
        let block = self.current_block;

        self.blocks_results.push(BlockResult {
            block_index: block,
            success,
            errors: self.errors_in_current_block,
            time_taken_secs: round2(duration.as_secs_f64()),
        });

        if success && self.group == Group::Gain {
            self.successful_block_counter += 1;
        }
        let change = self
            .config
            .money_change(block, self.successful_block_counter, success);
        self.current_money += change;

        info!(
            block,
            success,
            timed_out,
            errors = self.errors_in_current_block,
            money_change = change,
            "block finished"
        );

        let feedback = match (self.group, success) {
            (Group::Gain, true) => Feedback::new(
                FeedbackKind::BlockCompleted,
                format!("Block {} finished. You earned {}!", block, format_money(change)),
            ),
            (Group::Gain, false) => Feedback::new(
                FeedbackKind::BlockFailed,
                format!("Block {} finished. Block not completed in time.", block),
            ),
            (Group::Loss, true) => Feedback::new(
                FeedbackKind::BlockCompleted,
                format!("Block {} completed in time!", block),
            ),
            (Group::Loss, false) => Feedback::new(
                FeedbackKind::BlockFailed,
                format!(
                    "Block {} not completed. You lost {}!",
                    block,
                    format_money(-change)
                ),
            ),
        };
        self.feedback = Some(feedback.clone());

        if self.current_block < self.config.max_blocks {
            self.pause_end_time = Some(now + self.config.pause_duration);
            self.phase = Phase::PauseBetweenBlocks;
        } else {
            self.finish();
        }
        feedback
    }

    /// Time left before the next block may start
    pub fn pause_remaining_at(&self, now: Instant) -> Duration {
        self.pause_end_time
            .map(|end| end.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }

    pub fn pause_remaining(&self) -> Duration {
        self.pause_remaining_at(Instant::now())
    }

    /// Start the next block once the pause deadline has passed
    pub fn poll_pause_at(&mut self, now: Instant) -> Result<Phase, SessionError> {
        self.require(Phase::PauseBetweenBlocks, ActionKind::PollPause)?;
        if self.pause_remaining_at(now).is_zero() {
            self.start_new_block_at(now);
        }
        Ok(self.phase)
    }

    /// Time spent in the current block
    pub fn block_elapsed_at(&self, now: Instant) -> Duration {
        self.block_start_time
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or(Duration::ZERO)
    }

    /// Estimated time left in the current block (never negative)
    pub fn block_remaining_at(&self, now: Instant) -> Duration {
        self.config
            .block_duration
            .saturating_sub(self.block_elapsed_at(now))
    }

    /// Value the participant should type next
    pub fn expected_answer(&self) -> i64 {
        self.current_sequence_number - self.config.subtract_value
    }

    /// Recompute and cache the final summary
    pub fn compute_final_summary(&mut self) -> &FinalSummary {
        let summary = FinalSummary::compute(
            self.group,
            &self.blocks_results,
            self.initial_money,
            self.current_money,
        );
        self.final_summary.insert(summary)
    }

    pub fn summary(&self) -> Result<&FinalSummary, SessionError> {
        self.final_summary.as_ref().ok_or(SessionError::NoSummary)
    }

    fn finish(&mut self) {
        let summary = self.compute_final_summary();
        info!(
            total_errors = summary.total_errors,
            money_difference = summary.money_difference,
            "experiment finished"
        );
        self.phase = Phase::Results;
    }

    pub fn set_mood_rating(&mut self, rating: u8) {
        self.mood_rating = rating.clamp(1, 10);
    }

    pub fn set_mental_fatigue_rating(&mut self, rating: u8) {
        self.mental_fatigue_rating = rating.clamp(1, 10);
    }

    /// Discard all state and return to the welcome screen
    pub fn reset(&mut self) {
        info!(phase = %self.phase, "session reset");
        *self = SessionState::new(self.config.clone());
    }

    fn say(&mut self, kind: FeedbackKind, message: impl Into<String>) -> Feedback {
        let feedback = Feedback::new(kind, message);
        self.feedback = Some(feedback.clone());
        feedback
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::config::Variant;
    use crate::session::summary::LearningCoefficient;

    const CORRECT_RUN: [&str; 8] = ["987", "974", "961", "948", "935", "922", "909", "896"];

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    /// Session sitting in block 1, started at `t0`
    fn started(variant: Variant, t0: Instant) -> SessionState {
        let mut session = SessionState::new(ExperimentConfig::preset(variant));
        session.begin().unwrap();
        session.start_experiment_at(t0).unwrap();
        session
    }

    fn complete_block(session: &mut SessionState, at: Instant) -> Feedback {
        let mut last = None;
        for answer in CORRECT_RUN {
            last = Some(session.submit_answer_at(answer, at).unwrap());
        }
        last.unwrap()
    }

    /// Wait out the pause and start the next block at `at`
    fn next_block(session: &mut SessionState, at: Instant) {
        assert_eq!(session.poll_pause_at(at).unwrap(), Phase::Experiment);
    }

    #[test]
    fn test_phase_walkthrough() {
        let t0 = Instant::now();
        let mut session = SessionState::new(ExperimentConfig::default());
        assert_eq!(session.phase, Phase::Welcome);
        assert_eq!(session.apply(Action::Begin, t0).unwrap(), Phase::Instructions);
        assert_eq!(session.apply(Action::StartTask, t0).unwrap(), Phase::Experiment);
        assert_eq!(session.current_block, 1);
        assert_eq!(session.current_sequence_number, 1000);
    }

    #[test]
    fn test_correct_run_completes_block() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);

        for answer in &CORRECT_RUN[..7] {
            let fb = session.submit_answer_at(answer, t0 + secs(5)).unwrap();
            assert_eq!(fb.kind, FeedbackKind::Correct);
            assert_eq!(session.phase, Phase::Experiment);
        }
        let fb = session.submit_answer_at("896", t0 + secs(20)).unwrap();
        assert_eq!(fb.kind, FeedbackKind::BlockCompleted);
        assert_eq!(session.phase, Phase::PauseBetweenBlocks);

        let result = &session.blocks_results[0];
        assert!(result.success);
        assert_eq!(result.errors, 0);
        assert_eq!(result.time_taken_secs, 20.0);
        assert_eq!(session.current_money, 110_000);
    }

    #[test]
    fn test_wrong_answer_resets_sequence() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);
        session.submit_answer_at("987", t0).unwrap();

        let fb = session.submit_answer_at("999", t0 + secs(1)).unwrap();
        assert_eq!(fb.kind, FeedbackKind::Incorrect);
        assert_eq!(session.errors_in_current_block, 1);
        assert_eq!(session.current_sequence_number, 1000);
        assert_eq!(session.phase, Phase::Experiment);
    }

    #[test]
    fn test_errors_never_end_block() {
        let t0 = Instant::now();
        let mut session = started(Variant::Loss, t0);
        for n in 1..=25 {
            session.submit_answer_at("1", t0 + secs(2)).unwrap();
            assert_eq!(session.errors_in_current_block, n);
        }
        assert_eq!(session.phase, Phase::Experiment);
        assert!(session.blocks_results.is_empty());
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);
        session.submit_answer_at("987", t0).unwrap();

        let fb = session.submit_answer_at("nine", t0 + secs(1)).unwrap();
        assert_eq!(fb.kind, FeedbackKind::InvalidInput);
        assert_eq!(session.current_sequence_number, 987);
        assert_eq!(session.errors_in_current_block, 0);
        assert_eq!(session.phase, Phase::Experiment);
    }

    #[test]
    fn test_timeout_precedes_parsing() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);
        for answer in &CORRECT_RUN[..7] {
            session.submit_answer_at(answer, t0 + secs(10)).unwrap();
        }

        // Correct and crossing the threshold, but after the deadline
        let fb = session.submit_answer_at("896", t0 + secs(61)).unwrap();
        assert_eq!(fb.kind, FeedbackKind::TimeExpired);
        assert!(!session.blocks_results[0].success);
        assert_eq!(session.current_money, 100_000);
        assert_eq!(session.successful_block_counter, 0);

        // Garbage after the deadline also times out rather than re-prompting
        let t1 = t0 + secs(80);
        next_block(&mut session, t1);
        let fb = session.submit_answer_at("abc", t1 + secs(61)).unwrap();
        assert_eq!(fb.kind, FeedbackKind::TimeExpired);
        assert_eq!(session.blocks_results.len(), 2);
    }

    #[test]
    fn test_explicit_success_after_deadline_is_failure() {
        let t0 = Instant::now();
        let mut session = started(Variant::Loss, t0);
        let fb = session.end_block_at(true, t0 + secs(61)).unwrap();
        assert_eq!(fb.kind, FeedbackKind::BlockFailed);
        assert_eq!(session.current_money, 190_000);
    }

    #[test]
    fn test_gain_rewards_by_success_ordinal() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);
        let mut money = vec![session.current_money];

        // Block 1 fails by timeout
        session.submit_answer_at("987", t0 + secs(61)).unwrap();
        money.push(session.current_money);

        let mut t = t0 + secs(100);
        for _ in 2..=4 {
            next_block(&mut session, t);
            complete_block(&mut session, t + secs(30));
            money.push(session.current_money);
            t += secs(100);
        }

        let deltas: Vec<i64> = money.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(deltas, vec![0, 10_000, 20_000, 20_000]);
        assert_eq!(session.successful_block_counter, 3);
        assert_eq!(session.phase, Phase::Results);
    }

    #[test]
    fn test_gain_four_successes() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);
        let mut t = t0;
        let mut deltas = Vec::new();
        for block in 1..=4 {
            if block > 1 {
                next_block(&mut session, t);
            }
            let before = session.current_money;
            complete_block(&mut session, t + secs(15));
            deltas.push(session.current_money - before);
            t += secs(60);
        }
        assert_eq!(deltas, vec![10_000, 20_000, 20_000, 50_000]);
    }

    #[test]
    fn test_loss_penalizes_by_block_index() {
        let t0 = Instant::now();
        let mut session = started(Variant::Loss, t0);

        // Blocks 1 and 2 succeed, block 3 times out
        complete_block(&mut session, t0 + secs(10));
        next_block(&mut session, t0 + secs(30));
        complete_block(&mut session, t0 + secs(40));
        next_block(&mut session, t0 + secs(60));

        let before = session.current_money;
        let fb = session.submit_answer_at("987", t0 + secs(125)).unwrap();
        assert_eq!(fb.kind, FeedbackKind::TimeExpired);
        assert!(fb.message.contains("You lost $20,000"));
        assert_eq!(before - session.current_money, 20_000);
    }

    #[test]
    fn test_pause_is_caller_driven() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);
        complete_block(&mut session, t0 + secs(20));

        assert_eq!(session.pause_remaining_at(t0 + secs(20)), secs(10));
        assert_eq!(session.pause_remaining_at(t0 + secs(25)), secs(5));
        assert_eq!(
            session.poll_pause_at(t0 + secs(25)).unwrap(),
            Phase::PauseBetweenBlocks
        );
        assert_eq!(session.current_block, 1);

        assert_eq!(session.pause_remaining_at(t0 + secs(45)), Duration::ZERO);
        assert_eq!(session.poll_pause_at(t0 + secs(30)).unwrap(), Phase::Experiment);
        assert_eq!(session.current_block, 2);
        assert_eq!(session.errors_in_current_block, 0);
        assert_eq!(session.block_start_time, Some(t0 + secs(30)));
    }

    #[test]
    fn test_block_counter_is_bounded() {
        let t0 = Instant::now();
        let mut session = started(Variant::Loss, t0);
        let mut t = t0;
        let mut seen = vec![session.current_block];
        while session.phase != Phase::Results {
            session.end_block_at(false, t + secs(5)).unwrap();
            t += secs(20);
            if session.phase == Phase::PauseBetweenBlocks {
                session.poll_pause_at(t).unwrap();
            }
            seen.push(session.current_block);
        }
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(session.current_block, 4);

        // Starting another block after the last one finishes the experiment
        session.start_new_block_at(t);
        assert_eq!(session.current_block, 4);
        assert_eq!(session.phase, Phase::Results);
        assert_eq!(session.current_money, 200_000 - 100_000);
    }

    #[test]
    fn test_final_summary_is_idempotent() {
        let t0 = Instant::now();
        let mut session = started(Variant::Loss, t0);
        let mut t = t0;
        for block in 1..=4 {
            if block > 1 {
                next_block(&mut session, t);
            }
            if block == 1 {
                for _ in 0..4 {
                    session.submit_answer_at("1", t + secs(1)).unwrap();
                }
            }
            if block == 3 {
                session.submit_answer_at("1", t + secs(1)).unwrap();
            }
            complete_block(&mut session, t + secs(20));
            t += secs(40);
        }
        assert_eq!(session.phase, Phase::Results);

        let first = session.summary().unwrap().clone();
        let second = session.compute_final_summary().clone();
        assert_eq!(first, second);
        assert_eq!(first.total_errors, 5);
        assert_eq!(
            first.learning_coefficient,
            LearningCoefficient::ErrorBased(1.0)
        );
        assert_eq!(first.money_outcome.to_string(), "No losses.");
    }

    #[test]
    fn test_out_of_phase_actions_are_rejected() {
        let t0 = Instant::now();
        let mut session = SessionState::new(ExperimentConfig::default());

        let err = session
            .apply(Action::Submit("987".into()), t0)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidPhase {
                action: ActionKind::Submit,
                phase: Phase::Welcome
            }
        );
        assert!(session.apply(Action::PollPause, t0).is_err());
        assert!(session.end_block_at(true, t0).is_err());
        assert_eq!(session.phase, Phase::Welcome);
        assert_eq!(session.summary(), Err(SessionError::NoSummary));
    }

    #[test]
    fn test_reset_discards_everything() {
        let t0 = Instant::now();
        let mut session = started(Variant::Gain, t0);
        complete_block(&mut session, t0 + secs(10));
        session.set_mood_rating(9);

        assert_eq!(session.apply(Action::Reset, t0).unwrap(), Phase::Welcome);
        assert!(session.blocks_results.is_empty());
        assert_eq!(session.current_block, 0);
        assert_eq!(session.current_money, 100_000);
        assert_eq!(session.mood_rating, 5);
        assert!(session.feedback.is_none());
    }

    #[test]
    fn test_ratings_are_clamped() {
        let mut session = SessionState::new(ExperimentConfig::default());
        session.set_mood_rating(0);
        session.set_mental_fatigue_rating(42);
        assert_eq!(session.mood_rating, 1);
        assert_eq!(session.mental_fatigue_rating, 10);
    }

    #[test]
    fn test_long_variant_sequence() {
        let t0 = Instant::now();
        let mut session = started(Variant::GainLong, t0);
        assert_eq!(session.current_sequence_number, 1500);
        assert_eq!(session.expected_answer(), 1487);
        session.submit_answer_at("1400", t0).unwrap();
        assert_eq!(session.current_sequence_number, 1500);
        assert_eq!(session.errors_in_current_block, 1);
    }
}
