//! Terminal display and UI rendering
//!
//! One screen per experiment phase:
//! - Welcome and instructions (framing-specific money rules)
//! - Task screen with money, block, countdown and feedback
//! - Pause countdown between blocks
//! - Results with summary and self-ratings

use crate::session::config::MAX_BLOCKS;
use crate::session::{format_money, FeedbackKind, Group, SessionState};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::path::Path;
use std::time::Instant;

type DisplayResult = Result<(), Box<dyn std::error::Error>>;

/// Ordinal words for the money table rows
const ORDINALS: [&str; MAX_BLOCKS as usize] = ["First", "Second", "Third", "Fourth"];

/// Terminal display manager
pub struct Display {
    /// Whether we're using alternate screen
    use_alternate_screen: bool,
}

impl Display {
    /// Create display without alternate screen (simpler mode)
    pub fn simple() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Display {
            use_alternate_screen: false,
        })
    }

    /// Create display on the alternate screen, restored on shutdown
    pub fn alternate() -> Result<Self, Box<dyn std::error::Error>> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Display {
            use_alternate_screen: true,
        })
    }

    /// Clear screen
    pub fn clear(&self) -> DisplayResult {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Write lines starting at `row`; raw mode needs explicit carriage returns
    fn lines(&self, row: u16, text: &str) -> DisplayResult {
        let mut stdout = stdout();
        for (i, line) in text.lines().enumerate() {
            execute!(stdout, cursor::MoveTo(0, row + i as u16), Print(line))?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn title(&self, row: u16, text: &str) -> DisplayResult {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, row),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Cyan),
            Print(text),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }

    fn help(&self, row: u16, text: &str) -> DisplayResult {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::DarkGrey),
            Print(text),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Welcome screen
    pub fn show_welcome(&self, group: Group) -> DisplayResult {
        self.title(1, "Welcome to the Cognitive Motivation Experiment")?;
        let framing = match group {
            Group::Gain => "This experiment runs in the GAIN condition only.",
            Group::Loss => "This experiment runs in the AVOID LOSS condition only.",
        };
        self.lines(3, framing)?;
        self.help(5, "Press ENTER to read the instructions  |  Esc to exit")
    }

    /// Task rules and the money table for the configured framing
    pub fn show_instructions(&self, session: &SessionState) -> DisplayResult {
        let cfg = &session.config;
        self.title(1, "Instructions")?;

        let task = format!(
            "This experiment is a simple arithmetic task over {} blocks of {} seconds each.\n\
             Subtract {} repeatedly, starting from {}. For example: {}, {}, {}, ...\n\
             Type each result. A mistake RESTARTS the sequence from {} within the same block.\n\
             A block is completed once the current number is {} or lower.\n\
             That takes {} correct answers in a row from {}.",
            cfg.max_blocks,
            cfg.block_duration.as_secs(),
            cfg.subtract_value,
            cfg.start_number,
            cfg.start_number,
            cfg.start_number - cfg.subtract_value,
            cfg.start_number - 2 * cfg.subtract_value,
            cfg.start_number,
            cfg.target_threshold,
            cfg.steps_per_block(),
            cfg.start_number,
        );
        self.lines(3, &task)?;

        let mut rules = format!(
            "Your group: {}\nYou start with {} (fictitious).\n",
            session.group,
            format_money(cfg.initial_money)
        );
        match session.group {
            Group::Gain => {
                rules.push_str("For every block you DO complete in time:\n");
                for (name, amount) in ORDINALS.iter().zip(cfg.money_table) {
                    rules.push_str(&format!(
                        "  - {} completed block: you win {}\n",
                        name,
                        format_money(amount)
                    ));
                }
                rules.push_str("Your goal is to win as much money as possible.");
            }
            Group::Loss => {
                rules.push_str("For every block you do NOT complete in time:\n");
                for (name, amount) in ORDINALS.iter().zip(cfg.money_table) {
                    rules.push_str(&format!(
                        "  - {} block failed: you lose {}\n",
                        name,
                        format_money(amount)
                    ));
                }
                rules.push_str("Your goal is to lose as little money as possible.");
            }
        }
        self.lines(9, &rules)?;
        self.help(19, "Press ENTER when you are ready to start  |  Esc to exit")
    }

    /// Task screen for the running block
    pub fn show_experiment(
        &self,
        session: &SessionState,
        input: &str,
        now: Instant,
    ) -> DisplayResult {
        let mut stdout = stdout();
        let remaining = session.block_remaining_at(now).as_secs_f64().round();

        execute!(
            stdout,
            cursor::MoveTo(0, 1),
            Print("Current money: "),
            SetForegroundColor(Color::Green),
            Print(format_money(session.current_money)),
            ResetColor,
            Print(format!(
                "  |  Block: {} / {}",
                session.current_block, session.config.max_blocks
            )),
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Red),
            Print(format!("Estimated time left: {:.0}s", remaining)),
            ResetColor,
            cursor::MoveTo(0, 4),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Blue),
            Print(format!("Current number: {}", session.current_sequence_number)),
            ResetColor,
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 6),
            SetForegroundColor(Color::Yellow),
            Print("Your answer: "),
            ResetColor,
            Print(input),
        )?;

        if let Some(feedback) = &session.feedback {
            execute!(
                stdout,
                cursor::MoveTo(0, 8),
                SetForegroundColor(feedback_color(feedback.kind)),
                Print(&feedback.message),
                ResetColor
            )?;
        }

        execute!(
            stdout,
            cursor::MoveTo(0, 9),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "Errors in this block: {}",
                session.errors_in_current_block
            )),
            ResetColor
        )?;
        self.help(11, "Press ENTER to submit answer  |  Esc to exit")?;

        // Leave the cursor at the end of the answer
        execute!(
            stdout,
            cursor::MoveTo(13 + input.chars().count() as u16, 6)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Countdown between blocks
    pub fn show_pause(&self, session: &SessionState, now: Instant) -> DisplayResult {
        let mut stdout = stdout();
        self.title(
            1,
            &format!(
                "End of block {}. Take a short break.",
                session.current_block
            ),
        )?;

        if let Some(feedback) = &session.feedback {
            execute!(
                stdout,
                cursor::MoveTo(0, 3),
                SetForegroundColor(feedback_color(feedback.kind)),
                Print(&feedback.message),
                ResetColor
            )?;
        }

        execute!(
            stdout,
            cursor::MoveTo(0, 5),
            SetForegroundColor(Color::Blue),
            Print(format!(
                "The next block starts in {} seconds.",
                session.pause_remaining_at(now).as_secs()
            )),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Results screen with summary and self-ratings
    pub fn show_results(&self, session: &SessionState, saved_to: Option<&Path>) -> DisplayResult {
        let mut stdout = stdout();
        self.title(1, "Experiment finished")?;

        execute!(
            stdout,
            cursor::MoveTo(0, 3),
            Print("Your final money is: "),
            SetForegroundColor(Color::Green),
            Print(format_money(session.current_money)),
            ResetColor
        )?;

        if let Some(summary) = &session.final_summary {
            let money_label = match session.group {
                Group::Gain => "Money earned",
                Group::Loss => "Money summary",
            };
            execute!(
                stdout,
                cursor::MoveTo(0, 5),
                SetForegroundColor(Color::Blue),
                Print("─".repeat(50)),
                ResetColor,
                cursor::MoveTo(0, 6),
                Print("Total errors: "),
                SetForegroundColor(Color::Red),
                Print(summary.total_errors),
                ResetColor,
                cursor::MoveTo(0, 7),
                Print(format!("{}: {}", money_label, summary.money_outcome)),
                cursor::MoveTo(0, 8),
                Print("Learning coefficient (error-based): "),
                SetForegroundColor(Color::Blue),
                Print(summary.learning_coefficient),
                ResetColor,
            )?;

            for (i, detail) in summary.block_details.iter().enumerate() {
                execute!(stdout, cursor::MoveTo(2, 9 + i as u16), Print(detail))?;
            }
        }

        execute!(
            stdout,
            cursor::MoveTo(0, 13),
            Print(format!(
                "Mood (1 very negative - 10 very positive): {} / 10",
                session.mood_rating
            )),
            cursor::MoveTo(0, 14),
            Print(format!(
                "Mental fatigue (1 very rested - 10 very tired): {} / 10",
                session.mental_fatigue_rating
            )),
        )?;

        if let Some(path) = saved_to {
            execute!(
                stdout,
                cursor::MoveTo(0, 16),
                SetForegroundColor(Color::Green),
                Print(format!(
                    "Results saved to {}. Thank you for participating!",
                    path.display()
                )),
                ResetColor
            )?;
        }

        let help = if session.config.exports_results {
            "Up/Down: mood  |  Left/Right: fatigue  |  S: save results  |  \
             R: start over  |  Esc: exit"
        } else {
            "Up/Down: mood  |  Left/Right: fatigue  |  R: back to start  |  Esc: exit"
        };
        self.help(18, help)
    }

    /// Show an error line at the bottom of the screen
    pub fn show_error(&self, message: &str) -> DisplayResult {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 20),
            SetForegroundColor(Color::Red),
            Print(message),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> DisplayResult {
        let mut stdout = stdout();

        if self.use_alternate_screen {
            execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
        }

        terminal::disable_raw_mode()?;
        Ok(())
    }
}

/// Success green, mistakes red, warnings orange
fn feedback_color(kind: FeedbackKind) -> Color {
    match kind {
        FeedbackKind::Correct | FeedbackKind::BlockCompleted => Color::Green,
        FeedbackKind::Incorrect | FeedbackKind::BlockFailed => Color::Red,
        FeedbackKind::InvalidInput | FeedbackKind::TimeExpired => Color::DarkYellow,
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
