//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture (the pause countdown keeps ticking)
//! - Numeric answer editing
//! - Ctrl+C / Escape exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// Key-level commands understood by the experiment screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Confirm,
    Backspace,
    /// Digit or minus sign for the answer field
    Type(char),
    MoodUp,
    MoodDown,
    FatigueUp,
    FatigueDown,
    Save,
    Reset,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                // Windows reports releases too
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Map a key to a command, ignoring keys with Ctrl/Alt held
    pub fn command(key: &KeyEvent) -> Option<Command> {
        if Self::is_exit(key) {
            return Some(Command::Exit);
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(Command::Confirm),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Up => Some(Command::MoodUp),
            KeyCode::Down => Some(Command::MoodDown),
            KeyCode::Right => Some(Command::FatigueUp),
            KeyCode::Left => Some(Command::FatigueDown),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => Some(Command::Type(c)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Save),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
