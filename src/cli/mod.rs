//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and key → command mapping using crossterm
//! - `display.rs`: Per-phase terminal screens

pub mod display;
pub mod input;
