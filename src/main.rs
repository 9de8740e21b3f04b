//! Cognitive Motivation Experiment - gain vs. loss framing
//!
//! Single-participant terminal front end for a timed serial subtraction
//! task (subtract 13 until the threshold is reached, four blocks).
//! All experiment logic lives in the library; this binary only maps keys
//! to session actions and redraws.

use clap::Parser;
use motivation_experiment::cli::display::Display;
use motivation_experiment::cli::input::{Command, InputHandler};
use motivation_experiment::export::{write_record, ExportFormat, ExportRecord};
use motivation_experiment::session::{Action, ExperimentConfig, Phase, SessionState, Variant};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Longest answer accepted from the keyboard
const MAX_ANSWER_LEN: usize = 8;

#[derive(Parser, Debug)]
#[command(name = "Cognitive Motivation Experiment")]
#[command(about = "Serial subtraction task under gain or loss framing")]
struct Args {
    /// Deployed experiment variant
    #[arg(short, long, value_enum, default_value = "gain")]
    variant: Variant,

    /// Directory for exported results
    #[arg(short, long, default_value = "results")]
    output: PathBuf,

    /// Export file format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Draw on the main screen instead of the alternate screen
    #[arg(long)]
    inline: bool,

    /// Write logs to this file (RUST_LOG controls the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Logs go to a file when one is given; the terminal belongs to the UI
fn init_tracing(args: &Args) -> Result<(), Box<dyn Error>> {
    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    } else if args.debug {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

/// UI-side state that is not part of the experiment itself
struct Screen {
    answer: String,
    saved_to: Option<PathBuf>,
    error: Option<String>,
}

fn render(
    display: &Display,
    session: &SessionState,
    screen: &Screen,
) -> Result<(), Box<dyn Error>> {
    let now = Instant::now();
    display.clear()?;
    match session.phase {
        Phase::Welcome => display.show_welcome(session.group)?,
        Phase::Instructions => display.show_instructions(session)?,
        Phase::Experiment => display.show_experiment(session, &screen.answer, now)?,
        Phase::PauseBetweenBlocks => display.show_pause(session, now)?,
        Phase::Results => display.show_results(session, screen.saved_to.as_deref())?,
    }
    if let Some(error) = &screen.error {
        display.show_error(error)?;
    }
    Ok(())
}

fn handle(
    command: Command,
    session: &mut SessionState,
    screen: &mut Screen,
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    let now = Instant::now();
    match (session.phase, command) {
        (Phase::Welcome, Command::Confirm) => {
            session.apply(Action::Begin, now)?;
        }
        (Phase::Instructions, Command::Confirm) => {
            screen.answer.clear();
            session.apply(Action::StartTask, now)?;
        }
        (Phase::Experiment, Command::Type(c)) => {
            if screen.answer.len() < MAX_ANSWER_LEN {
                screen.answer.push(c);
            }
        }
        (Phase::Experiment, Command::Backspace) => {
            screen.answer.pop();
        }
        (Phase::Experiment, Command::Confirm) => {
            // The field is cleared after every submission, valid or not
            let answer = std::mem::take(&mut screen.answer);
            session.apply(Action::Submit(answer), now)?;
        }
        (Phase::Results, Command::MoodUp) => {
            session.set_mood_rating(session.mood_rating.saturating_add(1))
        }
        (Phase::Results, Command::MoodDown) => {
            session.set_mood_rating(session.mood_rating.saturating_sub(1))
        }
        (Phase::Results, Command::FatigueUp) => {
            session.set_mental_fatigue_rating(session.mental_fatigue_rating.saturating_add(1))
        }
        (Phase::Results, Command::FatigueDown) => {
            session.set_mental_fatigue_rating(session.mental_fatigue_rating.saturating_sub(1))
        }
        (Phase::Results, Command::Save) if session.config.exports_results => {
            let record = ExportRecord::from_session(session, chrono::Local::now())?;
            match write_record(&args.output, session.config.variant, &record, args.format) {
                Ok(path) => {
                    screen.saved_to = Some(path);
                    screen.error = None;
                }
                Err(e) => screen.error = Some(e.to_string()),
            }
        }
        (Phase::Results, Command::Reset) => {
            session.apply(Action::Reset, now)?;
            screen.saved_to = None;
            screen.error = None;
        }
        _ => {}
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = ExperimentConfig::preset(args.variant);
    info!(variant = ?args.variant, group = ?config.group, "starting experiment front end");

    let mut session = SessionState::new(config);
    let mut screen = Screen {
        answer: String::new(),
        saved_to: None,
        error: None,
    };

    InputHandler::enable_raw_mode()?;
    let display = if args.inline {
        Display::simple()?
    } else {
        Display::alternate()?
    };
    let input = InputHandler::new();

    // Event loop
    loop {
        render(&display, &session, &screen)?;

        if let Some(key) = input.read_key()? {
            match InputHandler::command(&key) {
                Some(Command::Exit) => break,
                Some(command) => handle(command, &mut session, &mut screen, &args)?,
                None => {}
            }
        }

        // The pause deadline is checked on every tick, key or not
        if session.phase == Phase::PauseBetweenBlocks {
            session.apply(Action::PollPause, Instant::now())?;
        }
    }

    // Cleanup
    display.shutdown()?;
    drop(display);

    if let Some(path) = &screen.saved_to {
        println!("Results saved to {}", path.display());
    }
    println!("Thank you for participating!");

    Ok(())
}
