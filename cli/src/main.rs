//! saaty CLI - binary entry point and terminal session management.
//!
//! # Flow
//!
//! ```text
//! main() -> prompts (property, elements) -> TerminalSession -> elicit()
//!                                                                 |
//!                                                                 v
//!                       report on stdout <- compute_membership() <-+
//! ```
//!
//! The terminal session only lives while menus are on screen, so the line
//! prompts and the final report use the normal cooked-mode terminal.

mod prompt;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Stdout, Write, stdout},
    path::PathBuf,
    process::ExitCode,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use saaty_config::{EnvOverrides, SaatyConfig, Settings};
use saaty_core::{compute_membership, elicit, parse_elements};
use saaty_tui::{CrosstermKeys, Report, TerminalNavigator, render_report};
use saaty_types::{Element, JudgmentMatrix, SaatyError, UiOptions};

/// Conventional exit status for a run ended by Ctrl+C.
const EXIT_INTERRUPTED: u8 = 130;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Writing logs to stdout/stderr would tear through the menu rendering.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.saaty/logs/saaty.log
    if let Some(config_path) = SaatyConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("saaty.log"));
    }

    candidates.push(PathBuf::from(".saaty").join("logs").join("saaty.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode delivers individual key events; the alternate screen keeps menu
/// redraws out of the scrollback so the report prints onto a clean console.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, SaatyError> {
        enable_raw_mode().map_err(|err| {
            SaatyError::input_unavailable(format!("cannot read keyboard events: {err}"))
        })?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, Show);
            return Err(SaatyError::Render(err.to_string()));
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, Show);
                Err(SaatyError::Render(err.to_string()))
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show);
        let _ = self.terminal.show_cursor();
    }
}

fn load_settings() -> Settings {
    let config = match SaatyConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            None
        }
    };
    Settings::resolve(config.as_ref(), &EnvOverrides::from_env())
}

fn elicit_in_terminal(elements: &[Element], ui: UiOptions) -> Result<JudgmentMatrix, SaatyError> {
    // A single element has no pairs; skip taking over the terminal.
    if elements.len() < 2 {
        return JudgmentMatrix::neutral(elements.len());
    }

    let mut session = TerminalSession::new()?;
    let mut navigator = TerminalNavigator::new(&mut session.terminal, CrosstermKeys, ui);
    elicit(&mut navigator, elements)
}

fn run() -> Result<()> {
    let settings = load_settings();

    let mut output = stdout();
    let (property, raw_elements) = {
        // Lock released before the menus take over the terminal.
        let mut input = io::stdin().lock();
        let property = prompt::read_line(&mut input, &mut output, "Fuzzy property name: ")?;
        let raw = prompt::read_line(&mut input, &mut output, "Elements (comma-separated): ")?;
        (property, raw)
    };
    let elements = parse_elements(&raw_elements);
    tracing::info!(property = %property, elements = elements.len(), "Inputs collected");

    let matrix = elicit_in_terminal(&elements, settings.ui)?;
    let membership = compute_membership(&matrix);

    let report = Report {
        property: &property,
        elements: &elements,
        matrix: &matrix,
        membership: &membership,
    };
    let rendered = render_report(&report, settings.report_format, settings.precision)
        .context("failed to render report")?;

    output.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        output.write_all(b"\n")?;
    }
    output.flush()?;
    tracing::info!("Report written");
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Run failed: {err:#}");
            if matches!(err.downcast_ref::<SaatyError>(), Some(SaatyError::Interrupted)) {
                eprintln!("Interrupted.");
                return ExitCode::from(EXIT_INTERRUPTED);
            }
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
