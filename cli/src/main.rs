//! Kickoff CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`kickoff_engine`] (application state) and [`kickoff_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> load config + deck -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`kickoff_tui::InputPump`])
//! 3. Apply terminal mode requests (mouse capture follows the wheel listener)
//! 4. Advance animations (`app.tick()`)
//! 5. Render frame

mod assets;

use anyhow::{Context, Result, bail};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kickoff_engine::config::load_deck;
use kickoff_engine::{App, AppOptions, Deck, KickoffConfig, TerminalRequest};
use kickoff_tui::{InputPump, draw, handle_events};

const USAGE: &str = "Usage: kickoff [--deck <path>]

Keys:
  p            toggle presentation mode
  Esc          leave presentation mode / quit
  Up/Down j/k  scroll, or previous/next slide in presentation mode
  Left/Right   previous/next slide in presentation mode
  1-9, n       jump to a section / to the last section
  r            reload the deck file
  q            quit";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

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

    // Without a log file, prefer "no logs" over corrupting the TUI by writing
    // to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
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

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
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

    // Primary: ~/.kickoff/logs/kickoff.log
    if let Some(config_path) = KickoffConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("kickoff.log"));
    }

    // Fallback: ./.kickoff/logs/kickoff.log
    candidates.push(PathBuf::from(".kickoff").join("logs").join("kickoff.log"));

    candidates
}

#[derive(Debug, Default)]
struct CliArgs {
    deck: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-d" | "--deck" => {
                let path = args.next().context("--deck needs a path")?;
                parsed.deck = Some(PathBuf::from(path));
            }
            other => match other.strip_prefix("--deck=") {
                Some(path) => parsed.deck = Some(PathBuf::from(path)),
                None => bail!("unknown argument `{other}`\n\n{USAGE}"),
            },
        }
    }
    Ok(parsed)
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages the terminal lifecycle including:
/// - Raw mode (disables line buffering and echo)
/// - Alternate screen
/// - Alternate scroll mode (maps the wheel to arrow keys while the mouse is
///   not captured)
/// - Mouse capture, toggled at runtime by presentation mode
///
/// On drop, all terminal state is restored to its original configuration,
/// ensuring the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_captured: bool,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        // Enable alternate scroll mode: CSI ? 1007 h
        let _ = out.write_all(b"\x1b[?1007h");
        let _ = out.flush();

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                // Disable alternate scroll mode: CSI ? 1007 l
                let _ = out.write_all(b"\x1b[?1007l");
                let _ = out.flush();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self {
            terminal,
            mouse_captured: false,
        })
    }

    fn apply(&mut self, request: TerminalRequest) -> Result<()> {
        match request {
            TerminalRequest::EnableMouseCapture => {
                execute!(self.terminal.backend_mut(), EnableMouseCapture)?;
                self.mouse_captured = true;
            }
            TerminalRequest::DisableMouseCapture => {
                execute!(self.terminal.backend_mut(), DisableMouseCapture)?;
                self.mouse_captured = false;
            }
        }
        tracing::debug!(?request, "Terminal mode changed");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.mouse_captured {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        // Disable alternate scroll mode: CSI ? 1007 l
        let _ = self.terminal.backend_mut().write_all(b"\x1b[?1007l");
        let _ = std::io::Write::flush(&mut *self.terminal.backend_mut());
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn load_config() -> KickoffConfig {
    match KickoffConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config: {err}");
            KickoffConfig::default()
        }
    }
}

fn open_deck(path: Option<&PathBuf>) -> Result<Deck> {
    match path {
        Some(path) => {
            load_deck(path).with_context(|| format!("cannot open deck {}", path.display()))
        }
        None => assets::default_deck().context("built-in deck is invalid"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    init_tracing();

    let config = load_config();
    let deck_path = config.deck_path(args.deck.as_deref());
    let deck = open_deck(deck_path.as_ref())?;
    let mut app = App::new(deck, AppOptions::from_config(&config, deck_path));

    let result = {
        let mut session = TerminalSession::new()?;
        if let Ok(size) = session.terminal.size() {
            app.resize(size.height);
        }
        run_app(&mut session, &mut app).await
    };

    // Restores overflow and detaches listeners before exit.
    app.set_presentation(false);

    if let Err(err) = &result {
        tracing::error!("Exiting on error: {err:#}");
        eprintln!("Error: {err:?}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app(session: &mut TerminalSession, app: &mut App) -> Result<()> {
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = 'frames: loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };

        for request in app.take_terminal_requests() {
            if let Err(e) = session.apply(request) {
                break 'frames Err(e);
            }
        }
        if quit_now {
            break Ok(());
        }

        app.tick(Instant::now());

        if let Err(e) = session.terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
