//! Tic-tac-toe with time travel - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{App, Cli, Command, Settings};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Play => run_play(settings),
        Command::Replay { moves, jump, json } => run_replay(&settings, &moves, jump, json),
    }
}

/// Run the terminal UI
fn run_play(settings: Settings) -> Result<()> {
    tictactoe_tui::init_file_logging(&settings)?;
    info!("Starting tic-tac-toe TUI");

    // Installs a panic hook that restores the terminal.
    let mut terminal = ratatui::try_init()
        .inspect_err(|_| ratatui::restore())
        .context("Failed to initialize terminal")?;

    let mut app = App::new(settings);
    let res = app.run(&mut terminal);

    ratatui::restore();

    if let Err(e) = &res {
        error!(error = %e, "TUI exited with error");
    }
    info!(step = app.game().step(), status = %app.game().status(), "TUI closed");
    res.context("Terminal UI failed")
}

/// Apply moves and print the result
fn run_replay(settings: &Settings, moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    tictactoe_tui::init_stderr_logging(settings);

    let positions = tictactoe_tui::parse_moves(moves)?;
    let replay = tictactoe_tui::replay(&positions, jump)?;

    if json {
        println!("{}", replay.to_json().context("Failed to serialize game")?);
    } else {
        print!("{}", replay.render_text(*settings.show_move_details()));
    }
    Ok(())
}
