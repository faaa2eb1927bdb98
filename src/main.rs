use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use connect_four_engine::config::AppConfig;
use connect_four_engine::game::{GameEngine, GameStatus, Player};

/// Replay a sequence of column drops against a fresh game.
#[derive(Parser)]
#[command(name = "play", about = "Replay Connect Four moves and report the outcome")]
struct Cli {
    /// Columns to drop into, in order (e.g. 3,3,4,2)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    moves: Vec<isize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Who moves first: player1 or player2 (random when omitted)
    #[arg(long)]
    starting_player: Option<String>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_player(name: &str) -> Result<Player> {
    match name {
        "player1" | "1" => Ok(Player::Player1),
        "player2" | "2" => Ok(Player::Player2),
        other => bail!("unknown player '{}' (expected 'player1' or 'player2')", other),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("connect_four_engine=info".parse()?)
                .add_directive("play=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if let Some(name) = cli.starting_player.as_deref() {
        app_config.game.starting_player = Some(parse_player(name)?);
    }
    app_config.validate().context("validating config overrides")?;

    let mut game = GameEngine::from_config(&app_config.game);
    info!(
        width = app_config.game.width,
        height = app_config.game.height,
        first = game.current_player().name(),
        "starting game"
    );

    for (i, &column) in cli.moves.iter().enumerate() {
        match game.drop_piece(column) {
            Ok(outcome) => info!(
                "move {}: {} -> row {}, column {}",
                i + 1,
                outcome.player.name(),
                outcome.position.row,
                outcome.position.column
            ),
            Err(e) => warn!("move {} (column {}) rejected: {}", i + 1, column, e),
        }
    }

    match game.status() {
        GameStatus::Won(player) => {
            println!("{} wins after {} moves", player.name(), game.move_count());
            if let Some(line) = game.winning_line() {
                let cells: Vec<String> = line
                    .iter()
                    .map(|pos| format!("({},{})", pos.row, pos.column))
                    .collect();
                println!("Winning cells: {}", cells.join(" "));
            }
        }
        GameStatus::Tied => println!("Tied after {} moves", game.move_count()),
        GameStatus::InProgress => println!(
            "In progress after {} moves, {} to move (open columns: {:?})",
            game.move_count(),
            game.current_player().name(),
            game.legal_columns()
        ),
    }

    Ok(())
}
