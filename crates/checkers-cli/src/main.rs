//! Terminal checkers.
//!
//! Plays a two-player game on stdin/stdout, or runs perft on a position.

mod command;
mod config;
mod render;
mod shell;

use anyhow::Context;
use checkers_core::Color;
use checkers_engine::movegen::perft::{perft, perft_divide};
use checkers_engine::{Board, Game};
use clap::{Parser, Subcommand};
use config::CliConfig;
use shell::Shell;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Two-player American checkers in the terminal")]
struct Cli {
    /// Path to the configuration file (default: checkers.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from this layout instead of the standard setup
    #[arg(long, global = true)]
    layout: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (the default)
    Play,
    /// Count the turn sequences of a given length
    Perft {
        /// Number of turns to look ahead
        #[arg(short, long)]
        depth: u32,
        /// Print the count below each opening hop
        #[arg(long)]
        divide: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let Cli {
        config,
        layout,
        command,
    } = Cli::parse();

    let config = CliConfig::load(config.as_deref()).context("cannot load configuration")?;
    init_tracing(&config.log_level);

    match command.unwrap_or(Commands::Play) {
        Commands::Play => play(layout.as_deref(), config),
        Commands::Perft { depth, divide } => run_perft(layout.as_deref(), depth, divide),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn play(layout: Option<&str>, config: CliConfig) -> anyhow::Result<()> {
    let game = match layout {
        Some(layout) => Game::from_layout(layout)
            .with_context(|| format!("cannot start from layout {layout:?}"))?,
        None => Game::new(),
    };
    tracing::info!(layout = %game.current_state().layout, "starting shell");

    let mut shell = Shell::new(
        BufReader::new(io::stdin()),
        io::stdout(),
        game,
        config.display,
    );
    shell.run()?;

    let game = shell.game();
    tracing::info!(
        red = game.games_won(Color::Red),
        black = game.games_won(Color::Black),
        "shell closed"
    );
    Ok(())
}

fn run_perft(layout: Option<&str>, depth: u32, divide: bool) -> anyhow::Result<()> {
    let (board, to_move) = match layout {
        Some(layout) => Board::parse_layout(layout)
            .with_context(|| format!("invalid layout {layout:?}"))?,
        None => (Board::startpos(), Color::Red),
    };

    let start = Instant::now();
    let nodes = if divide {
        let results = perft_divide(&board, to_move, depth)?;
        for (mv, count) in &results {
            println!("{mv}: {count}");
        }
        results.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(&board, to_move, depth)?
    };

    let elapsed = start.elapsed();
    tracing::info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, "perft finished");
    println!("Nodes: {nodes}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_defaults_to_play() {
        let cli = Cli::try_parse_from(["checkers"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(cli.layout.is_none());
    }

    #[test]
    fn test_cli_parses_play_with_options() {
        let cli = Cli::try_parse_from([
            "checkers",
            "--config",
            "my.toml",
            "--layout",
            "4/4/4/1b2/2r1/4/4/4 r",
            "play",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Play)));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.layout.as_deref(), Some("4/4/4/1b2/2r1/4/4/4 r"));
    }

    #[test]
    fn test_cli_parses_perft() {
        let cli = Cli::try_parse_from(["checkers", "perft", "--depth", "4", "--divide"]).unwrap();
        match cli.command {
            Some(Commands::Perft { depth, divide }) => {
                assert_eq!(depth, 4);
                assert!(divide);
            }
            _ => panic!("expected perft"),
        }
    }

    #[test]
    fn test_cli_perft_accepts_layout_after_subcommand() {
        let cli = Cli::try_parse_from([
            "checkers",
            "perft",
            "-d",
            "2",
            "--layout",
            "4/4/4/1b2/2r1/4/4/4 r",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Perft { depth: 2, divide: false })
        ));
        assert!(cli.layout.is_some());
    }

    #[test]
    fn test_cli_perft_requires_depth() {
        assert!(Cli::try_parse_from(["checkers", "perft"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
