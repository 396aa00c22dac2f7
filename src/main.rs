use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tile_race::core::{GameConfig, GameRng};
use tile_race::game::Game;
use tile_race::render::render_game;
use tile_race::stats::{run_batch, BatchConfig};

#[derive(Parser, Debug)]
#[command(name = "tile-race", version, about = "Snakes-and-Ladders style race simulator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a single game and print the final board
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// Seed for teleports and dice (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Log every round
        #[arg(long)]
        trace: bool,
        /// Print the teleport table before playing
        #[arg(long)]
        show_rules: bool,
    },
    /// Play many games and report how often each player wins
    Stats {
        #[command(flatten)]
        game: GameArgs,
        /// Number of games
        #[arg(short = 'n', long, default_value_t = 600)]
        games: usize,
        /// Base seed for the batch
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args, Debug)]
struct GameArgs {
    /// TOML game config; flags below override its fields
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of tiles
    #[arg(long)]
    tiles: Option<u32>,
    /// Tiles per printed row
    #[arg(long)]
    row_width: Option<u32>,
    /// Number of players (default 2 for `play`, 10 for `stats`)
    #[arg(short = 'p', long)]
    players: Option<usize>,
    /// Give up after this many rounds
    #[arg(long)]
    max_rounds: Option<u64>,
}

impl GameArgs {
    /// Build the config from the TOML file (or `fallback` without one),
    /// then apply the flags on top.
    fn load(&self, fallback: GameConfig) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => fallback,
        };
        if let Some(tiles) = self.tiles {
            config.tile_count = tiles;
        }
        if let Some(row_width) = self.row_width {
            config.row_width = row_width;
        }
        if let Some(players) = self.players {
            config.player_count = players;
        }
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = max_rounds;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Players in the default `stats` batch.
const STATS_PLAYERS: usize = 10;

/// `--trace` can switch tracing on; it never switches off `trace = true`
/// from a config file.
fn apply_trace_flag(config: GameConfig, flag: bool) -> GameConfig {
    let trace = flag || config.trace;
    config.with_trace(trace)
}

/// Log filter for `play` when `RUST_LOG` is unset.
fn play_filter(trace: bool) -> &'static str {
    if trace {
        "info,tile_race=debug"
    } else {
        "info"
    }
}

/// `RUST_LOG` wins over `default`.
fn init_tracing(default: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Play { game, seed, trace, show_rules } => {
            let config = apply_trace_flag(game.load(GameConfig::default())?, trace);
            init_tracing(play_filter(config.trace));
            let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
            info!(seed = rng.seed(), "starting game");

            let mut game = Game::new(config, rng)?;
            if show_rules {
                for link in game.rules().links() {
                    println!("{:?}: {link}", link.kind());
                }
            }

            let winner = game.auto_play()?;
            println!("{}", render_game(&game));
            println!("Winner: {winner} after {} rounds", game.rounds());
        }
        Command::Stats { game, games, seed } => {
            init_tracing("warn");
            let fallback = GameConfig {
                player_count: STATS_PLAYERS,
                ..GameConfig::default()
            };
            let config = BatchConfig::new(game.load(fallback)?, games).with_seed(seed);
            let tally = run_batch(&config)?;
            print!("{tally}");
        }
    }
    Ok(())
}
