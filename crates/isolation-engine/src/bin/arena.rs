use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use isolation_core::{BoardDims, Isolation, Player};
use isolation_engine::{play_match, AgentConfig, Heuristic, SearchAgent};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Play knight's isolation matches between two search agents")]
struct Args {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 20)]
    games: u32,

    /// JSON config for agent A
    #[arg(long)]
    config_a: Option<PathBuf>,

    /// JSON config for agent B
    #[arg(long)]
    config_b: Option<PathBuf>,

    /// Heuristic override for agent A
    #[arg(long)]
    heuristic_a: Option<Heuristic>,

    /// Heuristic override for agent B
    #[arg(long)]
    heuristic_b: Option<Heuristic>,

    #[arg(long)]
    depth_a: Option<u32>,

    #[arg(long)]
    depth_b: Option<u32>,

    /// Per-move time budget in milliseconds
    #[arg(long, default_value_t = 150)]
    budget_ms: u64,

    #[arg(long, default_value_t = isolation_core::DEFAULT_WIDTH)]
    width: u8,

    #[arg(long, default_value_t = isolation_core::DEFAULT_HEIGHT)]
    height: u8,

    /// Base seed; game `n` seeds agent A with `seed + 2n` and agent B with `seed + 2n + 1`
    #[arg(long)]
    seed: Option<u64>,

    /// Write one JSON match record per line
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

fn load_config(
    path: Option<&PathBuf>,
    heuristic: Option<Heuristic>,
    depth: Option<u32>,
    board: BoardDims,
) -> Result<AgentConfig> {
    let mut config = match path {
        Some(path) => AgentConfig::load(path)
            .with_context(|| format!("loading agent config {}", path.display()))?,
        None => AgentConfig::default(),
    };
    if let Some(heuristic) = heuristic {
        config = config.with_heuristic(heuristic);
    }
    if let Some(depth) = depth {
        config = config.with_depth_limit(depth);
    }
    let config = config.with_board(board);
    config.validate()?;
    Ok(config)
}

/// Seeds for agents A and B in game `game`. Wraps around at `u64::MAX`.
fn game_seeds(seed: u64, game: u32) -> (u64, u64) {
    let base = seed.wrapping_add(u64::from(game) * 2);
    (base, base.wrapping_add(1))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let board = BoardDims::new(args.width, args.height).context("invalid board dimensions")?;
    let config_a = load_config(args.config_a.as_ref(), args.heuristic_a, args.depth_a, board)?;
    let config_b = load_config(args.config_b.as_ref(), args.heuristic_b, args.depth_b, board)?;
    let budget = Duration::from_millis(args.budget_ms);

    let mut output = match &args.output {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };

    info!(
        games = args.games,
        a = %config_a.heuristic,
        b = %config_b.heuristic,
        budget_ms = args.budget_ms,
        "starting arena"
    );

    let mut a_wins = 0u32;
    let mut b_wins = 0u32;
    for game in 0..args.games {
        let (mut a_config, mut b_config) = (config_a.clone(), config_b.clone());
        if let Some(seed) = args.seed {
            let (seed_a, seed_b) = game_seeds(seed, game);
            a_config = a_config.with_seed(seed_a);
            b_config = b_config.with_seed(seed_b);
        }
        let mut a = SearchAgent::new(a_config);
        let mut b = SearchAgent::new(b_config);

        let a_first = game % 2 == 0;
        let a_player = if a_first { Player::One } else { Player::Two };
        let agents = if a_first {
            [&mut a, &mut b]
        } else {
            [&mut b, &mut a]
        };
        let record = play_match(agents, Isolation::new(board), budget)?;

        if record.winner == a_player {
            a_wins = a_wins.saturating_add(1);
        } else {
            b_wins = b_wins.saturating_add(1);
        }
        info!(
            game = game + 1,
            plies = record.plies,
            a_won = record.winner == a_player,
            forfeit = record.forfeit.is_some(),
            "game finished"
        );

        if let Some(out) = output.as_mut() {
            serde_json::to_writer(&mut *out, &record)?;
            out.write_all(b"\n")?;
        }
    }

    if let Some(mut out) = output {
        out.flush()?;
    }

    let played = a_wins + b_wins;
    let rate = if played == 0 {
        0.0
    } else {
        f64::from(a_wins) / f64::from(played) * 100.0
    };
    eprintln!(
        "A ({}): {a_wins}W/{b_wins}L | B ({}): {b_wins}W/{a_wins}L | A win rate {rate:.1}%",
        config_a.heuristic, config_b.heuristic
    );
    Ok(())
}
