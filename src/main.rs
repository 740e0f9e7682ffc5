//! Console front end for the cyber-hacking puzzle.
//!
//! Renders the board, reads a position per line from stdin and plays it
//! until the game ends.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use cyber_hacking::{GameConfig, GameEngine, IgnoreReason, PlayOutcome, Styling, TextRenderer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Breach-protocol grid puzzle
#[derive(Parser, Debug)]
#[command(name = "cyber-hacking")]
#[command(about = "Pick cells along alternating rows and columns to assemble the sequence", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for the grid
    #[arg(long)]
    seed: Option<u64>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Buffer capacity
    #[arg(long)]
    buffer_size: Option<usize>,

    /// Target sequence as hex bytes, e.g. "E9 1C 55"
    #[arg(long, value_parser = parse_hex_sequence)]
    sequence: Option<HexSequence>,

    /// Disable colors (use plain markers)
    #[arg(long)]
    no_color: bool,

    /// Don't clear the screen between moves
    #[arg(long)]
    no_clear: bool,
}

#[derive(Clone, Debug)]
struct HexSequence(Vec<u8>);

fn parse_hex_sequence(s: &str) -> Result<HexSequence, String> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| u8::from_str_radix(t, 16).map_err(|e| format!("invalid hex byte {t:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()
        .map(HexSequence)
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.rows.is_some() || self.cols.is_some() {
            let rows = self.rows.unwrap_or(config.rows);
            let cols = self.cols.unwrap_or(config.cols);
            config = config.with_dimensions(rows, cols);
        }
        if let Some(size) = self.buffer_size {
            config = config.with_buffer_size(size);
        }
        if let Some(HexSequence(sequence)) = &self.sequence {
            config = config.with_sequence(sequence.clone());
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    let mut engine = GameEngine::new(config).context("invalid game configuration")?;
    info!(seed = engine.seed(), "new game");
    engine.start()?;

    let styling = if cli.no_color { Styling::Plain } else { Styling::Color };
    let renderer = TextRenderer::new(styling);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    let mut notice: Option<String> = None;

    while !engine.is_game_over() && engine.has_legal_move() {
        if !cli.no_clear {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(stdout, "{}", renderer.render(&engine))?;
        if let Some(message) = notice.take() {
            writeln!(stdout, "{message}")?;
        }
        write!(stdout, "{} > ", renderer.prompt_line(&engine))?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            warn!("input closed before the game ended");
            break;
        };
        let line = line?;

        let position: usize = match line.trim().parse() {
            Ok(p) => p,
            Err(_) => {
                notice = Some(format!("Not a position: {:?}", line.trim()));
                continue;
            }
        };

        match engine.play(position) {
            Ok(PlayOutcome::Played { .. }) => {}
            Ok(PlayOutcome::Ignored(IgnoreReason::CellUsed { row, col })) => {
                notice = Some(format!("Cell {row},{col} has already been used"));
            }
            Ok(PlayOutcome::Ignored(IgnoreReason::NotPlaying(status))) => {
                notice = Some(format!("Game is not running ({status})"));
            }
            Err(e) => notice = Some(e.to_string()),
        }
    }

    writeln!(stdout)?;
    write!(stdout, "{}", renderer.render(&engine))?;
    if engine.is_game_over() || !engine.has_legal_move() {
        writeln!(stdout, "{}", renderer.outcome_message(&engine))?;
    }
    writeln!(stdout, "Seed: {}", engine.seed())?;

    Ok(())
}
