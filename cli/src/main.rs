use std::fs::File;
use std::io;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use ninetile::pattern::write_csv;
use ninetile::timer::{format_elapsed, Beep, Stopwatch};
use ninetile::{Game, GameConfig, Pattern, PatternSet, Phase, SwapWalkthrough};

/// Terminal front-end for the Nine Tile puzzle.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a timed session. Type a tile number 1-9 to select it; an empty line presses the button.
    Play {
        /// Pattern table to deal from instead of every valid pattern
        #[arg(long)]
        patterns: Option<PathBuf>,
        #[arg(long, default_value_t = GameConfig::default().trials)]
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the fewest swaps between a random arrangement and a random layout.
    ///
    /// Enter applies the next swap, `b` goes back to the start, `r` deals a new puzzle and `q` quits.
    Swap {
        #[arg(long)]
        patterns: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarise the valid patterns, or export the full table of bit rows.
    Patterns {
        #[arg(long)]
        patterns: Option<PathBuf>,
        /// Write all 512 patterns as CSV to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

// how often the play loop checks the clock while waiting for input
const TICK: Duration = Duration::from_millis(50);

/// Lines from stdin, read on their own thread so the caller can keep time while waiting.
fn spawn_input() -> Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    rx
}

fn sound(beep: Beep, elapsed: f64) -> Result<()> {
    debug!("{:?} beep ({} ms at {} Hz) at {}", beep, beep.duration_ms(), beep.frequency_hz(), format_elapsed(elapsed));
    print!("\x07");
    io::stdout().flush()?;
    Ok(())
}

fn load_patterns(path: Option<&Path>) -> Result<PatternSet> {
    match path {
        Some(path) => PatternSet::load(path).with_context(|| format!("failed to load patterns from {}", path.display())),
        None => Ok(PatternSet::enumerate()),
    }
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

fn print_layout<R: rand::Rng>(game: &Game<R>) {
    for row in 0..3 {
        let cells = (0..3)
            .map(|column| {
                let position = row * 3 + column;
                let glyph = game.layout()[position].glyph();
                if game.selected().contains(&position) {
                    format!("[{}]", glyph)
                } else {
                    format!("{}:{}", position + 1, glyph)
                }
            })
            .collect::<Vec<_>>();
        println!("  {}", cells.join("  "));
    }
}

fn play(patterns: PatternSet, config: GameConfig, rng: SmallRng) -> Result<()> {
    let mut game = Game::new(patterns, config, rng);
    let mut stopwatch = Stopwatch::default();

    println!("{}", game.feedback());
    print_layout(&game);

    let lines = spawn_input();
    loop {
        let line = match lines.recv_timeout(TICK) {
            Ok(line) => line.context("failed to read input")?,
            Err(RecvTimeoutError::Timeout) => {
                if let (elapsed, Some(beep)) = stopwatch.poll() {
                    sound(beep, elapsed)?;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };
        if let (elapsed, Some(beep)) = stopwatch.poll() {
            sound(beep, elapsed)?;
        }

        let input = line.trim();
        if input.is_empty() {
            match game.phase() {
                Phase::Idle | Phase::Paused => {
                    game.press(0.0);
                    stopwatch.start();
                }
                Phase::Running => {
                    let elapsed = stopwatch.stop();
                    game.press(elapsed);
                }
                Phase::Finished => break,
            }
        } else {
            match input.parse::<usize>() {
                Ok(tile @ 1..=9) => {
                    if game.toggle(tile - 1, stopwatch.elapsed()).is_some() {
                        stopwatch.stop();
                    }
                }
                _ => {
                    println!("type a tile number from 1 to 9, or press Enter");
                    continue;
                }
            }
        }

        println!("{}", format_elapsed(stopwatch.elapsed()));
        if game.phase() == Phase::Running || game.phase() == Phase::Idle {
            print_layout(&game);
        }
        println!("{}", game.feedback());
        if let Some(label) = game.button_label() {
            println!("({} trial {}/{})", label, game.trial() + 1, config.trials);
        }
        io::stdout().flush()?;

        if game.phase() == Phase::Finished {
            break;
        }
    }

    for (trial, time) in game.times().iter().enumerate() {
        println!("{:>3}  {}", trial + 1, format_elapsed(*time));
    }

    Ok(())
}

fn print_walkthrough(walkthrough: &SwapWalkthrough) {
    println!("{}", walkthrough);
    for trail in walkthrough.trails() {
        let steps = trail.cards.iter()
            .zip(trail.locations.iter())
            .map(|(card, location)| format!("{} ({}, {})", card, location.0, location.1))
            .collect::<Vec<_>>();
        println!("{} trail: {}", trail.temperature, steps.join(" -> "));
    }
    if let Some(swap) = walkthrough.next_swap() {
        println!("next: swap positions {} and {}", swap.0 + 1, swap.1 + 1);
    }
}

fn swap(patterns: PatternSet, mut rng: SmallRng) -> Result<()> {
    let mut walkthrough = SwapWalkthrough::random(&mut rng, &patterns).context("failed to solve the random layout")?;
    print_walkthrough(&walkthrough);
    println!("{}", walkthrough.status());

    for line in io::stdin().lock().lines() {
        match line.context("failed to read input")?.trim() {
            "q" => break,
            "r" => {
                walkthrough.reset(&mut rng, &patterns).context("failed to solve the random layout")?;
                print_walkthrough(&walkthrough);
                println!("{}", walkthrough.status());
                continue;
            }
            "b" => walkthrough.rewind(),
            _ => {
                if !walkthrough.step_forward() {
                    println!("done; r for a new puzzle, q to quit");
                    continue;
                }
            }
        }
        print_walkthrough(&walkthrough);
        if walkthrough.is_finished() {
            println!("{}", walkthrough.status());
        }
    }

    Ok(())
}

fn summarise(patterns: &PatternSet) {
    println!("{} valid patterns", patterns.len());
    for (warm_total, count) in patterns.warm_histogram() {
        println!("  {} warm: {}", warm_total, count);
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play { patterns, trials, seed } => {
            if trials == 0 {
                bail!("a session needs at least one trial");
            }
            play(load_patterns(patterns.as_deref())?, GameConfig { trials }, rng(seed))
        }
        Command::Swap { patterns, seed } => swap(load_patterns(patterns.as_deref())?, rng(seed)),
        Command::Patterns { patterns, export } => {
            match export {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
                    write_csv(Pattern::all(), file).context("failed to write the pattern table")?;
                    println!("wrote 512 patterns to {}", path.display());
                }
                None => summarise(&load_patterns(patterns.as_deref())?),
            }
            Ok(())
        }
    }
}
