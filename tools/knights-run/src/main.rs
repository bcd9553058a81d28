//! Runs the knight-move link automaton without a display.
//!
//! Run from repo root:
//!   `cargo run -p knights-run`                          - one run on a 6x6 board
//!   `cargo run -p knights-run -- --size 8 --runs 10`    - ten runs on 8x8
//!   `cargo run -p knights-run -- --seed 42 --json`      - print the final board as JSON
//!
//! Set `RUST_LOG=knights_automata=debug` to see every reset.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use knights_automata::{NeighbourRule, RunConfig, RunOutcome};
use tracing_subscriber::{EnvFilter, fmt};

/// Step the automaton until it settles, re-seeding on every repeating pattern.
#[derive(Parser)]
#[command(name = "knights-run")]
struct Args {
    /// Board size N.
    #[arg(long, default_value_t = 6)]
    size: usize,

    /// Seed for the random source (default: seed from the OS).
    #[arg(long)]
    seed: Option<u64>,

    /// Step limit per run.
    #[arg(long, default_value_t = 10_000)]
    max_steps: u64,

    /// Number of runs; each continues from where the previous one stopped.
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Which links count towards a neighbour sum.
    #[arg(long, value_enum, default_value_t = Rule::ExcludeSelf)]
    rule: Rule,

    /// Print the final board as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    ExcludeSelf,
    SelfAtBothEnds,
}

impl From<Rule> for NeighbourRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::ExcludeSelf => NeighbourRule::ExcludeSelf,
            Rule::SelfAtBothEnds => NeighbourRule::SelfAtBothEnds,
        }
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("knights_run=info,knights_automata=warn")),
        )
        .init();

    let args = Args::parse();
    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }

    let mut config = RunConfig::new(args.size);
    config.seed = args.seed;
    config.board.rule = args.rule.into();

    let mut runner = config.apply().context("failed to build board")?;
    tracing::info!(
        size = args.size,
        links = runner.board().links().len(),
        "board ready"
    );

    let mut settled = 0u32;
    for run in 1..=args.runs {
        if run > 1 {
            runner.restart();
        }

        let report = runner.run_until_settled(args.max_steps);
        match report.outcome {
            RunOutcome::Stable { steps } => {
                settled += 1;
                println!(
                    "run {run}: settled after ~{steps} updates ({} patterns, {} steps total)",
                    report.patterns, report.total_steps
                );
            }
            RunOutcome::Exhausted => println!(
                "run {run}: no fixed point within {} steps ({} patterns)",
                report.total_steps, report.patterns
            ),
        }
    }

    println!("{settled}/{} runs settled", args.runs);

    if args.json {
        let snapshot = runner.board().snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
