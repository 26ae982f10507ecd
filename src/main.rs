use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ulam::io::RunScript;
use ulam::{classify, engine, query, render, Automaton, Generation, RULE_MAJORITY, RULE_TRAFFIC};

#[derive(Parser, Debug)]
#[command(name = "ulam", about = "Elementary cellular automaton engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full three-stage pipeline from a run script (file or stdin).
    Run {
        /// Run script path; reads stdin when omitted.
        script: Option<PathBuf>,
    },
    /// Evolve a cell row and print every generation.
    Evolve {
        /// Rule code (0-255).
        #[arg(long)]
        rule: u8,
        /// Number of time steps to evolve.
        #[arg(long)]
        steps: usize,
        /// Initial cell row ('*' = on, '.' = off).
        cells: String,
    },
    /// Classify the on/off density of a cell row via rules 184 and 232.
    Classify {
        /// Initial cell row ('*' = on, '.' = off).
        cells: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run { script } => {
            let script = read_script(script.as_deref())?;
            run_pipeline(&script, &mut out)?;
        }
        Commands::Evolve { rule, steps, cells } => run_evolve(rule, steps, &cells, &mut out)?,
        Commands::Classify { cells } => run_classify(&cells, &mut out)?,
    }

    Ok(())
}

fn read_script(path: Option<&std::path::Path>) -> Result<RunScript> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path)
                .with_context(|| format!("failed to open run script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(std::io::stdin())),
    };
    ulam::io::read_script(reader).context("failed to parse run script")
}

/// Execute a full run script, stage by stage, writing the report to `out`.
fn run_pipeline<W: Write>(script: &RunScript, out: &mut W) -> Result<()> {
    info!(
        size = script.config.size,
        rule = script.config.code,
        steps = script.time_steps,
        "starting pipeline"
    );
    let mut ca = Automaton::new(script.config.initial.clone(), script.config.code)?;

    // Stage 0: configuration echo and decoded rule table
    writeln!(out, "{}", render::stage_banner(0))?;
    writeln!(out, "SIZE: {}", script.config.size)?;
    writeln!(out, "RULE: {}", script.config.code)?;
    writeln!(out, "{}", render::MIDLINE)?;
    writeln!(out, "{}", render::neighborhood_header())?;
    writeln!(out, "{}", render::rule_outcome_line(ca.rule()))?;
    writeln!(out, "{}", render::MIDLINE)?;
    writeln!(out, "{}", render::generation_line(0, &ca.current()))?;

    // Stage 1: first run plus its tally query
    writeln!(out, "{}", render::stage_banner(1))?;
    stream_run(&mut ca, script.time_steps, out)?;
    writeln!(out, "{}", render::MIDLINE)?;
    let q = script.stage_one_query;
    let tally = query::tally(&ca.history().borrow(), q.cell, q.start_time)?;
    writeln!(out, "{}", render::tally_line(&tally))?;

    // Stage 2: density classification phases, second query, and verdict
    let decision_time = ca.time();
    let (traffic_steps, majority_steps) = classify::phase_steps(ca.size());
    writeln!(out, "{}", render::stage_banner(2))?;
    writeln!(out, "{}", render::phase_banner(RULE_TRAFFIC, traffic_steps))?;
    writeln!(out, "{}", render::MIDLINE)?;
    let mut traffic = ca.continue_with(RULE_TRAFFIC);
    stream_run(&mut traffic, decision_time + traffic_steps, out)?;
    writeln!(out, "{}", render::MIDLINE)?;
    writeln!(out, "{}", render::phase_banner(RULE_MAJORITY, majority_steps))?;
    writeln!(out, "{}", render::MIDLINE)?;
    let mut majority = traffic.continue_with(RULE_MAJORITY);
    stream_run(&mut majority, traffic.time() + majority_steps, out)?;

    writeln!(out, "{}", render::MIDLINE)?;
    let q = script.stage_two_query;
    let tally = query::tally(&ca.history().borrow(), q.cell, q.start_time)?;
    writeln!(out, "{}", render::tally_line(&tally))?;
    writeln!(out, "{}", render::MIDLINE)?;

    writeln!(out, "{}", render::generation_line(decision_time, &ca.current()))?;
    let verdict = query::majority_at(&ca.history().borrow(), decision_time)?;
    writeln!(out, "{}", render::majority_line(decision_time, verdict))?;
    writeln!(out, "{}", render::FOOTER)?;

    Ok(())
}

/// Print the current generation, then evolve to `target_time` printing
/// each generation as it is produced.
fn stream_run<W: Write>(ca: &mut Automaton, target_time: usize, out: &mut W) -> Result<()> {
    writeln!(out, "{}", render::generation_line(ca.time(), &ca.current()))?;
    while ca.time() < target_time {
        let generation = engine::step(ca)?;
        writeln!(out, "{}", render::generation_line(ca.time(), &generation))?;
    }
    Ok(())
}

fn run_evolve<W: Write>(rule: u8, steps: usize, cells: &str, out: &mut W) -> Result<()> {
    let initial = Generation::from_symbols(cells)?;
    let mut ca = Automaton::new(initial, rule)?;
    stream_run(&mut ca, steps, out)?;
    Ok(())
}

fn run_classify<W: Write>(cells: &str, out: &mut W) -> Result<()> {
    let initial = Generation::from_symbols(cells)?;
    let ca = Automaton::new(initial, RULE_TRAFFIC)?;
    let outcome = classify::classify_density(&ca)?;

    writeln!(
        out,
        "{}",
        render::generation_line(outcome.settled.time(), &outcome.settled.current())
    )?;
    writeln!(
        out,
        "{}",
        render::majority_line(outcome.decision_time, outcome.verdict)
    )?;
    Ok(())
}
