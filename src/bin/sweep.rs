//! Run the three scenarios for every submission in a CSV file
//!
//! Input columns: `id,capital,monthly,years,rate`
//! Output columns: `id,scenario,rate,invested,value,performance`

use anyhow::{Context, Result};
use clap::Parser;
use growth_projection::input::load_inputs;
use growth_projection::report::write_summaries_csv;
use growth_projection::{ScenarioRunner, ScenarioSet};
use rayon::prelude::*;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "sweep", about = "Batch scenario projections from a CSV of submissions")]
struct Cli {
    #[arg(long, help = "CSV of submissions")]
    input: PathBuf,
    #[arg(long, help = "Summary CSV to write; stdout when omitted")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let submissions = load_inputs(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    eprintln!("Loaded {} submissions in {:?}", submissions.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let proj_start = Instant::now();

    // Submissions are independent; each one still runs its scenarios in order
    let results: Vec<(String, ScenarioSet)> = submissions
        .par_iter()
        .map(|submission| (submission.id.clone(), runner.run(&submission.input)))
        .collect();

    eprintln!("Projections complete in {:?}", proj_start.elapsed());

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_summaries_csv(file, &results)?;
            eprintln!("Output written to {}", path.display());
        }
        None => write_summaries_csv(io::stdout().lock(), &results)?,
    }

    eprintln!("Total time: {:?}", start.elapsed());
    Ok(())
}
