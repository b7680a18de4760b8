//! Growth Projection CLI
//!
//! Runs the three-scenario simulation and the FAQ assistant from the terminal

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use growth_projection::assistant::{ChatSession, Speaker};
use growth_projection::report::{write_points_csv, Dashboard};
use growth_projection::{FaqBase, SimulationForm};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "growth_projection",
    about = "Compound-growth projections under pessimistic / median / optimistic rates"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project capital plus monthly contributions under three rate scenarios
    Simulate {
        #[arg(long, help = "Initial capital in euros")]
        capital: Option<String>,
        #[arg(long, help = "Monthly contribution in euros")]
        monthly: Option<String>,
        #[arg(long, help = "Duration in whole years")]
        years: Option<String>,
        #[arg(long, help = "Median annual rate in percent, e.g. 6")]
        rate: Option<String>,
        #[arg(long, help = "Write month-by-month values to this CSV file")]
        csv: Option<PathBuf>,
        #[arg(long, help = "Write chart series to this JSON file")]
        chart_json: Option<PathBuf>,
    },
    /// Ask the assistant a single question
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// List the FAQ topics
    Faq,
    /// Interactive chat; `/topic <label>` selects a topic tag
    Chat,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            capital,
            monthly,
            years,
            rate,
            csv,
            chart_json,
        } => {
            let form = SimulationForm::new(
                capital.unwrap_or_default(),
                monthly.unwrap_or_default(),
                years.unwrap_or_default(),
                rate.unwrap_or_default(),
            );
            simulate(&form, csv, chart_json)
        }
        Command::Ask { question } => {
            let faq = FaqBase::default();
            let reply = faq.answer(&question.join(" "));
            println!("{}", reply.text);
            Ok(())
        }
        Command::Faq => {
            for label in FaqBase::default().labels() {
                println!("{label}");
            }
            Ok(())
        }
        Command::Chat => chat(),
    }
}

fn simulate(form: &SimulationForm, csv: Option<PathBuf>, chart_json: Option<PathBuf>) -> Result<()> {
    let mut dashboard = Dashboard::new();
    dashboard.submit(form).context("Simulation not run")?;
    let Some(rendered) = dashboard.current() else {
        bail!("No simulation result");
    };

    let input = rendered.scenarios.input;
    println!("Growth Projection");
    println!("=================\n");
    println!("  Capital:  {:.2}", input.initial_capital);
    println!("  Monthly:  {:.2}", input.monthly_contribution);
    println!("  Years:    {}", input.duration_years);
    println!("  Rate:     {}%", input.annual_rate_percent);
    println!();

    println!("{:<12} {:>8} {:>18} {:>18} {:>18}", "Scenario", "Rate", "Invested", "Value", "Performance");
    println!("{}", "-".repeat(78));
    for summary in &rendered.summaries {
        println!(
            "{:<12} {:>7}% {:>18} {:>18} {:>18}",
            summary.scenario.label(),
            rendered.scenarios.rate(summary.scenario),
            summary.invested,
            summary.value,
            summary.performance,
        );
    }

    if let Some(path) = csv {
        let file = File::create(&path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_points_csv(file, &rendered.scenarios)?;
        println!("\nMonthly values written to: {}", path.display());
    }

    if let Some(path) = chart_json {
        std::fs::write(&path, rendered.chart.to_json()?)
            .with_context(|| format!("Unable to write {}", path.display()))?;
        println!("Chart series written to: {}", path.display());
    }

    Ok(())
}

fn chat() -> Result<()> {
    let mut session = ChatSession::new(FaqBase::default());
    let topics: Vec<String> = session.faq().labels().map(str::to_string).collect();
    println!("Topics: {}", topics.join(" | "));
    println!("Type a question, `/topic <label>`, or an empty line to quit.");

    let stdin = io::stdin();
    let mut shown = 0;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            break;
        }

        let now = Instant::now();
        let accepted = match line.trim().strip_prefix("/topic ") {
            Some(label) => session.select_topic(label.trim(), now),
            None => session.ask(&line, now),
        };
        if !accepted {
            println!("(unknown topic)");
            continue;
        }

        while let Some(due) = session.next_due() {
            std::thread::sleep(due.saturating_duration_since(Instant::now()));
            session.deliver_due(Instant::now());
        }

        for bubble in &session.log()[shown..] {
            let who = match bubble.from {
                Speaker::User => "vous",
                Speaker::Bot => "bot",
            };
            println!("[{who}] {}", bubble.text);
        }
        shown = session.log().len();
        io::stdout().flush()?;
    }

    Ok(())
}
