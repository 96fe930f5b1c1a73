use anyhow::Result;
use clap::Parser;
use date_case_ga::{
    Service,
    analysis::CoverageReport,
    export,
    models::{FormattedDate, Mutagen, Schedule},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tracing::Level;

/// Evolve a category-balanced set of calendar-date test cases.
#[derive(Debug, Parser)]
#[command(name = "datecases", version, about, long_about = None)]
struct Cli {
    /// Seed for the random stream; drawn from the OS when omitted
    #[arg(long, env = "DATECASES_SEED")]
    seed: Option<u64>,

    /// Candidates per generation
    #[arg(long, env = "DATECASES_POPULATION_SIZE", default_value_t = 100)]
    population_size: usize,

    /// Number of evolution cycles
    #[arg(long, env = "DATECASES_CYCLES", default_value_t = 100)]
    cycles: usize,

    /// Per-field mutation probability
    #[arg(long, env = "DATECASES_MUTATION_RATE", default_value_t = 0.15)]
    mutation_rate: f64,

    /// CSV file the test cases are written to
    #[arg(short, long, env = "DATECASES_OUTPUT", default_value = "date_test_cases.csv")]
    output: PathBuf,

    /// Valid and invalid rows to report and export
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Print the whole outcome as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn join(dates: &[FormattedDate], limit: usize) -> String {
    dates
        .iter()
        .take(limit)
        .map(FormattedDate::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report(outcome: &date_case_ga::EvolutionOutcome, report: &CoverageReport, limit: usize) {
    println!("Best Test Dates:");
    println!("Valid: {}", join(&outcome.valid, limit));
    println!("Invalid: {}", join(&outcome.invalid, limit));
    println!("Boundary: {}", join(&outcome.edge_cases, outcome.edge_cases.len()));
    println!("Evolution Cycles Completed: {}", outcome.generations());

    println!("\nTest Coverage Analysis:");
    println!("{}", "-".repeat(45));
    println!("{:<15} {:<10} {:<10}", "Category", "Count", "Percentage");
    println!("{}", "-".repeat(45));
    for row in &report.categories {
        println!("{:<15} {:<10} {:.2}%", row.category, row.count, row.percentage);
    }
    println!("{}", "-".repeat(45));
    println!("Total: {} test dates", report.total);

    println!("\nCoverage History:");
    for (cycle, discovered) in outcome.coverage_history.iter().enumerate() {
        println!("{cycle:>4} {discovered}");
    }
}

fn main() -> Result<()> {
    dotenv::from_filename(".env.local").ok();
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, "Seeding random stream");
    let mut rng = StdRng::seed_from_u64(seed);

    let service = Service::builder()
        .with_schedule(Schedule::generational(cli.cycles, cli.population_size)?)
        .with_mutagen(Mutagen::constant(cli.mutation_rate)?)
        .build();

    let outcome = service.run(&mut rng)?;
    let report = CoverageReport::from_dates(service.oracle(), outcome.all_dates());

    if cli.json {
        let body = serde_json::json!({
            "seed": seed,
            "outcome": &outcome,
            "coverage": &report,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_report(&outcome, &report, cli.limit);
    }

    export::save_test_cases(&cli.output, service.oracle(), &outcome, cli.limit)?;

    Ok(())
}
