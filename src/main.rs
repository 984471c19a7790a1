use clap::Parser;
use eyre::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use teamsolver::algos::{Solver, sample};
use teamsolver::config::Config;
use teamsolver::errors::SolverError;
use teamsolver::model::Limits;
use teamsolver::{checks, display, loaders, stats};
use tracing::Level;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Use FILE instead of teamsolver.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read interests from FILE (.toml or .csv)
    #[arg(short, long, value_name = "FILE", conflicts_with = "database")]
    input: Option<PathBuf>,
    /// Read interests from the database at URL
    #[arg(long, value_name = "URL")]
    database: Option<String>,
    /// Maximum number of non-lead members per project
    #[arg(long, value_name = "N")]
    max_members: Option<usize>,
    /// Maximum number of projects per person
    #[arg(long, value_name = "N")]
    max_projects: Option<usize>,
    /// Number of assignments to display
    #[arg(short = 'k', long, value_name = "N")]
    samples: Option<usize>,
    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn apply_overrides(config: &mut Config, args: Args) {
    if let Some(path) = args.input {
        config.input.use_file(path);
    }
    if let Some(url) = args.database {
        config.input.use_database(url);
    }
    if let Some(n) = args.max_members {
        config.solver.max_members_per_project = n;
    }
    if let Some(n) = args.max_projects {
        config.solver.max_projects_per_person = n;
    }
    if let Some(n) = args.samples {
        config.solver.samples = n;
    }
    if args.seed.is_some() {
        config.solver.seed = args.seed;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
    let mut config = Config::load_or_default(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    let problem = loaders::load(&config.input).await?;
    checks::ensure_consistent(&problem)?;
    // Reject invalid caps before searching.
    let limits = Limits::new(
        config.solver.max_members_per_project,
        config.solver.max_projects_per_person,
    )?;

    let mut solver = Solver::new(limits).with_max_candidates(config.solver.max_candidates);
    let outcome = solver.solve(&problem)?;
    display::display_summary(&outcome);

    let mut rng = match config.solver.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let sampled = match sample(&outcome.feasible, config.solver.samples, &mut rng) {
        Ok(sampled) => sampled,
        Err(e @ SolverError::InsufficientResults { .. }) => {
            display::display_shortage(&outcome);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    display::display_assignments(&sampled);
    display::display_stats(&stats::statistics(&sampled, &problem.members));
    Ok(())
}
