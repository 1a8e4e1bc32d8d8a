//! Solves the two-circle demo problems and prints the candidate boxes.
//!
//! ```text
//! braid --scenario intersecting --eps 1e-4
//! braid --scenario tangent --overflow grow --max-digits 6
//! braid --scenario none -v
//! ```
//!
//! Logs go to stderr. `RUST_LOG` takes precedence over `-v`.

mod cli;
mod scenario;

use std::error::Error;

use braid_core::Observer;
use braid_observers::{Stats, TraceObserver};
use braid_solvers::branch_and_prune::{Action, Event, solve};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config()?;
    let precision = cli.precision()?;
    let constraints = cli.scenario.constraints();
    let initial = cli.scenario.initial_box()?;

    println!("Initial box: {}", initial.display(precision));

    let mut stats = Stats::default();
    let mut trace = TraceObserver::new();
    let observer = |event: &Event<'_>| -> Option<Action> {
        Observer::<Event<'_>, Action>::observe(&mut stats, event);
        trace.observe(event)
    };

    info!(scenario = ?cli.scenario, eps = config.eps(), "solving");
    let solution = solve(&constraints, initial, &config, observer)?;

    println!("{}", solution.report(precision));
    println!(
        "Pruned {}, accepted {}, bisected {}",
        stats.pruned, stats.accepted, stats.bisected
    );
    println!("Found = {}", solution.found());

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
