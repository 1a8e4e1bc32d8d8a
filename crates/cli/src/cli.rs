//! Command-line arguments.

use braid_interval::fmt::{Precision, PrecisionError};
use braid_solvers::branch_and_prune::{Config, ConfigError, Order, Overflow, Pruning};
use clap::Parser;

use crate::scenario::Scenario;

/// Braid - find the solutions of a two-circle problem by interval
/// branch-and-prune.
#[derive(Debug, Parser)]
#[command(name = "braid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Problem to solve
    #[arg(short, long, value_enum, default_value_t = Scenario::Intersecting)]
    pub scenario: Scenario,

    /// Width below which a box is accepted as a candidate
    #[arg(long, default_value_t = 1e-4)]
    pub eps: f64,

    /// Number of candidates to keep
    #[arg(long, default_value_t = 1000)]
    pub capacity: usize,

    /// What to do once the candidate list is full
    #[arg(long, value_enum, default_value_t = OverflowArg::Stop)]
    pub overflow: OverflowArg,

    /// Which half of a bisected box to explore first
    #[arg(long, value_enum, default_value_t = OrderArg::Lower)]
    pub order: OrderArg,

    /// Narrow boxes with the constraints before bisecting
    #[arg(long)]
    pub contract: bool,

    /// Stop after visiting this many boxes
    #[arg(long)]
    pub max_branchings: Option<usize>,

    /// Minimum number of fractional digits printed per bound
    #[arg(long, default_value_t = 2)]
    pub min_digits: usize,

    /// Maximum number of fractional digits printed per bound
    #[arg(long, default_value_t = 4)]
    pub max_digits: usize,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Overflow policy options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OverflowArg {
    /// Stop the search
    Stop,
    /// Keep recording candidates
    Grow,
}

/// Exploration order options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderArg {
    /// Lower half first
    Lower,
    /// Upper half first
    Upper,
}

impl From<OverflowArg> for Overflow {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Stop => Overflow::Stop,
            OverflowArg::Grow => Overflow::Grow,
        }
    }
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Lower => Order::LowerFirst,
            OrderArg::Upper => Order::UpperFirst,
        }
    }
}

impl Cli {
    /// Builds the solver config from the arguments.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let pruning = if self.contract {
            Pruning::Contract
        } else {
            Pruning::Evaluate
        };
        let config = Config::new(self.eps)?
            .with_capacity(self.capacity)?
            .with_overflow(self.overflow.into())
            .with_order(self.order.into())
            .with_pruning(pruning);

        Ok(match self.max_branchings {
            Some(n) => config.with_max_branchings(n),
            None => config,
        })
    }

    /// Builds the display precision from the arguments.
    pub fn precision(&self) -> Result<Precision, PrecisionError> {
        Precision::new(self.min_digits, self.max_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("braid").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.scenario, Scenario::Intersecting);
        assert_eq!(cli.verbose, 0);

        let config = cli.config().unwrap();
        assert_eq!(config, Config::new(1e-4).unwrap());
        assert_eq!(cli.precision().unwrap(), Precision::default());
    }

    #[test]
    fn all_flags() {
        let cli = parse(&[
            "--scenario",
            "tangent",
            "--eps",
            "0.001",
            "--capacity",
            "20",
            "--overflow",
            "grow",
            "--order",
            "upper",
            "--contract",
            "--max-branchings",
            "500",
            "--min-digits",
            "1",
            "--max-digits",
            "6",
            "-vv",
        ]);
        assert_eq!(cli.scenario, Scenario::Tangent);
        assert_eq!(cli.verbose, 2);

        let config = cli.config().unwrap();
        assert_eq!(config.eps(), 0.001);
        assert_eq!(config.capacity(), 20);
        assert_eq!(config.overflow(), Overflow::Grow);
        assert_eq!(config.order(), Order::UpperFirst);
        assert_eq!(config.pruning(), Pruning::Contract);
        assert_eq!(config.max_branchings(), Some(500));
        assert_eq!(cli.precision().unwrap(), Precision::new(1, 6).unwrap());
    }

    #[test]
    fn no_solution_scenario_is_named_none() {
        assert_eq!(parse(&["-s", "none"]).scenario, Scenario::NoSolution);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(parse(&["--eps=-1"]).config(), Err(ConfigError::Eps));
        assert_eq!(parse(&["--capacity", "0"]).config(), Err(ConfigError::Capacity));
        assert!(parse(&["--min-digits", "5"]).precision().is_err());
        assert!(Cli::try_parse_from(["braid", "--order", "sideways"]).is_err());
    }
}
