//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod parsers;

/// Trains a single-feature linear regression on pairs extracted from a text file
/// and prints the predictions over a range of inputs.
#[derive(Parser)]
#[clap(version, about, rename_all = "kebab-case")]
pub struct Opts {
    /// Text file with one «input output» pair per line
    #[clap(short, long, default_value = "data.txt", env = "SGD_REGRESSION_DATA")]
    pub data: PathBuf,

    #[clap(flatten)]
    pub training: TrainingOpts,

    #[clap(flatten)]
    pub sweep: SweepOpts,

    /// Also print the predictions for every input of the training set
    #[clap(long)]
    pub print_training_set: bool,
}

#[derive(Args, Clone, Copy)]
pub struct TrainingOpts {
    /// Number of training epochs
    #[clap(
        short,
        long,
        default_value = "1000",
        env = "SGD_REGRESSION_EPOCHS",
        value_parser = parsers::non_zero_usize,
    )]
    pub epochs: usize,

    /// Learning rate
    #[clap(
        short,
        long,
        default_value = "0.01",
        env = "SGD_REGRESSION_LEARNING_RATE",
        value_parser = parsers::positive_f64,
    )]
    pub learning_rate: f64,

    /// Seed for the training set shuffling, random if omitted
    #[clap(long, env = "SGD_REGRESSION_SEED")]
    pub seed: Option<u64>,
}

/// Range of inputs to predict the outputs for.
#[derive(Args, Clone, Copy)]
pub struct SweepOpts {
    /// First input
    #[clap(long, default_value = "-10", allow_hyphen_values = true, value_parser = parsers::finite_f64)]
    pub start: f64,

    /// Last input (inclusive)
    #[clap(long, default_value = "10", allow_hyphen_values = true, value_parser = parsers::finite_f64)]
    pub end: f64,

    /// Input increment
    #[clap(long, default_value = "0.5", value_parser = parsers::positive_f64)]
    pub step: f64,

    /// Predictions closer to zero than this are printed as zero
    #[clap(long, default_value = "0.001", value_parser = parsers::non_negative_f64)]
    pub threshold: f64,
}

pub fn parse() -> Opts {
    Opts::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_ok() {
        Opts::command().debug_assert();
    }

    #[test]
    fn defaults_ok() -> crate::Result {
        let opts = Opts::try_parse_from(["sgd-regression"])?;
        assert_eq!(opts.data, PathBuf::from("data.txt"));
        assert_eq!(opts.training.epochs, 1000);
        assert_eq!(opts.training.learning_rate, 0.01);
        assert_eq!(opts.training.seed, None);
        assert_eq!(opts.sweep.start, -10.0);
        assert_eq!(opts.sweep.end, 10.0);
        assert_eq!(opts.sweep.step, 0.5);
        assert_eq!(opts.sweep.threshold, 0.001);
        assert!(!opts.print_training_set);
        Ok(())
    }

    #[test]
    fn negative_start_ok() -> crate::Result {
        let opts = Opts::try_parse_from(["sgd-regression", "--start", "-2.5", "--end", "-1"])?;
        assert_eq!(opts.sweep.start, -2.5);
        assert_eq!(opts.sweep.end, -1.0);
        Ok(())
    }

    #[test]
    fn zero_step_rejected_ok() {
        assert!(Opts::try_parse_from(["sgd-regression", "--step", "0"]).is_err());
    }

    #[test]
    fn zero_epochs_rejected_ok() {
        assert!(Opts::try_parse_from(["sgd-regression", "--epochs", "0"]).is_err());
    }
}
