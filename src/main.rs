use std::io::Write;

use sgd_regression::{logging, opts, Regression};

fn main() -> sgd_regression::Result {
    let opts = opts::parse();
    logging::init()?;

    let training = opts.training;
    let mut regression = match training.seed {
        Some(seed) => Regression::with_seed(training.epochs, training.learning_rate, seed),
        None => Regression::new(training.epochs, training.learning_rate),
    };
    regression.load_training_data(&opts.data);
    if regression.is_empty() {
        tracing::warn!(path = %opts.data.display(), "no training pairs, predicting zeros");
    }
    regression.train();

    let sweep = opts.sweep;
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if opts.print_training_set {
        regression.predict_all(sweep.threshold, &mut stdout)?;
    }
    regression.predict_range(sweep.start, sweep.end, sweep.step, sweep.threshold, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
