//! Trains a single-feature linear model with the stochastic gradient descent.
//!
//! Every epoch reshuffles the visiting order of the training pairs and makes one
//! gradient step per pair. There's no batching, no momentum and no convergence check:
//! a training run always makes exactly `epochs × pairs` steps.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use self::error::ResidualError;
use self::extract::extract_pair;
use self::parameters::Parameters;
use self::training_set::TrainingSet;
use crate::logging::format_elapsed;
use crate::prelude::*;

mod error;
pub mod extract;
mod parameters;
pub mod report;
mod training_set;

/// Predictions closer to zero than this are printed as zero.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Default input increment for [`Regression::predict_range`].
pub const DEFAULT_STEP: f64 = 1.0;

/// Linear model `y = weight × x + bias` along with its training data.
///
/// The model is not clonable. [`Regression::take`] moves it out of a mutable reference,
/// resetting the source.
pub struct Regression {
    parameters: Parameters,
    learning_rate: f64,
    n_epochs: usize,
    training_set: TrainingSet,

    /// Shuffles the training set before every epoch.
    rng: StdRng,
}

impl Default for Regression {
    /// Creates an unconfigured model: training is a no-op until the epochs
    /// and the learning rate are set.
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Regression {
    /// Creates a model with an entropy-seeded shuffling.
    ///
    /// Invalid hyperparameters are ignored, just like with the setters.
    #[must_use]
    pub fn new(n_epochs: usize, learning_rate: f64) -> Self {
        let mut this = Self::default();
        this.set_epochs(n_epochs);
        this.set_learning_rate(learning_rate);
        this
    }

    /// Creates a model with a reproducible shuffling.
    #[must_use]
    pub fn with_seed(n_epochs: usize, learning_rate: f64, seed: u64) -> Self {
        let mut this = Self::new(n_epochs, learning_rate);
        this.reseed(seed);
        this
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            parameters: Parameters::default(),
            learning_rate: 0.0,
            n_epochs: 0,
            training_set: TrainingSet::default(),
            rng,
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Moves the model out, leaving an unconfigured and empty one in its place.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.parameters.weight
    }

    #[must_use]
    pub fn bias(&self) -> f64 {
        self.parameters.bias
    }

    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    #[must_use]
    pub fn epochs(&self) -> usize {
        self.n_epochs
    }

    /// Sets the number of epochs, zero is ignored.
    pub fn set_epochs(&mut self, n_epochs: usize) {
        if n_epochs > 0 {
            self.n_epochs = n_epochs;
        }
    }

    /// Sets the learning rate, non-positive values (and `NaN`) are ignored.
    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        if learning_rate > 0.0 {
            self.learning_rate = learning_rate;
        }
    }

    /// Number of the training pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.training_set.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.training_set.is_empty()
    }

    /// Training pairs in the order they were added.
    pub fn training_pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.training_set.iter()
    }

    /// Visiting order of the last epoch, as indices into [`Regression::training_pairs`].
    #[must_use]
    pub fn training_order(&self) -> &[usize] {
        self.training_set.order()
    }

    /// Appends a training pair if the line contains exactly two numbers.
    pub fn extract(&mut self, line: &str) -> bool {
        match extract_pair(line) {
            Some((input, output)) => {
                self.training_set.push(input, output);
                true
            }
            None => false,
        }
    }

    /// Extracts the training pairs from the file, line by line.
    ///
    /// Failures are logged, and the pairs extracted so far are kept.
    /// Returns the number of the added pairs.
    pub fn load_training_data(&mut self, path: impl AsRef<Path>) -> usize {
        let n_pairs_before = self.len();
        if let Err(error) = self.try_load_training_data(path) {
            tracing::error!("{:#}", error);
        }
        self.len() - n_pairs_before
    }

    /// Same as [`Regression::load_training_data`], but returns the I/O error instead of logging.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn try_load_training_data(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("could not open the file at path `{}`", path.display()))?;

        let n_pairs_before = self.len();
        let mut n_lines = 0_usize;
        for line in BufReader::new(file).split(b'\n') {
            let line = line.with_context(|| format!("failed to read `{}`", path.display()))?;
            self.extract(&String::from_utf8_lossy(&line));
            n_lines += 1;
        }

        let n_pairs = self.len() - n_pairs_before;
        tracing::info!(n_lines, n_pairs, "loaded");
        Ok(n_pairs)
    }

    /// Replaces the training set with the zipped inputs and outputs.
    /// The longer slice gets truncated.
    pub fn set_training_data(&mut self, inputs: &[f64], outputs: &[f64]) {
        if inputs.len() != outputs.len() {
            tracing::debug!(
                n_inputs = inputs.len(),
                n_outputs = outputs.len(),
                "truncating the training data",
            );
        }
        self.training_set.replace(inputs, outputs);
    }

    #[tracing::instrument(skip_all, fields(n_epochs = self.n_epochs, n_pairs = self.len()))]
    pub fn train(&mut self) {
        let start_instant = Instant::now();
        let mut error = ResidualError::default();

        for epoch in 1..=self.n_epochs {
            self.training_set.shuffle(&mut self.rng);
            error = ResidualError::default();
            for (input, output) in self.training_set.iter_ordered() {
                error.push(self.parameters.sgd_step(input, output, self.learning_rate));
            }
            tracing::trace!(
                epoch,
                rmse = error.rmse(),
                weight = self.parameters.weight,
                bias = self.parameters.bias,
            );
        }

        tracing::info!(
            weight = self.parameters.weight,
            bias = self.parameters.bias,
            rmse = error.rmse(),
            elapsed = format_elapsed(start_instant).as_str(),
            "trained",
        );
    }

    #[must_use]
    pub fn predict(&self, input: f64) -> f64 {
        self.parameters.predict(input)
    }

    /// Writes the predictions for every training input, in the order the pairs were added.
    pub fn predict_all<W: Write + ?Sized>(&self, threshold: f64, sink: &mut W) -> Result {
        let predictions = self
            .training_set
            .inputs()
            .iter()
            .map(|&input| (input, self.predict(input)));
        report::write_predictions(sink, predictions, threshold)
    }

    /// Writes the predictions for the inputs from `start` up to `end` inclusive.
    ///
    /// The caller must ensure `step > 0`, otherwise this never ends for `start <= end`.
    pub fn predict_range<W: Write + ?Sized>(
        &self,
        start: f64,
        end: f64,
        step: f64,
        threshold: f64,
        sink: &mut W,
    ) -> Result {
        let predictions = report::sweep(start, end, step).map(|input| (input, self.predict(input)));
        report::write_predictions(sink, predictions, threshold)
    }
}
