//! Human-readable predictions.

use std::io::Write;
use std::iter::successors;

use crate::prelude::*;

pub const SEPARATOR: &str =
    "----------------------------------------------------------------------------";

/// Replaces the prediction with zero if it is strictly closer to zero than the threshold.
///
/// Hides the floating-point noise like `1e-17` that the training leaves on zero outputs.
#[must_use]
pub fn suppress_noise(prediction: f64, threshold: f64) -> f64 {
    if prediction > -threshold && prediction < threshold {
        0.0
    } else {
        prediction
    }
}

/// Yields `start`, `start + step`, `start + 2 × step`… while not exceeding `end`.
///
/// The values are accumulated, so the rounding errors add up.
/// A non-positive `step` never ends unless `start > end`.
pub fn sweep(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    successors(Some(start), move |input| Some(input + step)).take_while(move |input| *input <= end)
}

/// Writes the `(input, prediction)` pairs enclosed in separators, with a blank line between
/// the consecutive pairs.
pub fn write_predictions<W, P>(sink: &mut W, predictions: P, threshold: f64) -> Result
where
    W: Write + ?Sized,
    P: IntoIterator<Item = (f64, f64)>,
{
    writeln!(sink, "{}", SEPARATOR)?;
    for (i, (input, prediction)) in predictions.into_iter().enumerate() {
        if i != 0 {
            writeln!(sink)?;
        }
        writeln!(sink, "Input: {}", input)?;
        writeln!(sink, "Output: {}", suppress_noise(prediction, threshold))?;
    }
    writeln!(sink, "{}\n", SEPARATOR)?;
    Ok(())
}
