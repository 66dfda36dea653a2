use std::time::Instant;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Initialises tracing.
///
/// Events go to stderr, leaving stdout to the predictions.
pub fn init() -> Result {
    let format_filter = EnvFilter::try_from_env("SGD_REGRESSION_LOG")
        .or_else(|_| EnvFilter::try_new("sgd_regression=info"))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(format_filter);

    tracing_subscriber::Registry::default()
        .with(format_layer)
        .try_init()
        .context("failed to initialise the tracing subscriber")?;

    Ok(())
}

pub fn format_duration(duration: StdDuration) -> String {
    humantime::format_duration(duration).to_string()
}

pub fn format_elapsed(instant: Instant) -> String {
    format_duration(instant.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_ok() {
        assert_eq!(format_duration(StdDuration::from_millis(1500)), "1s 500ms");
    }
}
