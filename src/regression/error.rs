/// Root mean square of the residual errors over an epoch.
#[derive(Default, Copy, Clone)]
pub struct ResidualError {
    sum_of_squares: f64,
    n_samples: usize,
}

impl ResidualError {
    #[inline]
    pub fn push(&mut self, residual_error: f64) {
        self.sum_of_squares += residual_error * residual_error;
        self.n_samples += 1;
    }

    #[must_use]
    pub fn rmse(&self) -> f64 {
        (self.sum_of_squares / self.n_samples.max(1) as f64).sqrt()
    }
}
