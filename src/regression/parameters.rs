/// Parameters of the linear model `y = weight × x + bias`.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub weight: f64,
    pub bias: f64,
}

impl Parameters {
    #[must_use]
    #[inline]
    pub fn predict(&self, input: f64) -> f64 {
        self.weight * input + self.bias
    }

    /// Adjusts the parameters towards the reference output on a single sample.
    /// Returns the residual error before the adjustment.
    ///
    /// The weight gradient of the squared error is proportional to the input,
    /// hence the extra factor.
    pub fn sgd_step(&mut self, input: f64, reference: f64, learning_rate: f64) -> f64 {
        debug_assert!(learning_rate >= 0.0);

        let residual_error = reference - self.predict(input);
        let delta = residual_error * learning_rate;
        self.bias += delta;
        self.weight += delta * input;
        residual_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_ok() {
        let parameters = Parameters {
            weight: 2.0,
            bias: -1.0,
        };
        assert!((parameters.predict(3.0) - 5.0).abs() < f64::EPSILON);
        assert_eq!(Parameters::default().predict(123.0), 0.0);
    }

    #[test]
    fn sgd_step_ok() {
        let mut parameters = Parameters::default();
        let residual_error = parameters.sgd_step(2.0, 5.0, 0.1);
        assert!((residual_error - 5.0).abs() < f64::EPSILON);
        assert!((parameters.bias - 0.5).abs() < f64::EPSILON);
        assert!((parameters.weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sgd_step_zero_input_ok() {
        let mut parameters = Parameters {
            weight: 3.0,
            bias: 1.0,
        };
        parameters.sgd_step(0.0, 2.0, 0.5);
        assert!((parameters.bias - 1.5).abs() < f64::EPSILON);
        assert!((parameters.weight - 3.0).abs() < f64::EPSILON);
    }
}
