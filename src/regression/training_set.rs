use rand::Rng;

/// Training pairs along with the order in which they get visited.
///
/// The order is always a permutation of the pair indices.
#[derive(Default)]
pub struct TrainingSet {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
    order: Vec<usize>,
}

impl TrainingSet {
    pub fn push(&mut self, input: f64, output: f64) {
        self.order.push(self.inputs.len());
        self.inputs.push(input);
        self.outputs.push(output);
    }

    /// Replaces the pairs with the zipped inputs and outputs.
    /// The longer slice gets truncated.
    pub fn replace(&mut self, inputs: &[f64], outputs: &[f64]) {
        let n_pairs = inputs.len().min(outputs.len());

        self.inputs.clear();
        self.inputs.extend_from_slice(&inputs[..n_pairs]);
        self.outputs.clear();
        self.outputs.extend_from_slice(&outputs[..n_pairs]);
        self.order.clear();
        self.order.extend(0..n_pairs);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    #[must_use]
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Iterates over the pairs in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inputs.iter().copied().zip(self.outputs.iter().copied())
    }

    /// Iterates over the pairs in the current visiting order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.order
            .iter()
            .map(move |&index| (self.inputs[index], self.outputs[index]))
    }

    /// Permutes the visiting order in place, leaving the pairs where they are.
    ///
    /// Single forward pass: every position is swapped with a uniformly drawn one.
    /// The resulting permutation is not perfectly uniform.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n_pairs = self.order.len();
        for index in 0..n_pairs {
            self.order.swap(index, rng.gen_range(0..n_pairs));
        }
    }
}
