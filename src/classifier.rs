//! Defines the `Classifier` trait.
use rayon::prelude::*;

use crate::{Example, Sample};
use crate::error::Result;


/// A trait that defines the behavior of classifiers.
/// You only need to implement the `predict` method.
pub trait Classifier {
    /// Predicts the label of the given example.
    fn predict(&self, example: &Example) -> Result<&str>;


    /// Predicts the labels of the given examples, in order.
    /// The examples are classified in parallel.
    fn predict_all(&self, examples: &[Example]) -> Result<Vec<&str>>
        where Self: Sync,
    {
        examples.par_iter()
            .map(|example| self.predict(example))
            .collect()
    }


    /// Predicts the label of the `row`-th example of `sample`.
    fn predict_row(&self, sample: &Sample, row: usize) -> Result<&str> {
        self.predict(&sample.example(row))
    }


    /// Predicts the labels of all examples of `sample`.
    fn predict_sample(&self, sample: &Sample) -> Result<Vec<&str>>
        where Self: Sync,
    {
        (0..sample.len()).into_par_iter()
            .map(|row| self.predict_row(sample, row))
            .collect()
    }


    /// Returns the fraction of the examples of `sample`
    /// whose prediction equals their label.
    /// Returns `0` for an empty sample.
    fn accuracy(&self, sample: &Sample) -> Result<f64>
        where Self: Sync,
    {
        let n_sample = sample.len();
        if n_sample == 0 { return Ok(0.0); }

        let correct = self.predict_sample(sample)?
            .into_iter()
            .enumerate()
            .filter(|&(row, label)| sample.label(row) == label)
            .count();
        Ok(correct as f64 / n_sample as f64)
    }
}
