use fixedbitset::FixedBitSet;

use crate::Sample;
use crate::error::{Result, TreeError};


/// The set of labels counted as "positive"
/// by the entropy computations.
/// A `PositiveClass` is resolved against the class set of a [`Sample`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositiveClass {
    labels: Vec<String>,
    mask: FixedBitSet,
}


impl PositiveClass {
    /// Resolve `labels` against the class set of `sample`.
    pub fn new<I, T>(sample: &Sample, labels: I) -> Result<Self>
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let labels = labels.into_iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>();
        if labels.is_empty() {
            return Err(TreeError::EmptyPositiveClass);
        }

        let mut mask = FixedBitSet::with_capacity(sample.classes().len());
        for label in labels.iter() {
            mask.insert(sample.class_index(label)?);
        }

        Ok(Self { labels, mask })
    }


    /// Returns the positive labels as given.
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }


    /// Returns `true` if the class at position `class`
    /// of the class set is positive.
    #[inline]
    pub fn contains(&self, class: usize) -> bool {
        self.mask.contains(class)
    }
}
