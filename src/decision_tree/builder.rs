use fixedbitset::FixedBitSet;

use crate::Sample;
use crate::error::{Result, TreeError};
use super::{
    depth::Depth,
    dtree::DecisionTree,
    positive_class::PositiveClass,
};


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minid3::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/train.dat")
///     .read()
///     .unwrap();
/// let learner = DecisionTreeBuilder::new(&sample)
///     .max_depth(2)
///     .positive_class(["A"])
///     .avoid(["attr3"])
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    max_depth: Depth,
    positive: Vec<String>,
    avoid: Vec<String>,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: unbounded,
    /// positive_class: none (must be set),
    /// avoid: none,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            max_depth: Depth::UNBOUNDED,
            positive: Vec::new(),
            avoid: Vec::new(),
        }
    }


    /// Specify the maximal depth of the tree.
    /// With depth `0` the root still splits once,
    /// but every child is a leaf.
    /// Default maximal depth is unbounded.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth);
        self
    }


    /// Set the labels counted as positive by the entropy computations.
    pub fn positive_class<I, T>(mut self, labels: I) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        self.positive = labels.into_iter()
            .map(|l| l.to_string())
            .collect();
        self
    }


    /// Mark the attributes named `names` as already used,
    /// so that the tree never splits on them.
    pub fn avoid<I, T>(mut self, names: I) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        self.avoid = names.into_iter()
            .map(|n| n.to_string())
            .collect();
        self
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    pub fn build(self) -> Result<DecisionTree> {
        if self.positive.is_empty() {
            return Err(TreeError::EmptyPositiveClass);
        }
        let positive = PositiveClass::new(self.sample, &self.positive)?;

        let n_feature = self.sample.shape().1;
        let mut avoid = FixedBitSet::with_capacity(n_feature);
        for name in self.avoid.iter() {
            avoid.insert(self.sample.attribute_index(name)?);
        }

        let dtree = DecisionTree::new(
            self.sample, positive, self.max_depth, avoid
        );

        Ok(dtree)
    }
}
