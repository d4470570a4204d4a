//! Exports the standard structs and traits.
//!
pub use crate::sample::{
    Attribute,
    Example,
    Sample,
    SampleReader,
};


pub use crate::classifier::Classifier;


pub use crate::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    PositiveClass,
    Tree,
    TreePrinter,
};


pub use crate::error::TreeError;
