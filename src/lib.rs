#![warn(missing_docs)]

//!
//! A crate that induces decision trees from categorical examples
//! with the ID3 algorithm.
//!
//! Given examples whose attributes take values in finite domains,
//! [`DecisionTree`] recursively splits the examples
//! on the attribute of maximal information gain
//! until a branch is pure, runs out of attributes,
//! or reaches the maximal depth.
//! The resulting [`DecisionTreeClassifier`] classifies new examples
//! and prints itself as an indented outline.
//!
//! ```
//! use minid3::prelude::*;
//!
//! let attributes = vec![
//!     Attribute::new("attr1", ["True", "False"]).unwrap(),
//!     Attribute::new("attr2", ["True", "False"]).unwrap(),
//! ];
//! let mut sample = Sample::new(attributes, ["B", "A"]).unwrap();
//! sample.extend([
//!     Example::new(["True",  "True"],  "A"),
//!     Example::new(["True",  "False"], "B"),
//!     Example::new(["False", "True"],  "B"),
//!     Example::new(["False", "False"], "B"),
//! ]).unwrap();
//!
//! let f = DecisionTreeBuilder::new(&sample)
//!     .positive_class(["A"])
//!     .build()
//!     .unwrap()
//!     .produce(&sample)
//!     .unwrap();
//!
//! assert_eq!(f.predict_sample(&sample).unwrap(), ["A", "B", "B", "B"]);
//! println!("{f}");
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod prelude;


pub use error::{Result, TreeError};

pub use sample::{
    Attribute,
    Example,
    Feature,
    Sample,
    SampleReader,
};

pub use classifier::Classifier;

pub use decision_tree::{
    Depth,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    PositiveClass,
    Tree,
    TreePrinter,
};
