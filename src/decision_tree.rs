//! The ID3 decision tree algorithm for categorical examples.

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines entropy, remainder, and information gain.
pub mod metrics;
/// Defines the outline printer.
pub mod printer;

mod node;
mod depth;
mod positive_class;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use printer::TreePrinter;
pub use node::Tree;
pub use depth::Depth;
pub use positive_class::PositiveClass;
