//! Defines the error type shared by the sample store,
//! the tree builder, and the classifier.
use thiserror::Error;

use std::io;


/// An alias of `std::result::Result` with [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;


/// Errors raised while declaring a sample, inducing a tree,
/// or classifying an example.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A value token is not in the declared domain of its attribute.
    #[error("value `{value}` is not in the domain of attribute `{attribute}`")]
    UnknownValue {
        /// Attribute name.
        attribute: String,
        /// The offending token.
        value: String,
    },

    /// A label is not in the declared class set.
    #[error("class `{0}` is not declared")]
    UnknownClass(String),

    /// An attribute name is not declared.
    #[error("attribute `{0}` is not declared")]
    UnknownAttribute(String),

    /// A record has the wrong number of attribute values.
    #[error("expected {expected} attribute values, found {found}")]
    ArityMismatch {
        /// Number of declared attributes.
        expected: usize,
        /// Number of values in the record.
        found: usize,
    },

    /// A training example carries no classification.
    #[error("the example has no classification label")]
    MissingLabel,

    /// The sample was declared with other attributes or classes
    /// than the ones the learner was configured for.
    #[error("the sample does not match the declaration of the learner")]
    SchemaMismatch,

    /// An attribute is declared with no legal value.
    #[error("attribute `{0}` has an empty domain")]
    EmptyDomain(String),

    /// An attribute lists the same value twice.
    #[error("attribute `{attribute}` lists value `{value}` twice")]
    DuplicateValue {
        /// Attribute name.
        attribute: String,
        /// The repeated token.
        value: String,
    },

    /// Two attributes share a name.
    #[error("attribute `{0}` is declared twice")]
    DuplicateAttribute(String),

    /// The class set lists a label twice.
    #[error("class `{0}` is declared twice")]
    DuplicateClass(String),

    /// No attribute is declared.
    #[error("no attribute is declared")]
    NoAttributes,

    /// No class label is declared.
    #[error("no class is declared")]
    NoClasses,

    /// Training was requested on zero examples.
    #[error("no data: the sample has no example to train on")]
    EmptySample,

    /// A row position is not in the sample.
    #[error("row {row} is out of range for a sample of {n_sample} examples")]
    RowOutOfRange {
        /// The offending row.
        row: usize,
        /// Number of examples in the sample.
        n_sample: usize,
    },

    /// A tree does not fit the attributes and classes it is paired with.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// The positive class has no label.
    #[error("the positive class must contain at least one label")]
    EmptyPositiveClass,

    /// A line of a training file cannot be read as an example.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// I/O failure while reading or writing a file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failure while reading a `polars` frame.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}
