//! Struct `Sample` represents the training examples.

// Provides the attribute declaration and the column struct.
pub(crate) mod feature_struct;
// Provides the record struct.
pub(crate) mod example;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use feature_struct::{Attribute, Feature};
pub use example::Example;
