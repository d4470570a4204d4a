use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use super::example::Example;
use super::feature_struct::Attribute;
use super::sample_struct::Sample;
use crate::error::{Result, TreeError};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a flat text file to [`Sample`].
/// Each non-blank line holds one example:
/// whitespace-separated attribute values followed by the class label.
///
/// If the attributes (resp. classes) are not declared,
/// they are collected from the file:
/// the attributes are named `attr1`, `attr2`, ...,
/// and every domain (resp. the class set) is ordered
/// by first appearance.
///
/// # Example
/// ```no_run
/// use minid3::{Attribute, SampleReader};
/// let attributes = (1..=8)
///     .map(|i| Attribute::new(format!("attr{i}"), ["True", "False"]))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// let sample = SampleReader::default()
///     .file("/path/to/train.dat")
///     .attributes(attributes)
///     .classes(["B", "A"])
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    attributes: Option<Vec<Attribute>>,
    classes: Option<Vec<String>>,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self { file: None, attributes: None, classes: None }
    }
}


impl<P> SampleReader<P> {
    /// Declare the attributes.
    /// Every value in the file must be in the declared domain.
    pub fn attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = Some(attributes);
        self
    }


    /// Declare the class set.
    /// Its order is the tie-break order of plurality votes.
    pub fn classes<I, T>(mut self, classes: I) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let classes = classes.into_iter()
            .map(|c| c.to_string())
            .collect();
        self.classes = Some(classes);
        self
    }


    /// Reads examples from `reader` instead of a file.
    pub fn read_from<R: BufRead>(self, reader: R) -> Result<Sample> {
        let mut rows = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let tokens = line.split_whitespace().collect::<Vec<_>>();
            if tokens.is_empty() { continue; }

            let example = Example::from_tokens(tokens)
                .ok_or_else(|| TreeError::Parse {
                    line: i + 1,
                    message: "expected attribute values followed by a class"
                        .to_string(),
                })?;
            rows.push((i + 1, example));
        }

        let attributes = match self.attributes {
            Some(attributes) => attributes,
            None => infer_attributes(&rows)?,
        };
        let classes = match self.classes {
            Some(classes) => classes,
            None => infer_classes(&rows)?,
        };

        let mut sample = Sample::new(attributes, classes)?;
        for (line, example) in rows {
            sample.push(example)
                .map_err(|e| TreeError::Parse { line, message: e.to_string() })?;
        }

        Ok(sample)
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns [`Sample`].
    /// This method consumes `self.`
    pub fn read(mut self) -> Result<Sample> {
        let file = self.file.take()
            .ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidInput,
                "The file name for the training data is not set",
            ))?;
        let file = File::open(file)?;
        self.read_from(BufReader::new(file))
    }
}


fn infer_attributes(rows: &[(usize, Example)]) -> Result<Vec<Attribute>> {
    let Some((_, first)) = rows.first() else {
        return Err(TreeError::EmptySample);
    };
    let n_feature = first.len();

    let mut domains = vec![Vec::<&str>::new(); n_feature];
    for (line, example) in rows {
        if example.len() != n_feature {
            return Err(TreeError::Parse {
                line: *line,
                message: TreeError::ArityMismatch {
                    expected: n_feature,
                    found: example.len(),
                }.to_string(),
            });
        }
        for (domain, value) in domains.iter_mut().zip(example.values()) {
            if !domain.contains(&value.as_str()) {
                domain.push(value.as_str());
            }
        }
    }

    domains.into_iter()
        .enumerate()
        .map(|(i, domain)| Attribute::new(format!("attr{}", i + 1), domain))
        .collect()
}


fn infer_classes(rows: &[(usize, Example)]) -> Result<Vec<String>> {
    let mut classes = Vec::<String>::new();
    for (_, example) in rows {
        let label = example.label().ok_or(TreeError::MissingLabel)?;
        if !classes.iter().any(|c| c == label) {
            classes.push(label.to_string());
        }
    }
    Ok(classes)
}
