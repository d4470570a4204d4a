use polars::prelude::*;

use std::ops::Index;
use std::collections::{HashMap, HashSet};

use super::example::Example;
use super::feature_struct::*;
use crate::error::{Result, TreeError};


/// Struct `Sample` holds the training examples.
/// Examples are stored column-wise:
/// each attribute column keeps the position of a value in its domain,
/// and the target column keeps the position of a label in the class set.
/// A `Sample` is append-only.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) classes: Vec<String>,
    pub(super) target: Vec<usize>,
    pub(super) n_sample: usize,
}


impl Sample {
    /// Declare an empty sample over `attributes` and class set `classes`.
    /// The order of `classes` is the tie-break order of plurality votes.
    ///
    /// # Example
    /// ```
    /// use minid3::{Attribute, Example, Sample};
    /// let attributes = vec![
    ///     Attribute::new("attr1", ["True", "False"]).unwrap(),
    ///     Attribute::new("attr2", ["True", "False"]).unwrap(),
    /// ];
    /// let mut sample = Sample::new(attributes, ["B", "A"]).unwrap();
    /// sample.push(Example::new(["True", "True"], "A")).unwrap();
    /// assert_eq!(sample.shape(), (1, 2));
    /// ```
    pub fn new<I, T>(attributes: Vec<Attribute>, classes: I) -> Result<Self>
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        if attributes.is_empty() {
            return Err(TreeError::NoAttributes);
        }

        let mut name_to_index = HashMap::with_capacity(attributes.len());
        for (i, attr) in attributes.iter().enumerate() {
            let name = attr.name().to_string();
            if name_to_index.insert(name.clone(), i).is_some() {
                return Err(TreeError::DuplicateAttribute(name));
            }
        }

        let classes = classes.into_iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        if classes.is_empty() {
            return Err(TreeError::NoClasses);
        }
        let mut seen = HashSet::with_capacity(classes.len());
        for label in classes.iter() {
            if !seen.insert(label.as_str()) {
                return Err(TreeError::DuplicateClass(label.clone()));
            }
        }

        let features = attributes.into_iter()
            .map(Feature::new)
            .collect::<Vec<_>>();

        let sample = Self {
            name_to_index, features, classes, target: Vec::new(), n_sample: 0,
        };
        Ok(sample)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Each declared attribute is read from the column of the same name;
    /// columns are cast to strings before the lookup in the domain,
    /// so boolean columns yield `"true"` / `"false"`.
    pub fn from_dataframe<I, T>(
        data: &DataFrame,
        target: &Series,
        attributes: Vec<Attribute>,
        classes: I,
    ) -> Result<Self>
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let mut sample = Self::new(attributes, classes)?;

        let mut columns = Vec::with_capacity(sample.features.len());
        for feature in sample.features.iter() {
            let name = feature.name();
            let series = data.column(name)
                .map_err(|_| TreeError::UnknownAttribute(name.to_string()))?;
            columns.push(string_tokens(series)?);
        }
        let labels = string_tokens(target)?;

        let n_sample = data.height();
        if labels.len() != n_sample {
            return Err(TreeError::Parse {
                line: labels.len().min(n_sample) + 1,
                message: format!(
                    "the target has {} rows, the data has {n_sample}",
                    labels.len(),
                ),
            });
        }

        for (row, label) in labels.into_iter().enumerate() {
            let missing = |column: &str| TreeError::Parse {
                line: row + 1,
                message: format!("missing value in column `{column}`"),
            };
            let values = columns.iter()
                .zip(sample.features.iter())
                .map(|(column, feat)| {
                    column[row].clone().ok_or_else(|| missing(feat.name()))
                })
                .collect::<Result<Vec<_>>>()?;
            let label = label.ok_or_else(|| missing(target.name()))?;
            sample.push(Example::new(values, label))?;
        }

        Ok(sample)
    }


    /// Append an example.
    /// The example must be labeled with a declared class,
    /// and every value must be in the domain of its attribute.
    /// On error the sample is left unchanged.
    pub fn push(&mut self, example: Example) -> Result<()> {
        let label = example.label().ok_or(TreeError::MissingLabel)?;
        let class = self.class_index(label)?;
        let values = self.encode(&example)?;

        self.features.iter_mut()
            .zip(values)
            .for_each(|(feat, value)| { feat.append(value); });
        self.target.push(class);
        self.n_sample += 1;

        Ok(())
    }


    /// Append a tuple of tokens whose last element is the label.
    pub fn push_tokens<I, T>(&mut self, tokens: I) -> Result<()>
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let tokens = tokens.into_iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>();
        let found = tokens.len().saturating_sub(1);
        let example = Example::from_tokens(tokens)
            .ok_or(TreeError::ArityMismatch {
                expected: self.features.len(),
                found,
            })?;
        self.push(example)
    }


    /// Append all `examples`.
    /// Stops at the first malformed example;
    /// the examples before it stay in the sample.
    pub fn extend<I>(&mut self, examples: I) -> Result<()>
        where I: IntoIterator<Item = Example>,
    {
        for example in examples {
            self.push(example)?;
        }
        Ok(())
    }


    /// Returns the positions of the values of `example`
    /// in the attribute domains.
    pub fn encode(&self, example: &Example) -> Result<Vec<usize>> {
        let expected = self.features.len();
        if example.len() != expected {
            return Err(TreeError::ArityMismatch {
                expected,
                found: example.len(),
            });
        }

        self.features.iter()
            .zip(example.values())
            .map(|(feat, value)| feat.attribute().index_of(value))
            .collect()
    }


    /// Returns the pair of the number of examples and attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.features.len())
    }


    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.n_sample
    }


    /// Returns `true` if no example has been pushed.
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the declared attributes in order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> + '_ {
        self.features.iter().map(Feature::attribute)
    }


    /// Returns the attribute at position `index`.
    pub fn attribute(&self, index: usize) -> &Attribute {
        self.features[index].attribute()
    }


    /// Returns the position of the attribute named `name`.
    pub fn attribute_index(&self, name: &str) -> Result<usize> {
        self.name_to_index.get(name)
            .copied()
            .ok_or_else(|| TreeError::UnknownAttribute(name.to_string()))
    }


    /// Returns the class set.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }


    /// Returns the position of `label` in the class set.
    pub fn class_index(&self, label: &str) -> Result<usize> {
        self.classes.iter()
            .position(|c| c == label)
            .ok_or_else(|| TreeError::UnknownClass(label.to_string()))
    }


    /// Returns the target column.
    /// Each item is a position in [`Sample::classes`].
    pub fn target(&self) -> &[usize] {
        &self.target[..]
    }


    /// Returns the label of the `row`-th example.
    pub fn label(&self, row: usize) -> &str {
        &self.classes[self.target[row]]
    }


    /// Reconstruct the `row`-th example.
    pub fn example(&self, row: usize) -> Example {
        let values = self.features.iter()
            .map(|feat| feat.token(row));
        Example::new(values, self.label(row))
    }


    /// Returns all examples in insertion order.
    pub fn examples(&self) -> impl Iterator<Item = Example> + '_ {
        (0..self.n_sample).map(|row| self.example(row))
    }


    /// Returns the value of the attribute named `name`
    /// of the given `example`.
    pub fn field<'e>(&self, example: &'e Example, name: &str)
        -> Result<&'e str>
    {
        let index = self.attribute_index(name)?;
        example.value(index)
            .ok_or(TreeError::ArityMismatch {
                expected: self.features.len(),
                found: example.len(),
            })
    }


    /// Returns `true` if `self` declares exactly
    /// `attributes` and `classes`, in the same order.
    pub fn declares(&self, attributes: &[Attribute], classes: &[String])
        -> bool
    {
        self.classes == classes
            && self.attributes().eq(attributes.iter())
    }
}


impl Index<&str> for Sample {
    type Output = Feature;
    fn index(&self, name: &str) -> &Self::Output {
        let index = self.name_to_index.get(name)
            .unwrap_or_else(|| {
                panic!("The feature named `{name}` does not exist")
            });
        &self.features[*index]
    }
}


fn string_tokens(series: &Series) -> Result<Vec<Option<String>>> {
    let series = series.cast(&DataType::Utf8)?;
    let tokens = series.utf8()?
        .into_iter()
        .map(|token| token.map(str::to_string))
        .collect();
    Ok(tokens)
}
