use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::Index;
use std::collections::HashSet;

use crate::error::{Result, TreeError};


/// A categorical attribute.
/// An attribute is a name with an ordered, finite domain of value tokens.
/// The order of the domain fixes the order of branches in a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    domain: Vec<String>,
}


impl Attribute {
    /// Construct a new attribute named `name`
    /// whose legal values are `domain`, in the given order.
    ///
    /// # Example
    /// ```
    /// use minid3::Attribute;
    /// let outlook = Attribute::new("outlook", ["sunny", "overcast", "rain"])
    ///     .unwrap();
    /// assert_eq!(outlook.position("rain"), Some(2));
    /// ```
    pub fn new<S, I, T>(name: S, domain: I) -> Result<Self>
        where S: ToString,
              I: IntoIterator<Item = T>,
              T: ToString,
    {
        let name = name.to_string();
        let domain = domain.into_iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>();

        if domain.is_empty() {
            return Err(TreeError::EmptyDomain(name));
        }

        let mut seen = HashSet::with_capacity(domain.len());
        for value in domain.iter() {
            if !seen.insert(value.as_str()) {
                return Err(TreeError::DuplicateValue {
                    attribute: name,
                    value: value.clone(),
                });
            }
        }

        Ok(Self { name, domain })
    }


    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the domain in declaration order.
    pub fn domain(&self) -> &[String] {
        &self.domain[..]
    }


    /// Returns the number of legal values.
    pub fn len(&self) -> usize {
        self.domain.len()
    }


    /// An attribute always has a non-empty domain,
    /// so this method returns `false`.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }


    /// Returns the position of `value` in the domain.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.domain.iter().position(|v| v == value)
    }


    /// Same as [`Attribute::position`],
    /// but an unknown token is an error.
    pub fn index_of(&self, value: &str) -> Result<usize> {
        self.position(value)
            .ok_or_else(|| TreeError::UnknownValue {
                attribute: self.name.clone(),
                value: value.to_string(),
            })
    }


    /// Returns the value at `index` of the domain.
    pub fn value(&self, index: usize) -> &str {
        &self.domain[index]
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{}}}", self.name, self.domain.join(", "))
    }
}


/// A column of a [`Sample`](crate::Sample).
/// Each item is the position of the example's value
/// in the attribute domain.
#[derive(Debug, Clone)]
pub struct Feature {
    attribute: Attribute,
    values: Vec<usize>,
}


impl Feature {
    /// Construct an empty column for `attribute`.
    pub(crate) fn new(attribute: Attribute) -> Self {
        Self { attribute, values: Vec::new() }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        self.attribute.name()
    }


    /// Returns the attribute of this column.
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }


    /// Returns the encoded values.
    pub fn values(&self) -> &[usize] {
        &self.values[..]
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if this column holds no value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns the token stored at `row`.
    pub fn token(&self, row: usize) -> &str {
        self.attribute.value(self.values[row])
    }


    pub(crate) fn append(&mut self, value: usize) {
        debug_assert!(value < self.attribute.len());
        self.values.push(value);
    }
}


impl Index<usize> for Feature {
    type Output = usize;
    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}
