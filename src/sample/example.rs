/// A single record: attribute value tokens in declaration order,
/// plus the classification label.
/// The label is optional so that unseen examples can be classified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Example {
    values: Vec<String>,
    label: Option<String>,
}


impl Example {
    /// Construct a labeled example.
    pub fn new<I, T, L>(values: I, label: L) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
              L: ToString,
    {
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect();
        Self { values, label: Some(label.to_string()) }
    }


    /// Construct an example without classification.
    pub fn unlabeled<I, T>(values: I) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect();
        Self { values, label: None }
    }


    /// Construct a labeled example from a tuple of tokens
    /// whose last element is the label.
    /// Returns `None` if `tokens` has fewer than two items.
    pub fn from_tokens<I, T>(tokens: I) -> Option<Self>
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let mut values = tokens.into_iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>();
        if values.len() < 2 { return None; }

        let label = values.pop();
        Some(Self { values, label })
    }


    /// Returns the value tokens.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    /// Returns the token at attribute position `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }


    /// Returns the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }


    /// Returns the number of attribute values.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the example has no attribute value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
