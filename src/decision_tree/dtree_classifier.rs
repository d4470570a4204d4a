//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::{Attribute, Classifier, Example};
use crate::error::{Result, TreeError};
use super::node::Tree;
use super::printer::TreePrinter;

use std::fmt;
use std::collections::HashSet;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct is a wrapper of [`Tree`]
/// that remembers the attributes and classes the tree was grown on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Tree,
    attributes: Vec<Attribute>,
    classes: Vec<String>,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn new(
        root: Tree,
        attributes: Vec<Attribute>,
        classes: Vec<String>,
    ) -> Self
    {
        Self { root, attributes, classes }
    }


    /// Construct a classifier from a tree built elsewhere.
    /// `attributes` and `classes` give meaning to the attribute indices
    /// and leaf labels of `tree`.
    ///
    /// The tree is rejected unless every attribute index is declared,
    /// every internal node has one child per domain value,
    /// every leaf label is a declared class,
    /// and `Degenerate` appears only at the root.
    /// A bare `Leaf` root is stored as `Degenerate`.
    pub fn from_tree<I, T>(
        tree: Tree,
        attributes: Vec<Attribute>,
        classes: I,
    ) -> Result<Self>
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let classes = classes.into_iter()
            .map(|label| label.to_string())
            .collect::<Vec<_>>();
        if classes.is_empty() {
            return Err(TreeError::NoClasses);
        }
        {
            let mut seen = HashSet::new();
            let dup = classes.iter().find(|l| !seen.insert(l.as_str()));
            if let Some(label) = dup {
                return Err(TreeError::DuplicateClass(label.clone()));
            }
        }
        {
            let mut seen = HashSet::new();
            let dup = attributes.iter().find(|a| !seen.insert(a.name()));
            if let Some(attr) = dup {
                let name = attr.name().to_string();
                return Err(TreeError::DuplicateAttribute(name));
            }
        }

        let root = tree.into_root();
        if let Tree::Internal { .. } = root {
            check_node(&root, &attributes, &classes)?;
        } else if let Some(label) = root.label() {
            check_label(label, &classes)?;
        }

        Ok(Self::new(root, attributes, classes))
    }


    /// Returns the induced tree.
    pub fn tree(&self) -> &Tree {
        &self.root
    }


    /// Returns the attributes the tree splits on.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// Returns the class set.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }


    /// Returns the number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns a printer of the indented outline of the tree.
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(&self.root, &self.attributes)
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(&self.attributes, 0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, example: &Example) -> Result<&str> {
        let mut node = &self.root;
        if !node.is_leaf() && example.len() != self.attributes.len() {
            return Err(TreeError::ArityMismatch {
                expected: self.attributes.len(),
                found: example.len(),
            });
        }

        loop {
            match node {
                Tree::Leaf(label) | Tree::Degenerate(label) => {
                    return Ok(label.as_str());
                },
                Tree::Internal { attribute, children } => {
                    let attr = &self.attributes[*attribute];
                    let value = &example.values()[*attribute];
                    node = &children[attr.index_of(value)?];
                },
            }
        }
    }
}


fn check_node(node: &Tree, attributes: &[Attribute], classes: &[String])
    -> Result<()>
{
    match node {
        Tree::Leaf(label) => check_label(label, classes),
        Tree::Degenerate(_) => {
            Err(TreeError::MalformedTree(
                "a degenerate leaf below the root".to_string()
            ))
        },
        Tree::Internal { attribute, children } => {
            let attr = attributes.get(*attribute)
                .ok_or_else(|| TreeError::MalformedTree(format!(
                    "attribute index {attribute} is out of range \
                     for {} attributes",
                    attributes.len(),
                )))?;
            if attr.len() != children.len() {
                return Err(TreeError::MalformedTree(format!(
                    "attribute `{}` has {} values but the node has {} children",
                    attr.name(),
                    attr.len(),
                    children.len(),
                )));
            }
            children.iter()
                .try_for_each(|child| check_node(child, attributes, classes))
        },
    }
}


fn check_label(label: &str, classes: &[String]) -> Result<()> {
    if classes.iter().any(|class| class == label) {
        Ok(())
    } else {
        Err(TreeError::UnknownClass(label.to_string()))
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.printer())
    }
}
