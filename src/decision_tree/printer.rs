//! Renders a [`Tree`] as an indented outline.
//!
//! ```text
//! attr1
//! |---attr2
//!     |---A
//!     |---B
//! |---B
//! ```
use colored::Colorize;

use crate::Attribute;
use super::node::Tree;

use std::fmt;


const INDENT: &str = "    ";
const BRANCH: &str = "|---";


/// A struct that prints a tree depth-first.
/// Internal nodes print their attribute name,
/// leaves print their label one level deeper than their parent.
/// Children follow the order of the attribute domain.
pub struct TreePrinter<'a> {
    tree: &'a Tree,
    attributes: &'a [Attribute],
    colored: bool,
}


impl<'a> TreePrinter<'a> {
    /// Construct a printer for `tree`,
    /// whose attribute indices refer to `attributes`.
    pub fn new(tree: &'a Tree, attributes: &'a [Attribute]) -> Self {
        Self { tree, attributes, colored: false }
    }


    /// Highlight attribute names and labels.
    /// Default is `false`.
    pub fn colored(mut self, flag: bool) -> Self {
        self.colored = flag;
        self
    }


    fn name(&self, attribute: usize) -> String {
        let name = self.attributes[attribute].name();
        if self.colored {
            name.bold().blue().to_string()
        } else {
            name.to_string()
        }
    }


    fn label(&self, label: &str) -> String {
        if self.colored {
            label.green().to_string()
        } else {
            label.to_string()
        }
    }


    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: &Tree, level: usize)
        -> fmt::Result
    {
        match node {
            Tree::Leaf(label) | Tree::Degenerate(label) => {
                writeln!(f, "{}", self.label(label))
            },
            Tree::Internal { attribute, children } => {
                let indent = INDENT.repeat(level.saturating_sub(1));
                let branch = if level > 0 { BRANCH } else { "" };
                writeln!(f, "{indent}{branch}{}", self.name(*attribute))?;

                for child in children {
                    match child {
                        Tree::Internal { .. } => {
                            self.write_node(f, child, level + 1)?;
                        },
                        Tree::Leaf(label) | Tree::Degenerate(label) => {
                            let indent = INDENT.repeat(level);
                            writeln!(f, "{indent}{BRANCH}{}", self.label(label))?;
                        },
                    }
                }
                Ok(())
            },
        }
    }
}


impl fmt::Display for TreePrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree, 0)
    }
}
