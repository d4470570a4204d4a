//! Defines the inner representation
//! of the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::Attribute;


/// An induced decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tree {
    /// A node that predicts a fixed label.
    Leaf(String),


    /// The root of a tree that never branches.
    /// It predicts its label for any example.
    Degenerate(String),


    /// A node that splits on `attribute`.
    /// `children[k]` is the subtree for the `k`-th value
    /// of the attribute domain.
    Internal {
        /// Position of the splitting attribute.
        attribute: usize,
        /// One subtree per domain value, in domain order.
        children: Vec<Tree>,
    },
}


impl Tree {
    /// Construct a leaf.
    #[inline]
    pub fn leaf<S: ToString>(label: S) -> Self {
        Self::Leaf(label.to_string())
    }


    /// Construct an internal node.
    #[inline]
    pub fn internal(attribute: usize, children: Vec<Tree>) -> Self {
        Self::Internal { attribute, children }
    }


    /// Turns a bare leaf into a degenerate root.
    /// Other trees are returned as is.
    #[inline]
    pub(crate) fn into_root(self) -> Self {
        match self {
            Self::Leaf(label) => Self::Degenerate(label),
            tree => tree,
        }
    }


    /// Returns `true` for `Leaf` and `Degenerate`.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }


    /// Returns the label of a leaf.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf(label) | Self::Degenerate(label) => Some(label.as_str()),
            Self::Internal { .. } => None,
        }
    }


    /// Returns the splitting attribute of an internal node.
    pub fn attribute(&self) -> Option<usize> {
        match self {
            Self::Internal { attribute, .. } => Some(*attribute),
            _ => None,
        }
    }


    /// Returns the children of an internal node.
    /// Leaves have no child.
    pub fn children(&self) -> &[Tree] {
        match self {
            Self::Internal { children, .. } => &children[..],
            _ => &[],
        }
    }


    /// Returns the number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Internal { children, .. } => {
                1 + children.iter()
                    .map(Tree::depth)
                    .max()
                    .unwrap_or(0)
            },
            _ => 0,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Internal { children, .. } => {
                children.iter().map(Tree::leaves).sum()
            },
            _ => 1,
        }
    }


    pub(crate) fn to_dot_info(&self, attributes: &[Attribute], id: usize)
        -> (Vec<String>, usize)
    {
        match self {
            Self::Internal { attribute, children } => {
                let attr = &attributes[*attribute];
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{name} ?\" ];\n",
                    name = attr.name(),
                )];

                let mut next_id = id + 1;
                for (value, child) in attr.domain().iter().zip(children) {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(
                        attributes, child_id
                    );
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf(label) | Self::Degenerate(label) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Tree {
        Tree::internal(0, vec![
            Tree::internal(1, vec![Tree::leaf("A"), Tree::leaf("B")]),
            Tree::leaf("B"),
        ])
    }

    #[test]
    fn test_depth_and_leaves() {
        let t = tree();
        assert_eq!(t.depth(), 2);
        assert_eq!(t.leaves(), 3);
        assert_eq!(Tree::Degenerate("A".into()).depth(), 0);
    }

    #[test]
    fn test_into_root() {
        let res = Tree::leaf("A").into_root();
        assert_eq!(res, Tree::Degenerate("A".into()));
        assert_eq!(tree().into_root(), tree());
    }

    #[test]
    fn test_accessors() {
        let t = tree();
        assert_eq!(t.attribute(), Some(0));
        assert_eq!(t.children().len(), 2);
        assert_eq!(t.children()[1].label(), Some("B"));
        assert!(t.children()[1].is_leaf());
        assert!(t.children()[1].children().is_empty());
    }

    #[test]
    fn test_dot_info() {
        let attributes = vec![
            Attribute::new("attr1", ["True", "False"]).unwrap(),
            Attribute::new("attr2", ["True", "False"]).unwrap(),
        ];
        let (info, next) = tree().to_dot_info(&attributes, 0);
        assert_eq!(next, 5);
        assert!(info.contains(
            &"\tnode_0 -- node_4 [ label = \"False\" ];\n".to_string()
        ));
        assert!(info.contains(
            &"\tnode_1 -- node_2 [ label = \"True\" ];\n".to_string()
        ));
    }
}
