use fixedbitset::FixedBitSet;
use tracing::{debug, info, trace};

use crate::{Attribute, Sample};
use crate::error::{Result, TreeError};

use super::{
    depth::Depth,
    metrics::*,
    node::Tree,
    positive_class::PositiveClass,
    dtree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The ID3 decision tree algorithm.
/// Given a sample of categorical examples,
/// [`DecisionTree`] grows a tree that splits,
/// at each node, on the unused attribute of maximal information gain,
/// and outputs a [`DecisionTreeClassifier`].
///
/// The code follows the `DECISION-TREE-LEARNING` procedure of
/// Russell & Norvig, *Artificial Intelligence: A Modern Approach*.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::builder::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use minid3::prelude::*;
///
/// let attributes = vec![
///     Attribute::new("attr1", ["True", "False"]).unwrap(),
///     Attribute::new("attr2", ["True", "False"]).unwrap(),
/// ];
/// let mut sample = Sample::new(attributes, ["B", "A"]).unwrap();
/// sample.extend([
///     Example::new(["True",  "True"],  "A"),
///     Example::new(["True",  "False"], "B"),
///     Example::new(["False", "True"],  "B"),
///     Example::new(["False", "False"], "B"),
/// ]).unwrap();
///
/// let f = DecisionTreeBuilder::new(&sample)
///     .positive_class(["A"])
///     .build()
///     .unwrap()
///     .produce(&sample)
///     .unwrap();
///
/// let example = Example::unlabeled(["True", "True"]);
/// assert_eq!(f.predict(&example).unwrap(), "A");
/// ```
pub struct DecisionTree {
    attributes: Vec<Attribute>,
    classes:    Vec<String>,
    positive:   PositiveClass,
    max_depth:  Depth,
    avoid:      FixedBitSet,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        sample:    &Sample,
        positive:  PositiveClass,
        max_depth: Depth,
        avoid:     FixedBitSet,
    ) -> Self
    {
        let attributes = sample.attributes().cloned().collect();
        let classes = sample.classes().to_vec();
        Self { attributes, classes, positive, max_depth, avoid, }
    }


    /// Returns the maximal depth.
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }


    /// Returns the positive class.
    pub fn positive_class(&self) -> &PositiveClass {
        &self.positive
    }


    /// Grow a tree on all examples of `sample`
    /// and wrap it into a [`DecisionTreeClassifier`].
    pub fn produce(&self, sample: &Sample) -> Result<DecisionTreeClassifier> {
        let rows = (0..sample.len()).collect::<Vec<_>>();
        let root = self.induce(sample, &rows)?;

        info!(
            n_sample = sample.len(),
            depth = root.depth(),
            leaves = root.leaves(),
            "decision tree induced"
        );

        let classifier = DecisionTreeClassifier::new(
            root, self.attributes.clone(), self.classes.clone(),
        );
        Ok(classifier)
    }


    /// Grow a tree on the examples of `sample` at positions `rows`.
    /// A tree that never splits is returned as [`Tree::Degenerate`].
    pub fn induce(&self, sample: &Sample, rows: &[usize]) -> Result<Tree> {
        self.check_declaration(sample)?;
        if rows.is_empty() {
            return Err(TreeError::EmptySample);
        }
        let n_sample = sample.len();
        if let Some(&row) = rows.iter().find(|&&row| row >= n_sample) {
            return Err(TreeError::RowOutOfRange { row, n_sample });
        }

        let root = self.grow(sample, rows, rows, &self.avoid, self.max_depth);
        Ok(root.into_root())
    }


    fn check_declaration(&self, sample: &Sample) -> Result<()> {
        if sample.declares(&self.attributes, &self.classes) {
            Ok(())
        } else {
            Err(TreeError::SchemaMismatch)
        }
    }


    /// Construct the subtree for `rows`.
    /// `parent` is the example set split by the parent node
    /// and `used` marks the attributes already split on this path.
    fn grow(
        &self,
        sample: &Sample,
        rows:   &[usize],
        parent: &[usize],
        used:   &FixedBitSet,
        depth:  Depth,
    ) -> Tree
    {
        // No example reached this branch.
        if rows.is_empty() {
            return self.leaf(sample, plurality(sample, parent));
        }

        if let Some(class) = uniform_class(sample, rows) {
            return self.leaf(sample, class);
        }

        let (p, n) = positive_negative_count(sample, parent, &self.positive);
        let Some((attribute, score)) = self.best_split(sample, rows, used, p, n)
        else {
            // Every attribute is used on this path.
            return self.leaf(sample, plurality(sample, rows));
        };

        debug!(
            depth = %depth,
            attribute = self.attributes[attribute].name(),
            gain = score,
            n_rows = rows.len(),
            "split"
        );

        let mut used = used.clone();
        used.insert(attribute);

        let children = if depth.is_exhausted() {
            let label = plurality(sample, rows);
            let n_child = self.attributes[attribute].len();
            (0..n_child).map(|_| self.leaf(sample, label)).collect()
        } else {
            partition(sample, rows, attribute).into_iter()
                .map(|part| self.grow(sample, &part, rows, &used, depth - 1))
                .collect()
        };

        Tree::internal(attribute, children)
    }


    /// Returns the unused attribute of maximal gain
    /// and its gain.
    /// Ties go to the attribute declared first.
    fn best_split(
        &self,
        sample: &Sample,
        rows:   &[usize],
        used:   &FixedBitSet,
        p:      usize,
        n:      usize,
    ) -> Option<(usize, f64)>
    {
        let mut best: Option<(usize, f64)> = None;
        for attribute in (0..self.attributes.len()).filter(|&a| !used.contains(a)) {
            let score = gain(sample, rows, attribute, p, n, &self.positive);
            match best {
                Some((_, best_score)) if best_score >= score => {},
                _ => { best = Some((attribute, score)); },
            }
        }
        best
    }


    #[inline]
    fn leaf(&self, sample: &Sample, class: usize) -> Tree {
        let label = &sample.classes()[class];
        trace!(label = label.as_str(), "leaf");
        Tree::leaf(label)
    }
}


/// Returns the class with most examples among `rows`.
/// Ties go to the class declared first.
fn plurality(sample: &Sample, rows: &[usize]) -> usize {
    let target = sample.target();
    let mut counter = vec![0_usize; sample.classes().len()];
    for &i in rows {
        counter[target[i]] += 1;
    }

    let mut best = 0;
    for (class, &count) in counter.iter().enumerate() {
        if count > counter[best] { best = class; }
    }
    best
}


/// Returns the class of `rows` if all of them share it.
fn uniform_class(sample: &Sample, rows: &[usize]) -> Option<usize> {
    let target = sample.target();
    let first = target[*rows.first()?];
    rows.iter()
        .all(|&i| target[i] == first)
        .then_some(first)
}


/// Split `rows` by the value of `attribute`.
/// The `k`-th part holds the rows whose value is the `k`-th of the domain,
/// in the order of `rows`.
fn partition(sample: &Sample, rows: &[usize], attribute: usize)
    -> Vec<Vec<usize>>
{
    let feature = &sample.features()[attribute];
    let mut parts = vec![Vec::new(); feature.attribute().len()];
    for &i in rows {
        parts[feature[i]].push(i);
    }
    parts
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Max depth: {}\n\
            - Positive class: {}\n\
            - Attributes:\
            ",
            self.max_depth,
            self.positive.labels().join(", "),
        )?;

        let width = self.attributes.iter()
            .map(|attr| attr.name().len())
            .max()
            .unwrap_or(0);
        for (i, attr) in self.attributes.iter().enumerate() {
            let mark = if self.avoid.contains(i) { " (avoided)" } else { "" };
            writeln!(
                f,
                "\t* [{name: <width$}] {{{domain}}}{mark}",
                name = attr.name(),
                domain = attr.domain().join(", "),
            )?;
        }

        write!(f, "----------")
    }
}
