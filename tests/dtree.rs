use minid3::prelude::*;
use minid3::decision_tree::metrics::{gain, positive_negative_count};


fn boolean_attributes(n: usize) -> Vec<Attribute> {
    (1..=n).map(|i| Attribute::new(format!("attr{i}"), ["True", "False"]))
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}


// attr1 ∧ attr2 => A
//
//          | attr2 = T | attr2 = F
// ---------+-----------+----------
// attr1 = T|     A     |    B
// attr1 = F|     B     |    B
fn conjunction() -> Sample {
    let mut sample = Sample::new(boolean_attributes(2), ["B", "A"]).unwrap();
    sample.extend([
        Example::new(["True",  "True"],  "A"),
        Example::new(["True",  "False"], "B"),
        Example::new(["False", "True"],  "B"),
        Example::new(["False", "False"], "B"),
    ]).unwrap();
    sample
}


fn induce(sample: &Sample, depth: Option<usize>) -> DecisionTreeClassifier {
    let mut builder = DecisionTreeBuilder::new(sample)
        .positive_class(["A"]);
    if let Some(depth) = depth {
        builder = builder.max_depth(depth);
    }
    builder.build()
        .unwrap()
        .produce(sample)
        .unwrap()
}


#[test]
fn conjunction_tree() {
    let sample = conjunction();
    let f = induce(&sample, None);

    // Both attributes have the same gain at the root,
    // so the first one is chosen.
    let exp = Tree::internal(0, vec![
        Tree::internal(1, vec![Tree::leaf("A"), Tree::leaf("B")]),
        Tree::leaf("B"),
    ]);
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());
    assert_eq!(f.depth(), 2);
    assert_eq!(f.leaves(), 3);
}


#[test]
fn perfectly_discriminating_attribute_wins() {
    let mut sample = Sample::new(boolean_attributes(2), ["B", "A"]).unwrap();
    sample.extend([
        Example::new(["True",  "True"],  "A"),
        Example::new(["True",  "False"], "B"),
        Example::new(["False", "True"],  "A"),
        Example::new(["False", "False"], "B"),
    ]).unwrap();

    let pos = PositiveClass::new(&sample, ["A"]).unwrap();
    let rows = [0, 1, 2, 3];
    let (p, n) = positive_negative_count(&sample, &rows, &pos);
    let g1 = gain(&sample, &rows, 0, p, n, &pos);
    let g2 = gain(&sample, &rows, 1, p, n, &pos);
    assert!(g2 > g1, "expected gain(attr2) > gain(attr1), got {g2} <= {g1}.");

    let f = induce(&sample, None);
    let exp = Tree::internal(1, vec![Tree::leaf("A"), Tree::leaf("B")]);
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());
}


#[test]
fn pure_sample_is_degenerate() {
    let mut sample = Sample::new(boolean_attributes(3), ["B", "A"]).unwrap();
    sample.extend([
        Example::new(["True",  "True",  "False"], "A"),
        Example::new(["False", "True",  "True"],  "A"),
        Example::new(["False", "False", "False"], "A"),
    ]).unwrap();

    for depth in [None, Some(0), Some(3)] {
        let f = induce(&sample, depth);
        let exp = Tree::Degenerate("A".into());
        assert_eq!(&exp, f.tree(), "depth {depth:?}: got {:?}.", f.tree());
    }

    let f = induce(&sample, None);
    let example = Example::unlabeled(["True", "False", "True"]);
    assert_eq!(f.predict(&example).unwrap(), "A");
    assert_eq!(f.to_string(), "A\n");
}


#[test]
fn avoiding_every_attribute_returns_plurality() {
    let sample = conjunction();
    let f = DecisionTreeBuilder::new(&sample)
        .positive_class(["A"])
        .avoid(["attr1", "attr2"])
        .build()
        .unwrap()
        .produce(&sample)
        .unwrap();

    let exp = Tree::Degenerate("B".into());
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());
}


#[test]
fn avoided_attribute_is_never_split() {
    let sample = conjunction();
    let f = DecisionTreeBuilder::new(&sample)
        .positive_class(["A"])
        .avoid(["attr1"])
        .build()
        .unwrap()
        .produce(&sample)
        .unwrap();

    // attr2 = True holds one A and one B, but no attribute is left.
    let exp = Tree::internal(1, vec![Tree::leaf("B"), Tree::leaf("B")]);
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());
}


#[test]
fn exhausted_attributes_on_a_path_return_plurality() {
    let attributes = vec![Attribute::new("attr1", ["True", "False"]).unwrap()];
    let mut sample = Sample::new(attributes, ["A", "B"]).unwrap();
    sample.extend([
        Example::new(["True"], "A"),
        Example::new(["True"], "B"),
        Example::new(["True"], "B"),
    ]).unwrap();

    let f = induce(&sample, None);

    // `True`: contradicting examples, majority `B`.
    // `False`: no example, majority of the parent `B`.
    let exp = Tree::internal(0, vec![Tree::leaf("B"), Tree::leaf("B")]);
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());
}


#[test]
fn empty_branch_takes_parent_plurality() {
    let attributes = vec![Attribute::new("a", ["x", "y", "z"]).unwrap()];
    let mut sample = Sample::new(attributes, ["B", "A"]).unwrap();
    sample.extend([
        Example::new(["x"], "A"),
        Example::new(["y"], "B"),
        Example::new(["y"], "B"),
        Example::new(["x"], "A"),
    ]).unwrap();

    let f = induce(&sample, None);

    // The parent is tied 2 vs 2; `B` is declared first.
    let exp = Tree::internal(0, vec![
        Tree::leaf("A"), Tree::leaf("B"), Tree::leaf("B"),
    ]);
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());

    let example = Example::unlabeled(["z"]);
    assert_eq!(f.predict(&example).unwrap(), "B");
}


#[test]
fn depth_zero_splits_once() {
    let sample = conjunction();
    let f = induce(&sample, Some(0));

    let exp = Tree::internal(0, vec![Tree::leaf("B"), Tree::leaf("B")]);
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());
}


#[test]
fn depth_one_allows_one_more_level() {
    let sample = conjunction();
    let f = induce(&sample, Some(1));

    // The second split has no budget left:
    // its children vote over {(T, T, A), (T, F, B)}, a tie won by `B`.
    let exp = Tree::internal(0, vec![
        Tree::internal(1, vec![Tree::leaf("B"), Tree::leaf("B")]),
        Tree::leaf("B"),
    ]);
    assert_eq!(&exp, f.tree(), "expected {exp:?}, got {:?}.", f.tree());

    let f = induce(&sample, Some(2));
    assert_eq!(f.tree(), induce(&sample, None).tree());
}


#[test]
fn training_examples_round_trip() {
    let sample = conjunction();
    let f = induce(&sample, None);

    let examples = sample.examples().collect::<Vec<_>>();
    let predictions = f.predict_all(&examples).unwrap();
    let labels = examples.iter()
        .map(|ex| ex.label().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(labels, predictions);

    let accuracy = f.accuracy(&sample).unwrap();
    assert_eq!(accuracy, 1.0, "expected 1.0, got {accuracy}.");
}


#[test]
fn malformed_example_is_rejected() {
    let sample = conjunction();
    let f = induce(&sample, None);

    let res = f.predict(&Example::unlabeled(["Yes", "True"]));
    assert!(matches!(res, Err(TreeError::UnknownValue { .. })), "got {res:?}");

    let examples = vec![
        Example::unlabeled(["True", "True"]),
        Example::unlabeled(["True"]),
    ];
    let res = f.predict_all(&examples);
    assert!(matches!(res, Err(TreeError::ArityMismatch { .. })), "got {res:?}");
}


#[test]
fn empty_sample_is_not_trainable() {
    let sample = Sample::new(boolean_attributes(2), ["B", "A"]).unwrap();
    let res = DecisionTreeBuilder::new(&sample)
        .positive_class(["A"])
        .build()
        .unwrap()
        .produce(&sample);
    assert!(matches!(res, Err(TreeError::EmptySample)), "got {res:?}");
}


#[test]
fn induce_on_subset() {
    let sample = conjunction();
    let learner = DecisionTreeBuilder::new(&sample)
        .positive_class(["A"])
        .build()
        .unwrap();

    // Rows with attr1 = False are all `B`.
    let tree = learner.induce(&sample, &[2, 3]).unwrap();
    assert_eq!(tree, Tree::Degenerate("B".into()));

    // Rows with attr1 = True split on attr2.
    let tree = learner.induce(&sample, &[0, 1]).unwrap();
    let exp = Tree::internal(1, vec![Tree::leaf("A"), Tree::leaf("B")]);
    assert_eq!(exp, tree, "expected {exp:?}, got {tree:?}.");
}


#[test]
fn induce_rejects_rows_out_of_range() {
    let sample = conjunction();
    let learner = DecisionTreeBuilder::new(&sample)
        .positive_class(["A"])
        .build()
        .unwrap();

    let res = learner.induce(&sample, &[0, 5]);
    assert!(
        matches!(res, Err(TreeError::RowOutOfRange { row: 5, n_sample: 4 })),
        "got {res:?}"
    );

    let res = learner.induce(&sample, &[4]);
    assert!(
        matches!(res, Err(TreeError::RowOutOfRange { row: 4, n_sample: 4 })),
        "got {res:?}"
    );
}


#[test]
fn classify_with_an_external_tree() {
    let sample = conjunction();
    let attributes = sample.attributes().cloned().collect::<Vec<_>>();
    let tree = Tree::internal(1, vec![Tree::leaf("A"), Tree::leaf("B")]);

    let f = DecisionTreeClassifier::from_tree(
        tree, attributes.clone(), ["B", "A"]
    ).unwrap();
    let example = Example::unlabeled(["False", "True"]);
    assert_eq!(f.predict(&example).unwrap(), "A");
    assert_eq!(f.accuracy(&sample).unwrap(), 0.75);

    // attr2 has two values, not three.
    let tree = Tree::internal(1, vec![
        Tree::leaf("A"), Tree::leaf("B"), Tree::leaf("B"),
    ]);
    let res = DecisionTreeClassifier::from_tree(tree, attributes, ["B", "A"]);
    assert!(matches!(res, Err(TreeError::MalformedTree(_))), "got {res:?}");
}


#[test]
fn outline() {
    let sample = conjunction();
    let f = induce(&sample, None);
    let exp = "\
        attr1\n\
        |---attr2\n\
        \x20   |---A\n\
        \x20   |---B\n\
        |---B\n";
    let res = f.to_string();
    assert_eq!(exp, res, "expected\n{exp}\ngot\n{res}");
}
