//! Information-theoretic quantities used to pick a splitting attribute.
//!
//! Every function works on a subset of a [`Sample`],
//! given as a slice of row indices.
use crate::Sample;
use super::positive_class::PositiveClass;


/// Returns the entropy `-Σ p log2(p)` (in bits) of the given weights.
/// A weight of exactly `0` contributes `0`.
#[inline]
pub fn entropy(weights: &[f64]) -> f64 {
    -weights.iter()
        .filter(|&&p| p != 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}


/// Returns the entropy of a boolean variable that is true
/// with probability `q`.
#[inline]
pub fn binary_entropy(q: f64) -> f64 {
    entropy(&[q, 1.0 - q])
}


/// Returns the pair `(p, n)` of the number of positive and negative
/// examples among `rows`.
pub fn positive_negative_count(
    sample: &Sample,
    rows: &[usize],
    positive: &PositiveClass,
) -> (usize, usize)
{
    let target = sample.target();
    let p = rows.iter()
        .filter(|&&i| positive.contains(target[i]))
        .count();
    (p, rows.len() - p)
}


/// Returns the expected entropy left after splitting `rows`
/// on `attribute`.
/// Each non-empty partition `k` adds
/// `(pk + nk) / (p + n) * B(pk / (pk + nk))`;
/// an empty partition adds nothing.
pub fn remainder(
    sample: &Sample,
    rows: &[usize],
    attribute: usize,
    p: usize,
    n: usize,
    positive: &PositiveClass,
) -> f64
{
    let feature = &sample.features()[attribute];
    let target = sample.target();

    // (pk, nk) for each value of the domain.
    let mut counts = vec![(0_usize, 0_usize); feature.attribute().len()];
    for &i in rows {
        let slot = &mut counts[feature[i]];
        if positive.contains(target[i]) {
            slot.0 += 1;
        } else {
            slot.1 += 1;
        }
    }

    let total = (p + n) as f64;
    counts.into_iter()
        .filter(|(pk, nk)| pk + nk > 0)
        .map(|(pk, nk)| {
            let size = (pk + nk) as f64;
            size / total * binary_entropy(pk as f64 / size)
        })
        .sum::<f64>()
}


/// Returns the information gain of splitting `rows` on `attribute`,
/// relative to the baseline counts `(p, n)`.
/// The caller guarantees `p + n > 0`.
pub fn gain(
    sample: &Sample,
    rows: &[usize],
    attribute: usize,
    p: usize,
    n: usize,
    positive: &PositiveClass,
) -> f64
{
    debug_assert!(p + n > 0, "gain is undefined over an empty baseline");
    let baseline = binary_entropy(p as f64 / (p + n) as f64);
    baseline - remainder(sample, rows, attribute, p, n, positive)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, Example};
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    // attr1 ∧ attr2 => A
    fn conjunction() -> Sample {
        let attributes = vec![
            Attribute::new("attr1", ["True", "False"]).unwrap(),
            Attribute::new("attr2", ["True", "False"]).unwrap(),
        ];
        let mut sample = Sample::new(attributes, ["B", "A"]).unwrap();
        sample.extend([
            Example::new(["True",  "True"],  "A"),
            Example::new(["True",  "False"], "B"),
            Example::new(["False", "True"],  "B"),
            Example::new(["False", "False"], "B"),
        ]).unwrap();
        sample
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 0.0)]
    #[case(0.5, 1.0)]
    #[case(0.25, 0.8112781244591328)]
    fn test_binary_entropy(#[case] q: f64, #[case] exp: f64) {
        let res = binary_entropy(q);
        assert!((exp - res).abs() < TOLERANCE, "expected {exp}, got {res}.");
    }

    #[test]
    fn test_entropy_uniform() {
        let res = entropy(&[0.25; 4]);
        assert!((2.0 - res).abs() < TOLERANCE, "expected 2, got {res}.");
    }

    #[test]
    fn test_entropy_zero_weight() {
        let res = entropy(&[0.5, 0.0, 0.5]);
        assert!((1.0 - res).abs() < TOLERANCE, "expected 1, got {res}.");
        assert!(res.is_finite());
    }

    #[test]
    fn test_positive_negative_count() {
        let sample = conjunction();
        let pos = PositiveClass::new(&sample, ["A"]).unwrap();
        let res = positive_negative_count(&sample, &[0, 1, 2, 3], &pos);
        assert_eq!((1, 3), res, "expected (1, 3), got {res:?}.");

        let res = positive_negative_count(&sample, &[], &pos);
        assert_eq!((0, 0), res, "expected (0, 0), got {res:?}.");
    }

    #[test]
    fn test_remainder_and_gain() {
        let sample = conjunction();
        let pos = PositiveClass::new(&sample, ["A"]).unwrap();
        let rows = [0, 1, 2, 3];

        // attr1 = True holds one A and one B, attr1 = False is pure.
        let res = remainder(&sample, &rows, 0, 1, 3, &pos);
        assert!((0.5 - res).abs() < TOLERANCE, "expected 0.5, got {res}.");

        let exp = binary_entropy(0.25) - 0.5;
        let res = gain(&sample, &rows, 0, 1, 3, &pos);
        assert!((exp - res).abs() < TOLERANCE, "expected {exp}, got {res}.");
    }

    #[test]
    fn test_remainder_with_parent_baseline() {
        let sample = conjunction();
        let pos = PositiveClass::new(&sample, ["A"]).unwrap();

        // Rows with attr1 = True split perfectly on attr2,
        // measured against the counts of the whole sample.
        let res = remainder(&sample, &[0, 1], 1, 1, 3, &pos);
        assert!(res.abs() < TOLERANCE, "expected 0, got {res}.");

        let exp = binary_entropy(0.25);
        let res = gain(&sample, &[0, 1], 1, 1, 3, &pos);
        assert!((exp - res).abs() < TOLERANCE, "expected {exp}, got {res}.");
    }

    #[test]
    fn test_remainder_empty_partition() {
        let sample = conjunction();
        let pos = PositiveClass::new(&sample, ["A"]).unwrap();

        // No row has attr2 = False; that partition contributes nothing.
        let res = remainder(&sample, &[0, 2], 1, 1, 1, &pos);
        assert!((1.0 - res).abs() < TOLERANCE, "expected 1, got {res}.");
    }
}
