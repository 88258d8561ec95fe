use std::cmp::Ordering;

/// Operations the solvers need on edge weights: a monoid (identity and an
/// associative `combine`) paired with a total order.
///
/// Implementations must satisfy `combine(identity(), x) == x` and must make
/// `compare` a total order. The solvers never touch weights any other way.
pub trait WeightAlgebra<W> {
    /// The neutral element of `combine`.
    fn identity(&self) -> W;

    /// Returns `a ⊕ b`.
    fn combine(&self, a: &W, b: &W) -> W;

    /// Total order over weights.
    fn compare(&self, a: &W, b: &W) -> Ordering;
}

impl<W, A: WeightAlgebra<W> + ?Sized> WeightAlgebra<W> for &A {
    fn identity(&self) -> W {
        (**self).identity()
    }

    fn combine(&self, a: &W, b: &W) -> W {
        (**self).combine(a, b)
    }

    fn compare(&self, a: &W, b: &W) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Sum of a sequence of weights, starting from the identity.
pub fn sum<'a, W: 'a, A, I>(algebra: &A, weights: I) -> W
where
    A: WeightAlgebra<W>,
    I: IntoIterator<Item = &'a W>,
{
    weights
        .into_iter()
        .fold(algebra.identity(), |acc, w| algebra.combine(&acc, w))
}

/// Addition over `f64`, ordered with [`f64::total_cmp`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleWeightOperations;

impl WeightAlgebra<f64> for DoubleWeightOperations {
    fn identity(&self) -> f64 {
        0.0
    }

    fn combine(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

/// Two's-complement wrapping addition over `i64`.
///
/// Wrapping keeps `combine` associative at the bounds, so every summation
/// order gives the same total.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerWeightOperations;

impl WeightAlgebra<i64> for IntegerWeightOperations {
    fn identity(&self) -> i64 {
        0
    }

    fn combine(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_add(*b)
    }

    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }
}
