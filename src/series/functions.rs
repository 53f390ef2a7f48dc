use std::cmp::Ordering;

use num_traits::Float;

use crate::core::data_value::{ArithmeticOp, Scalar};
use crate::core::error::{Error, Result};

/// Common numeric reductions shared by Series and DataFrame
pub mod common_functions {
    use super::*;

    /// Sum of the values; zero for an empty slice
    pub fn sum<T: Float>(values: &[T]) -> T {
        values.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Arithmetic mean; NaN for an empty slice
    pub fn mean<T: Float>(values: &[T]) -> T {
        match T::from(values.len()) {
            Some(n) if !values.is_empty() => sum(values) / n,
            _ => T::nan(),
        }
    }

    /// Median of the values sorted numerically; NaN sorts last
    pub fn median<T: Float>(values: &[T]) -> T {
        if values.is_empty() {
            return T::nan();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        });

        let half = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[half]
        } else {
            let two = T::one() + T::one();
            (sorted[half - 1] + sorted[half]) / two
        }
    }

    /// Sample variance (`n - 1` denominator), computed in two passes
    pub fn variance<T: Float>(values: &[T]) -> T {
        let m = mean(values);
        let denom = match T::from(values.len()) {
            Some(n) => n - T::one(),
            None => return T::nan(),
        };
        values.iter().fold(T::zero(), |acc, &v| {
            let diff = v - m;
            acc + diff * diff / denom
        })
    }

    /// Sample covariance using Welford's single-pass update
    pub fn covariance<T: Float>(first: &[T], second: &[T]) -> T {
        let mut n = T::zero();
        let mut mean1 = T::zero();
        let mut mean2 = T::zero();
        let mut m12 = T::zero();

        for (&v1, &v2) in first.iter().zip(second) {
            n = n + T::one();
            let d1 = (v1 - mean1) / n;
            mean1 = mean1 + d1;
            let d2 = (v2 - mean2) / n;
            mean2 = mean2 + d2;
            m12 = m12 + (n - T::one()) * d1 * d2 - m12 / n;
        }

        n / (n - T::one()) * m12
    }
}

/// Round half away from zero at `decimals` digits.
///
/// The value is shifted by editing its decimal exponent rather than by
/// multiplying, so `1.005` rounds to `1.01` at two digits.
pub fn round10(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted: f64 = match format!("{}e{}", value, decimals).parse() {
        Ok(v) => v,
        Err(_) => return value,
    };
    let rounded = shifted.round();
    format!("{}e{}", rounded, -decimals)
        .parse()
        .unwrap_or(value)
}

/// Running aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CumulativeOp {
    Sum,
    Mul,
    Max,
    Min,
}

impl CumulativeOp {
    fn identity(&self) -> Scalar {
        match self {
            CumulativeOp::Sum => Scalar::Int(0),
            CumulativeOp::Mul => Scalar::Int(1),
            CumulativeOp::Max => Scalar::Float(f64::NEG_INFINITY),
            CumulativeOp::Min => Scalar::Float(f64::INFINITY),
        }
    }

    fn step(&self, acc: &Scalar, value: &Scalar) -> Result<Scalar> {
        match self {
            CumulativeOp::Sum => acc.binary_op(value, ArithmeticOp::Add),
            CumulativeOp::Mul => acc.binary_op(value, ArithmeticOp::Mul),
            CumulativeOp::Max => Ok(pick(acc, value, Ordering::Greater)),
            CumulativeOp::Min => Ok(pick(acc, value, Ordering::Less)),
        }
    }
}

fn pick(acc: &Scalar, value: &Scalar, wins: Ordering) -> Scalar {
    if value.compare(acc) == Some(wins) {
        value.clone()
    } else {
        acc.clone()
    }
}

/// Left-to-right running aggregate of `values`.
///
/// Null positions stay null and leave the aggregate untouched. Values that
/// are not numbers are rejected.
pub fn cumulative(values: &[Scalar], op: CumulativeOp) -> Result<Vec<Scalar>> {
    let mut acc = op.identity();
    let mut out = Vec::with_capacity(values.len());

    for value in values {
        if value.is_null() {
            out.push(Scalar::Null);
            continue;
        }
        if value.as_f64().is_none() {
            return Err(Error::Type(format!(
                "cumulative {:?} does not support {} values",
                op,
                value.type_name()
            )));
        }
        acc = op.step(&acc, value)?;
        out.push(acc.clone());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::common_functions::*;
    use super::*;

    #[test]
    fn test_round10_avoids_float_artifacts() {
        assert_eq!(round10(1.005, 2), 1.01);
        assert_eq!(round10(1.14, 1), 1.1);
        assert_eq!(round10(1.146, 2), 1.15);
        assert_eq!(round10(-2.5, 0), -3.0);
    }

    #[test]
    fn test_median_sorts_numerically() {
        assert_eq!(median(&[10.0, 9.0, 100.0]), 10.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_cumulative_skips_nulls() {
        let values = vec![Scalar::Int(2), Scalar::Null, Scalar::Int(3)];
        let out = cumulative(&values, CumulativeOp::Mul).unwrap();
        assert_eq!(out, vec![Scalar::Int(2), Scalar::Null, Scalar::Int(6)]);
    }
}
