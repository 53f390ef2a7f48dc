//! Shifts, differences and running aggregates

use crate::core::data_value::{ArithmeticOp, Scalar};
use crate::core::error::{Error, Result};
use crate::series::functions::{cumulative, CumulativeOp};
use crate::series::Series;

impl Series {
    /// Move values by `periods` positions, filling the gap with nulls.
    ///
    /// Positive periods shift towards the end, negative towards the start.
    /// The index stays in place.
    pub fn shift(&self, periods: i64) -> Result<Series> {
        let len = self.len();
        let amount = periods.unsigned_abs() as usize;
        if amount > len {
            return Err(Error::InvalidInput(format!(
                "Periods {} greater than length of Series ({})",
                periods, len
            )));
        }

        let values = self.values();
        let shifted: Vec<Scalar> = if periods == 0 {
            values.to_vec()
        } else if periods > 0 {
            std::iter::repeat(Scalar::Null)
                .take(amount)
                .chain(values[..len - amount].iter().cloned())
                .collect()
        } else {
            values[amount..]
                .iter()
                .cloned()
                .chain(std::iter::repeat(Scalar::Null).take(amount))
                .collect()
        };

        Ok(self.with_values(shifted))
    }

    /// `v[i] - v[i - periods]`; the first `periods` entries are null
    pub fn diff(&self, periods: i64) -> Result<Series> {
        self.lagged(periods, |current, previous| {
            current.binary_op(previous, ArithmeticOp::Sub)
        })
    }

    /// `v[i] / v[i - periods] - 1`; the first `periods` entries are null
    pub fn pct_change(&self, periods: i64) -> Result<Series> {
        self.lagged(periods, |current, previous| {
            current
                .binary_op(previous, ArithmeticOp::Div)?
                .binary_op(&Scalar::Int(1), ArithmeticOp::Sub)
        })
    }

    fn lagged<F>(&self, periods: i64, func: F) -> Result<Series>
    where
        F: Fn(&Scalar, &Scalar) -> Result<Scalar>,
    {
        let lag = positive_periods(periods)?;
        let values = self.values();

        let mut out = Vec::with_capacity(values.len());
        for i in 0..values.len() {
            if i < lag {
                out.push(Scalar::Null);
            } else {
                out.push(func(&values[i], &values[i - lag])?);
            }
        }
        Ok(self.with_values(out))
    }

    pub(crate) fn cumulative_op(&self, op: CumulativeOp) -> Result<Series> {
        Ok(self.with_values(cumulative(self.values(), op)?))
    }

    /// Running sum
    pub fn cumsum(&self) -> Result<Series> {
        self.cumulative_op(CumulativeOp::Sum)
    }

    /// Running product
    pub fn cummul(&self) -> Result<Series> {
        self.cumulative_op(CumulativeOp::Mul)
    }

    pub fn cummax(&self) -> Result<Series> {
        self.cumulative_op(CumulativeOp::Max)
    }

    pub fn cummin(&self) -> Result<Series> {
        self.cumulative_op(CumulativeOp::Min)
    }
}

/// Validate a `periods` argument for `diff`/`pct_change`
pub(crate) fn positive_periods(periods: i64) -> Result<usize> {
    if periods <= 0 {
        return Err(Error::InvalidInput(format!(
            "periods must be positive, got {}",
            periods
        )));
    }
    Ok(periods as usize)
}
