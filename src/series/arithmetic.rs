//! Elementwise arithmetic and comparisons for Series

use std::cmp::Ordering;

use crate::core::data_value::{ArithmeticOp, Scalar};
use crate::core::dtype::DType;
use crate::core::error::Result;
use crate::series::functions::round10;
use crate::series::operand::Operand;
use crate::series::Series;

impl Series {
    fn combine(&self, other: Operand<'_>, op: ArithmeticOp) -> Result<Series> {
        let other = other.one_dimensional(op.name())?;
        other.check_len(self.len())?;

        let values = self
            .values()
            .iter()
            .enumerate()
            .map(|(i, v)| v.binary_op(other.at(i), op))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_values(values))
    }

    /// Add a number, sequence or Series, position by position
    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.combine(other.into(), ArithmeticOp::Add)
    }

    pub fn sub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.combine(other.into(), ArithmeticOp::Sub)
    }

    pub fn mul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.combine(other.into(), ArithmeticOp::Mul)
    }

    /// Alias of [`Series::mul`]
    pub fn multiply<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.mul(other)
    }

    /// Division always produces floats
    pub fn div<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.combine(other.into(), ArithmeticOp::Div)
    }

    /// Alias of [`Series::div`]
    pub fn divide<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.div(other)
    }

    /// Evaluate `predicate(value, other_value)` at every position.
    ///
    /// The result is a boolean Series with this Series' name and index.
    pub fn where_<'a, F>(&self, other: impl Into<Operand<'a>>, predicate: F) -> Result<Series>
    where
        F: Fn(&Scalar, &Scalar) -> bool,
    {
        let other = other.into().one_dimensional("where")?;
        other.check_len(self.len())?;

        Ok(self.with_values(
            self.values()
                .iter()
                .enumerate()
                .map(|(i, v)| Scalar::Bool(predicate(v, other.at(i))))
                .collect(),
        ))
    }

    /// Strict equality; `NaN` never equals anything
    pub fn eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.where_(other, |a, b| a.strict_eq(b))
    }

    pub fn lt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.where_(other, |a, b| a.compare(b) == Some(Ordering::Less))
    }

    pub fn lte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.where_(other, |a, b| {
            matches!(a.compare(b), Some(Ordering::Less | Ordering::Equal))
        })
    }

    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.where_(other, |a, b| a.compare(b) == Some(Ordering::Greater))
    }

    pub fn gte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Series> {
        self.where_(other, |a, b| {
            matches!(a.compare(b), Some(Ordering::Greater | Ordering::Equal))
        })
    }

    /// `true` wherever the value is not null
    pub fn notnull(&self) -> Series {
        self.map(|v, _| Scalar::Bool(!v.strict_eq(&Scalar::Null)))
    }

    /// Absolute values; bool and object Series are returned unchanged
    pub fn abs(&self) -> Series {
        if matches!(self.dtype(), DType::Bool | DType::Object) {
            return self.copy();
        }

        self.map(|v, _| match v {
            Scalar::Int(i) => i
                .checked_abs()
                .map(Scalar::Int)
                .unwrap_or(Scalar::Float((*i as f64).abs())),
            Scalar::Float(f) => Scalar::Float(f.abs()),
            other => other.clone(),
        })
    }

    /// Round half away from zero to `decimals` digits
    ///
    /// Negative `decimals` round to tens, hundreds and so on. Values that
    /// are not numbers pass through unchanged.
    pub fn round(&self, decimals: i32) -> Series {
        self.map(|v, _| match v {
            Scalar::Float(f) => Scalar::Float(round10(*f, decimals)),
            Scalar::Int(i) if decimals < 0 => Scalar::Int(round10(*i as f64, decimals) as i64),
            other => other.clone(),
        })
    }
}
