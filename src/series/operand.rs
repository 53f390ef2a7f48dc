use std::borrow::Cow;

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;
use crate::series::Series;

static NULL: Scalar = Scalar::Null;

/// Right-hand side of an elementwise operation.
///
/// A scalar broadcasts to every position; sequences and Series are zipped
/// by position (never aligned by label) and must match in length.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Scalar(Scalar),
    Values(Cow<'a, [Scalar]>),
    Series(&'a Series),
    Frame(&'a DataFrame),
}

impl<'a> Operand<'a> {
    /// Number of elements, or `None` for a broadcast scalar
    pub fn len(&self) -> Option<usize> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Values(values) => Some(values.len()),
            Operand::Series(series) => Some(series.len()),
            Operand::Frame(frame) => Some(frame.row_count()),
        }
    }

    /// Element paired with position `i`
    pub(crate) fn at(&self, i: usize) -> &Scalar {
        match self {
            Operand::Scalar(value) => value,
            Operand::Values(values) => &values[i],
            Operand::Series(series) => &series.values()[i],
            // frames are split into columns before elementwise use
            Operand::Frame(_) => &NULL,
        }
    }

    /// Fails unless the operand broadcasts or has exactly `len` elements
    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        match self.len() {
            Some(actual) if actual != len => Err(Error::LengthMismatch {
                expected: len,
                actual,
            }),
            _ => Ok(()),
        }
    }

    /// Reject a DataFrame where only one-dimensional operands make sense
    pub(crate) fn one_dimensional(self, op: &str) -> Result<Self> {
        match self {
            Operand::Frame(_) => Err(Error::Type(format!(
                "{} only supports scalars, sequences and Series",
                op
            ))),
            other => Ok(other),
        }
    }
}

macro_rules! impl_operand_from_scalar {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value.into())
                }
            }
        )*
    };
}

impl_operand_from_scalar!(Scalar, i32, i64, u32, usize, f32, f64, bool, &str, String);

impl<'a> From<&'a Series> for Operand<'a> {
    fn from(series: &'a Series) -> Self {
        Operand::Series(series)
    }
}

impl<'a> From<&'a DataFrame> for Operand<'a> {
    fn from(frame: &'a DataFrame) -> Self {
        Operand::Frame(frame)
    }
}

impl<'a> From<&'a [Scalar]> for Operand<'a> {
    fn from(values: &'a [Scalar]) -> Self {
        Operand::Values(Cow::Borrowed(values))
    }
}

impl<'a, T: Into<Scalar>> From<Vec<T>> for Operand<'a> {
    fn from(values: Vec<T>) -> Self {
        Operand::Values(Cow::Owned(values.into_iter().map(Into::into).collect()))
    }
}
