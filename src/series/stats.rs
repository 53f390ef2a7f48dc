//! Statistical reductions for Series

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::series::functions::common_functions;
use crate::series::Series;

impl Series {
    /// Values as `f64`, with nulls read as NaN
    pub fn as_f64(&self) -> Result<Vec<f64>> {
        numeric_values(self.values())
    }

    pub fn sum(&self) -> Result<f64> {
        Ok(common_functions::sum(&self.as_f64()?))
    }

    pub fn mean(&self) -> Result<f64> {
        Ok(common_functions::mean(&self.as_f64()?))
    }

    /// Middle value, or the average of the two middle values
    pub fn median(&self) -> Result<f64> {
        Ok(common_functions::median(&self.as_f64()?))
    }

    /// Sample variance
    pub fn variance(&self) -> Result<f64> {
        Ok(common_functions::variance(&self.as_f64()?))
    }

    /// Sample standard deviation
    pub fn std(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }

    /// Sample covariance with another Series of the same length
    pub fn cov(&self, other: &Series) -> Result<f64> {
        check_same_len(self, other)?;
        Ok(common_functions::covariance(
            &self.as_f64()?,
            &other.as_f64()?,
        ))
    }

    /// Pearson correlation with another Series of the same length
    pub fn corr(&self, other: &Series) -> Result<f64> {
        check_same_len(self, other)?;
        Ok(self.cov(other)? / (self.std()? * other.std()?))
    }
}

fn check_same_len(first: &Series, second: &Series) -> Result<()> {
    if first.len() != second.len() {
        return Err(Error::LengthMismatch {
            expected: first.len(),
            actual: second.len(),
        });
    }
    Ok(())
}

/// Numeric view of a row or column; strings and objects are rejected
fn numeric_values(values: &[Scalar]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|v| match v {
            Scalar::Null => Ok(f64::NAN),
            other => other.as_f64().ok_or_else(|| {
                Error::Type(format!("cannot reduce {} value '{}'", other.type_name(), other))
            }),
        })
        .collect()
}
