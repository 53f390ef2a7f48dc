use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};

/// Element type classification of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Int,
    Float,
    Object,
    Bool,
    DateTime,
}

impl DType {
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int => "int",
            DType::Float => "float",
            DType::Object => "object",
            DType::Bool => "bool",
            DType::DateTime => "datetime",
        }
    }

    /// Whether scanning may continue past an element of this dtype
    fn keeps_scanning(&self) -> bool {
        matches!(self, DType::Int | DType::Float | DType::DateTime)
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int" => Ok(DType::Int),
            "float" => Ok(DType::Float),
            "object" => Ok(DType::Object),
            "bool" => Ok(DType::Bool),
            "datetime" => Ok(DType::DateTime),
            other => Err(Error::Type(format!("'{}' is not a valid dtype", other))),
        }
    }
}

/// Classify a single element
pub fn element_to_dtype(value: &Scalar) -> DType {
    match value {
        Scalar::Str(_) | Scalar::Null | Scalar::Object(_) => DType::Object,
        Scalar::Float(_) => DType::Float,
        Scalar::Bool(_) => DType::Bool,
        Scalar::DateTime(_) => DType::DateTime,
        Scalar::Int(_) => DType::Int,
    }
}

/// Infer the dtype of a sequence of values.
///
/// The dtype of the most recently scanned element wins; the scan stops at
/// the first element whose dtype is not int, float or datetime. So
/// `[1, 2, "hi"]` and `["hi", 1, 2]` are both object, while `[1.5, 2]`
/// is int. An empty sequence is object.
pub fn array_to_dtype<'a, I>(values: I) -> DType
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let mut dtype = DType::Object;
    for value in values {
        dtype = element_to_dtype(value);
        if !dtype.keeps_scanning() {
            break;
        }
    }
    dtype
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_matters() {
        let trailing = vec![Scalar::Int(1), Scalar::Int(2), Scalar::from("hi")];
        assert_eq!(array_to_dtype(&trailing), DType::Object);

        let bool_first = vec![Scalar::Bool(true), Scalar::Int(2)];
        assert_eq!(array_to_dtype(&bool_first), DType::Bool);

        let last_wins = vec![Scalar::Float(1.5), Scalar::Int(2)];
        assert_eq!(array_to_dtype(&last_wins), DType::Int);
    }

    #[test]
    fn test_parse_dtype_name() {
        assert_eq!("datetime".parse::<DType>().unwrap(), DType::DateTime);
        assert!("decimal".parse::<DType>().is_err());
    }
}
