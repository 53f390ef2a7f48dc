use std::str::FromStr;

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::series::Series;

/// JSON layouts for a Series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesOrient {
    /// `[value, ...]`
    Records,
    /// `{"index": [...], "name": ..., "values": [...]}`
    Split,
    /// `{label: value, ...}`
    #[default]
    Index,
}

impl FromStr for SeriesOrient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "records" => Ok(SeriesOrient::Records),
            "split" => Ok(SeriesOrient::Split),
            "index" => Ok(SeriesOrient::Index),
            other => Err(Error::Type(format!(
                "orient must be in records,split,index, got '{}'",
                other
            ))),
        }
    }
}

/// Values found under one label in each of two aligned Series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesAlignment {
    pub first: Vec<Scalar>,
    pub second: Vec<Scalar>,
}

impl Series {
    /// Plain JSON view of the Series in the requested layout
    pub fn to_json(&self, orient: SeriesOrient) -> Value {
        match orient {
            SeriesOrient::Records => Value::Array(self.iter().map(Scalar::to_json).collect()),
            SeriesOrient::Split => json!({
                "index": self.index().iter().map(Scalar::to_json).collect::<Vec<_>>(),
                "name": self.name().to_json(),
                "values": self.iter().map(Scalar::to_json).collect::<Vec<_>>(),
            }),
            SeriesOrient::Index => {
                let mut map = Map::with_capacity(self.len());
                for (label, value) in self.index().iter().zip(self.iter()) {
                    map.insert(label.to_string(), value.to_json());
                }
                Value::Object(map)
            }
        }
    }

    /// Group the values of both Series by label.
    ///
    /// Every label appearing in either index gets an entry, in order of
    /// first appearance (this Series first). A label present on one side
    /// only has an empty bucket on the other side; repeated labels collect
    /// several values.
    pub fn align(&self, other: &Series) -> IndexMap<Scalar, SeriesAlignment> {
        let mut alignment: IndexMap<Scalar, SeriesAlignment> = IndexMap::new();

        for (label, value) in self.index().iter().zip(self.iter()) {
            alignment
                .entry(label.clone())
                .or_default()
                .first
                .push(value.clone());
        }
        for (label, value) in other.index().iter().zip(other.iter()) {
            alignment
                .entry(label.clone())
                .or_default()
                .second
                .push(value.clone());
        }

        alignment
    }
}
