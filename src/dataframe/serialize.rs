use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use serde_json::{json, Map, Value};

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::dataframe::base::DataFrame;
use crate::series::SeriesOrient;

/// JSON layouts for a DataFrame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameOrient {
    /// `[{column: value, ...}, ...]`, one object per row
    Records,
    /// `{"index": [...], "columns": [...], "values": [[...], ...]}`
    Split,
    /// `{label: {column: value, ...}, ...}`
    Index,
    /// `[[...], ...]`, row-major
    Values,
    /// `{column: {label: value, ...}, ...}`
    #[default]
    Columns,
}

impl FromStr for FrameOrient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "records" => Ok(FrameOrient::Records),
            "split" => Ok(FrameOrient::Split),
            "index" => Ok(FrameOrient::Index),
            "values" => Ok(FrameOrient::Values),
            "columns" => Ok(FrameOrient::Columns),
            other => Err(Error::Type(format!(
                "orient must be in records,split,index,values,columns, got '{}'",
                other
            ))),
        }
    }
}

fn json_array(values: &[Scalar]) -> Value {
    Value::Array(values.iter().map(Scalar::to_json).collect())
}

impl DataFrame {
    fn row_object(&self, row: &[Scalar]) -> Value {
        let mut object = Map::with_capacity(row.len());
        for (name, value) in self.iter().map(|(name, _)| name).zip(row) {
            object.insert(name.to_string(), value.to_json());
        }
        Value::Object(object)
    }

    /// Plain JSON view of the DataFrame in the requested layout
    pub fn to_json(&self, orient: FrameOrient) -> Value {
        match orient {
            FrameOrient::Records => Value::Array(
                self.values()
                    .iter()
                    .map(|row| self.row_object(row))
                    .collect(),
            ),
            FrameOrient::Split => json!({
                "index": json_array(self.index().values()),
                "columns": json_array(&self.column_names()),
                "values": self.values().iter().map(|row| json_array(row)).collect::<Vec<_>>(),
            }),
            FrameOrient::Index => {
                let mut object = Map::with_capacity(self.row_count());
                for (label, row) in self.index().iter().zip(self.values()) {
                    object.insert(label.to_string(), self.row_object(&row));
                }
                Value::Object(object)
            }
            FrameOrient::Values => {
                Value::Array(self.values().iter().map(|row| json_array(row)).collect())
            }
            FrameOrient::Columns => {
                let mut object = Map::with_capacity(self.column_count());
                for (name, series) in self.iter() {
                    object.insert(name.to_string(), series.to_json(SeriesOrient::Index));
                }
                Value::Object(object)
            }
        }
    }

    /// Render as comma separated text.
    ///
    /// Every line, header included, ends in `,\r\n`. Values are written
    /// with their `Display` form and are not quoted or escaped; use
    /// [`crate::io::write_csv`] when cells may contain commas or quotes.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for name in self.column_names() {
            let _ = write!(out, "{},", name);
        }
        out.push_str("\r\n");

        for row in self.values() {
            for value in &row {
                let _ = write!(out, "{},", value);
            }
            out.push_str("\r\n");
        }
        out
    }

    /// Spreadsheet export is not supported
    pub fn to_excel(&self, _path: impl AsRef<Path>, _sheet_name: &str) -> Result<()> {
        Err(Error::NotImplemented("to_excel".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_csv_has_trailing_commas() {
        let df = DataFrame::from_records(vec![
            record! { "a" => 1, "b" => "x" },
            record! { "a" => 2 },
        ])
        .unwrap();
        assert_eq!(df.to_csv(), "a,b,\r\n1,x,\r\n2,null,\r\n");
    }

    #[test]
    fn test_split_orient() {
        let df = DataFrame::from_records(vec![record! { "a" => 1, "b" => 2.5 }]).unwrap();
        assert_eq!(
            df.to_json(FrameOrient::Split),
            json!({"index": [0], "columns": ["a", "b"], "values": [[1, 2.5]]})
        );
        assert!("table".parse::<FrameOrient>().is_err());
    }
}
