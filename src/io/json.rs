use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::dataframe::{DataFrame, FrameOrient, Record};

/// Read a JSON array of records from a file
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    read_json_from(BufReader::new(file))
}

/// Read a JSON array of records (`[{"col": value, ...}, ...]`)
pub fn read_json_from<R: Read>(reader: R) -> Result<DataFrame> {
    let value: Value = serde_json::from_reader(reader)?;
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(Error::Type(format!(
                "expected an array of records, got {}",
                json_kind(&other)
            )))
        }
    };

    let records = rows
        .iter()
        .map(|row| match row {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(k, v)| (Scalar::from(k.as_str()), Scalar::from_json(v)))
                .collect::<Record>()),
            other => Err(Error::Type(format!(
                "expected a record object, got {}",
                json_kind(other)
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    DataFrame::from_records(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Write a DataFrame to a JSON file
pub fn write_json<P: AsRef<Path>>(df: &DataFrame, path: P, orient: FrameOrient) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_json_to(df, BufWriter::new(file), orient)
}

/// Write a DataFrame as pretty printed JSON to any writer
pub fn write_json_to<W: Write>(df: &DataFrame, mut writer: W, orient: FrameOrient) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &df.to_json(orient))?;
    writer.flush()?;
    Ok(())
}
