use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use log::debug;

use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;

/// Read a CSV file into a DataFrame; not supported
pub fn read_csv<P: AsRef<Path>>(_path: P) -> Result<DataFrame> {
    Err(Error::NotImplemented("read_csv".to_string()))
}

/// Write a DataFrame to a CSV file
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv_to(df, file)
}

/// Write a DataFrame as CSV to any writer.
///
/// Unlike [`DataFrame::to_csv`], cells containing separators, quotes or
/// line breaks are quoted. Nulls are written as empty fields.
pub fn write_csv_to<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(df.column_names().iter().map(|name| name.to_string()))?;

    for row in df.values() {
        wtr.write_record(row.iter().map(|value| {
            if value.is_null() {
                String::new()
            } else {
                value.to_string()
            }
        }))?;
    }

    wtr.flush()?;
    debug!("wrote {} CSV rows", df.row_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_write_csv_quotes_separators() {
        let df = DataFrame::from_records(vec![
            record! { "name" => "a,b", "n" => 1 },
            record! { "name" => "say \"hi\"" },
        ])
        .unwrap();

        let mut buf = Vec::new();
        write_csv_to(&df, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "name,n\n\"a,b\",1\n\"say \"\"hi\"\"\",\n");
    }
}
