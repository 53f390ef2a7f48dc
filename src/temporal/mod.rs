//! Date parsing for Series, DataFrames and value lists
//!
//! [`to_datetime`] replaces every string cell with the moment it names and
//! keeps the shape of its argument.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::dataframe::{ApplyExt, DataFrame};
use crate::series::Series;

/// Formats tried, in order, after RFC 3339
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse one string into a naive UTC datetime
///
/// ```
/// use tabrs::temporal::parse_datetime;
///
/// let dt = parse_datetime("2017-03-04 05:06:07").unwrap();
/// assert_eq!(dt.to_string(), "2017-03-04 05:06:07");
/// assert!(parse_datetime("yesterday").is_err());
/// ```
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::InvalidInput(format!("Unable to parse datetime: {}", s)))
}

/// Convert one cell; datetimes and nulls pass through
fn convert(value: &Scalar) -> Result<Scalar> {
    match value {
        Scalar::Str(s) => parse_datetime(s).map(Scalar::DateTime),
        Scalar::DateTime(_) | Scalar::Null => Ok(value.clone()),
        other => Err(Error::Type(format!(
            "cannot convert {} value to datetime",
            other.type_name()
        ))),
    }
}

/// Things [`to_datetime`] accepts
pub trait ToDatetime {
    type Output;

    fn to_datetime(&self) -> Result<Self::Output>;
}

impl ToDatetime for Series {
    type Output = Series;

    fn to_datetime(&self) -> Result<Series> {
        self.try_map(|value, _| convert(value))
    }
}

impl ToDatetime for DataFrame {
    type Output = DataFrame;

    fn to_datetime(&self) -> Result<DataFrame> {
        self.applymap(convert)
    }
}

impl ToDatetime for [Scalar] {
    type Output = Vec<Scalar>;

    fn to_datetime(&self) -> Result<Vec<Scalar>> {
        self.iter().map(convert).collect()
    }
}

impl ToDatetime for Scalar {
    type Output = Scalar;

    fn to_datetime(&self) -> Result<Scalar> {
        convert(self)
    }
}

impl ToDatetime for str {
    type Output = NaiveDateTime;

    fn to_datetime(&self) -> Result<NaiveDateTime> {
        parse_datetime(self)
    }
}

/// Parse the string leaves of a Series, DataFrame, value list or string
pub fn to_datetime<T: ToDatetime + ?Sized>(arg: &T) -> Result<T::Output> {
    arg.to_datetime()
}
