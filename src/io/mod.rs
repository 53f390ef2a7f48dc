//! File collaborators: CSV and JSON export, JSON record import

pub mod csv;
pub mod json;

// Re-export commonly used functions
pub use csv::{read_csv, write_csv, write_csv_to};
pub use json::{read_json, read_json_from, write_json, write_json_to};
