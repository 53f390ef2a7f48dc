use std::fs;

use tabrs::io::{read_csv, read_json, read_json_from, write_csv, write_json};
use tabrs::{record, DataFrame, Error, FrameOrient, Scalar};
use tempfile::tempdir;

fn sample() -> DataFrame {
    DataFrame::from_records(vec![
        record! { "name" => "alice", "score" => 1.5 },
        record! { "name" => "bob", "score" => Scalar::Null },
    ])
    .unwrap()
}

#[test]
fn test_write_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&sample(), &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "name,score\nalice,1.5\nbob,\n");
}

#[test]
fn test_read_csv_not_implemented() {
    assert!(matches!(read_csv("in.csv"), Err(Error::NotImplemented(_))));
}

#[test]
fn test_json_file_round_trip_of_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let df = sample();
    write_json(&df, &path, FrameOrient::Records).unwrap();
    let loaded = read_json(&path).unwrap();

    assert_eq!(loaded.column_names(), df.column_names());
    assert_eq!(loaded.get("name").unwrap().to_vec(), df.get("name").unwrap().to_vec());
    assert_eq!(
        loaded.get("score").unwrap().to_vec(),
        vec![Scalar::Float(1.5), Scalar::Null]
    );
}

#[test]
fn test_read_json_with_missing_keys() {
    let input = r#"[{"a": 1, "b": "x"}, {"a": 2}]"#;
    let df = read_json_from(input.as_bytes()).unwrap();
    assert_eq!(df.row_count(), 2);
    assert_eq!(
        df.get("b").unwrap().to_vec(),
        vec![Scalar::from("x"), Scalar::Null]
    );
}

#[test]
fn test_read_json_rejects_other_shapes() {
    assert!(matches!(
        read_json_from(r#"{"a": [1, 2]}"#.as_bytes()),
        Err(Error::Type(_))
    ));
    assert!(matches!(
        read_json_from("[1, 2]".as_bytes()),
        Err(Error::Type(_))
    ));
    assert!(matches!(
        read_json_from("not json".as_bytes()),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        read_json(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));
}
