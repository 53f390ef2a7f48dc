use tabrs::{concat, record, ConcatOptions, DataFrame, Error, IndexTrait, NDObject, Scalar, Series};

fn ints(values: &[i64]) -> Vec<Scalar> {
    values.iter().map(|&v| Scalar::Int(v)).collect()
}

#[test]
fn test_concat_series() {
    let ds1 = Series::new(vec![1, 2, 3, 4], Some("first".to_string())).unwrap();
    let ds2 = Series::new(vec![2, 3, 4, 5], Some("second".to_string())).unwrap();
    let objs: Vec<NDObject> = vec![(&ds1).into(), (&ds2).into()];

    let kept = concat(&objs, ConcatOptions::default())
        .unwrap()
        .into_series()
        .unwrap();
    assert_eq!(kept.index().get_values(), ints(&[0, 1, 2, 3, 0, 1, 2, 3]));
    assert_eq!(kept.name(), &Scalar::from("first"));

    let renumbered = concat(
        &objs,
        ConcatOptions {
            ignore_index: true,
            axis: 0,
        },
    )
    .unwrap()
    .into_series()
    .unwrap();
    assert_eq!(renumbered.index().get_values(), ints(&[0, 1, 2, 3, 4, 5, 6, 7]));
    assert_eq!(renumbered.values(), ints(&[1, 2, 3, 4, 2, 3, 4, 5]).as_slice());
}

#[test]
fn test_concat_rejects_bad_input() {
    let series = Series::new(vec![1], None).unwrap();
    let frame = DataFrame::from_records(vec![record! { "a" => 1 }]).unwrap();

    assert!(matches!(
        concat(&[], ConcatOptions::default()),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        concat(&[(&series).into(), (&frame).into()], ConcatOptions::default()),
        Err(Error::Type(_))
    ));
    assert!(matches!(
        concat(
            &[(&frame).into(), (&frame).into()],
            ConcatOptions {
                ignore_index: false,
                axis: 2
            }
        ),
        Err(Error::InvalidAxis(2))
    ));
}

#[test]
fn test_concat_kind_must_match_request() {
    let series = Series::new(vec![1], None).unwrap();
    let result = concat(&[(&series).into()], ConcatOptions::default()).unwrap();
    assert!(result.into_frame().is_err());
}

#[test]
fn test_concat_frames_by_rows() {
    let df1 = DataFrame::from_records(vec![
        record! { "a" => 1, "b" => "x" },
        record! { "a" => 2, "b" => "y" },
    ])
    .unwrap();
    let df2 = DataFrame::from_records(vec![record! { "a" => 3 }]).unwrap();

    let stacked = concat(&[(&df1).into(), (&df2).into()], ConcatOptions::default())
        .unwrap()
        .into_frame()
        .unwrap();
    assert_eq!(stacked.row_count(), 3);
    assert_eq!(stacked.index().get_values(), ints(&[0, 1, 0]));
    assert_eq!(stacked.get("a").unwrap().to_vec(), ints(&[1, 2, 3]));

    let b = stacked.get("b").unwrap().to_vec();
    assert_eq!(b[0], Scalar::from("x"));
    assert!(b[2].is_nan());
}

#[test]
fn test_concat_single_frame_is_a_copy() {
    let df = DataFrame::from_records(vec![record! { "a" => 1 }]).unwrap();
    let out = concat(&[(&df).into()], ConcatOptions::default())
        .unwrap()
        .into_frame()
        .unwrap();
    assert_eq!(out, df);
}

#[test]
fn test_concat_frames_side_by_side() {
    let df1 = DataFrame::from_records(vec![
        record! { "a" => 1, "b" => 2 },
        record! { "a" => 3, "b" => 4 },
    ])
    .unwrap();
    let df2 = DataFrame::from_records(vec![
        record! { "b" => 20, "c" => 30 },
        record! { "b" => 40, "c" => 50 },
    ])
    .unwrap();
    let options = ConcatOptions {
        ignore_index: false,
        axis: 1,
    };

    let wide = concat(&[(&df1).into(), (&df2).into()], options)
        .unwrap()
        .into_frame()
        .unwrap();
    assert_eq!(
        wide.column_names(),
        vec![
            Scalar::from("a"),
            Scalar::from("b"),
            Scalar::from("b.x"),
            Scalar::from("c")
        ]
    );
    assert_eq!(wide.get("b").unwrap().to_vec(), ints(&[2, 4]));
    assert_eq!(wide.get("b.x").unwrap().to_vec(), ints(&[20, 40]));

    let short = DataFrame::from_records(vec![record! { "d" => 1 }]).unwrap();
    assert!(matches!(
        concat(&[(&df1).into(), (&short).into()], options),
        Err(Error::IndexMismatch { .. })
    ));
}
