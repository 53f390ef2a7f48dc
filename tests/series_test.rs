use tabrs::series::Series;
use tabrs::{concat, ConcatOptions, DType, Error, Index, IndexTrait, NDFrame, Scalar, SeriesOrient};

fn ints(values: &[i64]) -> Vec<Scalar> {
    values.iter().map(|&v| Scalar::Int(v)).collect()
}

fn assert_close(actual: &[Scalar], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        let a = a.as_f64().unwrap();
        assert!((a - e).abs() < 1e-3, "{} != {}", a, e);
    }
}

#[test]
fn test_series_creation() {
    let series = Series::new(vec![1, 2, 3, 4, 5], Some("test".to_string())).unwrap();
    assert_eq!(series.len(), 5);
    assert_eq!(series.name(), &Scalar::from("test"));
    assert_eq!(series.iloc(0), Some(&Scalar::Int(1)));
    assert_eq!(series.iloc(5), None);
    assert_eq!(series.dtype(), DType::Int);
    assert_eq!(series.index().get_values(), ints(&[0, 1, 2, 3, 4]));
    assert_eq!(series.shape(), vec![5]);
    assert_eq!(series.ndim(), 1);
}

#[test]
fn test_unnamed_series_has_empty_name() {
    let series = Series::new(vec![1.5, 2.5], None).unwrap();
    assert_eq!(series.name(), &Scalar::from(""));
    assert_eq!(series.dtype(), DType::Float);
}

#[test]
fn test_index_length_must_match() {
    for len in 0..4 {
        let data: Vec<i64> = (0..3).collect();
        let result = Series::with_index(data, Index::range(len), None);
        if len == 3 {
            assert!(result.is_ok());
        } else {
            match result {
                Err(Error::IndexMismatch { index_len, data_len }) => {
                    assert_eq!(index_len, len);
                    assert_eq!(data_len, 3);
                }
                other => panic!("expected index mismatch, got {:?}", other),
            }
        }
    }

    let empty: Vec<i64> = Vec::new();
    assert!(Series::with_index(empty.clone(), Index::range(0), None).is_ok());
    assert!(Series::with_index(empty, Index::range(1), None).is_err());
}

#[test]
fn test_set_index_is_validated() {
    let mut series = Series::new(vec![1, 2], None).unwrap();
    assert!(series.set_index(Index::new(vec!["a", "b", "c"])).is_err());
    series.set_index(Index::new(vec!["a", "b"])).unwrap();
    assert_eq!(series.index().get_value(1).unwrap(), Scalar::from("b"));
}

#[test]
fn test_copy_is_independent() {
    let series = Series::new(vec![1, 2, 3], None).unwrap();
    let mut copy = series.copy();
    assert_eq!(copy.to_vec(), series.to_vec());

    copy.set_index(Index::new(vec!["x", "y", "z"])).unwrap();
    assert_eq!(series.index().get_values(), ints(&[0, 1, 2]));
}

#[test]
fn test_arithmetic_by_position() {
    let ds1 = Series::new(vec![1, 2, 3], None).unwrap();
    let ds2 = Series::new(vec![2, 3, 4], None).unwrap();
    assert_eq!(ds1.add(&ds2).unwrap().values(), ints(&[3, 5, 7]).as_slice());

    let ds3 = Series::new(vec![2, 3, 5], None).unwrap();
    assert_eq!(ds1.sub(&ds3).unwrap().values(), ints(&[-1, -1, -2]).as_slice());
    assert_eq!(ds1.mul(&ds3).unwrap().values(), ints(&[2, 6, 15]).as_slice());
    assert_close(ds1.div(&ds3).unwrap().values(), &[0.5, 0.667, 0.6]);

    assert_eq!(ds1.add(10).unwrap().values(), ints(&[11, 12, 13]).as_slice());
    assert_eq!(ds1.multiply(vec![1, 0, 2]).unwrap().values(), ints(&[1, 0, 6]).as_slice());
}

#[test]
fn test_arithmetic_length_mismatch() {
    let ds1 = Series::new(vec![1, 2, 3], None).unwrap();
    let short = Series::new(vec![1, 2], None).unwrap();
    assert!(matches!(ds1.add(&short), Err(Error::LengthMismatch { .. })));
}

#[test]
fn test_arithmetic_with_nulls_and_strings() {
    let values = Series::new(vec![Scalar::Int(1), Scalar::Null], None).unwrap();
    let summed = values.add(1).unwrap();
    assert_eq!(summed.values()[0], Scalar::Int(2));
    assert!(summed.values()[1].is_null());

    let words = Series::new(vec!["a", "b"], None).unwrap();
    assert_eq!(words.add("!").unwrap().values()[1], Scalar::from("b!"));
    assert!(matches!(words.mul(2), Err(Error::Type(_))));
}

#[test]
fn test_comparisons() {
    let series = Series::new(vec![1, 2, 3], None).unwrap();
    let expect = |flags: &[bool]| flags.iter().map(|&b| Scalar::Bool(b)).collect::<Vec<_>>();

    assert_eq!(series.eq(2).unwrap().values(), expect(&[false, true, false]).as_slice());
    assert_eq!(series.lt(2).unwrap().values(), expect(&[true, false, false]).as_slice());
    assert_eq!(series.lte(2).unwrap().values(), expect(&[true, true, false]).as_slice());
    assert_eq!(series.gt(2).unwrap().values(), expect(&[false, false, true]).as_slice());
    assert_eq!(series.gte(vec![0, 3, 3]).unwrap().values(), expect(&[true, false, true]).as_slice());

    let with_nan = Series::new(vec![f64::NAN], None).unwrap();
    assert_eq!(with_nan.eq(f64::NAN).unwrap().values(), expect(&[false]).as_slice());
}

#[test]
fn test_shift() {
    let series = Series::new(vec![2, 2, 3, 4], None).unwrap();
    assert_eq!(series.shift(0).unwrap().values(), series.values());
    assert_eq!(
        series.shift(1).unwrap().values(),
        &[Scalar::Null, Scalar::Int(2), Scalar::Int(2), Scalar::Int(3)]
    );
    assert_eq!(
        series.shift(-1).unwrap().values(),
        &[Scalar::Int(2), Scalar::Int(3), Scalar::Int(4), Scalar::Null]
    );
    assert!(series.shift(5).is_err());
    assert!(series.shift(-5).is_err());
}

#[test]
fn test_diff_and_pct_change() {
    let series = Series::new(vec![1, 2, 4, 8], None).unwrap();
    assert_eq!(
        series.diff(1).unwrap().values(),
        &[Scalar::Null, Scalar::Int(1), Scalar::Int(2), Scalar::Int(4)]
    );

    let pct = series.pct_change(2).unwrap();
    assert!(pct.values()[0].is_null());
    assert!(pct.values()[1].is_null());
    assert_close(&pct.values()[2..], &[3.0, 3.0]);

    assert!(series.diff(0).is_err());
}

#[test]
fn test_cumulative() {
    let series = Series::new(vec![1, 2, 3, 4, 5], None).unwrap();
    assert_eq!(series.cumsum().unwrap().values(), ints(&[1, 3, 6, 10, 15]).as_slice());
    assert_eq!(series.cummul().unwrap().values(), ints(&[1, 2, 6, 24, 120]).as_slice());

    let mixed = Series::new(vec![3, 1, 4, 1, 5], None).unwrap();
    assert_eq!(mixed.cummax().unwrap().values(), ints(&[3, 3, 4, 4, 5]).as_slice());
    assert_eq!(mixed.cummin().unwrap().values(), ints(&[3, 1, 1, 1, 1]).as_slice());
}

#[test]
fn test_statistics() {
    let series = Series::new(vec![1, 2, 3, 4], None).unwrap();
    assert_eq!(series.sum().unwrap(), 10.0);
    assert_eq!(series.mean().unwrap(), 2.5);
    assert_eq!(series.median().unwrap(), 2.5);
    assert!((series.variance().unwrap() - 1.6667).abs() < 1e-3);
    assert!((series.std().unwrap() - 1.2910).abs() < 1e-3);

    let words = Series::new(vec!["a"], None).unwrap();
    assert!(matches!(words.sum(), Err(Error::Type(_))));
}

#[test]
fn test_covariance_and_correlation() {
    let ds1 = Series::new((1..=10).collect::<Vec<i64>>(), None).unwrap();
    let ds2 = Series::new((-5..5).map(|v| v * 2).collect::<Vec<i64>>(), None).unwrap();
    assert!((ds1.cov(&ds2).unwrap() - 18.333).abs() < 1e-3);
    assert!((ds1.corr(&ds2).unwrap() - 1.0).abs() < 1e-9);

    let short = Series::new(vec![1, 2], None).unwrap();
    assert!(ds1.cov(&short).is_err());
}

#[test]
fn test_round_and_abs() {
    let series = Series::new(vec![1.005, -2.5, 3.14159], Some("r".to_string())).unwrap();
    let rounded = series.round(2);
    assert_eq!(
        rounded.values(),
        &[Scalar::Float(1.01), Scalar::Float(-2.5), Scalar::Float(3.14)]
    );
    assert_eq!(rounded.name(), &Scalar::from("r"));

    let abs = Series::new(vec![-1, 2, -3], None).unwrap().abs();
    assert_eq!(abs.values(), ints(&[1, 2, 3]).as_slice());
}

#[test]
fn test_astype() {
    let floats = Series::new(vec![1.9, 2.1], None).unwrap();
    assert_eq!(floats.astype(DType::Int).unwrap().values(), ints(&[1, 2]).as_slice());

    let ints_series = Series::new(vec![1, 2], None).unwrap();
    let widened = ints_series.astype(DType::Float).unwrap();
    assert_eq!(widened.dtype(), DType::Float);

    let words = Series::new(vec!["a"], None).unwrap();
    assert!(matches!(
        words.astype(DType::Float),
        Err(Error::UnsupportedConversion { .. })
    ));
}

#[test]
fn test_unique_filter_and_sort() {
    let series = Series::new(vec![3, 1, 3, 2, 1], None).unwrap();
    assert_eq!(series.unique(), ints(&[3, 1, 2]));

    let filtered = series.filter(series.gt(1).unwrap().values()).unwrap();
    assert_eq!(filtered.values(), ints(&[3, 3, 2]).as_slice());
    assert_eq!(filtered.index().get_values(), ints(&[0, 2, 3]));
    assert!(series.filter(true).is_err());
    assert!(series.filter(vec![true]).is_err());

    let sorted = series.sort_values(true);
    assert_eq!(sorted.values(), ints(&[1, 1, 2, 3, 3]).as_slice());
    assert_eq!(sorted.index().get_values(), ints(&[1, 4, 3, 0, 2]));
}

#[test]
fn test_head_tail_and_map() {
    let series = Series::new(vec![1, 2, 3, 4], None).unwrap();
    assert_eq!(series.head(2).values(), ints(&[1, 2]).as_slice());
    assert_eq!(series.tail(2).index().get_values(), ints(&[2, 3]));
    assert_eq!(series.head(10).len(), 4);

    let doubled = series.map(|v, i| Scalar::Int(v.as_f64().unwrap() as i64 * 2 + i as i64));
    assert_eq!(doubled.values(), ints(&[2, 5, 8, 11]).as_slice());
    assert_eq!(series.notnull().values()[0], Scalar::Bool(true));
}

#[test]
fn test_concat_series_index() {
    let ds1 = Series::new(vec![1, 2, 3, 4], None).unwrap();
    let ds2 = Series::new(vec![2, 3, 4, 5], None).unwrap();

    let ignored = concat(
        &[(&ds1).into(), (&ds2).into()],
        ConcatOptions {
            ignore_index: true,
            ..Default::default()
        },
    )
    .unwrap()
    .into_series()
    .unwrap();
    assert_eq!(ignored.index().get_values(), ints(&[0, 1, 2, 3, 4, 5, 6, 7]));

    let kept = ds1.append(&ds2, false).unwrap();
    assert_eq!(kept.index().get_values(), ints(&[0, 1, 2, 3, 0, 1, 2, 3]));
    assert_eq!(kept.values(), ints(&[1, 2, 3, 4, 2, 3, 4, 5]).as_slice());
}

#[test]
fn test_align_groups_by_label() {
    let first = Series::with_index(vec![1, 2, 3], Index::new(vec!["a", "b", "a"]), None).unwrap();
    let second = Series::with_index(vec![10, 20], Index::new(vec!["b", "c"]), None).unwrap();
    let aligned = first.align(&second);

    let keys: Vec<&Scalar> = aligned.keys().collect();
    assert_eq!(keys, vec![&Scalar::from("a"), &Scalar::from("b"), &Scalar::from("c")]);
    assert_eq!(aligned[&Scalar::from("a")].first, ints(&[1, 3]));
    assert!(aligned[&Scalar::from("a")].second.is_empty());
    assert_eq!(aligned[&Scalar::from("b")].second, ints(&[10]));
    assert!(aligned[&Scalar::from("c")].first.is_empty());
}

#[test]
fn test_to_json_orients() {
    let series = Series::with_index(vec![1, 2], Index::new(vec!["x", "y"]), Some("n".to_string()))
        .unwrap();
    assert_eq!(
        series.to_json(SeriesOrient::Index),
        serde_json::json!({"x": 1, "y": 2})
    );
    assert_eq!(series.to_json(SeriesOrient::Records), serde_json::json!([1, 2]));
    assert_eq!(
        series.to_json("split".parse().unwrap()),
        serde_json::json!({"index": ["x", "y"], "name": "n", "values": [1, 2]})
    );
    assert!("columns".parse::<SeriesOrient>().is_err());
}

#[test]
fn test_display() {
    let series = Series::new(vec![1, 2], Some("s".to_string())).unwrap();
    let text = series.to_string();
    assert!(text.starts_with("0\t1\n1\t2\n"));
    assert!(text.ends_with("Name: s, dtype: int"));
}
