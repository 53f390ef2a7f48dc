use tabrs::{Index, IndexTrait, Scalar};

#[test]
fn test_index_creation() {
    let index = Index::new(vec!["a", "b", "c"]);
    assert_eq!(index.len(), 3);
    assert!(!index.is_empty());
    assert_eq!(index.get_value(1).unwrap(), Scalar::from("b"));
    assert_eq!(index.get_position(&Scalar::from("c")), Some(2));
    assert_eq!(index.get_position(&Scalar::from("z")), None);
    assert!(index.get_value(3).is_err());
    assert_eq!(index.name(), None);
}

#[test]
fn test_range_index() {
    let index = Index::range(4);
    assert_eq!(
        index.get_values(),
        vec![Scalar::Int(0), Scalar::Int(1), Scalar::Int(2), Scalar::Int(3)]
    );
    assert_eq!(Index::default().len(), 0);
}

#[test]
fn test_named_index() {
    let index = Index::new(vec![1, 2]).with_name("id");
    assert_eq!(index.name(), Some("id"));
    // names do not take part in equality
    assert_eq!(index, Index::new(vec![1, 2]));
}

#[test]
fn test_duplicate_labels_are_allowed() {
    let index = Index::new(vec![0, 1, 0]);
    assert_eq!(index.len(), 3);
    assert_eq!(index.get_position(&Scalar::Int(0)), Some(0));
}

#[test]
fn test_slice_take_and_concat() {
    let index = Index::new(vec!["a", "b", "c", "d"]);

    let sliced = index.slice(1..10);
    assert_eq!(
        sliced.get_values(),
        vec![Scalar::from("b"), Scalar::from("c"), Scalar::from("d")]
    );

    let taken = index.take(&[3, 0]).unwrap();
    assert_eq!(taken.get_values(), vec![Scalar::from("d"), Scalar::from("a")]);
    assert!(index.take(&[4]).is_err());

    let joined = Index::range(2).concat(&Index::range(2));
    assert_eq!(
        joined.get_values(),
        vec![Scalar::Int(0), Scalar::Int(1), Scalar::Int(0), Scalar::Int(1)]
    );
}

#[test]
fn test_clones_share_labels() {
    let index = Index::range(3);
    let clone = index.clone();
    assert!(index.ptr_eq(&clone));
    assert!(!index.ptr_eq(&Index::range(3)));
}

#[test]
fn test_collect_into_index() {
    let index: Index = vec!["x", "y"].into_iter().collect();
    let labels: Vec<&Scalar> = index.iter().collect();
    assert_eq!(labels, vec![&Scalar::from("x"), &Scalar::from("y")]);
}
