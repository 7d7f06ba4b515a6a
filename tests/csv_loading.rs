use std::io::Write;

use approx::assert_relative_eq;
use eigeniter::io::links::load_links_csv;
use eigeniter::io::matrix::load_matrix_csv;
use eigeniter::{power_iteration, IterationConfig};

fn write_tmp(dir: &tempfile::TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).expect("create csv");
    f.write_all(body.as_bytes()).expect("write csv");
    path.to_string_lossy().into_owned()
}

#[test]
fn matrix_csv_skips_labels_and_feeds_power_iteration() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_tmp(
        &tmp,
        "a.csv",
        "row,c0,c1,c2\nr0,-2,-4,2\nr1,-2,1,2\nr2,4,2,5\n",
    );

    let a = load_matrix_csv(&path).expect("load matrix");
    assert_eq!(a[2], vec![4.0, 2.0, 5.0]);

    let pair = power_iteration(&a, &[1.0, 1.0, 1.0], &IterationConfig::default()).expect("valid input");
    assert_relative_eq!(pair.value, 6.0, epsilon = 1e-8);
}

#[test]
fn matrix_csv_must_be_square() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_tmp(&tmp, "bad.csv", "c0,c1\n1,2\n3,4\n5,6\n");
    let err = load_matrix_csv(&path).unwrap_err();
    assert!(err.to_string().contains("square"));

    assert!(load_matrix_csv(&tmp.path().join("missing.csv").to_string_lossy()).is_err());
}

#[test]
fn links_csv_builds_adjacency() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_tmp(&tmp, "links.csv", "from,to\n0,1\n0,2\n1,0\n");
    let links = load_links_csv(&path, 3).expect("load links");
    assert_eq!(links, vec![vec![1, 2], vec![0], vec![]]);

    let err = load_links_csv(&path, 2).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
