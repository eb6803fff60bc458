//! Point and pair files on disk

use closest_pairs::points_io::{generate_points, load_points, save_pairs, save_points};
use closest_pairs::{closest_pairs, Error, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

#[test]
fn generated_points_survive_a_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");

    let points = generate_points(64, &mut StdRng::seed_from_u64(11)).unwrap();
    save_points(&path, &points).unwrap();

    assert_eq!(load_points(&path).unwrap(), points);
}

#[test]
fn output_file_lists_pairs_by_distance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.txt");
    let points = [
        Point::new(0, 0),
        Point::new(1, 1),
        Point::new(5, 5),
        Point::new(0, 1),
    ];

    save_pairs(&path, &closest_pairs(&points, 3).pairs).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1, (0,0), (0,1)\n1, (1,1), (0,1)\n2, (0,0), (1,1)\n"
    );
}

#[test]
fn missing_input_file_is_named_in_the_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    match load_points(&path) {
        Err(Error::InputNotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
}

#[test]
fn malformed_lines_are_located() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "(0,0)\n(1,oops)\n").unwrap();

    assert!(matches!(
        load_points(&path),
        Err(Error::Parse { line: 2, .. })
    ));
}
