use std::fs;
use std::path::Path;
use tabplot::ChartError;
use tabplot::models::marks;
use tabplot::storage;

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn loads_fixture_and_extracts_columns() {
    let table = storage::load_table(fixture("input.csv"), ";").unwrap();
    assert_eq!(table.rows(), 5);
    assert_eq!(table.columns(), 3);

    let v = table.vector(0).unwrap();
    assert_eq!(v.heading(), "number1");
    assert_eq!(v.data(), &[1.0, 2.0, 3.0, 4.0, 5.0]);

    let objects = table.objects();
    assert_eq!(objects.heading(), "all");
    assert_eq!(objects.data()[4], "e");

    let third = table.vector(2).unwrap();
    let m: Vec<_> = marks(&objects, &third).collect();
    assert_eq!(m[1].label, "b");
    assert_eq!(m[1].value, 3.0);
}

#[test]
fn out_of_range_column_is_an_input_error() {
    let table = storage::load_table(fixture("input.csv"), ";").unwrap();
    assert!(matches!(
        table.vector(3),
        Err(ChartError::ColumnOutOfRange { column: 3, columns: 3 })
    ));
}

#[test]
fn malformed_and_negative_inputs_are_rejected() {
    assert!(matches!(
        storage::load_table(fixture("invalid.csv"), ";"),
        Err(ChartError::MalformedRow { line: 3, .. })
    ));
}

#[test]
fn negative_cell_fails_only_its_own_column() {
    let table = storage::load_table(fixture("negative.csv"), ";").unwrap();
    assert!(matches!(
        table.vector(0),
        Err(ChartError::NegativeValue { line: 3, column: 1, .. })
    ));
    assert_eq!(table.vector(1).unwrap().data(), &[9.0, 7.0]);
}

#[test]
fn file_checks() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        storage::check_file(&missing),
        Err(ChartError::MissingFile(_))
    ));

    let txt = dir.path().join("table.txt");
    fs::write(&txt, "all;n\na;1\n").unwrap();
    assert!(matches!(
        storage::check_file(&txt),
        Err(ChartError::NotCsv(_))
    ));
    assert!(storage::check_file(Path::new(&fixture("input.csv"))).is_ok());
}

#[test]
fn other_delimiters_and_text_cells() {
    let t = storage::parse_table("all,x\na,1.5\nb,2\n".as_bytes(), ",").unwrap();
    assert_eq!(t.value(0, 0), Some(1.5));

    let e = storage::parse_table("all;x\na;one\n".as_bytes(), ";").unwrap_err();
    assert!(matches!(e, ChartError::NotANumber { line: 2, column: 1, .. }));
    assert!(matches!(
        storage::parse_table("".as_bytes(), ";"),
        Err(ChartError::EmptyInput)
    ));
}
