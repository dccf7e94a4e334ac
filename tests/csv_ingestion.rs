use ml_data_ingestion::IngestionError;
use ml_data_ingestion::ingestion::csv::{
    read_csv_from_path, read_csv_from_reader, write_csv_to_writer,
};
use ml_data_ingestion::types::{DataSet, Schema};

#[test]
fn read_csv_from_path_happy_path() {
    let ds = read_csv_from_path("tests/fixtures/students.csv").unwrap();

    assert_eq!(ds.shape(), (10, 3));
    assert_eq!(
        ds.schema.field_names().collect::<Vec<_>>(),
        vec!["gender", "parental level of education", "math score"]
    );
    assert_eq!(ds.rows[0], vec!["female", "bachelor's degree", "72"]);
    assert_eq!(ds.rows[9][1], "high school, incomplete");
}

#[test]
fn read_csv_keeps_cells_verbatim() {
    let input = "id,score\n007, 98.50 \n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = read_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.rows, vec![vec!["007".to_string(), " 98.50 ".to_string()]]);
}

#[test]
fn read_csv_errors_on_missing_file() {
    let err = read_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(err.is_io());
}

#[test]
fn read_csv_errors_on_ragged_rows() {
    let err = read_csv_from_path("tests/fixtures/ragged.csv").unwrap_err();
    assert!(matches!(err, IngestionError::Csv(_)));
    assert!(!err.is_io());
    assert!(err.to_string().contains("csv error"));
}

#[test]
fn read_csv_errors_on_empty_input() {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader("".as_bytes());

    let err = read_csv_from_reader(&mut rdr).unwrap_err();
    assert!(matches!(err, IngestionError::MissingHeader));
}

#[test]
fn header_only_input_gives_empty_dataset() {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader("a,b\n".as_bytes());

    let ds = read_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.shape(), (0, 2));
}

#[test]
fn write_csv_emits_header_then_rows_without_index() {
    let ds = DataSet::new(
        Schema::from_names(["gender", "education"]),
        vec![
            vec!["female".to_string(), "some college".to_string()],
            vec!["male".to_string(), "high school, incomplete".to_string()],
        ],
    );

    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_csv_to_writer(&ds, &mut wtr).unwrap();
    let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

    assert_eq!(
        out,
        "gender,education\nfemale,some college\nmale,\"high school, incomplete\"\n"
    );
}

#[test]
fn written_csv_reads_back_to_the_same_dataset() {
    let ds = read_csv_from_path("tests/fixtures/students.csv").unwrap();

    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_csv_to_writer(&ds, &mut wtr).unwrap();
    let bytes = wtr.into_inner().unwrap();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    assert_eq!(read_csv_from_reader(&mut rdr).unwrap(), ds);
}
