//! CSV load and persist.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, Schema};

/// Load a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first record is the header row and becomes the [`Schema`].
/// - Every record must have as many cells as the header.
/// - Cells are kept verbatim; no type inference or schema enforcement happens here.
pub fn read_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn read_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestionError::MissingHeader);
    }
    let schema = Schema::from_names(headers.iter());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(DataSet::new(schema, rows))
}

/// Write `dataset` to `path` as CSV: header row first, then every row, no index column.
///
/// The file is created or truncated. The parent directory must already exist.
pub fn write_csv_to_path(dataset: &DataSet, path: impl AsRef<Path>) -> IngestionResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    write_csv_to_writer(dataset, &mut wtr)
}

/// Write `dataset` to an existing CSV writer and flush it.
pub fn write_csv_to_writer<W: std::io::Write>(
    dataset: &DataSet,
    wtr: &mut csv::Writer<W>,
) -> IngestionResult<()> {
    wtr.write_record(dataset.schema.field_names())?;
    for row in &dataset.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
