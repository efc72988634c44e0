//! CSV emission and reload.
//!
//! Rows travel through this module as uninterpreted strings: [`write_rows`]
//! emits the header followed by the body, [`read_rows`] hands every record
//! back verbatim, header included. No trimming or model interpretation
//! happens here, which is what keeps the write/read round trip exact.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::error::{ExportError, Result};

/// Write `header` plus `rows` to `path`, overwriting any existing file.
///
/// Fields containing the delimiter, quotes or line breaks are quoted per RFC
/// 4180; everything else is written bare.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the file cannot be created or written.
pub fn write_rows<R>(path: &Path, header: &[&str], rows: &[R]) -> Result<()>
where
    R: AsRef<[String]>,
{
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|err| map_csv_error(path, err))?;

    writer
        .write_record(header)
        .map_err(|err| map_csv_error(path, err))?;
    for row in rows {
        writer
            .write_record(row.as_ref())
            .map_err(|err| map_csv_error(path, err))?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), row_count = rows.len(), "csv written");
    Ok(())
}

/// Read every record from `path`, header included, as plain strings.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the file cannot be opened and
/// [`ExportError::Csv`] when a record is malformed.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| map_csv_error(path, err))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| map_csv_error(path, err))?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    debug!(path = %path.display(), row_count = rows.len(), "csv reloaded");
    Ok(rows)
}

/// Split a `csv::Error` into the IO and format failure classes.
fn map_csv_error(path: &Path, err: csv::Error) -> ExportError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ExportError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => ExportError::Csv {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{read_rows, write_rows};
    use crate::error::ExportError;

    const HEADER: [&str; 3] = ["a", "b", "c"];

    fn row(values: [&str; 3]) -> [String; 3] {
        values.map(str::to_owned)
    }

    #[test]
    fn writes_header_then_body() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.csv");

        write_rows(&path, &HEADER, &[row(["1", "2", "3"])]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "a,b,c\n1,2,3\n");
    }

    #[test]
    fn quotes_fields_containing_delimiters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.csv");

        write_rows(&path, &HEADER, &[row(["x,y", "he said \"hi\"", " z "])]).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["x,y", "he said \"hi\"", " z "]);
    }

    #[test]
    fn reload_includes_header_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.csv");

        write_rows(&path, &HEADER, &[] as &[[String; 3]]).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_rows(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn ragged_record_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "a,b,c\n1,2\n").unwrap();

        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, ExportError::Csv { .. }));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("table.csv");

        let err = write_rows(&path, &HEADER, &[] as &[[String; 3]]).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
