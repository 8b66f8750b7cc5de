use crate::error::{ChartError, Result};
use crate::models::Table;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Check that `path` exists, is readable, and carries the `.csv` extension.
pub fn check_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ChartError::MissingFile(path.to_path_buf()));
    }
    if !path.is_file() || File::open(path).is_err() {
        return Err(ChartError::Unreadable(path.to_path_buf()));
    }
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(ChartError::NotCsv(path.to_path_buf()));
    }
    Ok(())
}

/// Turn a delimiter argument into the single byte the reader needs.
pub fn delimiter_byte(delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ChartError::InvalidDelimiter(delimiter.to_string())),
    }
}

/// Parse delimited text into a [`Table`]: the first record holds the headings,
/// every following record is an object label followed by its numeric cells.
pub fn parse_table<R: Read>(reader: R, delimiter: &str) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = rdr.records();
    let headings: Vec<String> = match records.next() {
        Some(first) => first?.iter().map(str::to_string).collect(),
        None => return Err(ChartError::EmptyInput),
    };
    if headings.len() < 2 {
        return Err(ChartError::EmptyInput);
    }
    let expected = headings.len();

    let mut objects = Vec::new();
    let mut data = Vec::new();
    for record in records {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(objects.len() + 2);
        if record.len() != expected {
            return Err(ChartError::MalformedRow {
                line,
                expected,
                found: record.len(),
            });
        }
        let mut cells = record.iter();
        objects.push(cells.next().unwrap_or_default().to_string());
        let mut row = Vec::with_capacity(expected - 1);
        for (i, cell) in cells.enumerate() {
            let value: f64 = cell.parse().map_err(|_| ChartError::NotANumber {
                line,
                column: i + 1,
                cell: cell.to_string(),
            })?;
            if !value.is_finite() {
                return Err(ChartError::NotANumber {
                    line,
                    column: i + 1,
                    cell: cell.to_string(),
                });
            }
            row.push(value);
        }
        data.push(row);
    }

    Table::new(headings, objects, data)
}

/// Check, open and parse a table file.
pub fn load_table<P: AsRef<Path>>(path: P, delimiter: &str) -> Result<Table> {
    let path = path.as_ref();
    check_file(path)?;
    let file = File::open(path).map_err(|_| ChartError::Unreadable(path.to_path_buf()))?;
    let table = parse_table(file, delimiter)?;
    log::debug!(
        "loaded {} rows × {} columns from {}",
        table.rows(),
        table.columns(),
        path.display()
    );
    Ok(table)
}

/// Write `bytes` to `path` through a temporary sibling file, so the destination
/// is either the complete new content or untouched.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| ChartError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_headings_objects_and_cells() {
        let t = parse_table("all;number1;number2\na;1;9\nb;2;7\n".as_bytes(), ";").unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.columns(), 2);
        assert_eq!(t.heading(2), Some("number2"));
        assert_eq!(t.value(1, 1), Some(7.0));
    }

    #[test]
    fn wrong_cell_count_reports_the_line() {
        let e = parse_table("all;n\na;1\nb;2;3\n".as_bytes(), ";").unwrap_err();
        assert!(matches!(
            e,
            ChartError::MalformedRow { line: 3, expected: 2, found: 3 }
        ));
    }

    #[test]
    fn multi_byte_delimiter_is_rejected() {
        assert!(matches!(
            parse_table("a;;b".as_bytes(), ";;"),
            Err(ChartError::InvalidDelimiter(_))
        ));
    }

    #[test]
    fn write_atomic_replaces_content() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("x.png");
        write_atomic(&p, b"one").unwrap();
        write_atomic(&p, b"two").unwrap();
        assert_eq!(std::fs::read(&p).unwrap(), b"two");
        // only the destination remains, no stray temp files
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_into_missing_dir_leaves_nothing() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("nope").join("x.png");
        assert!(write_atomic(&p, b"data").is_err());
        assert!(!p.exists());
    }
}
