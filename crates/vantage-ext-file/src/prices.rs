//! CSV price tables.
//!
//! One date column plus one column of levels per asset:
//!
//! ```text
//! Date,Cash,Treasury,Equity
//! 2024-01-31,100.0,100.0,100.0
//! 2024-02-29,100.4,99.1,
//! ```
//!
//! Empty cells are missing observations. Rows may appear in any order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use vantage_core::{Date, PriceTable};

use crate::error::{FileError, FileResult};

/// CSV layout options.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    /// Header of the date column, matched case-insensitively.
    pub date_column: String,

    /// `chrono` formats tried in order for each date cell.
    pub date_formats: Vec<String>,

    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            date_column: "Date".to_string(),
            date_formats: vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()],
            delimiter: b',',
        }
    }
}

impl CsvOptions {
    /// Sets the date column header.
    #[must_use]
    pub fn with_date_column(mut self, column: impl Into<String>) -> Self {
        self.date_column = column.into();
        self
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn parse_date(&self, text: &str) -> Option<Date> {
        self.date_formats
            .iter()
            .find_map(|format| Date::parse_with_format(text, format).ok())
    }
}

/// Loads a price table from a CSV file with default options.
pub fn load_price_csv(path: impl AsRef<Path>) -> FileResult<PriceTable> {
    load_price_csv_with(path, &CsvOptions::default())
}

/// Loads a price table from a CSV file.
pub fn load_price_csv_with(path: impl AsRef<Path>, options: &CsvOptions) -> FileResult<PriceTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::Io(format!("{}: {e}", path.display())))?;
    let table = read_price_csv(file, options)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "loaded price table"
    );
    Ok(table)
}

/// Reads a price table from CSV text.
///
/// # Errors
///
/// - `MissingColumn` when the date header is absent
/// - `InvalidCell` for an unparseable date or level
/// - `DuplicateDate` when two rows share a date
/// - `Data` for table invariants (duplicate headers, negative levels)
pub fn read_price_csv<R: Read>(reader: R, options: &CsvOptions) -> FileResult<PriceTable> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(&options.date_column))
        .ok_or_else(|| FileError::MissingColumn(options.date_column.clone()))?;
    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != date_idx)
        .map(|(_, h)| h.to_string())
        .collect();

    let mut records: Vec<(Date, Vec<Option<f64>>)> = Vec::new();
    for result in csv.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if record.iter().all(str::is_empty) {
            continue;
        }

        let date_text = record.get(date_idx).unwrap_or_default();
        let date = options
            .parse_date(date_text)
            .ok_or_else(|| FileError::InvalidCell {
                line,
                column: options.date_column.clone(),
                value: date_text.to_string(),
            })?;

        let row = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != date_idx)
            .zip(&columns)
            .map(|((_, cell), column)| parse_level(cell, line, column))
            .collect::<FileResult<Vec<_>>>()?;

        records.push((date, row));
    }

    records.sort_by_key(|(date, _)| *date);
    if let Some(pair) = records.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(FileError::DuplicateDate(pair[0].0.to_string()));
    }

    let (dates, rows) = records.into_iter().unzip();
    Ok(PriceTable::new(columns, dates, rows)?)
}

fn parse_level(cell: &str, line: u64, column: &str) -> FileResult<Option<f64>> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| FileError::InvalidCell {
            line,
            column: column.to_string(),
            value: cell.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn read(text: &str) -> FileResult<PriceTable> {
        read_price_csv(text.as_bytes(), &CsvOptions::default())
    }

    #[test]
    fn test_reads_missing_cells() {
        let table = read(
            "Date,Cash,Equity\n\
             2024-01-31,100.0,100.0\n\
             2024-02-29,100.4,\n\
             2024-03-31,100.7,103.5\n",
        )
        .unwrap();

        assert_eq!(table.columns(), ["Cash", "Equity"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[1][1], None);
        assert_relative_eq!(table.rows()[2][1].unwrap(), 103.5);
    }

    #[test]
    fn test_sorts_rows_and_accepts_day_first_dates() {
        let table = read(
            "Equity,DATE\n\
             101.0,29/02/2024\n\
             100.0,31/01/2024\n",
        )
        .unwrap();

        assert_eq!(table.columns(), ["Equity"]);
        assert_eq!(table.first_date().unwrap(), Date::from_ymd(2024, 1, 31).unwrap());
        assert_eq!(table.rows()[0][0], Some(100.0));
    }

    #[test]
    fn test_duplicate_dates() {
        let err = read("Date,A\n2024-01-31,1\n2024-01-31,2\n").unwrap_err();
        assert_eq!(err, FileError::DuplicateDate("2024-01-31".to_string()));
    }

    #[test]
    fn test_invalid_cells() {
        let err = read("Date,A\n2024-01-31,abc\n").unwrap_err();
        assert!(matches!(err, FileError::InvalidCell { ref column, .. } if column == "A"));

        let err = read("Date,A\nJan 2024,1\n").unwrap_err();
        assert!(matches!(err, FileError::InvalidCell { ref column, .. } if column == "Date"));
    }

    #[test]
    fn test_missing_date_column() {
        let err = read("When,A\n2024-01-31,1\n").unwrap_err();
        assert_eq!(err, FileError::MissingColumn("Date".to_string()));

        let table = read_price_csv(
            "When;A\n2024-01-31;1\n".as_bytes(),
            &CsvOptions::default().with_date_column("when").with_delimiter(b';'),
        )
        .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_negative_level_is_rejected() {
        let err = read("Date,A\n2024-01-31,-1\n").unwrap_err();
        assert!(matches!(err, FileError::Data(_)));
    }
}
