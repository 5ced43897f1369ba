//! Blocking reader that yields command records from a CSV file
//!
//! Rows are deserialized one at a time as `CsvRecord` and converted with
//! `csv_format::convert_csv_record`, so memory use does not grow with the file.
//!
//! ```no_run
//! use account_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("commands.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{:?} {:?}", record.command, record.account),
//!         Err(line_error) => eprintln!("skipped: {}", line_error),
//!     }
//! }
//! ```
//!
//! Opening the file can fail (`FileNotFound`, `IoError`). After that, a bad row
//! never ends iteration: it is yielded as `Err` with its 1-based line number,
//! counting the header as line 1.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{AccountError, CommandRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader over command records
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader trims whitespace from all fields, allows flexible field
    /// counts (trailing optional columns may be left off), and uses an 8KB buffer.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, `IoError` for any other
    /// failure to open it.
    pub fn new(path: &Path) -> Result<Self, AccountError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AccountError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => AccountError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<CommandRecord, String>;

    /// Get the next command record from the CSV file
    ///
    /// Errors carry the 1-based file line (the header is line 1).
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let result = deserializer.next()?;
        self.line_num += 1;
        let line = self.line_num + 1;

        Some(match result {
            Ok(csv_record) => {
                convert_csv_record(csv_record).map_err(|e| format!("Line {}: {}", line, e))
            }
            Err(e) => Err(format!("Line {}: CSV parse error: {}", line, e)),
        })
    }
}
