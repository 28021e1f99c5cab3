//! CSV table codec for quiz records.
//!
//! The table always starts with [`HEADER`]; every following row is one
//! [`QuizRecord`].

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::TableError;
use crate::types::{QuizRecord, TableRow};

/// Header row of every quiz table.
pub const HEADER: [&str; 6] = [
    "Question",
    "Answer1",
    "Answer2",
    "Answer3",
    "Answer4",
    "Correct Answer",
];

/// Appends quiz records to a CSV sink, one flushed row per record.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    written: usize,
}

impl TableWriter<File> {
    /// Create or truncate `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self, TableError> {
        Self::with_header(File::create(path)?)
    }

    /// Open an existing table for appending. The header is not rewritten.
    pub fn append_to(path: &Path) -> Result<Self, TableError> {
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self::headerless(file))
    }
}

impl<W: Write> TableWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn with_header(sink: W) -> Result<Self, TableError> {
        let mut writer = Self::headerless(sink);
        writer.inner.write_record(HEADER)?;
        writer.inner.flush()?;
        Ok(writer)
    }

    fn headerless(sink: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { inner, written: 0 }
    }

    /// Append one record and flush it to the sink.
    pub fn append(&mut self, record: &QuizRecord) -> Result<(), TableError> {
        self.inner.serialize(TableRow::from(record))?;
        self.inner.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Number of records appended through this writer.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(self) -> Result<W, TableError> {
        self.inner
            .into_inner()
            .map_err(|err| {
                TableError::Io(io::Error::new(err.error().kind(), err.error().to_string()))
            })
    }
}

/// Read every record from a table file.
pub fn read_table(path: &Path) -> Result<Vec<QuizRecord>, TableError> {
    read_records(File::open(path)?)
}

/// Read every record from a CSV source with a header row.
///
/// Columns are matched by header name, so column order does not matter.
pub fn read_records<R: Read>(source: R) -> Result<Vec<QuizRecord>, TableError> {
    let mut reader = csv::Reader::from_reader(source);
    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<TableRow>().enumerate() {
        // header is row 1
        let row_no = idx + 2;
        let row = row?;
        let correct = row.correct;
        let record = row.into_record().ok_or_else(|| TableError::InvalidRow {
            row: row_no,
            reason: format!("correct answer {correct} is not between 1 and 4"),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Replace the contents of `path` with the header and `records`.
pub fn write_table(path: &Path, records: &[QuizRecord]) -> Result<(), TableError> {
    let mut writer = TableWriter::create(path)?;
    for record in records {
        writer.append(record)?;
    }
    writer.into_inner()?;
    Ok(())
}
