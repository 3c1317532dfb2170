// File: crates/plot-store/src/store.rs
// Summary: RecordStore: every operation opens the backing file fresh; update/delete rewrite it whole.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use plot_core::GraphDefinition;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::record::{decode, encode, Entry};

/// File name used when no path is configured.
pub const DEFAULT_FILE: &str = "graph.csv";

#[derive(Clone, Debug)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add one row at the end of the file, creating it if needed.
    pub fn append(&self, def: &GraphDefinition) -> Result<(), StoreError> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(encode(def))?;
        wtr.flush()?;
        debug!(path = %self.path.display(), "appended record");
        Ok(())
    }

    /// Every row with its 1-based position. A missing file lists as empty.
    pub fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let rows = self.read_rows()?.unwrap_or_default();
        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, fields)| Entry { index: i + 1, fields })
            .collect())
    }

    /// Number of rows; zero when the file does not exist.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read_rows()?.map(|r| r.len()).unwrap_or(0))
    }

    /// Confirm `index` addresses an existing row without decoding it.
    pub fn check_index(&self, index: usize) -> Result<(), StoreError> {
        let rows = self.existing_rows()?;
        bounds(index, rows.len())
    }

    pub fn fetch(&self, index: usize) -> Result<GraphDefinition, StoreError> {
        let rows = self.existing_rows()?;
        bounds(index, rows.len())?;
        decode(index, &rows[index - 1])
    }

    /// Replace row `index`; all other rows are written back unchanged.
    pub fn update(&self, index: usize, def: &GraphDefinition) -> Result<(), StoreError> {
        let mut rows = self.existing_rows()?;
        bounds(index, rows.len())?;
        rows[index - 1] = encode(def);
        self.write_rows(&rows)?;
        debug!(index, "updated record");
        Ok(())
    }

    /// Remove row `index`; later rows move up by one. Returns the removed entry.
    pub fn delete(&self, index: usize) -> Result<Entry, StoreError> {
        let mut rows = self.existing_rows()?;
        bounds(index, rows.len())?;
        let fields = rows.remove(index - 1);
        self.write_rows(&rows)?;
        debug!(index, remaining = rows.len(), "deleted record");
        Ok(Entry { index, fields })
    }

    fn existing_rows(&self) -> Result<Vec<Vec<String>>, StoreError> {
        self.read_rows()?.ok_or(StoreError::NoRecords)
    }

    /// `None` when the file does not exist.
    fn read_rows(&self) -> Result<Option<Vec<Vec<String>>>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "record file missing; treating as empty");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            if rec.len() < crate::record::COLUMNS {
                warn!(row = rows.len() + 1, columns = rec.len(), "short record in store");
            }
            rows.push(rec.iter().map(|s| s.to_string()).collect());
        }
        debug!(path = %self.path.display(), rows = rows.len(), "read records");
        Ok(Some(rows))
    }

    fn write_rows(&self, rows: &[Vec<String>]) -> Result<(), StoreError> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn bounds(index: usize, len: usize) -> Result<(), StoreError> {
    if index < 1 || index > len {
        return Err(StoreError::IndexOutOfRange { index, len });
    }
    Ok(())
}
