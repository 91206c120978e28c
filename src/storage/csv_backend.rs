//! CSV-backed table persistence, one file per entity.
//!
//! Every mutation is a full-table rewrite through a temp file and rename, so
//! a failed write leaves the previous contents intact. The backing files are
//! not safe for concurrent multi-process mutation; last write wins.

use std::fs::{self, File};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::debug;

use crate::domain::common::{next_record_id, RecordId, TableRecord};
use crate::errors::AtelierError;

use super::Result;

const TABLE_EXTENSION: &str = "csv";
const TMP_SUFFIX: &str = "tmp";

/// Persistent store for one entity table.
pub struct CsvTable<T: TableRecord> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: TableRecord> CsvTable<T> {
    /// Opens the table stored under `dir`, creating the directory if needed.
    /// The backing file itself is only created on the first write.
    pub fn open(dir: &Path) -> Result<Self> {
        ensure_dir(dir)?;
        Ok(Self {
            path: dir.join(format!("{}.{}", T::TABLE_NAME, TABLE_EXTENSION)),
            _marker: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every row. A missing file yields an empty table; a file missing
    /// a column yields rows with that column defaulted (zero-fill healing).
    pub fn load(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            debug!(table = T::TABLE_NAME, "backing file absent, starting empty");
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }

    /// Assigns the next identifier, appends the row, and persists. Returns
    /// the updated table; the appended row is its last element.
    pub fn add(&self, mut row: T) -> Result<Vec<T>> {
        let mut rows = self.load()?;
        row.set_id(next_record_id(&rows));
        rows.push(row);
        self.save(&rows)?;
        Ok(rows)
    }

    /// Applies `mutator` to the row with the given identifier, then persists.
    /// A missing identifier is a no-op, but the table is still rewritten.
    pub fn update(&self, id: RecordId, mutator: impl FnOnce(&mut T)) -> Result<Vec<T>> {
        let mut rows = self.load()?;
        if let Some(row) = rows.iter_mut().find(|row| row.id() == id) {
            mutator(row);
        }
        self.save(&rows)?;
        Ok(rows)
    }

    /// Removes the row with the given identifier, then persists. No cascade:
    /// sales referencing a deleted product keep their dangling identifier.
    pub fn delete(&self, id: RecordId) -> Result<Vec<T>> {
        let mut rows = self.load()?;
        rows.retain(|row| row.id() != id);
        self.save(&rows)?;
        Ok(rows)
    }

    /// Rewrites the whole table, header row included even when empty.
    pub fn save(&self, rows: &[T]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(T::COLUMNS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        let data = writer
            .into_inner()
            .map_err(|err| AtelierError::Storage(err.to_string()))?;
        write_atomic(&self.path, &data)?;
        debug!(table = T::TABLE_NAME, rows = rows.len(), "table persisted");
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => String::from(TMP_SUFFIX),
    };
    tmp.set_extension(ext);
    tmp
}
