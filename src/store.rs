use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use crate::consts::sheet_const::{RSVP_HEADER, RSVP_TABLE, TOPICS_HEADER, TOPICS_TABLE};
use crate::errors::Result;

/// The two flat tables backing the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Rsvp,
    Topics,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Rsvp => RSVP_TABLE,
            Table::Topics => TOPICS_TABLE,
        }
    }

    fn header(self) -> &'static [&'static str] {
        match self {
            Table::Rsvp => &RSVP_HEADER,
            Table::Topics => &TOPICS_HEADER,
        }
    }
}

/// CSV-file-backed flat-table store. One file per table, header row first.
/// All file I/O in the crate goes through here.
pub struct SheetStore {
    dir: PathBuf,
    rsvp_lock: Mutex<()>,
    topics_lock: Mutex<()>,
}

impl SheetStore {
    /// Opens the store, creating the data directory and any missing table
    /// file (with its header row) on the way.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        for table in [Table::Rsvp, Table::Topics] {
            let path = table_path(&dir, table);
            if !path.exists() {
                let mut writer = csv::Writer::from_path(&path)?;
                writer.write_record(table.header())?;
                writer.flush()?;
            }
        }

        Ok(Self {
            dir,
            rsvp_lock: Mutex::new(()),
            topics_lock: Mutex::new(()),
        })
    }

    /// Locks a table and hands back the only way to read or write it. The
    /// guard lives as long as the `Sheet`, so a read-modify-write sequence
    /// (RSVP upsert, like toggle) cannot interleave with another writer.
    pub fn sheet(&self, table: Table) -> Sheet<'_> {
        let lock = match table {
            Table::Rsvp => &self.rsvp_lock,
            Table::Topics => &self.topics_lock,
        };
        Sheet {
            path: table_path(&self.dir, table),
            // a poisoned lock only means a writer panicked mid-request; the
            // file itself is still a consistent snapshot
            _guard: lock.lock().unwrap_or_else(|e| e.into_inner()),
        }
    }
}

fn table_path(dir: &Path, table: Table) -> PathBuf {
    dir.join(format!("{}.csv", table.name()))
}

/// Exclusive handle on one table. Rows are positional string records in
/// header order; row indices count data rows only (the header is row -1,
/// so to speak, and never surfaces here).
pub struct Sheet<'a> {
    path: PathBuf,
    _guard: MutexGuard<'a, ()>,
}

impl Sheet<'_> {
    /// Full-table snapshot, header excluded.
    pub fn scan(&self) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    /// Linear scan for the first row whose `column` equals `key`.
    pub fn find(&self, column: usize, key: &str) -> Result<Option<(usize, Vec<String>)>> {
        let rows = self.scan()?;
        Ok(rows
            .into_iter()
            .enumerate()
            .find(|(_, row)| row.get(column).is_some_and(|cell| cell == key)))
    }

    pub fn append(&self, row: &[String]) -> Result<()> {
        let file = fs::OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(row)?;
        writer.flush()?;
        Ok(())
    }

    /// Overwrites one cell of one data row, rewriting the file.
    pub fn update_cell(&self, row: usize, column: usize, value: &str) -> Result<()> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let header = reader.headers()?.clone();
        let mut rows: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>()?;

        if let Some(record) = rows.get_mut(row) {
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            if column < cells.len() {
                cells[column] = value.to_string();
            }
            *record = csv::StringRecord::from(cells);
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&header)?;
        for record in &rows {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
