use super::{apply_delta, check_delta, check_snapshot, normalize_username, PointsLedger, UserRecord};
use crate::error::{EcoError, EcoResult};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const LEDGER_HEADERS: [&str; 3] = ["username", "cumulative_points", "yesterday_points"];

/// Ledger backed by a single comma-separated file.
///
/// Every `upsert` rereads the whole file, mutates one record and rewrites the
/// whole file. Two processes writing the same file can lose updates (last
/// snapshot wins). Use one writer per file.
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full-snapshot rewrite of the ledger file.
    ///
    /// The snapshot goes to a sibling `.tmp` file, is synced, then renamed
    /// over the ledger. A failed write leaves the previous file untouched.
    pub fn write_all(&self, records: &[UserRecord]) -> EcoResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.replace_with(&temp_path, records) {
            // Best effort; the temp path may not be ours to remove
            if temp_path.is_file() {
                let _ = fs::remove_file(&temp_path);
            }
            warn!(
                "⚠️  Ledger rewrite of '{}' failed, previous snapshot kept: {}",
                self.path.display(),
                e
            );
            return Err(e);
        }

        debug!(
            "Ledger: wrote {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn replace_with(&self, temp_path: &Path, records: &[UserRecord]) -> EcoResult<()> {
        {
            let mut file = File::create(temp_path)?;
            write_records(&mut file, records)?;
            file.sync_all()?;
        }
        fs::rename(temp_path, &self.path)?;
        Ok(())
    }

    /// Same directory as the ledger so the rename never crosses filesystems.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read used before a rewrite. Only a missing file counts as empty;
    /// any other failure to open the ledger is an `Io` error.
    fn load_for_update(&self) -> EcoResult<Vec<UserRecord>> {
        if self.path.is_dir() {
            return Err(EcoError::Io(io::Error::other(format!(
                "ledger path '{}' is a directory",
                self.path.display()
            ))));
        }

        match File::open(&self.path) {
            Ok(file) => read_records(file),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(EcoError::Io(e)),
        }
    }
}

impl PointsLedger for CsvLedger {
    fn read_all(&self) -> EcoResult<Vec<UserRecord>> {
        if self.path.is_dir() {
            warn!(
                "⚠️  Ledger path '{}' is a directory. Treating as empty.",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Ledger: no file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(
                    "⚠️  Ledger file '{}' could not be opened ({}). Treating as empty.",
                    self.path.display(),
                    e
                );
                return Ok(Vec::new());
            }
        };

        read_records(file)
    }

    fn upsert(&mut self, username: &str, delta: f64) -> EcoResult<Option<UserRecord>> {
        let Some(key) = normalize_username(username) else {
            debug!("Skipping update with blank username");
            return Ok(None);
        };
        check_delta(delta)?;

        let mut records = self.load_for_update()?;
        let rec = apply_delta(&mut records, key, delta);
        self.write_all(&records)?;

        debug!(
            "Ledger: '{}' {:+.2} -> {:.2}",
            rec.username, delta, rec.cumulative_points
        );
        Ok(Some(rec))
    }
}

/// Parses a ledger snapshot. Malformed rows fail the whole read.
pub fn read_records<R: Read>(reader: R) -> EcoResult<Vec<UserRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| EcoError::DataFormat(format!("unreadable header: {}", e)))?
        .clone();

    // Zero-byte file: created but never written
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if !headers.iter().eq(LEDGER_HEADERS) {
        return Err(EcoError::DataFormat(format!(
            "expected header '{}', found '{}'",
            LEDGER_HEADERS.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<UserRecord>().enumerate() {
        // +2: 1-based, after the header line
        let rec = result.map_err(|e| EcoError::DataFormat(format!("row {}: {}", idx + 2, e)))?;
        records.push(rec);
    }

    check_snapshot(&records)?;
    Ok(records)
}

/// Writes the header and every record. Failures surface as `EcoError::Io`.
pub fn write_records<W: Write>(writer: W, records: &[UserRecord]) -> EcoResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(LEDGER_HEADERS).map_err(io::Error::from)?;
    for rec in records {
        // f64 Display never switches to exponent notation
        wtr.write_record([
            rec.username.clone(),
            rec.cumulative_points.to_string(),
            rec.previous_cumulative_points.to_string(),
        ])
        .map_err(io::Error::from)?;
    }
    wtr.flush()?;
    Ok(())
}
