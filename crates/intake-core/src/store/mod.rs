//! JSON-file record store: load, validate, append, lookup.
//!
//! The store owns the full collection in memory and rewrites the whole
//! backing file on every mutation. Single-threaded, synchronous: each call
//! runs to completion. Two overlapping processes can still lose an update
//! (both load, both append, second save wins); nothing here coordinates
//! across processes.

mod id;
mod validate;

pub use id::{generate_id, ID_LEN};
pub use validate::{validate, ValidatedFields, DATE_FORMAT};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{PatientRecord, RawPatientFields};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// One message per failing rule, in rule order. The store is untouched.
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// Save-side I/O failure. In-memory state may be ahead of the file;
    /// the caller must treat the triggering add as unconfirmed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// How the collection was obtained at load time.
///
/// Default behavior is identical for `Missing` and `Corrupt` (start empty,
/// keep running); the tag lets callers log or alert on the corrupt case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from a well-formed backing file
    File,
    /// Backing file absent; started empty
    Missing,
    /// Backing file present but unreadable or not a record array; started empty
    Corrupt,
}

/// Collision-retry bound for identifier assignment.
const MAX_ID_ATTEMPTS: usize = 16;

/// The patient record store.
///
/// Loaded fully at construction; `add` is the only mutating entry point and
/// saves before returning. Records are create-only: no update, no delete.
pub struct RecordStore {
    path: PathBuf,
    records: Vec<PatientRecord>,
    source: LoadSource,
}

impl RecordStore {
    /// Open the store backed by `path`, loading whatever is there.
    ///
    /// An absent file yields an empty store tagged [`LoadSource::Missing`].
    /// A present-but-unparseable file yields an empty store tagged
    /// [`LoadSource::Corrupt`], logged at WARN and never fatal. No partial
    /// recovery is attempted.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let (records, source) = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<PatientRecord>>(&text) {
                Ok(records) => {
                    debug!(count = records.len(), path = %path.display(), "loaded patient records");
                    (records, LoadSource::File)
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        %err,
                        "backing file is not a patient record array; starting empty"
                    );
                    (Vec::new(), LoadSource::Corrupt)
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                (Vec::new(), LoadSource::Missing)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "backing file unreadable; starting empty");
                (Vec::new(), LoadSource::Corrupt)
            }
        };
        Self {
            path,
            records,
            source,
        }
    }

    /// Validate raw fields and, on success, assign an id, append, and save.
    ///
    /// Returns the persisted record. A validation failure returns the ordered
    /// message list and leaves both memory and file untouched. A save failure
    /// propagates with the record already appended in memory.
    pub fn add(&mut self, raw: &RawPatientFields) -> StoreResult<PatientRecord> {
        let fields = validate(raw).map_err(StoreError::Validation)?;
        let record = fields.into_record(self.next_id());
        self.records.push(record.clone());
        self.save()?;
        debug!(patient_id = %record.patient_id, "added patient record");
        Ok(record)
    }

    /// Rewrite the backing file to exactly reflect the in-memory sequence.
    ///
    /// Writes the pretty-printed array to a temporary file in the target
    /// directory, then renames it over the backing path, so a crash mid-save
    /// never leaves a half-written file behind. Failures propagate.
    pub fn save(&self) -> StoreResult<()> {
        let json = to_pretty_json(&self.records)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!(count = self.records.len(), path = %self.path.display(), "saved patient records");
        Ok(())
    }

    /// Look up a record by exact identifier match. Linear scan.
    pub fn find_by_id(&self, patient_id: &str) -> Option<&PatientRecord> {
        self.records.iter().find(|r| r.patient_id == patient_id)
    }

    /// The full collection in insertion order.
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// How the collection was obtained at open time.
    pub fn source(&self) -> LoadSource {
        self.source
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fresh identifier not currently assigned in this store.
    ///
    /// Bounded retry: after `MAX_ID_ATTEMPTS` collisions the last candidate
    /// is used as-is. A store dense enough to exhaust the bound holds a
    /// large fraction of the 10^6 id space, far past intended scale.
    fn next_id(&self) -> String {
        let mut candidate = generate_id();
        for _ in 0..MAX_ID_ATTEMPTS {
            if self.find_by_id(&candidate).is_none() {
                break;
            }
            candidate = generate_id();
        }
        candidate
    }
}

/// Serialize with 4-space indentation, matching the original file layout.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json emits valid UTF-8 only
    Ok(String::from_utf8(buf).expect("serializer output is UTF-8"))
}
