//! Single-form questionnaire writer.
//!
//! The intake questionnaire is independent of the record store: each
//! submission is its own pretty-printed JSON document named
//! `patient_<id>_questionnaire.json`, one file per patient, in a
//! caller-chosen directory. Write failures propagate; nothing here recovers.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::{to_pretty_json, StoreError, StoreResult, ID_LEN};

/// A submitted wellness questionnaire for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Questionnaire {
    /// Identifier of the patient this submission belongs to
    pub patient_id: String,
    /// How the patient reports feeling
    pub feeling: String,
    /// Current symptoms, free text
    pub symptoms: String,
    /// Anything else the patient wants recorded
    pub notes: String,
}

impl Questionnaire {
    /// File name this submission is written under.
    pub fn file_name(&self) -> String {
        format!("patient_{}_questionnaire.json", self.patient_id)
    }

    /// Serialize to the on-disk JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        to_pretty_json(self)
    }

    /// Write the submission into `dir`, returning the full path written.
    ///
    /// The patient id must be 6 ASCII digits; it is embedded in the file
    /// name, and anything else (path separators included) could escape
    /// `dir`. A prior submission for the same patient is overwritten.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> StoreResult<PathBuf> {
        if self.patient_id.len() != ID_LEN
            || !self.patient_id.chars().all(|c| c.is_ascii_digit())
        {
            return Err(StoreError::Validation(vec![
                "Patient ID must be 6 digits.".to_string(),
            ]));
        }
        let path = dir.as_ref().join(self.file_name());
        fs::write(&path, self.to_json()?)?;
        Ok(path)
    }
}
