//! Patient record models.

use serde::{Deserialize, Serialize};

/// A validated patient intake record.
///
/// On disk each record is one element of the backing JSON array, an object
/// with exactly these eight keys, all string-valued. The optional trio
/// (address, reason, notes) is stored as a possibly-empty string rather than
/// omitted, so the on-disk shape is uniform across records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Store-assigned identifier: 6 ASCII digits, unique within the store
    pub patient_id: String,
    /// Given name (required, trimmed)
    pub first_name: String,
    /// Family name (required, trimmed)
    pub last_name: String,
    /// Calendar date in `YYYY-MM-DD` form (required)
    pub date_of_birth: String,
    /// Contact number (required; presence only, no format rules)
    pub phone_number: String,
    /// Street address (optional, may be empty)
    #[serde(default)]
    pub address: String,
    /// Chief complaint / reason for visit (optional, may be empty)
    #[serde(default)]
    pub reason_for_visit: String,
    /// Free-form notes (optional, may be empty)
    #[serde(default)]
    pub notes: String,
}

impl PatientRecord {
    /// Display name in "Last, First" form.
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// Unvalidated form input, exactly as collected from a caller.
///
/// No `patient_id` field: identifiers are assigned by the store at creation
/// time and are never caller-supplied. Values may be empty or untrimmed; only
/// [`crate::store::validate`] turns this into record fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawPatientFields {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub address: String,
    pub reason_for_visit: String,
    pub notes: String,
}
