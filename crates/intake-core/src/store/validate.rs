//! Required-field and date-format validation for raw intake input.

use chrono::NaiveDate;

use crate::models::{PatientRecord, RawPatientFields};

/// Accepted date-of-birth format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw fields that passed every rule, with surrounding whitespace removed.
///
/// The only way to obtain one is [`validate`]; building a [`PatientRecord`]
/// goes through [`ValidatedFields::into_record`] with a store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub address: String,
    pub reason_for_visit: String,
    pub notes: String,
}

impl ValidatedFields {
    /// Attach a store-assigned identifier to produce the final record.
    pub(crate) fn into_record(self, patient_id: String) -> PatientRecord {
        PatientRecord {
            patient_id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            address: self.address,
            reason_for_visit: self.reason_for_visit,
            notes: self.notes,
        }
    }
}

/// Check every rule and collect one message per failing rule.
///
/// Rules run independently, never short-circuiting, so a submission missing
/// a first name *and* carrying a malformed date reports both. Messages are
/// appended in rule order: first name, last name, date of birth (presence,
/// then format), phone number. Address, reason and notes are never validated.
pub fn validate(raw: &RawPatientFields) -> Result<ValidatedFields, Vec<String>> {
    let mut errors = Vec::new();

    let first_name = raw.first_name.trim();
    if first_name.is_empty() {
        errors.push("First Name is required.".to_string());
    }

    let last_name = raw.last_name.trim();
    if last_name.is_empty() {
        errors.push("Last Name is required.".to_string());
    }

    let date_of_birth = raw.date_of_birth.trim();
    if date_of_birth.is_empty() {
        errors.push("Date of Birth is required.".to_string());
    } else if NaiveDate::parse_from_str(date_of_birth, DATE_FORMAT).is_err() {
        errors.push("Date of Birth must be in YYYY-MM-DD format.".to_string());
    }

    let phone_number = raw.phone_number.trim();
    if phone_number.is_empty() {
        errors.push("Phone Number is required.".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedFields {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: date_of_birth.to_string(),
        phone_number: phone_number.to_string(),
        address: raw.address.trim().to_string(),
        reason_for_visit: raw.reason_for_visit.trim().to_string(),
        notes: raw.notes.trim().to_string(),
    })
}
