//! Intake Core Library
//!
//! Patient-intake record keeping backed by a single JSON file.
//!
//! # Architecture
//!
//! ```text
//! Form input (raw strings)
//!         │
//!         ▼
//!   validate (all rules, independent)
//!         │
//!   ┌─────▼──────────────────────────┐
//!   │         RecordStore            │
//!   │  in-memory Vec<PatientRecord>  │
//!   │  assign id → append → save     │
//!   └─────┬──────────────────────────┘
//!         │
//!         ▼
//!  whole-file rewrite (pretty JSON array)
//! ```
//!
//! # Core Principle
//!
//! **A record failing any required-field or date check is never persisted.**
//! The store is the single mutating entry point; records are create-only.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, RawPatientFields)
//! - [`store`]: JSON-file record store (load/validate/add/find/save)
//! - [`questionnaire`]: Standalone single-form questionnaire writer

pub mod models;
pub mod questionnaire;
pub mod store;

// Re-export commonly used types
pub use models::{PatientRecord, RawPatientFields};
pub use questionnaire::Questionnaire;
pub use store::{LoadSource, RecordStore, StoreError, StoreResult};
