//! Domain models for patient intake.

mod patient;

pub use patient::*;
