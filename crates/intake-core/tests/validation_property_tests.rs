//! Property tests for identifier format and validation normalization.

use proptest::prelude::*;

use intake_core::store::{generate_id, validate, ID_LEN};
use intake_core::RawPatientFields;

proptest! {
    #[test]
    fn generated_ids_always_six_digits(_seed in 0u8..8) {
        let id = generate_id();
        prop_assert_eq!(id.len(), ID_LEN);
        prop_assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn valid_input_round_trips_trimmed(
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,12}",
        phone in "[0-9]{3}-[0-9]{4}",
        year in 1900u32..2026,
        month in 1u32..=12,
        day in 1u32..=28,
        pad_left in " {0,3}",
        pad_right in " {0,3}",
    ) {
        let raw = RawPatientFields {
            first_name: format!("{}{}{}", pad_left, first, pad_right),
            last_name: last.clone(),
            date_of_birth: format!("{:04}-{:02}-{:02}", year, month, day),
            phone_number: phone.clone(),
            ..Default::default()
        };

        let fields = validate(&raw).unwrap();
        prop_assert_eq!(fields.first_name, first);
        prop_assert_eq!(fields.last_name, last);
        prop_assert_eq!(fields.phone_number, phone);
    }

    #[test]
    fn blank_required_fields_always_fail(
        ws in " {0,4}",
        dob in "[a-z0-9/ ]{0,12}",
    ) {
        // Whatever the date looks like, four blank required fields cannot pass.
        let raw = RawPatientFields {
            first_name: ws.clone(),
            last_name: ws.clone(),
            date_of_birth: dob,
            phone_number: ws,
            ..Default::default()
        };
        prop_assert!(validate(&raw).is_err());
    }
}
