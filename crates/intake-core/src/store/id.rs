//! Patient identifier generation.
//!
//! An identifier is the first six digits of the decimal rendition of a fresh
//! random 128-bit value. The format is fixed; callers wanting uniqueness
//! against an existing collection layer a retry on top (see
//! `RecordStore::next_id`).

use uuid::Uuid;

/// Identifier length in ASCII digits.
pub const ID_LEN: usize = 6;

/// Generate a 6-digit identifier from a fresh random 128-bit value.
pub fn generate_id() -> String {
    loop {
        let decimal = Uuid::new_v4().as_u128().to_string();
        // A value below 10^5 renders shorter than six digits; regenerate.
        if decimal.len() >= ID_LEN {
            return decimal[..ID_LEN].to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_six_ascii_digits() {
        for _ in 0..1000 {
            let id = generate_id();
            assert_eq!(id.len(), ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_digit()), "bad id: {}", id);
        }
    }

    #[test]
    fn test_ids_vary() {
        let a = generate_id();
        let b = generate_id();
        let c = generate_id();
        // Three identical draws from a 10^6 space means a broken generator.
        assert!(!(a == b && b == c), "generator returned {} three times", a);
    }
}
