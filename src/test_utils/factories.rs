//! Test data factories.
//!
//! Each factory returns a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::waitlist_entry::WaitlistEntry;

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: 1,
        name: Some("Test User".to_string()),
        email: "test@example.com".to_string(),
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Fixed timestamp so assertions on formatted dates stay deterministic.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let entry = create_test_entry(|_| {});
        assert!(entry.email.contains('@'));
        assert_eq!(entry.created_at, test_datetime());
    }

    #[test]
    fn overrides_apply() {
        let entry = create_test_entry(|e| {
            e.id = 42;
            e.name = None;
        });
        assert_eq!(entry.id, 42);
        assert_eq!(entry.name, None);
    }
}
