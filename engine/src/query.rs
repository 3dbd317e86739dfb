//! Pure lookup and filter logic over loaded record sets.
//!
//! Both operations are linear scans; record volumes are small enough that an
//! index would buy nothing.

use crate::record::Record;

/// Return the first record whose primary key matches `key` exactly
/// (case-sensitive).
///
/// When several records share a key, the earliest one in file order wins;
/// duplicate keys are legal and never an error.
pub fn find_by_key<'a, R: Record>(records: &'a [R], key: &str) -> Option<&'a R> {
    records.iter().find(|record| record.primary_key() == key)
}

/// Return every record whose filter field matches `value` case-insensitively,
/// in file order.
///
/// No match yields an empty vector, never an error.
pub fn filter_by_field<R: Record>(records: &[R], value: &str) -> Vec<R> {
    let needle = value.to_lowercase();
    records
        .iter()
        .filter(|record| record.filter_field().to_lowercase() == needle)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Car, Receipt};
    use chrono::{TimeZone, Utc};

    fn car(serial: &str, brand: &str, color: &str) -> Car {
        Car::new(serial, brand, "Model", color, 2020, 10_000.0, 1200.0)
    }

    #[test]
    fn find_by_key_returns_exact_match() {
        let cars = vec![car("100", "Hyundai", "Blue"), car("200", "Toyota", "Red")];

        let found = find_by_key(&cars, "200").unwrap();
        assert_eq!(found.brand, "Toyota");
    }

    #[test]
    fn find_by_key_is_case_sensitive() {
        let cars = vec![car("ABC", "Hyundai", "Blue")];

        assert!(find_by_key(&cars, "abc").is_none());
    }

    #[test]
    fn find_by_key_absent_when_no_match() {
        let cars = vec![car("100", "Hyundai", "Blue")];

        assert!(find_by_key(&cars, "999").is_none());
        assert!(find_by_key::<Car>(&[], "100").is_none());
    }

    #[test]
    fn duplicate_keys_return_earliest_in_order() {
        let cars = vec![
            car("100", "Hyundai", "Blue"),
            car("100", "Hyundai", "Red"),
            car("100", "Hyundai", "Green"),
        ];

        let found = find_by_key(&cars, "100").unwrap();
        assert_eq!(found.color, "Blue");
    }

    #[test]
    fn filter_by_field_is_case_insensitive() {
        let cars = vec![
            car("100", "Hyundai", "Blue"),
            car("200", "Toyota", "Red"),
            car("300", "HYUNDAI", "Green"),
        ];

        let upper = filter_by_field(&cars, "HYUNDAI");
        let lower = filter_by_field(&cars, "hyundai");

        assert_eq!(upper.len(), 2);
        assert_eq!(upper, lower);
    }

    #[test]
    fn filter_by_field_preserves_order() {
        let cars = vec![
            car("100", "Hyundai", "Blue"),
            car("200", "Toyota", "Red"),
            car("300", "Hyundai", "Green"),
        ];

        let matches = filter_by_field(&cars, "Hyundai");
        assert_eq!(matches[0].serial_number, "100");
        assert_eq!(matches[1].serial_number, "300");
    }

    #[test]
    fn filter_by_field_empty_when_no_match() {
        let cars = vec![car("100", "Hyundai", "Blue")];

        assert!(filter_by_field(&cars, "Nonexistent").is_empty());
    }

    #[test]
    fn filter_receipts_by_vendor() {
        let date = Utc.with_ymd_and_hms(2010, 3, 14, 0, 0, 0).unwrap();
        let receipts = vec![
            Receipt::new("1", "Carz", "100", date),
            Receipt::new("2", "AutoHaus", "200", date),
            Receipt::new("3", "carz", "300", date),
        ];

        let matches = filter_by_field(&receipts, "CARZ");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[1].id, "3");
    }
}
