//! Record types stored by the dealer service.
//!
//! Records are plain immutable values: construction requires every field and
//! nothing is ever mutated in place. Serde field order matches construction
//! order, which fixes the on-disk field order per record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value record that the dealer service stores and queries.
///
/// Lookups never rely on structural equality; they linearly scan a loaded
/// record set and compare the two fields exposed here.
pub trait Record: Clone {
    /// Field used for exact-match point lookup.
    fn primary_key(&self) -> &str;

    /// Field used for case-insensitive multi-match filtering.
    fn filter_field(&self) -> &str;
}

/// A car on the dealer's lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Primary key; unique by convention only, duplicates are never rejected
    pub serial_number: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
    pub price: f32,
    pub weight: f32,
}

impl Car {
    /// Create a new car record.
    pub fn new(
        serial_number: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        year: i32,
        price: f32,
        weight: f32,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            brand: brand.into(),
            model: model.into(),
            color: color.into(),
            year,
            price,
            weight,
        }
    }
}

impl Record for Car {
    fn primary_key(&self) -> &str {
        &self.serial_number
    }

    fn filter_field(&self) -> &str {
        &self.brand
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car[serial={}, brand={}, model={}, color={}, year={}, price={}, weight={}]",
            self.serial_number, self.brand, self.model, self.color, self.year, self.price,
            self.weight
        )
    }
}

/// A sales receipt referencing a car by serial number.
///
/// The referenced serial number is a foreign key by convention only; the
/// store never checks that it points at an existing car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Primary key; unique by convention only
    pub id: String,
    pub vendor: String,
    pub car_serial_number: String,
    /// Purchase date
    pub date: DateTime<Utc>,
}

impl Receipt {
    /// Create a new receipt record.
    pub fn new(
        id: impl Into<String>,
        vendor: impl Into<String>,
        car_serial_number: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            vendor: vendor.into(),
            car_serial_number: car_serial_number.into(),
            date,
        }
    }
}

impl Record for Receipt {
    fn primary_key(&self) -> &str {
        &self.id
    }

    fn filter_field(&self) -> &str {
        &self.vendor
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Receipt[id={}, vendor={}, carSerial={}, date={}]",
            self.id, self.vendor, self.car_serial_number, self.date
        )
    }
}
