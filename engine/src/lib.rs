//! # Dealer Engine
//!
//! Record types and query logic for a car dealership's record-keeping
//! service.
//!
//! This crate holds the pure core of the system: the [`Car`] and [`Receipt`]
//! value records and the scan/filter functions that answer lookups over them.
//! It has no knowledge of files or the network; loading records from disk and
//! exposing them over the wire is the server's job.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches files or sockets
//! - **Immutable records**: every field is set at construction, nothing mutates
//! - **Advisory keys**: primary keys are unique by convention only; duplicates
//!   are legal and lookups deterministically return the earliest match
//!
//! ## Quick Start
//!
//! ```rust
//! use dealer_engine::{query, Car};
//!
//! let cars = vec![
//!     Car::new("4512360", "Hyundai", "Venue", "Blue", 2021, 19935.0, 1184.0),
//!     Car::new("9881726", "Toyota", "Corolla", "White", 2019, 14200.0, 1310.0),
//! ];
//!
//! let venue = query::find_by_key(&cars, "4512360").unwrap();
//! assert_eq!(venue.model, "Venue");
//!
//! let hyundais = query::filter_by_field(&cars, "HYUNDAI");
//! assert_eq!(hyundais.len(), 1);
//! ```

pub mod query;
pub mod record;

// Re-export main types at crate root
pub use record::{Car, Receipt, Record};
