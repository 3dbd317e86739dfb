//! Flat-file persistence for dealer records.

pub mod bootstrap;
mod file;

pub use file::{FileStore, StoreError};
