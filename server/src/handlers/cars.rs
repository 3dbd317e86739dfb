//! Car operations: create, point lookup, brand filter.

use dealer_engine::{query, Car};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::store::FileStore;

/// Request body for creating a car.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub serial_number: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
    pub price: f32,
    pub weight: f32,
}

/// Append a new car to the store.
///
/// Duplicate serial numbers are accepted; the key is advisory only.
pub async fn handle_create_car(store: &FileStore<Car>, request: CreateCarRequest) -> Result<Car> {
    let car = Car::new(
        request.serial_number,
        request.brand,
        request.model,
        request.color,
        request.year,
        request.price,
        request.weight,
    );
    store.append(car.clone()).await?;
    Ok(car)
}

/// Look up a car by serial number; the first match in file order wins.
pub fn handle_find_car(store: &FileStore<Car>, serial_number: &str) -> Result<Car> {
    let cars = store.read_all()?;
    query::find_by_key(&cars, serial_number)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no car with serial number {serial_number}")))
}

/// List all cars, optionally narrowed to one brand (case-insensitive).
pub fn handle_list_cars(store: &FileStore<Car>, brand: Option<&str>) -> Result<Vec<Car>> {
    let cars = store.read_all()?;
    Ok(match brand {
        Some(brand) => query::filter_by_field(&cars, brand),
        None => cars,
    })
}
