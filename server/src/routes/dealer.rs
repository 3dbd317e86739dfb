//! Dealer record endpoints.
//!
//! The six remote operations of the dealer contract plus plain listings of
//! each store. A lookup miss is a 404 with a JSON error body; an empty
//! filter result is `[]` with a 200, never an error.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use dealer_engine::{Car, Receipt};
use serde::Deserialize;

use crate::error::Result;
use crate::handlers::{
    handle_create_car, handle_create_receipt, handle_find_car, handle_find_receipt,
    handle_list_cars, handle_list_receipts, CreateCarRequest, CreateReceiptRequest,
};
use crate::AppState;

/// Create dealer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/{serial_number}", get(find_car))
        .route("/receipts", get(list_receipts).post(create_receipt))
        .route("/receipts/{id}", get(find_receipt))
}

/// Filter parameters for car listings.
#[derive(Debug, Deserialize)]
struct CarsQuery {
    brand: Option<String>,
}

/// Filter parameters for receipt listings.
#[derive(Debug, Deserialize)]
struct ReceiptsQuery {
    vendor: Option<String>,
}

/// POST /cars - create a car record.
async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<(StatusCode, Json<Car>)> {
    let car = handle_create_car(&state.cars, request).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// GET /cars/{serial_number} - point lookup by serial number.
async fn find_car(
    State(state): State<AppState>,
    Path(serial_number): Path<String>,
) -> Result<Json<Car>> {
    let car = handle_find_car(&state.cars, &serial_number)?;
    Ok(Json(car))
}

/// GET /cars?brand=X - all cars, or those of one brand.
async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<CarsQuery>,
) -> Result<Json<Vec<Car>>> {
    let cars = handle_list_cars(&state.cars, query.brand.as_deref())?;
    Ok(Json(cars))
}

/// POST /receipts - create a receipt record.
async fn create_receipt(
    State(state): State<AppState>,
    Json(request): Json<CreateReceiptRequest>,
) -> Result<(StatusCode, Json<Receipt>)> {
    let receipt = handle_create_receipt(&state.receipts, request).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /receipts/{id} - point lookup by receipt id.
async fn find_receipt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Receipt>> {
    let receipt = handle_find_receipt(&state.receipts, &id)?;
    Ok(Json(receipt))
}

/// GET /receipts?vendor=X - all receipts, or those from one vendor.
async fn list_receipts(
    State(state): State<AppState>,
    Query(query): Query<ReceiptsQuery>,
) -> Result<Json<Vec<Receipt>>> {
    let receipts = handle_list_receipts(&state.receipts, query.vendor.as_deref())?;
    Ok(Json(receipts))
}
