//! Receipt operations: create, point lookup, vendor filter.

use chrono::{DateTime, Utc};
use dealer_engine::{query, Receipt};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::store::FileStore;

/// Request body for creating a receipt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceiptRequest {
    pub id: String,
    pub vendor: String,
    pub car_serial_number: String,
    pub date: DateTime<Utc>,
}

/// Append a new receipt to the store.
///
/// The car serial number is not checked against the car store; the foreign
/// key is by convention only.
pub async fn handle_create_receipt(
    store: &FileStore<Receipt>,
    request: CreateReceiptRequest,
) -> Result<Receipt> {
    let receipt = Receipt::new(
        request.id,
        request.vendor,
        request.car_serial_number,
        request.date,
    );
    store.append(receipt.clone()).await?;
    Ok(receipt)
}

/// Look up a receipt by id; the first match in file order wins.
pub fn handle_find_receipt(store: &FileStore<Receipt>, id: &str) -> Result<Receipt> {
    let receipts = store.read_all()?;
    query::find_by_key(&receipts, id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no receipt with id {id}")))
}

/// List all receipts, optionally narrowed to one vendor (case-insensitive).
pub fn handle_list_receipts(
    store: &FileStore<Receipt>,
    vendor: Option<&str>,
) -> Result<Vec<Receipt>> {
    let receipts = store.read_all()?;
    Ok(match vendor {
        Some(vendor) => query::filter_by_field(&receipts, vendor),
        None => receipts,
    })
}
