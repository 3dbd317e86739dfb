//! Operation handlers for the dealer contract.

mod cars;
mod receipts;

pub use cars::{handle_create_car, handle_find_car, handle_list_cars, CreateCarRequest};
pub use receipts::{
    handle_create_receipt, handle_find_receipt, handle_list_receipts, CreateReceiptRequest,
};
