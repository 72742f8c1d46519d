mod barcode;
mod coerce;
mod feedback;
mod orders;
mod server;

pub use barcode::{GenerateQrRequest, GenerateQrResponse, ScanRequest};
pub use feedback::CreateFeedbackRequest;
pub use orders::{CreateOrderRequest, UpdateOrderRequest};
pub use server::{HttpServer, HttpServerConfig};

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Confirmation returned by every delete, whether or not the id existed.
#[derive(Serialize)]
pub struct Deleted {
    message: &'static str,
}

impl Deleted {
    fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Unwraps a JSON body, turning axum's rejection into a 400 with a JSON
/// message.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(v)| v)
        .map_err(|rej| AppError::BadRequest(rej.body_text()))
}
