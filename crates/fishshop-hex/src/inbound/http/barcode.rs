use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::coerce::de_f64;
use super::json_body;
use crate::application::barcode_service::GeneratedBarcode;
use crate::application::ShopServices;
use crate::errors::AppError;
use fishshop_types::domain::barcode::Barcode;
use fishshop_types::ports::record_store::RecordStore;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrRequest {
    pub fish_type: String,
    #[serde(deserialize_with = "de_f64")]
    pub price_per_kg: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub barcode_value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrResponse {
    pub barcode_id: String,
    pub barcode_value: String,
    pub qr_code_image: String,
    pub fish_type: String,
    pub price_per_kg: f64,
}

impl From<GeneratedBarcode> for GenerateQrResponse {
    fn from(g: GeneratedBarcode) -> Self {
        Self {
            barcode_id: g.barcode.id,
            barcode_value: g.barcode.barcode_value,
            qr_code_image: g.qr_code_image,
            fish_type: g.barcode.fish_type,
            price_per_kg: g.barcode.price_per_kg,
        }
    }
}

pub async fn list_barcodes<R>(
    State(services): State<Arc<ShopServices<R>>>,
) -> Result<Json<Vec<Barcode>>, AppError>
where
    R: RecordStore,
{
    Ok(Json(services.barcodes.list_barcodes().await?))
}

pub async fn generate_qrcode<R>(
    State(services): State<Arc<ShopServices<R>>>,
    payload: Result<Json<GenerateQrRequest>, JsonRejection>,
) -> Result<Json<GenerateQrResponse>, AppError>
where
    R: RecordStore,
{
    let req = json_body(payload)?;
    let generated = services
        .barcodes
        .generate(req.fish_type, req.price_per_kg, req.description)
        .await?;
    Ok(Json(generated.into()))
}

pub async fn scan<R>(
    State(services): State<Arc<ShopServices<R>>>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<Barcode>, AppError>
where
    R: RecordStore,
{
    let req = json_body(payload)?;
    Ok(Json(services.barcodes.scan(&req.barcode_value).await?))
}
