use crate::errors::AppError;
use fishshop_types::domain::barcode::{Barcode, NewBarcode};
use fishshop_types::ports::qr_encoder::QrEncoder;
use fishshop_types::ports::record_store::RecordStore;
use std::sync::Arc;

pub struct BarcodeService<R: RecordStore> {
    store: Arc<R>,
    encoder: Arc<dyn QrEncoder>,
}

/// A freshly stored barcode together with its rendered QR image.
#[derive(Debug, Clone)]
pub struct GeneratedBarcode {
    pub barcode: Barcode,
    pub qr_code_image: String,
}

impl<R: RecordStore> BarcodeService<R> {
    pub fn new(store: Arc<R>, encoder: Arc<dyn QrEncoder>) -> Self {
        Self { store, encoder }
    }

    pub async fn list_barcodes(&self) -> Result<Vec<Barcode>, AppError> {
        let mut all = self.store.list_barcodes().await?;
        all.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        Ok(all)
    }

    pub async fn generate(
        &self,
        fish_type: String,
        price_per_kg: f64,
        description: Option<String>,
    ) -> Result<GeneratedBarcode, AppError> {
        let barcode = NewBarcode::new(fish_type, price_per_kg, description)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let barcode = self.store.create_barcode(barcode).await?;
        let qr_code_image = match self.encoder.encode(&barcode.qr_payload()) {
            Ok(image) => image,
            Err(e) => {
                self.store.delete_barcode(&barcode.id).await?;
                tracing::warn!(
                    barcode_id = %barcode.id,
                    "removed barcode after QR encoding failed"
                );
                return Err(e.into());
            }
        };
        tracing::info!(
            barcode_id = %barcode.id,
            barcode_value = %barcode.barcode_value,
            "barcode generated"
        );
        Ok(GeneratedBarcode {
            barcode,
            qr_code_image,
        })
    }

    pub async fn scan(&self, barcode_value: &str) -> Result<Barcode, AppError> {
        match self.store.get_barcode_by_value(barcode_value).await? {
            Some(b) => Ok(b),
            None => {
                tracing::debug!(barcode_value, "scan miss");
                Err(AppError::NotFound("Barcode not found".into()))
            }
        }
    }
}
