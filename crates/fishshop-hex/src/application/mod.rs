pub mod barcode_service;
pub mod feedback_service;
pub mod order_service;

use std::sync::Arc;

use fishshop_types::ports::qr_encoder::QrEncoder;
use fishshop_types::ports::record_store::RecordStore;

use crate::outbound::qr::SvgQrEncoder;
use barcode_service::BarcodeService;
use feedback_service::FeedbackService;
use order_service::OrderService;

/// The per-resource services, all sharing one store.
pub struct ShopServices<R: RecordStore> {
    pub orders: OrderService<R>,
    pub feedback: FeedbackService<R>,
    pub barcodes: BarcodeService<R>,
}

impl<R: RecordStore> ShopServices<R> {
    pub fn new(store: R) -> Self {
        Self::with_encoder(store, Arc::new(SvgQrEncoder))
    }

    pub fn with_encoder(store: R, encoder: Arc<dyn QrEncoder>) -> Self {
        let store = Arc::new(store);
        Self {
            orders: OrderService::new(store.clone()),
            feedback: FeedbackService::new(store.clone()),
            barcodes: BarcodeService::new(store, encoder),
        }
    }
}
