use async_trait::async_trait;

use crate::domain::barcode::{Barcode, NewBarcode};
use crate::domain::feedback::{Feedback, NewFeedback};
use crate::domain::order::{NewOrder, Order, OrderPatch};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(String),

    #[error("corrupt collection {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

/// Storage for the three shop collections. Lists are snapshots in insertion
/// order; `None` from a lookup or update means the id is unknown.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;
    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError>;
    async fn create_order(&self, order: NewOrder) -> Result<Order, StoreError>;
    async fn update_order(&self, id: &str, patch: OrderPatch)
        -> Result<Option<Order>, StoreError>;
    async fn delete_order(&self, id: &str) -> Result<bool, StoreError>;

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError>;
    async fn get_feedback(&self, id: &str) -> Result<Option<Feedback>, StoreError>;
    async fn create_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError>;
    async fn delete_feedback(&self, id: &str) -> Result<bool, StoreError>;

    async fn list_barcodes(&self) -> Result<Vec<Barcode>, StoreError>;
    async fn get_barcode(&self, id: &str) -> Result<Option<Barcode>, StoreError>;
    async fn get_barcode_by_value(&self, value: &str) -> Result<Option<Barcode>, StoreError>;
    async fn create_barcode(&self, barcode: NewBarcode) -> Result<Barcode, StoreError>;
    async fn delete_barcode(&self, id: &str) -> Result<bool, StoreError>;
}
