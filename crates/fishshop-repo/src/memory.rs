use async_trait::async_trait;
use fishshop_types::domain::barcode::{Barcode, NewBarcode};
use fishshop_types::domain::feedback::{Feedback, NewFeedback};
use fishshop_types::domain::order::{NewOrder, Order, OrderPatch};
use fishshop_types::ports::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::collections::{patch_order, remove_where, Collections};

/// Process-lifetime store; contents vanish when the process exits.
#[derive(Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Collections::default())),
        }
    }

    /// A store whose barcode collection starts with the sample catalogue.
    pub fn seeded() -> Self {
        let mut collections = Collections::default();
        collections.seed_barcodes();
        Self {
            state: Arc::new(RwLock::new(collections)),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.state.read().await.orders.clone())
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let state = self.state.read().await;
        Ok(state.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        let order = order.into_order();
        self.state.write().await.orders.push(order.clone());
        Ok(order)
    }

    async fn update_order(
        &self,
        id: &str,
        patch: OrderPatch,
    ) -> Result<Option<Order>, StoreError> {
        let mut state = self.state.write().await;
        Ok(patch_order(&mut state.orders, id, patch))
    }

    async fn delete_order(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        Ok(remove_where(&mut state.orders, |o| o.id == id))
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        Ok(self.state.read().await.feedback.clone())
    }

    async fn get_feedback(&self, id: &str) -> Result<Option<Feedback>, StoreError> {
        let state = self.state.read().await;
        Ok(state.feedback.iter().find(|f| f.id == id).cloned())
    }

    async fn create_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError> {
        let feedback = feedback.into_feedback();
        self.state.write().await.feedback.push(feedback.clone());
        Ok(feedback)
    }

    async fn delete_feedback(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        Ok(remove_where(&mut state.feedback, |f| f.id == id))
    }

    async fn list_barcodes(&self) -> Result<Vec<Barcode>, StoreError> {
        Ok(self.state.read().await.barcodes.clone())
    }

    async fn get_barcode(&self, id: &str) -> Result<Option<Barcode>, StoreError> {
        let state = self.state.read().await;
        Ok(state.barcodes.iter().find(|b| b.id == id).cloned())
    }

    async fn get_barcode_by_value(&self, value: &str) -> Result<Option<Barcode>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .barcodes
            .iter()
            .find(|b| b.barcode_value == value)
            .cloned())
    }

    async fn create_barcode(&self, barcode: NewBarcode) -> Result<Barcode, StoreError> {
        let barcode = barcode.into_barcode();
        self.state.write().await.barcodes.push(barcode.clone());
        Ok(barcode)
    }

    async fn delete_barcode(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        Ok(remove_where(&mut state.barcodes, |b| b.id == id))
    }
}
