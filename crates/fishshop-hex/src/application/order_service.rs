use crate::errors::AppError;
use fishshop_types::domain::order::{NewOrder, Order, OrderPatch};
use fishshop_types::ports::record_store::RecordStore;
use std::sync::Arc;

pub struct OrderService<R: RecordStore> {
    store: Arc<R>,
}

impl<R: RecordStore> OrderService<R> {
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    pub async fn create_order(
        &self,
        customer_name: String,
        customer_phone: String,
        fish_type: String,
        quantity: f64,
        price_per_kg: f64,
        barcode: Option<String>,
    ) -> Result<Order, AppError> {
        let order = NewOrder::new(
            customer_name,
            customer_phone,
            fish_type,
            quantity,
            price_per_kg,
            barcode,
        )
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let order = self.store.create_order(order).await?;
        tracing::info!(order_id = %order.id, total_price = order.total_price, "order created");
        Ok(order)
    }

    pub async fn get_order(&self, id: &str) -> Result<Order, AppError> {
        match self.store.get_order(id).await? {
            Some(o) => Ok(o),
            None => Err(AppError::NotFound("Order not found".into())),
        }
    }

    /// All orders, newest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        let mut orders = self.store.list_orders().await?;
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }

    pub async fn update_order(&self, id: &str, patch: OrderPatch) -> Result<Order, AppError> {
        patch
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        match self.store.update_order(id, patch).await? {
            Some(o) => {
                tracing::info!(order_id = %o.id, status = ?o.status, "order updated");
                Ok(o)
            }
            None => Err(AppError::NotFound("Order not found".into())),
        }
    }

    /// Deleting an unknown id still succeeds.
    pub async fn delete_order(&self, id: &str) -> Result<(), AppError> {
        let removed = self.store.delete_order(id).await?;
        tracing::info!(order_id = id, removed, "order delete");
        Ok(())
    }
}
