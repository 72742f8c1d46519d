use async_trait::async_trait;
use fishshop_types::domain::barcode::{Barcode, NewBarcode};
use fishshop_types::domain::feedback::{Feedback, NewFeedback};
use fishshop_types::domain::order::{NewOrder, Order, OrderPatch};
use fishshop_types::ports::record_store::{RecordStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::collections::{patch_order, remove_where, Collections};

pub const ORDERS_FILE: &str = "orders.json";
pub const FEEDBACK_FILE: &str = "feedback.json";
pub const BARCODES_FILE: &str = "barcodes.json";

/// Keeps each collection as a JSON array file under one directory. Reads are
/// served from memory; every mutation rewrites the affected file before the
/// in-memory copy is replaced.
pub struct JsonFileStore {
    dir: PathBuf,
    state: RwLock<Collections>,
}

impl JsonFileStore {
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;

        let mut collections = Collections {
            orders: load_collection(&dir.join(ORDERS_FILE)).await?,
            feedback: load_collection(&dir.join(FEEDBACK_FILE)).await?,
            barcodes: load_collection(&dir.join(BARCODES_FILE)).await?,
        };
        if collections.seed_barcodes() {
            write_collection(&dir.join(BARCODES_FILE), &collections.barcodes).await?;
            tracing::info!(dir = %dir.display(), "seeded sample barcodes");
        }
        tracing::debug!(
            dir = %dir.display(),
            orders = collections.orders.len(),
            feedback = collections.feedback.len(),
            barcodes = collections.barcodes.len(),
            "loaded collections"
        );

        Ok(Self {
            dir,
            state: RwLock::new(collections),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    async fn persist<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        write_collection(&path, items).await.inspect_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to persist collection");
        })
    }
}

async fn load_collection<T>(path: &Path) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned + Serialize,
{
    match tokio::fs::read_to_string(path).await {
        Ok(text) if text.trim().is_empty() => Ok(Vec::new()),
        Ok(text) => serde_json::from_str(&text)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display()))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            write_collection::<T>(path, &[]).await?;
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

// Written beside the target and renamed over it so readers never see a
// half-written array.
async fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(items).map_err(|e| StoreError::Io(e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.state.read().await.orders.clone())
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let state = self.state.read().await;
        Ok(state.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        let order = order.into_order();
        let mut state = self.state.write().await;
        let mut next = state.orders.clone();
        next.push(order.clone());
        self.persist(ORDERS_FILE, &next).await?;
        state.orders = next;
        Ok(order)
    }

    async fn update_order(
        &self,
        id: &str,
        patch: OrderPatch,
    ) -> Result<Option<Order>, StoreError> {
        let mut state = self.state.write().await;
        let mut next = state.orders.clone();
        let Some(updated) = patch_order(&mut next, id, patch) else {
            return Ok(None);
        };
        self.persist(ORDERS_FILE, &next).await?;
        state.orders = next;
        Ok(Some(updated))
    }

    async fn delete_order(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let mut next = state.orders.clone();
        if !remove_where(&mut next, |o| o.id == id) {
            return Ok(false);
        }
        self.persist(ORDERS_FILE, &next).await?;
        state.orders = next;
        Ok(true)
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
        let mut state = self.state.write().await;
        let mut next = state.feedback.clone();
        next.push(feedback.clone());
        self.persist(FEEDBACK_FILE, &next).await?;
        state.feedback = next;
        Ok(feedback)
    }

    async fn delete_feedback(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let mut next = state.feedback.clone();
        if !remove_where(&mut next, |f| f.id == id) {
            return Ok(false);
        }
        self.persist(FEEDBACK_FILE, &next).await?;
        state.feedback = next;
        Ok(true)
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
        let mut state = self.state.write().await;
        let mut next = state.barcodes.clone();
        next.push(barcode.clone());
        self.persist(BARCODES_FILE, &next).await?;
        state.barcodes = next;
        Ok(barcode)
    }

    async fn delete_barcode(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let mut next = state.barcodes.clone();
        if !remove_where(&mut next, |b| b.id == id) {
            return Ok(false);
        }
        self.persist(BARCODES_FILE, &next).await?;
        state.barcodes = next;
        Ok(true)
    }
}
