#[cfg(not(any(feature = "memory", feature = "file")))]
compile_error!("Enable a store feature: `memory` or `file`.");

use fishshop_types::domain::barcode::{Barcode, NewBarcode};
use fishshop_types::domain::feedback::{Feedback, NewFeedback};
use fishshop_types::domain::order::{NewOrder, Order, OrderPatch};
use fishshop_types::ports::record_store::{RecordStore, StoreError};

pub mod collections;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "memory")]
pub mod memory;

/// The store selected at startup.
pub enum Repo {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryStore),
    #[cfg(feature = "file")]
    File(file::JsonFileStore),
}

/// Builds a file-backed store rooted at `data_dir`, or a seeded in-memory
/// store when no directory is given.
pub async fn build_repo(data_dir: Option<&str>) -> anyhow::Result<Repo> {
    Repo::build_repo(data_dir).await
}

impl Repo {
    pub async fn build_repo(data_dir: Option<&str>) -> anyhow::Result<Self> {
        match data_dir {
            #[cfg(feature = "file")]
            Some(dir) => {
                tracing::info!(dir, "using json file store");
                Ok(Self::File(file::JsonFileStore::open(dir).await?))
            }
            #[cfg(not(feature = "file"))]
            Some(dir) => anyhow::bail!("file store for {dir} requested but the `file` feature is disabled"),
            #[cfg(feature = "memory")]
            None => {
                tracing::info!("using in-memory store");
                Ok(Self::Memory(memory::InMemoryStore::seeded()))
            }
            #[cfg(not(feature = "memory"))]
            None => anyhow::bail!("in-memory store requested but the `memory` feature is disabled"),
        }
    }

    pub fn backend(&self) -> &'static str {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(_) => "memory",
            #[cfg(feature = "file")]
            Self::File(_) => "file",
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $method:ident($($arg:expr),*)) => {
        match $self {
            #[cfg(feature = "memory")]
            Repo::Memory(store) => store.$method($($arg),*).await,
            #[cfg(feature = "file")]
            Repo::File(store) => store.$method($($arg),*).await,
        }
    };
}

#[async_trait::async_trait]
impl RecordStore for Repo {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        dispatch!(self, list_orders())
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError> {
        dispatch!(self, get_order(id))
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        dispatch!(self, create_order(order))
    }

    async fn update_order(
        &self,
        id: &str,
        patch: OrderPatch,
    ) -> Result<Option<Order>, StoreError> {
        dispatch!(self, update_order(id, patch))
    }

    async fn delete_order(&self, id: &str) -> Result<bool, StoreError> {
        dispatch!(self, delete_order(id))
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        dispatch!(self, list_feedback())
    }

    async fn get_feedback(&self, id: &str) -> Result<Option<Feedback>, StoreError> {
        dispatch!(self, get_feedback(id))
    }

    async fn create_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError> {
        dispatch!(self, create_feedback(feedback))
    }

    async fn delete_feedback(&self, id: &str) -> Result<bool, StoreError> {
        dispatch!(self, delete_feedback(id))
    }

    async fn list_barcodes(&self) -> Result<Vec<Barcode>, StoreError> {
        dispatch!(self, list_barcodes())
    }

    async fn get_barcode(&self, id: &str) -> Result<Option<Barcode>, StoreError> {
        dispatch!(self, get_barcode(id))
    }

    async fn get_barcode_by_value(&self, value: &str) -> Result<Option<Barcode>, StoreError> {
        dispatch!(self, get_barcode_by_value(value))
    }

    async fn create_barcode(&self, barcode: NewBarcode) -> Result<Barcode, StoreError> {
        dispatch!(self, create_barcode(barcode))
    }

    async fn delete_barcode(&self, id: &str) -> Result<bool, StoreError> {
        dispatch!(self, delete_barcode(id))
    }
}
