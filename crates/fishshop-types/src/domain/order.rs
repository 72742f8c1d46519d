use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    pub fish_type: String,
    pub quantity: f64,
    pub price_per_kg: f64,
    pub total_price: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub barcode: Option<String>,
    pub order_date: DateTime<Utc>,
}

/// An order as submitted, before the store assigns its id and date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub fish_type: String,
    pub quantity: f64,
    pub price_per_kg: f64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub barcode: Option<String>,
}

/// Fields a caller may overwrite on an existing order. `barcode` is doubly
/// optional so that an explicit `null` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub fish_type: Option<String>,
    pub quantity: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub status: Option<OrderStatus>,
    pub barcode: Option<Option<String>>,
}

fn check_positive(field: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("{field} must be a positive number");
    }
    Ok(())
}

impl NewOrder {
    /// Validates the submitted fields and prices the order. New orders always
    /// start out pending.
    pub fn new(
        customer_name: String,
        customer_phone: String,
        fish_type: String,
        quantity: f64,
        price_per_kg: f64,
        barcode: Option<String>,
    ) -> anyhow::Result<Self> {
        if customer_name.trim().is_empty() {
            anyhow::bail!("customerName is required");
        }
        if fish_type.trim().is_empty() {
            anyhow::bail!("fishType is required");
        }
        check_positive("quantity", quantity)?;
        check_positive("pricePerKg", price_per_kg)?;
        Ok(Self {
            customer_name,
            customer_phone,
            fish_type,
            quantity,
            price_per_kg,
            total_price: quantity * price_per_kg,
            status: OrderStatus::Pending,
            barcode: barcode.filter(|b| !b.is_empty()),
        })
    }

    pub fn into_order(self) -> Order {
        Order {
            id: Uuid::new_v4().to_string(),
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            fish_type: self.fish_type,
            quantity: self.quantity,
            price_per_kg: self.price_per_kg,
            total_price: self.total_price,
            status: self.status,
            barcode: self.barcode,
            order_date: Utc::now(),
        }
    }
}

impl OrderPatch {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(name) = &self.customer_name {
            if name.trim().is_empty() {
                anyhow::bail!("customerName must not be empty");
            }
        }
        if let Some(fish) = &self.fish_type {
            if fish.trim().is_empty() {
                anyhow::bail!("fishType must not be empty");
            }
        }
        if let Some(q) = self.quantity {
            check_positive("quantity", q)?;
        }
        if let Some(p) = self.price_per_kg {
            check_positive("pricePerKg", p)?;
        }
        Ok(())
    }

    pub fn touches_price(&self) -> bool {
        self.quantity.is_some() || self.price_per_kg.is_some()
    }
}

impl Order {
    /// Shallow overwrite of every field present in `patch`. The total is
    /// re-derived only when one of its factors was supplied.
    pub fn apply(&mut self, patch: OrderPatch) {
        let reprice = patch.touches_price();
        if let Some(v) = patch.customer_name {
            self.customer_name = v;
        }
        if let Some(v) = patch.customer_phone {
            self.customer_phone = v;
        }
        if let Some(v) = patch.fish_type {
            self.fish_type = v;
        }
        if let Some(v) = patch.quantity {
            self.quantity = v;
        }
        if let Some(v) = patch.price_per_kg {
            self.price_per_kg = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.barcode {
            self.barcode = v;
        }
        if reprice {
            self.total_price = self.quantity * self.price_per_kg;
        }
    }
}
