use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use super::coerce::{de_f64, de_nullable, de_opt_f64};
use super::{json_body, Deleted};
use crate::application::ShopServices;
use crate::errors::AppError;
use fishshop_types::domain::order::{Order, OrderPatch, OrderStatus};
use fishshop_types::ports::record_store::RecordStore;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    pub fish_type: String,
    #[serde(deserialize_with = "de_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "de_f64")]
    pub price_per_kg: f64,
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Only fields present in the body are forwarded; anything else is ignored.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub fish_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub price_per_kg: Option<f64>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "de_nullable")]
    pub barcode: Option<Option<String>>,
}

impl From<UpdateOrderRequest> for OrderPatch {
    fn from(r: UpdateOrderRequest) -> Self {
        Self {
            customer_name: r.customer_name,
            customer_phone: r.customer_phone,
            fish_type: r.fish_type,
            quantity: r.quantity,
            price_per_kg: r.price_per_kg,
            status: r.status,
            barcode: r.barcode,
        }
    }
}

pub async fn list_orders<R>(
    State(services): State<Arc<ShopServices<R>>>,
) -> Result<Json<Vec<Order>>, AppError>
where
    R: RecordStore,
{
    let list = services.orders.list_orders().await?;
    Ok(Json(list))
}

pub async fn get_order<R>(
    State(services): State<Arc<ShopServices<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError>
where
    R: RecordStore,
{
    let order = services.orders.get_order(&id).await?;
    Ok(Json(order))
}

pub async fn create_order<R>(
    State(services): State<Arc<ShopServices<R>>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), AppError>
where
    R: RecordStore,
{
    let req = json_body(payload)?;
    let order = services
        .orders
        .create_order(
            req.customer_name,
            req.customer_phone,
            req.fish_type,
            req.quantity,
            req.price_per_kg,
            req.barcode,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_order<R>(
    State(services): State<Arc<ShopServices<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, AppError>
where
    R: RecordStore,
{
    let req = json_body(payload)?;
    let updated = services.orders.update_order(&id, req.into()).await?;
    Ok(Json(updated))
}

pub async fn delete_order<R>(
    State(services): State<Arc<ShopServices<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, AppError>
where
    R: RecordStore,
{
    services.orders.delete_order(&id).await?;
    Ok(Json(Deleted::new("Order deleted")))
}
