use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use super::coerce::de_truncated_int;
use super::{json_body, Deleted};
use crate::application::ShopServices;
use crate::errors::AppError;
use fishshop_types::domain::feedback::Feedback;
use fishshop_types::ports::record_store::RecordStore;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(deserialize_with = "de_truncated_int")]
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

pub async fn list_feedback<R>(
    State(services): State<Arc<ShopServices<R>>>,
) -> Result<Json<Vec<Feedback>>, AppError>
where
    R: RecordStore,
{
    Ok(Json(services.feedback.list_feedback().await?))
}

pub async fn create_feedback<R>(
    State(services): State<Arc<ShopServices<R>>>,
    payload: Result<Json<CreateFeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Feedback>), AppError>
where
    R: RecordStore,
{
    let req = json_body(payload)?;
    let feedback = services
        .feedback
        .create_feedback(req.customer_name, req.customer_email, req.rating, req.comment)
        .await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

pub async fn delete_feedback<R>(
    State(services): State<Arc<ShopServices<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, AppError>
where
    R: RecordStore,
{
    services.feedback.delete_feedback(&id).await?;
    Ok(Json(Deleted::new("Feedback deleted")))
}
