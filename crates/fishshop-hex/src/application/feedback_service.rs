use crate::errors::AppError;
use fishshop_types::domain::feedback::{Feedback, NewFeedback};
use fishshop_types::ports::record_store::RecordStore;
use std::sync::Arc;

pub struct FeedbackService<R: RecordStore> {
    store: Arc<R>,
}

impl<R: RecordStore> FeedbackService<R> {
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    pub async fn create_feedback(
        &self,
        customer_name: String,
        customer_email: Option<String>,
        rating: i64,
        comment: String,
    ) -> Result<Feedback, AppError> {
        let feedback = NewFeedback::new(customer_name, customer_email, rating, comment)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let feedback = self.store.create_feedback(feedback).await?;
        tracing::info!(feedback_id = %feedback.id, rating = feedback.rating, "feedback received");
        Ok(feedback)
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, AppError> {
        let mut all = self.store.list_feedback().await?;
        all.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(all)
    }

    pub async fn delete_feedback(&self, id: &str) -> Result<(), AppError> {
        let removed = self.store.delete_feedback(id).await?;
        tracing::info!(feedback_id = id, removed, "feedback delete");
        Ok(())
    }
}
