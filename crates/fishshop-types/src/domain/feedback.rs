use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub rating: u8,
    pub comment: String,
}

impl NewFeedback {
    pub fn new(
        customer_name: String,
        customer_email: Option<String>,
        rating: i64,
        comment: String,
    ) -> anyhow::Result<Self> {
        if customer_name.trim().is_empty() {
            anyhow::bail!("customerName is required");
        }
        if !(1..=5).contains(&rating) {
            anyhow::bail!("rating must be between 1 and 5");
        }
        Ok(Self {
            customer_name,
            customer_email: customer_email.filter(|e| !e.trim().is_empty()),
            rating: rating as u8,
            comment,
        })
    }

    pub fn into_feedback(self) -> Feedback {
        Feedback {
            id: Uuid::new_v4().to_string(),
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            rating: self.rating,
            comment: self.comment,
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        for bad in [0, 6, -1] {
            assert!(NewFeedback::new("A".into(), None, bad, "".into()).is_err());
        }
        let ok = NewFeedback::new("A".into(), Some("".into()), 5, "great".into()).unwrap();
        assert_eq!(ok.rating, 5);
        assert!(ok.customer_email.is_none());
    }

    #[test]
    fn requires_name() {
        assert!(NewFeedback::new("  ".into(), None, 3, "ok".into()).is_err());
    }
}
