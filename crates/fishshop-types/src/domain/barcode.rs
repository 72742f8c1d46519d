use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest QR payload accepted, in bytes. A version 40 code at medium error
/// correction holds 2331 bytes.
pub const MAX_QR_PAYLOAD_BYTES: usize = 2048;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    pub id: String,
    pub barcode_value: String,
    pub fish_type: String,
    pub price_per_kg: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBarcode {
    /// Derived as `{fish_type}-{millis}` when left empty.
    pub barcode_value: Option<String>,
    pub fish_type: String,
    pub price_per_kg: f64,
    pub description: Option<String>,
}

impl NewBarcode {
    pub fn new(
        fish_type: String,
        price_per_kg: f64,
        description: Option<String>,
    ) -> anyhow::Result<Self> {
        if fish_type.trim().is_empty() {
            anyhow::bail!("fishType is required");
        }
        if !price_per_kg.is_finite() || price_per_kg <= 0.0 {
            anyhow::bail!("pricePerKg must be a positive number");
        }
        let placeholder_id = Uuid::nil().to_string();
        let payload = qr_payload(&placeholder_id, &fish_type, price_per_kg, &description);
        if payload.len() > MAX_QR_PAYLOAD_BYTES {
            anyhow::bail!("fishType and description are too long to fit in a QR code");
        }
        Ok(Self {
            barcode_value: None,
            fish_type,
            price_per_kg,
            description,
        })
    }

    pub fn into_barcode(self) -> Barcode {
        let now = Utc::now();
        let barcode_value = self
            .barcode_value
            .unwrap_or_else(|| format!("{}-{}", self.fish_type, now.timestamp_millis()));
        Barcode {
            id: Uuid::new_v4().to_string(),
            barcode_value,
            fish_type: self.fish_type,
            price_per_kg: self.price_per_kg,
            description: self.description,
            date_added: now,
        }
    }
}

impl Barcode {
    /// Payload embedded in the printed QR code.
    pub fn qr_payload(&self) -> String {
        qr_payload(
            &self.id,
            &self.fish_type,
            self.price_per_kg,
            &self.description,
        )
    }
}

fn qr_payload(
    id: &str,
    fish_type: &str,
    price_per_kg: f64,
    description: &Option<String>,
) -> String {
    serde_json::json!({
        "id": id,
        "fishType": fish_type,
        "pricePerKg": price_per_kg,
        "description": description,
    })
    .to_string()
}

/// Catalogue inserted into an empty barcode collection at startup.
pub fn sample_barcodes() -> Vec<NewBarcode> {
    [
        ("ROHU-001", "Rohu", 180.0, "Freshwater fish, rich in protein"),
        ("KATLA-001", "Katla", 200.0, "Large freshwater carp"),
        (
            "HILSA-001",
            "Hilsa",
            450.0,
            "Premium saltwater fish, known as the king of fish",
        ),
    ]
    .into_iter()
    .map(|(value, fish, price, desc)| NewBarcode {
        barcode_value: Some(value.to_string()),
        fish_type: fish.to_string(),
        price_per_kg: price,
        description: Some(desc.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_value_from_fish_type() {
        let b = NewBarcode::new("Katla".into(), 200.0, Some("carp".into()))
            .unwrap()
            .into_barcode();
        let suffix = b.barcode_value.strip_prefix("Katla-").unwrap();
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[test]
    fn keeps_supplied_value() {
        let seeds = sample_barcodes();
        assert_eq!(seeds.len(), 3);
        let b = seeds[2].clone().into_barcode();
        assert_eq!(b.barcode_value, "HILSA-001");
        assert_eq!(b.price_per_kg, 450.0);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(NewBarcode::new("".into(), 10.0, None).is_err());
        assert!(NewBarcode::new("Rohu".into(), -1.0, None).is_err());
    }

    #[test]
    fn rejects_text_too_long_for_a_qr_code() {
        let err = NewBarcode::new("Rohu".into(), 180.0, Some("x".repeat(5000))).unwrap_err();
        assert!(err.to_string().contains("too long"));
        assert!(NewBarcode::new("x".repeat(3000), 180.0, None).is_err());
        assert!(NewBarcode::new("Rohu".into(), 180.0, Some("x".repeat(1500))).is_ok());
    }

    #[test]
    fn qr_payload_carries_summary() {
        let b = NewBarcode::new("Rohu".into(), 180.0, None)
            .unwrap()
            .into_barcode();
        let v: serde_json::Value = serde_json::from_str(&b.qr_payload()).unwrap();
        assert_eq!(v["id"], b.id.as_str());
        assert_eq!(v["fishType"], "Rohu");
        assert_eq!(v["pricePerKg"], 180.0);
        assert!(v["description"].is_null());
    }
}
