use std::time::Duration;

use anyhow::Context;
use fishshop_types::domain::barcode::Barcode;
use fishshop_types::domain::feedback::Feedback;
use fishshop_types::domain::order::{Order, OrderStatus};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct ShopClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct ShopClient {
    base: Url,
    client: reqwest::Client,
}

impl ShopClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ShopClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(ShopClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    pub async fn create_order(&self, req: &CreateOrderRequest) -> anyhow::Result<Order> {
        let res = self
            .client
            .post(self.url("orders")?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn get_order(&self, id: &str) -> anyhow::Result<Order> {
        let res = self
            .client
            .get(self.url(&format!("orders/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn list_orders(&self) -> anyhow::Result<Vec<Order>> {
        let res = self
            .client
            .get(self.url("orders")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn update_order(&self, id: &str, req: &UpdateOrderRequest) -> anyhow::Result<Order> {
        let res = self
            .client
            .patch(self.url(&format!("orders/{id}"))?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn delete_order(&self, id: &str) -> anyhow::Result<()> {
        self.client
            .delete(self.url(&format!("orders/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn submit_feedback(&self, req: &CreateFeedbackRequest) -> anyhow::Result<Feedback> {
        let res = self
            .client
            .post(self.url("feedback")?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn list_feedback(&self) -> anyhow::Result<Vec<Feedback>> {
        let res = self
            .client
            .get(self.url("feedback")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn delete_feedback(&self, id: &str) -> anyhow::Result<()> {
        self.client
            .delete(self.url(&format!("feedback/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn list_barcodes(&self) -> anyhow::Result<Vec<Barcode>> {
        let res = self
            .client
            .get(self.url("barcode")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn generate_qrcode(&self, req: &GenerateQrRequest) -> anyhow::Result<GeneratedQr> {
        let res = self
            .client
            .post(self.url("barcode/generate-qrcode")?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    /// `Ok(None)` when the shop does not know the value.
    pub async fn scan(&self, barcode_value: &str) -> anyhow::Result<Option<Barcode>> {
        let res = self
            .client
            .post(self.url("barcode/scan")?)
            .json(&ScanRequest {
                barcode_value: barcode_value.to_string(),
            })
            .send()
            .await?;
        if res.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(barcode_value, "scan returned not found");
            return Ok(None);
        }
        Ok(Some(res.error_for_status()?.json().await?))
    }
}

impl ShopClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<ShopClient> {
        if let Some(client) = self.client {
            return Ok(ShopClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(ShopClient {
            base: self.base,
            client,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub fish_type: String,
    pub quantity: f64,
    pub price_per_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

/// Unset fields are left out of the request body and so left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fish_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// `Some(None)` sends an explicit `null`, which clears the barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub rating: u8,
    pub comment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrRequest {
    pub fish_type: String,
    pub price_per_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQr {
    pub barcode_id: String,
    pub barcode_value: String,
    pub qr_code_image: String,
    pub fish_type: String,
    pub price_per_kg: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct ScanRequest {
    barcode_value: String,
}
