#[derive(thiserror::Error, Debug)]
#[error("qr encoding failed: {0}")]
pub struct QrError(pub String);

/// Turns a text payload into a displayable image, returned as a data URL.
pub trait QrEncoder: Send + Sync + 'static {
    fn encode(&self, payload: &str) -> Result<String, QrError>;
}
