use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use fishshop_types::ports::qr_encoder::{QrEncoder, QrError};
use qrcode::render::svg;
use qrcode::QrCode;

const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Renders QR codes as base64 SVG data URLs that browsers can show directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgQrEncoder;

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, payload: &str) -> Result<String, QrError> {
        let code = QrCode::new(payload.as_bytes()).map_err(|e| QrError(e.to_string()))?;
        let image = code
            .render::<svg::Color>()
            .min_dimensions(200, 200)
            .build();
        Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(image)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_svg_data_url() {
        let url = SvgQrEncoder
            .encode(r#"{"id":"1","fishType":"Rohu"}"#)
            .unwrap();
        let b64 = url.strip_prefix(DATA_URL_PREFIX).unwrap();
        let svg = String::from_utf8(STANDARD.decode(b64).unwrap()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn oversized_payload_fails() {
        let huge = "x".repeat(8000);
        assert!(SvgQrEncoder.encode(&huge).is_err());
    }
}
