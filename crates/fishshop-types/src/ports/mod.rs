pub mod qr_encoder;
pub mod record_store;
