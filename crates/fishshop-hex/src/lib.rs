//! fishshop-hex: fish shop back office library (application services +
//! inbound HTTP + outbound QR rendering)

pub mod config;
pub mod errors;

pub mod application;

pub use fishshop_types::{domain, ports};

pub mod inbound; // HTTP adapter (server + handlers)
pub mod outbound; // QR image encoder
