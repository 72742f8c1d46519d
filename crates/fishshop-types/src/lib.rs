//! fishshop-types: domain records and storage/encoding ports shared by the
//! store adapters and the HTTP service.

pub mod domain;
pub mod ports;
