pub mod barcode;
pub mod feedback;
pub mod order;
