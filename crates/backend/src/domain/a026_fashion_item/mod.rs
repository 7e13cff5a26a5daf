pub mod barcode;
pub mod repository;
pub mod service;
