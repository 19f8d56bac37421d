pub mod autofill_service;
pub mod catalog_service;
