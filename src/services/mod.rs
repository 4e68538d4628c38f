//! Service layer
//!
//! Handlers stay thin and delegate to the services in this module.

pub mod catalog;

pub use catalog::{CatalogService, ExtraArgs};
