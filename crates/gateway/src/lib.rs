//! Gateway resource model
//!
//! This crate holds the in-memory model every device, group and gateway
//! config entity is built on:
//! - The process-wide attribute catalog (`catalog`)
//! - Typed value cells with change tracking (`item`)
//! - Per-entity attribute collections (`resource`)
//! - Device aggregation and JSON views (`device`)
//! - Model files with extra attributes and seed resources (`config`)

// Re-export core crates
pub use resource_types;

pub mod catalog;
pub mod config;
pub mod device;
pub mod error;
pub mod item;
pub mod resource;
pub mod suffix;

pub use catalog::AttributeCatalog;
pub use error::{Error, Result};
pub use item::ResourceItem;
pub use resource::Resource;
