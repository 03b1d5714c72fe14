//! Resource Types - Core data types for the gateway resource model
//!
//! This crate contains the pure data structures shared by the attribute
//! catalog, the resource items and their consumers (REST layer, rule engine).
//! It holds no global state and performs no I/O.

mod descriptor;
mod types;
mod value;

pub use descriptor::*;
pub use types::*;
pub use value::*;
