//! Catalog API module
//!
//! `types` holds the normalized response model, `client` the HTTP side.

pub mod client;
pub mod types;
