//! pws-core - Core library for pws-export
//!
//! This crate turns personal-weather-station API responses into flat,
//! rectangular tables and serializes them as XLSX or CSV downloads.
//! It covers the record model, the flattener, table building, the
//! exporters, and the per-format export state machine.

pub mod error;
pub mod config;
pub mod endpoint;
pub mod record;
pub mod response;
pub mod flatten;
pub mod table;
pub mod export;
pub mod state;

pub use error::{PwsError, Result};
pub use endpoint::{Endpoint, NumericPrecision, Unit};
pub use record::{FlatRecord, Leaf, Node, Record};
pub use response::RawResponse;
