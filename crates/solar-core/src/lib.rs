//! Solar Core - Domain models, caches, and query logic
//!
//! This crate contains the in-memory data-access layer for the solar projects
//! API: the project store, the lazily populated generation cache, the
//! max-output calculator and the query facade on top of them.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod ports;
pub mod query;
pub mod store;

pub use aggregate::MaxOutputCalculator;
pub use cache::MemoCache;
pub use error::{ErrorKind, Result, SolarError};
pub use generation::GenerationCache;
pub use query::{Lookup, MaxOutputLookup, NameList, QueryService};
pub use store::ProjectStore;
