//! Solar Store - Data source adapters
//!
//! This crate provides adapter implementations of the project and generation
//! source ports: file-backed JSON and CSV readers for deployment, and
//! in-memory sources for development and testing.

pub mod generation;
pub mod memory;
pub mod projects;

pub use generation::CsvGenerationSource;
pub use memory::{MemoryGenerationSource, MemoryProjectSource};
pub use projects::JsonProjectSource;
