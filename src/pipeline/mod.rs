//! Validation, ingestion and rendering around the store.

pub mod ingest;
pub mod normalizer;
pub mod reporter;
pub mod seed;
