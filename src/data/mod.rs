pub mod ingest;
pub mod loader;
