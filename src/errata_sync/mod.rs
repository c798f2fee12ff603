/// Core ingestion logic: aggregate document parsing, year indexing and
/// per-errata detail fetching.
pub mod domain;
pub mod services;
