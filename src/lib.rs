//! Catalog scanner for the Rust Lab: lists the runnable example binaries
//! under `lessons/` and the topic directories under `recipes/`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod report;

pub use catalog::{list_examples, list_recipes, CatalogEntry, EntryKind, Listing};
pub use config::LabConfig;
pub use error::LabError;
