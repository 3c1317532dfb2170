// File: crates/plot-store/src/lib.rs
// Summary: Record store entry point; one CSV row per saved graph, addressed by 1-based position.

pub mod error;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use record::{decode, encode, format_number, Entry, EQUATION_SEPARATOR};
pub use store::{RecordStore, DEFAULT_FILE};
