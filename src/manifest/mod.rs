//! Manifest module: collected image records and their CSV form.

pub mod csv;
pub mod record;

pub use csv::{Manifest, CSV_HEADER};
pub use record::ImageRecord;
