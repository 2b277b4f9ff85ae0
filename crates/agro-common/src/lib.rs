//! Common types and utilities shared across SmartAgroX services.

pub mod bbox;
pub mod boundary;
pub mod date;
pub mod error;

pub use bbox::BoundingBox;
pub use boundary::BoundaryGeometry;
pub use date::{format_date, parse_date, DATE_FORMAT};
pub use error::{AgroError, AgroResult};
