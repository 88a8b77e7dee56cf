//! The catalog of buildable colors and the shape-constrained color search.

mod catalog;
mod error;
mod shape;

pub use catalog::{ColorCatalog, Swatch};
pub use error::CatalogError;
pub use shape::{Availability, ShapeCategory};
