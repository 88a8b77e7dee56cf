pub mod catalog_loader;
pub mod driver;

pub use catalog_loader::{load_catalog, parse_catalog};
pub use driver::{MosaicDriver, OutputOptions, RepaintResult};
