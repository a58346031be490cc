mod api;
mod error;
mod raster;
mod tiff;
mod util;


pub use api::{StackLayout, read_store, write_processor_png};
pub use error::{IoError, Result};
