mod axis;
mod coords;
mod error;
mod image;
mod metadata;


pub use axis::{CHANNEL, PixelType, STAGE_POSITION, TIME, VIEWER_AXES, Z, is_viewer_axis};
pub use coords::{Coords, CoordsBuilder};
pub use error::{CoreError, Result};
pub use self::image::{Image, PixelBuffer};
pub use metadata::Metadata;
