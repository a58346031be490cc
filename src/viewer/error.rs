use thiserror::Error;

use crate::model::{CoreError, PixelType};

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("cannot convert {components}-component {pixel_type:?} image into a processor")]
    UnsupportedImage {
        pixel_type: PixelType,
        components: usize,
    },

    #[error("processor expects {expected} {pixel_type:?} pixels, received {actual} {actual_type:?} pixels")]
    PixelsMismatch {
        pixel_type: PixelType,
        expected: usize,
        actual_type: PixelType,
        actual: usize,
    },

    #[error("invalid stack extents: {0}")]
    InvalidExtents(String),

    #[error("image model error: {0}")]
    Core(#[from] CoreError),
}
