use thiserror::Error;

use super::PixelType;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(
        "pixel buffer length mismatch: {width}x{height} with {components} components needs {expected} samples, found {actual}"
    )]
    BufferLengthMismatch {
        width: usize,
        height: usize,
        components: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid image geometry: {0}")]
    InvalidGeometry(String),

    #[error("component {component} out of range for image with {components} components")]
    ComponentOutOfRange { component: usize, components: usize },

    #[error("cannot split {0:?} pixels into components")]
    UnsplittableEncoding(PixelType),

    #[error("pixel layout error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
