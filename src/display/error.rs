use thiserror::Error;

use crate::model::{CoreError, PixelType};

pub type Result<T> = std::result::Result<T, DisplayError>;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("stack asked for image at {index} outside of 1..={size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("no viewer is attached to the stack")]
    NoViewer,

    #[error("unable to find any image to base a blank image on")]
    NoTemplateImage,

    #[error("unsupported pixel encoding {0:?}: cannot generate a blank image")]
    UnsupportedEncoding(PixelType),

    #[error("image model error: {0}")]
    Core(#[from] CoreError),
}
