use crate::model::{Image, PixelBuffer, PixelType};

use super::{Result, ViewerError};

/// A single-plane pixel surface the viewer renders from.
///
/// Gray images keep their encoding; colour images are packed `0x00RRGGBB`
/// words in a `U32` buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageProcessor {
    width: usize,
    height: usize,
    pixels: PixelBuffer,
}

impl ImageProcessor {
    pub fn new(width: usize, height: usize, pixels: PixelBuffer) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(ViewerError::PixelsMismatch {
                pixel_type: pixels.pixel_type(),
                expected,
                actual_type: pixels.pixel_type(),
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn blank(width: usize, height: usize, pixel_type: PixelType) -> Self {
        Self {
            width,
            height,
            pixels: PixelBuffer::zeroed(pixel_type, width * height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixel_type(&self) -> PixelType {
        self.pixels.pixel_type()
    }

    /// Swaps in a new plane of the same encoding and size.
    pub fn set_pixels(&mut self, pixels: PixelBuffer) -> Result<()> {
        let expected = self.width * self.height;
        if pixels.pixel_type() != self.pixel_type() || pixels.len() != expected {
            return Err(ViewerError::PixelsMismatch {
                pixel_type: self.pixel_type(),
                expected,
                actual_type: pixels.pixel_type(),
                actual: pixels.len(),
            });
        }
        self.pixels = pixels;
        Ok(())
    }

    pub fn min_max(&self) -> Option<(u32, u32)> {
        let values: Box<dyn Iterator<Item = u32> + '_> = match &self.pixels {
            PixelBuffer::U8(values) => Box::new(values.iter().map(|value| u32::from(*value))),
            PixelBuffer::U16(values) => Box::new(values.iter().map(|value| u32::from(*value))),
            PixelBuffer::U32(values) => Box::new(values.iter().copied()),
        };
        values.fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
    }
}

/// Turns store images into viewer processors.
pub trait ProcessorConverter: Send + Sync {
    fn create_processor(&self, image: &Image) -> Result<ImageProcessor>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultConverter;

impl ProcessorConverter for DefaultConverter {
    fn create_processor(&self, image: &Image) -> Result<ImageProcessor> {
        let (width, height, components) = (image.width(), image.height(), image.components());
        match (image.pixels(), components) {
            (pixels, 1) => ImageProcessor::new(width, height, pixels.clone()),
            (PixelBuffer::U8(values), 3 | 4) => {
                let packed = values
                    .chunks_exact(components)
                    .map(|pixel| {
                        (u32::from(pixel[0]) << 16) | (u32::from(pixel[1]) << 8) | u32::from(pixel[2])
                    })
                    .collect();
                ImageProcessor::new(width, height, PixelBuffer::U32(packed))
            }
            (pixels, _) => Err(ViewerError::UnsupportedImage {
                pixel_type: pixels.pixel_type(),
                components,
            }),
        }
    }
}
