use ndarray::{ArrayView3, Axis};

use super::{Coords, CoreError, Metadata, PixelType, Result};

/// Raw samples of an image, interleaved when there is more than one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl PixelBuffer {
    pub fn pixel_type(&self) -> PixelType {
        match self {
            Self::U8(_) => PixelType::U8,
            Self::U16(_) => PixelType::U16,
            Self::U32(_) => PixelType::U32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::U8(values) => values.len(),
            Self::U16(values) => values.len(),
            Self::U32(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A zero-filled buffer of the given encoding.
    pub fn zeroed(pixel_type: PixelType, len: usize) -> Self {
        match pixel_type {
            PixelType::U8 => Self::U8(vec![0; len]),
            PixelType::U16 => Self::U16(vec![0; len]),
            PixelType::U32 => Self::U32(vec![0; len]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixels: PixelBuffer,
    width: usize,
    height: usize,
    components: usize,
    coords: Coords,
    metadata: Metadata,
}

impl Image {
    pub fn new(
        pixels: PixelBuffer,
        width: usize,
        height: usize,
        components: usize,
        coords: Coords,
        metadata: Metadata,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidGeometry(format!(
                "image dimensions must be non-zero, found {width}x{height}"
            )));
        }
        if components == 0 {
            return Err(CoreError::InvalidGeometry(
                "image must have at least one component".into(),
            ));
        }
        let expected = width * height * components;
        if pixels.len() != expected {
            return Err(CoreError::BufferLengthMismatch {
                width,
                height,
                components,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            components,
            coords,
            metadata,
        })
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixel_type(&self) -> PixelType {
        self.pixels.pixel_type()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.pixel_type().bytes_per_sample() * self.components
    }

    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Extracts one plane out of an interleaved multi-component buffer.
    pub fn pixels_for_component(&self, component: usize) -> Result<PixelBuffer> {
        if component >= self.components {
            return Err(CoreError::ComponentOutOfRange {
                component,
                components: self.components,
            });
        }
        if self.components == 1 {
            return Ok(self.pixels.clone());
        }
        let shape = (self.height, self.width, self.components);
        match &self.pixels {
            PixelBuffer::U8(values) => {
                let view = ArrayView3::from_shape(shape, values.as_slice())?;
                Ok(PixelBuffer::U8(
                    view.index_axis(Axis(2), component).iter().copied().collect(),
                ))
            }
            PixelBuffer::U16(values) => {
                let view = ArrayView3::from_shape(shape, values.as_slice())?;
                Ok(PixelBuffer::U16(
                    view.index_axis(Axis(2), component).iter().copied().collect(),
                ))
            }
            PixelBuffer::U32(_) => Err(CoreError::UnsplittableEncoding(PixelType::U32)),
        }
    }
}
