use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma, Rgb};

use crate::model::PixelBuffer;
use crate::viewer::ImageProcessor;

use super::util::{DecodedPage, scale_to_u8, unpack_rgb};
use super::{IoError, Result};

pub(crate) fn read_common_raster(path: &Path) -> Result<DecodedPage> {
    let image = image::open(path)?;
    let page = match image {
        DynamicImage::ImageLuma8(buffer) => {
            let (width, height) = buffer.dimensions();
            DecodedPage {
                pixels: PixelBuffer::U8(buffer.into_raw()),
                width: width as usize,
                height: height as usize,
                components: 1,
            }
        }
        DynamicImage::ImageLuma16(buffer) => {
            let (width, height) = buffer.dimensions();
            DecodedPage {
                pixels: PixelBuffer::U16(buffer.into_raw()),
                width: width as usize,
                height: height as usize,
                components: 1,
            }
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            DecodedPage {
                pixels: PixelBuffer::U8(rgb.into_raw()),
                width: width as usize,
                height: height as usize,
                components: 3,
            }
        }
    };
    Ok(page)
}

pub(crate) fn write_gray_or_rgb_png(path: &Path, processor: &ImageProcessor) -> Result<()> {
    let width = processor.width() as u32;
    let height = processor.height() as u32;
    match processor.pixels() {
        PixelBuffer::U8(values) => {
            let image = ImageBuffer::<Luma<u8>, _>::from_vec(width, height, values.clone())
                .ok_or_else(|| IoError::UnsupportedLayout("failed to construct gray image".into()))?;
            image.save(path)?;
        }
        PixelBuffer::U16(values) => {
            let image = ImageBuffer::<Luma<u8>, _>::from_vec(width, height, scale_to_u8(values))
                .ok_or_else(|| IoError::UnsupportedLayout("failed to construct gray image".into()))?;
            image.save(path)?;
        }
        PixelBuffer::U32(values) => {
            let image = ImageBuffer::<Rgb<u8>, _>::from_vec(width, height, unpack_rgb(values))
                .ok_or_else(|| IoError::UnsupportedLayout("failed to construct RGB image".into()))?;
            image.save(path)?;
        }
    }
    Ok(())
}
