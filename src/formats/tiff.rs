use std::fs::File;
use std::path::Path;

use crate::model::PixelBuffer;
use tiff::decoder::{Decoder, DecodingResult};

use super::util::{DecodedPage, components_for};
use super::{IoError, Result};

pub(crate) fn read_tiff_pages(path: &Path) -> Result<Vec<DecodedPage>> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let mut pages = Vec::new();

    loop {
        pages.push(decode_tiff_page(&mut decoder, width as usize, height as usize)?);
        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
        let (other_width, other_height) = decoder.dimensions()?;
        if other_width != width || other_height != height {
            return Err(IoError::UnsupportedLayout(
                "TIFF pages must have identical dimensions".into(),
            ));
        }
    }
    Ok(pages)
}

fn decode_tiff_page(
    decoder: &mut Decoder<File>,
    width: usize,
    height: usize,
) -> Result<DecodedPage> {
    let (pixels, samples) = match decoder.read_image()? {
        DecodingResult::U8(buffer) => {
            let samples = buffer.len();
            (PixelBuffer::U8(buffer), samples)
        }
        DecodingResult::U16(buffer) => {
            if buffer.len() != width * height {
                return Err(IoError::UnsupportedLayout(
                    "16-bit TIFF pages must be single-channel".into(),
                ));
            }
            let samples = buffer.len();
            (PixelBuffer::U16(buffer), samples)
        }
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "unsupported TIFF sample type: {other:?}"
            )));
        }
    };
    let components = components_for(samples, width, height).ok_or_else(|| {
        IoError::UnsupportedLayout(format!(
            "{samples} samples do not fit a {width}x{height} page"
        ))
    })?;
    Ok(DecodedPage {
        pixels,
        width,
        height,
        components,
    })
}
