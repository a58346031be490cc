use std::path::Path;

use crate::model::PixelBuffer;

use super::{IoError, Result};

/// One decoded plane before it is placed in a store.
#[derive(Debug)]
pub(crate) struct DecodedPage {
    pub pixels: PixelBuffer,
    pub width: usize,
    pub height: usize,
    pub components: usize,
}

pub(crate) fn extension(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_string_lossy().to_string()))?;
    Ok(ext)
}

/// Components per pixel implied by a sample count, if it is a layout we keep.
pub(crate) fn components_for(samples: usize, width: usize, height: usize) -> Option<usize> {
    let plane = width * height;
    if plane == 0 || samples % plane != 0 {
        return None;
    }
    match samples / plane {
        components @ (1 | 3 | 4) => Some(components),
        _ => None,
    }
}

/// Stretches 16-bit samples over the full 8-bit range.
pub(crate) fn scale_to_u8(values: &[u16]) -> Vec<u8> {
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    if max == min {
        return vec![0; values.len()];
    }
    let range = f32::from(max - min);
    values
        .iter()
        .map(|value| ((f32::from(value - min) / range) * 255.0).round() as u8)
        .collect()
}

/// Splits packed `0xRRGGBB` pixels into interleaved RGB bytes.
pub(crate) fn unpack_rgb(values: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 3);
    for value in values {
        bytes.push(((value >> 16) & 0xff) as u8);
        bytes.push(((value >> 8) & 0xff) as u8);
        bytes.push((value & 0xff) as u8);
    }
    bytes
}
