use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Coords, Image, Metadata};
use crate::store::MemoryStore;
use crate::viewer::ImageProcessor;

use super::raster::{read_common_raster, write_gray_or_rgb_png};
use super::tiff::read_tiff_pages;
use super::util::{DecodedPage, extension};
use super::{IoError, Result};

/// How the pages of a multi-page file are spread over channel, z and time.
///
/// Pages are ordered channel-fastest, then z, then time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackLayout {
    pub channels: usize,
    pub slices: usize,
    pub frames: usize,
}

impl StackLayout {
    pub fn new(channels: usize, slices: usize, frames: usize) -> Self {
        Self {
            channels,
            slices,
            frames,
        }
    }

    /// All pages along z.
    pub fn z_stack(pages: usize) -> Self {
        Self::new(1, pages, 1)
    }

    pub fn page_count(&self) -> usize {
        self.channels * self.slices * self.frames
    }

    fn coords_of(&self, page: usize) -> Coords {
        let channel = page % self.channels;
        let z = (page / self.channels) % self.slices;
        let time = page / (self.channels * self.slices);
        let mut builder = Coords::builder();
        if self.channels > 1 {
            builder = builder.channel(channel);
        }
        if self.slices > 1 {
            builder = builder.z(z);
        }
        if self.frames > 1 {
            builder = builder.time(time);
        }
        builder.build()
    }
}

/// Loads every page of `path` into an in-memory store.
pub fn read_store(path: impl AsRef<Path>, layout: Option<StackLayout>) -> Result<MemoryStore> {
    let path = path.as_ref();
    let pages = match extension(path)?.as_str() {
        "png" | "jpg" | "jpeg" => vec![read_common_raster(path)?],
        "tif" | "tiff" => read_tiff_pages(path)?,
        other => return Err(IoError::UnsupportedFormat(other.to_string())),
    };

    let layout = layout.unwrap_or_else(|| StackLayout::z_stack(pages.len()));
    if layout.channels == 0 || layout.slices == 0 || layout.frames == 0 {
        return Err(IoError::UnsupportedLayout(format!(
            "layout {layout:?} has an empty axis"
        )));
    }
    if layout.page_count() != pages.len() {
        return Err(IoError::UnsupportedLayout(format!(
            "layout {}x{}x{} needs {} pages, file has {}",
            layout.channels,
            layout.slices,
            layout.frames,
            layout.page_count(),
            pages.len()
        )));
    }

    let store = MemoryStore::new();
    for (index, page) in pages.into_iter().enumerate() {
        let DecodedPage {
            pixels,
            width,
            height,
            components,
        } = page;
        let image = Image::new(
            pixels,
            width,
            height,
            components,
            layout.coords_of(index),
            Metadata::from_source(path),
        )?;
        store.put_image(image);
    }
    log::debug!("loaded {} images from {}", store.len(), path.display());
    Ok(store)
}

/// Writes a processor as an 8-bit PNG.
pub fn write_processor_png(processor: &ImageProcessor, path: impl AsRef<Path>) -> Result<()> {
    write_gray_or_rgb_png(path.as_ref(), processor)
}
