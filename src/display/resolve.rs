use std::sync::Arc;

use crate::config::MissingImagePolicy;
use crate::model::{Coords, Image, Metadata, PixelBuffer, PixelType};
use crate::viewer::VirtualStack;

use super::util::lock;
use super::{DisplayError, Result, StoreStack};

impl StoreStack {
    /// Image the viewer should show at `flat_index`.
    ///
    /// Never reports a coordinate as empty: when the store has nothing there
    /// yet, the last image of the same channel or a blank frame stands in.
    pub fn resolve_image(&mut self, flat_index: usize) -> Result<Arc<Image>> {
        let size = match self.viewer() {
            Some(viewer) => lock(&viewer).stack_size(),
            None => self.size(),
        };
        if flat_index == 0 || flat_index > size {
            log::error!("stack asked for image at {flat_index} that exceeds total of {size} images");
            return Err(DisplayError::IndexOutOfRange {
                index: flat_index,
                size,
            });
        }

        let coords = self.map_flat_index_to_coords(flat_index);
        let channel = coords.channel();
        let stored = if self.store.has_image(&coords) {
            self.store.image(&coords)
        } else {
            None
        };
        if let Some(image) = stored {
            if let Some(channel) = channel {
                self.last_valid.insert(channel, Arc::clone(&image));
            }
            return Ok(image);
        }

        if self.config.missing_images == MissingImagePolicy::LastValid {
            if let Some(image) = channel.and_then(|channel| self.last_valid.get(&channel)) {
                log::debug!("no image at {coords}, reusing last image of channel {channel:?}");
                return Ok(Arc::clone(image));
            }
        }

        let blank = Arc::new(self.synthesize_blank(&coords)?);
        if let Some(channel) = channel {
            self.last_valid.insert(channel, Arc::clone(&blank));
        }
        Ok(blank)
    }

    /// Zero-filled image with the geometry of an arbitrary stored image.
    pub fn synthesize_blank(&self, coords: &Coords) -> Result<Image> {
        let Some(template) = self.store.any_image() else {
            log::error!("unable to find any image to base a blank image on");
            return Err(DisplayError::NoTemplateImage);
        };
        let size = template.width() * template.height() * template.components();
        let pixels = match template.pixel_type() {
            PixelType::U8 => PixelBuffer::zeroed(PixelType::U8, size),
            PixelType::U16 => PixelBuffer::zeroed(PixelType::U16, size),
            other => {
                log::error!("unrecognized pixel encoding {other:?}, cannot generate a blank image");
                return Err(DisplayError::UnsupportedEncoding(other));
            }
        };
        Ok(Image::new(
            pixels,
            template.width(),
            template.height(),
            template.components(),
            coords.clone(),
            Metadata::default(),
        )?)
    }
}
