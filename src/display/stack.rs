use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::DisplayConfig;
use crate::model::{Coords, Image, PixelBuffer};
use crate::store::SharedStore;
use crate::viewer::{
    DefaultConverter, ImageProcessor, ProcessorConverter, SharedViewer, VirtualStack,
};

use super::util::{lock, stack_size};
use super::{DisplayError, DisplayEvent, EventBus, Result, SubscriptionId};

type ViewerSlot = Arc<Mutex<Option<SharedViewer>>>;

/// Presents an [`ImageStore`](crate::store::ImageStore) as a channel/z/time
/// [`VirtualStack`].
///
/// Axes the viewer cannot address (stage position, for instance) are taken
/// from the current coordinate, which [`StoreStack::set_coords`] moves.
pub struct StoreStack {
    pub(super) store: SharedStore,
    pub(super) bus: Arc<EventBus>,
    pub(super) viewer: ViewerSlot,
    pub(super) converter: Arc<dyn ProcessorConverter>,
    pub(super) config: DisplayConfig,
    pub(super) cur_coords: Coords,
    pub(super) last_valid: HashMap<usize, Arc<Image>>,
    subscription: SubscriptionId,
}

impl fmt::Debug for StoreStack {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StoreStack")
            .field("cur_coords", &self.cur_coords)
            .field("cached_channels", &self.last_valid.len())
            .field("has_viewer", &self.viewer().is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl StoreStack {
    /// Binds a stack to `store` and starts listening on `bus` for viewer
    /// replacements.
    pub fn new(store: SharedStore, bus: Arc<EventBus>, viewer: Option<SharedViewer>) -> Self {
        let viewer: ViewerSlot = Arc::new(Mutex::new(viewer));
        let slot = Arc::clone(&viewer);
        let subscription = bus.subscribe(move |event| {
            if let DisplayEvent::NewViewer(replacement) = event {
                *lock(&slot) = Some(Arc::clone(replacement));
            }
        });
        Self {
            store,
            bus,
            viewer,
            converter: Arc::new(DefaultConverter),
            config: DisplayConfig::default(),
            cur_coords: Coords::default(),
            last_valid: HashMap::new(),
            subscription,
        }
    }

    pub fn with_config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_converter(mut self, converter: Arc<dyn ProcessorConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn current_coords(&self) -> &Coords {
        &self.cur_coords
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn viewer(&self) -> Option<SharedViewer> {
        lock(&self.viewer).clone()
    }

    /// The attached viewer, or [`DisplayError::NoViewer`].
    pub fn require_viewer(&self) -> Result<SharedViewer> {
        self.viewer().ok_or(DisplayError::NoViewer)
    }

    pub fn replace_viewer(&mut self, viewer: Option<SharedViewer>) {
        *lock(&self.viewer) = viewer;
    }

    /// Last image resolved for `channel`, if any.
    pub fn last_valid_image(&self, channel: usize) -> Option<&Arc<Image>> {
        self.last_valid.get(&channel)
    }
}

impl Drop for StoreStack {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.subscription);
    }
}

impl VirtualStack for StoreStack {
    fn pixels(&mut self, flat_index: usize) -> Option<PixelBuffer> {
        if let Err(error) = self.require_viewer() {
            log::error!("asked for pixels at {flat_index}: {error}");
            return None;
        }
        let image = match self.resolve_image(flat_index) {
            Ok(image) => image,
            Err(error) => {
                log::error!("no image at {flat_index} ({}): {error}", self.cur_coords);
                return None;
            }
        };
        if image.components() == 1 {
            return Some(image.pixels().clone());
        }
        let component = (flat_index - 1) % image.components();
        match image.pixels_for_component(component) {
            Ok(pixels) => Some(pixels),
            Err(error) => {
                log::error!("cannot extract component {component} at {flat_index}: {error}");
                None
            }
        }
    }

    fn processor(&mut self, flat_index: usize) -> Option<ImageProcessor> {
        if let Err(error) = self.require_viewer() {
            log::error!("asked for a processor at {flat_index}: {error}");
            return None;
        }
        let image = match self.resolve_image(flat_index) {
            Ok(image) => image,
            Err(error) => {
                log::error!("no processor for index {flat_index}: {error}");
                return None;
            }
        };
        match self.converter.create_processor(&image) {
            Ok(processor) => Some(processor),
            Err(error) => {
                log::error!(
                    "unable to create processor from {:?} image: dimensions ({}x{}) and pixel length {}: {error}",
                    image.pixel_type(),
                    image.width(),
                    image.height(),
                    image.pixels().len()
                );
                None
            }
        }
    }

    fn size(&self) -> usize {
        stack_size(self.store.as_ref())
    }
}
