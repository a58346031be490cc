use serde::{Deserialize, Serialize};

use super::{ImageProcessor, Result, StackExtents, StackPosition, StackViewer, ViewerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Color,
    Composite,
}

/// Headless channel/z/time viewer.
///
/// Keeps the state a windowed viewer would show: extents, the current
/// position, the display mode and one processor per channel for composite
/// rendering.
#[derive(Debug, Clone, Default)]
pub struct HyperStackViewer {
    extents: StackExtents,
    position: StackPosition,
    mode: DisplayMode,
    unverified_dimensions: bool,
    channel_processors: Vec<ImageProcessor>,
}

impl HyperStackViewer {
    pub fn new(extents: StackExtents) -> Result<Self> {
        validate_extents(extents)?;
        Ok(Self {
            extents,
            ..Self::default()
        })
    }

    /// Opts into [`StackViewer::set_dimensions_unverified`].
    pub fn with_unverified_dimensions(mut self) -> Self {
        self.unverified_dimensions = true;
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Installs the per-channel processors used in composite mode, channel 1 first.
    pub fn set_channel_processors(&mut self, processors: Vec<ImageProcessor>) {
        self.channel_processors = processors;
    }

    pub fn channel_processors(&self) -> &[ImageProcessor] {
        &self.channel_processors
    }
}

impl StackViewer for HyperStackViewer {
    fn stack_size(&self) -> usize {
        self.extents.size()
    }

    fn convert_index_to_position(&self, flat_index: usize) -> StackPosition {
        self.extents.position_of(flat_index)
    }

    fn extents(&self) -> StackExtents {
        self.extents
    }

    fn set_dimensions(&mut self, extents: StackExtents) {
        if let Err(error) = validate_extents(extents) {
            log::warn!("ignoring stack dimensions {extents:?}: {error}");
            return;
        }
        self.extents = extents;
        self.position = extents.clamp(self.position);
        self.channel_processors.truncate(extents.channels);
    }

    fn supports_unverified_dimensions(&self) -> bool {
        self.unverified_dimensions
    }

    fn set_dimensions_unverified(&mut self, extents: StackExtents) {
        self.extents = extents;
    }

    fn position(&self) -> StackPosition {
        self.position
    }

    fn current_slice(&self) -> usize {
        self.extents.index_of(self.position)
    }

    fn set_position(&mut self, position: StackPosition) {
        self.position = self.extents.clamp(position);
    }

    fn is_composite_mode(&self) -> bool {
        self.mode == DisplayMode::Composite
    }

    fn channel_processor_mut(&mut self, channel: usize) -> Option<&mut ImageProcessor> {
        channel
            .checked_sub(1)
            .and_then(|index| self.channel_processors.get_mut(index))
    }
}

fn validate_extents(extents: StackExtents) -> Result<()> {
    if extents.channels == 0 || extents.slices == 0 || extents.frames == 0 {
        return Err(ViewerError::InvalidExtents(format!(
            "every extent must be at least 1, found {}x{}x{}",
            extents.channels, extents.slices, extents.frames
        )));
    }
    Ok(())
}
