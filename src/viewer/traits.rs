use std::sync::{Arc, Mutex};

use crate::model::PixelBuffer;

use super::{ImageProcessor, StackExtents, StackPosition};

pub type SharedViewer = Arc<Mutex<dyn StackViewer + Send>>;

/// Image source a three-axis viewer pulls its slices from. Indices are 1-based.
pub trait VirtualStack {
    fn pixels(&mut self, flat_index: usize) -> Option<PixelBuffer>;

    fn processor(&mut self, flat_index: usize) -> Option<ImageProcessor>;

    fn size(&self) -> usize;

    fn slice_label(&self, flat_index: usize) -> String {
        flat_index.to_string()
    }
}

/// A channel/z/time viewer that displays a [`VirtualStack`].
pub trait StackViewer {
    /// Total number of addressable slices.
    fn stack_size(&self) -> usize;

    fn convert_index_to_position(&self, flat_index: usize) -> StackPosition;

    fn extents(&self) -> StackExtents;

    /// Resizes the viewer through its normal, validating path.
    fn set_dimensions(&mut self, extents: StackExtents);

    fn supports_unverified_dimensions(&self) -> bool {
        false
    }

    /// Records new extents without validation or window side effects. Only
    /// called when [`StackViewer::supports_unverified_dimensions`] is true.
    fn set_dimensions_unverified(&mut self, _extents: StackExtents) {}

    fn position(&self) -> StackPosition;

    /// Flat index of the current position.
    fn current_slice(&self) -> usize;

    fn set_position(&mut self, position: StackPosition);

    /// True when several channels are overlaid at once.
    fn is_composite_mode(&self) -> bool;

    /// Processor backing the 1-based `channel` of a composite view.
    fn channel_processor_mut(&mut self, channel: usize) -> Option<&mut ImageProcessor>;
}
