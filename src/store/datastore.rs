use std::sync::Arc;

use crate::model::{Coords, Image};

pub type SharedStore = Arc<dyn ImageStore>;

/// Read access to a multi-axis image dataset.
///
/// Implementations may be written to concurrently by an acquisition, so every
/// answer is a snapshot: an image reported by `has_image` can still be missing
/// from a later `image` call.
pub trait ImageStore: Send + Sync {
    fn has_image(&self, coords: &Coords) -> bool;

    fn image(&self, coords: &Coords) -> Option<Arc<Image>>;

    /// Any stored image, used as a geometry template.
    fn any_image(&self) -> Option<Arc<Image>>;

    /// Names of every axis used by at least one image.
    fn axes(&self) -> Vec<String>;

    /// Largest index along `axis` plus one, 0 when the axis is not used.
    fn axis_length(&self, axis: &str) -> usize;

    /// Largest index seen along each used axis. Unused axes are absent.
    fn max_indices(&self) -> Coords;
}
