use crate::model::{CHANNEL, Coords, TIME, Z, is_viewer_axis};
use crate::viewer::{StackPosition, VirtualStack};

use super::util::{lock, stack_extents};
use super::{DisplayEvent, StoreStack};

impl StoreStack {
    /// Moves the stack to `coords`, keeps the viewer's extents and position in
    /// step with it, and announces the change on the bus.
    pub fn set_coords(&mut self, coords: Coords) {
        let extents = stack_extents(self.store.as_ref());

        let mut redraw_base = None;
        if let Some(viewer) = self.viewer() {
            let mut viewer = lock(&viewer);
            if viewer.supports_unverified_dimensions() {
                viewer.set_dimensions_unverified(extents);
            } else if !(self.config.skip_degenerate_extents && extents.is_degenerate()) {
                viewer.set_dimensions(extents);
            }

            let target = StackPosition::new(
                coords.viewer_index(CHANNEL) + 1,
                coords.viewer_index(Z) + 1,
                coords.viewer_index(TIME) + 1,
            );
            let composite = viewer.is_composite_mode();
            let current = viewer.position();
            if target.slice != current.slice
                || target.frame != current.frame
                || (!composite && target.channel != current.channel)
            {
                viewer.set_position(target);
            }

            // Composite views only redraw on channel/z/time moves.
            if composite && self.hidden_axis_changed(&coords) {
                let position = viewer.position();
                redraw_base = Some(viewer.current_slice().saturating_sub(position.channel));
            }
        }

        self.cur_coords = coords;

        if let Some(base) = redraw_base {
            self.redraw_channels(base, extents.channels);
        }
        self.bus
            .post(DisplayEvent::StackPositionChanged(self.cur_coords.clone()));
    }

    fn hidden_axis_changed(&self, coords: &Coords) -> bool {
        coords.iter().any(|(axis, index)| {
            !is_viewer_axis(axis) && self.cur_coords.index(axis) != Some(index)
        })
    }

    /// Pushes fresh pixels into every channel processor of a composite view.
    fn redraw_channels(&mut self, base: usize, channels: usize) {
        for channel in 0..channels {
            let flat_index = base + channel + 1;
            let Some(pixels) = self.pixels(flat_index) else {
                log::warn!("no pixels for channel {channel} at index {flat_index}, skipping redraw");
                continue;
            };
            let Some(viewer) = self.viewer() else {
                return;
            };
            let mut viewer = lock(&viewer);
            match viewer.channel_processor_mut(channel + 1) {
                Some(processor) => {
                    if let Err(error) = processor.set_pixels(pixels) {
                        log::warn!("cannot refresh channel {channel}: {error}");
                    }
                }
                None => log::warn!("composite view has no processor for channel {channel}"),
            }
        }
    }
}
