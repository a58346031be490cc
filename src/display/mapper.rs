use crate::model::{CHANNEL, Coords, TIME, Z};

use super::StoreStack;
use super::util::lock;

impl StoreStack {
    /// Translates a 1-based viewer index into a full store coordinate.
    ///
    /// Channel, z and time come from the viewer's decoding of `flat_index`, but
    /// only for axes the store actually has. Everything else is taken from the
    /// current coordinate. Store axes the current coordinate lacks are set to
    /// 0, and that default is committed to the current coordinate as well.
    pub fn map_flat_index_to_coords(&mut self, flat_index: usize) -> Coords {
        let (channel, z, time) = match self.viewer() {
            Some(viewer) => {
                let position = lock(&viewer).convert_index_to_position(flat_index);
                (
                    position.channel.saturating_sub(1),
                    position.slice.saturating_sub(1),
                    position.frame.saturating_sub(1),
                )
            }
            None => (0, 0, 0),
        };

        let missing = self
            .store
            .axes()
            .into_iter()
            .filter(|axis| !self.cur_coords.has_axis(axis))
            .collect::<Vec<_>>();

        let mut builder = self.cur_coords.to_builder();
        for axis in &missing {
            builder = builder.index(axis.as_str(), 0);
        }
        let present = self.store.max_indices();
        for (axis, decoded) in [(CHANNEL, channel), (Z, z), (TIME, time)] {
            if present.has_axis(axis) {
                builder = builder.index(axis, decoded);
            }
        }

        if !missing.is_empty() {
            let replacement = missing
                .iter()
                .fold(self.cur_coords.to_builder(), |builder, axis| {
                    builder.index(axis.as_str(), 0)
                })
                .build();
            log::debug!("defaulting axes {missing:?} to 0 in current coordinate");
            self.set_coords(replacement);
        }
        builder.build()
    }
}
