use serde::{Deserialize, Serialize};

/// 1-based position inside a channel/z/time stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackPosition {
    pub channel: usize,
    pub slice: usize,
    pub frame: usize,
}

impl StackPosition {
    pub fn new(channel: usize, slice: usize, frame: usize) -> Self {
        Self {
            channel,
            slice,
            frame,
        }
    }
}

impl Default for StackPosition {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

/// Number of channels, slices and frames a viewer addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackExtents {
    pub channels: usize,
    pub slices: usize,
    pub frames: usize,
}

impl StackExtents {
    pub fn new(channels: usize, slices: usize, frames: usize) -> Self {
        Self {
            channels,
            slices,
            frames,
        }
    }

    pub fn size(&self) -> usize {
        self.channels * self.slices * self.frames
    }

    pub fn is_degenerate(&self) -> bool {
        self.channels == 1 && self.slices == 1 && self.frames == 1
    }

    /// Decodes a 1-based flat index, channel varying fastest, then slice, then
    /// frame. Indices past the end wrap around.
    pub fn position_of(&self, flat_index: usize) -> StackPosition {
        let channels = self.channels.max(1);
        let slices = self.slices.max(1);
        let frames = self.frames.max(1);
        let offset = flat_index.saturating_sub(1);
        StackPosition {
            channel: offset % channels + 1,
            slice: (offset / channels) % slices + 1,
            frame: (offset / (channels * slices)) % frames + 1,
        }
    }

    /// Inverse of [`StackExtents::position_of`] for in-range positions.
    pub fn index_of(&self, position: StackPosition) -> usize {
        let channels = self.channels.max(1);
        let slices = self.slices.max(1);
        position.frame.saturating_sub(1) * channels * slices
            + position.slice.saturating_sub(1) * channels
            + position.channel
    }

    pub fn clamp(&self, position: StackPosition) -> StackPosition {
        StackPosition {
            channel: position.channel.clamp(1, self.channels.max(1)),
            slice: position.slice.clamp(1, self.slices.max(1)),
            frame: position.frame.clamp(1, self.frames.max(1)),
        }
    }
}

impl Default for StackExtents {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}
