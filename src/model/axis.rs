use serde::{Deserialize, Serialize};

pub const CHANNEL: &str = "channel";
pub const TIME: &str = "time";
pub const Z: &str = "z";
pub const STAGE_POSITION: &str = "position";

/// Axes a three-dimensional stack viewer can address directly.
pub const VIEWER_AXES: [&str; 3] = [CHANNEL, TIME, Z];

pub fn is_viewer_axis(axis: &str) -> bool {
    VIEWER_AXES.contains(&axis)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelType {
    U8,
    U16,
    U32,
}

impl PixelType {
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}
