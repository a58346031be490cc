use serde::{Deserialize, Serialize};

/// What the display shows for a coordinate the store has no image for yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingImagePolicy {
    /// Last image resolved for the same channel, or a blank frame if none.
    #[default]
    LastValid,
    /// Always a blank frame.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub missing_images: MissingImagePolicy,
    /// Never push 1x1x1 extents through the viewer's validating resize path.
    /// ImageJ-style viewers open a second window when handed such an update.
    pub skip_degenerate_extents: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            missing_images: MissingImagePolicy::LastValid,
            skip_degenerate_extents: true,
        }
    }
}
