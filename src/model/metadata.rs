use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Per-image acquisition metadata. Synthesized images carry the default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub camera: Option<String>,
    pub exposure_ms: Option<f64>,
    pub channel_name: Option<String>,
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    pub fn from_source(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
