use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CHANNEL, STAGE_POSITION, TIME, Z};

/// Position of one image inside a multi-axis dataset.
///
/// An axis is either present with a single index or absent. Absence is not the
/// same as index 0 when comparing coordinates; [`Coords::viewer_index`] is the
/// only place where it collapses to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coords {
    indices: BTreeMap<String, usize>,
}

impl Coords {
    pub fn builder() -> CoordsBuilder {
        CoordsBuilder::default()
    }

    /// Starts a builder pre-filled with every axis of `self`.
    pub fn to_builder(&self) -> CoordsBuilder {
        CoordsBuilder {
            indices: self.indices.clone(),
        }
    }

    pub fn index(&self, axis: &str) -> Option<usize> {
        self.indices.get(axis).copied()
    }

    pub fn viewer_index(&self, axis: &str) -> usize {
        self.index(axis).unwrap_or(0)
    }

    pub fn channel(&self) -> Option<usize> {
        self.index(CHANNEL)
    }

    pub fn time(&self) -> Option<usize> {
        self.index(TIME)
    }

    pub fn z(&self) -> Option<usize> {
        self.index(Z)
    }

    pub fn stage_position(&self) -> Option<usize> {
        self.index(STAGE_POSITION)
    }

    pub fn has_axis(&self, axis: &str) -> bool {
        self.indices.contains_key(axis)
    }

    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.indices
            .iter()
            .map(|(axis, index)| (axis.as_str(), *index))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<")?;
        for (position, (axis, index)) in self.indices.iter().enumerate() {
            if position > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{axis}={index}")?;
        }
        formatter.write_str(">")
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoordsBuilder {
    indices: BTreeMap<String, usize>,
}

impl CoordsBuilder {
    pub fn index(mut self, axis: impl Into<String>, index: usize) -> Self {
        self.indices.insert(axis.into(), index);
        self
    }

    pub fn channel(self, index: usize) -> Self {
        self.index(CHANNEL, index)
    }

    pub fn time(self, index: usize) -> Self {
        self.index(TIME, index)
    }

    pub fn z(self, index: usize) -> Self {
        self.index(Z, index)
    }

    pub fn stage_position(self, index: usize) -> Self {
        self.index(STAGE_POSITION, index)
    }

    pub fn has_axis(&self, axis: &str) -> bool {
        self.indices.contains_key(axis)
    }

    pub fn build(self) -> Coords {
        Coords {
            indices: self.indices,
        }
    }
}
