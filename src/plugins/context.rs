use std::fmt;
use std::sync::Arc;

use crate::model::Coords;
use crate::store::SharedStore;

use super::Result;

/// The display a gear-menu entry was picked from.
#[derive(Clone)]
pub struct DisplayWindow {
    pub title: String,
    pub store: SharedStore,
    pub coords: Coords,
}

impl fmt::Debug for DisplayWindow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DisplayWindow")
            .field("title", &self.title)
            .field("coords", &self.coords)
            .field("axes", &self.store.axes())
            .finish()
    }
}

/// What a projection dialog needs to start from.
#[derive(Clone)]
pub struct ProjectionRequest {
    pub plugin: &'static str,
    pub display_title: String,
    pub axis: &'static str,
    pub store: SharedStore,
    pub coords: Coords,
}

impl fmt::Debug for ProjectionRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ProjectionRequest")
            .field("plugin", &self.plugin)
            .field("display_title", &self.display_title)
            .field("axis", &self.axis)
            .field("coords", &self.coords)
            .finish_non_exhaustive()
    }
}

/// Host side that builds and shows plugin dialogs.
pub trait PluginExecutor: Send + Sync {
    fn launch(&self, request: ProjectionRequest) -> Result<()>;
}

/// Application handle passed to plugins when they are invoked.
#[derive(Clone)]
pub struct StudioContext {
    executor: Arc<dyn PluginExecutor>,
}

impl fmt::Debug for StudioContext {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("StudioContext").finish_non_exhaustive()
    }
}

impl StudioContext {
    pub fn new(executor: Arc<dyn PluginExecutor>) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &dyn PluginExecutor {
        self.executor.as_ref()
    }
}
