mod context;
mod error;
mod plugin;
mod registry;
mod zprojector;


pub use context::{DisplayWindow, PluginExecutor, ProjectionRequest, StudioContext};
pub use error::{PluginError, Result};
pub use plugin::{DisplayGearPlugin, PluginInfo};
pub use registry::{default_registry, find_plugin, list_plugins, select_plugin};
pub use zprojector::ZProjectorPlugin;
