use serde::{Deserialize, Serialize};

use super::{DisplayWindow, Result, StudioContext};

/// Menu-facing description of a display plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginInfo {
    pub name: String,
    pub sub_menu: String,
    pub help_text: String,
    pub version: String,
    pub copyright: String,
}

/// Entry in a display window's gear menu.
pub trait DisplayGearPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Submenu path; empty for the top level.
    fn sub_menu(&self) -> &'static str;

    fn help_text(&self) -> &'static str;

    fn version(&self) -> &'static str;

    fn copyright(&self) -> &'static str;

    fn on_plugin_selected(&self, context: &StudioContext, display: &DisplayWindow) -> Result<()>;

    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: self.name().to_string(),
            sub_menu: self.sub_menu().to_string(),
            help_text: self.help_text().to_string(),
            version: self.version().to_string(),
            copyright: self.copyright().to_string(),
        }
    }
}
