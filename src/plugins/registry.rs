use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::{
    DisplayGearPlugin, DisplayWindow, PluginError, PluginInfo, Result, StudioContext,
    ZProjectorPlugin,
};

type Registry = HashMap<&'static str, Arc<dyn DisplayGearPlugin>>;

fn register<P: DisplayGearPlugin + 'static>(map: &mut Registry, plugin: P) {
    map.insert(plugin.name(), Arc::new(plugin));
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map: Registry = HashMap::new();
        register(&mut map, ZProjectorPlugin);
        map
    })
}

pub fn default_registry() -> HashMap<&'static str, Arc<dyn DisplayGearPlugin>> {
    registry()
        .iter()
        .map(|(name, plugin)| (*name, Arc::clone(plugin)))
        .collect()
}

/// Menu entries sorted by submenu, then name.
pub fn list_plugins() -> Vec<PluginInfo> {
    let mut infos = registry()
        .values()
        .map(|plugin| plugin.info())
        .collect::<Vec<_>>();
    infos.sort_by(|left, right| {
        (&left.sub_menu, &left.name).cmp(&(&right.sub_menu, &right.name))
    });
    infos
}

pub fn find_plugin(name: &str) -> Option<Arc<dyn DisplayGearPlugin>> {
    registry().get(name).cloned()
}

pub fn select_plugin(name: &str, context: &StudioContext, display: &DisplayWindow) -> Result<()> {
    let plugin = registry()
        .get(name)
        .ok_or_else(|| PluginError::UnknownPlugin(name.to_string()))?;
    plugin.on_plugin_selected(context, display)
}
