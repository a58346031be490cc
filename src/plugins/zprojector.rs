use crate::model::Z;

use super::{DisplayGearPlugin, DisplayWindow, ProjectionRequest, Result, StudioContext};

pub const MENU_NAME: &str = "Z Project...";

/// Opens the Z projection dialog for the selected display.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZProjectorPlugin;

impl DisplayGearPlugin for ZProjectorPlugin {
    fn name(&self) -> &'static str {
        MENU_NAME
    }

    fn sub_menu(&self) -> &'static str {
        ""
    }

    fn help_text(&self) -> &'static str {
        "Generates a Z projection of a dataset"
    }

    fn version(&self) -> &'static str {
        "0.1-beta"
    }

    fn copyright(&self) -> &'static str {
        "Regents of the University of California, 2017"
    }

    fn on_plugin_selected(&self, context: &StudioContext, display: &DisplayWindow) -> Result<()> {
        log::debug!("{MENU_NAME} selected on display {}", display.title);
        context.executor().launch(ProjectionRequest {
            plugin: MENU_NAME,
            display_title: display.title.clone(),
            axis: Z,
            store: display.store.clone(),
            coords: display.coords.clone(),
        })
    }
}
