use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use clap::Parser;
use serde::Serialize;

use crate::config::{DisplayConfig, load_config};
use crate::display::{DisplayEvent, EventBus, StoreStack, stack_extents, stack_size};
use crate::formats::{StackLayout, read_store, write_processor_png};
use crate::model::{CHANNEL, Coords, TIME, Z};
use crate::plugins::list_plugins;
use crate::store::{ImageStore, MemoryStore, SharedStore};
use crate::viewer::{
    DisplayMode, HyperStackViewer, ImageProcessor, SharedViewer, StackViewer, VirtualStack,
};

use super::types::{
    AxisInfo, Cli, Commands, FrameInfo, LayoutArgs, NavigationReport, PluginList,
    PluginsCommand, StoreInfo,
};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Info { input, layout } => {
            let store = load_store(&input, layout)?;
            print_json(&store_info(&store))?;
        }
        Commands::Frame {
            input,
            index,
            output,
            config,
            layout,
        } => {
            let store = Arc::new(load_store(&input, layout)?);
            let config = load_display_config(config.as_deref())?;
            let info = render_frame(store, config, index, output.as_deref())?;
            print_json(&info)?;
        }
        Commands::Navigate {
            input,
            channel,
            z,
            time,
            composite,
            config,
            layout,
        } => {
            let store = Arc::new(load_store(&input, layout)?);
            let config = load_display_config(config.as_deref())?;
            let mut target = Coords::builder();
            for (axis, index) in [(CHANNEL, channel), (Z, z), (TIME, time)] {
                if let Some(index) = index {
                    target = target.index(axis, index);
                }
            }
            let report = navigate(store, config, target.build(), composite)?;
            print_json(&report)?;
        }
        Commands::Plugins { command } => match command {
            PluginsCommand::List => {
                print_json(&PluginList {
                    plugins: list_plugins(),
                })?;
            }
        },
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}

pub(super) fn layout_from_args(args: LayoutArgs) -> Option<StackLayout> {
    if args.channels.is_none() && args.slices.is_none() && args.frames.is_none() {
        return None;
    }
    Some(StackLayout::new(
        args.channels.unwrap_or(1),
        args.slices.unwrap_or(1),
        args.frames.unwrap_or(1),
    ))
}

fn load_store(input: &Path, layout: LayoutArgs) -> Result<MemoryStore, String> {
    read_store(input, layout_from_args(layout)).map_err(|error| error.to_string())
}

fn load_display_config(path: Option<&Path>) -> Result<DisplayConfig, String> {
    match path {
        Some(path) => load_config(path).map_err(|error| error.to_string()),
        None => Ok(DisplayConfig::default()),
    }
}

pub(super) fn store_info(store: &MemoryStore) -> StoreInfo {
    let template = store.any_image();
    StoreInfo {
        images: store.len(),
        axes: store
            .axes()
            .into_iter()
            .map(|name| AxisInfo {
                length: store.axis_length(&name),
                name,
            })
            .collect(),
        stack_size: stack_size(store),
        width: template.as_ref().map(|image| image.width()),
        height: template.as_ref().map(|image| image.height()),
        components: template.as_ref().map(|image| image.components()),
        pixel_type: template.as_ref().map(|image| image.pixel_type()),
    }
}

fn headless_viewer(store: &SharedStore, mode: DisplayMode) -> Result<SharedViewer, String> {
    let extents = stack_extents(store.as_ref());
    let mut viewer = HyperStackViewer::new(extents)
        .map_err(|error| error.to_string())?
        .with_mode(mode);
    if mode == DisplayMode::Composite {
        if let Some(image) = store.any_image() {
            viewer.set_channel_processors(
                (0..extents.channels)
                    .map(|_| {
                        ImageProcessor::blank(image.width(), image.height(), image.pixel_type())
                    })
                    .collect(),
            );
        }
    }
    Ok(Arc::new(Mutex::new(viewer)))
}

pub(super) fn render_frame(
    store: SharedStore,
    config: DisplayConfig,
    index: usize,
    output: Option<&Path>,
) -> Result<FrameInfo, String> {
    let viewer = headless_viewer(&store, DisplayMode::Color)?;
    let position = viewer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .convert_index_to_position(index);
    let bus = Arc::new(EventBus::new());
    let mut stack = StoreStack::new(store, bus, Some(viewer)).with_config(config);

    let image = stack
        .resolve_image(index)
        .map_err(|error| error.to_string())?;
    let processor = stack
        .processor(index)
        .ok_or_else(|| format!("no displayable image at index {index}"))?;
    if let Some(path) = output {
        write_processor_png(&processor, path).map_err(|error| error.to_string())?;
    }
    let range = processor.min_max();
    Ok(FrameInfo {
        index,
        position,
        coords: image.coords().clone(),
        width: processor.width(),
        height: processor.height(),
        pixel_type: processor.pixel_type(),
        min: range.map(|(min, _)| min),
        max: range.map(|(_, max)| max),
        output: output.map(Path::to_path_buf),
    })
}

pub(super) fn navigate(
    store: SharedStore,
    config: DisplayConfig,
    target: Coords,
    composite: bool,
) -> Result<NavigationReport, String> {
    let mode = if composite {
        DisplayMode::Composite
    } else {
        DisplayMode::Color
    };
    let viewer = headless_viewer(&store, mode)?;

    let bus = Arc::new(EventBus::new());
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    bus.subscribe(move |event| {
        if let DisplayEvent::StackPositionChanged(coords) = event {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(coords.clone());
        }
    });

    let mut stack = StoreStack::new(store, Arc::clone(&bus), Some(Arc::clone(&viewer)))
        .with_config(config);
    stack.set_coords(target);

    let (extents, position) = {
        let guard = viewer.lock().unwrap_or_else(PoisonError::into_inner);
        (guard.extents(), guard.position())
    };
    let events = events
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    Ok(NavigationReport {
        extents,
        position,
        current: stack.current_coords().clone(),
        events,
    })
}
