use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::model::{Coords, PixelType};
use crate::plugins::PluginInfo;
use crate::viewer::{StackExtents, StackPosition};

#[derive(Debug, Parser)]
#[command(
    name = "vstack",
    version,
    about = "Browse multi-dimensional image stores through a channel/z/time viewer"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Summarizes the axes and geometry of a file loaded as a store.
    Info {
        input: PathBuf,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Resolves one 1-based viewer index to an image.
    Frame {
        input: PathBuf,
        #[arg(long)]
        index: usize,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Moves the display to a coordinate and reports the events it posts.
    Navigate {
        input: PathBuf,
        #[arg(long)]
        channel: Option<usize>,
        #[arg(long)]
        z: Option<usize>,
        #[arg(long)]
        time: Option<usize>,
        #[arg(long)]
        composite: bool,
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    Plugins {
        #[command(subcommand)]
        command: PluginsCommand,
    },
}

#[derive(Debug, Subcommand)]
pub(super) enum PluginsCommand {
    List,
}

/// Page layout of multi-page files. Omitted axes have length 1; with no
/// flags at all every page goes along z.
#[derive(Debug, Clone, Copy, Default, Args)]
pub(super) struct LayoutArgs {
    #[arg(long)]
    pub(super) channels: Option<usize>,
    #[arg(long)]
    pub(super) slices: Option<usize>,
    #[arg(long)]
    pub(super) frames: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct StoreInfo {
    pub(super) images: usize,
    pub(super) axes: Vec<AxisInfo>,
    pub(super) stack_size: usize,
    pub(super) width: Option<usize>,
    pub(super) height: Option<usize>,
    pub(super) components: Option<usize>,
    pub(super) pixel_type: Option<PixelType>,
}

#[derive(Debug, Serialize)]
pub(super) struct AxisInfo {
    pub(super) name: String,
    pub(super) length: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct FrameInfo {
    pub(super) index: usize,
    pub(super) position: StackPosition,
    pub(super) coords: Coords,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) pixel_type: PixelType,
    pub(super) min: Option<u32>,
    pub(super) max: Option<u32>,
    pub(super) output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub(super) struct NavigationReport {
    pub(super) extents: StackExtents,
    pub(super) position: StackPosition,
    pub(super) current: Coords,
    pub(super) events: Vec<Coords>,
}

#[derive(Debug, Serialize)]
pub(super) struct PluginList {
    pub(super) plugins: Vec<PluginInfo>,
}
