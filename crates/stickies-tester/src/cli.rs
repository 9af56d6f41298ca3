//! Command-line interface definitions for stickies-tester.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use logging::LogArgs;
use stickies_layout::{Point, Rect, Size};

use crate::parse::{parse_point, parse_rect, parse_size};

/// Command-line interface for the `stickies-tester` binary.
#[derive(Parser, Debug)]
#[command(
    name = "stickies-tester",
    about = "Exercise the sticky-note layout engine without a GUI",
    version
)]
pub struct Cli {
    /// Logging controls shared across stickies binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Engine construction options.
    #[command(flatten)]
    pub setup: SetupArgs,

    /// Which scenario to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SetupArgs {
    /// Layout configuration file (RON). Defaults are used when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Position history file; overrides `history_path` from the config.
    #[arg(long, global = true, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Usable screen rectangle as `X,Y,W,H`.
    #[arg(
        long,
        global = true,
        value_name = "X,Y,W,H",
        value_parser = parse_rect,
        default_value = "0,0,1920,1080"
    )]
    pub work_area: Rect,
}

/// Top-level tester commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place one or more notes as if they were just created.
    Place(PlaceArgs),
    /// Open a number of notes and arrange them.
    Arrange(ArrangeArgs),
    /// Snap a rectangle to nearby work area edges.
    Snap(SnapArgs),
    /// Replay a press/move/release gesture on a window.
    Drag(DragArgs),
    /// Clear the position history.
    Forget,
    /// Print the simulated display description.
    Screen,
}

/// Arguments for the `place` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlaceArgs {
    /// Id of the first note; subsequent notes count upwards.
    #[arg(long, default_value_t = 1)]
    pub id: u64,

    /// Window size as `WxH`; the configured default when omitted.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub size: Option<Size>,

    /// Number of notes to place.
    #[arg(long, default_value_t = 1)]
    pub count: u64,
}

/// Arrangement strategy.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Row-major grid.
    Grid,
    /// Diagonal cascade.
    Cascade,
}

/// Arguments for the `arrange` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ArrangeArgs {
    /// Strategy to apply.
    #[arg(value_enum)]
    pub strategy: Strategy,

    /// Number of notes to open before arranging.
    #[arg(long, default_value_t = 4)]
    pub count: u64,

    /// Grid column count; derived from the work area when omitted.
    #[arg(long)]
    pub columns: Option<u32>,
}

/// Arguments for the `snap` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SnapArgs {
    /// Rectangle to snap as `X,Y,W,H`.
    #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect)]
    pub rect: Rect,

    /// Snap distance in pixels; the configured threshold when omitted.
    #[arg(long)]
    pub threshold: Option<i32>,
}

/// Arguments for the `drag` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DragArgs {
    /// Note id owning the window.
    #[arg(long, default_value_t = 1)]
    pub id: u64,

    /// Starting window frame as `X,Y,W,H`.
    #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect)]
    pub rect: Rect,

    /// Global pointer position at press.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub from: Point,

    /// Global pointer position at release.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub to: Point,
}
