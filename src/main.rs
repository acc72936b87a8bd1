extern crate color_eyre;
extern crate pose_display;

use clap::{ArgGroup, Parser};
use color_eyre::eyre::{eyre, Result};
use std::path::{Path,PathBuf};

use pose_display::config::DisplayConfig;
use pose_display::io::loading_parameters::{LineLayout, LoadingParameters};
use pose_display::visualize::{PoseRenderer, plot::PlotRenderer};
use pose_display::{display_poses, Float};

#[derive(Parser, Debug)]
#[command(version, about = "Visualize COLMAP camera poses")]
#[command(group(ArgGroup::new("input").required(true).args(["input_dir", "input_dir_flag"])))]
struct Args {
    /// Directory containing images.txt (COLMAP TXT model)
    input_dir: Option<PathBuf>,

    /// Same as INPUT_DIR, given as a flag
    #[arg(long = "input_dir", value_name = "INPUT_DIR")]
    input_dir_flag: Option<PathBuf>,

    /// Render into an image file (.png, .svg, ...) instead of opening a window
    #[arg(long)]
    output: Option<PathBuf>,

    /// YAML file with display settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the viewing direction arrows, overrides the config
    #[arg(long)]
    arrow_length: Option<Float>,

    /// Every pose line is followed by a POINTS2D line, as written by COLMAP
    #[arg(long)]
    colmap_layout: bool
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut display_config = match &args.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default()
    };
    if let Some(arrow_length) = args.arrow_length {
        display_config.arrow_length = arrow_length;
    }

    let parameters = LoadingParameters {
        layout: match args.colmap_layout {
            true => LineLayout::Colmap,
            false => LineLayout::EveryLine
        }
    };

    let input_dir = args.input_dir().ok_or_else(|| eyre!("no input directory given"))?;
    let mut renderer = select_renderer(&args, input_dir);
    let count = display_poses(input_dir, &parameters, display_config, renderer.as_mut())?;
    if count == 0 {
        println!("No camera poses found.");
    }

    Ok(())
}

impl Args {
    fn input_dir(&self) -> Option<&Path> {
        self.input_dir.as_deref().or(self.input_dir_flag.as_deref())
    }
}

fn select_renderer(args: &Args, input_dir: &Path) -> Box<dyn PoseRenderer> {
    match &args.output {
        Some(output) => Box::new(PlotRenderer::new(output)),
        None => default_renderer(input_dir)
    }
}

#[cfg(feature = "window")]
fn default_renderer(_input_dir: &Path) -> Box<dyn PoseRenderer> {
    Box::new(pose_display::visualize::window::WindowRenderer)
}

#[cfg(not(feature = "window"))]
fn default_renderer(input_dir: &Path) -> Box<dyn PoseRenderer> {
    Box::new(PlotRenderer::new(&input_dir.join(pose_display::visualize::plot::DEFAULT_PLOT_FILE)))
}
