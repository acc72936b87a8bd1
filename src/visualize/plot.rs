extern crate plotters;
extern crate nalgebra as na;

use std::path::{Path,PathBuf};
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use na::Vector3;

use crate::error::{PoseError, Result};
use crate::visualize::{PoseRenderer, PoseScene};
use crate::Float;

/// Written into the input directory when no window is available
pub const DEFAULT_PLOT_FILE: &str = "camera_poses.png";

/**
 * Writes the scene into an image file. The backend follows the file extension:
 * .svg goes through the SVG backend, everything else is encoded as a bitmap.
 * Bitmaps carry no text (plotters is built without a font backend), so they get
 * the bounding cube in place of the labelled axes, and no caption or legend.
 */
pub struct PlotRenderer {
    output: PathBuf
}

impl PlotRenderer {
    pub fn new(output: &Path) -> PlotRenderer {
        PlotRenderer { output: output.to_path_buf() }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    fn is_svg(&self) -> bool {
        self.output.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("svg"))
    }
}

impl PoseRenderer for PlotRenderer {
    fn render(&mut self, scene: &PoseScene) -> Result<()> {
        let size = (scene.config.image_width, scene.config.image_height);
        let outcome = match self.is_svg() {
            true => draw_scene(SVGBackend::new(&self.output, size).into_drawing_area(), scene, true).map_err(|e| PoseError::Render(e.to_string())),
            false => draw_scene(BitMapBackend::new(&self.output, size).into_drawing_area(), scene, false).map_err(|e| PoseError::Render(e.to_string()))
        };
        if outcome.is_ok() {
            info!("wrote {} camera poses to {}", scene.poses.len(), self.output.display());
        }
        outcome
    }
}

fn as_coord(v: &Vector3<Float>) -> (Float,Float,Float) {
    (v[0],v[1],v[2])
}

/**
 * The 12 edges of the cubic scene bounds.
 */
fn box_edges(scene: &PoseScene) -> Vec<(Vector3<Float>,Vector3<Float>)> {
    let center = scene.bounds.center;
    let h = scene.bounds.half_extent;
    let signs = [(-1.0,-1.0),(-1.0,1.0),(1.0,-1.0),(1.0,1.0)];
    let mut edges = Vec::<(Vector3<Float>,Vector3<Float>)>::with_capacity(12);

    for axis in 0..3 {
        let (u, v) = ((axis + 1) % 3, (axis + 2) % 3);
        for &(su, sv) in signs.iter() {
            let mut from = center;
            from[u] += su*h;
            from[v] += sv*h;
            let mut to = from;
            from[axis] -= h;
            to[axis] += h;
            edges.push((from, to));
        }
    }

    edges
}

fn draw_scene<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, scene: &PoseScene, with_text: bool) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x_range, y_range, z_range) = (scene.bounds.range(0), scene.bounds.range(1), scene.bounds.range(2));
    let label_anchor = (x_range.start, y_range.start, z_range.start);
    let (yaw, pitch) = (scene.config.yaw, scene.config.pitch);

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if with_text {
        builder.caption(&scene.config.title, ("sans-serif", 30));
    }
    let mut chart = builder.build_cartesian_3d(x_range.clone(), y_range.clone(), z_range.clone())?;

    chart.with_projection(|mut pb| {
        pb.yaw = yaw;
        pb.pitch = pitch;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    if with_text {
        chart
            .configure_axes()
            .draw()?;

        chart.draw_series(vec!(
            Text::new("X", (x_range.end, label_anchor.1, label_anchor.2), ("sans-serif", 20)),
            Text::new("Y", (label_anchor.0, y_range.end, label_anchor.2), ("sans-serif", 20)),
            Text::new("Z", (label_anchor.0, label_anchor.1, z_range.end), ("sans-serif", 20))
        ))?;
    } else {
        chart.draw_series(
            box_edges(scene).iter().map(|(from, to)| PathElement::new(vec!(as_coord(from), as_coord(to)), BLACK.mix(0.3).stroke_width(1)))
        )?;
    }

    let marker_size = scene.config.marker_size;
    chart.draw_series(
        scene.poses.iter().map(|pose| TriangleMarker::new(as_coord(&pose.center), marker_size, RED.filled()))
    )?
    .label("Camera Centers")
    .legend(move |(x, y)| TriangleMarker::new((x, y), marker_size, RED.filled()));

    chart.draw_series(
        scene.arrow_segments().iter().map(|(from, to)| PathElement::new(vec!(as_coord(from), as_coord(to)), BLUE.stroke_width(2)))
    )?
    .label("Viewing Direction")
    .legend(|(x, y)| PathElement::new(vec!((x, y), (x + 20, y)), BLUE.stroke_width(2)));

    if with_text {
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;
    }

    root.present()?;
    Ok(())
}
