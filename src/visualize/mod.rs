extern crate nalgebra as na;

use std::ops::Range;
use na::Vector3;

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::sensors::camera::CameraPose;
use crate::{float,Float};

pub mod plot;
#[cfg(feature = "window")]
pub mod window;

/// Extra space around the outermost center or arrow tip, relative to the half extent
const BOUNDS_PADDING: Float = 0.1;
/// Arrow head length relative to the arrow
const ARROW_HEAD_RATIO: Float = 0.3;
const ARROW_HEAD_ANGLE: Float = 15.0*float::consts::PI/180.0;

pub trait PoseRenderer {
    fn render(&mut self, scene: &PoseScene) -> Result<()>;
}

/**
 * Axis aligned cube around the scene. All three axes share the same extent so
 * that the plot keeps an equal aspect ratio.
 */
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SceneBounds {
    pub center: Vector3<Float>,
    pub half_extent: Float
}

impl SceneBounds {
    pub fn from_points(points: &[Vector3<Float>]) -> SceneBounds {
        let mut half_extent: Float = 0.0;
        let mut center = Vector3::<Float>::zeros();

        for axis in 0..3 {
            let (min,max) = get_min_max(points.iter().map(|p| p[axis]));
            center[axis] = (min + max)/2.0;
            half_extent = half_extent.max((max - min)/2.0);
        }

        SceneBounds { center, half_extent: half_extent*(1.0 + BOUNDS_PADDING) }
    }

    pub fn range(&self, axis: usize) -> Range<Float> {
        (self.center[axis] - self.half_extent)..(self.center[axis] + self.half_extent)
    }

    pub fn contains(&self, point: &Vector3<Float>) -> bool {
        (0..3).all(|axis| self.range(axis).contains(&point[axis]))
    }
}

fn get_min_max<I: Iterator<Item = Float>>(values: I) -> (Float,Float) {
    let mut min = float::MAX;
    let mut max = float::MIN;

    for v in values {
        if v < min {
            min = v;
        }

        if v > max {
            max = v;
        }
    }

    if min > max {
        return (0.0, 1e-5);
    }

    if (max-min) < 1e-5 {
        max = min + 1e-5;
    }

    (min,max)
}

/**
 * Everything a renderer needs, built once and handed to the draw calls.
 */
#[derive(Debug,Clone)]
pub struct PoseScene {
    pub poses: Vec<CameraPose>,
    pub config: DisplayConfig,
    pub bounds: SceneBounds
}

impl PoseScene {
    pub fn new(poses: Vec<CameraPose>, config: DisplayConfig) -> PoseScene {
        let points = poses.iter()
            .flat_map(|p| vec!(p.center, p.arrow_tip(config.arrow_length)))
            .collect::<Vec<Vector3<Float>>>();
        let bounds = SceneBounds::from_points(&points);
        PoseScene { poses, config, bounds }
    }

    /**
     * Start and end point of every viewing direction arrow.
     */
    pub fn arrows(&self) -> Vec<(Vector3<Float>,Vector3<Float>)> {
        self.poses.iter().map(|p| (p.center, p.arrow_tip(self.config.arrow_length))).collect()
    }

    /**
     * Shaft plus the two head strokes of every arrow, as line segments.
     */
    pub fn arrow_segments(&self) -> Vec<(Vector3<Float>,Vector3<Float>)> {
        self.arrows().into_iter().flat_map(|(from, to)| {
            let mut segments = vec!((from, to));
            segments.extend(arrow_head(&from, &to).iter().map(|&head| (to, head)));
            segments
        }).collect()
    }
}

/**
 * The two end points of the arrow head strokes, rotated by ARROW_HEAD_ANGLE
 * against the shaft. Empty arrows get a degenerate head at the tip.
 */
pub fn arrow_head(from: &Vector3<Float>, to: &Vector3<Float>) -> [Vector3<Float>;2] {
    let shaft = to - from;
    let length = shaft.norm();
    if length < 1e-12 {
        return [*to, *to];
    }

    let direction = shaft/length;
    let helper = match direction.x.abs() < 0.9 {
        true => Vector3::<Float>::x(),
        false => Vector3::<Float>::y()
    };
    let perpendicular = direction.cross(&helper).normalize();
    let head_length = ARROW_HEAD_RATIO*length;
    let back = head_length*ARROW_HEAD_ANGLE.cos()*direction;
    let side = head_length*ARROW_HEAD_ANGLE.sin()*perpendicular;

    [to - back + side, to - back - side]
}
