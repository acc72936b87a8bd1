use nalgebra as na;

use std::fs;
use na::Vector3;
use pose_display::config::DisplayConfig;
use pose_display::display_poses;
use pose_display::io::loading_parameters::LoadingParameters;
use pose_display::sensors::camera::CameraPose;
use pose_display::visualize::{arrow_head, plot::PlotRenderer, PoseRenderer, PoseScene, SceneBounds};
use pose_display::{Float, PoseError, Result};

const EPS: Float = 1e-9;

struct CountingRenderer {
    calls: usize,
    poses: usize
}

impl PoseRenderer for CountingRenderer {
    fn render(&mut self, scene: &PoseScene) -> Result<()> {
        self.calls += 1;
        self.poses = scene.poses.len();
        Ok(())
    }
}

fn camera_pose(center: [Float;3], direction: [Float;3]) -> CameraPose {
    CameraPose {
        label: String::from("cam"),
        center: Vector3::<Float>::new(center[0], center[1], center[2]),
        view_direction: Vector3::<Float>::new(direction[0], direction[1], direction[2]).normalize()
    }
}

fn sample_scene() -> PoseScene {
    let poses = vec!(
        camera_pose([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        camera_pose([2.0, -1.0, 0.5], [1.0, 0.0, 0.0]),
        camera_pose([1.0, 3.0, -2.0], [0.0, -1.0, 1.0])
    );
    PoseScene::new(poses, DisplayConfig::default())
}

#[test]
fn test_bounds_are_cubic_and_contain_scene() {
    let scene = sample_scene();

    let widths = (0..3).map(|axis| {
        let range = scene.bounds.range(axis);
        range.end - range.start
    }).collect::<Vec<Float>>();
    assert!((widths[0] - widths[1]).abs() < EPS);
    assert!((widths[1] - widths[2]).abs() < EPS);

    for (from, to) in scene.arrows() {
        assert!(scene.bounds.contains(&from));
        assert!(scene.bounds.contains(&to));
    }
}

#[test]
fn test_bounds_of_single_point_are_not_empty() {
    let bounds = SceneBounds::from_points(&[Vector3::<Float>::new(1.0, 1.0, 1.0)]);

    assert!(bounds.half_extent > 0.0);
    assert!(bounds.contains(&Vector3::<Float>::new(1.0, 1.0, 1.0)));
}

#[test]
fn test_arrows_use_configured_length() {
    let mut config = DisplayConfig::default();
    config.arrow_length = 0.5;
    let scene = PoseScene::new(vec!(camera_pose([1.0, 0.0, 0.0], [0.0, 1.0, 0.0])), config);

    let (from, to) = scene.arrows()[0];
    assert_eq!(from, Vector3::<Float>::new(1.0, 0.0, 0.0));
    assert!((to - Vector3::<Float>::new(1.0, 0.5, 0.0)).norm() < EPS);
}

#[test]
fn test_arrow_head_is_symmetric_around_shaft() {
    let from = Vector3::<Float>::zeros();
    let to = Vector3::<Float>::new(0.0, 0.0, 1.0);
    let [left, right] = arrow_head(&from, &to);

    assert!(((left - to).norm() - 0.3).abs() < EPS);
    assert!(((right - to).norm() - 0.3).abs() < EPS);
    assert!(((left + right)/2.0 - Vector3::<Float>::new(0.0, 0.0, left[2])).norm() < EPS);
    assert!(left[2] < to[2]);
}

#[test]
fn test_arrow_segments_include_heads() {
    let scene = sample_scene();

    assert_eq!(scene.arrow_segments().len(), 3*scene.poses.len());
}

#[test]
fn test_render_svg() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("poses.svg");
    let mut renderer = PlotRenderer::new(&output);

    renderer.render(&sample_scene()).unwrap();

    assert_eq!(renderer.output(), output.as_path());
    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.contains("<svg"));
}

#[test]
fn test_render_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("poses.png");

    PlotRenderer::new(&output).render(&sample_scene()).unwrap();

    assert!(fs::metadata(&output).unwrap().len() > 0);
}

#[test]
fn test_no_poses_skips_renderer() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("images.txt"), "# Image list with two lines of data per image:\n\n").unwrap();
    let mut renderer = CountingRenderer { calls: 0, poses: 0 };

    let count = display_poses(dir.path(), &LoadingParameters::default(), DisplayConfig::default(), &mut renderer).unwrap();

    assert_eq!(count, 0);
    assert_eq!(renderer.calls, 0);
}

#[test]
fn test_poses_are_rendered_once() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("images.txt"), "img1.png 1 0 0 0 0 0 0 1 cam1\nimg2.png 1 0 0 0 1 0 0 1 cam1\n").unwrap();
    let mut renderer = CountingRenderer { calls: 0, poses: 0 };

    let count = display_poses(dir.path(), &LoadingParameters::default(), DisplayConfig::default(), &mut renderer).unwrap();

    assert_eq!(count, 2);
    assert_eq!(renderer.calls, 1);
    assert_eq!(renderer.poses, 2);
}

#[test]
fn test_missing_images_txt_skips_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let mut renderer = CountingRenderer { calls: 0, poses: 0 };

    let result = display_poses(dir.path(), &LoadingParameters::default(), DisplayConfig::default(), &mut renderer);

    assert!(matches!(result, Err(PoseError::NotFound(_))));
    assert_eq!(renderer.calls, 0);
}
