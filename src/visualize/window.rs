extern crate kiss3d;
extern crate nalgebra as na;

use kiss3d::camera::ArcBall;
use kiss3d::light::Light;
use kiss3d::window::Window;
use kiss3d::nalgebra::{Point3, Translation3};
use log::info;
use na::Vector3;

use crate::error::Result;
use crate::visualize::{PoseRenderer, PoseScene};
use crate::Float;

/**
 * Interactive 3D view of the scene. render blocks until the window is closed.
 */
pub struct WindowRenderer;

fn as_point(v: &Vector3<Float>) -> Point3<f32> {
    Point3::new(v[0] as f32, v[1] as f32, v[2] as f32)
}

impl PoseRenderer for WindowRenderer {
    fn render(&mut self, scene: &PoseScene) -> Result<()> {
        let mut window = Window::new(&scene.config.title);
        window.set_light(Light::StickToCamera);
        window.set_background_color(1.0, 1.0, 1.0);

        let side = scene.config.window_marker_size as f32;
        for pose in &scene.poses {
            let mut marker = window.add_cube(side, side, side);
            marker.set_color(1.0, 0.0, 0.0);
            marker.append_translation(&Translation3::new(pose.center[0] as f32, pose.center[1] as f32, pose.center[2] as f32));
        }

        let segments = scene.arrow_segments().iter().map(|(from, to)| (as_point(from), as_point(to))).collect::<Vec<(Point3<f32>,Point3<f32>)>>();
        let blue = Point3::new(0.0, 0.0, 1.0);

        let at = as_point(&scene.bounds.center);
        let distance = 3.0*scene.bounds.half_extent as f32;
        let eye = Point3::new(at.x + distance, at.y + distance, at.z + distance);
        let mut camera = ArcBall::new(eye, at);

        info!("showing {} camera poses, close the window to exit", scene.poses.len());
        while window.render_with_camera(&mut camera) {
            for (from, to) in &segments {
                window.draw_line(from, to, &blue);
            }
        }

        Ok(())
    }
}
