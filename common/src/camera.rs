//! 2D orthographic camera

use glam::{Mat4, Vec3};

/// 2D orthographic camera
///
/// With `y_down` set, world coordinates follow screen convention (y grows
/// downward), which lets renderers draw directly in canvas pixels.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub position: Vec3,
    /// Half the visible height in world units
    pub zoom: f32,
    pub aspect_ratio: f32,
    pub y_down: bool,
}

impl Camera2D {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            zoom: 1.0,
            aspect_ratio,
            y_down: false,
        }
    }

    /// Camera that shows a `width`×`height` pixel canvas whole and centred,
    /// with `margin` extra pixels around it.
    pub fn for_canvas(width: f32, height: f32, margin: f32, aspect_ratio: f32) -> Self {
        let mut camera = Self::new(aspect_ratio);
        camera.y_down = true;
        camera.fit_canvas(width, height, margin);
        camera
    }

    /// Re-centre on the canvas and pick the zoom that fits it at the
    /// current aspect ratio.
    pub fn fit_canvas(&mut self, width: f32, height: f32, margin: f32) {
        let half_w = width * 0.5 + margin;
        let half_h = height * 0.5 + margin;
        self.position = Vec3::new(width * 0.5, height * 0.5, 0.0);
        self.zoom = half_h.max(half_w / self.aspect_ratio.max(f32::EPSILON));
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let half_width = self.zoom * self.aspect_ratio;
        let half_height = self.zoom;

        let (bottom, top) = if self.y_down {
            (half_height, -half_height)
        } else {
            (-half_height, half_height)
        };
        let projection = Mat4::orthographic_rh(-half_width, half_width, bottom, top, -1.0, 1.0);

        let view = Mat4::from_translation(-self.position);

        projection * view
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        }
    }
}
