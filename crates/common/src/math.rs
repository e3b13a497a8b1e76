use glam::{Mat4, Vec2};

/// Default world-space extent visible on the narrower window axis.
pub const DEFAULT_WORLD_EXTENT: Vec2 = Vec2::new(10.0, 10.0);

/// Orthographic projection for 2D content with a fixed `[-1, 1]` depth slab.
pub fn ortho_2d(left: f32, right: f32, top: f32, bottom: f32) -> Mat4 {
    Mat4::orthographic_rh(left, right, bottom, top, -1.0, 1.0)
}

/// Build a projection that shows `extent` world units on the narrower axis of
/// a `width` x `height` window, widening the other axis by the aspect ratio so
/// one world unit stays square on screen.
pub fn fit_projection(width: u32, height: u32, extent: Vec2) -> Mat4 {
    let width = width.max(1) as f32;
    let height = height.max(1) as f32;
    let half = extent * 0.5;

    if width > height {
        let aspect = width / height;
        ortho_2d(-aspect * half.x, aspect * half.x, half.y, -half.y)
    } else {
        let aspect = height / width;
        ortho_2d(-half.x, half.x, aspect * half.y, -aspect * half.y)
    }
}

/// Window-dependent view state: the projection is rebuilt on every resize,
/// the global content scale is independent of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    extent: Vec2,
    matrix: Mat4,
    pub global_scale: Vec2,
}

impl Projection {
    pub fn new(width: u32, height: u32, extent: Vec2) -> Self {
        Self {
            extent,
            matrix: fit_projection(width, height, extent),
            global_scale: Vec2::ONE,
        }
    }

    pub fn with_global_scale(mut self, scale: Vec2) -> Self {
        self.global_scale = scale;
        self
    }

    /// Recompute the matrix for new window dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.matrix = fit_projection(width, height, self.extent);
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Clip-space position of a world point, with the global scale applied.
    pub fn to_clip(&self, world: Vec2) -> Vec2 {
        let scaled = world * self.global_scale;
        self.matrix.project_point3(scaled.extend(0.0)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn square_window_maps_extent_to_unit_box() {
        let p = fit_projection(500, 500, DEFAULT_WORLD_EXTENT);
        let corner = p.project_point3(glam::Vec3::new(5.0, 5.0, 0.0)).truncate();
        assert!(approx(corner, Vec2::new(1.0, 1.0)));
        let origin = p.project_point3(glam::Vec3::ZERO).truncate();
        assert!(approx(origin, Vec2::ZERO));
    }

    #[test]
    fn wide_window_expands_horizontal_extent() {
        // 640x480: the visible x range grows to +-6.67 world units.
        let p = fit_projection(640, 480, DEFAULT_WORLD_EXTENT);
        let edge = p.project_point3(glam::Vec3::new(5.0, 5.0, 0.0)).truncate();
        assert!(approx(edge, Vec2::new(0.75, 1.0)));
    }

    #[test]
    fn tall_window_expands_vertical_extent() {
        let p = fit_projection(480, 960, DEFAULT_WORLD_EXTENT);
        let edge = p.project_point3(glam::Vec3::new(5.0, 5.0, 0.0)).truncate();
        assert!(approx(edge, Vec2::new(1.0, 0.5)));
    }

    #[test]
    fn zero_sized_window_does_not_produce_nan() {
        let p = fit_projection(0, 0, DEFAULT_WORLD_EXTENT);
        assert!(!p.is_nan());
    }

    #[test]
    fn resize_recomputes_matrix() {
        let mut proj = Projection::new(500, 500, DEFAULT_WORLD_EXTENT);
        let before = proj.matrix();
        proj.resize(1000, 500);
        assert_ne!(before, proj.matrix());
        assert_eq!(proj.extent(), DEFAULT_WORLD_EXTENT);
    }

    #[test]
    fn global_scale_is_decoupled_from_projection() {
        let proj = Projection::new(500, 500, DEFAULT_WORLD_EXTENT);
        let scaled = proj.with_global_scale(Vec2::splat(0.5));
        assert_eq!(proj.matrix(), scaled.matrix());
        assert!(approx(scaled.to_clip(Vec2::new(5.0, 5.0)), Vec2::new(0.5, 0.5)));
    }
}
