use glam::{Mat3, Mat4, Vec3};

use crate::camera::CameraState;

/// Vertical field of view in radians
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 100.0;

/// World up tilted about the world Z axis by the camera's roll angle
pub fn up_vector(up_roll: f32) -> Vec3 {
    Mat3::from_rotation_z(up_roll) * Vec3::Y
}

/// Look-at view matrix for the current pose
pub fn view_matrix(state: &CameraState) -> Mat4 {
    Mat4::look_at_rh(state.position, state.target, up_vector(state.up_roll))
}

/// Perspective projection for the given viewport aspect ratio. The host
/// guards against zero-height viewports before computing the aspect.
pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR)
}

/// View and projection derived together, the renderer's per-frame input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProjection {
    pub view: Mat4,
    pub projection: Mat4,
}

impl ViewProjection {
    pub fn derive(state: &CameraState, aspect: f32) -> Self {
        Self {
            view: view_matrix(state),
            projection: projection_matrix(aspect),
        }
    }

    /// Combined matrix uploaded to the camera uniform
    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Fixed placement policy for the two demo meshes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransforms {
    /// The reference box rides on the look-at point
    pub reference_box: Mat4,
    /// The axis gizmo stays at the world origin
    pub axis_gizmo: Mat4,
}

impl SceneTransforms {
    pub fn derive(state: &CameraState) -> Self {
        Self {
            reference_box: Mat4::from_translation(state.target),
            axis_gizmo: Mat4::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_vector_is_world_up_at_zero_roll() {
        let up = up_vector(0.0);

        assert!((up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn up_vector_tilts_about_world_z() {
        // Rolling +90 degrees swings up from +Y to -X
        let up = up_vector(std::f32::consts::FRAC_PI_2);

        assert!((up - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
        // Roll never leaves the XY plane
        assert!(up.z.abs() < 1e-6);
    }

    #[test]
    fn derive_is_idempotent() {
        let state = CameraState::new();

        let a = ViewProjection::derive(&state, 800.0 / 600.0);
        let b = ViewProjection::derive(&state, 800.0 / 600.0);

        assert_eq!(a.view.to_cols_array(), b.view.to_cols_array());
        assert_eq!(a.projection.to_cols_array(), b.projection.to_cols_array());
    }

    #[test]
    fn view_matches_plain_look_at_for_default_pose() {
        let state = CameraState::new();

        let view = view_matrix(&state);
        let expected = Mat4::look_at_rh(state.position, state.target, Vec3::Y);

        assert_eq!(view.to_cols_array(), expected.to_cols_array());
    }

    #[test]
    fn box_transform_follows_target() {
        let mut state = CameraState::new();
        state.target = Vec3::new(3.0, -2.0, 7.5);

        let transforms = SceneTransforms::derive(&state);

        let placed = transforms.reference_box.transform_point3(Vec3::ZERO);
        assert!((placed - state.target).length() < 1e-6);
        assert_eq!(transforms.axis_gizmo, Mat4::IDENTITY);
    }
}
