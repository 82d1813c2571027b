//! Transform of a single visual element.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

/// Position, orientation and scale of a visual element.
///
/// Rotation is stored as intrinsic XYZ Euler angles in radians, the order
/// in which the host scene graph composes mesh rotations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    /// Translation relative to the parent.
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Pose {
    /// Origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Unrotated, unscaled pose at `position`.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Local-to-parent matrix (scale, then rotate, then translate).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.orientation(),
            self.position,
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        assert_eq!(Pose::IDENTITY.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_applies_translation_after_rotation() {
        let pose = Pose {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            scale: Vec3::ONE,
        };
        // Yaw by 90 degrees maps +X to -Z, then translate by +X.
        let p = pose.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn scale_is_applied_per_axis() {
        let pose = Pose {
            scale: Vec3::new(1.0, 0.3, 1.0),
            ..Pose::IDENTITY
        };
        let p = pose.matrix().transform_point3(Vec3::ONE);
        assert!((p - Vec3::new(1.0, 0.3, 1.0)).length() < 1e-6);
    }
}
