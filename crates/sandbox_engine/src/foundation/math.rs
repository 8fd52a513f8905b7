//! Math utilities and types
//!
//! Provides the fundamental vector and rotation types used by the collision core.

pub use nalgebra::{Quaternion, Unit, Vector2, Vector3};

/// 2D vector type (horizontal X/Z pairs)
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Build a rotation from Euler angles (radians) applied in X, Y, Z order.
///
/// The composed rotation is `qx * qy * qz`, so a vector is rotated about Z
/// first, then Y, then X in the parent frame.
pub fn quat_from_euler(euler: Vec3) -> Quat {
    Quat::from_axis_angle(&Vec3::x_axis(), euler.x)
        * Quat::from_axis_angle(&Vec3::y_axis(), euler.y)
        * Quat::from_axis_angle(&Vec3::z_axis(), euler.z)
}

/// Rotation about the world up axis
pub fn quat_from_yaw(yaw: f32) -> Quat {
    Quat::from_axis_angle(&Vec3::y_axis(), yaw)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Move `current` toward `target` by at most `max_delta`
    pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
        if current < target {
            (current + max_delta).min(target)
        } else {
            (current - max_delta).max(target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euler_order_applies_z_first() {
        // Z quarter turn sends +X to +Y, then the X quarter turn sends +Y to +Z.
        let q = quat_from_euler(Vec3::new(constants::HALF_PI, 0.0, constants::HALF_PI));
        let rotated = q * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotated, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_yaw_matches_single_axis_euler() {
        let yaw = 0.7;
        let a = quat_from_yaw(yaw) * Vec3::new(1.0, 2.0, 3.0);
        let b = quat_from_euler(Vec3::new(0.0, yaw, 0.0)) * Vec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(a, b, epsilon = 1e-6);
    }

    #[test]
    fn test_approach_does_not_overshoot() {
        assert_relative_eq!(utils::approach(0.0, 1.0, 0.25), 0.25);
        assert_relative_eq!(utils::approach(0.9, 1.0, 0.25), 1.0);
        assert_relative_eq!(utils::approach(1.0, -1.0, 0.5), 0.5);
    }
}
