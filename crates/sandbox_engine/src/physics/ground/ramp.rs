//! Jump ramp: front ramp, tabletop, back ramp
//!
//! The ramp runs along its local +Z axis. Seen from the side the profile
//! rises over `ramp_length`, stays flat over `tabletop_length`, then falls
//! over another `ramp_length`. The structure is yawed about its center.

use crate::foundation::math::{quat_from_yaw, Quat, Vec2, Vec3};
use crate::physics::tuning::{PUSH_MARGIN, STEP_TOLERANCE};
use super::{GroundProvider, GroundSample, SurfaceKind};

/// Construction parameters for a [`JumpRamp`]
#[derive(Debug, Clone, PartialEq)]
pub struct JumpRampConfig {
    /// Center on X
    pub center_x: f32,
    /// Center on Z
    pub center_z: f32,
    /// Rotation about the up axis (radians)
    pub yaw: f32,
    /// Full width across the run
    pub width: f32,
    /// Length of each sloped segment
    pub ramp_length: f32,
    /// Length of the flat top
    pub tabletop_length: f32,
    /// Height of the tabletop above the base
    pub height: f32,
    /// Ground elevation the ramp sits on
    pub base_y: f32,
}

/// Parametric jump ramp ground provider
#[derive(Debug, Clone, PartialEq)]
pub struct JumpRamp {
    config: JumpRampConfig,
    rotation: Quat,
    inverse_rotation: Quat,
}

/// Profile sample along the run
struct ProfilePoint {
    height: f32,
    slope: f32,
    surface: SurfaceKind,
}

impl JumpRamp {
    /// Create a ramp
    pub fn new(config: JumpRampConfig) -> Self {
        let rotation = quat_from_yaw(config.yaw);
        Self {
            config,
            rotation,
            inverse_rotation: rotation.inverse(),
        }
    }

    /// Construction parameters
    pub fn config(&self) -> &JumpRampConfig {
        &self.config
    }

    /// Total length of the run
    pub fn total_length(&self) -> f32 {
        2.0 * self.config.ramp_length + self.config.tabletop_length
    }

    /// Map world (x, z) to (across, along) where `along` starts at the front edge
    fn to_local(&self, x: f32, z: f32) -> Vec2 {
        let local = self.inverse_rotation
            * Vec3::new(x - self.config.center_x, 0.0, z - self.config.center_z);
        Vec2::new(local.x, local.z + self.total_length() / 2.0)
    }

    fn local_to_world_vector(&self, across: f32, along: f32) -> Vec3 {
        self.rotation * Vec3::new(across, 0.0, along)
    }

    /// Profile at `along`, which must lie inside `[0, total_length]`
    fn profile(&self, along: f32) -> ProfilePoint {
        let JumpRampConfig {
            ramp_length,
            tabletop_length,
            height,
            base_y,
            ..
        } = self.config;
        let rise = height / ramp_length;

        if along < ramp_length {
            ProfilePoint {
                height: base_y + along * rise,
                slope: rise,
                surface: SurfaceKind::RampFront,
            }
        } else if along <= ramp_length + tabletop_length {
            ProfilePoint {
                height: base_y + height,
                slope: 0.0,
                surface: SurfaceKind::Tabletop,
            }
        } else {
            ProfilePoint {
                height: base_y + (self.total_length() - along) * rise,
                slope: -rise,
                surface: SurfaceKind::RampBack,
            }
        }
    }

    /// Surface height under world (x, z), ignoring the mover's height
    pub fn surface_height_at(&self, x: f32, z: f32) -> Option<f32> {
        let local = self.to_local(x, z);
        self.contains_local(local).then(|| self.profile(local.y).height)
    }

    fn contains_local(&self, local: Vec2) -> bool {
        local.x.abs() <= self.config.width / 2.0 && (0.0..=self.total_length()).contains(&local.y)
    }
}

impl GroundProvider for JumpRamp {
    fn ground_height_at(&self, x: f32, z: f32, feet_y: f32) -> Option<GroundSample> {
        let local = self.to_local(x, z);
        if !self.contains_local(local) {
            return None;
        }

        let point = self.profile(local.y);
        // Feet too far below the deck means the mover is beside the ramp, not on it.
        if feet_y < point.height - STEP_TOLERANCE {
            return None;
        }

        let normal = self.rotation * Vec3::new(0.0, 1.0, -point.slope);
        Some(GroundSample {
            height: point.height,
            slope: point.slope,
            surface: point.surface,
            normal: normal.normalize(),
        })
    }

    fn side_collision_at(&self, x: f32, z: f32, feet_y: f32, radius: f32) -> Option<Vec2> {
        let local = self.to_local(x, z);
        let half_width = self.config.width / 2.0;
        if local.x.abs() >= half_width + radius || !(0.0..=self.total_length()).contains(&local.y) {
            return None;
        }

        let point = self.profile(local.y);
        if feet_y >= point.height - STEP_TOLERANCE {
            return None;
        }

        let target = (half_width + radius + PUSH_MARGIN).copysign(local.x);
        let push = self.local_to_world_vector(target - local.x, 0.0);
        Some(Vec2::new(push.x, push.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    fn ramp(yaw: f32) -> JumpRamp {
        JumpRamp::new(JumpRampConfig {
            center_x: 0.0,
            center_z: 0.0,
            yaw,
            width: 4.0,
            ramp_length: 4.0,
            tabletop_length: 2.0,
            height: 2.0,
            base_y: 0.0,
        })
    }

    #[test]
    fn test_profile_segments() {
        let ramp = ramp(0.0);
        // Run spans z in [-5, 5].
        let front = ramp.ground_height_at(0.0, -3.0, 5.0).unwrap();
        assert_eq!(front.surface, SurfaceKind::RampFront);
        assert_relative_eq!(front.height, 1.0, epsilon = 1e-5);
        assert_relative_eq!(front.slope, 0.5);

        let top = ramp.ground_height_at(1.0, 0.0, 5.0).unwrap();
        assert_eq!(top.surface, SurfaceKind::Tabletop);
        assert_relative_eq!(top.height, 2.0);
        assert_relative_eq!(top.normal, Vec3::y(), epsilon = 1e-6);

        let back = ramp.ground_height_at(-1.0, 4.0, 5.0).unwrap();
        assert_eq!(back.surface, SurfaceKind::RampBack);
        assert_relative_eq!(back.height, 0.5, epsilon = 1e-5);
        assert_relative_eq!(back.slope, -0.5);
    }

    #[test]
    fn test_front_normal_leans_back_toward_approach() {
        let sample = ramp(0.0).ground_height_at(0.0, -3.0, 5.0).unwrap();
        let expected = Vec3::new(0.0, 1.0, -0.5).normalize();
        assert_relative_eq!(sample.normal, expected, epsilon = 1e-5);
    }

    #[test]
    fn test_outside_footprint_is_none() {
        let ramp = ramp(0.0);
        assert!(ramp.ground_height_at(2.5, 0.0, 5.0).is_none());
        assert!(ramp.ground_height_at(0.0, 5.5, 5.0).is_none());
        assert!(ramp.surface_height_at(0.0, -6.0).is_none());
    }

    #[test]
    fn test_feet_below_deck_is_not_ground() {
        let ramp = ramp(0.0);
        assert!(ramp.ground_height_at(0.0, 0.0, 0.0).is_none());
        assert!(ramp.ground_height_at(0.0, 0.0, 1.6).is_some());
    }

    #[test]
    fn test_yaw_rotates_footprint() {
        // A quarter yaw lays the run along world X.
        let ramp = ramp(HALF_PI);
        assert_relative_eq!(ramp.surface_height_at(0.0, 0.0).unwrap(), 2.0, epsilon = 1e-5);
        assert!(ramp.surface_height_at(4.0, 0.0).is_some());
        assert!(ramp.surface_height_at(0.0, 4.0).is_none());
    }

    #[test]
    fn test_side_collision_pushes_out_laterally() {
        let ramp = ramp(0.0);
        let push = ramp.side_collision_at(1.8, 0.0, 0.0, 0.5).unwrap();
        assert_relative_eq!(push.x, 2.51 - 1.8, epsilon = 1e-5);
        assert_relative_eq!(push.y, 0.0, epsilon = 1e-5);

        let push = ramp.side_collision_at(-2.2, 0.5, 0.0, 0.5).unwrap();
        assert_relative_eq!(push.x, -2.51 + 2.2, epsilon = 1e-5);
    }

    #[test]
    fn test_side_collision_ignores_movers_on_top_or_away() {
        let ramp = ramp(0.0);
        assert!(ramp.side_collision_at(1.8, 0.0, 2.0, 0.5).is_none());
        assert!(ramp.side_collision_at(3.0, 0.0, 0.0, 0.5).is_none());
        // Near the foot of the front ramp the deck is low enough to step onto.
        assert!(ramp.side_collision_at(1.8, -4.9, 0.0, 0.5).is_none());
    }
}
