//! Viewing platform: a yawed flat deck at a fixed height
//!
//! The legs are ordinary registry colliders; this provider only supplies the
//! deck as ground.

use crate::foundation::math::{quat_from_yaw, Quat, Vec3};
use crate::physics::tuning::STEP_TOLERANCE;
use super::{GroundProvider, GroundSample, SurfaceKind};

/// Construction parameters for a [`ViewingPlatform`]
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingPlatformConfig {
    /// Center on X
    pub center_x: f32,
    /// Center on Z
    pub center_z: f32,
    /// Rotation about the up axis (radians)
    pub yaw: f32,
    /// Full size along local X
    pub width: f32,
    /// Full size along local Z
    pub depth: f32,
    /// Deck elevation
    pub top_y: f32,
}

/// Flat deck ground provider
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingPlatform {
    config: ViewingPlatformConfig,
    inverse_rotation: Quat,
}

impl ViewingPlatform {
    /// Create a platform
    pub fn new(config: ViewingPlatformConfig) -> Self {
        Self {
            inverse_rotation: quat_from_yaw(config.yaw).inverse(),
            config,
        }
    }

    /// Construction parameters
    pub fn config(&self) -> &ViewingPlatformConfig {
        &self.config
    }

    /// Whether world (x, z) is over the deck
    pub fn covers(&self, x: f32, z: f32) -> bool {
        let local = self.inverse_rotation
            * Vec3::new(x - self.config.center_x, 0.0, z - self.config.center_z);
        local.x.abs() <= self.config.width / 2.0 && local.z.abs() <= self.config.depth / 2.0
    }
}

impl GroundProvider for ViewingPlatform {
    fn ground_height_at(&self, x: f32, z: f32, feet_y: f32) -> Option<GroundSample> {
        if !self.covers(x, z) || feet_y < self.config.top_y - STEP_TOLERANCE {
            return None;
        }
        Some(GroundSample::flat(self.config.top_y, SurfaceKind::ViewingPlatform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::utils::deg_to_rad;
    use approx::assert_relative_eq;

    fn deck() -> ViewingPlatform {
        ViewingPlatform::new(ViewingPlatformConfig {
            center_x: 10.0,
            center_z: -10.0,
            yaw: deg_to_rad(90.0),
            width: 8.0,
            depth: 2.0,
            top_y: 6.0,
        })
    }

    #[test]
    fn test_deck_height_when_standing_on_it() {
        let sample = deck().ground_height_at(10.0, -7.0, 6.2).unwrap();
        assert_relative_eq!(sample.height, 6.0);
        assert_eq!(sample.surface, SurfaceKind::ViewingPlatform);
    }

    #[test]
    fn test_yaw_swaps_footprint_axes() {
        let deck = deck();
        // Long side runs along world Z after a quarter yaw.
        assert!(deck.covers(10.0, -13.5));
        assert!(!deck.covers(13.5, -10.0));
    }

    #[test]
    fn test_mover_underneath_gets_no_deck() {
        assert!(deck().ground_height_at(10.0, -10.0, 0.0).is_none());
        assert!(deck().ground_height_at(10.0, -10.0, 5.6).is_some());
    }
}
