//! Floor height queries against the collision registry
//!
//! This answers "what height should the mover stand at here", which is a
//! different question from the push-out sweep. Only axis boxes and flat
//! (yaw-only) oriented boxes are considered; sloped oriented boxes are left
//! to the ramp ground provider.

use crate::foundation::math::Vec3;
use crate::physics::collider_kinds::ColliderKinds;
use crate::physics::collision::Collider;
use crate::physics::collision_system::{ColliderHandle, CollisionRegistry};
use crate::physics::ground::{GroundSample, SurfaceKind};
use crate::physics::tuning::{EYE_TO_FEET, FLOOR_SNAP_BELOW, FLOOR_STAY_ABOVE};

/// Standable surface found by [`CollisionRegistry::floor_height`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorHit {
    /// World-space height of the surface
    pub height: f32,
    /// The mover is supported by this surface
    pub on_floor: bool,
    /// Collider providing the surface
    pub collider: ColliderHandle,
}

impl FloorHit {
    /// Express the hit as a generic ground candidate
    pub fn to_ground_sample(&self) -> GroundSample {
        GroundSample {
            height: self.height,
            slope: 0.0,
            surface: SurfaceKind::Generic,
            normal: Vec3::y(),
        }
    }
}

/// Whether a surface top qualifies given the feet height
fn within_floor_band(feet_y: f32, top: f32) -> bool {
    let above = feet_y - top;
    (-FLOOR_SNAP_BELOW..FLOOR_STAY_ABOVE).contains(&above)
}

impl CollisionRegistry {
    /// Highest standable surface under (x, z)
    ///
    /// `eye_y` is the mover's eye height and `height_offset` the distance from
    /// eye to feet. A surface qualifies when the feet are between 0.5 below and
    /// 10 above its top; the tallest qualifying surface wins, so stacked
    /// platforms resolve to the top one.
    pub fn floor_height(&self, x: f32, z: f32, eye_y: f32, height_offset: f32) -> Option<FloorHit> {
        let feet_y = eye_y - height_offset;
        let mut best: Option<FloorHit> = None;

        for (handle, collider) in self.by_type(ColliderKinds::STANDABLE) {
            let top = match collider {
                Collider::AxisBox(shape) if shape.contains_xz(x, z) => shape.max_y(),
                Collider::RotatedBox(shape) if shape.is_flat() => {
                    let local = shape.world_to_local(Vec3::new(x, feet_y, z));
                    if !shape.contains_local_xz(local) {
                        continue;
                    }
                    shape.top_y()
                }
                _ => continue,
            };

            if !within_floor_band(feet_y, top) {
                continue;
            }
            if best.map_or(true, |b| top > b.height) {
                best = Some(FloorHit {
                    height: top,
                    on_floor: true,
                    collider: handle,
                });
            }
        }

        if let Some(hit) = best {
            log::trace!("Floor at ({:.2}, {:.2}): {:.3}", x, z, hit.height);
        }
        best
    }

    /// Floor query using the standard eye-to-feet offset
    pub fn query_floor_height(&self, x: f32, z: f32, eye_y: f32) -> Option<FloorHit> {
        self.floor_height(x, z, eye_y, EYE_TO_FEET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::utils::deg_to_rad;
    use crate::physics::collision::{AxisBoxConfig, CylinderConfig, RotatedBoxConfig};
    use approx::assert_relative_eq;

    fn slab(name: &str, width: f32, height: f32, base_y: f32) -> AxisBoxConfig {
        AxisBoxConfig {
            name: name.into(),
            center_x: 0.0,
            center_z: 0.0,
            width,
            depth: width,
            height,
            base_y,
        }
    }

    fn oriented(rotation: Vec3) -> RotatedBoxConfig {
        RotatedBoxConfig {
            name: "deck".into(),
            center_x: 0.0,
            center_z: 0.0,
            base_y: 0.0,
            width: 4.0,
            height: 1.0,
            depth: 4.0,
            rotation,
        }
    }

    #[test]
    fn test_tallest_overlapping_surface_wins() {
        let mut registry = CollisionRegistry::new();
        registry.register_box(slab("low", 10.0, 1.0, 0.0));
        let high = registry.register_box(slab("high", 4.0, 1.0, 1.0));

        // Feet at 2.2: both tops (1.0 and 2.0) are inside the band.
        let hit = registry.floor_height(0.0, 0.0, 3.9, 1.7).unwrap();
        assert_relative_eq!(hit.height, 2.0);
        assert_eq!(hit.collider, high);
        assert!(hit.on_floor);

        // Outside the small slab only the low one remains.
        let hit = registry.floor_height(4.0, 4.0, 3.9, 1.7).unwrap();
        assert_relative_eq!(hit.height, 1.0);
    }

    #[test]
    fn test_floor_band_limits() {
        let mut registry = CollisionRegistry::new();
        registry.register_box(slab("step", 4.0, 1.0, 0.0));

        // Feet 0.4 below the top: snaps up.
        assert!(registry.query_floor_height(0.0, 0.0, 0.6 + 1.7).is_some());
        // Feet 0.6 below the top: not a floor (the sweep handles it as a wall).
        assert!(registry.query_floor_height(0.0, 0.0, 0.4 + 1.7).is_none());
        // 9.5 above: still tracked as the floor under a jump.
        assert!(registry.query_floor_height(0.0, 0.0, 10.5 + 1.7).is_some());
        // 10.5 above: too far.
        assert!(registry.query_floor_height(0.0, 0.0, 11.5 + 1.7).is_none());
    }

    #[test]
    fn test_tilted_rotated_box_is_skipped() {
        let mut registry = CollisionRegistry::new();
        registry.register_rotated_box(oriented(Vec3::new(deg_to_rad(10.0), 0.0, 0.0)));

        assert!(registry.query_floor_height(0.0, 0.0, 1.0 + 1.7).is_none());
    }

    #[test]
    fn test_flat_rotated_box_is_a_floor() {
        let mut registry = CollisionRegistry::new();
        let handle = registry.register_rotated_box(oriented(Vec3::new(0.0, deg_to_rad(30.0), 0.0)));

        let hit = registry.query_floor_height(0.0, 0.0, 1.1 + 1.7).unwrap();
        assert_relative_eq!(hit.height, 1.0, epsilon = 1e-5);
        assert_eq!(hit.collider, handle);

        // A corner of the unrotated footprint falls outside once yawed.
        assert!(registry.query_floor_height(1.9, 1.9, 1.1 + 1.7).is_none());
    }

    #[test]
    fn test_cylinders_are_not_floors() {
        let mut registry = CollisionRegistry::new();
        registry.register_cylinder(CylinderConfig {
            name: "stump".into(),
            center_x: 0.0,
            center_z: 0.0,
            radius: 2.0,
            height: 1.0,
            base_y: 0.0,
        });

        assert!(registry.query_floor_height(0.0, 0.0, 1.0 + 1.7).is_none());
    }

    #[test]
    fn test_empty_registry_has_no_floor() {
        let registry = CollisionRegistry::new();
        assert!(registry.floor_height(0.0, 0.0, 1.7, 1.7).is_none());
    }
}
