//! Primitive collider shapes and sphere push-out algorithms
//!
//! Each primitive tests a moving sphere (the player or a vehicle) against
//! itself and returns the smallest displacement that separates them, plus
//! which horizontal velocity components the mover should drop.
//!
//! All primitives are immutable after construction. Derived values (bounds,
//! rotations) are computed once in the constructor.

use crate::foundation::math::{quat_from_euler, Quat, Vec2, Vec3};
use crate::physics::tuning::{
    DEGENERATE_DISTANCE, ELEVATED_BASE_Y, EYE_TO_FEET, EYE_TO_HEAD, FLAT_TILT_EPSILON,
    NORMAL_AXIS_THRESHOLD, PUSH_MARGIN, TOP_CLEARANCE,
};

/// Result of a single collider test
///
/// `push_y` is only produced by oriented boxes and spheres; movers consume the
/// horizontal components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushOut {
    /// Displacement along world X
    pub push_x: f32,
    /// Displacement along world Y (informational, not applied by the sweep)
    pub push_y: f32,
    /// Displacement along world Z
    pub push_z: f32,
    /// The mover's X velocity must be zeroed
    pub zero_velocity_x: bool,
    /// The mover's Z velocity must be zeroed
    pub zero_velocity_z: bool,
}

impl PushOut {
    /// Horizontal part of the push as an (X, Z) pair
    pub fn horizontal(&self) -> Vec2 {
        Vec2::new(self.push_x, self.push_z)
    }

    /// Full 3D push vector
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.push_x, self.push_y, self.push_z)
    }
}

/// Faces of an axis box in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxFace {
    MinX,
    MaxX,
    MinZ,
    MaxZ,
}

/// Construction parameters for an [`AxisBox`]
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBoxConfig {
    /// Debug/removal name (not required to be unique)
    pub name: String,
    /// Center on X
    pub center_x: f32,
    /// Center on Z
    pub center_z: f32,
    /// Full size along X
    pub width: f32,
    /// Full size along Z
    pub depth: f32,
    /// Full size along Y
    pub height: f32,
    /// Elevation of the bottom face
    pub base_y: f32,
}

/// Axis-aligned box (walls, platforms)
///
/// Penetration is resolved on X/Z only. The vertical extent gates the test:
/// a mover standing on top passes, and a mover whose head is below an
/// elevated box passes underneath. Boxes starting near the ground never
/// allow walking underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBox {
    name: String,
    center_x: f32,
    center_z: f32,
    width: f32,
    depth: f32,
    height: f32,
    base_y: f32,
    min_x: f32,
    max_x: f32,
    min_z: f32,
    max_z: f32,
    max_y: f32,
}

impl AxisBox {
    /// Create a box and precompute its bounds
    pub fn new(config: AxisBoxConfig) -> Self {
        let half_width = config.width / 2.0;
        let half_depth = config.depth / 2.0;
        Self {
            min_x: config.center_x - half_width,
            max_x: config.center_x + half_width,
            min_z: config.center_z - half_depth,
            max_z: config.center_z + half_depth,
            max_y: config.base_y + config.height,
            name: config.name,
            center_x: config.center_x,
            center_z: config.center_z,
            width: config.width,
            depth: config.depth,
            height: config.height,
            base_y: config.base_y,
        }
    }

    /// Collider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Center as an (X, Z) pair
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_z)
    }

    /// Full size as (width, height, depth)
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Bottom face elevation
    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    /// Top face elevation
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Minimum corner on (X, Z)
    pub fn min_xz(&self) -> Vec2 {
        Vec2::new(self.min_x, self.min_z)
    }

    /// Maximum corner on (X, Z)
    pub fn max_xz(&self) -> Vec2 {
        Vec2::new(self.max_x, self.max_z)
    }

    /// Whether the box floats high enough to walk under
    pub fn is_elevated(&self) -> bool {
        self.base_y > ELEVATED_BASE_Y
    }

    /// Whether (x, z) lies inside the unexpanded footprint
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    /// Test a sphere whose center sits at the mover's eye height
    pub fn test(&self, position: Vec3, sphere_radius: f32) -> Option<PushOut> {
        let feet_y = position.y - EYE_TO_FEET;
        let head_y = position.y + EYE_TO_HEAD;

        if feet_y >= self.max_y - TOP_CLEARANCE {
            return None;
        }
        if self.is_elevated() && head_y <= self.base_y {
            return None;
        }

        let min_x = self.min_x - sphere_radius;
        let max_x = self.max_x + sphere_radius;
        let min_z = self.min_z - sphere_radius;
        let max_z = self.max_z + sphere_radius;

        let (x, z) = (position.x, position.z);
        if x < min_x || x > max_x || z < min_z || z > max_z {
            return None;
        }

        let candidates = [
            (BoxFace::MinX, x - min_x),
            (BoxFace::MaxX, max_x - x),
            (BoxFace::MinZ, z - min_z),
            (BoxFace::MaxZ, max_z - z),
        ];
        let mut face = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.1 < face.1 {
                face = *candidate;
            }
        }

        let mut push = PushOut {
            push_x: 0.0,
            push_y: 0.0,
            push_z: 0.0,
            zero_velocity_x: false,
            zero_velocity_z: false,
        };
        match face.0 {
            BoxFace::MinX => {
                push.push_x = min_x - PUSH_MARGIN - x;
                push.zero_velocity_x = true;
            }
            BoxFace::MaxX => {
                push.push_x = max_x + PUSH_MARGIN - x;
                push.zero_velocity_x = true;
            }
            BoxFace::MinZ => {
                push.push_z = min_z - PUSH_MARGIN - z;
                push.zero_velocity_z = true;
            }
            BoxFace::MaxZ => {
                push.push_z = max_z + PUSH_MARGIN - z;
                push.zero_velocity_z = true;
            }
        }
        Some(push)
    }
}

/// Construction parameters for a [`RotatedBox`]
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedBoxConfig {
    /// Debug/removal name
    pub name: String,
    /// Center on X
    pub center_x: f32,
    /// Center on Z
    pub center_z: f32,
    /// Elevation of the (unrotated) bottom face
    pub base_y: f32,
    /// Full size along local X
    pub width: f32,
    /// Full size along local Y
    pub height: f32,
    /// Full size along local Z
    pub depth: f32,
    /// Euler rotation in radians, applied X then Y then Z
    pub rotation: Vec3,
}

/// Oriented box (tilted slabs, angled walls, yawed platforms)
///
/// Tests happen in the box's own frame against all three axes, so unlike
/// [`AxisBox`] there is no eye/feet gating.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedBox {
    name: String,
    center: Vec3,
    half_extents: Vec3,
    euler: Vec3,
    rotation: Quat,
    inverse_rotation: Quat,
}

impl RotatedBox {
    /// Create an oriented box and cache its rotation
    pub fn new(config: RotatedBoxConfig) -> Self {
        let rotation = quat_from_euler(config.rotation);
        Self {
            center: Vec3::new(config.center_x, config.base_y + config.height / 2.0, config.center_z),
            half_extents: Vec3::new(config.width / 2.0, config.height / 2.0, config.depth / 2.0),
            euler: config.rotation,
            rotation,
            inverse_rotation: rotation.inverse(),
            name: config.name,
        }
    }

    /// Collider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space center (vertically centered)
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Half-size along each local axis
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Euler angles the box was built with
    pub fn euler(&self) -> Vec3 {
        self.euler
    }

    /// Cached rotation
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Map a world point into the box frame
    pub fn world_to_local(&self, point: Vec3) -> Vec3 {
        self.inverse_rotation * (point - self.center)
    }

    /// Rotate a box-frame direction into world space (no translation)
    pub fn local_to_world_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * vector
    }

    /// Only yaw-rotated, so the top face is level
    pub fn is_flat(&self) -> bool {
        self.euler.x.abs() < FLAT_TILT_EPSILON && self.euler.z.abs() < FLAT_TILT_EPSILON
    }

    /// Top face elevation of a flat box
    pub fn top_y(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Whether a box-frame point lies inside the local X/Z footprint
    pub fn contains_local_xz(&self, local: Vec3) -> bool {
        local.x.abs() <= self.half_extents.x && local.z.abs() <= self.half_extents.z
    }

    /// Test a sphere against the box in its local frame
    pub fn test(&self, position: Vec3, sphere_radius: f32) -> Option<PushOut> {
        let local = self.world_to_local(position);
        let expanded = self.half_extents.add_scalar(sphere_radius);

        if local.x.abs() > expanded.x || local.y.abs() > expanded.y || local.z.abs() > expanded.z {
            return None;
        }

        // (axis, direction, depth) for -X, +X, -Y, +Y, -Z, +Z
        let candidates = [
            (0, -1.0, local.x + expanded.x),
            (0, 1.0, expanded.x - local.x),
            (1, -1.0, local.y + expanded.y),
            (1, 1.0, expanded.y - local.y),
            (2, -1.0, local.z + expanded.z),
            (2, 1.0, expanded.z - local.z),
        ];
        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.2 < best.2 {
                best = *candidate;
            }
        }

        let (axis, direction, depth) = best;
        let mut local_normal = Vec3::zeros();
        local_normal[axis] = direction;

        let world_normal = self.local_to_world_vector(local_normal);
        let world_push = world_normal * (depth + PUSH_MARGIN);

        Some(PushOut {
            push_x: world_push.x,
            push_y: world_push.y,
            push_z: world_push.z,
            zero_velocity_x: world_normal.x.abs() > NORMAL_AXIS_THRESHOLD,
            zero_velocity_z: world_normal.z.abs() > NORMAL_AXIS_THRESHOLD,
        })
    }
}

/// Construction parameters for a [`Cylinder`]
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderConfig {
    /// Debug/removal name
    pub name: String,
    /// Axis position on X
    pub center_x: f32,
    /// Axis position on Z
    pub center_z: f32,
    /// Radius
    pub radius: f32,
    /// Full height
    pub height: f32,
    /// Elevation of the bottom cap
    pub base_y: f32,
}

/// Vertical cylinder (pillars, poles, trees)
///
/// A hit always stops lateral motion on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    name: String,
    center_x: f32,
    center_z: f32,
    radius: f32,
    height: f32,
    base_y: f32,
    max_y: f32,
}

impl Cylinder {
    /// Create a cylinder
    pub fn new(config: CylinderConfig) -> Self {
        Self {
            max_y: config.base_y + config.height,
            name: config.name,
            center_x: config.center_x,
            center_z: config.center_z,
            radius: config.radius,
            height: config.height,
            base_y: config.base_y,
        }
    }

    /// Collider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Axis position as an (X, Z) pair
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_z)
    }

    /// Radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Full height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Bottom cap elevation
    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    /// Top cap elevation
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Test a sphere against the cylinder wall
    pub fn test(&self, position: Vec3, sphere_radius: f32) -> Option<PushOut> {
        if position.y > self.max_y || position.y < self.base_y {
            return None;
        }

        let offset = Vec2::new(position.x - self.center_x, position.z - self.center_z);
        let combined = self.radius + sphere_radius;
        let distance_sq = offset.norm_squared();
        if distance_sq >= combined * combined {
            return None;
        }

        let distance = distance_sq.sqrt();
        let push = if distance < DEGENERATE_DISTANCE {
            Vec2::new(combined, 0.0)
        } else {
            offset / distance * (combined - distance)
        };

        Some(PushOut {
            push_x: push.x,
            push_y: 0.0,
            push_z: push.y,
            zero_velocity_x: true,
            zero_velocity_z: true,
        })
    }
}

/// Construction parameters for a [`Sphere`]
#[derive(Debug, Clone, PartialEq)]
pub struct SphereConfig {
    /// Debug/removal name
    pub name: String,
    /// World-space center
    pub center: Vec3,
    /// Radius
    pub radius: f32,
}

/// Static sphere (boulders, balls)
///
/// Same resolution as [`Cylinder`] with the vertical distance included.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    name: String,
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a sphere
    pub fn new(config: SphereConfig) -> Self {
        Self {
            name: config.name,
            center: config.center,
            radius: config.radius,
        }
    }

    /// Collider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space center
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Test a sphere against this sphere in 3D
    pub fn test(&self, position: Vec3, sphere_radius: f32) -> Option<PushOut> {
        let offset = position - self.center;
        let combined = self.radius + sphere_radius;
        let distance_sq = offset.norm_squared();
        if distance_sq >= combined * combined {
            return None;
        }

        let distance = distance_sq.sqrt();
        let push = if distance < DEGENERATE_DISTANCE {
            Vec3::new(combined, 0.0, 0.0)
        } else {
            offset / distance * (combined - distance)
        };

        Some(PushOut {
            push_x: push.x,
            push_y: push.y,
            push_z: push.z,
            zero_velocity_x: true,
            zero_velocity_z: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::utils::deg_to_rad;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f32 = 1e-4;

    fn axis_box(center_x: f32, center_z: f32, width: f32, depth: f32, height: f32, base_y: f32) -> AxisBox {
        AxisBox::new(AxisBoxConfig {
            name: "box".into(),
            center_x,
            center_z,
            width,
            depth,
            height,
            base_y,
        })
    }

    fn rotated_box(width: f32, height: f32, depth: f32, rotation: Vec3) -> RotatedBox {
        RotatedBox::new(RotatedBoxConfig {
            name: "slab".into(),
            center_x: 0.0,
            center_z: 0.0,
            base_y: 0.0,
            width,
            height,
            depth,
            rotation,
        })
    }

    fn apply(position: Vec3, push: &PushOut) -> Vec3 {
        Vec3::new(position.x + push.push_x, position.y, position.z + push.push_z)
    }

    #[test]
    fn test_wall_approach_pushes_back_out_on_z() {
        let wall = axis_box(0.0, -5.0, 10.0, 1.0, 3.0, 0.0);
        let mover = Vec3::new(0.0, 1.6, -4.3);

        let push = wall.test(mover, 0.5).expect("mover overlaps the wall");

        // Expanded max Z is -4.5 + 0.5; the shallowest face is +Z.
        assert_relative_eq!(push.push_x, 0.0);
        assert_relative_eq!(mover.z + push.push_z, -3.99, epsilon = EPSILON);
        assert!(push.zero_velocity_z);
        assert!(!push.zero_velocity_x);
    }

    #[test]
    fn test_axis_box_picks_shallowest_face() {
        let platform = axis_box(0.0, 0.0, 4.0, 4.0, 1.0, 0.0);

        // 0.2 inside the expanded -X face, far from every other face.
        let push = platform.test(Vec3::new(-2.3, 1.5, 0.5), 0.5).unwrap();
        assert_relative_eq!(push.push_x, -2.5 - 0.01 + 2.3, epsilon = EPSILON);
        assert_relative_eq!(push.push_z, 0.0);
        assert!(push.zero_velocity_x);

        // 0.1 inside the expanded -Z face.
        let push = platform.test(Vec3::new(0.7, 1.5, -2.4), 0.5).unwrap();
        assert_relative_eq!(push.push_z, -2.5 - 0.01 + 2.4, epsilon = EPSILON);
        assert!(push.zero_velocity_z);
        assert!(!push.zero_velocity_x);
    }

    #[test]
    fn test_axis_box_tie_break_order() {
        let block = axis_box(0.0, 0.0, 4.0, 4.0, 3.0, 0.0);

        // Dead center: all four faces tie, min X wins.
        for _ in 0..3 {
            let push = block.test(Vec3::new(0.0, 1.7, 0.0), 0.5).unwrap();
            assert_relative_eq!(push.push_x, -2.51, epsilon = EPSILON);
            assert_relative_eq!(push.push_z, 0.0);
            assert!(push.zero_velocity_x && !push.zero_velocity_z);
        }

        // Max X and max Z tie, max X comes first.
        let push = block.test(Vec3::new(2.0, 1.7, 2.0), 0.5).unwrap();
        assert_relative_eq!(push.push_x, 0.51, epsilon = EPSILON);
        assert_relative_eq!(push.push_z, 0.0);
        assert!(push.zero_velocity_x && !push.zero_velocity_z);

        // Min Z and max Z tie when centered on Z, min Z comes first.
        let narrow = axis_box(0.0, 0.0, 10.0, 2.0, 3.0, 0.0);
        let push = narrow.test(Vec3::new(0.0, 1.7, 0.0), 0.5).unwrap();
        assert_relative_eq!(push.push_z, -1.51, epsilon = EPSILON);
        assert!(push.zero_velocity_z && !push.zero_velocity_x);
    }

    #[test]
    fn test_push_leaves_expanded_bounds() {
        let block = axis_box(3.0, -1.0, 2.0, 6.0, 3.0, 0.0);
        let radius = 0.4;
        let min = block.min_xz().add_scalar(-radius);
        let max = block.max_xz().add_scalar(radius);

        let mut x = min.x;
        while x <= max.x {
            let mut z = min.y;
            while z <= max.y {
                let mover = Vec3::new(x, 1.7, z);
                let push = block.test(mover, radius).expect("inside expanded bounds");
                let after = apply(mover, &push);
                let outside_x = after.x < min.x || after.x > max.x;
                let outside_z = after.z < min.y || after.z > max.y;
                assert!(outside_x || outside_z, "still inside after push from {mover:?}");
                z += 0.37;
            }
            x += 0.29;
        }
    }

    #[test]
    fn test_elevated_box_walk_under_and_jump_over() {
        let platform = axis_box(0.0, 0.0, 4.0, 4.0, 2.0, 5.0);
        assert!(platform.is_elevated());

        // Head below the base: walks underneath.
        assert!(platform.test(Vec3::new(0.0, 4.5, 0.0), 0.5).is_none());
        // Feet well above max Y - 0.5: standing on top.
        assert!(platform.test(Vec3::new(0.0, 9.0, 0.0), 0.5).is_none());
        // Body inside the slab: blocked.
        assert!(platform.test(Vec3::new(0.0, 6.0, 0.0), 0.5).is_some());
    }

    #[test]
    fn test_ground_level_wall_always_blocks() {
        let wall = axis_box(0.0, 0.0, 4.0, 1.0, 3.0, 0.0);
        assert!(!wall.is_elevated());

        // Head below the base would pass under an elevated box, not a wall.
        assert!(wall.test(Vec3::new(0.0, -1.0, 0.2), 0.5).is_some());
    }

    #[test]
    fn test_axis_box_outside_expanded_bounds_misses() {
        let wall = axis_box(0.0, 0.0, 2.0, 2.0, 3.0, 0.0);
        assert!(wall.test(Vec3::new(1.6, 1.7, 0.0), 0.5).is_none());
        assert!(wall.test(Vec3::new(0.0, 1.7, -1.6), 0.5).is_none());
    }

    #[test]
    fn test_rotated_box_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..64 {
            let rotation = Vec3::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            );
            let slab = RotatedBox::new(RotatedBoxConfig {
                name: "random".into(),
                center_x: rng.gen_range(-20.0..20.0),
                center_z: rng.gen_range(-20.0..20.0),
                base_y: rng.gen_range(0.0..5.0),
                width: 2.0,
                height: 1.0,
                depth: 3.0,
                rotation,
            });
            let point = Vec3::new(
                rng.gen_range(-30.0..30.0),
                rng.gen_range(-5.0..10.0),
                rng.gen_range(-30.0..30.0),
            );

            let recovered = slab.local_to_world_vector(slab.world_to_local(point)) + slab.center();
            assert_relative_eq!(recovered, point, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_rotated_box_yaw_quarter_turn_pushes_along_world_x() {
        // Long side along local X; after a quarter yaw the thin Z faces point along world X.
        let slab = rotated_box(4.0, 2.0, 1.0, Vec3::new(0.0, deg_to_rad(90.0), 0.0));
        let push = slab.test(Vec3::new(0.6, 1.0, 0.0), 0.5).unwrap();

        assert_relative_eq!(push.push_x, 0.41, epsilon = EPSILON);
        assert_relative_eq!(push.push_z, 0.0, epsilon = EPSILON);
        assert!(push.zero_velocity_x);
        assert!(!push.zero_velocity_z);
    }

    #[test]
    fn test_rotated_box_diagonal_face_zeroes_both_axes() {
        let slab = rotated_box(1.0, 2.0, 1.0, Vec3::new(0.0, deg_to_rad(45.0), 0.0));
        let direction = slab.local_to_world_vector(Vec3::new(1.0, 0.0, 0.0));
        let push = slab.test(direction * 0.8 + Vec3::new(0.0, 1.0, 0.0), 0.5).unwrap();

        assert!(push.zero_velocity_x);
        assert!(push.zero_velocity_z);
        assert_relative_eq!(push.horizontal().norm(), 1.0 - 0.8 + 0.01, epsilon = EPSILON);
    }

    #[test]
    fn test_rotated_box_resolves_vertical_face() {
        // Mover barely overlapping the top of an unrotated slab: +Y is shallowest.
        let slab = rotated_box(6.0, 1.0, 6.0, Vec3::zeros());
        let push = slab.test(Vec3::new(0.0, 1.4, 0.0), 0.5).unwrap();

        assert_relative_eq!(push.push_y, 0.11, epsilon = EPSILON);
        assert_relative_eq!(push.push_x, 0.0);
        assert_relative_eq!(push.push_z, 0.0);
        assert!(!push.zero_velocity_x && !push.zero_velocity_z);
    }

    #[test]
    fn test_rotated_box_flatness() {
        assert!(rotated_box(1.0, 1.0, 1.0, Vec3::new(0.0, 1.2, 0.0)).is_flat());
        assert!(!rotated_box(1.0, 1.0, 1.0, Vec3::new(deg_to_rad(10.0), 0.0, 0.0)).is_flat());
        assert!(!rotated_box(1.0, 1.0, 1.0, Vec3::new(0.0, 0.0, 0.02)).is_flat());
    }

    #[test]
    fn test_cylinder_pushes_along_separation() {
        let pillar = Cylinder::new(CylinderConfig {
            name: "pillar".into(),
            center_x: 10.0,
            center_z: 10.0,
            radius: 1.0,
            height: 5.0,
            base_y: 0.0,
        });
        let mover = Vec3::new(10.3, 2.0, 10.4);
        let push = pillar.test(mover, 0.5).unwrap();

        let after = apply(mover, &push);
        assert_relative_eq!(after.x, 10.9, epsilon = EPSILON);
        assert_relative_eq!(after.z, 11.2, epsilon = EPSILON);
        assert_relative_eq!((after.xz() - pillar.center()).norm(), 1.5, epsilon = EPSILON);
        assert!(push.zero_velocity_x && push.zero_velocity_z);
    }

    #[test]
    fn test_cylinder_degenerate_center() {
        let pillar = Cylinder::new(CylinderConfig {
            name: "pole".into(),
            center_x: -2.0,
            center_z: 4.0,
            radius: 0.3,
            height: 3.0,
            base_y: 0.0,
        });
        let push = pillar.test(Vec3::new(-2.0, 1.0, 4.0), 0.5).unwrap();

        assert_relative_eq!(push.horizontal().norm(), 0.8, epsilon = EPSILON);
        assert_relative_eq!(push.push_x, 0.8, epsilon = EPSILON);
        assert!(push.zero_velocity_x && push.zero_velocity_z);
    }

    #[test]
    fn test_cylinder_vertical_containment() {
        let pillar = Cylinder::new(CylinderConfig {
            name: "stump".into(),
            center_x: 0.0,
            center_z: 0.0,
            radius: 1.0,
            height: 1.0,
            base_y: 1.0,
        });
        assert!(pillar.test(Vec3::new(0.5, 2.5, 0.0), 0.5).is_none());
        assert!(pillar.test(Vec3::new(0.5, 0.5, 0.0), 0.5).is_none());
        assert!(pillar.test(Vec3::new(0.5, 1.5, 0.0), 0.5).is_some());
    }

    #[test]
    fn test_sphere_uses_vertical_distance() {
        let boulder = Sphere::new(SphereConfig {
            name: "boulder".into(),
            center: Vec3::new(0.0, 1.0, 0.0),
            radius: 1.0,
        });

        assert!(boulder.test(Vec3::new(0.0, 2.6, 0.0), 0.5).is_none());

        let push = boulder.test(Vec3::new(0.0, 1.0, 1.2), 0.5).unwrap();
        assert_relative_eq!(push.push_z, 0.3, epsilon = EPSILON);
        assert!(push.zero_velocity_x && push.zero_velocity_z);

        let push = boulder.test(Vec3::new(0.0, 1.0, 0.0), 0.5).unwrap();
        assert_relative_eq!(push.push_x, 1.5, epsilon = EPSILON);
    }
}
