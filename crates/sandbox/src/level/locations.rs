//! Location set-pieces
//!
//! Each builder registers its colliders into the registry it is handed and
//! returns any ground provider it needs. Builders never keep a reference to
//! the registry, so a level reset can clear it and call them again.

use rand::Rng;

use sandbox_engine::foundation::math::utils::deg_to_rad;
use sandbox_engine::foundation::math::{Vec2, Vec3};
use sandbox_engine::physics::collision::{AxisBoxConfig, CylinderConfig, RotatedBoxConfig};
use sandbox_engine::physics::collision_system::CollisionRegistry;
use sandbox_engine::physics::ground::{
    JumpRamp, JumpRampConfig, ViewingPlatform, ViewingPlatformConfig,
};

/// Perimeter wall height
const WALL_HEIGHT: f32 = 4.0;

/// Perimeter wall thickness
const WALL_THICKNESS: f32 = 1.0;

/// Four axis-aligned walls enclosing a square arena
///
/// `half_extent` is the distance from the origin to each wall's inner face.
pub fn perimeter_walls(registry: &mut CollisionRegistry, half_extent: f32) {
    let offset = half_extent + WALL_THICKNESS / 2.0;
    let span = 2.0 * (half_extent + WALL_THICKNESS);

    let walls = [
        ("perimeter_north", 0.0, -offset, span, WALL_THICKNESS),
        ("perimeter_south", 0.0, offset, span, WALL_THICKNESS),
        ("perimeter_west", -offset, 0.0, WALL_THICKNESS, span),
        ("perimeter_east", offset, 0.0, WALL_THICKNESS, span),
    ];
    for (name, center_x, center_z, width, depth) in walls {
        registry.register_box(AxisBoxConfig {
            name: name.into(),
            center_x,
            center_z,
            width,
            depth,
            height: WALL_HEIGHT,
            base_y: 0.0,
        });
    }
}

/// Elevated deck on four cylinder legs
///
/// The deck is high enough to walk underneath and is stood on through the
/// registry floor query.
pub fn watchtower(registry: &mut CollisionRegistry, center: Vec2) {
    const DECK_SIZE: f32 = 6.0;
    const DECK_THICKNESS: f32 = 0.4;
    const DECK_TOP: f32 = 6.0;
    const LEG_RADIUS: f32 = 0.3;
    const LEG_INSET: f32 = 0.5;

    let leg_offset = DECK_SIZE / 2.0 - LEG_INSET;
    for (i, (sx, sz)) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)].into_iter().enumerate() {
        registry.register_cylinder(CylinderConfig {
            name: format!("watchtower_leg_{i}"),
            center_x: center.x + sx * leg_offset,
            center_z: center.y + sz * leg_offset,
            radius: LEG_RADIUS,
            height: DECK_TOP - DECK_THICKNESS,
            base_y: 0.0,
        });
    }

    registry.register_box(AxisBoxConfig {
        name: "watchtower_deck".into(),
        center_x: center.x,
        center_z: center.y,
        width: DECK_SIZE,
        depth: DECK_SIZE,
        height: DECK_THICKNESS,
        base_y: DECK_TOP - DECK_THICKNESS,
    });
}

/// Yawed viewing platform resting on two yawed pillars
pub fn overlook(registry: &mut CollisionRegistry, center: Vec2, yaw_degrees: f32) -> ViewingPlatform {
    const WIDTH: f32 = 8.0;
    const DEPTH: f32 = 3.0;
    const TOP: f32 = 3.0;
    const PILLAR_SIZE: f32 = 1.0;

    let yaw = deg_to_rad(yaw_degrees);
    // Local +X in world space
    let across = Vec2::new(yaw.cos(), -yaw.sin());
    let pillar_offset = WIDTH / 2.0 - PILLAR_SIZE;

    for (side, sign) in [("west", -1.0), ("east", 1.0)] {
        let position = center + across * (sign * pillar_offset);
        registry.register_rotated_box(RotatedBoxConfig {
            name: format!("overlook_pillar_{side}"),
            center_x: position.x,
            center_z: position.y,
            base_y: 0.0,
            width: PILLAR_SIZE,
            height: TOP,
            depth: PILLAR_SIZE,
            rotation: Vec3::new(0.0, yaw, 0.0),
        });
    }

    ViewingPlatform::new(ViewingPlatformConfig {
        center_x: center.x,
        center_z: center.y,
        yaw,
        width: WIDTH,
        depth: DEPTH,
        top_y: TOP,
    })
}

/// Two angled walls forming a funnel whose tip is at `center` and whose
/// mouth opens toward +Z
pub fn funnel_walls(registry: &mut CollisionRegistry, center: Vec2) {
    const LENGTH: f32 = 10.0;
    const THICKNESS: f32 = 0.5;
    const HEIGHT: f32 = 3.0;
    const ANGLE_DEGREES: f32 = 25.0;

    for (side, sign) in [("left", -1.0_f32), ("right", 1.0)] {
        let yaw = deg_to_rad(-sign * ANGLE_DEGREES);
        let half = LENGTH / 2.0;
        let offset = Vec2::new(sign * half * yaw.cos().abs(), half * yaw.sin().abs());
        let position = center + offset;
        registry.register_rotated_box(RotatedBoxConfig {
            name: format!("funnel_{side}"),
            center_x: position.x,
            center_z: position.y,
            base_y: 0.0,
            width: LENGTH,
            height: HEIGHT,
            depth: THICKNESS,
            rotation: Vec3::new(0.0, yaw, 0.0),
        });
    }
}

/// Jump ramp with a tilted slab under its front face
///
/// The ramp runs toward +Z. Heights come from the returned provider; the
/// slab sits just under the front face and is registered as a collider.
pub fn jump_ramp(registry: &mut CollisionRegistry, center: Vec2) -> JumpRamp {
    const SLAB_THICKNESS: f32 = 0.2;
    // Keeps a large mover sphere clear of the slab's upper end at the crest
    const SLAB_DROP: f32 = 0.3;

    let config = JumpRampConfig {
        center_x: center.x,
        center_z: center.y,
        yaw: 0.0,
        width: 6.0,
        ramp_length: 8.0,
        tabletop_length: 4.0,
        height: 2.0,
        base_y: 0.0,
    };
    let ramp = JumpRamp::new(config.clone());

    let incline = (config.height / config.ramp_length).atan();
    let front_center_z = center.y - ramp.total_length() / 2.0 + config.ramp_length / 2.0;
    registry.register_rotated_box(RotatedBoxConfig {
        name: "jump_ramp_slab".into(),
        center_x: center.x,
        center_z: front_center_z,
        base_y: config.base_y + config.height / 2.0 - SLAB_THICKNESS - SLAB_DROP,
        width: config.width,
        height: SLAB_THICKNESS,
        depth: config.ramp_length.hypot(config.height),
        // Negative pitch raises the +Z end
        rotation: Vec3::new(-incline, 0.0, 0.0),
    });

    ramp
}

/// Tree trunks scattered around `center` without overlapping each other
///
/// Returns the number of trees placed, which can be lower than `count` when
/// the area is too crowded.
pub fn tree_grove(
    registry: &mut CollisionRegistry,
    rng: &mut impl Rng,
    center: Vec2,
    radius: f32,
    count: usize,
) -> usize {
    const MIN_SPACING: f32 = 2.5;
    const ATTEMPTS_PER_TREE: usize = 20;

    let mut placed: Vec<Vec2> = Vec::with_capacity(count);
    for _ in 0..count * ATTEMPTS_PER_TREE {
        if placed.len() == count {
            break;
        }

        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let distance = radius * rng.gen_range(0.0_f32..1.0).sqrt();
        let position = center + Vec2::new(angle.cos(), angle.sin()) * distance;
        if placed.iter().any(|p| (p - position).norm() < MIN_SPACING) {
            continue;
        }

        registry.register_cylinder(CylinderConfig {
            name: format!("tree_{}", placed.len()),
            center_x: position.x,
            center_z: position.y,
            radius: rng.gen_range(0.3..0.6),
            height: rng.gen_range(4.0..8.0),
            base_y: 0.0,
        });
        placed.push(position);
    }

    if placed.len() < count {
        log::warn!("Tree grove placed {} of {} trees", placed.len(), count);
    }
    placed.len()
}
