//! Movement integrators
//!
//! Both integrators follow the same per-tick order:
//!
//! 1. Move horizontally to a tentative position.
//! 2. Apply side pushes from ground providers, then the registry sweep.
//! 3. Merge the registry floor query with every ground provider and keep the
//!    highest candidate.
//! 4. Snap or lerp the vertical position toward that ground.

mod player;
mod vehicle;

pub use player::{PlayerController, PlayerInput, PlayerMovementConfig, PlayerState};
pub use vehicle::{VehicleConfig, VehicleController, VehicleInput, VehicleState};

use crate::foundation::math::Vec3;
use crate::physics::collision_system::{CollisionRegistry, SweepResult};
use crate::physics::ground::{highest_ground, GroundProvider, GroundSample};

/// Everything a mover collides with and stands on during a tick
#[derive(Clone, Copy)]
pub struct GroundContext<'a> {
    /// Static colliders
    pub registry: &'a CollisionRegistry,
    /// Terrain, ramps, platforms
    pub providers: &'a [&'a dyn GroundProvider],
}

impl<'a> GroundContext<'a> {
    /// Bundle a registry with its ground providers
    pub fn new(registry: &'a CollisionRegistry, providers: &'a [&'a dyn GroundProvider]) -> Self {
        Self { registry, providers }
    }

    /// Push the mover out of provider sides and drop velocity into them
    ///
    /// Returns whether any provider pushed.
    pub fn resolve_sides(&self, position: &mut Vec3, velocity: &mut Vec3, feet_y: f32, radius: f32) -> bool {
        let mut pushed = false;
        for provider in self.providers {
            let Some(push) = provider.side_collision_at(position.x, position.z, feet_y, radius) else {
                continue;
            };
            position.x += push.x;
            position.z += push.y;

            let length = push.norm();
            if length > f32::EPSILON {
                let normal = push / length;
                let into = velocity.x * normal.x + velocity.z * normal.y;
                if into < 0.0 {
                    velocity.x -= normal.x * into;
                    velocity.z -= normal.y * into;
                }
            }
            pushed = true;
        }
        pushed
    }

    /// Registry sweep for a mover sphere centered at `probe`
    pub fn sweep(&self, probe: Vec3, radius: f32, velocity: Vec3) -> SweepResult {
        self.registry.sweep_mover_collision(probe, radius, velocity)
    }

    /// Highest ground under (x, z) across the registry and every provider
    pub fn ground_under(&self, x: f32, z: f32, eye_y: f32, eye_height: f32) -> Option<GroundSample> {
        let feet_y = eye_y - eye_height;
        let floor = self
            .registry
            .floor_height(x, z, eye_y, eye_height)
            .map(|hit| hit.to_ground_sample());
        highest_ground(
            std::iter::once(floor).chain(
                self.providers
                    .iter()
                    .map(|provider| provider.ground_height_at(x, z, feet_y)),
            ),
        )
    }
}

/// What happened to a mover during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// A registry collider or provider side pushed the mover
    pub collided: bool,
    /// The mover touched down this tick after being airborne
    pub landed: bool,
    /// Ground the mover is standing on, if grounded
    pub ground: Option<GroundSample>,
}

/// Unit forward vector for a yaw angle; yaw 0 faces -Z
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

/// Unit right vector for a yaw angle
pub fn right_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}
