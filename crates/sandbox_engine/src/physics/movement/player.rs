//! On-foot movement
//!
//! The player's position is its eye point; feet are `eye_height` below it.
//! Registry colliders receive the eye position directly, ground providers
//! receive the feet height.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::Vec3;
use crate::physics::ground::GroundSample;
use super::{forward_from_yaw, right_from_yaw, GroundContext, MoveOutcome};

/// Tuning for the on-foot integrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerMovementConfig {
    /// Walking speed (meters/second)
    pub walk_speed: f32,

    /// Sprinting speed (meters/second)
    pub sprint_speed: f32,

    /// Horizontal acceleration while grounded (meters/second²)
    pub ground_acceleration: f32,

    /// Fraction of ground acceleration available while airborne
    pub air_control: f32,

    /// Gravity acceleration (meters/second²)
    pub gravity: f32,

    /// Upward launch speed of a jump (meters/second)
    pub jump_velocity: f32,

    /// Collision sphere radius (meters)
    pub radius: f32,

    /// Eye height above the feet (meters)
    pub eye_height: f32,

    /// Largest drop the player sticks to while walking downhill (meters)
    pub max_step_down: f32,

    /// Longest tick the integrator will simulate (seconds)
    pub max_delta_time: f32,
}

impl Default for PlayerMovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 6.0,
            sprint_speed: 10.0,
            ground_acceleration: 60.0,
            air_control: 0.3,
            gravity: 20.0,
            jump_velocity: 8.0,
            radius: 0.5,
            eye_height: 1.7,
            max_step_down: 0.5,
            max_delta_time: 0.1,
        }
    }
}

impl Config for PlayerMovementConfig {}

/// Per-tick player input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Forward axis, -1 (back) to 1 (forward)
    pub forward: f32,
    /// Strafe axis, -1 (left) to 1 (right)
    pub strafe: f32,
    /// View yaw (radians); 0 faces -Z
    pub yaw: f32,
    /// Jump requested this tick
    pub jump: bool,
    /// Sprint held
    pub sprint: bool,
}

/// Player kinematic state
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Eye position
    pub position: Vec3,
    /// Velocity (meters/second)
    pub velocity: Vec3,
    /// Standing on ground at the end of the last tick
    pub grounded: bool,
    /// Ground the player stood on at the end of the last tick
    pub ground: Option<GroundSample>,
}

impl PlayerState {
    /// Airborne at rest at the given eye position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            grounded: false,
            ground: None,
        }
    }

    /// Feet height for the given eye height
    pub fn feet_y(&self, eye_height: f32) -> f32 {
        self.position.y - eye_height
    }
}

/// On-foot integrator
#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    config: PlayerMovementConfig,
}

impl PlayerController {
    /// Create a controller with the given tuning
    pub fn new(config: PlayerMovementConfig) -> Self {
        Self { config }
    }

    /// Movement tuning
    pub fn config(&self) -> &PlayerMovementConfig {
        &self.config
    }

    /// Advance the player by one tick
    pub fn step(
        &self,
        state: &mut PlayerState,
        input: &PlayerInput,
        world: &GroundContext<'_>,
        delta_time: f32,
    ) -> MoveOutcome {
        let config = &self.config;
        // Limit comes from config files; min/max never panic on inverted or NaN limits
        let dt = delta_time.min(config.max_delta_time).max(0.0);
        let was_grounded = state.grounded;

        // Steer horizontal velocity toward the wish direction
        let mut wish = forward_from_yaw(input.yaw) * input.forward + right_from_yaw(input.yaw) * input.strafe;
        let wish_length = wish.norm();
        if wish_length > 1.0 {
            wish /= wish_length;
        }
        let speed = if input.sprint { config.sprint_speed } else { config.walk_speed };
        let target = wish * speed;

        let acceleration = if was_grounded {
            config.ground_acceleration
        } else {
            config.ground_acceleration * config.air_control
        };
        let mut horizontal = Vec3::new(target.x - state.velocity.x, 0.0, target.z - state.velocity.z);
        let max_change = acceleration * dt;
        let change = horizontal.norm();
        if change > max_change {
            horizontal *= max_change / change;
        }
        state.velocity.x += horizontal.x;
        state.velocity.z += horizontal.z;

        // Tentative horizontal move, then collisions
        state.position.x += state.velocity.x * dt;
        state.position.z += state.velocity.z * dt;

        let feet_y = state.feet_y(config.eye_height);
        let side_hit = world.resolve_sides(&mut state.position, &mut state.velocity, feet_y, config.radius);

        let swept = world.sweep(state.position, config.radius, state.velocity);
        state.position.x = swept.position.x;
        state.position.z = swept.position.z;
        state.velocity.x = swept.velocity.x;
        state.velocity.z = swept.velocity.z;

        // Ground is sampled before the vertical move so a fast fall cannot skip past it
        let ground = world.ground_under(
            state.position.x,
            state.position.z,
            state.position.y,
            config.eye_height,
        );

        if input.jump && was_grounded {
            state.velocity.y = config.jump_velocity;
            log::trace!("Jump from {:.2}", state.position.y);
        }
        state.velocity.y -= config.gravity * dt;
        state.position.y += state.velocity.y * dt;

        let mut landed = false;
        state.grounded = false;
        state.ground = None;
        if let Some(sample) = ground {
            let feet_y = state.feet_y(config.eye_height);
            let falling = state.velocity.y <= 0.0;
            let touching = feet_y <= sample.height;
            let sticking = was_grounded && feet_y - sample.height <= config.max_step_down;

            if falling && (touching || sticking) {
                state.position.y = sample.height + config.eye_height;
                state.velocity.y = 0.0;
                state.grounded = true;
                state.ground = Some(sample);
                landed = !was_grounded;
            }
        }

        MoveOutcome {
            collided: side_hit || swept.collided,
            landed,
            ground: state.ground,
        }
    }
}
