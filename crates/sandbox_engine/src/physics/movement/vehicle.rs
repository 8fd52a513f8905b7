//! Vehicle movement
//!
//! The vehicle's position is the bottom of its chassis. The registry sweep
//! only understands eye-height movers, so the chassis is probed as if the
//! base were a player's feet.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::utils::{approach, lerp};
use crate::foundation::math::Vec3;
use crate::physics::tuning::EYE_TO_FEET;
use super::{forward_from_yaw, GroundContext, MoveOutcome};

/// Tuning for the vehicle integrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Top forward speed (meters/second)
    pub max_speed: f32,
    /// Top reverse speed (meters/second)
    pub max_reverse_speed: f32,
    /// Throttle acceleration (meters/second²)
    pub acceleration: f32,
    /// Braking deceleration (meters/second²)
    pub brake_deceleration: f32,
    /// Coasting deceleration (meters/second²)
    pub drag: f32,
    /// Yaw rate at full speed and full lock (radians/second)
    pub turn_rate: f32,
    /// Gravity acceleration (meters/second²)
    pub gravity: f32,
    /// Collision sphere radius (meters)
    pub radius: f32,
    /// How quickly the chassis settles onto lower ground (1/second)
    pub follow_rate: f32,
    /// Largest drop the chassis follows without going airborne (meters)
    pub max_step_down: f32,
    /// Longest tick the integrator will simulate (seconds)
    pub max_delta_time: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            max_speed: 30.0,
            max_reverse_speed: 8.0,
            acceleration: 12.0,
            brake_deceleration: 25.0,
            drag: 2.0,
            turn_rate: 1.8,
            gravity: 20.0,
            radius: 1.5,
            follow_rate: 12.0,
            max_step_down: 0.75,
            max_delta_time: 0.1,
        }
    }
}

impl Config for VehicleConfig {}

/// Per-tick driver input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VehicleInput {
    /// -1 (full reverse) to 1 (full throttle)
    pub throttle: f32,
    /// -1 (full left) to 1 (full right)
    pub steer: f32,
    /// Brake held
    pub brake: bool,
}

/// Vehicle kinematic state
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    /// Chassis base position
    pub position: Vec3,
    /// Velocity (meters/second)
    pub velocity: Vec3,
    /// Yaw (radians); 0 faces -Z
    pub heading: f32,
    /// Signed speed along the heading
    pub speed: f32,
    /// Wheels on the ground at the end of the last tick
    pub grounded: bool,
    /// Normal of the ground under the chassis
    pub surface_normal: Vec3,
    /// Nose-up pitch derived from the surface normal (radians)
    pub pitch: f32,
}

impl VehicleState {
    /// Parked on the ground at `position`, facing `heading`
    pub fn parked(position: Vec3, heading: f32) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            heading,
            speed: 0.0,
            grounded: true,
            surface_normal: Vec3::y(),
            pitch: 0.0,
        }
    }

    /// Unit vector the vehicle is facing
    pub fn forward(&self) -> Vec3 {
        forward_from_yaw(self.heading)
    }
}

/// Vehicle integrator
#[derive(Debug, Clone, Default)]
pub struct VehicleController {
    config: VehicleConfig,
}

impl VehicleController {
    /// Create a controller with the given tuning
    pub fn new(config: VehicleConfig) -> Self {
        Self { config }
    }

    /// Vehicle tuning
    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    fn update_speed(&self, state: &mut VehicleState, input: &VehicleInput, dt: f32) {
        let config = &self.config;
        let speed = if input.brake {
            approach(state.speed, 0.0, config.brake_deceleration * dt)
        } else if input.throttle != 0.0 {
            state.speed + input.throttle.clamp(-1.0, 1.0) * config.acceleration * dt
        } else {
            approach(state.speed, 0.0, config.drag * dt)
        };
        // Bounds come from config files; min/max never panic on inverted or NaN limits
        state.speed = speed.min(config.max_speed).max(-config.max_reverse_speed);

        // No grip at a standstill
        let grip = if config.max_speed > f32::EPSILON {
            (state.speed / config.max_speed).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        state.heading -= input.steer.clamp(-1.0, 1.0) * config.turn_rate * grip * dt;
    }

    /// Advance the vehicle by one tick
    pub fn step(
        &self,
        state: &mut VehicleState,
        input: &VehicleInput,
        world: &GroundContext<'_>,
        delta_time: f32,
    ) -> MoveOutcome {
        let config = &self.config;
        let dt = delta_time.min(config.max_delta_time).max(0.0);
        let was_grounded = state.grounded;

        // Airborne vehicles keep their momentum
        if was_grounded {
            self.update_speed(state, input, dt);
            let forward = state.forward();
            state.velocity.x = forward.x * state.speed;
            state.velocity.z = forward.z * state.speed;
        }

        state.position.x += state.velocity.x * dt;
        state.position.z += state.velocity.z * dt;

        let base_y = state.position.y;
        let side_hit = world.resolve_sides(&mut state.position, &mut state.velocity, base_y, config.radius);

        let probe = Vec3::new(state.position.x, state.position.y + EYE_TO_FEET, state.position.z);
        let swept = world.sweep(probe, config.radius, state.velocity);
        state.position.x = swept.position.x;
        state.position.z = swept.position.z;
        state.velocity.x = swept.velocity.x;
        state.velocity.z = swept.velocity.z;

        let collided = side_hit || swept.collided;
        if collided {
            let forward = state.forward();
            state.speed = state.velocity.x * forward.x + state.velocity.z * forward.z;
        }

        let ground = world.ground_under(state.position.x, state.position.z, probe.y, EYE_TO_FEET);

        let mut landed = false;
        state.grounded = false;
        match ground {
            // Never below the ground
            Some(sample) if state.position.y <= sample.height => {
                state.position.y = sample.height;
                state.grounded = true;
                landed = !was_grounded;
            }
            Some(sample) if was_grounded && state.position.y - sample.height <= config.max_step_down => {
                let t = (config.follow_rate * dt).min(1.0);
                state.position.y = lerp(state.position.y, sample.height, t);
                state.grounded = true;
            }
            _ => {
                state.velocity.y -= config.gravity * dt;
                state.position.y += state.velocity.y * dt;
                if let Some(sample) = ground.filter(|s| state.position.y <= s.height) {
                    state.position.y = sample.height;
                    state.grounded = true;
                    landed = true;
                }
            }
        }

        if landed {
            log::debug!(
                "Vehicle landed at ({:.2}, {:.2}, {:.2})",
                state.position.x,
                state.position.y,
                state.position.z
            );
        }

        let ground = if state.grounded { ground } else { None };
        if let Some(sample) = ground {
            let normal = sample.normal;
            // Keep the velocity tangent to the surface so leaving a slope carries its climb
            state.velocity.y = if normal.y > f32::EPSILON {
                -(normal.x * state.velocity.x + normal.z * state.velocity.z) / normal.y
            } else {
                0.0
            };
            state.surface_normal = normal;
            state.pitch = -normal.dot(&state.forward()).atan2(normal.y);
        }

        MoveOutcome {
            collided,
            landed,
            ground,
        }
    }
}
