//! # Sandbox Engine
//!
//! Collision and ground-support core for a first-person sandbox game.
//!
//! ## Features
//!
//! - **Collider Primitives**: axis-aligned boxes, oriented boxes, vertical cylinders and spheres
//! - **Collision Registry**: ordered collider storage with a sequential push-out sweep
//! - **Floor Queries**: highest standable surface under a mover
//! - **Ground Providers**: terrain height fields, jump ramps and viewing platforms
//! - **Movement**: on-foot and vehicle integrators that consume all of the above
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sandbox_engine::prelude::*;
//!
//! let mut registry = CollisionRegistry::new();
//! registry.register_box(AxisBoxConfig {
//!     name: "north_wall".into(),
//!     center_x: 0.0,
//!     center_z: -5.0,
//!     width: 10.0,
//!     depth: 1.0,
//!     height: 3.0,
//!     base_y: 0.0,
//! });
//!
//! let swept = registry.sweep_mover_collision(Vec3::new(0.0, 1.6, -4.3), 0.5, Vec3::zeros());
//! assert!(swept.collided);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Quat, Vec2, Vec3},
        physics::{
            collision::{
                AxisBox, AxisBoxConfig, Collider, ColliderDesc, Cylinder, CylinderConfig,
                PushOut, RotatedBox, RotatedBoxConfig, Sphere, SphereConfig,
            },
            collider_kinds::{ColliderKind, ColliderKinds},
            collision_system::{ColliderHandle, ColliderHit, CollisionRegistry, SweepResult},
            floor::FloorHit,
            ground::{
                GroundProvider, GroundSample, HeightField, JumpRamp, JumpRampConfig,
                SurfaceKind, ViewingPlatform, ViewingPlatformConfig,
            },
            movement::{
                GroundContext, PlayerController, PlayerInput, PlayerMovementConfig, PlayerState,
                VehicleConfig, VehicleController, VehicleInput, VehicleState,
            },
        },
    };
}
