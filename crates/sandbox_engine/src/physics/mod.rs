//! Physics module
//!
//! Static collision and ground support for movers:
//!
//! - [`collision`]: collider primitives and their sphere push-out tests
//! - [`collision_system`]: the ordered collider registry and mover sweep
//! - [`floor`]: standable surface queries against the registry
//! - [`ground`]: terrain, ramp and platform ground providers
//! - [`movement`]: player and vehicle integrators built on the above

pub mod collider_kinds;
pub mod collision;
pub mod collision_system;
pub mod floor;
pub mod ground;
pub mod movement;
pub mod tuning;

pub use collider_kinds::{ColliderKind, ColliderKinds};
pub use collision_system::{ColliderHandle, ColliderHit, CollisionRegistry, SweepResult};
pub use floor::FloorHit;
pub use movement::{GroundContext, MoveOutcome};
