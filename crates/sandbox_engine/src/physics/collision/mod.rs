//! Collider shapes for the sphere push-out sweep
//!
//! # Module Organization
//!
//! - [`primitives`] - The four collider primitives and their push-out tests
//! - [`shape`] - The closed [`Collider`] variant set stored by the registry
//!
//! # Key Types
//!
//! - [`Collider`] - Registered collider (tagged variant over the primitives)
//! - [`ColliderDesc`] - Construction parameters handed to the registry
//! - [`PushOut`] - Minimal displacement produced by a single test

pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use primitives::{
    AxisBox, AxisBoxConfig, Cylinder, CylinderConfig, PushOut, RotatedBox, RotatedBoxConfig,
    Sphere, SphereConfig,
};
pub use shape::{Collider, ColliderDesc};
