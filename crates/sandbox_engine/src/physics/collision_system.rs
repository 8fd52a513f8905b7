//! Collision registry and the per-tick mover sweep
//!
//! The registry owns every static collider in the level. Location builders
//! register colliders while the level is constructed, movers query it every
//! tick, and a level reset clears it.
//!
//! The sweep resolves colliders one at a time in registration order, each
//! test seeing the position already corrected by the previous hits. There is
//! no relaxation pass, so deeply overlapping geometry can be under-resolved
//! in a single tick and registration order can change the result. The mover
//! is re-tested every tick, which settles it over the next few frames.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Vec3;
use crate::physics::collider_kinds::ColliderKinds;
use crate::physics::collision::{
    AxisBoxConfig, Collider, ColliderDesc, CylinderConfig, PushOut, RotatedBoxConfig, SphereConfig,
};

new_key_type! {
    /// Stable handle to a registered collider
    pub struct ColliderHandle;
}

/// One accepted push-out during a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderHit {
    /// Collider that produced the push
    pub handle: ColliderHandle,
    /// The push that was applied
    pub push: PushOut,
}

/// Mover state after a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Corrected position (Y is passed through untouched)
    pub position: Vec3,
    /// Velocity with the requested horizontal components zeroed
    pub velocity: Vec3,
    /// At least one collider pushed the mover
    pub collided: bool,
    /// Every hit in the order it was resolved
    pub hits: Vec<ColliderHit>,
}

/// Ordered collection of static colliders
///
/// Handles stay valid until the collider is removed; names are metadata for
/// debugging and name-based removal.
#[derive(Debug, Default)]
pub struct CollisionRegistry {
    colliders: SlotMap<ColliderHandle, Collider>,
    order: Vec<ColliderHandle>,

    /// Log every hit during sweeps
    pub debug_enabled: bool,
}

impl CollisionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collider and append it to the resolution order
    pub fn add(&mut self, desc: impl Into<ColliderDesc>) -> ColliderHandle {
        let collider = desc.into().build();
        log::trace!("Registering {:?} collider '{}'", collider.kind(), collider.name());
        let handle = self.colliders.insert(collider);
        self.order.push(handle);
        handle
    }

    /// Register an axis-aligned box
    pub fn register_box(&mut self, config: AxisBoxConfig) -> ColliderHandle {
        self.add(ColliderDesc::AxisBox(config))
    }

    /// Register an oriented box
    pub fn register_rotated_box(&mut self, config: RotatedBoxConfig) -> ColliderHandle {
        self.add(ColliderDesc::RotatedBox(config))
    }

    /// Register a vertical cylinder
    pub fn register_cylinder(&mut self, config: CylinderConfig) -> ColliderHandle {
        self.add(ColliderDesc::Cylinder(config))
    }

    /// Register a sphere
    pub fn register_sphere(&mut self, config: SphereConfig) -> ColliderHandle {
        self.add(ColliderDesc::Sphere(config))
    }

    /// Remove the first collider (in registration order) with this name
    ///
    /// Returns `false` when nothing matched.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(index) = self
            .order
            .iter()
            .position(|handle| self.colliders.get(*handle).is_some_and(|c| c.name() == name))
        else {
            log::debug!("No collider named '{}' to remove", name);
            return false;
        };

        let handle = self.order.remove(index);
        self.colliders.remove(handle);
        log::trace!("Removed collider '{}'", name);
        true
    }

    /// Alias of [`Self::remove`]
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        self.remove(name)
    }

    /// Remove a collider by handle
    pub fn remove_handle(&mut self, handle: ColliderHandle) -> Option<Collider> {
        let collider = self.colliders.remove(handle)?;
        self.order.retain(|h| *h != handle);
        Some(collider)
    }

    /// Remove every collider
    pub fn clear(&mut self) {
        log::debug!("Clearing collision registry ({} colliders)", self.order.len());
        self.colliders.clear();
        self.order.clear();
    }

    /// Number of registered colliders
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a collider
    pub fn get(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle)
    }

    /// All colliders in registration order
    pub fn iter(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> + '_ {
        self.order
            .iter()
            .filter_map(move |handle| self.colliders.get(*handle).map(|c| (*handle, c)))
    }

    /// Colliders whose kind is in `kinds`, in registration order
    pub fn by_type(
        &self,
        kinds: impl Into<ColliderKinds>,
    ) -> impl Iterator<Item = (ColliderHandle, &Collider)> + '_ {
        let kinds = kinds.into();
        self.iter().filter(move |(_, collider)| kinds.includes(collider.kind()))
    }

    /// Number of colliders whose kind is in `kinds`
    pub fn count_of(&self, kinds: impl Into<ColliderKinds>) -> usize {
        self.by_type(kinds).count()
    }

    /// Resolve a mover sphere against every collider, sequentially
    ///
    /// Velocity zeroing accumulates over the sweep: any hit that asks for an
    /// axis to be zeroed zeroes it in the result.
    pub fn sweep_mover_collision(&self, position: Vec3, radius: f32, velocity: Vec3) -> SweepResult {
        let mut current = position;
        let mut zero_x = false;
        let mut zero_z = false;
        let mut hits = Vec::new();

        for (handle, collider) in self.iter() {
            let Some(push) = collider.test(current, radius) else {
                continue;
            };

            current.x += push.push_x;
            current.z += push.push_z;
            zero_x |= push.zero_velocity_x;
            zero_z |= push.zero_velocity_z;

            if self.debug_enabled {
                log::debug!(
                    "Collision with {:?} '{}': push ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                    collider.kind(),
                    collider.name(),
                    push.push_x,
                    push.push_z,
                    current.x,
                    current.z,
                );
            }
            hits.push(ColliderHit { handle, push });
        }

        let mut resolved_velocity = velocity;
        if zero_x {
            resolved_velocity.x = 0.0;
        }
        if zero_z {
            resolved_velocity.z = 0.0;
        }

        SweepResult {
            position: current,
            velocity: resolved_velocity,
            collided: !hits.is_empty(),
            hits,
        }
    }

    /// Alias of [`Self::sweep_mover_collision`]
    pub fn check_mover_collision(&self, position: Vec3, radius: f32, velocity: Vec3) -> SweepResult {
        self.sweep_mover_collision(position, radius, velocity)
    }
}
