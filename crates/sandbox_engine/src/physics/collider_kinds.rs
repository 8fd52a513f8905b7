//! Collider kind tags and kind sets for filtering registry queries

use bitflags::bitflags;

/// Tag identifying a collider variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    /// Axis-aligned box
    AxisBox,
    /// Oriented box
    RotatedBox,
    /// Vertical cylinder
    Cylinder,
    /// Sphere
    Sphere,
}

bitflags! {
    /// Set of collider kinds
    ///
    /// # Example
    /// ```
    /// use sandbox_engine::physics::collider_kinds::{ColliderKind, ColliderKinds};
    ///
    /// let boxes = ColliderKinds::AXIS_BOX | ColliderKinds::ROTATED_BOX;
    /// assert_eq!(boxes, ColliderKinds::STANDABLE);
    /// assert!(boxes.includes(ColliderKind::RotatedBox));
    /// assert!(!boxes.includes(ColliderKind::Cylinder));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColliderKinds: u8 {
        /// Axis-aligned boxes
        const AXIS_BOX = 1 << 0;
        /// Oriented boxes
        const ROTATED_BOX = 1 << 1;
        /// Vertical cylinders
        const CYLINDER = 1 << 2;
        /// Spheres
        const SPHERE = 1 << 3;
        /// Kinds the floor resolver can stand a mover on
        const STANDABLE = Self::AXIS_BOX.bits() | Self::ROTATED_BOX.bits();
        /// Every kind
        const ALL = Self::AXIS_BOX.bits()
            | Self::ROTATED_BOX.bits()
            | Self::CYLINDER.bits()
            | Self::SPHERE.bits();
    }
}

impl ColliderKinds {
    /// Whether the set contains a kind
    pub fn includes(self, kind: ColliderKind) -> bool {
        self.contains(Self::from(kind))
    }
}

impl From<ColliderKind> for ColliderKinds {
    fn from(kind: ColliderKind) -> Self {
        match kind {
            ColliderKind::AxisBox => Self::AXIS_BOX,
            ColliderKind::RotatedBox => Self::ROTATED_BOX,
            ColliderKind::Cylinder => Self::CYLINDER,
            ColliderKind::Sphere => Self::SPHERE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_includes_every_kind() {
        for kind in [
            ColliderKind::AxisBox,
            ColliderKind::RotatedBox,
            ColliderKind::Cylinder,
            ColliderKind::Sphere,
        ] {
            assert!(ColliderKinds::ALL.includes(kind));
        }
    }

    #[test]
    fn test_standable_excludes_round_shapes() {
        assert!(ColliderKinds::STANDABLE.includes(ColliderKind::AxisBox));
        assert!(!ColliderKinds::STANDABLE.includes(ColliderKind::Sphere));
        assert!(!ColliderKinds::STANDABLE.includes(ColliderKind::Cylinder));
    }
}
