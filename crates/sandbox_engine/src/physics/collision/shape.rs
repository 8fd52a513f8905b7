//! Closed set of collider variants
//!
//! The registry stores [`Collider`] values and dispatches tests with a
//! `match`, so adding a shape means adding a variant here.

use crate::foundation::math::Vec3;
use crate::physics::collider_kinds::ColliderKind;
use super::primitives::{
    AxisBox, AxisBoxConfig, Cylinder, CylinderConfig, PushOut, RotatedBox, RotatedBoxConfig,
    Sphere, SphereConfig,
};

/// Description of a collider to build and register
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderDesc {
    /// Axis-aligned box
    AxisBox(AxisBoxConfig),
    /// Oriented box
    RotatedBox(RotatedBoxConfig),
    /// Vertical cylinder
    Cylinder(CylinderConfig),
    /// Sphere
    Sphere(SphereConfig),
}

impl ColliderDesc {
    /// Kind of collider this description builds
    pub fn kind(&self) -> ColliderKind {
        match self {
            Self::AxisBox(_) => ColliderKind::AxisBox,
            Self::RotatedBox(_) => ColliderKind::RotatedBox,
            Self::Cylinder(_) => ColliderKind::Cylinder,
            Self::Sphere(_) => ColliderKind::Sphere,
        }
    }

    /// Construct the collider, deriving its cached data
    pub fn build(self) -> Collider {
        match self {
            Self::AxisBox(config) => Collider::AxisBox(AxisBox::new(config)),
            Self::RotatedBox(config) => Collider::RotatedBox(RotatedBox::new(config)),
            Self::Cylinder(config) => Collider::Cylinder(Cylinder::new(config)),
            Self::Sphere(config) => Collider::Sphere(Sphere::new(config)),
        }
    }
}

impl From<AxisBoxConfig> for ColliderDesc {
    fn from(config: AxisBoxConfig) -> Self {
        Self::AxisBox(config)
    }
}

impl From<RotatedBoxConfig> for ColliderDesc {
    fn from(config: RotatedBoxConfig) -> Self {
        Self::RotatedBox(config)
    }
}

impl From<CylinderConfig> for ColliderDesc {
    fn from(config: CylinderConfig) -> Self {
        Self::Cylinder(config)
    }
}

impl From<SphereConfig> for ColliderDesc {
    fn from(config: SphereConfig) -> Self {
        Self::Sphere(config)
    }
}

/// A registered collider
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// Axis-aligned box
    AxisBox(AxisBox),
    /// Oriented box
    RotatedBox(RotatedBox),
    /// Vertical cylinder
    Cylinder(Cylinder),
    /// Sphere
    Sphere(Sphere),
}

impl Collider {
    /// Collider name
    pub fn name(&self) -> &str {
        match self {
            Self::AxisBox(shape) => shape.name(),
            Self::RotatedBox(shape) => shape.name(),
            Self::Cylinder(shape) => shape.name(),
            Self::Sphere(shape) => shape.name(),
        }
    }

    /// Variant tag
    pub fn kind(&self) -> ColliderKind {
        match self {
            Self::AxisBox(_) => ColliderKind::AxisBox,
            Self::RotatedBox(_) => ColliderKind::RotatedBox,
            Self::Cylinder(_) => ColliderKind::Cylinder,
            Self::Sphere(_) => ColliderKind::Sphere,
        }
    }

    /// Test a mover sphere against this collider
    pub fn test(&self, position: Vec3, sphere_radius: f32) -> Option<PushOut> {
        match self {
            Self::AxisBox(shape) => shape.test(position, sphere_radius),
            Self::RotatedBox(shape) => shape.test(position, sphere_radius),
            Self::Cylinder(shape) => shape.test(position, sphere_radius),
            Self::Sphere(shape) => shape.test(position, sphere_radius),
        }
    }

    /// Borrow as an axis box
    pub fn as_axis_box(&self) -> Option<&AxisBox> {
        match self {
            Self::AxisBox(shape) => Some(shape),
            _ => None,
        }
    }

    /// Borrow as an oriented box
    pub fn as_rotated_box(&self) -> Option<&RotatedBox> {
        match self {
            Self::RotatedBox(shape) => Some(shape),
            _ => None,
        }
    }

    /// Borrow as a cylinder
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            Self::Cylinder(shape) => Some(shape),
            _ => None,
        }
    }

    /// Borrow as a sphere
    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Self::Sphere(shape) => Some(shape),
            _ => None,
        }
    }
}

impl From<ColliderDesc> for Collider {
    fn from(desc: ColliderDesc) -> Self {
        desc.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desc_builds_matching_kind() {
        let descs = [
            ColliderDesc::AxisBox(AxisBoxConfig {
                name: "wall".into(),
                center_x: 0.0,
                center_z: 0.0,
                width: 1.0,
                depth: 1.0,
                height: 1.0,
                base_y: 0.0,
            }),
            ColliderDesc::Cylinder(CylinderConfig {
                name: "tree".into(),
                center_x: 0.0,
                center_z: 0.0,
                radius: 0.4,
                height: 6.0,
                base_y: 0.0,
            }),
            ColliderDesc::Sphere(SphereConfig {
                name: "ball".into(),
                center: Vec3::zeros(),
                radius: 1.0,
            }),
        ];

        for desc in descs {
            let kind = desc.kind();
            let collider = Collider::from(desc);
            assert_eq!(collider.kind(), kind);
        }
    }

    #[test]
    fn test_accessors_match_variant() {
        let collider = ColliderDesc::RotatedBox(RotatedBoxConfig {
            name: "ramp_slab".into(),
            center_x: 1.0,
            center_z: 2.0,
            base_y: 0.0,
            width: 2.0,
            height: 0.5,
            depth: 6.0,
            rotation: Vec3::new(0.2, 0.0, 0.0),
        })
        .build();

        assert_eq!(collider.name(), "ramp_slab");
        assert!(collider.as_rotated_box().is_some());
        assert!(collider.as_axis_box().is_none());
        assert!(collider.as_cylinder().is_none());
        assert!(collider.as_sphere().is_none());
    }
}
