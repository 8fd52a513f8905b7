//! External ground providers
//!
//! Each provider answers "how high is the ground here" for one kind of level
//! content that the collision registry does not model: the terrain height
//! field, jump ramps and viewing platforms. Movement integrators query every
//! provider independently and keep the highest candidate.
//!
//! A provider with no data (not built yet, or queried outside its footprint)
//! returns `None`, which callers treat as "no ground here".

mod platform;
mod ramp;
mod terrain;

pub use platform::{ViewingPlatform, ViewingPlatformConfig};
pub use ramp::{JumpRamp, JumpRampConfig};
pub use terrain::{HeightField, TerrainError};

use crate::foundation::math::{Vec2, Vec3};

/// Surface classification of a ground candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Box tops and anything without a more specific tag
    Generic,
    /// Ascending segment of a jump ramp
    RampFront,
    /// Flat top of a jump ramp
    Tabletop,
    /// Descending segment of a jump ramp
    RampBack,
    /// Viewing platform deck
    ViewingPlatform,
    /// Terrain height field
    Terrain,
}

/// A ground candidate under the mover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSample {
    /// World-space surface height
    pub height: f32,
    /// Rise over run along the surface's steepest direction (signed for ramps)
    pub slope: f32,
    /// Surface classification
    pub surface: SurfaceKind,
    /// World-space surface normal
    pub normal: Vec3,
}

impl GroundSample {
    /// Level ground of the given kind
    pub fn flat(height: f32, surface: SurfaceKind) -> Self {
        Self {
            height,
            slope: 0.0,
            surface,
            normal: Vec3::y(),
        }
    }
}

/// Source of ground heights outside the collision registry
pub trait GroundProvider {
    /// Ground under (x, z) for a mover whose feet are at `feet_y`
    fn ground_height_at(&self, x: f32, z: f32, feet_y: f32) -> Option<GroundSample>;

    /// Horizontal push when the mover clips the side of this structure
    fn side_collision_at(&self, _x: f32, _z: f32, _feet_y: f32, _radius: f32) -> Option<Vec2> {
        None
    }
}

/// Highest ground among all candidates; the first one wins ties
pub fn highest_ground<I>(candidates: I) -> Option<GroundSample>
where
    I: IntoIterator<Item = Option<GroundSample>>,
{
    candidates
        .into_iter()
        .flatten()
        .fold(None, |best: Option<GroundSample>, sample| match best {
            Some(current) if current.height >= sample.height => Some(current),
            _ => Some(sample),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_ground_picks_max() {
        let best = highest_ground([
            Some(GroundSample::flat(1.0, SurfaceKind::Terrain)),
            None,
            Some(GroundSample::flat(2.5, SurfaceKind::ViewingPlatform)),
            Some(GroundSample::flat(2.0, SurfaceKind::Generic)),
        ])
        .unwrap();

        assert_eq!(best.surface, SurfaceKind::ViewingPlatform);
    }

    #[test]
    fn test_highest_ground_first_wins_ties() {
        let best = highest_ground([
            Some(GroundSample::flat(1.0, SurfaceKind::Terrain)),
            Some(GroundSample::flat(1.0, SurfaceKind::Generic)),
        ])
        .unwrap();

        assert_eq!(best.surface, SurfaceKind::Terrain);
    }

    #[test]
    fn test_highest_ground_empty() {
        assert!(highest_ground([None, None]).is_none());
        assert!(highest_ground(std::iter::empty()).is_none());
    }
}
