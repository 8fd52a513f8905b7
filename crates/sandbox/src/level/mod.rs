//! Level construction
//!
//! A [`Level`] owns the collision registry, the terrain and the other ground
//! providers. Building it runs every location builder in a fixed order, so
//! collider registration order (and with it sweep resolution order) is the
//! same on every build.

pub mod locations;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sandbox_engine::config::ConfigError;
use sandbox_engine::foundation::math::{Vec2, Vec3};
use sandbox_engine::physics::collider_kinds::ColliderKinds;
use sandbox_engine::physics::collision_system::CollisionRegistry;
use sandbox_engine::physics::ground::{GroundProvider, HeightField, JumpRamp, TerrainError, ViewingPlatform};
use sandbox_engine::physics::movement::GroundContext;

use crate::config::GameConfig;
use crate::terrain::generate_terrain;

/// Errors raised while loading or building a level
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// Terrain could not be built
    #[error("Terrain error: {0}")]
    Terrain(#[from] TerrainError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Where the on-foot player starts, as (x, z)
pub const PLAYER_SPAWN: (f32, f32) = (0.0, 10.0);

/// Where the vehicle starts, as (x, z)
pub const VEHICLE_SPAWN: (f32, f32) = (20.0, -6.0);

/// Static world: colliders plus ground providers
pub struct Level {
    config: GameConfig,

    /// Static colliders
    pub registry: CollisionRegistry,
    /// Terrain height field
    pub terrain: HeightField,
    /// Jump ramp
    pub ramp: JumpRamp,
    /// Viewing platform deck
    pub overlook: ViewingPlatform,
}

impl Level {
    /// Generate terrain and run every location builder
    pub fn build(config: &GameConfig) -> Result<Self, LevelError> {
        let terrain = generate_terrain(&config.terrain)?;
        let mut registry = CollisionRegistry::new();
        registry.debug_enabled = config.simulation.debug_collisions;
        let (ramp, overlook) = Self::populate(&mut registry, config);

        let level = Self {
            config: config.clone(),
            registry,
            terrain,
            ramp,
            overlook,
        };
        level.log_summary();
        Ok(level)
    }

    /// Clear every collider and rebuild the level from its config
    pub fn reset(&mut self) -> Result<(), LevelError> {
        log::info!("Resetting level");
        self.registry.clear();
        self.terrain = generate_terrain(&self.config.terrain)?;
        let (ramp, overlook) = Self::populate(&mut self.registry, &self.config);
        self.ramp = ramp;
        self.overlook = overlook;
        self.log_summary();
        Ok(())
    }

    fn populate(registry: &mut CollisionRegistry, config: &GameConfig) -> (JumpRamp, ViewingPlatform) {
        let layout = &config.level;
        let mut rng = StdRng::seed_from_u64(layout.grove_seed);

        locations::perimeter_walls(registry, layout.arena_half_extent);
        locations::watchtower(registry, Vec2::new(-20.0, -20.0));
        let overlook = locations::overlook(registry, Vec2::new(20.0, -20.0), 30.0);
        locations::funnel_walls(registry, Vec2::new(0.0, -30.0));
        let ramp = locations::jump_ramp(registry, Vec2::new(20.0, 15.0));
        locations::tree_grove(registry, &mut rng, Vec2::new(-20.0, 15.0), 10.0, layout.tree_count);

        (ramp, overlook)
    }

    fn log_summary(&self) {
        log::info!(
            "Level built: {} colliders ({} boxes, {} rotated boxes, {} cylinders)",
            self.registry.len(),
            self.registry.count_of(ColliderKinds::AXIS_BOX),
            self.registry.count_of(ColliderKinds::ROTATED_BOX),
            self.registry.count_of(ColliderKinds::CYLINDER),
        );
    }

    /// Configuration the level was built from
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every ground provider, terrain first
    pub fn providers(&self) -> [&dyn GroundProvider; 3] {
        [&self.terrain, &self.ramp, &self.overlook]
    }

    /// Bundle the registry with a provider list for the movement integrators
    pub fn ground_context<'a>(&'a self, providers: &'a [&'a dyn GroundProvider]) -> GroundContext<'a> {
        GroundContext::new(&self.registry, providers)
    }

    /// Terrain height at (x, z), or zero off the grid
    pub fn terrain_height(&self, x: f32, z: f32) -> f32 {
        self.terrain.height_at(x, z).unwrap_or(0.0)
    }

    /// Player eye position at spawn
    pub fn player_spawn(&self) -> Vec3 {
        let (x, z) = PLAYER_SPAWN;
        Vec3::new(x, self.terrain_height(x, z) + self.config.player.eye_height, z)
    }

    /// Vehicle chassis position at spawn
    pub fn vehicle_spawn(&self) -> Vec3 {
        let (x, z) = VEHICLE_SPAWN;
        Vec3::new(x, self.terrain_height(x, z), z)
    }
}
