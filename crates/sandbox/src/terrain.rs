//! Procedural terrain
//!
//! Rolling hills from a handful of directional sine octaves with seeded
//! directions and phases. The area around the origin stays flat so level
//! content can sit at height zero.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sandbox_engine::foundation::math::Vec2;
use sandbox_engine::physics::ground::{HeightField, TerrainError};

use crate::config::TerrainConfig;

#[derive(Debug, Clone, Copy)]
struct Octave {
    direction: Vec2,
    frequency: f32,
    amplitude: f32,
    phase: f32,
}

impl Octave {
    fn sample(&self, x: f32, z: f32) -> f32 {
        let along = self.direction.x * x + self.direction.y * z;
        self.amplitude * (along * self.frequency + self.phase).sin()
    }
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Generate the terrain height field, centered on the origin
pub fn generate_terrain(config: &TerrainConfig) -> Result<HeightField, TerrainError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let tau = std::f32::consts::TAU;

    let mut octaves = Vec::with_capacity(config.octaves as usize);
    let mut frequency = config.base_frequency;
    let mut amplitude = 1.0;
    for _ in 0..config.octaves {
        let angle: f32 = rng.gen_range(0.0..tau);
        octaves.push(Octave {
            direction: Vec2::new(angle.cos(), angle.sin()),
            frequency,
            amplitude,
            phase: rng.gen_range(0.0..tau),
        });
        frequency *= 2.0;
        amplitude *= 0.5;
    }
    let total_amplitude: f32 = octaves.iter().map(|o| o.amplitude).sum();

    let origin = Vec2::new(
        -(config.columns.saturating_sub(1) as f32) * config.cell_size / 2.0,
        -(config.rows.saturating_sub(1) as f32) * config.cell_size / 2.0,
    );

    let field = HeightField::from_fn(config.columns, config.rows, config.cell_size, origin, |x, z| {
        if total_amplitude <= 0.0 {
            return 0.0;
        }
        let raw: f32 = octaves.iter().map(|o| o.sample(x, z)).sum();
        // Shift into [0, 1] so hills never dip below the flat area
        let normalized = (raw / total_amplitude + 1.0) * 0.5;

        let distance = (x * x + z * z).sqrt();
        let blend = if config.blend_width > 0.0 {
            smoothstep((distance - config.flat_radius) / config.blend_width)
        } else if distance > config.flat_radius {
            1.0
        } else {
            0.0
        };

        normalized * config.amplitude * blend
    })?;

    log::info!(
        "Generated {}x{} terrain ({} octaves, seed {})",
        config.columns,
        config.rows,
        config.octaves,
        config.seed
    );
    Ok(field)
}
