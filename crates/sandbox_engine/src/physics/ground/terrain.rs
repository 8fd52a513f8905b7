//! Terrain height field
//!
//! Heights are stored on a regular grid of vertices. Each cell is split into
//! two triangles along the diagonal from (i+1, j) to (i, j+1) and sampled
//! with barycentric interpolation, matching how the terrain mesh is drawn.

use crate::foundation::math::{Vec2, Vec3};
use super::{GroundProvider, GroundSample, SurfaceKind};

/// Errors raised while building a height field
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Fewer than 2x2 vertices
    #[error("height field needs at least 2x2 samples, got {columns}x{rows}")]
    TooFewSamples {
        /// Vertices along X
        columns: usize,
        /// Vertices along Z
        rows: usize,
    },

    /// Sample buffer does not match the grid
    #[error("expected {expected} height samples, got {actual}")]
    SampleCountMismatch {
        /// columns * rows
        expected: usize,
        /// Buffer length
        actual: usize,
    },

    /// Cell size is zero, negative or not finite
    #[error("invalid cell size: {0}")]
    InvalidCellSize(f32),
}

/// Regular grid of terrain heights
///
/// `Default` gives an empty field that answers `None` everywhere, which is
/// what movers see before the terrain has been generated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeightField {
    columns: usize,
    rows: usize,
    cell_size: f32,
    origin: Vec2,
    heights: Vec<f32>,
}

impl HeightField {
    /// Build a field from row-major heights (`heights[row * columns + column]`)
    ///
    /// `origin` is the world (X, Z) of the first sample; columns run along +X
    /// and rows along +Z.
    pub fn new(
        columns: usize,
        rows: usize,
        cell_size: f32,
        origin: Vec2,
        heights: Vec<f32>,
    ) -> Result<Self, TerrainError> {
        if columns < 2 || rows < 2 {
            return Err(TerrainError::TooFewSamples { columns, rows });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(TerrainError::InvalidCellSize(cell_size));
        }
        let expected = columns * rows;
        if heights.len() != expected {
            return Err(TerrainError::SampleCountMismatch {
                expected,
                actual: heights.len(),
            });
        }

        Ok(Self {
            columns,
            rows,
            cell_size,
            origin,
            heights,
        })
    }

    /// Build a field by evaluating `height` at every vertex's world (x, z)
    pub fn from_fn(
        columns: usize,
        rows: usize,
        cell_size: f32,
        origin: Vec2,
        mut height: impl FnMut(f32, f32) -> f32,
    ) -> Result<Self, TerrainError> {
        let mut heights = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                let x = origin.x + column as f32 * cell_size;
                let z = origin.y + row as f32 * cell_size;
                heights.push(height(x, z));
            }
        }
        Self::new(columns, rows, cell_size, origin, heights)
    }

    /// Whether the field holds no data
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// World (X, Z) extent as (min, max)
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        if self.is_empty() {
            return None;
        }
        let size = Vec2::new(
            (self.columns - 1) as f32 * self.cell_size,
            (self.rows - 1) as f32 * self.cell_size,
        );
        Some((self.origin, self.origin + size))
    }

    fn sample(&self, column: usize, row: usize) -> f32 {
        self.heights[row * self.columns + column]
    }

    /// Locate the cell and triangle under (x, z)
    ///
    /// Returns the cell's corner heights `[h00, h10, h01, h11]` and the
    /// fractional position inside it.
    fn locate(&self, x: f32, z: f32) -> Option<([f32; 4], f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let gx = (x - self.origin.x) / self.cell_size;
        let gz = (z - self.origin.y) / self.cell_size;
        let max_x = (self.columns - 1) as f32;
        let max_z = (self.rows - 1) as f32;
        if !(0.0..=max_x).contains(&gx) || !(0.0..=max_z).contains(&gz) {
            return None;
        }

        // The far edge belongs to the last cell.
        let column = (gx.floor() as usize).min(self.columns - 2);
        let row = (gz.floor() as usize).min(self.rows - 2);
        let fx = gx - column as f32;
        let fz = gz - row as f32;

        let corners = [
            self.sample(column, row),
            self.sample(column + 1, row),
            self.sample(column, row + 1),
            self.sample(column + 1, row + 1),
        ];
        Some((corners, fx, fz))
    }

    /// Interpolated terrain height at world (x, z)
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        let ([h00, h10, h01, h11], fx, fz) = self.locate(x, z)?;
        let height = if fx + fz <= 1.0 {
            h00 + (h10 - h00) * fx + (h01 - h00) * fz
        } else {
            h11 + (h01 - h11) * (1.0 - fx) + (h10 - h11) * (1.0 - fz)
        };
        Some(height)
    }

    /// Upward unit normal of the triangle under world (x, z)
    pub fn normal_at(&self, x: f32, z: f32) -> Option<Vec3> {
        let ([h00, h10, h01, h11], fx, fz) = self.locate(x, z)?;
        let (along_x, along_z) = if fx + fz <= 1.0 {
            (h10 - h00, h01 - h00)
        } else {
            (h11 - h01, h11 - h10)
        };
        let tangent_x = Vec3::new(self.cell_size, along_x, 0.0);
        let tangent_z = Vec3::new(0.0, along_z, self.cell_size);
        Some(tangent_z.cross(&tangent_x).normalize())
    }
}

impl GroundProvider for HeightField {
    fn ground_height_at(&self, x: f32, z: f32, _feet_y: f32) -> Option<GroundSample> {
        let height = self.height_at(x, z)?;
        let normal = self.normal_at(x, z)?;
        Some(GroundSample {
            height,
            slope: normal.xz().norm() / normal.y,
            surface: SurfaceKind::Terrain,
            normal,
        })
    }
}
