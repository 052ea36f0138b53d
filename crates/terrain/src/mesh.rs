//! Wireframe mesh assembly.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{MAX_SEGMENTS, TerrainConfig};
use crate::heightfield::HeightField;

const BRIGHTNESS_FLOOR: f64 = 0.04;
const BRIGHTNESS_RANGE: f64 = 0.55;
const COLOR_FADE_EXPONENT: i32 = 3;
/// Height at which a vertex is fully lit; lower terrain fades out.
const LIT_HEIGHT: f64 = 1.2;
/// Warm white: green and blue relative to red.
const TINT: [f64; 3] = [1.0, 0.96, 0.88];

/// A terrain wireframe: vertex positions, one color per vertex, and line
/// segments as index pairs into the vertex list.
///
/// Produced whole by [`generate_mesh`]; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    lines: Vec<[u32; 2]>,
}

impl Mesh {
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn lines(&self) -> &[[u32; 2]] {
        &self.lines
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Highest vertex, or 0 for a flat mesh.
    pub fn max_height(&self) -> f32 {
        self.positions.iter().map(|p| p[1]).fold(0.0, f32::max)
    }

    /// Endpoint pairs of every line segment, in line order.
    pub fn segments(&self) -> impl Iterator<Item = ([f32; 3], [f32; 3])> + '_ {
        self.lines
            .iter()
            .map(|[a, b]| (self.positions[*a as usize], self.positions[*b as usize]))
    }

    /// Flat `xyz` buffer with two entries per line, for non-indexed line
    /// rendering.
    pub fn line_positions(&self) -> Vec<f32> {
        self.flatten(&self.positions)
    }

    /// Flat `rgb` buffer matching [`Mesh::line_positions`].
    pub fn line_colors(&self) -> Vec<f32> {
        self.flatten(&self.colors)
    }

    fn flatten(&self, attribute: &[[f32; 3]]) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.lines.len() * 6);
        for [a, b] in &self.lines {
            out.extend_from_slice(&attribute[*a as usize]);
            out.extend_from_slice(&attribute[*b as usize]);
        }
        out
    }
}

/// Serializable snapshot of a mesh with its counts, for export.
#[derive(Debug, Serialize)]
pub struct MeshExport<'a> {
    pub vertex_count: usize,
    pub line_count: usize,
    pub max_height: f32,
    #[serde(flatten)]
    pub mesh: &'a Mesh,
}

impl<'a> From<&'a Mesh> for MeshExport<'a> {
    fn from(mesh: &'a Mesh) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            line_count: mesh.line_count(),
            max_height: mesh.max_height(),
            mesh,
        }
    }
}

/// Generates the terrain wireframe for `seed` over a `size` x `size`
/// footprint with `segments` subdivisions per side. Other tunables use
/// their defaults.
pub fn generate_mesh(seed: u32, segments: u32, size: f64) -> Mesh {
    let config = TerrainConfig::new(seed)
        .with_segments(segments)
        .with_size(size);
    generate_mesh_with(&config)
}

/// Generates the terrain wireframe for a full configuration.
pub fn generate_mesh_with(config: &TerrainConfig) -> Mesh {
    let field = HeightField::new(config);
    let segments = config.mesh_segments();
    let columns = segments as usize + 1;
    let half = config.half_size();
    let step = config.size / f64::from(segments);

    let mut positions = Vec::with_capacity(columns * columns);
    let mut heights = Vec::with_capacity(columns * columns);
    for iz in 0..columns {
        let z = -half + iz as f64 * step;
        for ix in 0..columns {
            let x = -half + ix as f64 * step;
            let h = field.height(x, z);
            positions.push([x as f32, h as f32, z as f32]);
            heights.push((x, z, h));
        }
    }

    let max_height = heights.iter().map(|(_, _, h)| *h).fold(0.0, f64::max);
    let color_radius = half * config.color_fade_ratio;
    let colors = heights
        .iter()
        .map(|&(x, z, h)| vertex_color(h, max_height, x.hypot(z), color_radius))
        .collect();

    let triangles = grid_triangles(segments);
    let lines = wireframe_edges(&triangles);

    tracing::debug!(
        seed = config.seed,
        segments,
        vertices = positions.len(),
        lines = lines.len(),
        max_height,
        "generated terrain mesh"
    );

    Mesh {
        positions,
        colors,
        lines,
    }
}

/// Color of a vertex: brighter with height, fading out toward the edge and
/// toward the unraised base.
pub fn vertex_color(height: f64, max_height: f64, distance: f64, fade_radius: f64) -> [f32; 3] {
    let normalized = if max_height > 0.0 {
        height / max_height
    } else {
        0.0
    };
    let brightness = BRIGHTNESS_FLOOR + normalized * BRIGHTNESS_RANGE;

    let edge = if fade_radius > 0.0 {
        (1.0 - (distance / fade_radius).powi(COLOR_FADE_EXPONENT)).max(0.0)
    } else {
        0.0
    };
    let lift = (height.max(0.0) / LIT_HEIGHT).min(1.0);

    let b = brightness * edge * lift;
    TINT.map(|channel| (b * channel) as f32)
}

/// Two triangles per grid cell, wound the same way for every cell.
///
/// `segments` must not exceed [`MAX_SEGMENTS`] so vertex indices fit in `u32`.
fn grid_triangles(segments: u32) -> Vec<[u32; 3]> {
    debug_assert!(segments <= MAX_SEGMENTS);
    let columns = segments + 1;
    let cells = segments as usize * segments as usize;
    let mut triangles = Vec::with_capacity(cells * 2);
    for iz in 0..segments {
        for ix in 0..segments {
            let a = iz * columns + ix;
            let b = (iz + 1) * columns + ix;
            let c = (iz + 1) * columns + ix + 1;
            let d = iz * columns + ix + 1;
            triangles.push([a, b, d]);
            triangles.push([b, c, d]);
        }
    }
    triangles
}

/// Converts triangles into their unique edges.
///
/// Edges shared by neighboring triangles appear once. Each edge is stored
/// low index first, in the order it is first seen.
pub fn wireframe_edges(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut seen = HashSet::with_capacity(triangles.len() * 2);
    let mut edges = Vec::with_capacity(triangles.len() * 2);
    for &[a, b, c] in triangles {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let edge = [u.min(v), u.max(v)];
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    edges
}
