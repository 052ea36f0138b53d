//! Procedural ridge-line terrain for the summit site hero.
//!
//! Builds a deterministic wireframe mountain range: a seeded simplex noise
//! field roughens a hand-authored ridge profile, and the resulting height
//! grid is turned into a line mesh with per-vertex warm-white colors.
//!
//! # Quick Start
//!
//! ```rust
//! use terrain::prelude::*;
//!
//! let mesh = generate_mesh(7, 64, 40.0);
//! assert_eq!(mesh.vertex_count(), 65 * 65);
//!
//! for (start, end) in mesh.segments().take(3) {
//!     println!("{start:?} -> {end:?}");
//! }
//! ```

pub mod config;
pub mod errors;
pub mod heightfield;
pub mod mesh;
pub mod simplex;

pub use config::{MAX_SEGMENTS, PeakBump, TerrainConfig};
pub use errors::TerrainError;
pub use heightfield::HeightField;
pub use mesh::{Mesh, MeshExport, generate_mesh, generate_mesh_with};
pub use simplex::SeededSimplex;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{PeakBump, TerrainConfig};
    pub use crate::heightfield::{HeightField, edge_fade};
    pub use crate::mesh::{Mesh, generate_mesh, generate_mesh_with};
    pub use crate::simplex::SeededSimplex;
}
