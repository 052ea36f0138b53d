//! Tunables for terrain generation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TerrainError;

/// Largest accepted `segments`. Keeps the vertex count well inside `u32`
/// indices and the triangle count inside `usize` on 32-bit targets.
pub const MAX_SEGMENTS: u32 = 4096;

/// Environment variables that override single tunables.
pub const SEED_VAR: &str = "TERRAIN_SEED";
pub const SEGMENTS_VAR: &str = "TERRAIN_SEGMENTS";
pub const SIZE_VAR: &str = "TERRAIN_SIZE";

/// One gaussian bump of the ridge silhouette, in normalized `x` (-1..1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakBump {
    /// Center offset along the ridge.
    pub center: f64,
    /// Gaussian width; smaller is sharper.
    pub width: f64,
    /// Relative height of the bump.
    pub weight: f64,
}

impl PeakBump {
    pub const fn new(center: f64, width: f64, weight: f64) -> Self {
        Self {
            center,
            width,
            weight,
        }
    }
}

/// The hand-authored ridge: a tall central summit flanked by lower peaks,
/// spaced so the saddles between them stay visible.
pub const DEFAULT_PEAKS: [PeakBump; 7] = [
    PeakBump::new(-0.78, 0.12, 0.45),
    PeakBump::new(-0.52, 0.15, 0.72),
    PeakBump::new(-0.26, 0.11, 0.88),
    PeakBump::new(0.02, 0.14, 1.00),
    PeakBump::new(0.28, 0.10, 0.82),
    PeakBump::new(0.50, 0.16, 0.64),
    PeakBump::new(0.76, 0.13, 0.40),
];

/// Configuration for a terrain mesh.
///
/// Two inputs with equal fields always produce bit-identical meshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise seed.
    pub seed: u32,
    /// Grid subdivisions per side; the grid has `(segments + 1)^2` vertices.
    /// At most [`MAX_SEGMENTS`].
    pub segments: u32,
    /// Side length of the square footprint in world units.
    pub size: f64,
    /// Multiplier applied to the final height.
    pub vertical_scale: f64,
    /// Geometry fade radius as a fraction of half the footprint.
    pub geometry_fade_ratio: f64,
    /// Color fade radius as a fraction of half the footprint.
    pub color_fade_ratio: f64,
    /// Gaussian width of the backbone across the ridge, normalized.
    pub backbone_width: f64,
    /// Normalized distance from the ridge line at which spurs reach full strength.
    pub spur_reach: f64,
    /// Radius of the circle the spur noise is sampled on.
    pub spur_frequency: f64,
    /// Base frequency of the surface detail noise, per world unit.
    pub fbm_frequency: f64,
    /// Peak bumps along the ridge.
    pub peaks: Vec<PeakBump>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            segments: 96,
            size: 40.0,
            vertical_scale: 8.0,
            geometry_fade_ratio: 0.95,
            color_fade_ratio: 0.9,
            backbone_width: 0.32,
            spur_reach: 0.5,
            spur_frequency: 2.5,
            fbm_frequency: 0.18,
            peaks: DEFAULT_PEAKS.to_vec(),
        }
    }
}

impl TerrainConfig {
    /// Creates a default configuration with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Sets the noise seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the grid resolution.
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Sets the footprint side length.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the vertical scale.
    pub fn with_vertical_scale(mut self, scale: f64) -> Self {
        self.vertical_scale = scale;
        self
    }

    /// Half the footprint side length.
    pub fn half_size(&self) -> f64 {
        self.size / 2.0
    }

    /// Checks that the tunables describe a usable terrain.
    ///
    /// Mesh generation does not call this; it is for configs read from outside.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.segments == 0 {
            return Err(TerrainError::InvalidConfig(
                "segments must be at least 1".to_string(),
            ));
        }
        if self.segments > MAX_SEGMENTS {
            return Err(TerrainError::InvalidConfig(format!(
                "segments must be at most {MAX_SEGMENTS}, got {}",
                self.segments
            )));
        }
        let positive = [
            ("size", self.size),
            ("geometry_fade_ratio", self.geometry_fade_ratio),
            ("color_fade_ratio", self.color_fade_ratio),
            ("backbone_width", self.backbone_width),
            ("spur_reach", self.spur_reach),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TerrainError::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if let Some(peak) = self.peaks.iter().find(|p| !p.width.is_finite() || p.width <= 0.0) {
            return Err(TerrainError::InvalidConfig(format!(
                "peak at {} has non-positive width",
                peak.center
            )));
        }
        Ok(())
    }

    /// Segment count mesh generation actually uses, clamped to
    /// `1..=MAX_SEGMENTS`.
    pub fn mesh_segments(&self) -> u32 {
        self.segments.clamp(1, MAX_SEGMENTS)
    }

    /// Replaces seed, segments and size with values from `lookup`, keyed by
    /// [`SEED_VAR`], [`SEGMENTS_VAR`] and [`SIZE_VAR`]. Unset variables keep
    /// the current value; unparsable ones are logged and ignored.
    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            seed: override_or(&lookup, SEED_VAR, self.seed),
            segments: override_or(&lookup, SEGMENTS_VAR, self.segments),
            size: override_or(&lookup, SIZE_VAR, self.size),
            ..self
        }
    }

    /// Parses and validates a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TerrainError> {
        let config: TerrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, TerrainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn override_or<T, F>(lookup: &F, name: &str, current: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparsable {}={}", name, raw);
            current
        }),
        None => current,
    }
}
