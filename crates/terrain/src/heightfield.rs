//! Ridge-line height field.
//!
//! The silhouette is authored by hand (a gaussian backbone across the ridge
//! times a row of gaussian peaks along it) and then roughened with noise:
//! angular spurs running down the flanks and a few octaves of surface detail.

use noise::NoiseFn;

use crate::config::{PeakBump, TerrainConfig};
use crate::simplex::SeededSimplex;

const BACKBONE_EXPONENT: f64 = 0.7;
const EDGE_FADE_EXPONENT: f64 = 4.5;

const SPUR_FLOOR: f64 = 0.55;
const SPUR_RANGE: f64 = 0.45;

const FBM_OCTAVES: u32 = 3;
const FBM_LACUNARITY: f64 = 2.0;
const FBM_GAIN: f64 = 0.42;
const FBM_FLOOR: f64 = 0.75;
const FBM_RANGE: f64 = 0.25;
/// Moves surface detail samples away from the spur sampling circle.
const FBM_OFFSET: f64 = 31.7;

/// Gaussian falloff across the ridge, 1 on the ridge line.
pub fn backbone(nz: f64, width: f64) -> f64 {
    let u = nz / width;
    (-u * u).exp()
}

/// Weighted sum of gaussian peaks along the ridge.
pub fn peak_profile(nx: f64, peaks: &[PeakBump]) -> f64 {
    peaks
        .iter()
        .map(|peak| {
            let u = (nx - peak.center) / peak.width;
            peak.weight * (-u * u).exp()
        })
        .sum()
}

/// Radial fade applied to the geometry: 1 at the center, exactly 0 at and
/// beyond `max_distance`, non-increasing in between.
pub fn edge_fade(distance: f64, max_distance: f64) -> f64 {
    if max_distance <= 0.0 {
        return 0.0;
    }
    let r = distance / max_distance;
    if r >= 1.0 {
        0.0
    } else {
        (1.0 - r.powf(EDGE_FADE_EXPONENT)).max(0.0)
    }
}

/// Height field over the terrain footprint, centered on the origin.
#[derive(Debug, Clone)]
pub struct HeightField {
    simplex: SeededSimplex,
    config: TerrainConfig,
}

impl HeightField {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            simplex: SeededSimplex::new(config.seed),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Distance from the center at which geometry is fully flattened.
    pub fn geometry_radius(&self) -> f64 {
        self.config.half_size() * self.config.geometry_fade_ratio
    }

    /// Height at world position `(x, z)`. Never negative.
    pub fn height(&self, x: f64, z: f64) -> f64 {
        let fade = edge_fade(x.hypot(z), self.geometry_radius());
        if fade == 0.0 {
            return 0.0;
        }

        let half = self.config.half_size();
        let nx = x / half;
        let nz = z / half;

        let base = backbone(nz, self.config.backbone_width).powf(BACKBONE_EXPONENT)
            * peak_profile(nx, &self.config.peaks);

        base * self.spur_factor(x, z, nz)
            * self.surface_detail(x, z)
            * fade
            * self.config.vertical_scale
    }

    /// Angular spur modulation in `[SPUR_FLOOR, 1]`.
    ///
    /// Sampled on a circle around the origin so the field has no seam where
    /// the polar angle wraps. Spurs are 1 on the ridge line and reach full
    /// strength at `spur_reach` from it.
    pub fn spur_factor(&self, x: f64, z: f64, nz: f64) -> f64 {
        let angle = z.atan2(x);
        let radius = self.config.spur_frequency;
        let n = self.simplex.get([angle.cos() * radius, angle.sin() * radius]);
        let raw = SPUR_FLOOR + SPUR_RANGE * (n * 0.5 + 0.5);

        let blend = (nz.abs() / self.config.spur_reach).min(1.0);
        1.0 + (raw - 1.0) * blend
    }

    /// Fractal surface detail rescaled into `[FBM_FLOOR, 1]`.
    pub fn surface_detail(&self, x: f64, z: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.config.fbm_frequency;
        let mut max_amplitude = 0.0;

        for _ in 0..FBM_OCTAVES {
            let noise_val = self
                .simplex
                .get([x * frequency + FBM_OFFSET, z * frequency - FBM_OFFSET]);
            total += noise_val * amplitude;
            max_amplitude += amplitude;
            amplitude *= FBM_GAIN;
            frequency *= FBM_LACUNARITY;
        }

        let normalized = (total / max_amplitude).clamp(-1.0, 1.0);
        FBM_FLOOR + FBM_RANGE * (normalized * 0.5 + 0.5)
    }
}
