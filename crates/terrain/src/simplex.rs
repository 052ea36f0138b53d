//! Seeded 2D simplex noise.
//!
//! The permutation table is shuffled with a Park–Miller style linear
//! congruential generator, so a given seed always yields the same field
//! regardless of platform.

use noise::NoiseFn;

/// Skew factor for 2D: `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor for 2D: `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_12;
/// Normalizes the summed corner contributions to roughly [-1, 1].
const SCALE: f64 = 70.0;

const LCG_MULTIPLIER: u64 = 16_807;
const LCG_MODULUS: u64 = 2_147_483_647;

const GRADIENTS: [[f64; 2]; 8] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// 2D simplex noise over a seeded permutation table.
///
/// The table is built once in [`SeededSimplex::new`] and never mutated, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct SeededSimplex {
    seed: u32,
    perm: [u8; 512],
}

impl SeededSimplex {
    /// Builds the permutation table for `seed`.
    pub fn new(seed: u32) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);

        let mut state = u64::from(seed);
        for i in (1..table.len()).rev() {
            state = state * LCG_MULTIPLIER % LCG_MODULUS;
            let j = (state % (i as u64 + 1)) as usize;
            table.swap(i, j);
        }

        // Doubled so corner lookups never need to wrap.
        let perm = std::array::from_fn(|i| table[i & 255]);

        Self { seed, perm }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Samples the noise field at `(x, y)`. Output is roughly in [-1, 1].
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower or upper triangle of the skewed cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let gi0 = self.gradient_index(ii, jj);
        let gi1 = self.gradient_index(ii + i1, jj + j1);
        let gi2 = self.gradient_index(ii + 1, jj + 1);

        let n0 = corner(gi0, x0, y0);
        let n1 = corner(gi1, x1, y1);
        let n2 = corner(gi2, x2, y2);

        SCALE * (n0 + n1 + n2)
    }

    fn gradient_index(&self, i: usize, j: usize) -> usize {
        usize::from(self.perm[i + usize::from(self.perm[j])]) % GRADIENTS.len()
    }
}

impl NoiseFn<f64, 2> for SeededSimplex {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.noise2d(point[0], point[1])
    }
}

fn corner(gradient: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let [gx, gy] = GRADIENTS[gradient];
    let t2 = t * t;
    t2 * t2 * (gx * x + gy * y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_is_a_shuffle() {
        let simplex = SeededSimplex::new(42);
        let mut seen = [false; 256];
        for &p in &simplex.perm[..256] {
            seen[usize::from(p)] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(simplex.perm[..256], simplex.perm[256..]);
    }

    #[test]
    fn test_zero_seed_keeps_identity() {
        let simplex = SeededSimplex::new(0);
        for (i, &p) in simplex.perm[..256].iter().enumerate() {
            assert_eq!(usize::from(p), i);
        }
    }

    #[test]
    fn test_seeds_differ() {
        let a = SeededSimplex::new(1);
        let b = SeededSimplex::new(2);
        assert_ne!(a.perm, b.perm);
    }

    #[test]
    fn test_noise_consistency() {
        let simplex = SeededSimplex::new(7);
        let v1 = simplex.noise2d(3.7, -12.25);
        let v2 = SeededSimplex::new(7).noise2d(3.7, -12.25);
        assert_eq!(v1.to_bits(), v2.to_bits());
    }

    #[test]
    fn test_noise_fn_matches_inherent() {
        let simplex = SeededSimplex::new(7);
        assert_eq!(simplex.get([0.3, 0.9]), simplex.noise2d(0.3, 0.9));
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        // Every corner either sits on the sample point or is out of reach.
        let simplex = SeededSimplex::new(99);
        assert_eq!(simplex.noise2d(0.0, 0.0), 0.0);
    }
}
