//! Properties of the generated terrain that consumers rely on.

use rand::{Rng, SeedableRng, rngs::StdRng};
use terrain::prelude::*;

#[test]
fn test_mesh_is_deterministic() {
    let first = generate_mesh(1234, 48, 40.0);
    let second = generate_mesh(1234, 48, 40.0);

    assert_eq!(first.positions().len(), second.positions().len());
    for (a, b) in first.positions().iter().zip(second.positions()) {
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
    }
    for (a, b) in first.colors().iter().zip(second.colors()) {
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
    }
    assert_eq!(first.lines(), second.lines());
}

#[test]
fn test_different_seeds_give_different_terrain() {
    let a = generate_mesh(1, 32, 40.0);
    let b = generate_mesh(2, 32, 40.0);
    assert_ne!(a.positions(), b.positions());
}

#[test]
fn test_noise_is_bounded() {
    let simplex = SeededSimplex::new(2024);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..10_000 {
        let x = rng.gen_range(-500.0..500.0);
        let y = rng.gen_range(-500.0..500.0);
        let v = simplex.noise2d(x, y);
        assert!(v.is_finite());
        assert!((-1.05..=1.05).contains(&v), "noise({x}, {y}) = {v}");
    }
}

#[test]
fn test_edge_fade_is_monotonic() {
    let config = TerrainConfig::default();
    let field = HeightField::new(&config);
    let max_distance = field.geometry_radius();

    for bearing in [0.0_f64, 0.7, 2.3, 4.0] {
        let mut previous = f64::INFINITY;
        for step in 0..=300 {
            let distance = step as f64 * 0.1;
            let fade = edge_fade(distance, max_distance);
            assert!(fade <= previous, "fade rose at bearing {bearing}, distance {distance}");
            if distance >= max_distance {
                assert_eq!(fade, 0.0);
            }
            if distance >= max_distance + 0.05 {
                let (x, z) = (distance * bearing.cos(), distance * bearing.sin());
                assert_eq!(field.height(x, z), 0.0);
            }
            previous = fade;
        }
    }
}

#[test]
fn test_heights_and_colors_stay_in_range() {
    let mesh = generate_mesh(7, 64, 40.0);
    let max = mesh.max_height();
    assert!(max > 1.0, "ridge should rise, max height {max}");
    assert!(max <= 8.5);

    for (position, color) in mesh.positions().iter().zip(mesh.colors()) {
        assert!(position[1] >= 0.0);
        let [r, g, b] = *color;
        assert!((0.0..=0.6).contains(&r));
        assert!(g <= r && b <= g);
    }
}

#[test]
fn test_mesh_export_serializes() {
    let mesh = generate_mesh(7, 2, 10.0);
    let json = serde_json::to_value(terrain::MeshExport::from(&mesh)).unwrap();
    assert_eq!(json["vertex_count"], 9);
    assert_eq!(json["line_count"], 16);
    assert_eq!(json["positions"].as_array().unwrap().len(), 9);
    assert_eq!(json["lines"].as_array().unwrap().len(), 16);
}
