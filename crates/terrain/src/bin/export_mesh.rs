//! Writes the hero terrain mesh as JSON.
//!
//! Run with:
//! ```
//! TERRAIN_SEED=7 cargo run -p terrain --bin export-mesh -- mesh.json
//! ```
//!
//! Without a path argument the JSON goes to stdout. `TERRAIN_CONFIG` may
//! point at a JSON config file; the individual variables override it.

use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::Context;
use terrain::{MeshExport, TerrainConfig, generate_mesh_with};
use tracing_subscriber::EnvFilter;

fn load_config() -> anyhow::Result<TerrainConfig> {
    let base = match env::var("TERRAIN_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading terrain config {path}"))?;
            TerrainConfig::from_json(&json)?
        }
        Err(_) => TerrainConfig::default(),
    };

    let config = base.with_overrides(|name| env::var(name).ok());
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config()?;
    tracing::info!(
        "Generating terrain: seed {}, {} segments, size {}",
        config.seed,
        config.segments,
        config.size
    );

    let mesh = generate_mesh_with(&config);
    let export = MeshExport::from(&mesh);

    let out: Box<dyn Write> = match env::args().nth(1) {
        Some(path) => Box::new(File::create(&path).with_context(|| format!("creating {path}"))?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);
    serde_json::to_writer(&mut out, &export)?;
    out.flush()?;

    tracing::info!("Mesh written!");
    tracing::info!("  Vertices: {}", export.vertex_count);
    tracing::info!("  Lines: {}", export.line_count);
    tracing::info!("  Max height: {:.3}", export.max_height);

    Ok(())
}
