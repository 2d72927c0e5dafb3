use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tessera_geom::coords::ColorRgba;
use tessera_geom::logging::{init_logging, LoggingConfig};
use tessera_geom::{PointQuad, VertexQuad};

mod args;
mod report;

use args::Command;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let command = args::parse(env::args().skip(1))?;
    log::debug!("command: {command:?}");

    let text = match command {
        Command::Rect { x, y, width, height, z: None } => {
            report::render(&PointQuad::from_rect(x, y, width, height))?
        }
        Command::Rect { x, y, width, height, z: Some(z) } => {
            report::render(&VertexQuad::from_rect(x, y, z, width, height, ColorRgba::white()))?
        }
        Command::Json { path } => report::render(&load_point_quad(&path)?)?,
    };

    println!("{text}");
    Ok(())
}

fn load_point_quad(path: &Path) -> Result<PointQuad> {
    log::info!("loading quad from {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a serialized point quad", path.display()))
}
