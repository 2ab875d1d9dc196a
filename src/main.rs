use std::path::PathBuf;

use anyhow::Result;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

use voxview::{load_sources, BlockRegistry, ViewerConfig};

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("voxview.toml"));

    let config = match ViewerConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("no usable config at {}: {e}", config_path.display());
            ViewerConfig::default()
        }
    };

    let mut registry = BlockRegistry::new();
    let summary = load_sources(&mut registry, &config.sources())?;
    info!(
        "{} block entries loaded, {} rejected",
        summary.loaded,
        summary.failures.len()
    );

    for block in registry.iter() {
        let kind = if block.is_generated() {
            "generated"
        } else {
            "tiled"
        };
        println!(
            "{:>3}  {:<24} {:<24} {}",
            block.id, block.name, block.display_name, kind
        );
    }

    Ok(())
}
