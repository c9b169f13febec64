//! Helix viewer.
//!
//! Usage: `helix-viewer [preset.json] [--seed N]`
//!
//! Log filtering follows `RUST_LOG` (default `info`).

use std::env;
use std::path::PathBuf;

use helix_field::{HelixConfig, Viewer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut preset: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse().map_err(|_| format!("invalid seed: {}", value))?);
            }
            "-h" | "--help" => {
                println!("Usage: helix-viewer [preset.json] [--seed N]");
                return Ok(());
            }
            _ => preset = Some(PathBuf::from(arg)),
        }
    }

    let config = match &preset {
        Some(path) => {
            info!(path = %path.display(), "loading preset");
            HelixConfig::load(path)?
        }
        None => HelixConfig::default(),
    };

    let mut viewer = Viewer::new().with_config(config).with_title("Helix");
    if let Some(seed) = seed {
        viewer = viewer.with_seed(seed);
    }
    viewer.run()?;
    Ok(())
}
