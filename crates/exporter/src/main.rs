//! Export a scene description to Stardis input files.
//!
//! Usage: `stardis-export --scene <scene.json> [--out DIR] [--config FILE]`

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use stardis_export_lib::{export_scene, ExportSettings, StlExporter};

#[derive(Parser, Debug)]
#[command(name = "stardis-export")]
#[command(about = "Export annotated scene objects to Stardis input (meshes + model.txt)")]
struct Args {
    /// Scene description (JSON)
    #[arg(long)]
    scene: PathBuf,

    /// Destination directory (overrides the settings file)
    #[arg(long = "out")]
    out_dir: Option<PathBuf>,

    /// Export settings (JSON); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stardis_export=info,stardis_export_lib=info".into()),
        )
        .init();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => match ExportSettings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("{e}");
                process::exit(1);
            }
        },
        None => ExportSettings::default(),
    };

    let Some(scene) = load_scene(&args.scene) else {
        process::exit(1);
    };

    let destination = args.out_dir.unwrap_or(settings.destination);
    match export_scene(&scene, &destination, &mut StlExporter) {
        Ok(report) => {
            tracing::info!("Descriptor written to {}", report.descriptor.display());
            if !report.skipped.is_empty() {
                tracing::warn!("{} item(s) skipped, see warnings above", report.skipped.len());
                if settings.strict {
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            tracing::error!("Export failed: {e}");
            process::exit(1);
        }
    }
}

fn load_scene(path: &Path) -> Option<shared::StardisScene> {
    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str::<shared::StardisScene>(&json) {
            Ok(scene) => {
                tracing::info!("Loaded scene from {} ({} objects)", path.display(), scene.objects.len());
                Some(scene)
            }
            Err(e) => {
                tracing::error!("Failed to parse scene JSON from {}: {e}", path.display());
                None
            }
        },
        Err(e) => {
            tracing::error!("Failed to read scene file {}: {e}", path.display());
            None
        }
    }
}
