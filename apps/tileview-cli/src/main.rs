use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tileview_catalog::{Catalog, load_catalog};
use tileview_common::Direction;
use tileview_render::{
    DebugTextRenderer, JsonRenderer, Renderer, Showcase, ShowcaseConfig, ShowcaseFrame,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tileview-cli", about = "Validate, inspect and cycle tile prototype catalogs")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build a catalog and report what it contains
    Validate {
        /// Prototype document (YAML)
        file: PathBuf,
    },
    /// Show one prototype with its first neighbor on each side
    Show {
        /// Prototype document (YAML)
        file: PathBuf,
        /// Catalog position of the prototype
        #[arg(short, long, default_value = "0")]
        index: usize,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Cycle through the catalog on a fixed cadence
    Cycle {
        /// Prototype document (YAML)
        file: PathBuf,
        /// Number of frames to show (default: one full pass)
        #[arg(short, long, conflicts_with = "forever")]
        frames: Option<usize>,
        /// Keep cycling until interrupted
        #[arg(long)]
        forever: bool,
        /// Milliseconds between frames (default: 5000)
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Catalog position to start from
        #[arg(long, default_value = "0")]
        start: usize,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// List every candidate for one prototype in one direction
    Neighbors {
        /// Prototype document (YAML)
        file: PathBuf,
        /// Catalog position of the prototype
        #[arg(short, long, default_value = "0")]
        index: usize,
        /// Direction index: 0=+x 1=-x 2=+y 3=-y 4=+z 5=-z
        #[arg(short, long, allow_negative_numbers = true)]
        direction: i64,
    },
    /// List distinct meshes and the paths they resolve to
    Meshes {
        /// Prototype document (YAML)
        file: PathBuf,
        /// Directory mesh ids are resolved against (default: models)
        #[arg(long)]
        asset_root: Option<PathBuf>,
    },
}

/// Overrides for [`ShowcaseConfig`] shared by the display commands.
#[derive(Args)]
struct LayoutArgs {
    /// Distance from the centre tile to each neighbor (default: 3.0)
    #[arg(long)]
    spacing: Option<f32>,
    /// Directory mesh ids are resolved against (default: models)
    #[arg(long)]
    asset_root: Option<PathBuf>,
    /// Emit one JSON document per frame
    #[arg(long)]
    json: bool,
}

impl LayoutArgs {
    fn config(&self, interval_ms: Option<u64>) -> ShowcaseConfig {
        let mut config = ShowcaseConfig::default();
        if let Some(spacing) = self.spacing {
            config.neighbor_spacing = spacing;
        }
        if let Some(root) = &self.asset_root {
            config = config.with_asset_root(root);
        }
        if let Some(ms) = interval_ms {
            config.interval = Duration::from_millis(ms);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("tileview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", tileview_common::crate_info());
            println!("catalog: {}", tileview_catalog::crate_info());
            println!("render: {}", tileview_render::crate_info());
        }
        Commands::Validate { file } => {
            let catalog = open(&file)?;
            let mut candidates = 0;
            for (i, prototype) in catalog.iter().enumerate() {
                let table = prototype.neighbor_table();
                candidates += table.candidate_count();
                if table.is_empty() {
                    tracing::warn!(index = i, mesh = %prototype.mesh(), "prototype declares no neighbors");
                }
            }
            println!(
                "{}: OK ({} prototypes, {} neighbor candidates, {} distinct meshes)",
                file.display(),
                catalog.len(),
                candidates,
                catalog.meshes().len()
            );
        }
        Commands::Show {
            file,
            index,
            layout,
        } => {
            let catalog = open(&file)?;
            let config = layout.config(None);
            let frame = ShowcaseFrame::compose(&catalog, index, &config)?;
            print_frame(&frame, &config, layout.json)?;
        }
        Commands::Cycle {
            file,
            frames,
            forever,
            interval_ms,
            start,
            layout,
        } => {
            let catalog = open(&file)?;
            if catalog.is_empty() {
                anyhow::bail!("{} contains no prototypes", file.display());
            }
            let config = layout.config(interval_ms);
            let interval = config.interval;
            let total = if forever {
                None
            } else {
                Some(frames.unwrap_or(catalog.len()))
            };

            tracing::info!(?total, ?interval, start, "starting showcase");
            let mut showcase = Showcase::new(&catalog, config).starting_at(start);
            let mut shown = 0usize;
            while total.is_none_or(|t| shown < t) {
                if shown > 0 {
                    std::thread::sleep(interval);
                }
                let frame = showcase.next_frame()?;
                print_frame(&frame, showcase.config(), layout.json)?;
                shown += 1;
            }
        }
        Commands::Neighbors {
            file,
            index,
            direction,
        } => {
            let catalog = open(&file)?;
            let candidates = catalog.neighbors_at(index, direction)?;
            let side = Direction::from_index(direction)?;
            if candidates.is_empty() {
                println!("prototype {index} has no neighbors towards {side}");
            }
            for (rank, c) in candidates.iter().enumerate() {
                let marker = if rank == 0 { "*" } else { " " };
                println!(
                    "{marker} {rank}: {} rot=({:.1}, {:.1}, {:.1})",
                    c.mesh, c.rotation.x, c.rotation.y, c.rotation.z
                );
            }
        }
        Commands::Meshes { file, asset_root } => {
            let catalog = open(&file)?;
            let mut config = ShowcaseConfig::default();
            if let Some(root) = asset_root {
                config = config.with_asset_root(root);
            }
            for mesh in catalog.meshes() {
                println!("{mesh}\t{}", config.mesh_path(mesh).display());
            }
        }
    }

    Ok(())
}

fn open(path: &Path) -> anyhow::Result<Catalog> {
    load_catalog(path).with_context(|| format!("failed to load catalog from {}", path.display()))
}

fn print_frame(
    frame: &ShowcaseFrame,
    config: &ShowcaseConfig,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", JsonRenderer::default().render(frame, config)?);
    } else {
        print!("{}", DebugTextRenderer::new().render(frame, config));
    }
    Ok(())
}
