//! Command-line logo exporter.
//!
//! Run with: cargo run --features clap --bin logo-forge -- --name "Ace" --layout icon-left

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use logo_forge::{Exporter, LayoutMode, LivePreview, LogoConfig, Paint, Shape, suggest};

#[derive(Parser)]
#[command(name = "logo-forge", about = "Compose a logo and export its variants as a ZIP archive")]
struct Cli {
    /// A JSON config file. Flags override its values.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    #[clap(long, short = 'n')]
    name: Option<String>,

    #[clap(long, short = 'l')]
    layout: Option<LayoutMode>,

    /// Icon id, e.g. `Star`. Unknown ids fall back to the default icon.
    #[clap(long, short = 'i')]
    icon: Option<String>,

    #[clap(long, short = 'f')]
    font: Option<String>,

    /// Background color, `#rrggbb` or `transparent`.
    #[clap(long)]
    bg: Option<Paint>,

    #[clap(long)]
    text_color: Option<Paint>,

    #[clap(long)]
    icon_color: Option<Paint>,

    #[clap(long)]
    icon_size: Option<f32>,

    #[clap(long)]
    font_size: Option<f32>,

    #[clap(long, short = 's', default_value = "square")]
    shape: Shape,

    /// Pick a random palette, font and icon before applying other flags.
    #[clap(long)]
    suggest: bool,

    /// Seed for `--suggest`.
    #[clap(long)]
    seed: Option<u64>,

    /// Directory the archive is written to.
    #[clap(long, short = 'o', default_value = ".")]
    out: PathBuf,

    /// Print the resolved config as JSON and exit.
    #[clap(long)]
    print_config: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<LogoConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => LogoConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => LogoConfig::default(),
        };

        if self.suggest {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            config = suggest(&config, &mut rng);
        }

        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(icon) = &self.icon {
            config.icon = icon.clone();
        }
        if let Some(font) = &self.font {
            config.font_family = font.clone();
        }
        if let Some(bg) = self.bg {
            config.bg_color = bg;
        }
        if let Some(color) = self.text_color {
            config.text_color = color;
        }
        if let Some(color) = self.icon_color {
            config.icon_color = color;
        }
        if let Some(size) = self.icon_size {
            config.icon_size = size;
        }
        if let Some(size) = self.font_size {
            config.font_size = size;
        }

        Ok(config.clamped())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let exporter = Exporter::new();
    let mut preview = LivePreview::new();
    preview.mount(&config, cli.shape, exporter.registry());

    let archive = exporter.export(&config, &preview, cli.shape).await?;
    let path = archive.write_to_dir(&cli.out)?;

    info!(files = archive.entries.len(), "exported {}", path.display());
    Ok(())
}
