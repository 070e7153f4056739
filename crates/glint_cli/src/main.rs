use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{render, save_ppm, RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Render the stock scene with a unidirectional path tracer and save it as PPM.
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
struct Args {
    /// JSON file with render settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Samples per pixel
    #[arg(long)]
    spp: Option<u32>,

    /// Safety cap on bounces per path
    #[arg(long, conflicts_with = "no_bounce_cap")]
    max_bounces: Option<u32>,

    /// Let Russian roulette alone decide when paths end
    #[arg(long)]
    no_bounce_cap: bool,

    /// Seed for the random stream
    #[arg(long)]
    seed: Option<u64>,

    /// Output image path
    #[arg(short, long, default_value = "result.ppm")]
    output: PathBuf,
}

impl Args {
    /// Resolve the final configuration: defaults, then the config file, then flags.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(spp) = self.spp {
            config.samples_per_pixel = spp;
        }
        if self.no_bounce_cap {
            config.max_bounces = None;
        } else if let Some(max_bounces) = self.max_bounces {
            config.max_bounces = Some(max_bounces);
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        config.validate().context("Invalid render settings")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.render_config()?;
    log::debug!("Render config: {:?}", config);

    let scene = Scene::demo().context("Failed to build scene")?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let image = render(&scene, &config, &mut rng).context("Render failed")?;
    save_ppm(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
