use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lucid_core::{load_scene, presets, Scene};
use lucid_renderer::{render, render_parallel, save_image, RenderConfig};

/// Render a sphere scene with recursive Whitted ray tracing
#[derive(Parser, Debug)]
#[command(name = "lucid", version, about)]
struct Args {
    /// JSON scene description (defaults to the built-in classic scene)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output file; .ppm is written as binary P6, other extensions via the image crate
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    #[arg(long, default_value_t = 1024)]
    width: u32,

    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov_degrees: f32,

    /// Deepest reflection/refraction level that is still shaded
    #[arg(long, default_value_t = 10)]
    max_depth: u32,

    /// Edge length of parallel render buckets
    #[arg(long, default_value_t = 64)]
    bucket_size: u32,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long)]
    sequential: bool,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig> {
        anyhow::ensure!(self.width > 0 && self.height > 0, "image size must be non-zero");
        anyhow::ensure!(
            self.width
                .checked_mul(self.height)
                .and_then(|pixels| pixels.checked_mul(3))
                .is_some(),
            "image size {}x{} is too large",
            self.width,
            self.height
        );
        anyhow::ensure!(
            self.fov_degrees > 0.0 && self.fov_degrees < 180.0,
            "fov must be between 0 and 180 degrees, got {}",
            self.fov_degrees
        );

        Ok(RenderConfig {
            width: self.width,
            height: self.height,
            fov: self.fov_degrees.to_radians(),
            max_depth: self.max_depth,
            bucket_size: self.bucket_size,
            ..Default::default()
        })
    }

    fn load_scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => load_scene(path).with_context(|| format!("Failed to load scene {:?}", path)),
            None => {
                log::info!("No scene given, using the classic preset");
                Ok(presets::classic())
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = args.render_config()?;
    let scene = args.load_scene()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render threads")?;
    }

    log::info!(
        "Rendering {}x{} ({} spheres, {} lights, max depth {})",
        config.width,
        config.height,
        scene.sphere_count(),
        scene.light_count(),
        config.max_depth
    );

    let start = Instant::now();
    let image = if args.sequential {
        render(&scene, &config)
    } else {
        render_parallel(&scene, &config)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    let non_finite = image.pixels.iter().filter(|c| !c.is_finite()).count();
    if non_finite > 0 {
        log::warn!("{} pixel(s) are NaN or infinite and will encode as black", non_finite);
    }

    save_image(&args.output, &image).with_context(|| format!("Failed to write {:?}", args.output))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_render_config() {
        let args = Args::parse_from(["lucid"]);
        let config = args.render_config().unwrap();
        let default = RenderConfig::default();

        assert_eq!(config.width, default.width);
        assert_eq!(config.height, default.height);
        assert_eq!(config.max_depth, default.max_depth);
        assert_eq!(config.bucket_size, default.bucket_size);
        assert!((config.fov - default.fov).abs() < 1e-6);
        assert_eq!(args.output, PathBuf::from("out.ppm"));
        assert!(args.scene.is_none());
    }

    #[test]
    fn test_flags_override() {
        let args = Args::parse_from([
            "lucid", "--width", "320", "--height", "200", "--fov-degrees", "90", "--max-depth", "3", "-o",
            "frame.png", "--sequential",
        ]);
        let config = args.render_config().unwrap();

        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.max_depth, 3);
        assert!((config.fov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(args.output, PathBuf::from("frame.png"));
        assert!(args.sequential);
    }

    #[test]
    fn test_invalid_fov_rejected() {
        let args = Args::parse_from(["lucid", "--fov-degrees", "180"]);
        assert!(args.render_config().is_err());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let args = Args::parse_from(["lucid", "--width", "65536", "--height", "65536"]);
        assert!(args.render_config().is_err());

        // Pixel count fits in u32 but the RGB byte count does not
        let args = Args::parse_from(["lucid", "--width", "65536", "--height", "30000"]);
        assert!(args.render_config().is_err());

        let args = Args::parse_from(["lucid", "--width", "8192", "--height", "8192"]);
        assert!(args.render_config().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let args = Args::parse_from(["lucid", "--width", "0"]);
        assert!(args.render_config().is_err());
    }

    #[test]
    fn test_builtin_scene_without_flag() {
        let args = Args::parse_from(["lucid"]);
        let scene = args.load_scene().unwrap();
        assert_eq!(scene.sphere_count(), 4);
    }
}
