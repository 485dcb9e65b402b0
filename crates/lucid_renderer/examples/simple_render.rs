//! Simple ray tracer example.
//!
//! Renders the classic scene and saves it in PPM format.

use lucid_core::presets;
use lucid_renderer::{render_parallel, save_image, RenderConfig};

fn main() {
    env_logger::init();

    println!("Lucid Ray Tracer - Simple Example");
    println!("=================================");

    let scene = presets::classic();
    println!("Scene: {} spheres, {} lights", scene.sphere_count(), scene.light_count());

    let config = RenderConfig {
        width: 640,
        height: 480,
        ..Default::default()
    };

    println!("Rendering {}x{} (max depth {})...", config.width, config.height, config.max_depth);

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_image(filename, &image).expect("Failed to save image");
    println!("Saved to {}", filename);
}
