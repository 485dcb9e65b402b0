//! Example: Load and inspect a scene description.
//!
//! Run with: cargo run --example inspect_scene -- scenes/three_spheres.json

use std::env;

use lucid_core::{load_scene, presets};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let scene = if args.len() < 2 {
        println!("No scene file given, inspecting the built-in classic scene");
        println!("Usage: inspect_scene <path-to-scene.json>");
        presets::classic()
    } else {
        match load_scene(&args[1]) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("Failed to load scene: {}", e);
                std::process::exit(1);
            }
        }
    };

    println!("\n=== Scene ===");
    println!("Spheres: {}", scene.sphere_count());
    println!("Lights: {}", scene.light_count());
    match &scene.floor {
        Some(floor) => println!(
            "Floor: y={} x=({}, {}) z=({}, {})",
            floor.height, floor.x_range.min, floor.x_range.max, floor.z_range.min, floor.z_range.max
        ),
        None => println!("Floor: none"),
    }

    println!("\n--- Spheres ---");
    for (i, sphere) in scene.spheres.iter().enumerate() {
        let m = &sphere.material;
        println!(
            "  [{}] center={:?} r={} ior={} albedo={:?} color={:?} spec={}",
            i, sphere.center, sphere.radius, m.refractive_index, m.albedo, m.diffuse_color, m.specular_exponent
        );
    }

    println!("\n--- Lights ---");
    for (i, light) in scene.lights.iter().enumerate() {
        println!("  [{}] position={:?} intensity={}", i, light.position, light.intensity);
    }
}
