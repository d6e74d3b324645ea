//! Render command implementation.
//!
//! Rasterizes a generated SVG document to PNG so a lattice can be eyeballed
//! without opening a CAD host.

use std::fs;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use resvg::usvg;
use tiny_skia::Pixmap;

/// Execute the render command.
pub fn cmd_render(args: &[String]) {
    let mut svg_path: Option<&str> = None;
    let mut output_path: Option<String> = None;
    let mut target_width: u32 = 1600;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "--width" => {
                i += 1;
                if i < args.len() {
                    target_width = args[i].parse().unwrap_or(1600);
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            path if !path.starts_with('-') => {
                if svg_path.is_none() {
                    svg_path = Some(path);
                }
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let svg_path = svg_path.unwrap_or_else(|| {
        eprintln!("Error: SVG file required");
        print_usage();
        std::process::exit(1);
    });

    eprintln!("Loading: {}", svg_path);
    let svg_content = fs::read_to_string(svg_path).expect("Failed to read SVG file");

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg_content, &options).unwrap_or_else(|e| {
        eprintln!("Error: failed to parse SVG: {}", e);
        std::process::exit(1);
    });

    let size = tree.size();
    let scale = target_width as f32 / size.width();
    let target_height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(target_width, target_height).unwrap_or_else(|| {
        eprintln!("Error: could not allocate a {}x{} pixmap", target_width, target_height);
        std::process::exit(1);
    });

    // White background; lattice documents have no fill of their own.
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let rgba = RgbaImage::from_raw(target_width, target_height, pixmap.take())
        .expect("Failed to create image");
    let img = DynamicImage::ImageRgba8(rgba);

    let output = output_path.unwrap_or_else(|| {
        Path::new(svg_path)
            .with_extension("png")
            .to_string_lossy()
            .into_owned()
    });

    img.save(&output).expect("Failed to write PNG");
    eprintln!("Wrote: {} ({}x{})", output, target_width, target_height);
}

fn print_usage() {
    eprintln!("Usage: no-supports render <input.svg> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>   Output PNG (default: input with .png extension)");
    eprintln!("  --width <px>          Output width in pixels (default: 1600)");
}
