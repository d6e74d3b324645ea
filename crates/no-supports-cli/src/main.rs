//! no-supports - CLI for self-supporting lattice generation
//!
//! Usage:
//!   no-supports generate -p <pattern> [options]   Generate a lattice document
//!   no-supports patterns                          List available patterns
//!   no-supports render <svg> [options]            Rasterize a generated SVG to PNG
//!   no-supports help                              Show usage

use std::env;

use no_supports::Pattern;

mod cli;

use cli::{cmd_generate, cmd_render};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "generate" | "gen" => {
                cmd_generate(&args[2..]);
                return;
            }
            "patterns" => {
                cmd_patterns();
                return;
            }
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!();
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    print_usage(&args[0]);
    std::process::exit(1);
}

fn cmd_patterns() {
    println!("Available patterns:");
    for pattern in Pattern::all() {
        let meta = pattern.metadata();
        println!("  {:10} {} ({} / {})", pattern.name(), meta.description, meta.size_label, meta.detail_label);
    }
}

fn print_usage(prog: &str) {
    eprintln!("no-supports - self-supporting infill lattice generation");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate [options]          Generate a lattice document", prog);
    eprintln!("  {} patterns                    List available patterns", prog);
    eprintln!("  {} render <svg> [options]      Rasterize a generated SVG to PNG", prog);
    eprintln!();
    eprintln!("Generate options:");
    eprintln!("  -p, --pattern <name>    Pattern to use (default: chevrons)");
    eprintln!("  -W, --width <n>         Overall width (default: 200)");
    eprintln!("  -H, --height <n>        Overall height (default: 100)");
    eprintln!("  -m, --margin <n>        Frame margin (default: 10)");
    eprintln!("  -c, --columns <n>       Chevron columns (default: 4)");
    eprintln!("  -r, --rows <n>          Chevron rows (default: 4)");
    eprintln!("  -w, --webbing <n>       Wall thickness (default: 2)");
    eprintln!("  --hex-width <n>         Hexagon width (default: 20)");
    eprintln!("  --hex-spacing <n>       Hexagon spacing (default: 2)");
    eprintln!("  -f, --format <fmt>      Output format: svg, dxf, json (default: svg)");
    eprintln!("  -o, --output <file>     Output file (- for stdout; required for dxf)");
    eprintln!("  --y-up / --y-down       Force vertical orientation (default: svg is");
    eprintln!("                          y-down, dxf and json are y-up)");
    eprintln!("  --params <file.yaml>    Read parameters from a YAML file (flags win)");
    eprintln!("  --example-params        Print an example parameter file and exit");
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -o, --output <file>     Output PNG (default: input with .png extension)");
    eprintln!("  --width <px>            Output width in pixels (default: 1600)");
}
