//! Common utilities shared across CLI commands.

use std::fs;

/// Output format for the generate command.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Dxf,
    Json,
}

impl OutputFormat {
    /// Parse a format name, or None for unknown input.
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.to_lowercase().as_str() {
            "svg" => Some(OutputFormat::Svg),
            "dxf" => Some(OutputFormat::Dxf),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Write a text document to a file, or to stdout for `-`/absent paths.
pub fn write_text_output(content: &str, output_path: Option<&str>) {
    match output_path {
        Some("-") | None => {
            println!("{}", content);
        }
        Some(path) => {
            fs::write(path, content).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }
}
