//! Generate command implementation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use no_supports::{
    Layout, LayoutSink, Line, Orientation, Pattern, Point, Polyline, SvgOptions,
    generate_chevron_lattice, generate_hex_mesh, patterns::{ChevronParams, HexParams},
    write_dxf, write_svg,
};

use super::common::{OutputFormat, write_text_output};

const DEFAULT_WIDTH: f64 = 200.0;
const DEFAULT_HEIGHT: f64 = 100.0;
const DEFAULT_MARGIN: f64 = 10.0;
const DEFAULT_COLUMNS: usize = 4;
const DEFAULT_ROWS: usize = 4;
const DEFAULT_WEBBING: f64 = 2.0;
const DEFAULT_HEX_WIDTH: f64 = 20.0;
const DEFAULT_HEX_SPACING: f64 = 2.0;

/// Optional parameters loaded from a YAML file. CLI flags override these.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ParamsFile {
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub webbing: Option<f64>,
    #[serde(default)]
    pub hex_width: Option<f64>,
    #[serde(default)]
    pub hex_spacing: Option<f64>,
}

impl ParamsFile {
    /// Load a parameter file from YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read parameter file: {}", e))?;

        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse parameter YAML: {}", e))
    }
}

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

/// A line in JSON output format.
#[derive(Serialize, Clone, Copy)]
struct JsonLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// A cell outline in JSON output format.
#[derive(Serialize)]
struct JsonPolyline {
    points: Vec<JsonPoint>,
    closed: bool,
}

/// An axis-aligned frame rectangle in JSON output format.
#[derive(Serialize)]
struct JsonRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// A strut (pair of vertical segments) in JSON output format.
#[derive(Serialize)]
struct JsonStrut {
    left: JsonLine,
    right: JsonLine,
}

#[derive(Serialize)]
struct JsonFrame {
    outer: JsonRect,
    inner: JsonRect,
}

/// Complete JSON output document.
#[derive(Serialize)]
struct JsonLayout {
    pattern: String,
    width: f64,
    height: f64,
    frame: JsonFrame,
    cells: Vec<JsonPolyline>,
    struts: Vec<JsonStrut>,
    cell_count: usize,
    strut_count: usize,
}

/// Collects oriented geometry for the JSON document.
#[derive(Default)]
struct JsonSink {
    rects: Vec<JsonRect>,
    cells: Vec<JsonPolyline>,
    segments: Vec<JsonLine>,
}

impl LayoutSink for JsonSink {
    fn rect(&mut self, min: Point, max: Point) {
        self.rects.push(JsonRect {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        });
    }

    fn polyline(&mut self, polyline: &Polyline) {
        self.cells.push(JsonPolyline {
            points: polyline.points.iter().map(|p| JsonPoint { x: p.x, y: p.y }).collect(),
            closed: polyline.closed,
        });
    }

    fn segment(&mut self, segment: &Line) {
        self.segments.push(JsonLine {
            x1: segment.x1,
            y1: segment.y1,
            x2: segment.x2,
            y2: segment.y2,
        });
    }
}

/// Serialize a layout as JSON, honoring the requested orientation.
fn layout_to_json(pattern: Pattern, layout: &Layout, orientation: Orientation) -> String {
    let mut sink = JsonSink::default();
    layout.emit(orientation, &mut sink);

    let mut rects = sink.rects.into_iter();
    let outer = rects.next().expect("layout always emits the outer rect");
    let inner = rects.next().expect("layout always emits the inner rect");

    // Struts arrive as left/right segment pairs in emission order.
    let struts: Vec<JsonStrut> = sink
        .segments
        .chunks_exact(2)
        .map(|pair| JsonStrut { left: pair[0], right: pair[1] })
        .collect();

    let cell_count = sink.cells.len();
    let strut_count = struts.len();

    let doc = JsonLayout {
        pattern: pattern.name().to_string(),
        width: layout.width,
        height: layout.height,
        frame: JsonFrame { outer, inner },
        cells: sink.cells,
        struts,
        cell_count,
        strut_count,
    };

    serde_json::to_string(&doc).expect("Failed to serialize JSON")
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {}: {}", flag, value);
        std::process::exit(1);
    })
}

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) {
    let mut pattern_name: Option<String> = None;
    let mut width: Option<f64> = None;
    let mut height: Option<f64> = None;
    let mut margin: Option<f64> = None;
    let mut columns: Option<usize> = None;
    let mut rows: Option<usize> = None;
    let mut webbing: Option<f64> = None;
    let mut hex_width: Option<f64> = None;
    let mut hex_spacing: Option<f64> = None;
    let mut format = OutputFormat::Svg;
    let mut output_path: Option<String> = None;
    let mut orientation_override: Option<Orientation> = None;
    let mut params_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--pattern" => {
                i += 1;
                if i < args.len() {
                    pattern_name = Some(args[i].clone());
                }
            }
            "-W" | "--width" => {
                i += 1;
                if i < args.len() {
                    width = Some(parse_flag("--width", &args[i]));
                }
            }
            "-H" | "--height" => {
                i += 1;
                if i < args.len() {
                    height = Some(parse_flag("--height", &args[i]));
                }
            }
            "-m" | "--margin" => {
                i += 1;
                if i < args.len() {
                    margin = Some(parse_flag("--margin", &args[i]));
                }
            }
            "-c" | "--columns" => {
                i += 1;
                if i < args.len() {
                    columns = Some(parse_flag("--columns", &args[i]));
                }
            }
            "-r" | "--rows" => {
                i += 1;
                if i < args.len() {
                    rows = Some(parse_flag("--rows", &args[i]));
                }
            }
            "-w" | "--webbing" => {
                i += 1;
                if i < args.len() {
                    webbing = Some(parse_flag("--webbing", &args[i]));
                }
            }
            "--hex-width" => {
                i += 1;
                if i < args.len() {
                    hex_width = Some(parse_flag("--hex-width", &args[i]));
                }
            }
            "--hex-spacing" => {
                i += 1;
                if i < args.len() {
                    hex_spacing = Some(parse_flag("--hex-spacing", &args[i]));
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = OutputFormat::from_name(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unknown format: {}. Use 'svg', 'dxf' or 'json'.", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "--y-up" => {
                orientation_override = Some(Orientation::YUp);
            }
            "--y-down" => {
                orientation_override = Some(Orientation::YDown);
            }
            "--params" => {
                i += 1;
                if i < args.len() {
                    params_path = Some(args[i].clone());
                }
            }
            "--example-params" => {
                print_example_params();
                return;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Layer parameters: defaults, then the YAML file, then CLI flags.
    let file = match &params_path {
        Some(path) => {
            eprintln!("Loading parameters: {}", path);
            ParamsFile::load(path).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            })
        }
        None => ParamsFile::default(),
    };

    let pattern_name = pattern_name
        .or(file.pattern.clone())
        .unwrap_or_else(|| "chevrons".to_string());
    let pattern = Pattern::from_name(&pattern_name).unwrap_or_else(|| {
        eprintln!("Unknown pattern: {}. Use 'no-supports patterns' to list available.", pattern_name);
        std::process::exit(1);
    });

    let width = width.or(file.width).unwrap_or(DEFAULT_WIDTH);
    let height = height.or(file.height).unwrap_or(DEFAULT_HEIGHT);
    let margin = margin.or(file.margin).unwrap_or(DEFAULT_MARGIN);

    let result = match pattern {
        Pattern::Chevrons => generate_chevron_lattice(&ChevronParams {
            width,
            height,
            margin,
            columns: columns.or(file.columns).unwrap_or(DEFAULT_COLUMNS),
            rows: rows.or(file.rows).unwrap_or(DEFAULT_ROWS),
            webbing: webbing.or(file.webbing).unwrap_or(DEFAULT_WEBBING),
        }),
        Pattern::Hexmesh => generate_hex_mesh(&HexParams {
            width,
            height,
            margin,
            hex_width: hex_width.or(file.hex_width).unwrap_or(DEFAULT_HEX_WIDTH),
            hex_spacing: hex_spacing.or(file.hex_spacing).unwrap_or(DEFAULT_HEX_SPACING),
        }),
    };

    let layout = match result {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Generated {} cells and {} struts ({} pattern, {} x {})",
        layout.cells.len(),
        layout.struts.len(),
        pattern.name(),
        layout.width,
        layout.height
    );

    // SVG wants its Y axis flipped to stay visually upright; DXF and JSON
    // keep the engine's native orientation unless overridden.
    let orientation = orientation_override.unwrap_or(match format {
        OutputFormat::Svg => Orientation::YDown,
        OutputFormat::Dxf | OutputFormat::Json => Orientation::YUp,
    });

    match format {
        OutputFormat::Svg => {
            let svg = write_svg(&layout, orientation, &SvgOptions::default());
            write_text_output(&svg, output_path.as_deref());
        }
        OutputFormat::Json => {
            let json = layout_to_json(pattern, &layout, orientation);
            write_text_output(&json, output_path.as_deref());
        }
        OutputFormat::Dxf => {
            let path = match output_path.as_deref() {
                Some("-") | None => {
                    eprintln!("Error: DXF output requires -o <file> (binary-ish format, no stdout)");
                    std::process::exit(1);
                }
                Some(path) => path,
            };
            if let Err(e) = write_dxf(&layout, orientation, path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            eprintln!("Wrote: {}", path);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: no-supports generate [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --pattern <name>    Pattern name (default: chevrons)");
    eprintln!("  -W, --width <n>         Overall width (default: 200)");
    eprintln!("  -H, --height <n>        Overall height (default: 100)");
    eprintln!("  -m, --margin <n>        Frame margin (default: 10)");
    eprintln!("  -c, --columns <n>       Chevron columns (default: 4)");
    eprintln!("  -r, --rows <n>          Chevron rows (default: 4, minimum 2)");
    eprintln!("  -w, --webbing <n>       Wall thickness (default: 2)");
    eprintln!("  --hex-width <n>         Hexagon width (default: 20)");
    eprintln!("  --hex-spacing <n>       Hexagon spacing (default: 2)");
    eprintln!("  -f, --format <fmt>      svg, dxf or json (default: svg)");
    eprintln!("  -o, --output <file>     Output file (- for stdout; required for dxf)");
    eprintln!("  --y-up / --y-down       Force vertical orientation");
    eprintln!("  --params <file.yaml>    Read parameters from a YAML file (flags win)");
    eprintln!("  --example-params        Print an example parameter file");
}

fn print_example_params() {
    println!(
        r##"# Example no-supports parameter file
# Load with: no-supports generate --params params.yaml
# Any CLI flag overrides the value given here.

pattern: chevrons   # or: hexmesh

# Bounding rectangle and frame
width: 200
height: 100
margin: 10

# Chevron lattice
columns: 4
rows: 4             # minimum 2
webbing: 2

# Hexagonal mesh
hex_width: 20
hex_spacing: 2
"##
    );
}
