//! Handle Geometry CLI
//!
//! Usage:
//!   handle-geometry [OPTIONS] [FILE]
//!
//! Options:
//!   -H, --handle <ID>     Resolve active/opposite points for a handle
//!   -d, --delta <DX,DY>   Project a drag by this delta (requires --handle)
//!   -h, --help            Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handle_geometry::{
    bounds, handle_points, BoxState, Bounds, HandleId, Point, ResizeGesture, SineCosine,
};

#[derive(Parser)]
#[command(name = "handle-geometry")]
#[command(about = "Resize handle geometry for scaled, rotated rectangles")]
struct Cli {
    /// Box description in TOML (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Resolve the active and opposite points for this handle (tl, tr, bl, br, tm, bm, ml, mr)
    #[arg(short = 'H', long)]
    handle: Option<HandleId>,

    /// Pointer movement as "dx,dy"; projects the dragged point
    #[arg(short, long, requires = "handle", value_parser = parse_point, allow_hyphen_values = true)]
    delta: Option<Point>,
}

#[derive(Serialize)]
struct Report {
    center: Point,
    bounds: Bounds,
    extent: Extent,
    handles: Vec<HandleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gesture: Option<GestureReport>,
}

#[derive(Serialize)]
struct Extent {
    width: f64,
    height: f64,
    center: Point,
}

#[derive(Serialize)]
struct HandleEntry {
    handle: HandleId,
    corner: bool,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct GestureReport {
    handle: HandleId,
    active: Point,
    opposite: Point,
    factors: SineCosine,
    #[serde(skip_serializing_if = "Option::is_none")]
    projected: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"dx,dy\", got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad dx '{}': {}", x, e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad dy '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let state = match &cli.input {
        Some(path) => BoxState::from_file(path).map_err(|e| {
            format!("Error loading box description '{}': {}", path.display(), e)
        }),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => BoxState::from_toml_str(&buffer)
                    .map_err(|e| format!("Error loading box description from stdin: {}", e)),
                Err(e) => Err(format!("Error reading from stdin: {}", e)),
            }
        }
    };
    let state = match state {
        Ok(state) => state,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let report = build_report(&state, cli.handle, cli.delta);
    match toml::to_string(&report) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_report(state: &BoxState, handle: Option<HandleId>, delta: Option<Point>) -> Report {
    let gesture = handle.map(|handle| {
        let gesture = ResizeGesture::begin(handle, state);
        debug!(?gesture, "began gesture");
        GestureReport {
            handle,
            active: gesture.active,
            opposite: gesture.opposite,
            factors: gesture.factors,
            projected: delta.map(|d| gesture.project(d)),
        }
    });

    let aabb = bounds(state);
    Report {
        center: state.resolved_center(),
        bounds: aabb,
        extent: Extent {
            width: aabb.width(),
            height: aabb.height(),
            center: aabb.center(),
        },
        handles: handle_points(state)
            .into_iter()
            .map(|(handle, p)| HandleEntry {
                handle,
                corner: handle.is_corner(),
                x: p.x,
                y: p.y,
            })
            .collect(),
        gesture,
    }
}

fn print_intro() {
    println!(
        r#"Handle Geometry - resize handle math for scaled, rotated rectangles

USAGE:
    handle-geometry [OPTIONS] [FILE]
    echo '<toml>' | handle-geometry

OPTIONS:
    -H, --handle <ID>     Resolve active/opposite points (tl tr bl br tm bm ml mr)
    -d, --delta <DX,DY>   Project a drag by this delta (requires --handle)
    -h, --help            Print help

QUICK START:
    printf 'x = 0.0\ny = 0.0\nwidth = 100.0\nheight = 50.0\nangle = 30.0\n' \
        | handle-geometry --handle br --delta 10,5

Prints the center, bounds, bounds extent and all eight handles as TOML."#
    );
}
