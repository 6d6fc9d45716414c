//! Trilateration overlap for three anchors.
//!
//! Usage:
//! ```text
//! cargo run --example anchors                                       # default anchors
//! cargo run --example anchors -- --a 0,0,100 --b 70,0,100 --c 0,70,100
//! RUST_LOG=trilat=debug cargo run --example anchors                 # pipeline events
//! ```
//!
//! Prints the triangle, segment and total areas, then the three vertices so
//! they can be fed to an external plotter.

use std::process::ExitCode;

use clap::Parser;
use trilat::{overlap_area, Circle};

#[derive(Parser)]
#[command(name = "anchors")]
#[command(about = "Overlap area of three trilateration circles")]
struct Args {
    /// Anchor A as `x,y,r`
    #[arg(long, value_parser = parse_anchor, default_value = "0,0,100", allow_hyphen_values = true)]
    a: Circle,

    /// Anchor B as `x,y,r`
    #[arg(long, value_parser = parse_anchor, default_value = "100,0,100", allow_hyphen_values = true)]
    b: Circle,

    /// Anchor C as `x,y,r`
    #[arg(long, value_parser = parse_anchor, default_value = "50,100,100", allow_hyphen_values = true)]
    c: Circle,

    /// Decimal places in the printed areas
    #[arg(long, default_value_t = 5)]
    precision: usize,
}

fn parse_anchor(raw: &str) -> Result<Circle, String> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    let [x, y, r] = values[..] else {
        return Err(format!("expected x,y,r but got {} values", values.len()));
    };
    Circle::from_xyr(x, y, r).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for trilat.
    // Override with RUST_LOG env var (e.g. RUST_LOG=trilat=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trilat=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let circles = [args.a, args.b, args.c];

    match overlap_area(&circles) {
        Ok(result) => {
            let p = args.precision;
            println!("Triangle Area: {:.p$}", result.triangle_area);
            println!("Segments Area: {:.p$}", result.segment_area);
            println!("Total Area: {:.p$}", result.total_area);
            for (pair, vertex) in result.vertices.iter() {
                println!("Vertex {pair:?}: ({:.p$}, {:.p$})", vertex.x, vertex.y);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "no overlap triangle");
            eprintln!("Unable to form a valid triangle with the given circles: {err}");
            ExitCode::FAILURE
        }
    }
}
