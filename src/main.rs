use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warp_gradient::{GradientWarper, InterpolationMode};
use warpgrad::input::{parse_curve, parse_stops};

#[derive(Parser)]
#[command(name = "warpgrad")]
#[command(about = "Easing-curve warped linear gradients with perceptual color blending")]
struct Cli {
    /// Key stops as `#RRGGBB@position` pairs, comma separated
    #[arg(short, long, default_value = "#fb2380@0,#28e2fb@1")]
    stops: String,

    /// Easing curve: preset name (linear, smooth, ease-in, ease-out,
    /// ease-in-out) or `x1,y1,x2,y2` control coordinates
    #[arg(short, long, default_value = "ease-in-out")]
    curve: String,

    /// Color space for stop blending
    #[arg(short, long, value_enum, default_value = "oklch")]
    mode: Mode,

    /// Desired number of warped stops (minimum 2)
    #[arg(short = 'n', long, default_value_t = 16)]
    samples: usize,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Rgb,
    Oklab,
    Oklch,
}

impl From<Mode> for InterpolationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Rgb => InterpolationMode::Rgb,
            Mode::Oklab => InterpolationMode::Oklab,
            Mode::Oklch => InterpolationMode::Oklch,
        }
    }
}

/// One warped stop as emitted on stdout.
#[derive(Serialize)]
struct StopRecord {
    position: f64,
    color: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warpgrad=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let stops = parse_stops(&cli.stops)?;
    let curve = parse_curve(&cli.curve)?;
    let mode = InterpolationMode::from(cli.mode);

    tracing::debug!(
        key_stops = stops.len(),
        %mode,
        samples = cli.samples,
        "warping gradient"
    );

    let warped = GradientWarper::new(stops)
        .curve(curve)
        .mode(mode)
        .samples(cli.samples)
        .warp();

    tracing::debug!(warped_stops = warped.len(), "warp complete");

    let records: Vec<StopRecord> = warped
        .iter()
        .map(|stop| StopRecord {
            position: stop.position,
            color: stop.color.to_string(),
        })
        .collect();

    let json = if cli.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{json}");
    Ok(())
}
