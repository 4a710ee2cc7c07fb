// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printmat CLI — thin argument mapping around the processing pipeline.
//
// Prints each produced artifact path on its own line, in
// target/page/document order.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use printmat_core::{Job, JobDefaults, Mode, PhysicalSize, Resolution};
use printmat_pipeline::{parse_color, process};

#[derive(Parser)]
#[command(
    name = "printmat",
    about = "Create a target-size image with padding and centre it on an A4 sheet",
    version
)]
struct Cli {
    /// Input image path
    input: PathBuf,

    /// Target width in cm
    #[arg(short = 'w', long, default_value_t = JobDefaults::default().width_cm)]
    width_cm: f64,

    /// Target height in cm
    #[arg(short = 'H', long, default_value_t = JobDefaults::default().height_cm)]
    height_cm: f64,

    /// Padding color as '#RRGGBB' or 'R,G,B'
    #[arg(short, long, default_value_t = JobDefaults::default().padding)]
    padding: String,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = JobDefaults::default().dpi)]
    dpi: u32,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Artifacts to produce: todo | pdf | image | image_a4
    #[arg(short, long, default_value_t = Mode::default().wire_name().to_string())]
    mode: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // All job parameters validate up front, before the image is touched.
    let mode = Mode::parse(&cli.mode)?;
    let padding = parse_color(&cli.padding)?;
    let target = PhysicalSize::new(cli.width_cm, cli.height_cm)?;
    let dpi = Resolution::new(cli.dpi)?;

    let job = Job::new(cli.input, target, dpi, padding, mode);
    let outputs = process(&job, &cli.out_dir)?;

    for path in outputs.paths() {
        println!("{}", path.display());
    }

    Ok(())
}
