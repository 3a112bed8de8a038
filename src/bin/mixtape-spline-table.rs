//! Regenerates `src/inv_bessel_table.rs`.
//!
//! ```text
//! mixtape-spline-table [--num-points N] [--kappa-min K] [--kappa-max K] > src/inv_bessel_table.rs
//! ```

use clap::Parser;
use mixtape::{MixtapeResult, SplineCoefficientBuilder, SplineConfig};
use std::process::ExitCode;

/// Print the inverse Bessel-ratio spline table as Rust source
#[derive(Parser, Debug)]
#[command(name = "mixtape-spline-table")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of log-spaced knots
    #[arg(long, default_value_t = SplineConfig::default().num_points)]
    num_points: usize,

    /// Smallest concentration on the grid
    #[arg(long, default_value_t = SplineConfig::default().y_min)]
    kappa_min: f64,

    /// Largest concentration on the grid
    #[arg(long, default_value_t = SplineConfig::default().y_max)]
    kappa_max: f64,
}

impl Cli {
    fn spline_config(&self) -> SplineConfig {
        SplineConfig {
            num_points: self.num_points,
            y_min: self.kappa_min,
            y_max: self.kappa_max,
        }
    }
}

fn run(cli: &Cli) -> MixtapeResult<String> {
    let config = cli.spline_config();
    let table = SplineCoefficientBuilder::new(config).build()?;
    Ok(table.to_rust_source(&config))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(source) => {
            print!("{}", source);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("mixtape-spline-table: {}", err);
            ExitCode::FAILURE
        }
    }
}
