//! Siting CLI
//!
//! Generates a random field of houses and hospitals, optimizes the
//! hospital placement and reports the result.
//!
//! Usage:
//!     siting --houses 10 --hospitals 3 --iterations 1000 --seed 42
//!     siting --continuous 100x100 --houses 20 --hospitals 4
//!     siting --config siting.toml --quiet

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use siting::console::{self, LevelFilter};
use siting::prelude::*;

/// Places hospitals to minimize the distance from every house to its nearest hospital
#[derive(Parser, Debug)]
#[command(name = "siting")]
#[command(version)]
#[command(about = "Hill-climbing hospital placement", long_about = None)]
struct Cli {
    /// Number of houses
    #[arg(long)]
    houses: Option<usize>,

    /// Number of hospitals
    #[arg(long)]
    hospitals: Option<usize>,

    /// Number of hill-climbing iterations
    #[arg(short, long)]
    iterations: Option<u64>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML or YAML configuration file, overridden by the other flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use a G x G grid
    #[arg(long, value_name = "G", conflicts_with = "continuous")]
    grid: Option<usize>,

    /// Side length of a grid cell
    #[arg(long, default_value_t = 50.0, requires = "grid")]
    cell_size: f64,

    /// Use a continuous W x H plane
    #[arg(long, value_name = "WxH", value_parser = parse_extent)]
    continuous: Option<(f64, f64)>,

    /// Largest per-axis offset of a continuous move
    #[arg(long)]
    jitter: Option<u32>,

    /// Only print the result
    #[arg(short, long)]
    quiet: bool,
}

fn parse_extent(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected <W>x<H>, got '{}'", s))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok((w, h))
}

impl Cli {
    fn into_config(self) -> Result<SitingConfig, String> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SitingConfig::new(),
        };

        if let Some(houses) = self.houses {
            config.field.house_count = houses;
        }
        if let Some(hospitals) = self.hospitals {
            config.field.hospital_count = hospitals;
        }
        if let Some(grid) = self.grid {
            config.field.domain = Domain::grid(grid, self.cell_size);
        }
        if let Some((width, height)) = self.continuous {
            config.field.domain = Domain::continuous(width, height);
        }
        if let Some(iterations) = self.iterations {
            config.local_search.step_count_limit = iterations;
        }
        if let Some(jitter) = self.jitter {
            config.local_search.jitter = jitter;
        }
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }

        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SitingConfig, String> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let loaded = if is_yaml {
        SitingConfig::from_yaml_file(path)
    } else {
        SitingConfig::from_toml_file(path)
    };
    loaded.map_err(|e| format!("{}: {}", path.display(), e))
}

fn print_result(result: &SolveResult) {
    println!("Initial cost: {:.2}", result.initial_cost());
    println!("Final cost:   {:.2}", result.final_cost());
    println!("Improvement:  {}", result.improvement());
    println!();
    for (i, hospital) in result.field.hospitals().iter().enumerate() {
        println!("Hospital {}: ({}, {})", i + 1, hospital.x, hospital.y);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.quiet {
        console::init_quiet(LevelFilter::WARN);
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{} {}", "error:".red().bold(), message);
            return ExitCode::FAILURE;
        }
    };

    match solve(config) {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
