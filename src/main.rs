// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Survey which primes a tiling's symmetry group reduces over.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use field_quotient::field::is_prime;
use field_quotient::survey::survey;
use field_quotient::{Arithmetic, PatternConfig, SolverConfig, TilingShape};

#[derive(Debug, Parser)]
#[command(name = "quotient-survey", about = "Survey field quotients of a regular tiling")]
struct Args {
    /// Sides of each face.
    #[arg(long, default_value_t = 7)]
    rotations: u8,

    /// Faces around each vertex.
    #[arg(long, default_value_t = 3)]
    valence: u8,

    /// Survey the {4,3,5} honeycomb instead.
    #[arg(long)]
    three_d: bool,

    #[arg(long, default_value_t = 2)]
    from: u32,

    #[arg(long, default_value_t = 100)]
    to: u32,

    /// Use the general encoding of Z_p[w].
    #[arg(long)]
    general: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.three_d && (args.rotations < 3 || args.valence < 3) {
        eprintln!("Error: rotations and valence must both be at least 3");
        return ExitCode::FAILURE;
    }
    let shape = if args.three_d {
        TilingShape::Spatial
    } else {
        TilingShape::planar(args.rotations, args.valence)
    };
    let arithmetic = if args.general { Arithmetic::General } else { Arithmetic::Pure };
    let config = PatternConfig::default().with_solver(SolverConfig::default().with_arithmetic(arithmetic));

    let primes = (args.from..=args.to).filter(|&n| is_prime(n));
    match survey(shape, primes, &config) {
        Ok(entries) => {
            for entry in &entries {
                println!("{}", entry);
            }
            let hard = entries.iter().filter(|entry| !entry.easy).count();
            println!("cases found = {} ({} hard)", entries.len(), hard);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
