// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::config::{load_config, CliOverrides, Prime};
use crate::helpers::telemetry::setup_simple_tracing;
use crate::helpers::{parse_bigint, parse_modulus, parse_polynomial};
use crate::{div, eval, gcd, shares};
use anyhow::Result;
use clap::{command, ArgAction, Parser, Subcommand};
use num_bigint::BigInt;
use polyshare_polynomial::{Modulus, Polynomial};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polyshare")]
#[command(about = "Polynomial arithmetic over the integers and prime fields, and Shamir style share generation", long_about = None)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polyshare -vvv` will give
    /// you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        match self.command {
            Commands::Shares {
                parties,
                threshold,
                prime,
                seed,
            } => {
                let overrides = CliOverrides {
                    prime: prime.map(Prime),
                    parties,
                    threshold,
                    seed,
                };
                let config = load_config(self.config.as_deref(), &overrides)?;
                info!("Config loaded from: {:?}", self.config);
                shares::execute(&config)?
            }
            Commands::Div {
                dividend,
                divisor,
                modulus,
            } => div::execute(&dividend, &divisor, modulus.as_ref())?,
            Commands::Gcd { a, b, modulus } => gcd::execute(&a, &b, modulus.as_ref())?,
            Commands::Eval { poly, x, modulus } => eval::execute(&poly, &x, modulus.as_ref()),
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample a random polynomial over Z/pZ and print shares of it
    Shares {
        /// Number of shares to generate
        #[arg(short = 'n', long)]
        parties: Option<usize>,

        /// Number of shares that determine the polynomial (degree + 1)
        #[arg(short = 'k', long)]
        threshold: Option<usize>,

        /// Prime defining the field
        #[arg(short, long, value_parser = parse_bigint)]
        prime: Option<BigInt>,

        /// Seed the random number generator for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Divide one polynomial by another, printing quotient and remainder
    Div {
        /// Dividend as constant-first coefficients, eg. `1,2,0,3` for 3x^3 + 2x + 1
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        dividend: Polynomial,

        /// Divisor as constant-first coefficients
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        divisor: Polynomial,

        /// Work in Z/mZ. The modulus should be prime
        #[arg(short, long, value_parser = parse_modulus)]
        modulus: Option<Modulus>,
    },

    /// Greatest common divisor of two polynomials
    Gcd {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        a: Polynomial,

        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        b: Polynomial,

        /// Work in Z/mZ. The modulus should be prime
        #[arg(short, long, value_parser = parse_modulus)]
        modulus: Option<Modulus>,
    },

    /// Evaluate a polynomial at a point
    Eval {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        poly: Polynomial,

        #[arg(value_parser = parse_bigint, allow_hyphen_values = true)]
        x: BigInt,

        /// Reduce the result into Z/mZ
        #[arg(short, long, value_parser = parse_modulus)]
        modulus: Option<Modulus>,
    },
}
