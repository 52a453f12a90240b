// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::commands::Settings;
use crate::helpers::telemetry::setup_simple_tracing;
use crate::shell::Session;
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use num_bigint::BigUint;
use polylib_aks::FindRStrategy;
use polylib_config::{load_config, AppConfig, CliOverrides};
use std::io;
use std::path::PathBuf;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polylib")]
#[command(about = "Exact polynomial arithmetic over Z or Z/nZ and the AKS primality test", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polylib -vvv` will give
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

    /// Reduce coefficients modulo this integer
    #[arg(short, long, global = true)]
    modulus: Option<u64>,

    /// Keep the sign of reduced coefficients
    #[arg(long, global = true)]
    ignore_sign: bool,

    /// Variable symbol used when printing
    #[arg(long, global = true)]
    symbol: Option<char>,
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

        let config = self.load_config()?;
        info!("Config loaded from: {:?}", config.found_config_file);
        let mut settings = Settings::from_config(&config)?;

        match self.command {
            Commands::Expand {
                polynomial,
                exponent,
                poly_mod,
            } => println!(
                "{}",
                settings.expand(&polynomial, &exponent, poly_mod.as_deref())?
            ),
            Commands::Polymod {
                polynomial,
                modulus,
            } => println!("{}", settings.polymod(&polynomial, &modulus)?),
            Commands::Divide { dividend, divisor } => {
                println!("{}", settings.divide(&dividend, &divisor)?)
            }
            Commands::Multiply { lhs, rhs } => println!("{}", settings.multiply(&lhs, &rhs)?),
            Commands::Aks {
                n,
                strategy,
                sequential,
            } => {
                if let Some(strategy) = strategy {
                    settings.aks.strategy = strategy;
                }
                if sequential {
                    settings.aks.parallel = false;
                }
                println!("{}", settings.aks(&n)?)
            }
            Commands::Shell => Session::new(settings).run(io::stdin().lock(), io::stdout())?,
            Commands::Examples { rows } => {
                println!("Expansion of (x + 1) to increasingly higher powers");
                for row in settings.binomial_rows(rows)? {
                    println!("{row}");
                }
            }
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        let overrides = CliOverrides {
            modulus: self.modulus,
            ignore_sign: self.ignore_sign.then_some(true),
            symbol: self.symbol,
            found_config_file: None,
        };
        load_config(self.config.as_deref(), overrides)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Raise a polynomial to a power, optionally modulo a polynomial
    Expand {
        #[arg(allow_hyphen_values = true)]
        polynomial: String,

        /// Nonnegative integer exponent
        exponent: String,

        /// Reduce by this polynomial after every multiplication
        #[arg(long = "poly-mod", allow_hyphen_values = true)]
        poly_mod: Option<String>,
    },

    /// Remainder of a polynomial divided by another
    Polymod {
        #[arg(allow_hyphen_values = true)]
        polynomial: String,

        #[arg(allow_hyphen_values = true)]
        modulus: String,
    },

    /// Long division, printing quotient and remainder
    Divide {
        #[arg(allow_hyphen_values = true)]
        dividend: String,

        #[arg(allow_hyphen_values = true)]
        divisor: String,
    },

    /// Multiply two polynomials
    Multiply {
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },

    /// Run the AKS primality test
    Aks {
        n: BigUint,

        /// How to search for r: `multiplicative-order` or `brute-force`
        #[arg(long)]
        strategy: Option<FindRStrategy>,

        /// Do not fan the checks out over worker threads
        #[arg(long)]
        sequential: bool,
    },

    /// Start an interactive session
    Shell,

    /// Print (x + 1)^k for increasing k
    Examples {
        /// Number of rows to print
        #[arg(long, default_value_t = 10)]
        rows: u64,
    },
}
