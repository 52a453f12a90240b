// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use num_bigint::BigInt;
use polylib_aks::{AksOptions, FindRStrategy};
use polylib_polynomial::{ModulusContext, DEFAULT_SYMBOL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The `aks` key in configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AksConfig {
    /// How to search for `r`: `multiplicative-order` or `brute-force`
    pub strategy: FindRStrategy,
    /// Run trial division and identity checks on rayon
    pub parallel: bool,
    /// Worker count for a dedicated pool, the global pool is used when unset
    pub threads: Option<usize>,
}

impl Default for AksConfig {
    fn default() -> Self {
        Self {
            strategy: FindRStrategy::default(),
            parallel: true,
            threads: None,
        }
    }
}

/// Application configuration after all layers have been merged
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Integer modulus for coefficient arithmetic, exact integers when unset
    pub modulus: Option<u64>,
    /// Keep the sign of reduced coefficients
    pub ignore_sign: bool,
    /// Warn about operations with unbounded coefficient growth
    pub safety_checks: bool,
    /// Variable symbol used when printing
    pub symbol: char,
    pub aks: AksConfig,
    /// The config file that was loaded, if any. Set by the loader; not meant to be
    /// written in configuration files.
    pub found_config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            modulus: None,
            ignore_sign: false,
            safety_checks: true,
            symbol: DEFAULT_SYMBOL,
            aks: AksConfig::default(),
            found_config_file: None,
        }
    }
}

impl AppConfig {
    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if let Some(m) = self.modulus {
            if m < 2 {
                bail!("modulus must be greater than 1, got {m}");
            }
        }
        if !self.symbol.is_ascii_alphabetic() {
            bail!("symbol must be a single ASCII letter, got '{}'", self.symbol);
        }
        if self.aks.threads == Some(0) {
            bail!("aks.threads must be at least 1 when set");
        }
        Ok(())
    }

    /// The arithmetic context described by this configuration.
    pub fn modulus_context(&self) -> Result<ModulusContext> {
        let ctx = ModulusContext::from_option(self.modulus.map(BigInt::from))
            .context("Invalid modulus in configuration")?;
        Ok(ctx
            .ignore_sign(self.ignore_sign)
            .safety_checks(self.safety_checks))
    }

    pub fn aks_options(&self) -> AksOptions {
        AksOptions {
            strategy: self.aks.strategy,
            parallel: self.aks.parallel,
            threads: self.aks.threads,
        }
    }
}

/// Value struct for passing configuration from the cli to the configuration
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulus: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_sign: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_config_file: Option<PathBuf>,
}

pub struct OsDirs;
impl OsDirs {
    /// `~/.config/polylib` on linux, the working directory when the OS has no config dir
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("polylib"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
