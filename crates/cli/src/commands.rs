// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use num_bigint::{BigInt, BigUint};
use polylib_aks::{Aks, AksOptions};
use polylib_config::AppConfig;
use polylib_polynomial::{ModulusContext, Polynomial, SymbolFormat};
use tracing::{debug, info};

/// Everything a command needs to evaluate: the arithmetic context, the print symbol and
/// the primality test options.
#[derive(Debug, Clone)]
pub struct Settings {
    pub ctx: ModulusContext,
    pub symbol: char,
    pub aks: AksOptions,
}

impl Settings {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            ctx: config.modulus_context()?,
            symbol: config.symbol,
            aks: config.aks_options(),
        })
    }

    fn parse(&self, text: &str) -> Result<Polynomial> {
        Polynomial::parse(text, &self.ctx)
            .with_context(|| format!("Could not parse polynomial '{}'", text.trim()))
    }

    fn show(&self, poly: &Polynomial) -> String {
        poly.with_symbol(self.symbol).to_string()
    }

    /// `poly^exponent`, reduced by `poly_mod` when given.
    pub fn expand(&self, poly: &str, exponent: &str, poly_mod: Option<&str>) -> Result<String> {
        let base = self.parse(poly)?;
        let exponent: BigInt = exponent
            .trim()
            .parse()
            .with_context(|| format!("Exponent '{}' is not an integer", exponent.trim()))?;
        let modulus = poly_mod.map(|m| self.parse(m)).transpose()?;
        debug!(ctx = %self.ctx, %exponent, "expand");
        let result = base.pow(&exponent, modulus.as_ref(), &self.ctx)?;
        Ok(self.show(&result))
    }

    pub fn polymod(&self, poly: &str, modulus: &str) -> Result<String> {
        let poly = self.parse(poly)?;
        let modulus = self.parse(modulus)?;
        Ok(self.show(&poly.poly_mod(&modulus, &self.ctx)?))
    }

    pub fn divide(&self, dividend: &str, divisor: &str) -> Result<String> {
        let dividend = self.parse(dividend)?;
        let divisor = self.parse(divisor)?;
        let (quotient, remainder) = dividend.div(&divisor, &self.ctx)?;
        Ok(format!(
            "quotient: {}\nremainder: {}",
            self.show(&quotient),
            self.show(&remainder)
        ))
    }

    pub fn multiply(&self, lhs: &str, rhs: &str) -> Result<String> {
        let lhs = self.parse(lhs)?;
        let rhs = self.parse(rhs)?;
        Ok(self.show(&lhs.mul(&rhs, &self.ctx)))
    }

    pub fn aks(&self, n: &BigUint) -> Result<String> {
        info!(%n, strategy = %self.aks.strategy, parallel = self.aks.parallel, "Running AKS");
        let report = Aks::new(self.aks.clone()).run(n)?;
        Ok(report.to_string())
    }

    /// `(x + 1)^k` for `k` in `0..rows`; the coefficients are the rows of Pascal's triangle.
    pub fn binomial_rows(&self, rows: u64) -> Result<Vec<String>> {
        let binomial = Polynomial::binomial(1, &self.ctx);
        let shown = self.show(&binomial);
        (0..rows)
            .map(|k| -> Result<String> {
                let expansion = binomial.pow(&BigInt::from(k), None, &self.ctx)?;
                Ok(format!("({shown})^{k} = {}", self.show(&expansion)))
            })
            .collect()
    }
}
