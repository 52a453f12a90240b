// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The five steps of the Agrawal–Kayal–Saxena primality test.

use crate::errors::{AksError, AksResult};
use crate::find_r::FindRStrategy;
use crate::pool;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};
use polylib_polynomial::{
    is_coprime, is_perfect_power, log2_floor, totient, ModulusContext, Monomial, Polynomial,
};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, info};

/// Witnesses between progress messages in the identity check.
const PROGRESS_INTERVAL: u64 = 50;

/// The step that decided a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AksStep {
    /// `n <= 1`.
    Trivial,
    PerfectPower,
    FindR,
    TrialDivision,
    SmallN,
    PolynomialIdentity,
}

impl fmt::Display for AksStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AksStep::Trivial => "n <= 1",
            AksStep::PerfectPower => "perfect power check",
            AksStep::FindR => "find r",
            AksStep::TrialDivision => "trial division",
            AksStep::SmallN => "n <= r",
            AksStep::PolynomialIdentity => "polynomial identity",
        };
        write!(f, "{name}")
    }
}

/// Outcome of a primality test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AksReport {
    pub n: BigUint,
    pub is_prime: bool,
    pub step: AksStep,
    /// The cyclic modulus degree, once step 2 has run.
    pub r: Option<BigInt>,
    /// The divisor found by trial division, or the `a` whose identity failed.
    pub witness: Option<BigInt>,
}

impl fmt::Display for AksReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_prime { "prime" } else { "composite" };
        write!(f, "{} is {verdict} (decided by {})", self.n, self.step)?;
        if let Some(r) = &self.r {
            write!(f, ", r = {r}")?;
        }
        if let Some(w) = &self.witness {
            write!(f, ", witness = {w}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AksOptions {
    pub strategy: FindRStrategy,
    /// Fan steps 3 and 5 out over rayon.
    pub parallel: bool,
    /// Size of a dedicated pool. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for AksOptions {
    fn default() -> Self {
        Self {
            strategy: FindRStrategy::default(),
            parallel: true,
            threads: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aks {
    options: AksOptions,
}

impl Aks {
    pub fn new(options: AksOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AksOptions {
        &self.options
    }

    /// Runs the test on `n`, stopping at the first conclusive step.
    pub fn run(&self, n: &BigUint) -> AksResult<AksReport> {
        if self.options.parallel {
            pool::install(self.options.threads, || self.run_steps(n))
        } else {
            self.run_steps(n)
        }
    }

    fn run_steps(&self, n_unsigned: &BigUint) -> AksResult<AksReport> {
        let n = BigInt::from(n_unsigned.clone());
        let report = |is_prime: bool, step: AksStep, r: Option<BigInt>, witness: Option<BigInt>| {
            info!(%n, is_prime, %step, "AKS verdict");
            AksReport {
                n: n_unsigned.clone(),
                is_prime,
                step,
                r,
                witness,
            }
        };

        if n <= BigInt::one() {
            return Ok(report(false, AksStep::Trivial, None, None));
        }

        // Step 1
        if is_perfect_power(&n) {
            return Ok(report(false, AksStep::PerfectPower, None, None));
        }
        debug!(%n, "Not a perfect power");

        // Step 2
        let r = self.options.strategy.finder().find_r(&n)?;
        debug!(%n, %r, strategy = %self.options.strategy, "Found r");
        if !is_coprime(&n, &r)? {
            return Ok(report(false, AksStep::FindR, Some(r), None));
        }

        // Step 3
        let r_word = to_u64(&r, "r")?;
        let n_minus_one: BigInt = &n - BigInt::one();
        let limit = match n_minus_one.to_u64() {
            Some(m) => m.min(r_word),
            None => r_word,
        };
        if let Some(a) = self.trial_division(&n, limit) {
            return Ok(report(false, AksStep::TrialDivision, Some(r), Some(a.into())));
        }

        // Step 4
        if n <= r {
            return Ok(report(true, AksStep::SmallN, Some(r), None));
        }

        // Step 5
        let log = BigInt::from(log2_floor(&n)?);
        let bound = to_u64(&(totient(&r)? * &log * &log).sqrt(), "identity bound")?;
        debug!(%n, %r, bound, "Checking polynomial identities");
        match self.identity_witness(&n, &r, bound)? {
            Some(a) => Ok(report(false, AksStep::PolynomialIdentity, Some(r), Some(a.into()))),
            None => Ok(report(true, AksStep::PolynomialIdentity, Some(r), None)),
        }
    }

    /// Smallest `a` in `[2, limit]` that divides `n`.
    fn trial_division(&self, n: &BigInt, limit: u64) -> Option<u64> {
        let divides = |a: u64| (n % a).is_zero().then_some(a);
        if self.options.parallel {
            (2..=limit).into_par_iter().find_map_first(divides)
        } else {
            (2..=limit).find_map(divides)
        }
    }

    /// Smallest `a` in `[1, bound]` with `(x + a)^n ≢ x^(n mod r) + a` modulo `(n, x^r - 1)`.
    fn identity_witness(&self, n: &BigInt, r: &BigInt, bound: u64) -> AksResult<Option<u64>> {
        let check = |a: u64| -> Option<AksResult<u64>> {
            if a % PROGRESS_INTERVAL == 0 {
                info!(a, bound, "Checked AKS witnesses");
            }
            match identity_holds(n, r, a) {
                Ok(true) => None,
                Ok(false) => Some(Ok(a)),
                Err(e) => Some(Err(e)),
            }
        };
        let found = if self.options.parallel {
            (1..=bound).into_par_iter().find_map_first(check)
        } else {
            (1..=bound).find_map(check)
        };
        found.transpose()
    }
}

/// Checks `(x + a)^n ≡ x^(n mod r) + a` in `(Z/nZ)[x] / (x^r - 1)`.
fn identity_holds(n: &BigInt, r: &BigInt, a: u64) -> AksResult<bool> {
    let ctx = ModulusContext::with_modulus(n.clone())?;
    let modulus = Polynomial::cyclic_modulus(r.clone(), &ctx);
    let lhs = Polynomial::binomial(a, &ctx).pow(n, Some(&modulus), &ctx)?;
    let rhs = Polynomial::new(
        [Monomial::new(1, n % r, &ctx), Monomial::constant(a, &ctx)],
        &ctx,
    );
    Ok(lhs == rhs)
}

fn to_u64(value: &BigInt, what: &str) -> AksResult<u64> {
    value.to_u64().ok_or_else(|| AksError::OutOfRange {
        message: format!("{what} = {value} does not fit in 64 bits"),
    })
}

/// Deterministic primality test. `n <= 1` is composite.
pub fn aks_primality_test(n: &BigUint) -> AksResult<bool> {
    Ok(Aks::default().run(n)?.is_prime)
}
