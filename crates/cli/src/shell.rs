// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::commands::Settings;
use anyhow::{bail, Context, Result};
use num_bigint::{BigInt, BigUint};
use polylib_polynomial::ModulusContext;
use std::io::{BufRead, Write};
use tracing::debug;

const MANUAL: &str = "\
~~Arguments in <angle brackets> are required. Arguments in [square brackets] are optional~~
Expanding polynomials to some power: expand, <polynomial>, <nonnegative integer>, [polynomial mod]
Apply polynomial modulus to polynomial: polymod, <polynomial>, <polynomial mod>
Setting the modulus: mod, <integer greater than 1>
Removing the modulus: remove mod
Testing primality: aks <integer>
Exiting: exit
Exiting: end
View examples of various commands: examples
Recall the list of commands: commands";

const EXAMPLES: [&str; 5] = [
    "expand, x + 1, 5",
    "expand, x + 1, 11, x^4 - 1",
    "polymod, 5x^9 + 3x^8 + 7x^3, x^2 - 1",
    "mod, 17",
    "aks 61",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Exit,
}

/// An interactive session. The session owns its arithmetic context; `mod` and
/// `remove mod` replace it for the commands that follow.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[cfg(test)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Evaluates one line of input.
    pub fn handle(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim().to_lowercase();
        debug!(%line, "shell command");

        match line.as_str() {
            "" => return Ok(Reply::Output(String::new())),
            "exit" | "end" => return Ok(Reply::Exit),
            "commands" => return Ok(Reply::Output(MANUAL.to_string())),
            "examples" => return self.examples().map(Reply::Output),
            "remove mod" => {
                self.set_context(ModulusContext::integers());
                return Ok(Reply::Output("Modulus removed".to_string()));
            }
            _ => {}
        }

        let output = if let Some(rest) = line.strip_prefix("polymod") {
            match arguments(rest).as_slice() {
                [poly, modulus] => self.settings.polymod(poly, modulus)?,
                _ => bail!("Usage: polymod, <polynomial>, <polynomial mod>"),
            }
        } else if let Some(rest) = line.strip_prefix("expand") {
            match arguments(rest).as_slice() {
                [poly, exponent] => self.settings.expand(poly, exponent, None)?,
                [poly, exponent, modulus] => self.settings.expand(poly, exponent, Some(*modulus))?,
                _ => bail!("Usage: expand, <polynomial>, <nonnegative integer>, [polynomial mod]"),
            }
        } else if let Some(rest) = line.strip_prefix("mod") {
            let value = rest.replace(',', " ");
            let modulus: BigInt = value
                .trim()
                .parse()
                .context("Usage: mod <n>, where n is an integer greater than 1")?;
            if modulus <= BigInt::from(1) {
                bail!("Modulus must be greater than 1.");
            }
            self.set_context(ModulusContext::with_modulus(modulus.clone())?);
            format!("Modulus set to {modulus}")
        } else if let Some(rest) = line.strip_prefix("aks") {
            let n: BigUint = rest
                .replace(',', " ")
                .trim()
                .parse()
                .context("Usage: aks <n>, where n is a nonnegative integer")?;
            self.settings.aks(&n)?
        } else {
            bail!("Unknown command '{line}'. Type 'commands' to list the commands.");
        };

        Ok(Reply::Output(output))
    }

    /// Runs the session until `exit`, `end` or the end of `input`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        writeln!(output, "Start of session. Type 'exit' or 'end' to end session.")?;
        writeln!(output, "Commands:\n{MANUAL}")?;
        write!(output, ">> ")?;
        output.flush()?;

        for line in input.lines() {
            match self.handle(&line?) {
                Ok(Reply::Exit) => return Ok(()),
                Ok(Reply::Output(text)) if text.is_empty() => {}
                Ok(Reply::Output(text)) => writeln!(output, "{text}")?,
                Err(err) => writeln!(output, "Error: {err:#}")?,
            }
            write!(output, ">> ")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Keeps the sign and safety options of the current context.
    fn set_context(&mut self, ctx: ModulusContext) {
        let current = &self.settings.ctx;
        self.settings.ctx = ctx
            .ignore_sign(current.ignores_sign())
            .safety_checks(current.has_safety_checks());
    }

    /// Evaluates each example on a copy of this session.
    fn examples(&self) -> Result<String> {
        let mut text = String::new();
        for example in EXAMPLES {
            let result = match self.clone().handle(example)? {
                Reply::Output(result) => result,
                Reply::Exit => String::new(),
            };
            text.push_str(&format!("{example}\n{result}\n\n"));
        }
        Ok(text.trim_end().to_string())
    }
}

/// Splits `, a, b, c` into trimmed, non-empty arguments.
fn arguments(rest: &str) -> Vec<&str> {
    rest.split(',')
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .collect()
}
