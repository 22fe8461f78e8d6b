//! Command line shell around the calculator.
//!
//! Turns arguments into calculation requests and reports invalid input to
//! the user. The calculator itself never prints.

use crate::config::Config;
use crate::error::SubnetError;
use crate::models::SubnetResult;
use crate::output::print_results;
use crate::{try_calculate, try_calculate_parts};
use colored::Colorize;
use std::error::Error;
use std::io::BufRead;

pub const USAGE: &str = "usage: subnet-visualizer [CIDR ...] | --parts A B C D PREFIX | -";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// One or more `a.b.c.d/p` strings.
    Cidrs(Vec<String>),
    /// Octets and prefix given as separate fields.
    Parts([u32; 4], u32),
    /// Recalculate for each line read from stdin.
    Stdin,
}

fn parse_field(name: &str, value: &str) -> Result<u32, Box<dyn Error>> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("{name}: '{value}' is not a number").into())
}

/// Map command line arguments (without the program name) to a [`Request`].
pub fn parse_args(args: &[String], config: &Config) -> Result<Request, Box<dyn Error>> {
    match args {
        [] if config.interactive => Ok(Request::Stdin),
        [] => Ok(Request::Cidrs(vec![config.default_cidr.clone()])),
        [dash] if dash == "-" => Ok(Request::Stdin),
        [flag, rest @ ..] if flag == "--parts" => {
            if rest.len() != 5 {
                return Err(format!("--parts takes 5 values\n{USAGE}").into());
            }
            let octets = [
                parse_field("octet 1", &rest[0])?,
                parse_field("octet 2", &rest[1])?,
                parse_field("octet 3", &rest[2])?,
                parse_field("octet 4", &rest[3])?,
            ];
            Ok(Request::Parts(octets, parse_field("prefix", &rest[4])?))
        }
        [flag, ..] if flag == "-h" || flag == "--help" => Err(USAGE.into()),
        cidrs => Ok(Request::Cidrs(cidrs.to_vec())),
    }
}

/// Valid results plus the rejected inputs with the reason.
pub fn evaluate(inputs: &[String]) -> (Vec<SubnetResult>, Vec<(String, SubnetError)>) {
    let mut results = Vec::new();
    let mut rejected = Vec::new();
    for input in inputs {
        match try_calculate(input) {
            Ok(r) => results.push(r),
            Err(e) => rejected.push((input.clone(), e)),
        }
    }
    (results, rejected)
}

fn report_invalid(input: &str, e: &SubnetError) {
    log::warn!("Invalid input '{input}': {e}");
    eprintln!(
        "{} {e}\nPlease enter a valid IPv4 address in CIDR notation (e.g., 192.168.1.0/24)",
        "invalid:".red()
    );
}

/// Run a request; returns the number of rejected inputs.
pub fn run(request: Request, config: &Config) -> Result<usize, Box<dyn Error>> {
    match request {
        Request::Cidrs(inputs) => {
            let (results, rejected) = evaluate(&inputs);
            for (input, e) in &rejected {
                report_invalid(input, e);
            }
            print_results(&results, config.output)?;
            Ok(rejected.len())
        }
        Request::Parts(octets, prefix) => match try_calculate_parts(octets, prefix) {
            Ok(r) => {
                print_results(&[r], config.output)?;
                Ok(0)
            }
            Err(e) => {
                report_invalid(&format!("{octets:?}/{prefix}"), &e);
                Ok(1)
            }
        },
        Request::Stdin => run_lines(std::io::stdin().lock(), config),
    }
}

/// Recalculate for each line of `reader`; returns the number of rejected lines.
///
/// Blank lines are skipped. A line that is not UTF-8 is rejected like any
/// other malformed input and reading carries on.
pub fn run_lines<R: BufRead>(reader: R, config: &Config) -> Result<usize, Box<dyn Error>> {
    let mut failed = 0;
    for raw in reader.split(b'\n') {
        let raw = raw?;
        let result = match String::from_utf8(raw) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                try_calculate(&line).map_err(|e| (line, e))
            }
            Err(e) => {
                let line = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                Err((line.clone(), SubnetError::Format { input: line }))
            }
        };
        match result {
            Ok(r) => print_results(&[r], config.output)?,
            Err((line, e)) => {
                report_invalid(line.trim(), &e);
                failed += 1;
            }
        }
    }
    Ok(failed)
}
