//! Terminal calculator
//!
//! Prompts for a number, an operator and a second number, then prints the
//! result. Input is read as whitespace-separated tokens, so all three values
//! may also be given on one line (`3 * 4`). The operator is a single
//! character; whatever follows it in the same token is the start of the
//! second number (`3 *4`).
//!
//! Results are printed like a C++ output stream's default formatting: six
//! significant digits, trailing zeros dropped, scientific notation for very
//! large or very small magnitudes.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context};

use crate::calc::{evaluate, Outcome};

struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> anyhow::Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected end of input"))
    }

    fn next_number(&mut self) -> anyhow::Result<f64> {
        let token = self.next_token()?;
        token
            .parse()
            .with_context(|| format!("not a number: {token}"))
    }

    fn next_char(&mut self) -> anyhow::Result<char> {
        let token = self.next_token()?;
        let mut chars = token.chars();
        let c = chars
            .next()
            .ok_or_else(|| anyhow!("unexpected end of input"))?;
        let rest = chars.as_str();
        if !rest.is_empty() {
            self.pending.push_front(rest.to_string());
        }
        Ok(c)
    }
}

pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(input);

    writeln!(output, "Basic Calculator")?;
    write!(output, "Enter first number: ")?;
    output.flush()?;
    let num1 = tokens.next_number()?;

    write!(output, "Enter operator (+, -, *, /): ")?;
    output.flush()?;
    let op = tokens.next_char()?;

    write!(output, "Enter second number: ")?;
    output.flush()?;
    let num2 = tokens.next_number()?;

    match evaluate(num1, op, num2) {
        Outcome::Success(value) => writeln!(output, "Result: {}", format_general(value))?,
        Outcome::Failure(message) => writeln!(output, "Error: {message}")?,
    }

    Ok(())
}

/// Formats `value` in `%g` style with six significant digits.
///
/// Scientific notation is used when the decimal exponent is below -5 or at
/// least 6; the exponent always has a sign and at least two digits.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target digits first gives the exponent after carry,
    // e.g. 999999.5 becomes 1.00000e6.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_fraction_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
