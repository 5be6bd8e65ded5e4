//! Evaluates realnum decimals and inspects the binary packing of fixed-width
//! integers from the command line.

#[macro_use]
extern crate log;

mod expr;

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use realnum::{
    encoded_size, from_hex, from_raw, to_hex, to_raw_vec, Decimal128, FixedWidth, Int128, Int16,
    Int256, Int32, Int512, Int64, Int8, RealError, Uint128, Uint16, Uint256, Uint32, Uint512,
    Uint64, Uint8,
};

use crate::expr::{Expr, Op};

#[derive(Parser)]
#[clap(about, version)]
/// Evaluate decimals and inspect packed integers
struct Opts {
    #[clap(long, short, global = true)]
    /// Print intermediate values on stderr
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply an operator (+ - x * /) to two decimals
    Calc {
        #[clap(allow_hyphen_values = true)]
        lhs: String,
        #[clap(allow_hyphen_values = true)]
        op: String,
        #[clap(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Pack an integer literal (decimal or 0x hex) into its little endian bytes
    Pack {
        #[clap(flatten)]
        width: Width,
        #[clap(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode little endian hex bytes into an integer
    Unpack {
        #[clap(flatten)]
        width: Width,
        hex: String,
    },
    /// Print each decimal or LHS<op>RHS expression, marking the ones that fail
    Dump {
        #[clap(required = true, allow_hyphen_values = true)]
        exprs: Vec<String>,
    },
}

#[derive(Args)]
struct Width {
    #[clap(long)]
    /// Integer width in bits: 8, 16, 32, 64, 128, 256 or 512
    bits: usize,

    #[clap(long)]
    /// Use two's complement signed integers
    signed: bool,
}

/// Calls `$func::<T>` where `T` is the integer type matching the width.
macro_rules! dispatch_width {
    ($width:expr, $func:ident($($arg:expr),*)) => {
        match ($width.bits, $width.signed) {
            (8, false) => $func::<Uint8>($($arg),*),
            (16, false) => $func::<Uint16>($($arg),*),
            (32, false) => $func::<Uint32>($($arg),*),
            (64, false) => $func::<Uint64>($($arg),*),
            (128, false) => $func::<Uint128>($($arg),*),
            (256, false) => $func::<Uint256>($($arg),*),
            (512, false) => $func::<Uint512>($($arg),*),
            (8, true) => $func::<Int8>($($arg),*),
            (16, true) => $func::<Int16>($($arg),*),
            (32, true) => $func::<Int32>($($arg),*),
            (64, true) => $func::<Int64>($($arg),*),
            (128, true) => $func::<Int128>($($arg),*),
            (256, true) => $func::<Int256>($($arg),*),
            (512, true) => $func::<Int512>($($arg),*),
            (bits, _) => bail!(
                "Unsupported bit width {bits}, expected one of 8, 16, 32, 64, 128, 256, 512"
            ),
        }
    };
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .without_timestamps()
        .with_level(level)
        .env()
        .init()?;

    match opts.command {
        Command::Calc { lhs, op, rhs } => {
            info!("Calculating {lhs} {op} {rhs}");
            let op = Op::from_str(&op)?;
            let lhs = Decimal128::from_str(&lhs).context("error parsing left operand")?;
            let rhs = Decimal128::from_str(&rhs).context("error parsing right operand")?;
            let result = op.apply(lhs, rhs)?;
            println!("{result}");
        }
        Command::Pack { width, value } => {
            info!("Packing {value} into {} bits", width.bits);
            let packed = dispatch_width!(width, pack(&value))?;
            // the width is known to be valid once dispatch succeeded
            debug!("Pack size: {} bytes", encoded_size(width.bits));
            println!("{}", to_hex(packed));
        }
        Command::Unpack { width, hex } => {
            info!("Unpacking {hex} as {} bits", width.bits);
            let hex = hex.strip_prefix("0x").unwrap_or(&hex);
            let bytes = from_hex(hex).context("error reading hex input")?;
            let value = dispatch_width!(width, unpack(&bytes))?;
            println!("{value}");
        }
        Command::Dump { exprs } => {
            info!("Dumping {} expressions", exprs.len());
            for expr in &exprs {
                match Expr::parse(expr).evaluate() {
                    Ok(value) => println!("{expr} = {value}"),
                    Err(e) => println!("{expr} = <unprintable: {e}>"),
                }
            }
        }
    }

    Ok(())
}

fn pack<T>(value: &str) -> anyhow::Result<Vec<u8>>
where
    T: FixedWidth + FromStr<Err = RealError>,
{
    let parsed = T::from_str(value).with_context(|| format!("error parsing '{value}'"))?;
    Ok(to_raw_vec(&parsed))
}

fn unpack<T>(bytes: &[u8]) -> anyhow::Result<String>
where
    T: FixedWidth + Display,
{
    let value = from_raw::<T>(bytes)?;
    Ok(value.to_string())
}
