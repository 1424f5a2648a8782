use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use qrect::prelude::*;
use qrect::rand::rngs::StdRng;
use qrect::rand::SeedableRng;
use qrect::rectangle::pairings;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DrawFormat {
    /// Text diagram
    Text,
    /// OpenQASM 2.0
    Qasm,
}

/// Decide whether four side lengths can form a rectangle with a simulated swap test.
///
/// Prints 1 for a rectangle and 0 otherwise.
#[derive(Debug, Parser)]
#[command(name = "qrect", version)]
struct Args {
    /// Side lengths
    #[arg(value_name = "LENGTH", num_args = 4, required = true)]
    lengths: Vec<Length>,

    /// Fixed number of qubits per length register (default: fit the largest length)
    #[arg(long, value_name = "BITS")]
    bits: Option<usize>,

    /// Comparison tolerance
    #[arg(long, default_value_t = qrect::config::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Print the swap-test probability of every pairing
    #[arg(long)]
    probs: bool,

    /// Print the swap-test circuit of the first pairing
    #[arg(long, value_enum)]
    draw: Option<DrawFormat>,

    /// Also estimate every probability from this many sampled measurements
    #[arg(long, value_name = "N")]
    shots: Option<usize>,

    /// Seed for sampled measurements
    #[arg(long, requires = "shots")]
    seed: Option<u64>,
}

fn run(args: &Args) -> RectangleResult<()> {
    let mut config = RectangleConfig::default().with_tolerance(args.tolerance);
    if let Some(bits) = args.bits {
        config = config.with_register_bits(bits);
    }
    let checker = RectangleChecker::<f64>::new(config)?;
    let lengths = [
        args.lengths[0],
        args.lengths[1],
        args.lengths[2],
        args.lengths[3],
    ];

    if let Some(format) = args.draw {
        let comparator = checker.comparator_for(lengths)?;
        let circuit = comparator.circuit()?;
        let (left, right) = pairings(lengths)[0];
        println!("Swap test of {} vs {}:", left, right);
        match format {
            DrawFormat::Text => print!("{}", circuit.draw()),
            DrawFormat::Qasm => print!("{}", circuit.to_openqasm()),
        }
    }

    let verdict = if args.probs {
        let report = checker.report(lengths[0], lengths[1], lengths[2], lengths[3])?;
        println!("{}", report);
        report.is_rectangle
    } else {
        checker.is_rectangle(lengths[0], lengths[1], lengths[2], lengths[3])?
    };

    if let Some(shots) = args.shots {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let report = checker.sampled_report(lengths, shots, &mut rng)?;
        println!("Sampled over {} shots:", shots);
        println!("{}", report);
    }

    println!("{}", u8::from(verdict));
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_internal() {
                tracing::error!(%err, "internal consistency failure");
            }
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
