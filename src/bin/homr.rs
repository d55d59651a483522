//! Boundary-matrix reduction CLI
//!
//! Reads a sparse matrix file, reduces it (fully or for a bounded number of
//! rounds), and writes one of three output kinds: the lows array (default),
//! the persistence intervals, or the dense reduced matrix.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser};

use homr::io;
use homr::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "homr", version, about = "GF(2) boundary-matrix reduction")]
struct Cli {
    /// Input sparse matrix file
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Write the dense reduced matrix instead of the lows array
    #[arg(short = 'm', long = "dense-matrix", action = ArgAction::SetTrue,
          conflicts_with = "intervals")]
    dense_matrix: bool,

    /// Write the persistence intervals instead of the lows array
    #[arg(short = 'p', long = "persistence-intervals", action = ArgAction::SetTrue)]
    intervals: bool,

    /// Enable diagnostic output
    #[arg(short = 'd', long = "debug", action = ArgAction::SetTrue)]
    debug: bool,

    /// Maximum number of reduction rounds; negative means run to convergence
    #[arg(short = 'n', long = "iterations", default_value_t = -1, allow_hyphen_values = true)]
    iterations: i64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("homr: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let read_start = Instant::now();
    let (col_idxs, row_idxs, n) = io::read_sparse_matrix(&cli.input)?;
    let matrix = BoundaryMatrix::from_coo(&col_idxs, &row_idxs, n)?;
    println!(
        "Initial matrix has {} columns and {} nonzeroes",
        matrix.n(),
        matrix.nonzero_count()
    );
    if cli.debug {
        eprintln!("Read input file in {:.2?}", read_start.elapsed());
    }

    let reduce_start = Instant::now();
    let reduced = if cli.iterations >= 0 {
        let rounds = u32::try_from(cli.iterations).unwrap_or(u32::MAX);
        reduce_bounded(&matrix, rounds)?
    } else {
        reduce(&matrix)?
    };
    println!("Final number of nonzeroes is {}", reduced.nonzero_count());
    if cli.debug {
        eprintln!("Reduced in {:.2?}", reduce_start.elapsed());
        if cli.iterations >= 0 && !reduced.is_reduced() {
            eprintln!("Round budget exhausted before convergence");
        }
    }

    if cli.dense_matrix {
        io::write_dense_matrix(&cli.output, &reduced)?;
    } else if cli.intervals {
        io::write_intervals(&cli.output, &persistence_intervals(&reduced))?;
    } else {
        io::write_lows(&cli.output, &reduced.lows())?;
    }

    Ok(())
}
