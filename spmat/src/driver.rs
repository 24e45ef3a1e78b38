//! Load, combine and save in one run

use std::io::Write;

use spmat_core::{DataType, MatrixElement};
use tracing::info;

use crate::{Result, RunConfig, TextCodec};

/// Execute a resolved run, printing the original status lines to `out`
///
/// Both inputs are loaded and the operation completes before the output
/// file is created, so a failed run never leaves a result file behind.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    match config.data_type {
        DataType::I32 => run_typed::<i32, W>(config, out),
        DataType::I64 => run_typed::<i64, W>(config, out),
    }
}

fn run_typed<T: MatrixElement, W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let lhs = TextCodec::load::<T, _>(&config.lhs)?;
    let rhs = TextCodec::load::<T, _>(&config.rhs)?;

    let result = config.op.apply(&lhs, &rhs)?;
    info!(
        op = %config.op,
        dtype = %T::data_type(),
        rows = result.nrows(),
        cols = result.ncols(),
        nnz = result.nnz(),
        "operation completed"
    );
    writeln!(out, "{}", config.op.completed_message())?;

    TextCodec::save(&result, &config.output)?;
    writeln!(out, "Result saved to {}", config.output.display())?;
    Ok(())
}
