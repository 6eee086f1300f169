//! Flat big-endian binary form: `[i32 count]` followed by `count` pairs of
//! `[f64 x][f64 y]`.

use std::io::{
    Read,
    Write
};

use tracing::debug;

use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

pub fn write_points<F, W>(function: &F, out: &mut W) -> Result<(), FunctionError>
    where F: TabulatedFunction + ?Sized,
          W: Write {
    let count = i32::try_from(function.points_count())
        .map_err(|_| FunctionError::MalformedStream(format!("{} points do not fit a 32-bit count", function.points_count())))?;
    out.write_all(&count.to_be_bytes())?;
    for point in function.iter() {
        out.write_all(&point.x().to_be_bytes())?;
        out.write_all(&point.y().to_be_bytes())?;
    }
    out.flush()?;
    debug!(count, "binary function written");
    Ok(())
}

/// Reads the raw points; ordering is checked by whichever constructor
/// receives them.
pub fn read_points<R>(input: &mut R) -> Result<Vec<FunctionPoint>, FunctionError>
    where R: Read {
    let mut count_bytes = [0u8; 4];
    input.read_exact(&mut count_bytes)?;
    let count = i32::from_be_bytes(count_bytes);
    let count = usize::try_from(count)
        .map_err(|_| FunctionError::MalformedStream(format!("negative point count {}", count)))?;

    let mut points = Vec::with_capacity(count.min(1 << 16));
    let mut x_bytes = [0u8; 8];
    let mut y_bytes = [0u8; 8];
    for _ in 0..count {
        input.read_exact(&mut x_bytes)?;
        input.read_exact(&mut y_bytes)?;
        points.push(FunctionPoint::new(f64::from_be_bytes(x_bytes), f64::from_be_bytes(y_bytes)));
    }
    debug!(count, "binary function read");
    Ok(points)
}
