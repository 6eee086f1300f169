//! Whitespace separated decimal form: `"<count> x0 y0 x1 y1 ... "`.

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
    write!(out, "{} ", function.points_count())?;
    for point in function.iter() {
        write!(out, "{} {} ", point.x(), point.y())?;
    }
    out.flush()?;
    debug!(count = function.points_count(), "text function written");
    Ok(())
}

fn next_number<'a, I>(tokens: &mut I, what: &str) -> Result<f64, FunctionError>
    where I: Iterator<Item = &'a str> {
    let token = tokens
        .next()
        .ok_or_else(|| FunctionError::MalformedStream(format!("stream ended while expecting {}", what)))?;
    token
        .parse::<f64>()
        .map_err(|_| FunctionError::MalformedStream(format!("expected {}, found '{}'", what, token)))
}

/// Parses exactly `1 + 2 * count` numeric tokens.
pub fn read_points<R>(input: &mut R) -> Result<Vec<FunctionPoint>, FunctionError>
    where R: Read {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let raw_count = next_number(&mut tokens, "point count")?;
    if !(raw_count >= 0.0) || raw_count.fract() != 0.0 || raw_count > i32::MAX as f64 {
        return Err(FunctionError::MalformedStream(format!("invalid point count {}", raw_count)));
    }
    let count = raw_count as usize;

    let mut points = Vec::with_capacity(count.min(1 << 16));
    for i in 0..count {
        let x = next_number(&mut tokens, &format!("x of point {}", i))?;
        let y = next_number(&mut tokens, &format!("y of point {}", i))?;
        points.push(FunctionPoint::new(x, y));
    }
    if let Some(extra) = tokens.next() {
        return Err(FunctionError::MalformedStream(format!("unexpected trailing token '{}'", extra)));
    }
    debug!(count, "text function read");
    Ok(points)
}
