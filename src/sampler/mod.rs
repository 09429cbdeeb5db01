//! Uniform integer draws that honour mathematical interval notation.
//!
//! The glyph pair shifts the upper bound before the inclusive draw: an open
//! interval `(a, b)` draws from `[a, b - 1]`, a closed interval `[a, b]` from
//! `[a, b + 1]`, and anything else from `[a, b]`. Used with `a = 0` and
//! `b = stop - start` this covers every plausible answer to "how many integers
//! lie in the interval", including the correct one, so `(a, a + 1)` always
//! yields `a` while `[a, a]` yields `a` or `a + 1` with equal odds.

mod histogram;

pub use histogram::Histogram;

use thiserror::Error;

use crate::core::{interval::Interval, sampler::Sampler};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    #[error("invalid interval: maximum {maximum} is below minimum {minimum}")]
    InvalidInterval { minimum: i64, maximum: i64 },
    #[error("interval bounds overflow a 64-bit integer")]
    Overflow,
}

pub fn sample<S: Sampler + ?Sized>(
    upper_raw: i64,
    left: char,
    right: char,
    lower: i64,
    sampler: &mut S,
) -> Result<i64, SampleError> {
    sample_interval(&Interval::new(lower, upper_raw, left, right), sampler)
}

/// Lowest value and number of values a draw from `interval` can take.
///
/// The count is 0 only for a zero-width open interval such as `(2, 2)`.
pub fn draw_range(interval: &Interval) -> Result<(i64, i64), SampleError> {
    let minimum = interval.lower;
    let maximum = interval.effective_upper().ok_or(SampleError::Overflow)?;
    let count = maximum
        .checked_sub(minimum)
        .and_then(|width| width.checked_add(1))
        .ok_or(SampleError::Overflow)?;

    if count < 0 {
        return Err(SampleError::InvalidInterval { minimum, maximum });
    }
    Ok((minimum, count))
}

pub fn sample_interval<S: Sampler + ?Sized>(
    interval: &Interval,
    sampler: &mut S,
) -> Result<i64, SampleError> {
    let (minimum, count) = draw_range(interval)?;
    // zero-width open interval, e.g. (2, 2): nothing to draw from
    if count == 0 {
        return Ok(minimum);
    }

    let offset = (sampler.uniform_1d() * count as f64).floor() as i64;
    // float rounding may reach `count` for very wide ranges
    Ok(minimum + offset.clamp(0, count - 1))
}
