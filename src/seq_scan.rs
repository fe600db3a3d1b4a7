use std::hint::black_box;

use tracing::debug;

use crate::buffer::allocate_filled;
use crate::cli::SeqScanArgs;
use crate::error::Result;
use crate::reporting::Report;

/// Allocates the scan buffer with `a[i] = i mod 256`.
pub fn fill(len: usize) -> Result<Box<[u32]>> {
    allocate_filled("scan", len, |i| (i & 0xFF) as u32)
}

/// Sums every element across `repeat` full passes.
#[inline(always)]
pub fn scan(buffer: &[u32], repeat: usize) -> u64 {
    let mut sum = 0u64;
    for _ in 0..repeat {
        for &value in buffer {
            sum = sum.wrapping_add(value as u64);
        }
        sum = black_box(sum);
    }
    sum
}

/// Closed form of `scan(&fill(n)?, repeat)`.
pub fn expected_sum(n: usize, repeat: usize) -> u64 {
    let n = n as u64;
    let full_blocks = n / 256;
    let tail = n % 256;
    // 0 + 1 + ... + 255
    let per_block = 255 * 256 / 2;
    let per_pass = full_blocks * per_block + tail * tail.saturating_sub(1) / 2;
    per_pass.wrapping_mul(repeat as u64)
}

pub fn run(args: &SeqScanArgs) -> Result<Report> {
    let buffer = fill(args.elements)?;
    debug!(elements = args.elements, repeat = args.repeat, "scan buffer filled");

    let sum = scan(black_box(&buffer), args.repeat);
    Ok(Report::Sum(black_box(sum)))
}
