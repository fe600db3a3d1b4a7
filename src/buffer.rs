use tracing::debug;

use crate::error::{BenchError, Result};
use crate::reporting::format_bytes;

/// Allocates `len` elements and fills slot `i` with `fill(i)`.
///
/// Allocation goes through `try_reserve_exact`, so an oversized request
/// (including one whose byte size overflows `usize`) comes back as
/// [`BenchError::Alloc`] instead of aborting the process.
pub fn allocate_filled<T>(
    buffer: &'static str,
    len: usize,
    mut fill: impl FnMut(usize) -> T,
) -> Result<Box<[T]>> {
    let mut out = allocate_vec(buffer, len)?;
    for i in 0..len {
        out.push(fill(i));
    }
    Ok(out.into_boxed_slice())
}

/// Reserves room for exactly `len` elements without initializing them.
pub fn allocate_vec<T>(buffer: &'static str, len: usize) -> Result<Vec<T>> {
    let mut out = Vec::new();
    if out.try_reserve_exact(len).is_err() {
        debug!(buffer, elements = len, "allocation refused");
        return Err(BenchError::Alloc {
            buffer,
            elements: len,
        });
    }

    debug!(
        buffer,
        elements = len,
        size = %format_bytes(len.saturating_mul(std::mem::size_of::<T>())),
        "allocated"
    );
    Ok(out)
}
