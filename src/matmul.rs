use std::hint::black_box;

use tracing::debug;

use crate::buffer::allocate_filled;
use crate::cli::MatmulArgs;
use crate::error::{BenchError, Result};
use crate::reporting::{Report, format_bytes};

/// Square row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n:    usize,
    data: Box<[f64]>,
}

impl Matrix {
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        let Some(len) = n.checked_mul(n) else {
            debug!(dim = n, "matrix element count overflows usize");
            return Err(BenchError::Alloc {
                buffer:   "matrix",
                elements: n.saturating_mul(n),
            });
        };
        let data = allocate_filled("matrix", len, |idx| f(idx / n, idx % n))?;
        Ok(Self { n, data })
    }

    pub fn zeros(n: usize) -> Result<Self> {
        Self::from_fn(n, |_, _| 0.0)
    }

    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let n = self.n;
        &mut self.data[i * n..(i + 1) * n]
    }

    /// Sum of `C[i][i mod n]` over all rows.
    pub fn diagonal_sum(&self) -> f64 {
        let mut checksum = 0.0;
        for i in 0..self.n {
            checksum += self.get(i, i % self.n);
        }
        checksum
    }
}

/// `c += a * b` with the i-k-j loop order.
///
/// The inner loop walks a row of `b` and a row of `c` together, so both are
/// read sequentially.
///
/// # Panics
///
/// Panics if the three matrices do not share the same dimension.
pub fn multiply_into(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    assert_eq!(a.n, b.n, "matrix dimensions differ");
    assert_eq!(a.n, c.n, "matrix dimensions differ");

    for i in 0..a.n {
        for k in 0..a.n {
            let aik = a.get(i, k);
            let b_row = b.row(k);
            let c_row = c.row_mut(i);
            for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
}

/// A with `A[i][j] = (i + j) * 0.5`.
pub fn input_matrix(n: usize) -> Result<Matrix> {
    Matrix::from_fn(n, |i, j| (i + j) as f64 * 0.5)
}

pub fn run(args: &MatmulArgs) -> Result<Report> {
    let n = args.dim;
    debug!(
        dim = n,
        per_matrix = %format_bytes(n.saturating_mul(n).saturating_mul(std::mem::size_of::<f64>())),
        "allocating matrices"
    );

    let a = input_matrix(n)?;
    let b = Matrix::identity(n)?;
    let mut c = Matrix::zeros(n)?;

    multiply_into(black_box(&a), black_box(&b), &mut c);

    let checksum = black_box(c.diagonal_sum());
    Ok(Report::Checksum(checksum))
}
