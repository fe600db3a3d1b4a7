//! Microbenchmarks for raw hardware behavior.
//!
//! Three independent workloads share this crate:
//!
//! - [`seq_scan`]: repeated sequential sums over a flat array (bandwidth).
//! - [`pointer_chase`]: a walk over a shuffled index-linked list (latency).
//! - [`matmul`]: an i-k-j square matrix multiply (compute and cache reuse).
//!
//! Each one allocates its buffers up front, runs a fixed amount of work and
//! reduces the result to a single checksum so the optimizer cannot drop it.

pub mod buffer;
pub mod cli;
pub mod error;
pub mod matmul;
pub mod pointer_chase;
pub mod reporting;
pub mod rng;
pub mod runner;
pub mod seq_scan;

pub use error::{BenchError, Result};
pub use reporting::Report;
