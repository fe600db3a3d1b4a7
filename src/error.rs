use thiserror::Error;

/// The only failure a benchmark run can hit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// A buffer could not be allocated. `elements` is the requested length.
    #[error("malloc failed")]
    Alloc {
        buffer:   &'static str,
        elements: usize,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
