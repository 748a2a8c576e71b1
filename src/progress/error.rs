//! Error type for the progression engine

/// Contract violations the engine refuses to compute through
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("max hearts must be at least 1, got {0}")]
    InvalidMaxHearts(u32),

    #[error("no hearts left to lose")]
    OutOfHearts,

    #[error("base points must be at least 1")]
    InvalidBasePoints,
}
