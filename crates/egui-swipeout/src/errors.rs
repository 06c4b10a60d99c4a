#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwipeoutError {
    #[error("threshold must be a positive number of pixels, got {0}")]
    InvalidThreshold(f32),
    #[error("vertical tolerance must be a non-negative number of pixels, got {0}")]
    InvalidTolerance(f32),
    #[error("elastic exponent must lie strictly between 0 and 1, got {0}")]
    InvalidExponent(f32),
    #[error("animation time must be a non-negative number of seconds, got {0}")]
    InvalidAnimationTime(f32),
    #[error("row height must be a positive number of pixels, got {0}")]
    InvalidRowHeight(f32),
}
