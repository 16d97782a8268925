use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarqueeError {
    #[error("marquee needs at least one item")]
    NoItems,
    #[error("item {index} has unusable geometry (width must be finite and non-negative)")]
    InvalidGeometry { index: usize },
    #[error("strip width must be finite and positive, got {0}")]
    InvalidStripWidth(f32),
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}
