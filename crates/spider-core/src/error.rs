use thiserror::Error;

/// Errors produced while applying string overrides to a [`crate::FieldConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid number `{value}` for `{key}`")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}` must be greater than zero, got {value}")]
    NotPositive { key: String, value: f32 },
    #[error("unknown connection strategy `{0}` (expected all-pairs, grid or auto)")]
    UnknownStrategy(String),
}
