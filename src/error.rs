//! Error types for Foo

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FooError>;

/// Main error type for Foo
#[derive(Debug, Error)]
pub enum FooError {
    #[error("Rasterizer bring-up failed: {0}")]
    EngineInit(#[from] freetype::Error),
}
