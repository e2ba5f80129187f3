use thiserror::Error;

/// Top-level error type for the clipwin kernel.
#[derive(Debug, Error)]
pub enum ClipwinError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while reading the plain-text geometry formats.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected {expected} at token {index}, got {token:?}")]
    Malformed {
        expected: &'static str,
        index: usize,
        token: String,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised when loading geometry into a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("polygon requires at least 3 vertices, got {0}")]
    InsufficientVertices(usize),
}

/// Convenience type alias for results using [`ClipwinError`].
pub type Result<T> = std::result::Result<T, ClipwinError>;
