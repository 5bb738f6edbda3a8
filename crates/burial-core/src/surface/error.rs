use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("No object loaded under label '{0}'")]
    UnknownLabel(String),

    #[error("An object is already loaded under label '{0}'")]
    DuplicateLabel(String),

    #[error("Object '{0}' contains no atoms")]
    EmptyObject(String),

    #[error("Combine requires at least one source label")]
    EmptyCombine,
}
