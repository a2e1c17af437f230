//! Errors raised while showing a modal or binding its parameters.

use thiserror::Error;

/// Errors produced by the modal service and by components binding their inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    /// `show_named` was given a name that no component was registered under.
    #[error("no modal component registered under `{0}`")]
    UnknownComponent(String),

    /// A component required an input that the caller did not pass.
    #[error("missing required modal parameter `{0}`")]
    MissingParameter(String),

    /// A parameter exists but holds a value of another type.
    #[error("modal parameter `{name}` is not a `{expected}`")]
    ParameterType {
        name: String,
        expected: &'static str,
    },
}
