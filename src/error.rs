//! Errors raised at the mutation and evaluation boundaries. All of them
//! surface synchronously and leave the value that was being mutated
//! untouched.

use crate::color::Component;

/// The error type for fallible color and gradient operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The argument is neither a usable plain number nor a percentage
    /// recognized for the channel.
    #[error("{field}: expected a finite number or a percentage")]
    TypeMismatch {
        /// The channel the argument was supplied for.
        field: &'static str,
    },

    /// A finite number outside the channel's declared domain.
    #[error("{field}: {value} is out of range")]
    Range {
        /// The channel the argument was supplied for.
        field: &'static str,
        /// The offending value.
        value: Component,
    },

    /// A gradient or scale is in a configuration that cannot be evaluated.
    #[error("{0}")]
    Config(&'static str),
}
