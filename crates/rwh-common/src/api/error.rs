// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

/// Precondition violations raised before any numeric work starts.
///
/// Running out of iteration rounds is not represented here; it is reported
/// through the result's `converged` flag.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum RwhError {
    #[error("Argument '{arg}' must not be empty")]
    EmptyInput { arg: String },

    #[error("Argument '{arg}' is invalid{}: {message}", fmt_index(.index))]
    InvalidArgument {
        arg: String,
        index: Option<usize>,
        message: String,
    },

    #[error("Parameter '{param}' is invalid: {message}")]
    InvalidConfig { param: String, message: String },
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

impl RwhError {
    pub fn empty(arg: impl Into<String>) -> Self {
        Self::EmptyInput { arg: arg.into() }
    }

    pub fn invalid_argument(
        arg: impl Into<String>,
        index: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            arg: arg.into(),
            index,
            message: message.into(),
        }
    }

    pub fn invalid_config(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Name of the offending argument or parameter.
    pub fn arg(&self) -> &str {
        match self {
            Self::EmptyInput { arg } | Self::InvalidArgument { arg, .. } => arg,
            Self::InvalidConfig { param, .. } => param,
        }
    }

    /// Position of the offending element, when the error refers to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidArgument { index, .. } => *index,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RwhError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_argument_and_index() {
        let err = RwhError::invalid_argument("edges", Some(4), "expected 2 elements, got 3");
        assert_eq!(
            err.to_string(),
            "Argument 'edges' is invalid at index 4: expected 2 elements, got 3"
        );
        assert_eq!(err.arg(), "edges");
        assert_eq!(err.index(), Some(4));

        let err = RwhError::invalid_argument("weighted", None, "expected a boolean");
        assert_eq!(
            err.to_string(),
            "Argument 'weighted' is invalid: expected a boolean"
        );

        let err = RwhError::empty("edges");
        assert_eq!(err.to_string(), "Argument 'edges' must not be empty");
        assert_eq!(err.index(), None);
    }
}
