// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur when working with domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Page size must be positive.
    InvalidPageSize {
        /// The invalid page size.
        size: u64,
    },
    /// Operation string is not a known audit operation.
    InvalidOperation(String),
    /// Resource type string is not a known resource type.
    InvalidResourceType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageSize { size } => {
                write!(f, "Invalid page size: {size}. Must be greater than 0")
            }
            Self::InvalidOperation(value) => write!(f, "Invalid operation: '{value}'"),
            Self::InvalidResourceType(value) => write!(f, "Invalid resource type: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
