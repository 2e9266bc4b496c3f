// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur in selection and reorder operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// A drag index is outside the list.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The list length.
        len: usize,
    },
    /// The widget was not built reorderable.
    NotReorderable,
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} is out of bounds for a list of length {len}")
            }
            Self::NotReorderable => {
                write!(f, "This selection is not reorderable")
            }
        }
    }
}

impl std::error::Error for SelectError {}
