// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row-window computation for paginated catalog queries.

use crate::error::DomainError;

/// Computes the inclusive 0-based row window for a page.
///
/// `from = page * page_size`, `to = from + page_size - 1`. The window is
/// handed to the backend's range query verbatim.
///
/// # Errors
///
/// Returns an error if `page_size` is zero. Invalid input is never
/// silently clamped.
pub const fn page_range(page: u64, page_size: u64) -> Result<(u64, u64), DomainError> {
    if page_size == 0 {
        return Err(DomainError::InvalidPageSize { size: page_size });
    }

    let from = page * page_size;
    Ok((from, from + page_size - 1))
}
