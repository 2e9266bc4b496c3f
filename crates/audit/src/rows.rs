// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tolerant parsing of raw audit-log rows.
//!
//! The contribution view is read-only; one malformed row must never blank
//! the whole page. Rows that fail to deserialize are skipped, logged, and
//! surfaced per-row so the caller can decide whether to show them.

use serde_json::Value;
use stagelog_domain::ContributionRecord;
use thiserror::Error;

/// A raw row that could not be turned into a [`ContributionRecord`].
#[derive(Debug, Error)]
pub enum RowError {
    /// The row failed deserialization (missing timestamp, unknown operation
    /// or resource type string, non-object state, ...).
    #[error("Contribution row {index} is malformed: {source}")]
    Malformed {
        /// Position of the row in the fetched batch.
        index: usize,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}

impl RowError {
    /// Position of the offending row in the fetched batch.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Malformed { index, .. } => *index,
        }
    }
}

/// The outcome of one parsing pass over a fetched batch.
#[derive(Debug)]
pub struct ParsedRows {
    /// Rows that parsed cleanly, in input order.
    pub records: Vec<ContributionRecord>,
    /// Rows that were skipped, in input order.
    pub skipped: Vec<RowError>,
}

/// Parses a batch of raw audit-log rows, skipping malformed ones.
///
/// Never fails as a whole: each malformed row is recorded in
/// [`ParsedRows::skipped`] and logged at warn level, and the pass continues.
#[must_use]
pub fn parse_rows(rows: Vec<Value>) -> ParsedRows {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<ContributionRecord>(row) {
            Ok(record) => records.push(record),
            Err(source) => {
                tracing::warn!(index, error = %source, "skipping malformed contribution row");
                skipped.push(RowError::Malformed { index, source });
            }
        }
    }

    ParsedRows { records, skipped }
}
