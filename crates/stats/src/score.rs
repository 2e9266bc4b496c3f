// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate attendance score for a user's profile.

use crate::streak::{Streak, longest_streak};
use stagelog_domain::{AttendanceRecord, ConcertVisit};
use std::collections::HashSet;

/// Derived statistics over one user's attendance records.
///
/// Recomputed on every view render; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Number of distinct bands seen.
    pub unique_bands: usize,
    /// Number of distinct non-festival concerts attended.
    pub concerts: usize,
    /// Number of distinct festival shows attended.
    pub festivals: usize,
    /// The longest run of consecutive concert-going months, if any.
    pub longest_streak: Option<Streak>,
}

/// Deduplicates attendance rows to distinct concerts, first-seen order.
///
/// Attendance is one row per band seen, so a concert with three bands
/// appears three times in the input.
#[must_use]
pub fn unique_concerts(attendance: &[AttendanceRecord]) -> Vec<ConcertVisit> {
    let mut seen: HashSet<i64> = HashSet::new();
    attendance
        .iter()
        .filter(|record| seen.insert(record.concert.id))
        .map(|record| record.concert)
        .collect()
}

/// Computes the full score over one user's attendance records.
///
/// Empty input degrades to an all-zero score with no streak.
#[must_use]
pub fn compute_score(attendance: &[AttendanceRecord]) -> Score {
    let mut bands: HashSet<i64> = HashSet::new();
    for record in attendance {
        bands.insert(record.band.id);
    }

    let concerts = unique_concerts(attendance);
    let festivals = concerts.iter().filter(|c| c.is_festival).count();

    Score {
        unique_bands: bands.len(),
        concerts: concerts.len() - festivals,
        festivals,
        longest_streak: longest_streak(&concerts),
    }
}
