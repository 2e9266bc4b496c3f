// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Longest-streak detection over attended concerts.
//!
//! A streak is a maximal run of consecutive calendar months each containing
//! at least one attended concert. Granularity is monthly: a month counts
//! once no matter how many concerts it holds, and December rolls over into
//! January of the next year.

use chrono::{Datelike, NaiveDate, TimeDelta};
use stagelog_domain::ConcertVisit;

/// Average month length used to convert a streak duration into a month
/// count for display. An approximation, not a calendar-exact count.
const AVG_MONTH_MS: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 30.44;

/// A run of consecutive concert-going months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    /// Date of the first concert in the run.
    pub start: NaiveDate,
    /// Date of the last concert in the run.
    pub end: NaiveDate,
}

impl Streak {
    /// Wall-clock span of the streak.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Displayed span in months: `ceil(duration / avg month) + 1`, so a
    /// single-concert streak spans 1 month.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn month_span(&self) -> u32 {
        let duration_ms = self.duration().num_milliseconds() as f64;
        (duration_ms / AVG_MONTH_MS).ceil() as u32 + 1
    }
}

fn is_same_month(end: NaiveDate, date: NaiveDate) -> bool {
    end.year() == date.year() && end.month() == date.month()
}

fn is_previous_month(end: NaiveDate, date: NaiveDate) -> bool {
    (end.year() == date.year() && end.month() + 1 == date.month())
        || (end.year() + 1 == date.year() && end.month() == 12 && date.month() == 1)
}

/// Finds the longest streak over a set of unique concerts.
///
/// Concerts are scanned in ascending date order. Each date extends the
/// first open streak whose end lies in the same or the immediately
/// preceding calendar month; otherwise it opens a new streak. The winner
/// maximizes wall-clock duration; on a tie the earliest-opened streak wins,
/// so the result is deterministic.
///
/// Returns `None` for empty input.
#[must_use]
pub fn longest_streak(concerts: &[ConcertVisit]) -> Option<Streak> {
    let mut sorted: Vec<&ConcertVisit> = concerts.iter().collect();
    sorted.sort_by_key(|concert| concert.date_start);

    let mut streaks: Vec<Streak> = Vec::new();
    for concert in sorted {
        let date = concert.date_start;
        let open = streaks
            .iter_mut()
            .find(|streak| is_same_month(streak.end, date) || is_previous_month(streak.end, date));

        if let Some(streak) = open {
            streak.end = date;
        } else {
            streaks.push(Streak {
                start: date,
                end: date,
            });
        }
    }

    streaks
        .into_iter()
        .reduce(|best, streak| if streak.duration() > best.duration() { streak } else { best })
}
