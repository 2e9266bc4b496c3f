// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Two-level grouping of contribution records for display.
//!
//! Records are grouped first by formatted calendar date, then by the
//! composite key {timestamp, user, resource type, resource id}, so that a
//! batch edit (one click touching several rows) renders as one entry.
//!
//! Both levels preserve first-seen order. The caller hands records already
//! sorted by timestamp descending; this module never re-sorts.

use chrono::{DateTime, Utc};
use stagelog_domain::{ContributionRecord, ResourceType};

/// Contributions sharing one exact {timestamp, user, resource} key.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGroup {
    /// The shared timestamp. Key equality is at millisecond precision.
    pub timestamp: DateTime<Utc>,
    /// The shared contributing user, if known.
    pub user_id: Option<String>,
    /// The shared resource type.
    pub resource_type: ResourceType,
    /// The shared resource ID, if any.
    pub resource_id: Option<i64>,
    /// The records in this group, in input order. Never empty.
    pub items: Vec<ContributionRecord>,
}

impl TimeGroup {
    fn matches(&self, record: &ContributionRecord) -> bool {
        self.timestamp.timestamp_millis() == record.timestamp.timestamp_millis()
            && self.user_id == record.user_id
            && self.resource_type == record.resource_type
            && self.resource_id == record.resource_id
    }
}

/// All contributions of one calendar day, as labelled by the formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    /// The formatted date label shared by every record below.
    pub date: String,
    /// The time groups of this day, in first-seen order. Never empty.
    pub items: Vec<TimeGroup>,
}

/// Groups records by formatted date, then by composite time key.
///
/// `format_date` turns a timestamp into the calendar-day label the
/// presentation layer wants (it owns locale concerns); records mapping to
/// the same label land in the same [`DateGroup`]. Groups are created lazily
/// when their first record arrives, so no group is ever empty.
///
/// Lookup is a linear equality scan. Contribution pages are small (tens of
/// rows), so O(n·g) is fine here.
#[must_use]
pub fn group_by_date_and_time<F>(records: &[ContributionRecord], format_date: F) -> Vec<DateGroup>
where
    F: Fn(&DateTime<Utc>) -> String,
{
    let mut groups: Vec<DateGroup> = Vec::new();

    for record in records {
        let date = format_date(&record.timestamp);

        let date_group = if let Some(position) = groups.iter().position(|g| g.date == date) {
            &mut groups[position]
        } else {
            groups.push(DateGroup {
                date,
                items: Vec::new(),
            });
            let last = groups.len() - 1;
            &mut groups[last]
        };

        let time_group = if let Some(position) =
            date_group.items.iter().position(|g| g.matches(record))
        {
            &mut date_group.items[position]
        } else {
            date_group.items.push(TimeGroup {
                timestamp: record.timestamp,
                user_id: record.user_id.clone(),
                resource_type: record.resource_type,
                resource_id: record.resource_id,
                items: Vec::new(),
            });
            let last = date_group.items.len() - 1;
            &mut date_group.items[last]
        };

        time_group.items.push(record.clone());
    }

    groups
}
