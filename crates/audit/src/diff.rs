// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level diffing of update snapshots.
//!
//! Snapshots store flat, primitive-ish columns; the comparison is shallow
//! and per-key, not a semantic diff. Only the old state's keys are walked:
//! columns added in the new state are not reported. That asymmetry comes
//! from the original audit view and is kept on purpose.

use serde_json::{Map, Value};
use stagelog_domain::{ContributionRecord, Operation};

/// One changed column of an UPDATE, with its before and after values.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    /// The column name.
    pub field: String,
    /// The value before the update.
    pub old: Value,
    /// The value after the update. `Null` when the column was dropped.
    pub new: Value,
}

impl FieldChange {
    /// The before value as canonical JSON, for display.
    #[must_use]
    pub fn old_display(&self) -> String {
        self.old.to_string()
    }

    /// The after value as canonical JSON, for display.
    #[must_use]
    pub fn new_display(&self) -> String {
        self.new.to_string()
    }
}

/// Computes the changed fields between two snapshots.
///
/// Returns an empty list when either snapshot is absent (non-update
/// operations, or malformed data). Keys present only in `new` are not
/// emitted.
#[must_use]
pub fn field_changes(
    old: Option<&Map<String, Value>>,
    new: Option<&Map<String, Value>>,
) -> Vec<FieldChange> {
    let (Some(old), Some(new)) = (old, new) else {
        return Vec::new();
    };

    let mut changes = Vec::new();
    for (field, old_value) in old {
        let new_value = new.get(field).unwrap_or(&Value::Null);
        if new_value != old_value {
            changes.push(FieldChange {
                field: field.clone(),
                old: old_value.clone(),
                new: new_value.clone(),
            });
        }
    }

    changes
}

/// Computes the changed fields of a contribution record.
///
/// Diffing only activates for [`Operation::Update`]; every other operation
/// yields no field changes.
#[must_use]
pub fn update_changes(record: &ContributionRecord) -> Vec<FieldChange> {
    if record.operation != Operation::Update {
        return Vec::new();
    }

    field_changes(record.state_old.as_ref(), record.state_new.as_ref())
}
