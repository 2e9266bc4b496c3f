// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-select widget state.
//!
//! Owns the candidate list, the live search query, and the ordered
//! selection. The selection is a list of candidate IDs; the invoking form
//! reads it back on submit. Selection order is meaningful (a concert's
//! line-up is ordered), so an optional reorderable mode composes the
//! reorder engine over it.
//!
//! Refocusing the search input after a toggle is a UI side effect and
//! stays with the presentation layer.

use crate::error::SelectError;
use crate::filter::filter_options;
use crate::reorder::reorder;
use stagelog_domain::ListItem;

/// State of one multi-select widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiSelect {
    options: Vec<ListItem>,
    selected: Vec<i64>,
    query: String,
    reorderable: bool,
}

impl MultiSelect {
    /// Creates a widget over the given candidates with nothing selected.
    #[must_use]
    pub fn new(options: Vec<ListItem>) -> Self {
        Self {
            options,
            selected: Vec::new(),
            query: String::new(),
            reorderable: false,
        }
    }

    /// Seeds the selection, e.g. when editing an existing concert.
    ///
    /// Duplicate IDs in the seed are dropped, keeping the first occurrence;
    /// the selection never contains duplicates.
    #[must_use]
    pub fn with_selected(mut self, ids: Vec<i64>) -> Self {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
        self
    }

    /// Enables reordering of the selection.
    #[must_use]
    pub const fn reorderable(mut self, reorderable: bool) -> Self {
        self.reorderable = reorderable;
        self
    }

    /// The current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the search query with what the user typed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Candidates matching the current query, in candidate order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&ListItem> {
        filter_options(&self.options, &self.query)
    }

    /// Whether the given candidate is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Appends a candidate to the selection. Idempotent: an already
    /// selected ID is left where it is.
    pub fn select(&mut self, id: i64) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    /// Toggles a candidate: removes it if selected (keeping the relative
    /// order of the rest), appends it otherwise. Clears the active query
    /// either way, so the next keystroke starts a fresh search.
    pub fn toggle(&mut self, id: i64) {
        if self.selected.contains(&id) {
            self.selected.retain(|selected| *selected != id);
        } else {
            self.selected.push(id);
        }
        self.query.clear();
    }

    /// Removes a candidate from the selection. No-op if absent; the query
    /// is left alone.
    pub fn remove(&mut self, id: i64) {
        self.selected.retain(|selected| *selected != id);
    }

    /// The ordered selection.
    #[must_use]
    pub fn selected(&self) -> &[i64] {
        &self.selected
    }

    /// The selection resolved against the candidates, in selection order.
    /// IDs with no matching candidate are skipped.
    #[must_use]
    pub fn selected_items(&self) -> Vec<&ListItem> {
        self.selected
            .iter()
            .filter_map(|id| self.options.iter().find(|option| option.id == *id))
            .collect()
    }

    /// Moves a selected entry from `source` to the drop position `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is not reorderable or an index is
    /// outside the selection.
    pub fn reorder_selected(&mut self, source: usize, target: usize) -> Result<(), SelectError> {
        if !self.reorderable {
            return Err(SelectError::NotReorderable);
        }

        self.selected = reorder(&self.selected, source, target)?;
        Ok(())
    }
}
