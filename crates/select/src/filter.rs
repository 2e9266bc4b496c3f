// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diacritic-insensitive candidate filtering.
//!
//! The query is user-typed free text, so matching is a literal substring
//! check over folded strings. No pattern matcher is ever built from the
//! raw input.

use stagelog_domain::ListItem;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips diacritics: NFD decomposition, then dropping combining marks.
///
/// "München" folds to "Munchen", so a plain-ASCII query still matches.
#[must_use]
pub fn fold_diacritics(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Case- and diacritic-insensitive substring match.
///
/// An empty query matches everything; the caller decides whether to render
/// the candidate list at all in that case.
#[must_use]
pub fn matches_query(name: &str, query: &str) -> bool {
    fold_diacritics(name)
        .to_lowercase()
        .contains(&fold_diacritics(query).to_lowercase())
}

/// Filters candidates by display name, preserving candidate order.
#[must_use]
pub fn filter_options<'a>(options: &'a [ListItem], query: &str) -> Vec<&'a ListItem> {
    options
        .iter()
        .filter(|option| matches_query(&option.name, query))
        .collect()
}
