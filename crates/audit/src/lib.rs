// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod diff;
mod group;
mod rows;

pub use diff::{FieldChange, field_changes, update_changes};
pub use group::{DateGroup, TimeGroup, group_by_date_and_time};
pub use rows::{ParsedRows, RowError, parse_rows};
