// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// A generic selectable entity (band, genre, location, ...).
///
/// The multi-select and reorder widgets operate over these; the invoking
/// form owns the selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// The entity's canonical ID.
    pub id: i64,
    /// The display name.
    pub name: String,
}

impl ListItem {
    /// Creates a new `ListItem`.
    #[must_use]
    pub const fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// The operation recorded by a contribution entry.
///
/// The audit log is append-only; every catalog mutation lands here as
/// exactly one of these operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// A new row was created.
    Insert,
    /// An existing row was modified. Carries before/after snapshots.
    Update,
    /// A row was permanently deleted.
    Delete,
    /// A row was archived (soft-deleted).
    Archive,
    /// An archived row was restored.
    Restore,
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INSERT" => Ok(Self::Insert),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "ARCHIVE" => Ok(Self::Archive),
            "RESTORE" => Ok(Self::Restore),
            _ => Err(DomainError::InvalidOperation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Operation {
    /// Converts this operation to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Archive => "ARCHIVE",
            Self::Restore => "RESTORE",
        }
    }
}

/// The kind of entity a contribution record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// A concert or festival show.
    #[serde(rename = "concerts")]
    Concerts,
    /// A band.
    #[serde(rename = "bands")]
    Bands,
    /// A venue.
    #[serde(rename = "locations")]
    Locations,
    /// A recurring festival series.
    #[serde(rename = "festival_roots")]
    FestivalRoots,
    /// The concert-band join table.
    #[serde(rename = "j_concert_bands")]
    ConcertBands,
    /// The band-genre join table.
    #[serde(rename = "j_band_genres")]
    BandGenres,
}

impl FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concerts" => Ok(Self::Concerts),
            "bands" => Ok(Self::Bands),
            "locations" => Ok(Self::Locations),
            "festival_roots" => Ok(Self::FestivalRoots),
            "j_concert_bands" => Ok(Self::ConcertBands),
            "j_band_genres" => Ok(Self::BandGenres),
            _ => Err(DomainError::InvalidResourceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ResourceType {
    /// Converts this resource type to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Concerts => "concerts",
            Self::Bands => "bands",
            Self::Locations => "locations",
            Self::FestivalRoots => "festival_roots",
            Self::ConcertBands => "j_concert_bands",
            Self::BandGenres => "j_band_genres",
        }
    }

    /// Join-table resource types folded into a filter for this primary type.
    ///
    /// Filtering contributions by "concerts" also shows line-up edits;
    /// filtering by "bands" also shows genre edits.
    #[must_use]
    pub const fn related(&self) -> &'static [Self] {
        match self {
            Self::Concerts => &[Self::ConcertBands],
            Self::Bands => &[Self::BandGenres],
            _ => &[],
        }
    }
}

/// An immutable audit entry describing one operation on a catalog resource.
///
/// Deserializes directly from the audit-log row shape. The `ressource_*`
/// spelling is the backend's; it is mapped here and nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// When the operation happened.
    pub timestamp: DateTime<Utc>,
    /// The user who performed the operation, if known.
    pub user_id: Option<String>,
    /// The kind of resource that was touched.
    #[serde(rename = "ressource_type")]
    pub resource_type: ResourceType,
    /// The touched resource's ID, if the operation targets a single row.
    #[serde(rename = "ressource_id")]
    pub resource_id: Option<i64>,
    /// The operation that was performed.
    pub operation: Operation,
    /// Row snapshot before the operation. Present for updates.
    pub state_old: Option<Map<String, Value>>,
    /// Row snapshot after the operation. Present for updates.
    pub state_new: Option<Map<String, Value>>,
}

/// Reference to a band within an attendance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandRef {
    /// The band's canonical ID.
    pub id: i64,
}

/// The concert half of an attendance row.
///
/// Also the unit the streak engine works on, after deduplication by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertVisit {
    /// The concert's canonical ID.
    pub id: i64,
    /// The concert's (first) calendar day.
    pub date_start: NaiveDate,
    /// Whether this show is part of a festival.
    pub is_festival: bool,
}

/// One fact "this user saw this band at this concert".
///
/// Produced externally, one row per user/band/concert; immutable once
/// fetched. The wire shape nests the band and concert references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The attending user. The attendance query is already scoped to one
    /// user, so the backend may omit this field.
    #[serde(default)]
    pub user_id: String,
    /// The band that was seen.
    pub band: BandRef,
    /// The concert at which the band was seen.
    pub concert: ConcertVisit,
}
