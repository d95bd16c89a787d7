use serde::Serialize;

use crate::consts::rsvp_col;
use crate::models::{bool_cell, sheet_bool};

/// One data row of the `RSVP` table, in header order.
#[derive(Debug, Clone)]
pub struct GuestRow {
    pub guest_id: String,
    pub name: String,
    pub status: String,
    pub plus_one: bool,
    pub show_public: bool,
    pub timestamp: String,
}

impl GuestRow {
    /// Short rows read as blank cells, like an empty spreadsheet range.
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        Self {
            guest_id: cell(rsvp_col::GUEST_ID),
            name: cell(rsvp_col::NAME),
            status: cell(rsvp_col::STATUS),
            plus_one: sheet_bool(&cell(rsvp_col::PLUS_ONE)),
            show_public: sheet_bool(&cell(rsvp_col::SHOW_PUBLIC)),
            timestamp: cell(rsvp_col::TIMESTAMP),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.guest_id.clone(),
            self.name.clone(),
            self.status.clone(),
            bool_cell(self.plus_one),
            bool_cell(self.show_public),
            self.timestamp.clone(),
        ]
    }
}

/// The identity slice handed back by `validate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub guest_id: String,
    pub name: String,
}

/// A guest's own RSVP answer, as returned by `init`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpInfo {
    pub status: String,
    pub plus_one: bool,
    pub show_public: bool,
}

/// One entry of the aggregate guest list. Every row is included; filtering
/// by status or show_public is left to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestEntry {
    pub guest_id: String,
    pub name: String,
    pub status: String,
    pub plus_one: bool,
    pub show_public: bool,
}

impl From<GuestRow> for GuestEntry {
    fn from(row: GuestRow) -> Self {
        Self {
            guest_id: row.guest_id,
            name: row.name,
            status: row.status,
            plus_one: row.plus_one,
            show_public: row.show_public,
        }
    }
}
