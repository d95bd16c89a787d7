use crate::consts::rsvp_col;
use crate::errors::{Error, Result};
use crate::models::{
    bool_cell,
    guest::{Guest, GuestEntry, GuestRow, RsvpInfo},
};
use crate::ops::timestamp_now;
use crate::store::{SheetStore, Table};

/// Confirms a guest id is on the list before any further action.
pub fn validate_guest(store: &SheetStore, guest_id: &str) -> Result<Guest> {
    let sheet = store.sheet(Table::Rsvp);
    let (_, row) = sheet
        .find(rsvp_col::GUEST_ID, guest_id)?
        .ok_or(Error::InvalidGuest)?;
    let record = GuestRow::from_row(&row);
    Ok(Guest {
        guest_id: record.guest_id,
        name: record.name,
    })
}

pub fn get_rsvp(store: &SheetStore, guest_id: &str) -> Result<Option<RsvpInfo>> {
    let sheet = store.sheet(Table::Rsvp);
    Ok(sheet.find(rsvp_col::GUEST_ID, guest_id)?.map(|(_, row)| {
        let record = GuestRow::from_row(&row);
        RsvpInfo {
            status: record.status,
            plus_one: record.plus_one,
            show_public: record.show_public,
        }
    }))
}

/// Insert-or-update keyed on guest_id. An existing row keeps its name and
/// gets status/plus_one/show_public and a fresh timestamp overwritten.
pub fn upsert_rsvp(
    store: &SheetStore,
    guest_id: &str,
    name: &str,
    status: &str,
    plus_one: bool,
    show_public: bool,
) -> Result<()> {
    let sheet = store.sheet(Table::Rsvp);
    let now = timestamp_now();

    if let Some((index, _)) = sheet.find(rsvp_col::GUEST_ID, guest_id)? {
        sheet.update_cell(index, rsvp_col::STATUS, status)?;
        sheet.update_cell(index, rsvp_col::PLUS_ONE, &bool_cell(plus_one))?;
        sheet.update_cell(index, rsvp_col::SHOW_PUBLIC, &bool_cell(show_public))?;
        sheet.update_cell(index, rsvp_col::TIMESTAMP, &now)?;
        return Ok(());
    }

    let record = GuestRow {
        guest_id: guest_id.to_string(),
        name: name.to_string(),
        status: status.to_string(),
        plus_one,
        show_public,
        timestamp: now,
    };
    sheet.append(&record.to_row())
}

/// Every RSVP row, unfiltered. Clients decide what counts as "confirmed"
/// and what is public.
pub fn list_guests(store: &SheetStore) -> Result<Vec<GuestEntry>> {
    let sheet = store.sheet(Table::Rsvp);
    Ok(sheet
        .scan()?
        .iter()
        .map(|row| GuestEntry::from(GuestRow::from_row(row)))
        .collect())
}
