pub mod guest;
pub mod topic;

/// Sheet cells hold booleans as text. The original spreadsheet wrote both
/// `true` and `TRUE` depending on who filled the cell; anything else reads
/// as false.
pub fn sheet_bool(cell: &str) -> bool {
    cell == "true" || cell == "TRUE"
}

pub fn bool_cell(value: bool) -> String {
    value.to_string()
}
