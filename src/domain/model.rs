use crate::utils::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of signup slots; each slot is backed by one spreadsheet column (A..E).
pub const SLOT_COUNT: usize = 5;

/// A letter-addressable sheet column. Letter addressing only covers A..Z,
/// so the index must stay below 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column(u8);

impl Column {
    pub fn new(index: usize) -> Result<Self> {
        if index >= 26 {
            return Err(RosterError::validation(format!(
                "column index {index} cannot be addressed by a single letter"
            )));
        }
        Ok(Column(index as u8))
    }

    /// A roster column: one of the five signup slots.
    pub fn slot(index: usize) -> Result<Self> {
        if index >= SLOT_COUNT {
            return Err(RosterError::validation(format!(
                "columnIndex must be between 0 and {}, got {index}",
                SLOT_COUNT - 1
            )));
        }
        Ok(Column(index as u8))
    }

    pub fn letter(&self) -> char {
        (b'A' + self.0) as char
    }
}

/// A single cell position. Rows are 1-based, matching A1 notation;
/// the constructor rejects row 0 so an off-by-one cannot produce `A0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    column: Column,
    row: u32,
}

impl CellAddress {
    pub fn new(column: Column, row: u32) -> Result<Self> {
        if row == 0 {
            return Err(RosterError::validation("cell rows are 1-based, got row 0"));
        }
        Ok(CellAddress { column, row })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column.letter(), self.row)
    }
}

/// A sheet-qualified A1 range. Built only through constructors so every
/// range string the store sees went through column/row validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    sheet: String,
    cells: String,
}

impl Range {
    /// A single cell, e.g. `Sheet1!B4`.
    pub fn cell(sheet: &str, address: CellAddress) -> Self {
        Range {
            sheet: sheet.to_string(),
            cells: address.to_string(),
        }
    }

    /// An open-ended column block starting at `start_row`, e.g. `Sheet1!A2:E`.
    pub fn column_block(sheet: &str, first: Column, last: Column, start_row: u32) -> Result<Self> {
        let start = CellAddress::new(first, start_row)?;
        Ok(Range {
            sheet: sheet.to_string(),
            cells: format!("{}:{}", start, last.letter()),
        })
    }

}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet, self.cells)
    }
}

/// How the store interprets written values. `Raw` stores names verbatim;
/// `UserEntered` would let the store parse `=SUM(...)` as a formula, which
/// is unsafe for free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueInputOption {
    #[default]
    Raw,
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// Where an add anchors its append request. The store scans downward from
/// the anchor for the next empty row in that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendAnchor {
    /// Anchor at row 1 and let the store skip past the header itself.
    HeaderRow,
    /// Anchor at the first row below the configured header block.
    #[default]
    FirstDataRow,
}

/// The signup roster: five ragged name lists, one per slot. Never cached;
/// recomputed from the store on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    slots: [Vec<String>; SLOT_COUNT],
}

impl Roster {
    /// Builds the roster from raw store rows. Rows may be ragged (trailing
    /// empty cells truncated by the store); cells past column E are ignored,
    /// and empty or whitespace-only cells are dropped.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut slots: [Vec<String>; SLOT_COUNT] = Default::default();
        for row in rows {
            for (c, cell) in row.iter().take(SLOT_COUNT).enumerate() {
                let trimmed = cell.trim();
                if !trimmed.is_empty() {
                    slots[c].push(trimmed.to_string());
                }
            }
        }
        Roster { slots }
    }

    pub fn slot(&self, index: usize) -> &[String] {
        &self.slots[index]
    }

    pub fn slots(&self) -> &[Vec<String>; SLOT_COUNT] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_letters_are_a_through_e() {
        let letters: Vec<char> = (0..SLOT_COUNT)
            .map(|i| Column::slot(i).unwrap().letter())
            .collect();
        assert_eq!(letters, vec!['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn slot_index_five_is_rejected() {
        assert!(Column::slot(5).is_err());
    }

    #[test]
    fn column_index_26_is_rejected() {
        assert!(Column::new(26).is_err());
        assert_eq!(Column::new(25).unwrap().letter(), 'Z');
    }

    #[test]
    fn cell_row_zero_is_rejected() {
        let col = Column::new(0).unwrap();
        assert!(CellAddress::new(col, 0).is_err());
    }

    #[test]
    fn cell_renders_a1_notation() {
        let addr = CellAddress::new(Column::new(2).unwrap(), 7).unwrap();
        assert_eq!(addr.to_string(), "C7");
    }

    #[test]
    fn range_formats_sheet_qualified() {
        let addr = CellAddress::new(Column::new(1).unwrap(), 4).unwrap();
        assert_eq!(Range::cell("Sheet1", addr).to_string(), "Sheet1!B4");

        let block = Range::column_block(
            "Sheet1",
            Column::new(0).unwrap(),
            Column::new(4).unwrap(),
            2,
        )
        .unwrap();
        assert_eq!(block.to_string(), "Sheet1!A2:E");
    }

    #[test]
    fn roster_drops_empty_cells_and_ignores_extra_columns() {
        let rows = vec![
            vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "".to_string(),
                "  ".to_string(),
                "Eve".to_string(),
                "Overflow".to_string(),
            ],
            vec!["Carol".to_string()],
        ];
        let roster = Roster::from_rows(&rows);
        assert_eq!(roster.slot(0), &["Alice", "Carol"]);
        assert_eq!(roster.slot(1), &["Bob"]);
        assert!(roster.slot(2).is_empty());
        assert!(roster.slot(3).is_empty());
        assert_eq!(roster.slot(4), &["Eve"]);
    }

    #[test]
    fn roster_serializes_as_five_arrays() {
        let roster = Roster::from_rows(&[vec!["Alice".to_string()]]);
        let json = serde_json::to_value(&roster).unwrap();
        assert_eq!(json, serde_json::json!([["Alice"], [], [], [], []]));
    }
}
