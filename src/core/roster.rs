use crate::domain::model::{
    AppendAnchor, CellAddress, Column, Range, Roster, ValueInputOption, SLOT_COUNT,
};
use crate::domain::ports::ValueStore;
use crate::utils::error::{Result, RosterError};

/// Sheet conventions, made explicit per deployment. `header_rows` is shared
/// by `list` and `delete`, so the row a caller sees at slot index `i` is
/// always the row `delete(c, i)` clears.
#[derive(Debug, Clone)]
pub struct RosterOptions {
    pub sheet_name: String,
    pub header_rows: u32,
    pub append_anchor: AppendAnchor,
    pub input_option: ValueInputOption,
}

impl Default for RosterOptions {
    fn default() -> Self {
        RosterOptions {
            sheet_name: "Sheet1".to_string(),
            header_rows: 1,
            append_anchor: AppendAnchor::FirstDataRow,
            input_option: ValueInputOption::Raw,
        }
    }
}

impl RosterOptions {
    /// First row holding roster data, 1-based.
    fn first_data_row(&self) -> u32 {
        self.header_rows + 1
    }
}

/// Stateless adapter between the HTTP surface and the backing store. Each
/// operation issues exactly one store call; nothing is cached in-process.
pub struct RosterService<S: ValueStore> {
    store: S,
    options: RosterOptions,
}

impl<S: ValueStore> RosterService<S> {
    pub fn new(store: S, options: RosterOptions) -> Self {
        Self { store, options }
    }

    /// Reads the full slot block and reshapes it into five name lists.
    pub async fn list(&self) -> Result<Roster> {
        let range = Range::column_block(
            &self.options.sheet_name,
            Column::slot(0)?,
            Column::slot(SLOT_COUNT - 1)?,
            self.options.first_data_row(),
        )?;

        tracing::debug!("fetching roster range {}", range);
        let rows = self.store.get(&range).await?;
        Ok(Roster::from_rows(&rows))
    }

    /// Appends `name` to the slot backed by `column_index`. Input is
    /// validated before any store call is issued.
    pub async fn add(&self, column_index: usize, name: &str) -> Result<()> {
        let column = Column::slot(column_index)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::validation("name must not be empty"));
        }

        let anchor_row = match self.options.append_anchor {
            AppendAnchor::HeaderRow => 1,
            AppendAnchor::FirstDataRow => self.options.first_data_row(),
        };
        let anchor = Range::cell(
            &self.options.sheet_name,
            CellAddress::new(column, anchor_row)?,
        );

        tracing::debug!("appending to slot {} at {}", column_index, anchor);
        self.store
            .append(&anchor, vec![vec![name.to_string()]], self.options.input_option)
            .await
    }

    /// Tombstones one roster entry. `row_index` is the zero-based position
    /// within the slot as returned by `list`; the cell is overwritten with
    /// an empty string and later rows keep their positions.
    pub async fn delete(&self, column_index: usize, row_index: u32) -> Result<()> {
        let column = Column::slot(column_index)?;
        let absolute_row = row_index
            .checked_add(self.options.first_data_row())
            .ok_or_else(|| {
                RosterError::validation(format!("rowIndex {row_index} is out of range"))
            })?;
        let cell = Range::cell(
            &self.options.sheet_name,
            CellAddress::new(column, absolute_row)?,
        );

        tracing::debug!("clearing roster cell {}", cell);
        self.store
            .update(&cell, vec![vec![String::new()]], self.options.input_option)
            .await
    }
}
