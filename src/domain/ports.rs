use crate::domain::model::{Range, ValueInputOption};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Port to the backing tabular store. The Sheets REST client implements this
/// for production; tests substitute an in-memory grid.
#[async_trait]
pub trait ValueStore: Send + Sync {
    /// Fetch the cells covered by `range` as rows. The store may truncate
    /// trailing empty cells, so rows can be shorter than the range width.
    async fn get(&self, range: &Range) -> Result<Vec<Vec<String>>>;

    /// Append `rows` after the last non-empty row of the table anchored at
    /// `range`.
    async fn append(
        &self,
        range: &Range,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<()>;

    /// Overwrite exactly the cells covered by `range` with `rows`.
    async fn update(
        &self,
        range: &Range,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<()>;
}

/// Lets a shared store be handed to the service while callers keep a handle
/// on it, e.g. a test observing call counts.
#[async_trait]
impl<S: ValueStore + ?Sized> ValueStore for Arc<S> {
    async fn get(&self, range: &Range) -> Result<Vec<Vec<String>>> {
        self.as_ref().get(range).await
    }

    async fn append(
        &self,
        range: &Range,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<()> {
        self.as_ref().append(range, rows, input).await
    }

    async fn update(
        &self,
        range: &Range,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<()> {
        self.as_ref().update(range, rows, input).await
    }
}
