use async_trait::async_trait;

use crate::error::StoreError;

/// Capability object for the remote tabular ledger.
///
/// The store holds one header row followed by one row per expense, in
/// append order. Implementations deal in **data rows only**: the header
/// never crosses this boundary.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Appends one expense row after the last existing row.
    async fn append_row(&self, row: Vec<String>) -> Result<(), StoreError>;

    /// Returns every data row in store order. Trailing empty cells may be
    /// omitted, so rows can be shorter than five columns.
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, StoreError>;

    /// Returns the amount column in store order.
    async fn read_amounts(&self) -> Result<Vec<String>, StoreError>;
}
