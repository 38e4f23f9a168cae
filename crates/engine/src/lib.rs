//! Core of the expense ledger: entry parsing, the recorder and the two
//! read-aggregate queries.
//!
//! The crate is I/O free. All persistence goes through the [`LedgerStore`]
//! capability injected at construction; the process keeps no copy of the
//! ledger between requests, every query re-reads the store.
use chrono::{NaiveDate, NaiveDateTime};

pub use amount::Amount;
pub use error::{LedgerError, ParseError, StoreError};
pub use parsing::{ExpenseDraft, parse_entry};
pub use record::{DATE_FORMAT, ExpenseRecord, HEADER, TIMESTAMP_FORMAT};
pub use store::LedgerStore;

mod amount;
mod error;
mod parsing;
mod record;
mod store;

type LedgerResult<T> = Result<T, LedgerError>;

/// One expense matched by the today-query.
#[derive(Clone, Debug, PartialEq)]
pub struct DayEntry {
    pub amount: Amount,
    pub item: String,
    pub place: String,
}

/// Result of the today-query.
///
/// `ledger_empty` distinguishes "nothing recorded at all" from "nothing
/// recorded today"; the two produce different replies.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySummary {
    pub entries: Vec<DayEntry>,
    pub total: Amount,
    pub ledger_empty: bool,
}

/// Recorder and query engine over a [`LedgerStore`].
#[derive(Clone, Debug)]
pub struct Ledger<S> {
    store: S,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Records a free-text expense entry stamped with `now`.
    ///
    /// Parses the entry, appends the five-column row and returns the
    /// created record. Nothing is appended when parsing fails, and a
    /// failed append is surfaced, not retried.
    pub async fn record(&self, text: &str, now: NaiveDateTime) -> LedgerResult<ExpenseRecord> {
        let draft = parsing::parse_entry(text)?;
        let record = ExpenseRecord::from_draft(draft, now);
        self.store.append_row(record.to_row()).await?;
        Ok(record)
    }

    /// Sums the whole amount column.
    ///
    /// Returns `None` when the ledger holds no expenses at all.
    pub async fn total(&self) -> LedgerResult<Option<Amount>> {
        let amounts = self.store.read_amounts().await?;
        if amounts.is_empty() {
            return Ok(None);
        }

        let mut total = Amount::ZERO;
        for (idx, raw) in amounts.iter().enumerate() {
            let amount = parse_row_amount(idx, raw)?;
            total = total.checked_add(amount).ok_or(LedgerError::Overflow)?;
        }
        Ok(Some(total))
    }

    /// Collects the expenses whose date column equals `date`, in store
    /// order, with their running sum.
    ///
    /// The date column is compared textually, as written; only the amount
    /// cell of a matching row must parse.
    pub async fn today(&self, date: NaiveDate) -> LedgerResult<DaySummary> {
        let rows = self.store.read_rows().await?;
        if rows.is_empty() {
            return Ok(DaySummary {
                entries: Vec::new(),
                total: Amount::ZERO,
                ledger_empty: true,
            });
        }

        let key = date.format(record::DATE_FORMAT).to_string();
        let mut entries = Vec::new();
        let mut total = Amount::ZERO;
        for (idx, row) in rows.iter().enumerate() {
            let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
            if cell(1) != key {
                continue;
            }

            let amount = parse_row_amount(idx, cell(2))?;
            total = total.checked_add(amount).ok_or(LedgerError::Overflow)?;
            entries.push(DayEntry {
                amount,
                item: cell(3).to_string(),
                place: cell(4).to_string(),
            });
        }

        Ok(DaySummary {
            entries,
            total,
            ledger_empty: false,
        })
    }
}

fn parse_row_amount(idx: usize, raw: &str) -> LedgerResult<Amount> {
    // Data rows start at sheet row 2, below the header.
    raw.parse()
        .map_err(|_| LedgerError::MalformedRow(format!("row {}: invalid amount {raw:?}", idx + 2)))
}
