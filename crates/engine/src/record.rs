use chrono::{NaiveDate, NaiveDateTime};

use crate::{amount::Amount, parsing::ExpenseDraft};

/// Header row of the ledger sheet, in column order.
pub const HEADER: [&str; 5] = ["Timestamp", "Date", "Amount", "Item", "Place"];

/// Format of the `Timestamp` column (second precision, local wall time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the `Date` column, the key of the day-bucketed query.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted expense: one five-column row of the ledger.
///
/// Created exactly once, when a valid entry is parsed; never mutated or
/// deleted afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRecord {
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub amount: Amount,
    pub item: String,
    pub place: String,
}

impl ExpenseRecord {
    /// Stamps a draft with the injected clock reading.
    #[must_use]
    pub fn from_draft(draft: ExpenseDraft, now: NaiveDateTime) -> Self {
        Self {
            timestamp: now,
            date: now.date(),
            amount: draft.amount,
            item: draft.item,
            place: draft.place,
        }
    }

    /// Renders the record as the row appended to the store.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.date.format(DATE_FORMAT).to_string(),
            self.amount.plain(),
            self.item.clone(),
            self.place.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_entry;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(12, 30, 5)
            .unwrap()
    }

    #[test]
    fn row_has_five_columns_in_order() {
        let record = ExpenseRecord::from_draft(parse_entry("45, AI - Samosa, Sion").unwrap(), noon());
        assert_eq!(
            record.to_row(),
            vec!["2026-08-07 12:30:05", "2026-08-07", "45.00", "AI - Samosa", "Sion"]
        );
    }

    #[test]
    fn missing_place_persists_as_empty_string() {
        let record = ExpenseRecord::from_draft(parse_entry("150, Lunch").unwrap(), noon());
        assert_eq!(record.to_row()[4], "");
    }
}
