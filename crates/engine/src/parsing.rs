use crate::{amount::Amount, error::ParseError};

/// A parsed expense entry, not yet stamped or persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: Amount,
    pub item: String,
    pub place: String,
}

/// Parses a free-text expense entry.
///
/// Rules:
/// - fields are comma-separated and individually trimmed
/// - `amount, item` => place stays empty
/// - `amount, item, place` => anything after the third field is ignored
/// - fewer than two fields is an invalid format
/// - the first field must be a non-negative decimal amount
///
/// Item and place are free text; no further validation.
pub fn parse_entry(text: &str) -> Result<ExpenseDraft, ParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() < 2 {
        return Err(ParseError::InvalidFormat);
    }

    let amount: Amount = parts[0].parse()?;
    if amount.is_negative() {
        return Err(ParseError::InvalidAmount);
    }

    Ok(ExpenseDraft {
        amount,
        item: parts[1].to_string(),
        place: parts.get(2).copied().unwrap_or("").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_fields_leave_place_empty() {
        let draft = parse_entry("150, Lunch").unwrap();
        assert_eq!(draft.amount, Amount::new(15000));
        assert_eq!(draft.item, "Lunch");
        assert_eq!(draft.place, "");
    }

    #[test]
    fn three_fields_set_the_place() {
        let draft = parse_entry("45, AI - Samosa, Sion").unwrap();
        assert_eq!(draft.amount, Amount::new(4500));
        assert_eq!(draft.item, "AI - Samosa");
        assert_eq!(draft.place, "Sion");
    }

    #[test]
    fn fields_beyond_the_third_are_ignored() {
        let draft = parse_entry("45, Chai, Stall, extra, noise").unwrap();
        assert_eq!(draft.item, "Chai");
        assert_eq!(draft.place, "Stall");
    }

    #[test]
    fn fields_are_trimmed() {
        let draft = parse_entry("  99.5 ,  Auto fare ,  Dadar  ").unwrap();
        assert_eq!(draft.amount, Amount::new(9950));
        assert_eq!(draft.item, "Auto fare");
        assert_eq!(draft.place, "Dadar");
    }

    #[test]
    fn single_field_is_an_invalid_format() {
        assert_eq!(parse_entry("150").unwrap_err(), ParseError::InvalidFormat);
        assert_eq!(parse_entry("").unwrap_err(), ParseError::InvalidFormat);
        assert_eq!(parse_entry("just words").unwrap_err(), ParseError::InvalidFormat);
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        assert_eq!(parse_entry("abc, Lunch").unwrap_err(), ParseError::InvalidAmount);
        assert_eq!(parse_entry(", Lunch").unwrap_err(), ParseError::InvalidAmount);
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert_eq!(parse_entry("-45, Refund").unwrap_err(), ParseError::InvalidAmount);
    }

    #[test]
    fn empty_item_is_allowed() {
        let draft = parse_entry("150,").unwrap();
        assert_eq!(draft.item, "");
        assert_eq!(draft.place, "");
    }
}
