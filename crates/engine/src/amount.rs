use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// Money amount represented as **integer paise**.
///
/// Use this type for every monetary value in the ledger (entry amounts,
/// running totals) to avoid floating-point drift. The ledger holds a single
/// fixed currency, so the rupee symbol is baked into the rendering.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount = Amount::new(150_00);
/// assert_eq!(amount.paise(), 15000);
/// assert_eq!(amount.to_string(), "₹150.00");
/// assert_eq!(amount.plain(), "150.00");
/// ```
///
/// Parsing accepts plain decimals with at most two fractional digits:
///
/// ```rust
/// use engine::Amount;
///
/// assert_eq!("45".parse::<Amount>().unwrap().paise(), 4500);
/// assert_eq!("150.0".parse::<Amount>().unwrap().paise(), 15000);
/// assert!("12.345".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates a new amount from integer paise.
    #[must_use]
    pub const fn new(paise: i64) -> Self {
        Self(paise)
    }

    /// Returns the raw value in paise.
    #[must_use]
    pub const fn paise(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Renders the amount without the currency symbol, the form persisted
    /// in ledger rows (`150.00`).
    #[must_use]
    pub fn plain(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}₹{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = ParseError;

    /// Parses a decimal string into paise.
    ///
    /// Accepts an optional leading `+`/`-` and at most two fractional
    /// digits. The comma is *not* a decimal separator here: entries use it
    /// to separate fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        if rest.is_empty() {
            return Err(ParseError::InvalidAmount);
        }

        let mut parts = rest.split('.');
        let rupees_str = parts.next().ok_or(ParseError::InvalidAmount)?;
        let paise_str = parts.next();
        if parts.next().is_some() {
            return Err(ParseError::InvalidAmount);
        }

        if rupees_str.is_empty() || !rupees_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidAmount);
        }
        let rupees: i64 = rupees_str.parse().map_err(|_| ParseError::InvalidAmount)?;

        let paise: i64 = match paise_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(ParseError::InvalidAmount);
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| ParseError::InvalidAmount)? * 10,
                    2 => frac.parse::<i64>().map_err(|_| ParseError::InvalidAmount)?,
                    _ => return Err(ParseError::InvalidAmount),
                }
            }
        };

        let total = rupees
            .checked_mul(100)
            .and_then(|v| v.checked_add(paise))
            .ok_or(ParseError::InvalidAmount)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or(ParseError::InvalidAmount)?
        } else {
            total
        };

        Ok(Amount(signed))
    }
}
